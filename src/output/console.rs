//! Line-oriented console reporter

use super::formatters::{PROMPT, Tone, event_lines};
use crate::game::{Event, Reporter};
use colored::Colorize;
use std::io::{self, Write};

/// Writes game events as text lines, optionally coloured
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Coloured reporter on stdout
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub const fn new(out: W) -> Self {
        Self { out, color: true }
    }

    /// Disable ANSI colours
    #[must_use]
    pub fn plain(mut self) -> Self {
        self.color = false;
        self
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        if !self.color {
            return writeln!(self.out, "{text}");
        }

        let styled = match tone {
            Tone::Info => text.normal(),
            Tone::Notice => text.yellow(),
            Tone::Success => text.bright_green().bold(),
            Tone::Failure => text.red(),
        };
        writeln!(self.out, "{styled}")
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: &Event) -> io::Result<()> {
        if matches!(event, Event::Prompt) {
            write!(self.out, "{PROMPT}")?;
            return self.out.flush();
        }

        for (tone, text) in event_lines(event) {
            self.write_line(tone, &text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;
    use crate::game::{ScriptedLines, Session, play};
    use std::num::NonZeroUsize;

    fn transcript(secret: &str, max_attempts: usize, lines: &[&str]) -> String {
        let mut session = Session::new(
            Code::new(secret).unwrap(),
            NonZeroUsize::new(max_attempts).unwrap(),
        );
        let mut input = ScriptedLines::new(lines.iter().copied());
        let mut reporter = ConsoleReporter::new(Vec::new()).plain();

        play(&mut session, &mut input, &mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn transcript_of_a_win() {
        let out = transcript("1234", 10, &["1325", "1234"]);
        assert_eq!(
            out,
            "Can you break the code? Enter a valid guess.\n\
             Round 0\n\
             >Well placed pieces: 1\n\
             Misplaced pieces: 2\n\
             Trials left: 9\n\
             Round 1\n\
             >Congratz! You did it!\n"
        );
    }

    #[test]
    fn transcript_of_a_loss() {
        let out = transcript("1234", 2, &["0123", "12", "0123", "5678"]);
        assert_eq!(
            out,
            "Can you break the code? Enter a valid guess.\n\
             Round 0\n\
             >Well placed pieces: 0\n\
             Misplaced pieces: 3\n\
             Trials left: 1\n\
             Round 1\n\
             >Wrong input! Try again w/ 4 unique digits.\n\
             Round 1\n\
             >You already tried this! Pick something else.\n\
             Round 1\n\
             >Well placed pieces: 0\n\
             Misplaced pieces: 0\n\
             You've used all attempts. Better luck next time!\n\
             The code was: 1234\n"
        );
    }

    #[test]
    fn transcript_of_end_of_input() {
        let out = transcript("1234", 10, &[]);
        assert_eq!(
            out,
            "Can you break the code? Enter a valid guess.\n\
             Round 0\n\
             >\n\
             [EOF detected. Exiting...]\n"
        );
    }

    #[test]
    fn colored_output_keeps_the_text() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.report(&Event::Banner).unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(out.contains("Can you break the code?"));
    }
}
