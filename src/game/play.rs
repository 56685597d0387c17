//! Interactive round loop
//!
//! Drives a [`Session`] with lines from a [`LineSource`] and narrates every
//! step to a [`Reporter`]. Both are injected so the loop runs the same against
//! a terminal or a script.

use super::session::{Session, SessionState, Turn};
use std::collections::VecDeque;
use std::io::{self, BufRead};
use tracing::{info, instrument};

/// Supplier of player input, one line at a time
pub trait LineSource {
    /// Read the next line without its terminator
    ///
    /// Returns `Ok(None)` once input has ended.
    ///
    /// # Errors
    /// Returns an I/O error if the underlying reader fails.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Line source over any buffered reader, typically stdin
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    /// Bytes that are not UTF-8 are replaced rather than rejected, so they
    /// reach the session as an ordinary inadmissible guess.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Pre-recorded input; ends when the script runs out
#[derive(Debug, Clone, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedLines {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Something the player should be told
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Once, before the first round
    Banner,
    /// Start of a round, with the zero-based round number
    RoundStart { round: usize },
    /// Waiting for input
    Prompt,
    /// What happened to the submitted line
    Turn(Turn),
}

/// Sink for game events
pub trait Reporter {
    /// Present one event to the player
    ///
    /// # Errors
    /// Returns an I/O error if the output cannot be written.
    fn report(&mut self, event: &Event) -> io::Result<()>;
}

/// Reporter that keeps every event in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: &Event) -> io::Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}

/// How a played session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { attempts: usize },
    Lost,
    Terminated,
}

impl Outcome {
    const fn from_session(session: &Session) -> Option<Self> {
        match session.state() {
            SessionState::AwaitingGuess => None,
            SessionState::Won => Some(Self::Won {
                attempts: session.valid_attempts(),
            }),
            SessionState::AttemptsExhausted => Some(Self::Lost),
            SessionState::InputTerminated => Some(Self::Terminated),
        }
    }
}

/// Play a session to completion
///
/// End of input is checked before anything else on every round, so a closed
/// stream always terminates the game without consuming an attempt.
///
/// # Errors
/// Returns an I/O error if reading input or reporting fails. A session that
/// is already finished is reported as its outcome without reading input.
///
/// # Examples
/// ```
/// use codebreaker::core::Code;
/// use codebreaker::game::{Outcome, RecordingReporter, ScriptedLines, Session, play};
/// use std::num::NonZeroUsize;
///
/// let mut session = Session::new(Code::new("0123").unwrap(), NonZeroUsize::new(10).unwrap());
/// let mut input = ScriptedLines::new(["4567", "0123"]);
/// let mut reporter = RecordingReporter::default();
///
/// let outcome = play(&mut session, &mut input, &mut reporter).unwrap();
/// assert_eq!(outcome, Outcome::Won { attempts: 2 });
/// ```
#[instrument(skip_all, fields(max_attempts = session.max_attempts().get()))]
pub fn play<L, R>(session: &mut Session, input: &mut L, reporter: &mut R) -> io::Result<Outcome>
where
    L: LineSource + ?Sized,
    R: Reporter + ?Sized,
{
    if let Some(outcome) = Outcome::from_session(session) {
        return Ok(outcome);
    }

    reporter.report(&Event::Banner)?;

    loop {
        reporter.report(&Event::RoundStart {
            round: session.round(),
        })?;
        reporter.report(&Event::Prompt)?;

        let line = input.next_line()?;
        let turn = session
            .submit(line.as_deref())
            .map_err(|e| io::Error::other(e.to_string()))?;
        reporter.report(&Event::Turn(turn))?;

        if let Some(outcome) = Outcome::from_session(session) {
            info!(?outcome, "Game over");
            return Ok(outcome);
        }
    }
}
