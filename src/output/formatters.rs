//! Plain-text messages for game events

use crate::core::Score;
use crate::game::{Event, Rejection, Turn};

/// Emphasis for a line of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Notice,
    Success,
    Failure,
}

pub const BANNER: &str = "Can you break the code? Enter a valid guess.";
pub const PROMPT: &str = ">";
pub const WRONG_INPUT: &str = "Wrong input! Try again w/ 4 unique digits.";
pub const ALREADY_TRIED: &str = "You already tried this! Pick something else.";
pub const WON: &str = "Congratz! You did it!";
pub const EXHAUSTED: &str = "You've used all attempts. Better luck next time!";
pub const END_OF_INPUT: &str = "[EOF detected. Exiting...]";

/// Lines to print for an event, in order
///
/// [`Event::Prompt`] has no lines of its own: it is written without a line
/// break by the console.
#[must_use]
pub fn event_lines(event: &Event) -> Vec<(Tone, String)> {
    match event {
        Event::Banner => vec![(Tone::Info, BANNER.to_string())],
        Event::RoundStart { round } => vec![(Tone::Info, format!("Round {round}"))],
        Event::Prompt => Vec::new(),
        Event::Turn(turn) => turn_lines(turn),
    }
}

/// Lines to print for the result of one submitted line
#[must_use]
pub fn turn_lines(turn: &Turn) -> Vec<(Tone, String)> {
    match turn {
        Turn::Rejected(Rejection::Invalid(_)) => vec![(Tone::Notice, WRONG_INPUT.to_string())],
        Turn::Rejected(Rejection::Duplicate(_)) => {
            vec![(Tone::Notice, ALREADY_TRIED.to_string())]
        }
        Turn::Scored { score, remaining } => {
            let mut lines = score_lines(*score);
            lines.push((Tone::Info, format!("Trials left: {remaining}")));
            lines
        }
        Turn::Won { .. } => vec![(Tone::Success, WON.to_string())],
        Turn::Exhausted { score, code } => {
            let mut lines = score_lines(*score);
            lines.push((Tone::Failure, EXHAUSTED.to_string()));
            lines.push((Tone::Failure, format!("The code was: {code}")));
            lines
        }
        // The blank line closes the pending prompt
        Turn::Terminated => vec![
            (Tone::Info, String::new()),
            (Tone::Info, END_OF_INPUT.to_string()),
        ],
    }
}

fn score_lines(score: Score) -> Vec<(Tone, String)> {
    vec![
        (
            Tone::Info,
            format!("Well placed pieces: {}", score.well_placed()),
        ),
        (Tone::Info, format!("Misplaced pieces: {}", score.misplaced())),
    ]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) * width) / max
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
