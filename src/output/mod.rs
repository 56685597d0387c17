//! Terminal output formatting
//!
//! Message text for game events and the console reporter that prints them.

pub mod console;
pub mod formatters;

pub use console::ConsoleReporter;
pub use formatters::{Tone, event_lines, turn_lines};
