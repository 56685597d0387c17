//! Full-screen terminal interface
//!
//! An alternative front-end over the same game session as the console loop.

mod app;
mod rendering;

pub use app::{App, Message, Statistics, run_tui};
