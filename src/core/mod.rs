//! Core domain types for the code-breaking game
//!
//! This module contains the fundamental domain types: codes, scores and the
//! code space. Everything here is pure and testable.

pub mod candidates;
mod code;
mod score;

pub use code::{CODE_LENGTH, Code, CodeError, SYMBOLS, is_admissible};
pub use score::Score;
