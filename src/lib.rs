//! Codebreaker
//!
//! A console code-breaking game: find the hidden 4-digit code (distinct digits 0-8)
//! from well-placed / misplaced feedback before the attempt budget runs out.
//!
//! # Quick Start
//!
//! ```rust
//! use codebreaker::core::{Code, Score};
//!
//! let secret = Code::new("1234").unwrap();
//! let guess = Code::new("1325").unwrap();
//!
//! let score = Score::calculate(&guess, &secret);
//! assert_eq!((score.well_placed(), score.misplaced()), (1, 2));
//! ```

// Core domain types
pub mod core;

// Round state machine and loop
pub mod game;

// Operator input resolution
pub mod config;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
