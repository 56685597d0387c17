//! Guess feedback calculation and representation
//!
//! A score counts well-placed symbols (same symbol, same position) and
//! misplaced symbols (present in the code, different position).

use super::Code;
use super::code::CODE_LENGTH;
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    well_placed: u8,
    misplaced: u8,
}

impl Score {
    /// Every symbol well placed
    #[allow(clippy::cast_possible_truncation)]
    pub const PERFECT: Self = Self {
        well_placed: CODE_LENGTH as u8,
        misplaced: 0,
    };

    /// Create a score from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if the counts add up to more than 4
    #[inline]
    #[must_use]
    pub const fn new(well_placed: u8, misplaced: u8) -> Self {
        debug_assert!(
            (well_placed + misplaced) as usize <= CODE_LENGTH,
            "Score counts must add up to at most 4"
        );
        Self {
            well_placed,
            misplaced,
        }
    }

    /// Calculate the score when `guess` is played against `code`
    ///
    /// Both sides hold distinct symbols, so the number of shared symbols is a
    /// plain set intersection and nothing can be counted twice.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Code, Score};
    ///
    /// let code = Code::new("1234").unwrap();
    /// let guess = Code::new("1325").unwrap();
    /// let score = Score::calculate(&guess, &code);
    ///
    /// assert_eq!(score.well_placed(), 1);
    /// assert_eq!(score.misplaced(), 2);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, code: &Code) -> Self {
        let guess_symbols = guess.symbols();
        let code_symbols = code.symbols();

        let mut well_placed = 0u8;
        let mut shared = 0u8;

        for (position, &symbol) in guess_symbols.iter().enumerate() {
            if symbol == code_symbols[position] {
                well_placed += 1;
            }
            if code.contains(symbol) {
                shared += 1;
            }
        }

        Self {
            well_placed,
            misplaced: shared - well_placed,
        }
    }

    /// Number of symbols in the right position
    #[inline]
    #[must_use]
    pub const fn well_placed(self) -> u8 {
        self.well_placed
    }

    /// Number of symbols present in the code but in another position
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> u8 {
        self.misplaced
    }

    /// Check if this is a perfect match
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.well_placed as usize == CODE_LENGTH
    }

    /// Render as pegs: `●` per well-placed symbol, `○` per misplaced, `·` for the rest
    ///
    /// ```
    /// use codebreaker::core::Score;
    ///
    /// assert_eq!(Score::new(1, 2).pegs(), "●○○·");
    /// ```
    #[must_use]
    pub fn pegs(self) -> String {
        let well = usize::from(self.well_placed);
        let misplaced = usize::from(self.misplaced);
        let empty = CODE_LENGTH.saturating_sub(well + misplaced);

        format!("{}{}{}", "●".repeat(well), "○".repeat(misplaced), "·".repeat(empty))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} well placed, {} misplaced",
            self.well_placed, self.misplaced
        )
    }
}
