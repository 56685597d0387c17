//! Secret code and guess representation
//!
//! A Code is 4 distinct symbols drawn from the digits `0`-`8`. The same type
//! carries both the hidden secret and every accepted guess.

use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of symbols in a code
pub const CODE_LENGTH: usize = 4;

/// The symbol alphabet, in order
pub const SYMBOLS: [u8; 9] = *b"012345678";

/// A validated 4-symbol code with no repeated symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for inadmissible codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    OutOfRange(char),
    Repeated(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} digits, got {len}")
            }
            Self::OutOfRange(c) => write!(f, "Symbol '{c}' is outside the range 0-8"),
            Self::Repeated(c) => write!(f, "Symbol '{c}' appears more than once"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a new Code from text
    ///
    /// The text is taken as-is: no trimming or normalisation happens here.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - Length is not exactly 4 characters
    /// - A character lies outside `'0'..='8'`
    /// - A character appears more than once
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Code;
    ///
    /// let code = Code::new("0128").unwrap();
    /// assert_eq!(code.to_string(), "0128");
    ///
    /// assert!(Code::new("012").is_err());
    /// assert!(Code::new("0011").is_err());
    /// assert!(Code::new("0129").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CodeError> {
        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let mut symbols = [0u8; CODE_LENGTH];
        let mut seen = [false; SYMBOLS.len()];

        for (slot, c) in symbols.iter_mut().zip(text.chars()) {
            if !('0'..='8').contains(&c) {
                return Err(CodeError::OutOfRange(c));
            }
            // ASCII digit, so the byte value is the char
            let byte = c as u8;
            let index = usize::from(byte - b'0');
            if seen[index] {
                return Err(CodeError::Repeated(c));
            }
            seen[index] = true;
            *slot = byte;
        }

        Ok(Self(symbols))
    }

    /// Generate a uniformly random code using the given RNG
    ///
    /// Draws from a shrinking pool, so symbols are distinct by construction and
    /// every ordered arrangement of 4 out of 9 symbols is equally likely.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pool: Vec<u8> = SYMBOLS.to_vec();
        let mut symbols = [0u8; CODE_LENGTH];

        for slot in &mut symbols {
            let index = rng.random_range(0..pool.len());
            *slot = pool.remove(index);
        }

        Self(symbols)
    }

    /// Generate a random code from the thread-local RNG
    #[must_use]
    pub fn generate() -> Self {
        Self::random(&mut rand::rng())
    }

    /// Build a code from raw symbols without validation
    ///
    /// Callers guarantee the symbols are distinct bytes in `b'0'..=b'8'`.
    pub(crate) const fn from_symbols_unchecked(symbols: [u8; CODE_LENGTH]) -> Self {
        Self(symbols)
    }

    /// Get the code as a byte array
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Check if the code contains a symbol anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: u8) -> bool {
        self.0.contains(&symbol)
    }
}

/// Check whether `text` is an admissible code
///
/// Pure predicate over [`Code::new`]; never panics.
#[must_use]
pub fn is_admissible(text: &str) -> bool {
    Code::new(text).is_ok()
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.0 {
            write!(f, "{}", char::from(symbol))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn code_creation_valid() {
        let code = Code::new("0123").unwrap();
        assert_eq!(code.symbols(), b"0123");
        assert_eq!(code.to_string(), "0123");

        assert!(Code::new("0128").is_ok());
        assert!(Code::new("8765").is_ok());
    }

    #[test]
    fn code_creation_invalid_length() {
        assert_eq!(Code::new("012"), Err(CodeError::InvalidLength(3)));
        assert_eq!(Code::new("01234"), Err(CodeError::InvalidLength(5)));
        assert_eq!(Code::new(""), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn code_creation_out_of_range() {
        assert_eq!(Code::new("01a2"), Err(CodeError::OutOfRange('a')));
        assert_eq!(Code::new("0129"), Err(CodeError::OutOfRange('9')));
        assert_eq!(Code::new("-123"), Err(CodeError::OutOfRange('-')));
        assert_eq!(Code::new(" 012"), Err(CodeError::OutOfRange(' ')));
    }

    #[test]
    fn code_creation_repeated_symbol() {
        assert_eq!(Code::new("0011"), Err(CodeError::Repeated('0')));
        assert_eq!(Code::new("1231"), Err(CodeError::Repeated('1')));
    }

    #[test]
    fn code_length_counts_chars_not_bytes() {
        // Four chars, more than four bytes
        assert_eq!(Code::new("01é2"), Err(CodeError::OutOfRange('é')));
        assert_eq!(Code::new("0é"), Err(CodeError::InvalidLength(2)));
    }

    #[test]
    fn admissible_predicate() {
        assert!(is_admissible("0123"));
        assert!(is_admissible("0128"));
        assert!(!is_admissible("0011"));
        assert!(!is_admissible("012"));
        assert!(!is_admissible("01a2"));
        assert!(!is_admissible("0123\n"));
        assert!(!is_admissible(""));
    }

    #[test]
    fn code_symbol_lookup() {
        let code = Code::new("3072").unwrap();
        assert_eq!(code.symbols()[0], b'3');
        assert_eq!(code.symbols()[3], b'2');
        assert!(code.contains(b'7'));
        assert!(!code.contains(b'8'));
    }

    #[test]
    fn code_parse_via_from_str() {
        let code: Code = "4567".parse().unwrap();
        assert_eq!(code, Code::new("4567").unwrap());
        assert!("4566".parse::<Code>().is_err());
    }

    #[test]
    fn random_codes_are_admissible() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let code = Code::random(&mut rng);
            assert!(is_admissible(&code.to_string()), "{code} is not admissible");
        }
    }

    #[test]
    fn random_codes_cover_every_symbol_in_every_position() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [[false; 9]; CODE_LENGTH];

        for _ in 0..5000 {
            let code = Code::random(&mut rng);
            for (position, &symbol) in code.symbols().iter().enumerate() {
                seen[position][usize::from(symbol - b'0')] = true;
            }
        }

        for (position, symbols) in seen.iter().enumerate() {
            assert!(
                symbols.iter().all(|&hit| hit),
                "position {position} never produced some symbol: {symbols:?}"
            );
        }
    }

    #[test]
    fn generate_uses_thread_rng() {
        let code = Code::generate();
        assert!(is_admissible(&code.to_string()));
    }

    #[test]
    fn code_display_error_messages() {
        assert_eq!(
            CodeError::InvalidLength(2).to_string(),
            "Code must be exactly 4 digits, got 2"
        );
        assert_eq!(
            CodeError::Repeated('3').to_string(),
            "Symbol '3' appears more than once"
        );
    }
}
