//! Game configuration resolution
//!
//! Turns operator-supplied values into a usable secret and attempt budget,
//! falling back to a random code and the default budget when they don't hold up.

use crate::core::Code;
use crate::game::Session;
use rand::Rng;
use std::fmt;
use std::num::NonZeroUsize;
use tracing::{info, instrument, warn};

/// Attempt budget used when none (or an unusable one) is given
pub const DEFAULT_MAX_ATTEMPTS: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// A resolved game setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub code: Code,
    pub max_attempts: NonZeroUsize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(code: Code, max_attempts: NonZeroUsize) -> Self {
        Self { code, max_attempts }
    }

    /// Start a fresh session with this setup
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(self.code, self.max_attempts)
    }
}

/// Something the operator supplied that had to be replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The proposed code was inadmissible, a random one is used instead
    RandomCode,
    /// The proposed attempt budget was not a positive integer
    InvalidAttempts(String),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RandomCode => write!(f, "Supplied code is not admissible, using a random one"),
            Self::InvalidAttempts(_) => write!(
                f,
                "Invalid number of attempts. Using default ({DEFAULT_MAX_ATTEMPTS})."
            ),
        }
    }
}

/// Configuration plus any fallbacks taken while building it
#[derive(Debug, Clone)]
pub struct Resolved {
    pub config: GameConfig,
    pub warnings: Vec<ConfigWarning>,
}

/// Resolve operator input into a game configuration
///
/// - `code`: used if admissible, otherwise a random code is drawn from `rng`
/// - `attempts`: parsed as a positive integer (surrounding whitespace allowed),
///   otherwise [`DEFAULT_MAX_ATTEMPTS`]
///
/// Never fails; every bad value has a fallback.
///
/// # Examples
/// ```
/// use codebreaker::config::resolve;
///
/// let resolved = resolve(Some("0123"), Some("5"), &mut rand::rng());
/// assert_eq!(resolved.config.code.to_string(), "0123");
/// assert_eq!(resolved.config.max_attempts.get(), 5);
/// assert!(resolved.warnings.is_empty());
/// ```
#[instrument(skip_all, fields(code_given = code.is_some(), attempts = attempts))]
pub fn resolve<R: Rng + ?Sized>(
    code: Option<&str>,
    attempts: Option<&str>,
    rng: &mut R,
) -> Resolved {
    let mut warnings = Vec::new();

    let max_attempts = match attempts {
        None => DEFAULT_MAX_ATTEMPTS,
        Some(raw) => parse_attempts(raw).unwrap_or_else(|| {
            warn!(value = raw, "Unusable attempt count, falling back to default");
            warnings.push(ConfigWarning::InvalidAttempts(raw.to_string()));
            DEFAULT_MAX_ATTEMPTS
        }),
    };

    // The supplied code may be the intended secret, so it is never logged
    let code = match code.map(Code::new) {
        Some(Ok(code)) => code,
        Some(Err(err)) => {
            info!(reason = %err, "Supplied code rejected, generating a random one");
            warnings.push(ConfigWarning::RandomCode);
            Code::random(rng)
        }
        None => Code::random(rng),
    };

    Resolved {
        config: GameConfig::new(code, max_attempts),
        warnings,
    }
}

fn parse_attempts(raw: &str) -> Option<NonZeroUsize> {
    raw.trim().parse::<NonZeroUsize>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_admissible;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn valid_inputs_are_used_as_given() {
        let resolved = resolve(Some("8765"), Some("3"), &mut rng());
        assert_eq!(resolved.config.code, Code::new("8765").unwrap());
        assert_eq!(resolved.config.max_attempts.get(), 3);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn missing_values_use_defaults_silently() {
        let resolved = resolve(None, None, &mut rng());
        assert!(is_admissible(&resolved.config.code.to_string()));
        assert_eq!(resolved.config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn invalid_code_falls_back_to_random() {
        for bad in ["0011", "012", "9876", "abcd", ""] {
            let resolved = resolve(Some(bad), None, &mut rng());
            assert!(is_admissible(&resolved.config.code.to_string()));
            assert_eq!(resolved.warnings, vec![ConfigWarning::RandomCode]);
        }
    }

    #[test]
    fn invalid_attempts_fall_back_to_default() {
        for bad in ["0", "-3", "ten", "", "2.5"] {
            let resolved = resolve(Some("0123"), Some(bad), &mut rng());
            assert_eq!(resolved.config.max_attempts, DEFAULT_MAX_ATTEMPTS);
            assert_eq!(
                resolved.warnings,
                vec![ConfigWarning::InvalidAttempts(bad.to_string())]
            );
        }
    }

    #[test]
    fn attempts_allow_surrounding_whitespace() {
        let resolved = resolve(None, Some(" 7 "), &mut rng());
        assert_eq!(resolved.config.max_attempts.get(), 7);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn seeded_rng_gives_repeatable_codes() {
        let a = resolve(None, None, &mut rng());
        let b = resolve(None, None, &mut rng());
        assert_eq!(a.config, b.config);
    }

    #[test]
    fn warning_messages() {
        assert_eq!(
            ConfigWarning::InvalidAttempts("x".into()).to_string(),
            "Invalid number of attempts. Using default (10)."
        );
        assert_eq!(
            ConfigWarning::RandomCode.to_string(),
            "Supplied code is not admissible, using a random one"
        );
    }

    #[test]
    fn config_builds_fresh_sessions() {
        let config = GameConfig::new(Code::new("0123").unwrap(), DEFAULT_MAX_ATTEMPTS);
        let session = config.session();
        assert_eq!(session.max_attempts(), DEFAULT_MAX_ATTEMPTS);
        assert_eq!(session.valid_attempts(), 0);
    }
}
