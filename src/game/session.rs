//! Round state machine for a single game
//!
//! A session owns the secret and the attempt budget. Each submitted line either
//! gets rejected (no attempt consumed), gets scored, or ends the game.

use crate::core::{Code, CodeError, Score};
use rustc_hash::FxHashSet;
use std::fmt;
use std::num::NonZeroUsize;
use tracing::{debug, info};

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuess,
    Won,
    AttemptsExhausted,
    InputTerminated,
}

impl SessionState {
    /// Whether no further input will be accepted
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// Why a line was turned away without consuming an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The line is not an admissible code
    Invalid(CodeError),
    /// The guess was already accepted earlier in this session
    Duplicate(Code),
}

/// Result of submitting one line to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Retryable; the round number does not advance
    Rejected(Rejection),
    /// Accepted and scored; `remaining` is always positive
    Scored { score: Score, remaining: usize },
    /// Guess matched the secret
    Won { attempts: usize },
    /// Last allowed guess missed; the secret is revealed
    Exhausted { score: Score, code: Code },
    /// Input ended before the game did
    Terminated,
}

/// Error returned when using a session incorrectly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    Finished(SessionState),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished(state) => {
                write!(f, "Session already finished ({state:?}), no more guesses accepted")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// A single game against one secret code
#[derive(Debug, Clone)]
pub struct Session {
    secret: Code,
    max_attempts: NonZeroUsize,
    valid_attempts: usize,
    tried: FxHashSet<Code>,
    history: Vec<(Code, Score)>,
    state: SessionState,
}

impl Session {
    /// Create a new session
    #[must_use]
    pub fn new(secret: Code, max_attempts: NonZeroUsize) -> Self {
        Self {
            secret,
            max_attempts,
            valid_attempts: 0,
            tried: FxHashSet::default(),
            history: Vec::with_capacity(max_attempts.get().min(64)),
            state: SessionState::AwaitingGuess,
        }
    }

    /// Submit one line of player input, or `None` for end of input
    ///
    /// # Errors
    /// Returns `SessionError::Finished` if the session already reached a
    /// terminal state.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Code;
    /// use codebreaker::game::{Session, Turn};
    /// use std::num::NonZeroUsize;
    ///
    /// let secret = Code::new("1234").unwrap();
    /// let mut session = Session::new(secret, NonZeroUsize::new(10).unwrap());
    ///
    /// assert!(matches!(session.submit(Some("1325")), Ok(Turn::Scored { .. })));
    /// assert_eq!(session.submit(Some("1234")), Ok(Turn::Won { attempts: 2 }));
    /// ```
    pub fn submit(&mut self, line: Option<&str>) -> Result<Turn, SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::Finished(self.state));
        }

        let Some(text) = line else {
            self.state = SessionState::InputTerminated;
            info!(attempts = self.valid_attempts, "Input ended, session terminated");
            return Ok(Turn::Terminated);
        };

        let guess = match Code::new(text) {
            Ok(guess) => guess,
            Err(err) => {
                debug!(error = %err, "Rejected inadmissible guess");
                return Ok(Turn::Rejected(Rejection::Invalid(err)));
            }
        };

        if !self.tried.insert(guess) {
            debug!("Rejected repeated guess");
            return Ok(Turn::Rejected(Rejection::Duplicate(guess)));
        }
        self.valid_attempts += 1;

        if guess == self.secret {
            self.history.push((guess, Score::PERFECT));
            self.state = SessionState::Won;
            info!(attempts = self.valid_attempts, "Code broken");
            return Ok(Turn::Won {
                attempts: self.valid_attempts,
            });
        }

        let score = Score::calculate(&guess, &self.secret);
        self.history.push((guess, score));
        debug!(
            attempt = self.valid_attempts,
            well_placed = score.well_placed(),
            misplaced = score.misplaced(),
            "Scored guess"
        );

        let remaining = self.remaining();
        if remaining == 0 {
            self.state = SessionState::AttemptsExhausted;
            info!(attempts = self.valid_attempts, "Attempt budget exhausted");
            return Ok(Turn::Exhausted {
                score,
                code: self.secret,
            });
        }

        Ok(Turn::Scored { score, remaining })
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Zero-based round number: the count of valid guesses so far
    #[inline]
    #[must_use]
    pub const fn round(&self) -> usize {
        self.valid_attempts
    }

    #[inline]
    #[must_use]
    pub const fn valid_attempts(&self) -> usize {
        self.valid_attempts
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> NonZeroUsize {
        self.max_attempts
    }

    /// Valid guesses still allowed
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.max_attempts.get().saturating_sub(self.valid_attempts)
    }

    /// Accepted guesses with their scores, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Code, Score)] {
        &self.history
    }

    /// The secret, once the game is over
    #[must_use]
    pub const fn code(&self) -> Option<&Code> {
        if self.state.is_terminal() {
            Some(&self.secret)
        } else {
            None
        }
    }
}
