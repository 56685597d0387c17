//! Enumeration of the code space and filtering by feedback history

use super::code::{CODE_LENGTH, SYMBOLS};
use super::{Code, Score};
use rayon::prelude::*;

/// Number of admissible codes: 9 × 8 × 7 × 6
pub const CODE_SPACE: usize = 3024;

/// Every admissible code, in lexicographic order
#[must_use]
pub fn all_codes() -> Vec<Code> {
    let mut codes = Vec::with_capacity(CODE_SPACE);
    let mut current = [0u8; CODE_LENGTH];
    push_permutations(&mut codes, &mut current, 0);
    codes
}

fn push_permutations(codes: &mut Vec<Code>, current: &mut [u8; CODE_LENGTH], depth: usize) {
    if depth == CODE_LENGTH {
        codes.push(Code::from_symbols_unchecked(*current));
        return;
    }

    for &symbol in &SYMBOLS {
        if current[..depth].contains(&symbol) {
            continue;
        }
        current[depth] = symbol;
        push_permutations(codes, current, depth + 1);
    }
}

/// Filter the code space to codes consistent with the history
///
/// A code is consistent if, had it been the secret, every recorded guess
/// would have produced exactly the recorded score.
#[must_use]
pub fn consistent_codes(history: &[(Code, Score)]) -> Vec<Code> {
    all_codes()
        .into_par_iter()
        .filter(|candidate| {
            history
                .iter()
                .all(|(guess, observed)| Score::calculate(guess, candidate) == *observed)
        })
        .collect()
}

/// Count codes consistent with the history
#[must_use]
pub fn count_consistent(history: &[(Code, Score)]) -> usize {
    consistent_codes(history).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::code::is_admissible;

    #[test]
    fn code_space_size() {
        let codes = all_codes();
        assert_eq!(codes.len(), CODE_SPACE);
        assert_eq!(codes.first().map(ToString::to_string).as_deref(), Some("0123"));
        assert_eq!(codes.last().map(ToString::to_string).as_deref(), Some("8765"));
    }

    #[test]
    fn code_space_is_sorted_and_admissible() {
        let codes = all_codes();
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
        assert!(codes.iter().all(|c| is_admissible(&c.to_string())));
    }

    #[test]
    fn empty_history_keeps_everything() {
        assert_eq!(count_consistent(&[]), CODE_SPACE);
    }

    #[test]
    fn secret_always_survives_filtering() {
        let secret = Code::new("5081").unwrap();
        let history: Vec<(Code, Score)> = ["0123", "4567", "8012", "1850"]
            .iter()
            .map(|g| {
                let guess = Code::new(g).unwrap();
                (guess, Score::calculate(&guess, &secret))
            })
            .collect();

        let remaining = consistent_codes(&history);
        assert!(remaining.contains(&secret));
        assert!(remaining.len() < CODE_SPACE);
    }

    #[test]
    fn disjoint_feedback_excludes_guessed_symbols() {
        let guess = Code::new("0123").unwrap();
        let remaining = consistent_codes(&[(guess, Score::new(0, 0))]);

        // Only symbols 4-8 are left: 5 × 4 × 3 × 2
        assert_eq!(remaining.len(), 120);
        assert!(
            remaining
                .iter()
                .all(|c| c.symbols().iter().all(|s| !guess.contains(*s)))
        );
    }

    #[test]
    fn perfect_feedback_leaves_one_code() {
        let guess = Code::new("3456").unwrap();
        let remaining = consistent_codes(&[(guess, Score::PERFECT)]);
        assert_eq!(remaining, vec![guess]);
    }
}
