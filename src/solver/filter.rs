//! Candidate narrowing

use crate::core::{FeedbackCode, Word};

/// Keep the candidates that would have produced `observed` for `guess`
///
/// Order is preserved and nothing is ever added, so applying the same
/// `(guess, observed)` twice is a no-op the second time.
#[must_use]
pub fn filter_candidates<'a>(
    candidates: &[&'a Word],
    guess: &Word,
    observed: FeedbackCode,
) -> Vec<&'a Word> {
    candidates
        .iter()
        .copied()
        .filter(|&candidate| {
            candidate.len() == guess.len() && FeedbackCode::evaluate(candidate, guess) == observed
        })
        .collect()
}
