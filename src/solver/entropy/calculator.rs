//! Shannon entropy calculation for Wordle feedback codes
//!
//! Given a guess and set of candidate targets, computes the expected
//! information gain of playing that guess.

use crate::core::{FeedbackCode, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidate targets
///
/// Returns the expected information gain in bits: 0 for a single target (or
/// none), never negative, at most `log2(targets.len())`.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the fraction of targets producing feedback code x.
///
/// # Examples
/// ```
/// use wordle_solver::core::Word;
/// use wordle_solver::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, targets: &[&Word]) -> f64 {
    if targets.len() <= 1 {
        return 0.0;
    }

    shannon_entropy(&group_by_code(guess, targets))
}

/// Count how many targets produce each feedback code for `guess`
pub(crate) fn group_by_code(guess: &Word, targets: &[&Word]) -> FxHashMap<FeedbackCode, usize> {
    let mut counts =
        FxHashMap::with_capacity_and_hasher(targets.len().min(256), Default::default());

    for &target in targets {
        let code = FeedbackCode::evaluate(target, guess);
        *counts.entry(code).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a feedback-code distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one code with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n codes
#[must_use]
pub fn shannon_entropy<S>(code_counts: &std::collections::HashMap<FeedbackCode, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = code_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    let entropy: f64 = code_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // A single group sums to -0.0
    if entropy > 0.0 { entropy } else { 0.0 }
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Word, targets: &[&Word]) -> GuessMetrics {
    if targets.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let groups = group_by_code(guess, targets);
    let total = targets.len() as f64;

    let expected_remaining: f64 = groups
        .values()
        .map(|&size| size as f64 * size as f64 / total)
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&groups),
        expected_remaining,
        max_partition: groups.values().copied().max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> FeedbackCode {
        FeedbackCode::parse(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 codes, each appears once = log2(4) = 2 bits
        let mut counts = FxHashMap::default();
        counts.insert(code("---"), 1);
        counts.insert(code("+--"), 1);
        counts.insert(code("!--"), 1);
        counts.insert(code("-+-"), 1);

        let entropy = shannon_entropy(&counts);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(code("---"), 10);

        let entropy = shannon_entropy(&counts);
        assert!(entropy.abs() < f64::EPSILON);
        assert!(entropy.is_sign_positive());
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let mut uniform = FxHashMap::default();
        let mut skewed = FxHashMap::default();
        for (i, s) in ["---", "+--", "!--", "-+-"].into_iter().enumerate() {
            uniform.insert(code(s), 25);
            skewed.insert(code(s), if i == 0 { 97 } else { 1 });
        }

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<FeedbackCode, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn single_target_scores_zero() {
        let guess = Word::new("crane").unwrap();
        let target = Word::new("slate").unwrap();
        assert!(calculate_entropy(&guess, &[&target]).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_non_negative_and_bounded() {
        let pool = words(&["slate", "irate", "trace", "raise", "crane"]);
        let refs: Vec<&Word> = pool.iter().collect();

        for guess in &pool {
            let entropy = calculate_entropy(guess, &refs);
            assert!(entropy >= 0.0);
            assert!(entropy <= (refs.len() as f64).log2() + 1e-9);
        }
    }

    #[test]
    fn calculate_entropy_all_same_code() {
        // Every target is all-Absent against zzzzz
        let guess = Word::new("zzzzz").unwrap();
        let pool = words(&["aaaaa", "bbbbb", "ccccc"]);
        let refs: Vec<&Word> = pool.iter().collect();

        assert!(calculate_entropy(&guess, &refs).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_perfect_split() {
        let guess = Word::new("slate").unwrap();
        let pool = words(&["slate", "zzzzz"]);
        let refs: Vec<&Word> = pool.iter().collect();

        assert!((calculate_entropy(&guess, &refs) - 1.0).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_empty_targets() {
        let guess = Word::new("crane").unwrap();
        assert!(calculate_entropy(&guess, &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn group_by_code_counts_every_target() {
        let guess = Word::new("crane").unwrap();
        let pool = words(&["slate", "crate", "grate"]);
        let refs: Vec<&Word> = pool.iter().collect();

        let groups = group_by_code(&guess, &refs);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups.values().sum::<usize>(), 3);
    }

    #[test]
    fn metrics_report_partitions() {
        let guess = Word::new("zzzzz").unwrap();
        let pool = words(&["aaaaa", "bbbbb", "zzzzz", "ccccc"]);
        let refs: Vec<&Word> = pool.iter().collect();

        let metrics = calculate_metrics(&guess, &refs);
        // Groups of 3 and 1
        assert_eq!(metrics.max_partition, 3);
        assert!((metrics.expected_remaining - 2.5).abs() < 1e-9);
        assert!(metrics.entropy > 0.0);
    }
}
