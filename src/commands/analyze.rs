//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word against
//! the full challenge list.

use crate::core::Word;
use crate::error::{Result, WordleError};
use crate::solver::entropy::{calculate_metrics, select_best_guess};
use crate::wordlists::WordList;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub worst_case: usize,
    pub total_candidates: usize,
    /// Best opener in the list and its entropy, for comparison
    pub best: Option<(String, f64)>,
}

/// Analyze the entropy of a word against every challenge word
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (empty, too long, or not ASCII letters)
/// - The word is not a permissible guess
pub fn analyze_word(word: &str, word_list: &WordList) -> Result<AnalysisResult> {
    let word_obj = Word::new(word).map_err(|source| WordleError::InvalidWord {
        word: word.to_string(),
        source,
    })?;

    if word_obj.len() != word_list.word_len() {
        return Err(WordleError::LengthMismatch {
            expected: word_list.word_len(),
            actual: word_obj.len(),
        });
    }
    let guess = word_list
        .find(word_obj.text())
        .ok_or_else(|| WordleError::UnknownWord(word_obj.text().to_string()))?;

    let candidates: Vec<&Word> = word_list.challenges().iter().collect();
    let metrics = calculate_metrics(guess, &candidates);
    let best = select_best_guess(word_list.permissible(), &candidates)
        .map(|(best, entropy)| (best.text().to_string(), entropy));

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        worst_case: metrics.max_partition,
        total_candidates: candidates.len(),
        best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_list() -> WordList {
        WordList::from_strs(
            &["crane", "slate", "irate", "crate", "grate", "adieu"],
            &["irate", "crate", "grate", "slate"],
        )
        .unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let list = setup_list();
        let result = analyze_word("CRANE", &list).unwrap();

        assert_eq!(result.word, "crane");
        // Splits into {irate, grate} {crate} {slate}
        assert!((result.entropy - 1.5).abs() < 1e-9);
        assert_eq!(result.worst_case, 2);
        assert_eq!(result.total_candidates, 4);
        assert!(result.expected_reduction >= 1.0);
    }

    #[test]
    fn analyze_reports_best_opener() {
        let list = setup_list();
        let result = analyze_word("adieu", &list).unwrap();

        let (best, best_entropy) = result.best.unwrap();
        assert_eq!(best, "crane");
        assert!(best_entropy >= result.entropy);
    }

    #[test]
    fn analyze_unknown_word() {
        let list = setup_list();
        assert!(matches!(
            analyze_word("zzzzz", &list),
            Err(WordleError::UnknownWord(_))
        ));
    }

    #[test]
    fn analyze_wrong_length() {
        let list = setup_list();
        assert!(matches!(
            analyze_word("cranes", &list),
            Err(WordleError::LengthMismatch { expected: 5, actual: 6 })
        ));
        assert!(matches!(
            analyze_word("cr4ne", &list),
            Err(WordleError::InvalidWord { .. })
        ));
    }

    #[test]
    fn entropy_properties() {
        let list = setup_list();
        let result = analyze_word("slate", &list).unwrap();

        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= (result.total_candidates as f64).log2());
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.total_candidates as f64);
    }
}
