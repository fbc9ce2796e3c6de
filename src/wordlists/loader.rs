//! Word list loading utilities
//!
//! The on-disk format is tab-separated, one word per line:
//!
//! ```text
//! cigar	1
//! aahed	0
//! ```
//!
//! The second column flags whether the word can be a challenge target.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::info;

use super::WordList;
use crate::core::Word;
use crate::error::{Result, WordleError};

/// Load a word list from a TSV file
///
/// # Errors
///
/// Returns `WordleError::Io` if the file cannot be read and
/// `WordleError::Format` for the first malformed line.
///
/// # Examples
/// ```no_run
/// use wordle_solver::wordlists::loader::load_from_file;
///
/// let list = load_from_file("words.tsv").unwrap();
/// println!("{} guesses, {} challenges", list.permissible().len(), list.challenges().len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| WordleError::io(path, e))?;

    let list = parse_tsv(&content, path)?;
    info!(
        path = %path.display(),
        permissible = list.permissible().len(),
        challenges = list.challenges().len(),
        word_len = list.word_len(),
        "loaded word list"
    );
    Ok(list)
}

/// Parse TSV content; `origin` only labels error messages
///
/// # Errors
///
/// Returns `WordleError::Format` when a line does not have exactly two
/// columns, the flag is not `0`/`1`, the word is invalid or repeated, its
/// length differs from the first word, or no line is flagged as a challenge.
pub fn parse_tsv(content: &str, origin: impl Into<PathBuf>) -> Result<WordList> {
    let origin = origin.into();
    let format_error = |line: usize, reason: String| WordleError::Format {
        path: origin.clone(),
        line,
        reason,
    };

    let mut permissible = Vec::new();
    let mut challenges = Vec::new();
    let mut word_len: Option<usize> = None;
    let mut first_seen: FxHashMap<Word, usize> = FxHashMap::default();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split('\t').collect();
        let [text, flag] = fields.as_slice() else {
            return Err(format_error(
                line_no,
                format!("expected 2 tab-separated columns, found {}", fields.len()),
            ));
        };

        let word = Word::new(text.trim())
            .map_err(|e| format_error(line_no, format!("invalid word '{text}': {e}")))?;

        match word_len {
            None => word_len = Some(word.len()),
            Some(len) if len != word.len() => {
                return Err(format_error(
                    line_no,
                    format!("word '{word}' has {} letters, expected {len}", word.len()),
                ));
            }
            Some(_) => {}
        }

        if let Some(first) = first_seen.insert(word.clone(), line_no) {
            return Err(format_error(
                line_no,
                format!("duplicate word '{word}' (first on line {first})"),
            ));
        }

        match flag.trim() {
            "1" => {
                challenges.push(word.clone());
                permissible.push(word);
            }
            "0" => permissible.push(word),
            other => {
                return Err(format_error(
                    line_no,
                    format!("challenge flag must be 0 or 1, got '{other}'"),
                ));
            }
        }
    }

    if challenges.is_empty() {
        return Err(format_error(0, "no words flagged as challenges".to_string()));
    }

    WordList::new(permissible, challenges)
}
