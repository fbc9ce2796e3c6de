//! Opening table command
//!
//! Precomputes the first guess and the best second guess for every possible
//! first feedback, then writes the table as JSON.

use std::path::Path;

use tracing::info;

use crate::error::{Result, WordleError};
use crate::solver::OpeningTable;
use crate::wordlists::WordList;

/// Summary of a freshly built table
#[derive(Debug, Clone)]
pub struct OpeningSummary {
    pub first_guess: String,
    pub partitions: usize,
    pub second_guesses: usize,
    pub largest_partition: usize,
}

/// Build an opening table and save it to `output`
///
/// Without `first_guess` the highest-entropy opener is used.
///
/// # Errors
///
/// Returns an error if the forced first guess is not a permissible word, or
/// the file cannot be written.
pub fn build_opening(
    word_list: &WordList,
    first_guess: Option<&str>,
    output: &Path,
) -> Result<OpeningSummary> {
    let forced = first_guess
        .map(|text| {
            word_list
                .find(text)
                .ok_or_else(|| WordleError::UnknownWord(text.to_lowercase()))
        })
        .transpose()?;

    let table = OpeningTable::build(word_list, forced)?;
    table.save(output)?;
    info!(path = %output.display(), first_guess = %table.first_guess, "opening table written");

    Ok(OpeningSummary {
        first_guess: table.first_guess.clone(),
        partitions: table.candidates.len(),
        second_guesses: table.second_guesses.len(),
        largest_partition: table.candidates.values().map(Vec::len).max().unwrap_or(0),
    })
}
