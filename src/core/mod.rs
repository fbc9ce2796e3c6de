//! Core domain types for Wordle
//!
//! Words and the feedback evaluator. Everything here is pure and allocation-free
//! on the evaluation path.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackCode};
pub use word::{ALPHABET, MAX_WORD_LEN, Word, WordError};
