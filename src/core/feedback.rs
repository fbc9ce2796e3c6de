//! Wordle feedback evaluation and representation
//!
//! Feedback for a guess is one symbol per position:
//! - `!` Exact (letter in the right place)
//! - `+` Present (letter elsewhere in the target)
//! - `-` Absent
//!
//! A [`FeedbackCode`] packs those symbols as a base-3 number (Absent = 0,
//! Present = 1, Exact = 2, position `i` weighted by 3^i) next to the word
//! length, so codes are `Copy`, hashable and never allocate.

use std::fmt;

use super::word::{ALPHABET, MAX_WORD_LEN, letter_index};
use super::Word;
use crate::error::WordleError;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Exact,
}

impl Feedback {
    /// Text symbol used in word-list tooling and opening tables
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => '!',
            Self::Present => '+',
            Self::Absent => '-',
        }
    }

    /// Emoji square for terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse one symbol
    ///
    /// Accepts `!`/`G`/🟩, `+`/`Y`/🟨 and `-`/`_`/`.`/⬜ (letters in either case).
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '!' | 'G' | 'g' | '🟩' => Some(Self::Exact),
            '+' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    const fn digit(self) -> u64 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    const fn from_digit(digit: u64) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackCode {
    value: u64,
    len: u8,
}

impl FeedbackCode {
    /// Evaluate `guess` against the hidden `target`
    ///
    /// Exact matches are assigned first. The remaining target letters form a
    /// multiset, and the non-exact guess positions draw from it left to right:
    /// a letter that is still available becomes Present, otherwise Absent.
    ///
    /// # Panics
    /// Panics if the two words differ in length. Use [`Self::try_evaluate`]
    /// where the lengths are not already known to agree.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{FeedbackCode, Word};
    ///
    /// let w = |s: &str| Word::new(s).unwrap();
    /// assert_eq!(FeedbackCode::evaluate(&w("which"), &w("whisk")).to_string(), "!!!--");
    /// assert_eq!(FeedbackCode::evaluate(&w("eerie"), &w("where")).to_string(), "--++!");
    /// assert_eq!(FeedbackCode::evaluate(&w("where"), &w("eerie")).to_string(), "+-+-!");
    /// ```
    #[must_use]
    pub fn evaluate(target: &Word, guess: &Word) -> Self {
        assert_eq!(
            target.len(),
            guess.len(),
            "length mismatch: target '{target}' vs guess '{guess}'"
        );
        Self::compute(target.chars(), guess.chars())
    }

    /// Fallible version of [`Self::evaluate`]
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` when the words differ in length.
    pub fn try_evaluate(target: &Word, guess: &Word) -> Result<Self, WordleError> {
        if target.len() != guess.len() {
            return Err(WordleError::LengthMismatch {
                expected: target.len(),
                actual: guess.len(),
            });
        }
        Ok(Self::compute(target.chars(), guess.chars()))
    }

    #[inline]
    fn compute(target: &[u8], guess: &[u8]) -> Self {
        let mut exact: u32 = 0;
        let mut available = [0u8; ALPHABET];

        for (i, (&t, &g)) in target.iter().zip(guess).enumerate() {
            if t == g {
                exact |= 1 << i;
            } else {
                available[letter_index(t)] += 1;
            }
        }

        let mut value = 0u64;
        let mut place = 1u64;
        for (i, &g) in guess.iter().enumerate() {
            let feedback = if exact & (1 << i) != 0 {
                Feedback::Exact
            } else {
                let slot = &mut available[letter_index(g)];
                if *slot > 0 {
                    *slot -= 1;
                    Feedback::Present
                } else {
                    Feedback::Absent
                }
            };
            value += feedback.digit() * place;
            place *= 3;
        }

        Self {
            value,
            len: guess.len() as u8,
        }
    }

    /// Build a code from explicit per-position feedback
    ///
    /// # Panics
    /// Panics if more than [`MAX_WORD_LEN`] symbols are given.
    #[must_use]
    pub fn from_feedback(symbols: &[Feedback]) -> Self {
        assert!(symbols.len() <= MAX_WORD_LEN, "feedback code too long");
        let value = symbols
            .iter()
            .rev()
            .fold(0u64, |acc, fb| acc * 3 + fb.digit());
        Self {
            value,
            len: symbols.len() as u8,
        }
    }

    /// Every position Absent; what a game returns for an illegal guess
    #[must_use]
    pub fn all_absent(len: usize) -> Self {
        Self::from_feedback(&vec![Feedback::Absent; len])
    }

    /// Every position Exact
    #[must_use]
    pub fn all_exact(len: usize) -> Self {
        Self::from_feedback(&vec![Feedback::Exact; len])
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Per-position feedback, left to right
    pub fn iter(self) -> impl Iterator<Item = Feedback> {
        let mut rest = self.value;
        (0..self.len()).map(move |_| {
            let fb = Feedback::from_digit(rest % 3);
            rest /= 3;
            fb
        })
    }

    /// True when every position is Exact
    #[must_use]
    pub fn is_solved(self) -> bool {
        self.iter().all(|fb| fb == Feedback::Exact)
    }

    /// How many positions carry the given feedback
    #[must_use]
    pub fn count(self, kind: Feedback) -> usize {
        self.iter().filter(|&fb| fb == kind).count()
    }

    /// Parse a code like `"!+--!"` (aliases: `G`/`Y`/`_`, emoji squares)
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::FeedbackCode;
    ///
    /// let a = FeedbackCode::parse("!+-").unwrap();
    /// let b = FeedbackCode::parse("gy_").unwrap();
    /// assert_eq!(a, b);
    /// assert!(FeedbackCode::parse("!x-").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let symbols: Option<Vec<Feedback>> = s.chars().map(Feedback::from_symbol).collect();
        let symbols = symbols?;

        if symbols.is_empty() || symbols.len() > MAX_WORD_LEN {
            return None;
        }

        Some(Self::from_feedback(&symbols))
    }

    /// Render as emoji squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.iter().map(Feedback::emoji).collect()
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fb in self.iter() {
            write!(f, "{}", fb.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for FeedbackCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback code: {s}"))
    }
}
