//! Wordle Solver
//!
//! An entropy-maximising Wordle solver for words of any fixed length.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_solver::core::{FeedbackCode, Word};
//!
//! let target = Word::new("which").unwrap();
//! let guess = Word::new("whisk").unwrap();
//!
//! let feedback = FeedbackCode::evaluate(&target, &guess);
//! assert_eq!(feedback.to_string(), "!!!--");
//! ```
//!
//! A full game:
//!
//! ```rust
//! use wordle_solver::game::Game;
//! use wordle_solver::solver::{EntropyStrategy, Solver};
//! use wordle_solver::wordlists::WordList;
//!
//! let list = WordList::from_strs(
//!     &["crane", "slate", "irate", "crate", "grate"],
//!     &["irate", "crate", "grate"],
//! ).unwrap();
//!
//! let mut game = Game::with_target(&list, "grate").unwrap();
//! let mut solver = Solver::with_seed(EntropyStrategy, &list, 7);
//! let report = solver.solve(&mut game, Some(6), false).unwrap();
//!
//! assert_eq!(report.summary().1.map(|w| w.text()), Some("grate"));
//! ```

// Core domain types
pub mod core;

// Errors
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Game sessions
pub mod game;

// Settings
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
