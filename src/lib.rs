//! Ruzzle Solver
//!
//! Finds every dictionary word that can be traced across a square letter grid and
//! ranks the results by Ruzzle scoring (letter values, tile bonuses, length bonus).
//!
//! # Quick Start
//!
//! ```rust
//! use ruzzle_solver::core::Board;
//! use ruzzle_solver::dictionary::Dictionary;
//! use ruzzle_solver::solver::{Solver, rank};
//!
//! let dictionary = Dictionary::new(["cat", "cats", "at"]);
//! let board = Board::parse("cats", Some("0000")).unwrap();
//!
//! let ranked = rank(Solver::new(&dictionary).find_all_words(&board));
//! assert_eq!(ranked[0].word(), "cats");
//! assert_eq!(ranked[0].score, 7);
//! ```

// Core domain types
pub mod core;

// Word/prefix index and word lists
pub mod dictionary;

// Search, scoring and ranking
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
