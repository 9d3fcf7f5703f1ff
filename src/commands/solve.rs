//! Board solving command
//!
//! Parses one board, searches it and returns the ranked words.

use crate::core::{Board, BoardError};
use crate::dictionary::Dictionary;
use crate::solver::{ScoredWord, SearchOptions, Solver, best_per_word, rank};
use std::time::{Duration, Instant};

/// Configuration for solving a board
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// One letter per cell, row-major
    pub letters: String,
    /// One bonus digit (0-4) per cell; `None` for a plain board
    pub bonuses: Option<String>,
    pub options: SearchOptions,
    /// Collapse repeated words to their best-scoring path
    pub unique: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(letters: String, bonuses: Option<String>) -> Self {
        Self {
            letters,
            bonuses,
            options: SearchOptions::default(),
            unique: false,
        }
    }
}

/// Result of solving a board
#[derive(Debug)]
pub struct SolveResult {
    pub board: Board,
    /// Ranked words, best first
    pub words: Vec<ScoredWord>,
    /// Number of word paths found before any deduplication
    pub total_paths: usize,
    pub duration: Duration,
}

impl SolveResult {
    /// The highest-scoring word, if any were found
    #[must_use]
    pub fn best(&self) -> Option<&ScoredWord> {
        self.words.first()
    }
}

/// Solve one board against a dictionary
///
/// # Errors
///
/// Returns `BoardError` if the letters or bonuses are malformed. Nothing is searched
/// in that case.
pub fn solve_board(config: &SolveConfig, dictionary: &Dictionary) -> Result<SolveResult, BoardError> {
    let board = Board::parse(&config.letters, config.bonuses.as_deref())?;

    let start = Instant::now();
    let found = Solver::with_options(dictionary, config.options).find_all_words(&board);
    let total_paths = found.len();

    let mut words = rank(found);
    if config.unique {
        words = best_per_word(words);
    }
    let duration = start.elapsed();

    tracing::debug!(
        letters = %config.letters,
        total_paths,
        ranked = words.len(),
        elapsed = ?duration,
        "solved board"
    );

    Ok(SolveResult {
        board,
        words,
        total_paths,
        duration,
    })
}
