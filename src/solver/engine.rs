//! Board search engine
//!
//! Depth-first backtracking from every cell, pruned by dictionary prefixes.

use crate::core::{Board, WordPath};
use crate::dictionary::Dictionary;
use rayon::prelude::*;

/// Search configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Shortest word (in tiles) worth recording; pruning is unaffected
    pub min_length: usize,
    /// Search starting cells in parallel
    pub parallel: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_length: 1,
            parallel: false,
        }
    }
}

/// Finds every dictionary word on a board
///
/// Holds only a shared reference to the dictionary, so one solver can serve any
/// number of boards, and several solvers can share a dictionary across threads.
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    options: SearchOptions,
}

impl<'a> Solver<'a> {
    /// Create a solver with default options
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_options(dictionary, SearchOptions::default())
    }

    #[must_use]
    pub const fn with_options(dictionary: &'a Dictionary, options: SearchOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn options(&self) -> SearchOptions {
        self.options
    }

    /// Find every path on the board that spells a dictionary word
    ///
    /// Each distinct path is its own result, so a word reachable in several ways
    /// appears several times. Results are in discovery order: by starting cell,
    /// then depth-first in clockwise neighbour order. The parallel mode returns
    /// exactly the same sequence.
    ///
    /// # Examples
    /// ```
    /// use ruzzle_solver::core::Board;
    /// use ruzzle_solver::dictionary::Dictionary;
    /// use ruzzle_solver::solver::Solver;
    ///
    /// let dict = Dictionary::new(["cat", "cats", "at"]);
    /// let board = Board::parse("cats", None).unwrap();
    ///
    /// let words: Vec<String> = Solver::new(&dict)
    ///     .find_all_words(&board)
    ///     .iter()
    ///     .map(|p| p.word().to_string())
    ///     .collect();
    /// assert_eq!(words, ["cat", "cats", "at"]);
    /// ```
    #[must_use]
    pub fn find_all_words(&self, board: &Board) -> Vec<WordPath> {
        let found: Vec<WordPath> = if self.options.parallel {
            (0..board.len())
                .into_par_iter()
                .map(|start| self.find_words_from(board, start))
                .collect::<Vec<_>>()
                .into_iter()
                .flatten()
                .collect()
        } else {
            let mut search = Search::new(self.dictionary, board, self.options.min_length);
            for start in 0..board.len() {
                search.extend(start);
            }
            search.found
        };

        tracing::debug!(
            size = board.size(),
            parallel = self.options.parallel,
            found = found.len(),
            "board search complete"
        );
        found
    }

    /// Find every word whose path begins at `start`
    ///
    /// # Panics
    /// Panics if `start >= board.len()`
    #[must_use]
    pub fn find_words_from(&self, board: &Board, start: usize) -> Vec<WordPath> {
        let mut search = Search::new(self.dictionary, board, self.options.min_length);
        search.extend(start);
        search.found
    }
}

/// State for one search invocation
///
/// `visited` and the path buffers are owned here and restored on every return
/// from `extend`, so they are clean again once a starting cell is exhausted.
struct Search<'s> {
    dictionary: &'s Dictionary,
    board: &'s Board,
    min_length: usize,
    visited: Vec<bool>,
    word: String,
    cells: Vec<usize>,
    found: Vec<WordPath>,
}

impl<'s> Search<'s> {
    fn new(dictionary: &'s Dictionary, board: &'s Board, min_length: usize) -> Self {
        Self {
            dictionary,
            board,
            min_length,
            visited: vec![false; board.len()],
            word: String::with_capacity(board.len()),
            cells: Vec::with_capacity(board.len()),
            found: Vec::new(),
        }
    }

    fn extend(&mut self, cell: usize) {
        let board = self.board;

        self.word.push(board.tile(cell).letter());
        self.cells.push(cell);

        // Prune before touching `visited`
        if self.dictionary.is_prefix(&self.word) {
            self.visited[cell] = true;

            if self.cells.len() >= self.min_length && self.dictionary.is_word(&self.word) {
                self.found.push(WordPath::from_cells(board, &self.cells));
            }

            for &next in board.neighbors(cell) {
                if !self.visited[next] {
                    self.extend(next);
                }
            }

            self.visited[cell] = false;
        }

        self.word.pop();
        self.cells.pop();
    }
}
