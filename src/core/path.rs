//! Found word paths
//!
//! A `WordPath` is the recorded copy of one walk across the board that spells a
//! dictionary word. It owns its data, so later backtracking in the search cannot
//! change it.

use super::{Board, Tile};
use std::fmt;

/// A walk of distinct, adjacent cells together with the word it spells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPath {
    word: String,
    cells: Vec<usize>,
    tiles: Vec<Tile>,
}

impl WordPath {
    /// Build a path by reading the given cells off the board, in order
    ///
    /// # Panics
    /// Panics if any cell index is out of range for the board.
    ///
    /// # Examples
    /// ```
    /// use ruzzle_solver::core::{Board, WordPath};
    ///
    /// let board = Board::parse("cats", None).unwrap();
    /// let path = WordPath::from_cells(&board, &[0, 1, 2]);
    /// assert_eq!(path.word(), "cat");
    /// assert_eq!(path.len(), 3);
    /// ```
    #[must_use]
    pub fn from_cells(board: &Board, cells: &[usize]) -> Self {
        let tiles: Vec<Tile> = cells.iter().map(|&cell| board.tile(cell)).collect();
        let word = tiles.iter().map(|tile| tile.letter()).collect();

        Self {
            word,
            cells: cells.to_vec(),
            tiles,
        }
    }

    /// The spelled word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Flat board indices in traversal order
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Tiles in traversal order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles in the path
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl fmt::Display for WordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
