//! Square letter grid
//!
//! A board is an N×N grid of tiles stored in row-major order, together with a
//! precomputed 8-direction adjacency list for every cell.

use super::{Bonus, Tile};
use std::fmt;
use thiserror::Error;

/// Neighbour offsets as (row, column) deltas, clockwise starting from north.
///
/// The order only affects the order in which results are discovered.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Error type for malformed board input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Board must contain at least one tile")]
    Empty,
    #[error("Board must be square, but {0} letters is not a perfect square")]
    NotSquare(usize),
    #[error("Got {letters} letters but {bonuses} bonus digits")]
    LengthMismatch { letters: usize, bonuses: usize },
    #[error("Tile {index} is not a letter: {found:?}")]
    InvalidLetter { index: usize, found: char },
    #[error("Tile {index} has an invalid bonus digit {found:?} (expected 0-4)")]
    InvalidBonus { index: usize, found: char },
    #[error("Board size {0} is too large")]
    TooLarge(usize),
}

/// An N×N grid of tiles
///
/// Letters and bonuses are fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    tiles: Vec<Tile>,
    adjacency: Vec<Vec<usize>>,
}

impl Board {
    /// Create a board from row-major tiles
    ///
    /// # Errors
    /// Returns `BoardError` if there are no tiles, the tile count is not `size * size`,
    /// or a tile's letter is not alphabetic.
    pub fn new(size: usize, tiles: Vec<Tile>) -> Result<Self, BoardError> {
        if tiles.is_empty() {
            return Err(BoardError::Empty);
        }
        if size.checked_mul(size) != Some(tiles.len()) {
            return Err(BoardError::NotSquare(tiles.len()));
        }
        if let Some((index, tile)) = tiles
            .iter()
            .enumerate()
            .find(|(_, tile)| !tile.letter().is_alphabetic())
        {
            return Err(BoardError::InvalidLetter {
                index,
                found: tile.letter(),
            });
        }

        Ok(Self {
            size,
            adjacency: build_adjacency(size),
            tiles,
        })
    }

    /// Parse a board from a letter string and an optional bonus string
    ///
    /// Letters are read one per cell in row-major order and normalised to lowercase.
    /// Bonuses are one digit per cell (see [`Bonus::from_digit`]); `None` or an empty
    /// string means no bonuses anywhere.
    ///
    /// # Errors
    /// Returns `BoardError` if:
    /// - The letter string is empty or its length is not a perfect square
    /// - The bonus string length differs from the letter string length
    /// - A letter is not alphabetic, or a bonus digit is outside 0-4
    ///
    /// # Examples
    /// ```
    /// use ruzzle_solver::core::{Board, Bonus};
    ///
    /// let board = Board::parse("CATS", Some("0004")).unwrap();
    /// assert_eq!(board.size(), 2);
    /// assert_eq!(board.tile(0).letter(), 'c');
    /// assert_eq!(board.tile(3).bonus(), Bonus::TripleWord);
    ///
    /// assert!(Board::parse("abc", None).is_err());
    /// assert!(Board::parse("abcd", Some("0005")).is_err());
    /// ```
    pub fn parse(letters: &str, bonuses: Option<&str>) -> Result<Self, BoardError> {
        let letters: Vec<char> = letters.trim().chars().collect();
        if letters.is_empty() {
            return Err(BoardError::Empty);
        }

        let size = letters.len().isqrt();
        if size * size != letters.len() {
            return Err(BoardError::NotSquare(letters.len()));
        }

        let bonuses: Vec<Bonus> = match bonuses.map(str::trim).filter(|b| !b.is_empty()) {
            Some(digits) => {
                let digits: Vec<char> = digits.chars().collect();
                if digits.len() != letters.len() {
                    return Err(BoardError::LengthMismatch {
                        letters: letters.len(),
                        bonuses: digits.len(),
                    });
                }
                digits
                    .into_iter()
                    .enumerate()
                    .map(|(index, found)| {
                        Bonus::from_digit(found).ok_or(BoardError::InvalidBonus { index, found })
                    })
                    .collect::<Result<_, _>>()?
            }
            None => vec![Bonus::None; letters.len()],
        };

        let tiles = letters
            .into_iter()
            .zip(bonuses)
            .enumerate()
            .map(|(index, (found, bonus))| {
                let letter = single_lowercase(found)
                    .filter(|c| c.is_alphabetic())
                    .ok_or(BoardError::InvalidLetter { index, found })?;
                Ok(Tile::new(letter, bonus))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(size, tiles)
    }

    /// Side length of the board
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size * size`)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed board
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Get the tile at a flat cell index
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn tile(&self, index: usize) -> Tile {
        self.tiles[index]
    }

    /// All tiles in row-major order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// In-bounds neighbours of a cell, in fixed clockwise order
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    /// Check whether two cells touch horizontally, vertically or diagonally
    #[must_use]
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        a < self.len() && self.adjacency[a].contains(&b)
    }

    /// Convert a flat index to (row, column)
    #[inline]
    #[must_use]
    pub const fn position(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Iterate over the rows of the board
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.size)
    }
}

/// Lowercase form of `c`, if it is a single char
fn single_lowercase(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}

fn build_adjacency(size: usize) -> Vec<Vec<usize>> {
    (0..size * size)
        .map(|index| {
            let (row, col) = (index / size, index % size);
            DIRECTIONS
                .iter()
                .filter_map(|&(dr, dc)| {
                    let r = row.checked_add_signed(dr).filter(|&r| r < size)?;
                    let c = col.checked_add_signed(dc).filter(|&c| c < size)?;
                    Some(r * size + c)
                })
                .collect()
        })
        .collect()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_four_by_four() {
        let board = Board::parse("abcdefghijklmnop", Some("0000000000000000")).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.len(), 16);
        assert_eq!(board.tile(5).letter(), 'f');
        assert!(board.tiles().iter().all(|t| t.bonus() == Bonus::None));
    }

    #[test]
    fn parse_normalises_case() {
        let board = Board::parse("CaTs", None).unwrap();
        let letters: String = board.tiles().iter().map(|t| t.letter()).collect();
        assert_eq!(letters, "cats");
    }

    #[test]
    fn parse_bonus_digits() {
        let board = Board::parse("abcdefghi", Some("012340000")).unwrap();
        assert_eq!(board.tile(0).bonus(), Bonus::None);
        assert_eq!(board.tile(1).bonus(), Bonus::DoubleLetter);
        assert_eq!(board.tile(2).bonus(), Bonus::TripleLetter);
        assert_eq!(board.tile(3).bonus(), Bonus::DoubleWord);
        assert_eq!(board.tile(4).bonus(), Bonus::TripleWord);
    }

    #[test]
    fn parse_empty_bonus_string_means_no_bonuses() {
        let board = Board::parse("abcd", Some("")).unwrap();
        assert!(board.tiles().iter().all(|t| t.bonus() == Bonus::None));
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Board::parse("", None), Err(BoardError::Empty));
        assert_eq!(Board::parse("   ", None), Err(BoardError::Empty));
    }

    #[test]
    fn parse_rejects_non_square() {
        assert_eq!(Board::parse("abc", None), Err(BoardError::NotSquare(3)));
        assert_eq!(
            Board::parse("abcdefghijklmno", None),
            Err(BoardError::NotSquare(15))
        );
    }

    #[test]
    fn parse_rejects_length_mismatch() {
        assert_eq!(
            Board::parse("abcd", Some("000")),
            Err(BoardError::LengthMismatch {
                letters: 4,
                bonuses: 3
            })
        );
    }

    #[test]
    fn parse_rejects_invalid_letter() {
        assert_eq!(
            Board::parse("ab3d", None),
            Err(BoardError::InvalidLetter {
                index: 2,
                found: '3'
            })
        );
    }

    #[test]
    fn parse_rejects_invalid_bonus() {
        assert_eq!(
            Board::parse("abcd", Some("0050")),
            Err(BoardError::InvalidBonus {
                index: 2,
                found: '5'
            })
        );
        assert!(Board::parse("abcd", Some("00x0")).is_err());
    }

    #[test]
    fn new_rejects_wrong_tile_count() {
        let tiles = vec![Tile::new('a', Bonus::None); 5];
        assert_eq!(Board::new(2, tiles), Err(BoardError::NotSquare(5)));
    }

    #[test]
    fn new_rejects_non_alphabetic_tile() {
        let tiles = vec![
            Tile::new('c', Bonus::None),
            Tile::new('a', Bonus::None),
            Tile::new('3', Bonus::None),
            Tile::new('s', Bonus::None),
        ];
        assert_eq!(
            Board::new(2, tiles),
            Err(BoardError::InvalidLetter {
                index: 2,
                found: '3'
            })
        );
        assert!(Board::new(2, vec![Tile::new('3', Bonus::None); 4]).is_err());
    }

    #[test]
    fn new_accepts_alphabetic_tiles() {
        let tiles = vec![Tile::new('a', Bonus::DoubleWord); 9];
        let board = Board::new(3, tiles).unwrap();
        assert_eq!(board.len(), 9);
    }

    #[test]
    fn parse_rejects_multi_char_lowercase() {
        // 'İ' lowercases to 'i' plus a combining dot
        assert_eq!(
            Board::parse("abİd", None),
            Err(BoardError::InvalidLetter {
                index: 2,
                found: 'İ'
            })
        );
    }

    #[test]
    fn parse_accepts_single_char_non_ascii_letters() {
        let board = Board::parse("ÉaTs", None).unwrap();
        assert_eq!(board.tile(0).letter(), 'é');
    }

    #[test]
    fn single_tile_has_no_neighbors() {
        let board = Board::parse("x", None).unwrap();
        assert_eq!(board.size(), 1);
        assert!(board.neighbors(0).is_empty());
    }

    #[test]
    fn corner_edge_and_center_neighbor_counts() {
        let board = Board::parse("abcdefghijklmnop", None).unwrap();
        assert_eq!(board.neighbors(0).len(), 3); // corner
        assert_eq!(board.neighbors(1).len(), 5); // edge
        assert_eq!(board.neighbors(5).len(), 8); // interior
        assert_eq!(board.neighbors(15).len(), 3); // corner
    }

    #[test]
    fn neighbors_follow_clockwise_order() {
        // Cell 4 is the center of a 3×3 board
        let board = Board::parse("abcdefghi", None).unwrap();
        assert_eq!(board.neighbors(4), &[1, 2, 5, 8, 7, 6, 3, 0]);
        // Top-left corner: east, south-east, south
        assert_eq!(board.neighbors(0), &[1, 4, 3]);
    }

    #[test]
    fn neighbors_never_wrap_rows() {
        let board = Board::parse("abcdefghijklmnop", None).unwrap();
        // Cell 3 is the end of row 0; cell 4 starts row 1 and is not adjacent
        assert!(!board.are_adjacent(3, 4));
        assert!(board.are_adjacent(3, 6));
        assert!(board.are_adjacent(3, 7));
    }

    #[test]
    fn adjacency_is_symmetric() {
        let board = Board::parse("abcdefghijklmnopqrstuvwxy", None).unwrap();
        for a in 0..board.len() {
            for &b in board.neighbors(a) {
                assert!(board.are_adjacent(b, a), "{a} -> {b} not symmetric");
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn position_is_row_major() {
        let board = Board::parse("abcdefghi", None).unwrap();
        assert_eq!(board.position(0), (0, 0));
        assert_eq!(board.position(5), (1, 2));
        assert_eq!(board.position(7), (2, 1));
    }

    #[test]
    fn display_shows_rows_and_bonuses() {
        let board = Board::parse("cats", Some("0300")).unwrap();
        assert_eq!(board.to_string(), "c a[DW]\nt s");
    }
}
