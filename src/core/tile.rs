//! Board tile representation
//!
//! A tile is one cell of the grid: a lowercase letter plus an optional score bonus.

use std::fmt;

/// Score bonus attached to a single tile
///
/// Encoded on input as a single digit, in declaration order (0-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bonus {
    /// No bonus
    #[default]
    None,
    /// Letter value counts double
    DoubleLetter,
    /// Letter value counts triple
    TripleLetter,
    /// Whole word score counts double
    DoubleWord,
    /// Whole word score counts triple
    TripleWord,
}

impl Bonus {
    /// Parse a bonus from its input digit
    ///
    /// Returns `None` for anything outside `'0'..='4'`.
    ///
    /// # Examples
    /// ```
    /// use ruzzle_solver::core::Bonus;
    ///
    /// assert_eq!(Bonus::from_digit('0'), Some(Bonus::None));
    /// assert_eq!(Bonus::from_digit('4'), Some(Bonus::TripleWord));
    /// assert_eq!(Bonus::from_digit('5'), None);
    /// ```
    #[must_use]
    pub const fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Self::None),
            '1' => Some(Self::DoubleLetter),
            '2' => Some(Self::TripleLetter),
            '3' => Some(Self::DoubleWord),
            '4' => Some(Self::TripleWord),
            _ => None,
        }
    }

    /// Input digit for this bonus (inverse of [`Bonus::from_digit`])
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::None => '0',
            Self::DoubleLetter => '1',
            Self::TripleLetter => '2',
            Self::DoubleWord => '3',
            Self::TripleWord => '4',
        }
    }

    /// Multiplier applied to this tile's own letter value
    #[inline]
    #[must_use]
    pub const fn letter_multiplier(self) -> u32 {
        match self {
            Self::DoubleLetter => 2,
            Self::TripleLetter => 3,
            _ => 1,
        }
    }

    /// Multiplier applied to the whole word containing this tile
    #[inline]
    #[must_use]
    pub const fn word_multiplier(self) -> u32 {
        match self {
            Self::DoubleWord => 2,
            Self::TripleWord => 3,
            _ => 1,
        }
    }

    /// Short label used when rendering boards (`DL`, `TL`, `DW`, `TW`)
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::DoubleLetter => Some("DL"),
            Self::TripleLetter => Some("TL"),
            Self::DoubleWord => Some("DW"),
            Self::TripleWord => Some("TW"),
        }
    }
}

/// A single board cell
///
/// Tiles are plain values. Whether a tile is part of the path being explored is
/// tracked by the search itself, never on the tile, so one board can be searched
/// from several threads at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    letter: char,
    bonus: Bonus,
}

impl Tile {
    #[must_use]
    pub const fn new(letter: char, bonus: Bonus) -> Self {
        Self { letter, bonus }
    }

    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn bonus(self) -> Bonus {
        self.bonus
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bonus.label() {
            Some(label) => write!(f, "{}[{label}]", self.letter),
            None => write!(f, "{}", self.letter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_digits_round_trip() {
        for digit in ['0', '1', '2', '3', '4'] {
            let bonus = Bonus::from_digit(digit).unwrap();
            assert_eq!(bonus.digit(), digit);
        }
    }

    #[test]
    fn bonus_rejects_invalid_digits() {
        assert_eq!(Bonus::from_digit('5'), None);
        assert_eq!(Bonus::from_digit('9'), None);
        assert_eq!(Bonus::from_digit('a'), None);
        assert_eq!(Bonus::from_digit(' '), None);
    }

    #[test]
    fn letter_multipliers() {
        assert_eq!(Bonus::None.letter_multiplier(), 1);
        assert_eq!(Bonus::DoubleLetter.letter_multiplier(), 2);
        assert_eq!(Bonus::TripleLetter.letter_multiplier(), 3);
        assert_eq!(Bonus::DoubleWord.letter_multiplier(), 1);
        assert_eq!(Bonus::TripleWord.letter_multiplier(), 1);
    }

    #[test]
    fn word_multipliers() {
        assert_eq!(Bonus::None.word_multiplier(), 1);
        assert_eq!(Bonus::DoubleLetter.word_multiplier(), 1);
        assert_eq!(Bonus::TripleLetter.word_multiplier(), 1);
        assert_eq!(Bonus::DoubleWord.word_multiplier(), 2);
        assert_eq!(Bonus::TripleWord.word_multiplier(), 3);
    }

    #[test]
    fn tile_display() {
        assert_eq!(Tile::new('a', Bonus::None).to_string(), "a");
        assert_eq!(Tile::new('q', Bonus::TripleWord).to_string(), "q[TW]");
    }
}
