//! Word scoring
//!
//! Score = (sum of letter values × letter bonuses) × word bonuses, plus a flat
//! bonus of 5 points for every tile beyond the fourth.

use crate::core::Tile;

/// Words longer than this earn a length bonus
pub const LENGTH_BONUS_THRESHOLD: usize = 4;

/// Points added per tile beyond [`LENGTH_BONUS_THRESHOLD`]
pub const LENGTH_BONUS_PER_TILE: u64 = 5;

/// Base point value of a letter
///
/// Characters outside the table are worth nothing.
///
/// # Examples
/// ```
/// use ruzzle_solver::solver::scoring::letter_value;
///
/// assert_eq!(letter_value('e'), 1);
/// assert_eq!(letter_value('x'), 8);
/// assert_eq!(letter_value('?'), 0);
/// ```
#[must_use]
pub const fn letter_value(letter: char) -> u32 {
    match letter {
        'a' | 'e' | 'i' | 'l' | 'n' | 'o' | 'r' | 's' | 't' => 1,
        'd' | 'u' => 2,
        'g' | 'm' => 3,
        'b' | 'c' | 'f' | 'h' | 'p' | 'v' | 'w' | 'y' => 4,
        'k' => 5,
        'x' => 8,
        'j' | 'q' | 'z' => 10,
        _ => 0,
    }
}

/// Score a path of tiles
///
/// Every word-bonus tile multiplies the whole letter sum, so two double-word tiles
/// give ×4. The length bonus is added after the multipliers and is never scaled.
/// Arithmetic saturates at `u64::MAX` instead of overflowing.
///
/// # Examples
/// ```
/// use ruzzle_solver::core::{Bonus, Tile};
/// use ruzzle_solver::solver::scoring::score;
///
/// let at = [Tile::new('a', Bonus::None), Tile::new('t', Bonus::TripleWord)];
/// assert_eq!(score(&at), 6);
/// ```
#[must_use]
pub fn score(tiles: &[Tile]) -> u64 {
    let letter_sum: u64 = tiles.iter().fold(0, |sum, tile| {
        let value = letter_value(tile.letter()) * tile.bonus().letter_multiplier();
        sum.saturating_add(u64::from(value))
    });

    let word_multiplier: u64 = tiles.iter().fold(1, |product, tile| {
        product.saturating_mul(u64::from(tile.bonus().word_multiplier()))
    });

    letter_sum
        .saturating_mul(word_multiplier)
        .saturating_add(length_bonus(tiles.len()))
}

/// Flat bonus for a word of the given length
#[inline]
#[must_use]
pub const fn length_bonus(length: usize) -> u64 {
    if length > LENGTH_BONUS_THRESHOLD {
        ((length - LENGTH_BONUS_THRESHOLD) as u64).saturating_mul(LENGTH_BONUS_PER_TILE)
    } else {
        0
    }
}
