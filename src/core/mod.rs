//! Core domain types for Ruzzle boards
//!
//! Tiles, boards and found paths. Everything here is plain data with no knowledge
//! of dictionaries or scoring.

mod board;
mod path;
mod tile;

pub use board::{Board, BoardError};
pub use path::WordPath;
pub use tile::{Bonus, Tile};
