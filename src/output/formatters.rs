//! Formatting utilities for terminal output

use crate::core::{Board, Bonus, Tile};
use colored::{ColoredString, Colorize};

/// Render a tile as an uppercase letter, coloured by its bonus
#[must_use]
pub fn colored_tile(tile: Tile) -> ColoredString {
    let letter = tile.letter().to_uppercase().to_string();
    match tile.bonus() {
        Bonus::None => letter.bright_white().bold(),
        Bonus::DoubleLetter => letter.black().on_bright_cyan().bold(),
        Bonus::TripleLetter => letter.black().on_bright_blue().bold(),
        Bonus::DoubleWord => letter.black().on_bright_green().bold(),
        Bonus::TripleWord => letter.black().on_bright_red().bold(),
    }
}

/// Format a path as a sequence of (row, column) coordinates
#[must_use]
pub fn format_path(board: &Board, cells: &[usize]) -> String {
    cells
        .iter()
        .map(|&cell| {
            let (row, col) = board.position(cell);
            format!("({row},{col})")
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Legend line explaining bonus colours
#[must_use]
pub fn bonus_legend() -> String {
    [
        Bonus::DoubleLetter,
        Bonus::TripleLetter,
        Bonus::DoubleWord,
        Bonus::TripleWord,
    ]
    .into_iter()
    .filter_map(|bonus| {
        let label = bonus.label()?;
        Some(format!("{} {label}", colored_tile(Tile::new(' ', bonus))))
    })
    .collect::<Vec<_>>()
    .join("  ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
