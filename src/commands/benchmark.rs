//! Benchmark command
//!
//! Solves a batch of random boards and reports search throughput.

use crate::core::{Board, BoardError, Bonus, Tile};
use crate::dictionary::Dictionary;
use crate::solver::{SearchOptions, Solver, rank};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Letter pool weighted roughly by English letter frequency
const LETTER_POOL: &[u8] = b"eeeeeeeeeeeeaaaaaaaaaiiiiiiiiioooooooonnnnnnrrrrrrttttttllllssssuuuuddddgggbbccmmppffhhvvwwyykjxqz";

/// Bonus digits to draw from; most tiles carry no bonus
const BONUS_POOL: &[u8] = b"0000000000001234";

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of boards to solve
    pub count: usize,
    /// Side length of each board
    pub size: usize,
    /// Seed for reproducible boards; random when `None`
    pub seed: Option<u64>,
    pub options: SearchOptions,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 100,
            size: 4,
            seed: None,
            options: SearchOptions::default(),
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Highest-scoring word seen on any board
    pub best_word: Option<(String, u64)>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Generate a random board
///
/// # Errors
///
/// Returns `BoardError::Empty` if `size` is zero, or `BoardError::TooLarge` if
/// `size * size` overflows.
pub fn random_board<R: Rng>(rng: &mut R, size: usize) -> Result<Board, BoardError> {
    let cells = size.checked_mul(size).ok_or(BoardError::TooLarge(size))?;
    let tiles = (0..cells)
        .map(|_| {
            let letter = char::from(LETTER_POOL[rng.random_range(0..LETTER_POOL.len())]);
            let digit = char::from(BONUS_POOL[rng.random_range(0..BONUS_POOL.len())]);
            Tile::new(letter, Bonus::from_digit(digit).unwrap_or_default())
        })
        .collect();

    Board::new(size, tiles)
}

/// Solve `config.count` random boards and collect statistics
///
/// # Errors
///
/// Returns `BoardError` if `config.size` cannot produce a board.
pub fn run_benchmark(
    dictionary: &Dictionary,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, BoardError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let boards = (0..config.count)
        .map(|_| random_board(&mut rng, config.size))
        .collect::<Result<Vec<_>, _>>()?;

    let pb = if config.show_progress {
        let pb = ProgressBar::new(boards.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let solver = Solver::with_options(dictionary, config.options);
    let start = Instant::now();
    let mut total_words = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut best_word: Option<(String, u64)> = None;

    for board in &boards {
        let ranked = rank(solver.find_all_words(board));

        total_words += ranked.len();
        min_words = min_words.min(ranked.len());
        max_words = max_words.max(ranked.len());

        if let Some(top) = ranked.first() {
            if best_word.as_ref().is_none_or(|(_, score)| top.score > *score) {
                best_word = Some((top.word().to_string(), top.score));
            }
        }

        pb.set_message(format!("{} words", ranked.len()));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let count = boards.len();

    tracing::info!(
        boards = count,
        total_words,
        elapsed = ?duration,
        "benchmark complete"
    );

    Ok(BenchmarkResult {
        boards: count,
        total_words,
        average_words: if count == 0 {
            0.0
        } else {
            total_words as f64 / count as f64
        },
        min_words: if count == 0 { 0 } else { min_words },
        max_words,
        best_word,
        duration,
        boards_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
