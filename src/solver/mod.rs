//! Board solving
//!
//! The search engine, the scoring rule and result ranking.

mod engine;
pub mod ranking;
pub mod scoring;

pub use engine::{SearchOptions, Solver};
pub use ranking::{ScoredWord, best_per_word, rank};
pub use scoring::{letter_value, score};
