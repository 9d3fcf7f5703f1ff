//! Result ranking
//!
//! Scores found paths and orders them best first.

use super::scoring::score;
use crate::core::WordPath;
use rustc_hash::FxHashSet;

/// A found path together with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub path: WordPath,
    pub score: u64,
}

impl ScoredWord {
    #[must_use]
    pub fn new(path: WordPath) -> Self {
        let score = score(path.tiles());
        Self { path, score }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        self.path.word()
    }
}

/// Score paths and sort them by descending score
///
/// The sort is stable: equal scores keep discovery order.
///
/// # Examples
/// ```
/// use ruzzle_solver::core::{Board, WordPath};
/// use ruzzle_solver::solver::ranking::rank;
///
/// let board = Board::parse("cats", None).unwrap();
/// let paths = vec![
///     WordPath::from_cells(&board, &[1, 2]),
///     WordPath::from_cells(&board, &[0, 1, 2, 3]),
/// ];
///
/// let ranked = rank(paths);
/// assert_eq!(ranked[0].word(), "cats");
/// assert_eq!(ranked[1].word(), "at");
/// ```
#[must_use]
pub fn rank(paths: Vec<WordPath>) -> Vec<ScoredWord> {
    let mut ranked: Vec<ScoredWord> = paths.into_iter().map(ScoredWord::new).collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Keep only the first entry for each distinct word
///
/// Applied to ranked output this keeps each word's highest-scoring path, with
/// ties going to the path discovered first.
#[must_use]
pub fn best_per_word(ranked: Vec<ScoredWord>) -> Vec<ScoredWord> {
    let mut seen = FxHashSet::default();
    ranked
        .into_iter()
        .filter(|entry| seen.insert(entry.word().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::dictionary::loader::{embedded, from_slice};
    use crate::solver::Solver;

    #[test]
    fn cats_scenario_ranked() {
        let dict = from_slice(&["cat", "at", "cats"]);
        let board = Board::parse("cats", None).unwrap();

        let ranked = rank(Solver::new(&dict).find_all_words(&board));
        let summary: Vec<(&str, u64)> = ranked.iter().map(|r| (r.word(), r.score)).collect();

        assert_eq!(summary, [("cats", 7), ("cat", 6), ("at", 2)]);
    }

    #[test]
    fn triple_word_scenario() {
        let dict = from_slice(&["at"]);
        let board = Board::parse("at", None);
        assert!(board.is_err()); // two tiles cannot form a square

        let board = Board::parse("atxx", Some("4000")).unwrap();
        let ranked = rank(Solver::new(&dict).find_all_words(&board));

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 6);
    }

    #[test]
    fn single_x_scenario() {
        let dict = from_slice(&["x"]);
        let board = Board::parse("x", None).unwrap();

        let ranked = rank(Solver::new(&dict).find_all_words(&board));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 8);
    }

    #[test]
    fn all_triple_word_board_ranks_without_overflow() {
        let dict = from_slice(&["zzzzzzzzzzzzzzzz"]);
        let board = Board::parse("zzzzzzzzzzzzzzzz", Some("4444444444444444")).unwrap();
        assert!(dict.is_word("zzzzzzzzzzzzzzzz"));

        // Snake through every row so the path covers all 16 tiles
        let cells = [0, 1, 2, 3, 7, 6, 5, 4, 8, 9, 10, 11, 15, 14, 13, 12];
        let ranked = rank(vec![WordPath::from_cells(&board, &cells)]);

        assert_eq!(ranked[0].word(), "zzzzzzzzzzzzzzzz");
        assert_eq!(ranked[0].score, 160 * 43_046_721 + 60);
    }

    #[test]
    fn ranked_output_is_descending() {
        let dict = embedded();
        let board = Board::parse("setrailnoctadmep", Some("0100300002004001")).unwrap();

        let ranked = rank(Solver::new(&dict).find_all_words(&board));
        assert!(ranked.len() > 1);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn ties_keep_discovery_order() {
        let board = Board::parse("atta", None).unwrap();
        let paths = vec![
            WordPath::from_cells(&board, &[0, 1]), // at
            WordPath::from_cells(&board, &[2, 3]), // ta
            WordPath::from_cells(&board, &[3, 2]), // at
        ];

        let ranked = rank(paths);
        assert_eq!(ranked[0].path.cells(), &[0, 1]);
        assert_eq!(ranked[1].path.cells(), &[2, 3]);
        assert_eq!(ranked[2].path.cells(), &[3, 2]);
    }

    #[test]
    fn best_per_word_keeps_highest_scoring_path() {
        // Second "at" path runs through the double-word tile
        let board = Board::parse("atta", Some("0003")).unwrap();
        let paths = vec![
            WordPath::from_cells(&board, &[0, 1]),
            WordPath::from_cells(&board, &[3, 2]),
        ];

        let unique = best_per_word(rank(paths));
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].path.cells(), &[3, 2]);
        assert_eq!(unique[0].score, 4);
    }

    #[test]
    fn best_per_word_removes_duplicates() {
        let dict = from_slice(&["aa", "aaa"]);
        let board = Board::parse("aaaa", None).unwrap();

        let ranked = rank(Solver::new(&dict).find_all_words(&board));
        assert!(ranked.len() > 2);

        let unique = best_per_word(ranked);
        let words: Vec<&str> = unique.iter().map(ScoredWord::word).collect();
        assert_eq!(words, ["aaa", "aa"]);
    }
}
