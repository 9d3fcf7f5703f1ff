//! Word and prefix membership index
//!
//! Each lookup is a single hash-set query, which keeps the search's inner loop cheap.

use rustc_hash::FxHashSet;

/// Read-only dictionary supporting full-word and prefix lookups
///
/// The prefix set holds every non-empty prefix of every word, including the word
/// itself, so the word set is always a subset of the prefix set.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
    prefixes: FxHashSet<String>,
}

impl Dictionary {
    /// Build an index from a sequence of words
    ///
    /// Surrounding whitespace is ignored and blank entries are skipped. Matching is
    /// case-sensitive.
    ///
    /// # Examples
    /// ```
    /// use ruzzle_solver::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::new(["cat", "cats", " at "]);
    /// assert!(dict.is_word("cat"));
    /// assert!(dict.is_word("at"));
    /// assert!(dict.is_prefix("ca"));
    /// assert!(!dict.is_word("ca"));
    /// assert!(!dict.is_prefix("dog"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        for word in words {
            dict.insert(word.as_ref());
        }
        dict
    }

    fn insert(&mut self, word: &str) {
        let word = word.trim();
        if word.is_empty() || self.words.contains(word) {
            return;
        }

        for (i, ch) in word.char_indices() {
            let end = i + ch.len_utf8();
            if !self.prefixes.contains(&word[..end]) {
                self.prefixes.insert(word[..end].to_string());
            }
        }
        self.words.insert(word.to_string());
    }

    /// Check whether `s` is exactly one of the indexed words
    #[inline]
    #[must_use]
    pub fn is_word(&self, s: &str) -> bool {
        self.words.contains(s)
    }

    /// Check whether `s` is a non-empty prefix of at least one indexed word
    #[inline]
    #[must_use]
    pub fn is_prefix(&self, s: &str) -> bool {
        self.prefixes.contains(s)
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct prefixes
    #[must_use]
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    /// Iterate over the indexed words in arbitrary order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
