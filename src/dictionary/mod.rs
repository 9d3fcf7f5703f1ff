//! Dictionary index and word list loading
//!
//! Provides the word/prefix index used by the search, plus a default word list
//! compiled into the binary.

mod embedded;
mod index;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use index::Dictionary;
pub use loader::DictionaryError;
