//! Stats module - The word counting core
//!
//! This module provides:
//! - Word normalization (blank check, truncation, case folding)
//! - The `WordsStatistics` contract and its hash map implementation

pub mod normalize;
pub mod words;

pub use normalize::{normalize_word, MAX_WORD_LEN};
pub use words::{WordStatistics, WordsStatistics};
