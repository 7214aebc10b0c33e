//! Flows module - Operations combining sources, tokenizer and statistics
//!
//! Provides:
//! - count: Word frequency report over files or stdin
//! - normalize: Preview the key a raw word is counted under

pub mod count;
pub mod normalize;
