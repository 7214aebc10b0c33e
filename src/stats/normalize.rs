//! Word normalization
//!
//! A raw word becomes a key in three steps, in this order:
//! 1. blank check on the trimmed word (blank words are dropped)
//! 2. truncation of the *untrimmed* word to [`MAX_WORD_LEN`] characters
//! 3. Unicode lower-case folding
//!
//! Trimming only gates the pipeline: `"           1"` is not blank, so it is
//! kept, and its key is ten spaces.

/// Maximum key length, in characters
pub const MAX_WORD_LEN: usize = 10;

/// Normalize a raw word into its counting key, or `None` if it is blank
pub fn normalize_word(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }

    Some(truncate_chars(raw, MAX_WORD_LEN).to_lowercase())
}

/// Prefix of `s` holding at most `max_chars` characters
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
