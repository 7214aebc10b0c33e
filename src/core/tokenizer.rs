//! Splitting text into raw words
//!
//! Words produced here are *raw*: they are handed to the statistics as-is
//! and normalized there.

use once_cell::sync::Lazy;
use regex::Regex;

/// Letters, digits, apostrophes and hyphens, in any script
static LETTERS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}'’-]+").expect("Invalid LETTERS_RE regex"));

/// How text is cut into words
#[derive(Debug, Clone, Default)]
pub enum Splitter {
    /// Runs of non-whitespace
    #[default]
    Whitespace,
    /// Runs of letters/digits, punctuation dropped
    Letters,
    /// Every match of a user-supplied regex
    Pattern(Regex),
}

impl Splitter {
    /// Build a splitter from a user-supplied regex
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Splitter::Pattern)
    }

    /// Split `text` into raw words
    pub fn words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match self {
            Splitter::Whitespace => text.split_whitespace().collect(),
            Splitter::Letters => LETTERS_RE.find_iter(text).map(|m| m.as_str()).collect(),
            Splitter::Pattern(re) => re.find_iter(text).map(|m| m.as_str()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Splitter::Whitespace => "whitespace",
            Splitter::Letters => "letters",
            Splitter::Pattern(re) => re.as_str(),
        }
    }
}

impl std::str::FromStr for Splitter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whitespace" | "ws" => Ok(Splitter::Whitespace),
            "letters" | "words" => Ok(Splitter::Letters),
            _ => Err(format!("Unknown splitter: {}", s)),
        }
    }
}
