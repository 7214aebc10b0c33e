//! Report Model
//!
//! Every frequency table the crate hands out is a list of [`WordCount`]s in
//! [`frequency_order`]. The CLI wraps that list into a [`Report`] before
//! rendering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A normalized word together with the number of times it was added
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl From<(String, usize)> for WordCount {
    fn from((word, count): (String, usize)) -> Self {
        Self { word, count }
    }
}

/// Total order for frequency tables: count descending, then word ascending
pub fn frequency_order(a: &WordCount, b: &WordCount) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.word.as_str().cmp(b.word.as_str()))
}

/// Warning codes for input sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    /// File was skipped due to size
    FileSkippedSize,
    /// File was skipped due to encoding
    FileSkippedEncoding,
    /// Lossy encoding conversion used
    LossyConversion,
    /// File appears to be binary
    BinaryFile,
    /// File could not be read at all
    Unreadable,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::FileSkippedSize => "FILE_SKIPPED_SIZE",
            WarningCode::FileSkippedEncoding => "FILE_SKIPPED_ENCODING",
            WarningCode::LossyConversion => "LOSSY_CONVERSION",
            WarningCode::BinaryFile => "BINARY_FILE",
            WarningCode::Unreadable => "UNREADABLE",
        }
    }
}

/// A structured, non-fatal problem with one input source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceWarning {
    pub code: WarningCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl SourceWarning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Set the path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Aggregate numbers about one counting run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Sources that contributed words
    pub sources: usize,
    /// Raw words handed to the statistics
    pub total_words: usize,
    /// Distinct normalized words
    pub distinct_words: usize,
    /// Raw words that were blank after trimming and therefore not counted
    pub ignored_blank: usize,
}

/// Everything the `count` command renders
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    pub summary: ReportSummary,
    pub entries: Vec<WordCount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<SourceWarning>,
}

impl Report {
    /// Keep only the first `n` entries
    pub fn truncate(&mut self, n: usize) {
        self.entries.truncate(n);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
