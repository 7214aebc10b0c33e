//! Input reading strategies
//!
//! Provides consistent handling for:
//! - Non-UTF-8 files
//! - Oversized files
//! - Binary files
//!
//! None of these abort a run. A problem with one source turns into a
//! [`SourceWarning`] and the source contributes no words (or lossily
//! converted words).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::core::model::{SourceWarning, WarningCode};

/// Default maximum file size in bytes (64 MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// How many leading bytes are inspected for NUL when detecting binaries
const BINARY_SNIFF_LEN: usize = 8192;

/// Strategy for handling non-UTF-8 content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingStrategy {
    /// Skip non-UTF-8 files entirely
    Skip,
    /// Use lossy conversion (replace invalid bytes with U+FFFD)
    #[default]
    Lossy,
}

impl std::str::FromStr for EncodingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(EncodingStrategy::Skip),
            "lossy" => Ok(EncodingStrategy::Lossy),
            _ => Err(format!("Unknown encoding strategy: {}", s)),
        }
    }
}

/// Configuration for reading sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadConfig {
    /// Files above this size (bytes) are skipped
    pub max_file_size: u64,

    /// How to handle non-UTF-8 content
    pub encoding: EncodingStrategy,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            encoding: EncodingStrategy::Lossy,
        }
    }
}

/// Result of reading one source
#[derive(Debug, Clone, Default)]
pub struct SourceRead {
    /// Text to count, `None` if the source was skipped
    pub content: Option<String>,

    /// Problems encountered while reading
    pub warnings: Vec<SourceWarning>,
}

impl SourceRead {
    fn text(content: String) -> Self {
        Self {
            content: Some(content),
            warnings: Vec::new(),
        }
    }

    fn skipped(warning: SourceWarning) -> Self {
        Self {
            content: None,
            warnings: vec![warning],
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.content.is_none()
    }
}

/// Read a file as text, reporting problems under `label`
pub fn read_source(path: &Path, label: &str, config: &ReadConfig) -> SourceRead {
    let size = match fs::metadata(path) {
        Ok(m) => m.len(),
        Err(e) => {
            return SourceRead::skipped(
                SourceWarning::new(
                    WarningCode::Unreadable,
                    format!("Cannot read metadata: {}", e),
                )
                .with_path(label),
            );
        }
    };

    if size > config.max_file_size {
        return SourceRead::skipped(
            SourceWarning::new(
                WarningCode::FileSkippedSize,
                format!(
                    "File exceeds size limit ({} > {} bytes)",
                    size, config.max_file_size
                ),
            )
            .with_path(label),
        );
    }

    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            return SourceRead::skipped(
                SourceWarning::new(WarningCode::Unreadable, format!("Cannot read file: {}", e))
                    .with_path(label),
            );
        }
    };

    decode(bytes, label, config.encoding)
}

/// Turn raw bytes into text according to the encoding strategy
fn decode(bytes: Vec<u8>, label: &str, encoding: EncodingStrategy) -> SourceRead {
    let sniff_len = std::cmp::min(BINARY_SNIFF_LEN, bytes.len());
    if bytes[..sniff_len].contains(&0) {
        return SourceRead::skipped(
            SourceWarning::new(
                WarningCode::BinaryFile,
                "File appears to be binary (contains null bytes)",
            )
            .with_path(label),
        );
    }

    match String::from_utf8(bytes) {
        Ok(content) => SourceRead::text(content),
        Err(e) => match encoding {
            EncodingStrategy::Skip => SourceRead::skipped(
                SourceWarning::new(
                    WarningCode::FileSkippedEncoding,
                    "File contains invalid UTF-8 sequences",
                )
                .with_path(label),
            ),
            EncodingStrategy::Lossy => {
                let content = String::from_utf8_lossy(e.as_bytes()).into_owned();
                let mut read = SourceRead::text(content);
                read.warnings.push(
                    SourceWarning::new(
                        WarningCode::LossyConversion,
                        "Lossy UTF-8 conversion applied (some characters replaced)",
                    )
                    .with_path(label),
                );
                read
            }
        },
    }
}

/// Read all of stdin as text
pub fn read_stdin(encoding: EncodingStrategy) -> Result<SourceRead> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;
    Ok(decode(bytes, "<stdin>", encoding))
}
