//! Error types for the statistics core

use thiserror::Error;

/// Errors raised by [`WordsStatistics`](crate::stats::WordsStatistics) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    /// A required argument was absent
    #[error("invalid argument: `{name}` must not be absent")]
    InvalidArgument { name: &'static str },
}
