//! wordstat - word frequency statistics
//!
//! The core is [`WordStatistics`]: feed it words one at a time with
//! [`WordsStatistics::add_word`], then ask for an ordered frequency table with
//! [`WordsStatistics::statistics`].
//!
//! ```
//! use wordstat::{WordCount, WordStatistics, WordsStatistics};
//!
//! let mut stats = WordStatistics::new();
//! stats.add_word(Some("Hello")).unwrap();
//! stats.add_word(Some("hello")).unwrap();
//! stats.add_word(Some("world")).unwrap();
//! assert!(stats.add_word(None).is_err());
//!
//! assert_eq!(
//!     stats.statistics(),
//!     vec![WordCount::new("hello", 2), WordCount::new("world", 1)]
//! );
//! ```

pub mod backends;
pub mod cli;
pub mod core;
pub mod flows;
pub mod stats;

pub use crate::core::error::StatsError;
pub use crate::core::model::{frequency_order, WordCount};
pub use crate::stats::{normalize_word, WordStatistics, WordsStatistics, MAX_WORD_LEN};
