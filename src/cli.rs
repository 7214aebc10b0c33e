//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::backends::scan::{ScanOptions, DEFAULT_EXTENSIONS};
use crate::core::reader::{EncodingStrategy, ReadConfig, DEFAULT_MAX_FILE_SIZE};
use crate::core::render::{OutputFormat, RenderConfig};
use crate::core::tokenizer::Splitter;
use crate::flows::count::CountOptions;

/// wordstat - count normalized word frequencies in text.
#[derive(Parser, Debug)]
#[command(name = "wordstat")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordstat counts words and prints a frequency table.

Every word is trimmed to decide whether it counts at all, cut to its first
10 characters and lower-cased. The table is ordered by count (descending),
then by word (ascending).

Output formats:
- jsonl: one {"word","count"} object per line (best for piping)
- json: the whole report, including summary and warnings
- md: human-friendly Markdown
- raw: word<TAB>count lines (unstable; intended for debugging)

Examples:
    wordstat count
    wordstat count docs README.md --top 20
    cat notes.txt | wordstat --format md count --stdin
    wordstat normalize "Ёлка" "Internationalization"
"#
)]
pub struct Cli {
    /// Root directory for all operations.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        env = "WORDSTAT_ROOT",
        long_help = "Root directory for all operations (defaults to the current directory).\n\n\
Relative PATHS are resolved against it, and file paths in warnings are shown\n\
relative to it."
    )]
    pub root: PathBuf,

    /// Output format (jsonl/json/md/raw).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        env = "WORDSTAT_FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- raw"
    )]
    pub format: String,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug diagnostics on stderr. RUST_LOG, when set, takes precedence."
    )]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count word frequencies in files, directories or stdin.
    #[command(
        long_about = "Read every source, split it into words and print the frequency table.\n\n\
With no PATHS and no --stdin, ROOT is scanned for text files (see --ext).\n\
Directories given as PATHS are scanned the same way; files given explicitly\n\
are always read, whatever their extension.\n\n\
Unreadable, binary or oversized files do not stop the run; they are listed\n\
as warnings in the report.\n\n\
Examples:\n\
  wordstat count\n\
  wordstat count book.txt --split letters --top 50\n\
  wordstat count --stdin < notes.txt\n"
    )]
    Count {
        /// Files or directories to read (relative to ROOT unless absolute).
        #[arg(value_name = "PATHS")]
        paths: Vec<PathBuf>,

        /// Also read words from stdin.
        #[arg(long)]
        stdin: bool,

        /// How text is split into words (whitespace/letters).
        #[arg(long, default_value = "whitespace", value_name = "MODE")]
        split: String,

        /// Regex whose matches are the words (overrides --split).
        #[arg(long, value_name = "REGEX")]
        pattern: Option<String>,

        /// Extensions scanned in directories (comma separated).
        #[arg(long, value_name = "EXT", value_delimiter = ',')]
        ext: Option<Vec<String>>,

        /// Include hidden files/directories when scanning.
        #[arg(long)]
        hidden: bool,

        /// Disable .gitignore and other ignore rules when scanning.
        #[arg(long)]
        no_ignore: bool,

        /// Non-UTF-8 handling (lossy/skip).
        #[arg(long, default_value = "lossy", value_name = "STRATEGY")]
        encoding: String,

        /// Skip files larger than this many bytes.
        #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE, value_name = "BYTES")]
        max_file_size: u64,

        /// Only print the N most frequent words.
        #[arg(long, value_name = "N")]
        top: Option<usize>,

        /// Count files in parallel (requires the `parallel` feature).
        #[arg(long)]
        parallel: bool,
    },

    /// Show the key each word would be counted under.
    #[command(
        long_about = "Print, for every WORD, the normalized key it is counted under, or null\n\
when the word is blank and would be ignored.\n\n\
Examples:\n\
  wordstat normalize Hello HELLO \"   \"\n"
    )]
    Normalize {
        /// Raw words to normalize.
        #[arg(value_name = "WORDS", required = true)]
        words: Vec<String>,
    },
}

/// Install the tracing subscriber (stderr, RUST_LOG overrides the flags)
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        "wordstat=debug,info"
    } else if quiet {
        "error"
    } else {
        "wordstat=info,warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(anyhow::Error::msg)
        .context("Invalid --format")?;
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let root = cli.root.canonicalize().unwrap_or(cli.root);

    match cli.command {
        Commands::Count {
            paths,
            stdin,
            split,
            pattern,
            ext,
            hidden,
            no_ignore,
            encoding,
            max_file_size,
            top,
            parallel,
        } => {
            let splitter = match pattern {
                Some(pattern) => Splitter::pattern(&pattern)
                    .with_context(|| format!("Invalid --pattern: {}", pattern))?,
                None => split
                    .parse::<Splitter>()
                    .map_err(anyhow::Error::msg)
                    .context("Invalid --split")?,
            };

            let encoding = encoding
                .parse::<EncodingStrategy>()
                .map_err(anyhow::Error::msg)
                .context("Invalid --encoding")?;

            let extensions = ext
                .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect())
                .into_iter()
                .map(|e| e.trim().trim_start_matches('.').to_string())
                .filter(|e| !e.is_empty())
                .collect();

            let options = CountOptions {
                paths,
                stdin,
                splitter,
                scan: ScanOptions {
                    hidden,
                    ignore: !no_ignore,
                    extensions,
                },
                read: ReadConfig {
                    max_file_size,
                    encoding,
                },
                top,
                parallel,
            };

            crate::flows::count::run_count(&root, &options, render_config)
        }

        Commands::Normalize { words } => {
            crate::flows::normalize::run_normalize(&words, render_config)
        }
    }
}
