//! Count flow - Word frequency report over files or stdin
//!
//! Sources are read, split into raw words and fed one by one to a
//! [`WordStatistics`]. The report is whatever `statistics()` returns, cut to
//! `--top` if asked.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::backends::scan::{scan_sources, ScanOptions};
use crate::core::model::{Report, ReportSummary, SourceWarning};
use crate::core::paths::{display_path, resolve};
use crate::core::reader::{read_source, read_stdin, ReadConfig, SourceRead};
use crate::core::render::{write_raw_warning, OutputFormat, RenderConfig, Renderer};
use crate::core::tokenizer::Splitter;
use crate::stats::{WordStatistics, WordsStatistics};

/// Everything the count flow needs besides the root
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// Files or directories, relative to root unless absolute
    pub paths: Vec<PathBuf>,
    /// Read stdin as an additional source
    pub stdin: bool,
    pub splitter: Splitter,
    pub scan: ScanOptions,
    pub read: ReadConfig,
    /// Keep only the N most frequent words
    pub top: Option<usize>,
    /// Count files on the rayon pool (needs the `parallel` feature)
    pub parallel: bool,
}

/// Where words come from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    File(PathBuf),
    Stdin,
}

/// Running totals for one or more sources
#[derive(Debug, Default)]
struct Tally {
    stats: WordStatistics,
    fed: usize,
    sources: usize,
    warnings: Vec<SourceWarning>,
}

impl Tally {
    fn ingest(&mut self, read: SourceRead, splitter: &Splitter) -> Result<()> {
        self.warnings.extend(read.warnings);
        let Some(text) = read.content else {
            return Ok(());
        };

        self.sources += 1;
        for word in splitter.words(&text) {
            self.stats.add_word(Some(word))?;
            self.fed += 1;
        }
        Ok(())
    }

    fn absorb(&mut self, other: Tally) {
        self.stats.merge(other.stats);
        self.fed += other.fed;
        self.sources += other.sources;
        self.warnings.extend(other.warnings);
    }

    fn into_report(self, top: Option<usize>) -> Report {
        let counted = self.stats.total();
        let summary = ReportSummary {
            sources: self.sources,
            total_words: self.fed,
            distinct_words: self.stats.len(),
            ignored_blank: self.fed - counted,
        };

        let mut report = Report {
            summary,
            entries: self.stats.statistics(),
            warnings: self.warnings,
        };
        if let Some(n) = top {
            report.truncate(n);
        }
        report
    }
}

/// Expand user paths (and the stdin flag) into an ordered list of sources
fn collect_sources(root: &Path, options: &CountOptions) -> Result<Vec<Source>> {
    let mut sources = Vec::new();

    if options.paths.is_empty() && !options.stdin {
        sources.extend(scan_sources(root, &options.scan)?.into_iter().map(Source::File));
        return Ok(sources);
    }

    for path in &options.paths {
        let full = resolve(root, path);
        if full.is_dir() {
            let found = scan_sources(&full, &options.scan)
                .with_context(|| format!("Failed to scan {}", full.display()))?;
            sources.extend(found.into_iter().map(Source::File));
        } else {
            sources.push(Source::File(full));
        }
    }

    if options.stdin {
        sources.push(Source::Stdin);
    }

    Ok(sources)
}

fn tally_file(root: &Path, path: &Path, options: &CountOptions) -> Result<Tally> {
    let label = display_path(path, root);
    let read = read_source(path, &label, &options.read);
    if read.is_skipped() {
        tracing::warn!(path = %label, "skipping source");
    }

    let mut tally = Tally::default();
    tally.ingest(read, &options.splitter)?;
    Ok(tally)
}

#[cfg(feature = "parallel")]
fn tally_files(root: &Path, files: &[PathBuf], options: &CountOptions) -> Result<Tally> {
    use rayon::prelude::*;

    if !options.parallel {
        return tally_files_sequential(root, files, options);
    }

    let tallies: Vec<Tally> = files
        .par_iter()
        .map(|path| tally_file(root, path, options))
        .collect::<Result<_>>()?;

    let mut total = Tally::default();
    for tally in tallies {
        total.absorb(tally);
    }
    Ok(total)
}

#[cfg(not(feature = "parallel"))]
fn tally_files(root: &Path, files: &[PathBuf], options: &CountOptions) -> Result<Tally> {
    if options.parallel {
        tracing::warn!("built without the `parallel` feature, counting sequentially");
    }
    tally_files_sequential(root, files, options)
}

fn tally_files_sequential(root: &Path, files: &[PathBuf], options: &CountOptions) -> Result<Tally> {
    let mut total = Tally::default();
    for path in files {
        total.absorb(tally_file(root, path, options)?);
    }
    Ok(total)
}

/// Count every source and build the report
#[tracing::instrument(skip_all, fields(root = %root.display()))]
pub fn count_sources(root: &Path, options: &CountOptions) -> Result<Report> {
    let sources = collect_sources(root, options)?;
    tracing::debug!(sources = sources.len(), splitter = options.splitter.name(), "counting");

    let files: Vec<PathBuf> = sources
        .iter()
        .filter_map(|source| match source {
            Source::File(path) => Some(path.clone()),
            Source::Stdin => None,
        })
        .collect();

    let mut tally = tally_files(root, &files, options)?;

    if sources.contains(&Source::Stdin) {
        let read = read_stdin(options.read.encoding)?;
        tally.ingest(read, &options.splitter)?;
    }

    let report = tally.into_report(options.top);
    tracing::info!(
        sources = report.summary.sources,
        words = report.summary.total_words,
        distinct = report.summary.distinct_words,
        "counted"
    );
    Ok(report)
}

/// Run the count command
pub fn run_count(root: &Path, options: &CountOptions, config: RenderConfig) -> Result<()> {
    let report = count_sources(root, options)?;

    if config.format == OutputFormat::Raw {
        write_raw_warning();
    }

    if report.is_empty() {
        tracing::info!("no words counted");
    }

    let renderer = Renderer::with_config(config);
    renderer
        .render_to(&report, std::io::stdout().lock())
        .context("Failed to write report")?;

    Ok(())
}
