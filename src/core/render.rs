//! Renderer module
//!
//! Renders a Report to different output formats: jsonl, json, md, raw

use serde::Serialize;
use std::io::Write;

use crate::core::model::Report;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &Report) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(&report.entries),
            OutputFormat::Json => self.to_json(report, "{}"),
            OutputFormat::Markdown => self.render_markdown(report),
            OutputFormat::Raw => self.render_raw(report),
        }
    }

    /// Render to a writer, newline-terminated; nothing is written for empty output
    pub fn render_to<W: Write>(&self, report: &Report, mut writer: W) -> std::io::Result<()> {
        let output = self.render(report);
        if output.is_empty() {
            return Ok(());
        }
        writer.write_all(output.as_bytes())?;
        writer.write_all(b"\n")
    }

    /// Render any rows as JSON Lines (one JSON object per line)
    pub fn render_jsonl<T: Serialize>(&self, rows: &[T]) -> String {
        rows.iter()
            .filter_map(|row| {
                if self.config.pretty {
                    serde_json::to_string_pretty(row).ok()
                } else {
                    serde_json::to_string(row).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render any value as a single JSON document
    pub fn to_json<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.unwrap_or_else(|_| fallback.to_string())
    }

    /// Render as Markdown
    fn render_markdown(&self, report: &Report) -> String {
        let mut output = String::new();
        let summary = &report.summary;

        output.push_str("## Summary\n\n");
        output.push_str(&format!("- Sources: {}\n", summary.sources));
        output.push_str(&format!("- Words: {}\n", summary.total_words));
        output.push_str(&format!("- Distinct: {}\n", summary.distinct_words));
        if summary.ignored_blank > 0 {
            output.push_str(&format!("- Ignored (blank): {}\n", summary.ignored_blank));
        }
        output.push('\n');

        if !report.entries.is_empty() {
            output.push_str("## Frequencies\n\n");
            output.push_str("| Word | Count |\n");
            output.push_str("|------|-------|\n");
            for entry in &report.entries {
                output.push_str(&format!(
                    "| `{}` | {} |\n",
                    escape_md_cell(&entry.word),
                    entry.count
                ));
            }
            output.push('\n');
        }

        if !report.warnings.is_empty() {
            output.push_str("## Warnings\n\n");
            for warning in &report.warnings {
                output.push_str(&format!("- **{}**", warning.code.as_str()));
                if let Some(path) = &warning.path {
                    output.push_str(&format!(" `{}`", path));
                }
                output.push_str(&format!(": {}\n", warning.message));
            }
            output.push('\n');
        }

        output
    }

    /// Render as raw output (for debugging)
    fn render_raw(&self, report: &Report) -> String {
        report
            .entries
            .iter()
            .map(|entry| format!("{}\t{}", entry.word, entry.count))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Keep table cells on one line and away from column separators
pub(crate) fn escape_md_cell(s: &str) -> String {
    s.replace('|', "\\|")
        .replace('`', "'")
        .replace(['\n', '\r'], " ")
}

/// Write raw mode warning to stderr
pub fn write_raw_warning() {
    eprintln!("# WARNING: Raw mode output - not parseable, unstable format");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ReportSummary, SourceWarning, WarningCode, WordCount};

    fn sample_report() -> Report {
        Report {
            summary: ReportSummary {
                sources: 1,
                total_words: 3,
                distinct_words: 2,
                ignored_blank: 0,
            },
            entries: vec![WordCount::new("b", 2), WordCount::new("a", 1)],
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_render_jsonl() {
        let renderer = Renderer::new(OutputFormat::Jsonl);
        let output = renderer.render(&sample_report());

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"word":"b","count":2}"#);
        assert_eq!(lines[1], r#"{"word":"a","count":1}"#);
    }

    #[test]
    fn test_render_jsonl_empty() {
        let renderer = Renderer::new(OutputFormat::Jsonl);
        assert!(renderer.render(&Report::default()).is_empty());
    }

    #[test]
    fn test_render_jsonl_pretty() {
        let renderer = Renderer::with_config(RenderConfig::with_pretty(OutputFormat::Jsonl, true));
        let output = renderer.render(&sample_report());
        assert!(output.contains("\n\n"));
        assert!(output.contains("  \"word\": \"b\""));
    }

    #[test]
    fn test_render_json() {
        let renderer = Renderer::new(OutputFormat::Json);
        let output = renderer.render(&sample_report());

        assert!(output.starts_with('{'));
        assert!(output.ends_with('}'));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"]["distinct_words"], 2);
        assert_eq!(value["entries"][0]["word"], "b");
    }

    #[test]
    fn test_render_markdown() {
        let renderer = Renderer::new(OutputFormat::Markdown);
        let output = renderer.render(&sample_report());

        assert!(output.contains("## Summary"));
        assert!(output.contains("| `b` | 2 |"));
        assert!(output.contains("| `a` | 1 |"));
        assert!(!output.contains("## Warnings"));
    }

    #[test]
    fn test_render_markdown_warnings() {
        let mut report = sample_report();
        report.warnings.push(
            SourceWarning::new(WarningCode::BinaryFile, "binary").with_path("img.png"),
        );
        let output = Renderer::new(OutputFormat::Markdown).render(&report);

        assert!(output.contains("## Warnings"));
        assert!(output.contains("- **BINARY_FILE** `img.png`: binary"));
    }

    #[test]
    fn test_render_markdown_escapes_cells() {
        let report = Report {
            entries: vec![WordCount::new("a|b", 1)],
            ..Default::default()
        };
        let output = Renderer::new(OutputFormat::Markdown).render(&report);
        assert!(output.contains("| `a\\|b` | 1 |"));
    }

    #[test]
    fn test_render_raw() {
        let renderer = Renderer::new(OutputFormat::Raw);
        assert_eq!(renderer.render(&sample_report()), "b\t2\na\t1");
    }

    #[test]
    fn test_render_to_writer() {
        let renderer = Renderer::new(OutputFormat::Json);
        let mut buffer = Vec::new();
        renderer.render_to(&sample_report(), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("\"entries\""));
        assert!(output.ends_with("}\n"));
    }

    #[test]
    fn test_render_to_writer_empty_jsonl() {
        let renderer = Renderer::new(OutputFormat::Jsonl);
        let mut buffer = Vec::new();
        renderer.render_to(&Report::default(), &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(
            "jsonl".parse::<OutputFormat>().unwrap(),
            OutputFormat::Jsonl
        );
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "md".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!("raw".parse::<OutputFormat>().unwrap(), OutputFormat::Raw);
    }

    #[test]
    fn test_output_format_parse_case_insensitive() {
        assert_eq!("JSONL".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("MARKDOWN".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_output_format_invalid() {
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_default() {
        let format: OutputFormat = Default::default();
        assert_eq!(format, OutputFormat::Jsonl);
    }
}
