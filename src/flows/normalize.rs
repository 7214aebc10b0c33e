//! Normalize flow - Show the key each raw word is counted under

use anyhow::Result;
use serde::Serialize;

use crate::core::render::{escape_md_cell, write_raw_warning, OutputFormat, RenderConfig, Renderer};
use crate::stats::normalize_word;

/// One raw word and its key (`None` when the word is blank and not counted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedWord {
    pub raw: String,
    pub key: Option<String>,
}

pub fn normalize_all(words: &[String]) -> Vec<NormalizedWord> {
    words
        .iter()
        .map(|raw| NormalizedWord {
            raw: raw.clone(),
            key: normalize_word(raw),
        })
        .collect()
}

fn render(rows: &[NormalizedWord], config: RenderConfig) -> String {
    let renderer = Renderer::with_config(config);
    match config.format {
        OutputFormat::Jsonl => renderer.render_jsonl(rows),
        OutputFormat::Json => renderer.to_json(rows, "[]"),
        OutputFormat::Markdown => {
            let mut output = String::from("| Raw | Key |\n|-----|-----|\n");
            for row in rows {
                let key = row
                    .key
                    .as_deref()
                    .map(|k| format!("`{}`", escape_md_cell(k)))
                    .unwrap_or_else(|| "(ignored)".to_string());
                output.push_str(&format!("| `{}` | {} |\n", escape_md_cell(&row.raw), key));
            }
            output
        }
        OutputFormat::Raw => rows
            .iter()
            .map(|row| row.key.clone().unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Run the normalize command
pub fn run_normalize(words: &[String], config: RenderConfig) -> Result<()> {
    let rows = normalize_all(words);
    if config.format == OutputFormat::Raw {
        write_raw_warning();
    }
    println!("{}", render(&rows, config));
    Ok(())
}
