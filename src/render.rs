//! Token table rendering.
//!
//! The `grid` format draws the two-column `Token Type` / `Value` table with
//! `+---+` borders. `plain` prints tab-separated lines and `json` prints the
//! tokens as `{kind, text}` objects.

use std::fmt::Write as _;
use std::str::FromStr;

use owo_colors::OwoColorize;
use polylex_core::{Language, Token, TokenKind};
use serde::{Deserialize, Serialize};

use crate::error::{PolylexError, Result};

const HEADERS: [&str; 2] = ["Token Type", "Value"];

/// Output format for token tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Bordered two-column table
    #[default]
    Grid,
    /// One `kind<TAB>value` line per token
    Plain,
    /// JSON array of tokens
    Json,
}

impl FromStr for Format {
    type Err = PolylexError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "grid" => Ok(Format::Grid),
            "plain" => Ok(Format::Plain),
            "json" => Ok(Format::Json),
            other => Err(PolylexError::Config(format!(
                "unknown format '{}' (expected grid, plain or json)",
                other
            ))),
        }
    }
}

/// The tokens of one input file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path as given on the command line
    pub path: String,
    /// Language the file was tokenized as
    pub language: String,
    /// Tokens in source order
    pub tokens: Vec<Token>,
}

impl FileReport {
    /// Creates a report for one file.
    pub fn new(path: impl Into<String>, language: Language, tokens: Vec<Token>) -> Self {
        Self {
            path: path.into(),
            language: language.to_string(),
            tokens,
        }
    }
}

/// Renders token sequences in the configured format.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: Format,
    color: bool,
}

impl Renderer {
    /// Creates a renderer.
    pub fn new(format: Format, color: bool) -> Self {
        Self { format, color }
    }

    /// Renders the reports of one run.
    ///
    /// With more than one report, text formats get a heading per file unless
    /// `headings` is off, and JSON becomes an array of report objects.
    pub fn render_files(&self, reports: &[FileReport], headings: bool) -> Result<String> {
        if let [report] = reports {
            return self.render(&report.tokens);
        }

        if self.format == Format::Json {
            return Ok(serde_json::to_string_pretty(reports)?);
        }

        let mut out = String::new();
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if headings {
                let heading = format!("==> {} ({}) <==", report.path, report.language);
                if self.color {
                    let _ = writeln!(out, "{}", heading.bold());
                } else {
                    let _ = writeln!(out, "{}", heading);
                }
            }
            out.push_str(&self.render(&report.tokens)?);
        }
        Ok(out)
    }

    /// Renders a single token sequence.
    pub fn render(&self, tokens: &[Token]) -> Result<String> {
        match self.format {
            Format::Grid => Ok(self.grid(tokens)),
            Format::Plain => Ok(plain(tokens)),
            Format::Json => Ok(serde_json::to_string_pretty(tokens)? + "\n"),
        }
    }

    fn grid(&self, tokens: &[Token]) -> String {
        let rows: Vec<(TokenKind, String)> = tokens
            .iter()
            .map(|t| (t.kind, escape_cell(&t.text)))
            .collect();

        let kind_width = rows
            .iter()
            .map(|(kind, _)| kind.label().chars().count())
            .chain(std::iter::once(HEADERS[0].chars().count()))
            .max()
            .unwrap_or_default();
        let value_width = rows
            .iter()
            .map(|(_, text)| text.chars().count())
            .chain(std::iter::once(HEADERS[1].chars().count()))
            .max()
            .unwrap_or_default();

        let border = |fill: char| {
            format!(
                "+{}+{}+\n",
                fill.to_string().repeat(kind_width + 2),
                fill.to_string().repeat(value_width + 2)
            )
        };

        let mut out = border('-');
        let header_kind = format!("{:<kind_width$}", HEADERS[0]);
        let header_value = format!("{:<value_width$}", HEADERS[1]);
        if self.color {
            let _ = writeln!(
                out,
                "| {} | {} |",
                header_kind.bold(),
                header_value.bold()
            );
        } else {
            let _ = writeln!(out, "| {} | {} |", header_kind, header_value);
        }
        out.push_str(&border('='));

        for (i, (kind, text)) in rows.iter().enumerate() {
            let label = format!("{:<kind_width$}", kind.label());
            let label = if self.color {
                paint(*kind, &label)
            } else {
                label
            };
            let _ = writeln!(out, "| {} | {:<value_width$} |", label, text);
            if i + 1 < rows.len() {
                out.push_str(&border('-'));
            }
        }
        if !rows.is_empty() {
            out.push_str(&border('-'));
        }

        out
    }
}

fn plain(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "{}\t{}", token.kind, escape_cell(&token.text));
    }
    out
}

/// Keeps each token on one table line.
fn escape_cell(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn paint(kind: TokenKind, label: &str) -> String {
    match kind {
        TokenKind::Keyword => label.magenta().to_string(),
        TokenKind::String => label.green().to_string(),
        TokenKind::Number => label.yellow().to_string(),
        TokenKind::Preprocessor | TokenKind::Header => label.blue().to_string(),
        TokenKind::StandardFunction | TokenKind::ClassName => label.cyan().to_string(),
        _ => label.to_string(),
    }
}
