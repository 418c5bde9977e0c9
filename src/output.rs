//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::highlight::{Language, Segment};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a tokens operation
#[derive(Debug, Serialize)]
pub struct TokensResult {
    /// Language the input was tokenized as
    pub language: String,
    /// Segments covering the input
    pub segments: Vec<Segment>,
}

/// Result of a render operation
#[derive(Debug, Serialize)]
pub struct RenderResult {
    /// Language used, if the input was highlighted
    pub language: Option<String>,
    /// Rendered output
    pub output: String,
}

/// Result of a languages listing
#[derive(Debug, Serialize)]
pub struct LanguagesResult {
    /// Registered languages
    pub languages: Vec<LanguageInfo>,
}

/// Information about a language
#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    /// Language name
    pub name: String,
    /// Alternative names
    pub aliases: Vec<String>,
    /// File extensions
    pub extensions: Vec<String>,
    /// Number of patterns
    pub patterns: usize,
}

impl From<&Language> for LanguageInfo {
    fn from(language: &Language) -> Self {
        Self {
            name: language.name().to_string(),
            aliases: language.aliases().to_vec(),
            extensions: language.extensions().to_vec(),
            patterns: language.patterns().len(),
        }
    }
}

impl TokensResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// One line per segment: span, kind and text
    #[must_use]
    pub fn to_human(&self) -> String {
        use std::fmt::Write as _;

        let mut out = String::new();
        for segment in &self.segments {
            let span = segment.span();
            let kind =
                segment.as_token().map_or_else(|| "plain".to_string(), |t| t.kind.to_string());
            let _ = writeln!(
                out,
                "{:>5}..{:<5} {:<16} {:?}",
                span.start,
                span.end,
                kind,
                segment.text()
            );
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl RenderResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.output),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl LanguagesResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.languages.is_empty() {
            println!("No languages registered.");
            return;
        }

        println!("Languages:\n");
        for lang in &self.languages {
            println!("  {} ({} patterns)", lang.name, lang.patterns);
            if !lang.aliases.is_empty() {
                println!("  Aliases: {}", lang.aliases.join(", "));
            }
            if !lang.extensions.is_empty() {
                println!("  Extensions: {}", lang.extensions.join(", "));
            }
            println!();
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
