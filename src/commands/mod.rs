//! Command implementations

mod init;
mod languages;
mod render;
mod tokens;

pub use init::init;
pub use languages::languages;
pub use render::render;
pub use tokens::tokens;

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;
use log::debug;

use highlight::escape::escape_html;
use highlight::highlight::{Language, LanguageRegistry};
use highlight::{HighlightConfig, Highlighter};

use crate::cli::InputArgs;

/// Load the config from an explicit path or the working directory
fn load_config(path: Option<&Path>) -> anyhow::Result<HighlightConfig> {
    let config = match path {
        Some(path) => HighlightConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => HighlightConfig::discover(&std::env::current_dir()?)?,
    };
    Ok(config)
}

/// Build a highlighter from the config at `path`
fn build_highlighter(path: Option<&Path>) -> anyhow::Result<(HighlightConfig, Highlighter)> {
    let config = load_config(path)?;
    let highlighter = Highlighter::from_config(&config)?;
    Ok((config, highlighter))
}

/// Read the source text, escaping it when it is raw
fn read_source(input: &InputArgs) -> anyhow::Result<String> {
    let source = match &input.file {
        Some(file) => fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?,
        None => io::read_to_string(io::stdin()).context("failed to read stdin")?,
    };

    Ok(if input.raw { escape_html(&source) } else { source })
}

/// Pick the language selector: explicit flag, then file extension, then config default
fn select_language(
    registry: &LanguageRegistry,
    config: &HighlightConfig,
    input: &InputArgs,
) -> Option<String> {
    if let Some(lang) = &input.lang {
        return Some(lang.clone());
    }

    let by_extension = input
        .file
        .as_deref()
        .and_then(|file| file.file_name())
        .and_then(|name| name.to_str())
        .and_then(|name| registry.for_file_name(name))
        .map(Language::name);
    if let Some(name) = by_extension {
        debug!("inferred language {name} from file extension");
        return Some(name.to_string());
    }

    config.render.default_language.clone()
}
