//! Render command - highlight a snippet

use std::path::Path;

use log::warn;

use highlight::highlight::{AnsiRenderer, Renderer, Tokenizer};
use highlight::output::{OutputMode, RenderResult};

use super::{build_highlighter, read_source, select_language};
use crate::cli::{Format, InputArgs};

/// Highlight a file or stdin
///
/// An unknown or missing language is not fatal: the source is printed
/// unhighlighted.
pub fn render(
    input: &InputArgs,
    format: Format,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let (config, highlighter) = build_highlighter(config_path)?;
    let source = read_source(input)?;

    let renderer: &dyn Renderer = match format {
        Format::Html => highlighter.renderer(),
        Format::Ansi => &AnsiRenderer,
    };

    let registry = highlighter.registry();
    let language = match select_language(registry, &config, input) {
        Some(selector) => registry
            .get(&selector)
            .inspect_err(|err| warn!("{err}, rendering without highlighting"))
            .ok(),
        None => {
            warn!("no language given or inferred, rendering without highlighting");
            None
        },
    };

    let result = match language {
        Some(language) => {
            let segments = Tokenizer::new(language).tokenize(&source);
            RenderResult {
                language: Some(language.name().to_string()),
                output: renderer.render(&segments),
            }
        },
        None => RenderResult {
            language: None,
            output: source,
        },
    };

    result.render(mode);
    Ok(())
}
