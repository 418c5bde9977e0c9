//! Tokens command - show how a snippet is tokenized

use std::path::Path;

use anyhow::anyhow;

use highlight::highlight::Tokenizer;
use highlight::output::{OutputMode, TokensResult};

use super::{build_highlighter, read_source, select_language};
use crate::cli::InputArgs;

/// Print the segments of a file or stdin
pub fn tokens(
    input: &InputArgs,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let (config, highlighter) = build_highlighter(config_path)?;
    let source = read_source(input)?;

    let selector = select_language(highlighter.registry(), &config, input)
        .ok_or_else(|| anyhow!("no language given; use --lang"))?;
    let language = highlighter.registry().get(&selector)?;

    let result = TokensResult {
        language: language.name().to_string(),
        segments: Tokenizer::new(language).tokenize(&source),
    };

    result.render(mode);
    Ok(())
}
