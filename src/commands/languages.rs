//! Languages command - list supported languages

use std::path::Path;

use highlight::output::{LanguageInfo, LanguagesResult, OutputMode};

use super::build_highlighter;

/// List the built-in and configured languages
pub fn languages(config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (_, highlighter) = build_highlighter(config_path)?;

    let result = LanguagesResult {
        languages: highlighter.registry().languages().iter().map(LanguageInfo::from).collect(),
    };

    result.render(mode);
    Ok(())
}
