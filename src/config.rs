//! Highlighter configuration
//!
//! Configuration lives in a `highlight.toml` file. It tunes rendering and
//! adds languages or patterns on top of the built-in ones:
//!
//! ```toml
//! [render]
//! class_prefix = "hl-"
//! default_language = "php"
//!
//! [[language]]
//! name = "blade"
//! extends = "php"
//! extensions = ["blade.php"]
//!
//! [[language.pattern]]
//! id = "blade.directive"
//! kind = "keyword"
//! regex = '@(?P<match>\w+)'
//! priority = 35
//! ```
//!
//! A `[[language]]` entry whose name is already registered extends that
//! language in place.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::highlight::{
    DEFAULT_CLASS_PREFIX, DEFAULT_PRIORITY, Language, LanguageRegistry, RegexPattern, TokenKind,
};

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE: &str = "highlight.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Rendering options
    #[serde(default)]
    pub render: RenderConfig,
    /// Custom or extended languages
    #[serde(default, rename = "language")]
    pub languages: Vec<LanguageEntry>,
}

/// Rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Prefix for HTML class names
    #[serde(default = "default_class_prefix")]
    pub class_prefix: String,
    /// Language used when none is given or inferred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
}

fn default_class_prefix() -> String {
    DEFAULT_CLASS_PREFIX.to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            class_prefix: default_class_prefix(),
            default_language: None,
        }
    }
}

/// A language defined in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Language name
    pub name: String,
    /// Alternative names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// File extensions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,
    /// Language whose patterns are inherited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    /// Patterns added to the language
    #[serde(default, rename = "pattern")]
    pub patterns: Vec<PatternEntry>,
}

/// A pattern defined in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    /// Unique identifier
    pub id: String,
    /// Token kind label (e.g., "keyword", "function-name")
    pub kind: String,
    /// Regular expression; a `match` group limits the captured token
    pub regex: String,
    /// Rank among the language's patterns; lower is tried first
    #[serde(default = "default_priority")]
    pub priority: i32,
}

const fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

impl PatternEntry {
    /// Compile this entry
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown kind or an invalid expression.
    pub fn compile(&self) -> Result<RegexPattern> {
        let kind: TokenKind = self.kind.parse()?;
        Ok(RegexPattern::new(&self.id, kind, &self.regex)?.with_priority(self.priority))
    }
}

impl HighlightConfig {
    /// Parse configuration from TOML
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid configuration.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        debug!("loading config from {}", path.display());
        Self::parse(&content)
    }

    /// Load `highlight.toml` from a directory, or defaults if there is none
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = Self::path_in(dir);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Path of the config file in a directory
    #[must_use]
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Build a registry with the built-in languages plus configured ones
    ///
    /// All patterns are compiled here, so a malformed expression fails the
    /// whole build rather than surfacing during highlighting.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid patterns, unknown kinds, unknown
    /// `extends` targets or clashing names.
    pub fn build_registry(&self) -> Result<LanguageRegistry> {
        let mut registry = LanguageRegistry::with_builtins()?;

        for entry in &self.languages {
            let base = match (&entry.extends, registry.contains(&entry.name)) {
                (Some(parent), _) => registry.get(parent)?.derive(&entry.name),
                (None, true) => registry.get(&entry.name)?.clone(),
                (None, false) => Language::new(&entry.name),
            };

            let language = entry.apply(base)?;
            registry.upsert(language)?;
        }

        Ok(registry)
    }
}

impl LanguageEntry {
    fn apply(&self, mut language: Language) -> Result<Language> {
        for alias in &self.aliases {
            if !language.is_selected_by(alias) {
                language = language.with_alias(alias);
            }
        }
        for ext in &self.extensions {
            language = language.with_extension(ext);
        }
        for entry in &self.patterns {
            language.push_pattern(Arc::new(entry.compile()?));
        }
        Ok(language)
    }
}
