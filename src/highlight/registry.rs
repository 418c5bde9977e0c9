//! Languages and the registry that selects them

use std::sync::Arc;

use log::debug;

use super::{TokenPattern, php};
use crate::error::{HighlightError, Result};

/// An ordered set of patterns for one source language
#[derive(Debug, Clone)]
pub struct Language {
    name: String,
    aliases: Vec<String>,
    extensions: Vec<String>,
    patterns: Vec<Arc<dyn TokenPattern>>,
}

impl Language {
    /// Create a language with no patterns
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            aliases: Vec::new(),
            extensions: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Add an alias the language can be selected by
    #[must_use]
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_lowercase());
        self
    }

    /// Add a file extension (without the dot)
    #[must_use]
    pub fn with_extension(mut self, ext: &str) -> Self {
        self.extensions.push(ext.trim_start_matches('.').to_lowercase());
        self
    }

    /// Add a pattern, keeping patterns sorted by priority
    #[must_use]
    pub fn with_pattern(mut self, pattern: Arc<dyn TokenPattern>) -> Self {
        self.push_pattern(pattern);
        self
    }

    /// Add a pattern, keeping patterns sorted by priority
    ///
    /// Patterns with equal priority keep their registration order.
    pub fn push_pattern(&mut self, pattern: Arc<dyn TokenPattern>) {
        self.patterns.push(pattern);
        self.patterns.sort_by_key(|p| p.priority());
    }

    /// Language name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative names
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// File extensions
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Patterns in the order the tokenizer tries them
    #[must_use]
    pub fn patterns(&self) -> &[Arc<dyn TokenPattern>] {
        &self.patterns
    }

    /// Find a pattern by ID
    #[must_use]
    pub fn pattern(&self, id: &str) -> Option<&Arc<dyn TokenPattern>> {
        self.patterns.iter().find(|p| p.id() == id)
    }

    /// Check if a selector names this language (case-insensitive)
    #[must_use]
    pub fn is_selected_by(&self, selector: &str) -> bool {
        let selector = selector.trim().to_lowercase();
        self.name == selector || self.aliases.contains(&selector)
    }

    /// Copy of this language under a new name, keeping its patterns
    #[must_use]
    pub fn derive(&self, name: &str) -> Self {
        Self {
            patterns: self.patterns.clone(),
            ..Self::new(name)
        }
    }
}

/// Registry of languages by name and alias
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl LanguageRegistry {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            languages: Vec::new(),
        }
    }

    /// Create a registry with the built-in languages
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in pattern fails to compile.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(php::language()?)?;
        Ok(registry)
    }

    /// Register a language
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::DuplicateLanguage`] if its name or an alias is taken.
    pub fn register(&mut self, language: Language) -> Result<()> {
        let names = std::iter::once(language.name())
            .chain(language.aliases().iter().map(String::as_str));
        for name in names {
            if self.contains(name) {
                return Err(HighlightError::DuplicateLanguage(name.to_string()));
            }
        }

        debug!(
            "registered language {} with {} pattern(s)",
            language.name(),
            language.patterns().len()
        );
        self.languages.push(language);
        Ok(())
    }

    /// Replace the language with the same name, or register it if absent
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::DuplicateLanguage`] if an alias belongs to another language.
    pub fn upsert(&mut self, language: Language) -> Result<()> {
        let existing = self.languages.iter().position(|l| l.name() == language.name());
        let Some(index) = existing else {
            return self.register(language);
        };

        let removed = self.languages.remove(index);
        if let Err(err) = self.register(language) {
            self.languages.insert(index, removed);
            return Err(err);
        }
        Ok(())
    }

    /// Check if a selector names a registered language
    #[must_use]
    pub fn contains(&self, selector: &str) -> bool {
        self.languages.iter().any(|l| l.is_selected_by(selector))
    }

    /// Look up a language by name or alias
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::UnsupportedLanguage`] if nothing matches.
    pub fn get(&self, selector: &str) -> Result<&Language> {
        self.languages
            .iter()
            .find(|l| l.is_selected_by(selector))
            .ok_or_else(|| HighlightError::UnsupportedLanguage(selector.to_string()))
    }

    /// Look up a language by the extension a file name ends with
    ///
    /// Extensions may contain dots (`blade.php`); the longest one that
    /// matches wins, then the earliest registered language.
    #[must_use]
    pub fn for_file_name(&self, file_name: &str) -> Option<&Language> {
        let file_name = file_name.to_lowercase();
        self.languages
            .iter()
            .flat_map(|l| l.extensions().iter().map(move |ext| (ext, l)))
            .filter(|(ext, _)| {
                file_name
                    .strip_suffix(ext.as_str())
                    .is_some_and(|stem| stem.len() > 1 && stem.ends_with('.'))
            })
            .min_by_key(|(ext, _)| std::cmp::Reverse(ext.len()))
            .map(|(_, l)| l)
    }

    /// All registered languages, in registration order
    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }
}
