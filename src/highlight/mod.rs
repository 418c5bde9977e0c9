//! Syntax highlighting for documentation code blocks
//!
//! Source text flows through three stages:
//! - [`TokenPattern`]s recognize one construct each (function names,
//!   property access, types, ...)
//! - the [`Tokenizer`] applies a [`Language`]'s patterns in priority order
//!   and splits the input into [`Segment`]s
//! - a [`Renderer`] wraps tokens in markup
//!
//! Input is expected to be HTML-escaped already; see [`crate::escape`].

mod pattern;
pub mod php;
mod registry;
mod renderer;
mod token;
mod tokenizer;

use log::debug;

pub use pattern::{CAPTURE_GROUP, DEFAULT_PRIORITY, RegexPattern, TokenPattern};
pub use registry::{Language, LanguageRegistry};
pub use renderer::{AnsiRenderer, DEFAULT_CLASS_PREFIX, HtmlRenderer, Renderer};
pub use token::{Segment, Span, Token, TokenKind, reassemble, tokens};
pub use tokenizer::Tokenizer;

use crate::config::HighlightConfig;
use crate::error::Result;

/// Highlights escaped source using a language registry and an HTML renderer
#[derive(Debug, Clone)]
pub struct Highlighter {
    registry: LanguageRegistry,
    renderer: HtmlRenderer,
}

impl Highlighter {
    /// Create a highlighter with the built-in languages
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(LanguageRegistry::with_builtins()?))
    }

    /// Create a highlighter over an existing registry
    #[must_use]
    pub fn with_registry(registry: LanguageRegistry) -> Self {
        Self {
            registry,
            renderer: HtmlRenderer::default(),
        }
    }

    /// Create a highlighter from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a configured language or pattern is invalid.
    pub fn from_config(config: &HighlightConfig) -> Result<Self> {
        let registry = config.build_registry()?;
        debug!("highlighter ready with {} language(s)", registry.languages().len());

        Ok(Self {
            registry,
            renderer: HtmlRenderer::new(&config.render.class_prefix),
        })
    }

    /// The language registry
    #[must_use]
    pub const fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// The HTML renderer
    #[must_use]
    pub const fn renderer(&self) -> &HtmlRenderer {
        &self.renderer
    }

    /// Tokenize escaped input
    ///
    /// # Errors
    ///
    /// Returns [`crate::HighlightError::UnsupportedLanguage`] for an unknown selector.
    pub fn tokenize(&self, input: &str, language: &str) -> Result<Vec<Segment>> {
        let language = self.registry.get(language)?;
        Ok(Tokenizer::new(language).tokenize(input))
    }

    /// Tokenize escaped input and render it as HTML
    ///
    /// # Errors
    ///
    /// Returns [`crate::HighlightError::UnsupportedLanguage`] for an unknown selector.
    pub fn highlight(&self, input: &str, language: &str) -> Result<String> {
        self.highlight_with(input, language, &self.renderer)
    }

    /// Tokenize escaped input and render it with a custom renderer
    ///
    /// # Errors
    ///
    /// Returns [`crate::HighlightError::UnsupportedLanguage`] for an unknown selector.
    pub fn highlight_with(
        &self,
        input: &str,
        language: &str,
        renderer: &dyn Renderer,
    ) -> Result<String> {
        let segments = self.tokenize(input, language)?;
        Ok(renderer.render(&segments))
    }
}
