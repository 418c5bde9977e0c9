//! Error types for pattern configuration and highlighting

use thiserror::Error;

/// Errors that can occur while building registries or highlighting
#[derive(Debug, Error)]
pub enum HighlightError {
    /// A pattern's regular expression failed to compile
    #[error("invalid pattern `{id}`: {source}")]
    InvalidPattern {
        /// ID of the offending pattern
        id: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// No language is registered under the selector
    #[error("language not supported: {0}")]
    UnsupportedLanguage(String),

    /// A configured token kind is not one of the known kinds
    #[error("unknown token kind: {0}")]
    UnknownTokenKind(String),

    /// A language name or alias is already taken
    #[error("language already registered: {0}")]
    DuplicateLanguage(String),

    /// IO error while reading configuration
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias for highlighting operations
pub type Result<T> = std::result::Result<T, HighlightError>;
