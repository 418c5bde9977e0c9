//! Token types produced by the tokenizer

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HighlightError;

/// A span in source code (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span overlaps another
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Kind of token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Language keyword
    Keyword,
    /// Name of a declared function or method
    FunctionName,
    /// Property or method name after an object operator
    PropertyAccess,
    /// Type or class name
    Type,
    /// Variable
    Variable,
    /// Comment (line, block or doc)
    Comment,
    /// String literal
    Value,
    /// Numeric literal
    Number,
    /// Attribute name
    Attribute,
    /// Anything else worth styling
    Generic,
}

impl TokenKind {
    /// All kinds, in declaration order
    pub const ALL: [Self; 10] = [
        Self::Keyword,
        Self::FunctionName,
        Self::PropertyAccess,
        Self::Type,
        Self::Variable,
        Self::Comment,
        Self::Value,
        Self::Number,
        Self::Attribute,
        Self::Generic,
    ];

    /// Kebab-case label used in markup and configuration
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::FunctionName => "function-name",
            Self::PropertyAccess => "property-access",
            Self::Type => "type",
            Self::Variable => "variable",
            Self::Comment => "comment",
            Self::Value => "value",
            Self::Number => "number",
            Self::Attribute => "attribute",
            Self::Generic => "generic",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| HighlightError::UnknownTokenKind(s.to_string()))
    }
}

/// A classified span of source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Kind of token
    pub kind: TokenKind,
    /// Captured text
    pub text: String,
    /// Span in source
    pub span: Span,
    /// ID of the pattern that produced this token
    pub pattern_id: String,
}

impl Token {
    /// Create a new token
    #[must_use]
    pub const fn new(kind: TokenKind, text: String, span: Span, pattern_id: String) -> Self {
        Self {
            kind,
            text,
            span,
            pattern_id,
        }
    }
}

/// One piece of tokenizer output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Unclassified text
    Plain {
        /// The text
        text: String,
        /// Span in source
        span: Span,
    },
    /// A recognized token
    Token(Token),
}

impl Segment {
    /// Text covered by this segment
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text, .. } => text,
            Self::Token(token) => &token.text,
        }
    }

    /// Span covered by this segment
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Plain { span, .. } => *span,
            Self::Token(token) => token.span,
        }
    }

    /// The token, if this segment is one
    #[must_use]
    pub const fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Plain { .. } => None,
            Self::Token(token) => Some(token),
        }
    }
}

/// Tokens contained in a segment list, in source order
pub fn tokens(segments: &[Segment]) -> impl Iterator<Item = &Token> {
    segments.iter().filter_map(Segment::as_token)
}

/// Concatenate segment texts back into the original input
#[must_use]
pub fn reassemble(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}
