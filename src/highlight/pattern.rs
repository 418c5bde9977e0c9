//! Token patterns: one matcher per lexical construct

use regex::Regex;

use super::{Span, Token, TokenKind};
use crate::error::{HighlightError, Result};

/// Name of the capture group holding the semantic part of a match
pub const CAPTURE_GROUP: &str = "match";

/// Default priority for patterns that do not set one
pub const DEFAULT_PRIORITY: i32 = 100;

/// A matcher that recognizes one lexical construct
///
/// Patterns are stateless. Given escaped input and a position they report
/// the first token they recognize at or after it; the tokenizer decides which
/// candidates survive.
pub trait TokenPattern: Send + Sync + std::fmt::Debug {
    /// Unique identifier (e.g., "php.function-name")
    fn id(&self) -> &str;

    /// Kind of the tokens this pattern produces
    fn kind(&self) -> TokenKind;

    /// Rank among patterns of a language; lower is tried first
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }

    /// Find the first token starting at or after byte offset `pos`
    ///
    /// Text before `pos` is still visible to word boundaries and anchors.
    fn find_at(&self, input: &str, pos: usize) -> Option<Token>;

    /// Find successive non-overlapping tokens in the input
    fn find_matches(&self, input: &str) -> Vec<Token> {
        let mut found = Vec::new();
        let mut pos = 0;
        while let Some(token) = self.find_at(input, pos) {
            pos = token.span.end;
            found.push(token);
        }
        found
    }
}

/// A pattern backed by a regular expression
///
/// If the expression has a group named `match`, only that group becomes the
/// token; surrounding context such as keywords or punctuation stays plain.
/// Matches where the group does not participate produce nothing. Without the
/// group the whole match is the token.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    id: String,
    kind: TokenKind,
    priority: i32,
    regex: Regex,
    has_group: bool,
}

impl RegexPattern {
    /// Compile a new regex pattern
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::InvalidPattern`] if the expression does not compile.
    pub fn new(id: &str, kind: TokenKind, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| HighlightError::InvalidPattern {
            id: id.to_string(),
            source,
        })?;

        let has_group = regex.capture_names().any(|name| name == Some(CAPTURE_GROUP));

        Ok(Self {
            id: id.to_string(),
            kind,
            priority: DEFAULT_PRIORITY,
            regex,
            has_group,
        })
    }

    /// Set priority
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl TokenPattern for RegexPattern {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> TokenKind {
        self.kind
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn find_at(&self, input: &str, pos: usize) -> Option<Token> {
        let mut start = pos;

        while start <= input.len() {
            let caps = self.regex.captures_at(input, start)?;
            let whole = caps.get(0)?;
            let capture = if self.has_group { caps.name(CAPTURE_GROUP) } else { Some(whole) };

            if let Some(m) = capture.filter(|m| !m.is_empty()) {
                return Some(Token::new(
                    self.kind,
                    m.as_str().to_string(),
                    Span::new(m.start(), m.end()),
                    self.id.clone(),
                ));
            }

            // Nothing to capture here; resume after this match
            start = if whole.is_empty() {
                whole.end() + input[whole.end()..].chars().next().map_or(1, char::len_utf8)
            } else {
                whole.end()
            };
        }

        None
    }
}
