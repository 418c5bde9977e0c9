//! Renderers turn segments back into one marked-up string
//!
//! Markup is additive: stripping it from the output gives back the input
//! the segments were produced from.

use std::fmt::Write as _;

use colored::{Color, Colorize};

use super::{Segment, TokenKind};

/// Default prefix for HTML class names
pub const DEFAULT_CLASS_PREFIX: &str = "hl-";

/// Maps segments to an output string
pub trait Renderer: std::fmt::Debug {
    /// Render segments in order
    fn render(&self, segments: &[Segment]) -> String;
}

/// Wraps tokens in `<span class="{prefix}{kind}">`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlRenderer {
    class_prefix: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CLASS_PREFIX)
    }
}

impl HtmlRenderer {
    /// Create a renderer with a class prefix
    #[must_use]
    pub fn new(class_prefix: &str) -> Self {
        Self {
            class_prefix: class_prefix.to_string(),
        }
    }

    /// Class name used for a token kind
    #[must_use]
    pub fn class_for(&self, kind: TokenKind) -> String {
        format!("{}{}", self.class_prefix, kind)
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, segments: &[Segment]) -> String {
        let mut out = String::new();

        for segment in segments {
            match segment {
                Segment::Plain { text, .. } => out.push_str(text),
                Segment::Token(token) => {
                    // Writing to a String cannot fail
                    let _ = write!(
                        out,
                        r#"<span class="{}">{}</span>"#,
                        self.class_for(token.kind),
                        token.text
                    );
                },
            }
        }

        out
    }
}

/// Colors tokens with ANSI escapes for terminal output
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl AnsiRenderer {
    const fn color_for(kind: TokenKind) -> Color {
        match kind {
            TokenKind::Keyword => Color::Magenta,
            TokenKind::FunctionName => Color::Blue,
            TokenKind::PropertyAccess => Color::Cyan,
            TokenKind::Type => Color::Yellow,
            TokenKind::Variable => Color::BrightWhite,
            TokenKind::Comment => Color::BrightBlack,
            TokenKind::Value => Color::Green,
            TokenKind::Number => Color::BrightYellow,
            TokenKind::Attribute => Color::BrightMagenta,
            TokenKind::Generic => Color::White,
        }
    }
}

impl Renderer for AnsiRenderer {
    fn render(&self, segments: &[Segment]) -> String {
        let mut out = String::new();

        for segment in segments {
            match segment {
                Segment::Plain { text, .. } => out.push_str(text),
                Segment::Token(token) => {
                    // Writing to a String cannot fail
                    let _ = write!(out, "{}", token.text.color(Self::color_for(token.kind)));
                },
            }
        }

        out
    }
}
