//! Built-in PHP patterns
//!
//! All expressions match HTML-escaped source: `->` arrives as `-&gt;`, `"` as
//! `&quot;`, `'` as `&#039;` and `&` as `&amp;`.
//!
//! Priorities are spaced so custom patterns can be slotted between them.
//! Comments and strings come first so nothing inside them is highlighted,
//! declarations and accesses beat keywords (`$obj->match()`, `function list()`),
//! and keywords beat type guesses (`public readonly $x`, `self::`).

use std::sync::Arc;

use super::{Language, RegexPattern, TokenKind};
use crate::error::Result;

/// Name of the built-in PHP language
pub const NAME: &str = "php";

/// Pattern ID for function and method names
pub const FUNCTION_NAME: &str = "php.function-name";
/// Pattern ID for property and method access
pub const PROPERTY_ACCESS: &str = "php.property-access";
/// Pattern ID for property declaration types
pub const PROPERTY_TYPES: &str = "php.property-types";

const KEYWORDS: &str = "abstract|and|array|as|break|callable|case|catch|class|clone|const|continue|\
declare|default|do|echo|else|elseif|empty|enddeclare|endfor|endforeach|endif|endswitch|endwhile|\
enum|extends|false|final|finally|fn|for|foreach|function|global|goto|if|implements|include|\
include_once|instanceof|insteadof|interface|isset|list|match|mixed|namespace|never|new|null|or|\
parent|print|private|protected|public|readonly|require|require_once|return|self|static|switch|\
throw|trait|true|try|unset|use|var|void|while|xor|yield";

// Type list: one name, optionally nullable, joined by `|` or `&`
const TYPE_LIST: &str = r"[\w\\]+(?:\s*(?:\||&amp;)\s*\??[\w\\]+)*";

/// (id, kind, priority, expression)
fn definitions() -> Vec<(&'static str, TokenKind, i32, String)> {
    vec![
        ("php.block-comment", TokenKind::Comment, 10, r"/\*[\s\S]*?\*/".to_string()),
        ("php.line-comment", TokenKind::Comment, 11, r"//[^\n]*".to_string()),
        (
            "php.double-quote-value",
            TokenKind::Value,
            12,
            r"&quot;(?:\\.|[^\\\n])*?&quot;".to_string(),
        ),
        (
            "php.single-quote-value",
            TokenKind::Value,
            13,
            r"&#039;(?:\\.|[^\\\n])*?&#039;".to_string(),
        ),
        ("php.attribute", TokenKind::Attribute, 20, r"#\[(?P<match>[\w\\]+)".to_string()),
        (
            FUNCTION_NAME,
            TokenKind::FunctionName,
            30,
            r"\bfunction\s+(?:&amp;)?(?P<match>\w+)\s*\(".to_string(),
        ),
        (PROPERTY_ACCESS, TokenKind::PropertyAccess, 31, r"-&gt;(?P<match>\w+)".to_string()),
        ("php.keyword", TokenKind::Keyword, 40, format!(r"\b(?P<match>(?:{KEYWORDS}))\b")),
        (
            PROPERTY_TYPES,
            TokenKind::Type,
            50,
            format!(
                r"\b(?:(?:public|protected|private|readonly|static|var)\s+)+\??(?P<match>{TYPE_LIST})\s+\$"
            ),
        ),
        (
            "php.parameter-type",
            TokenKind::Type,
            51,
            format!(r"[(,]\s*\??(?P<match>{TYPE_LIST})\s+(?:&amp;)?(?:\.\.\.)?\$"),
        ),
        (
            "php.return-type",
            TokenKind::Type,
            52,
            format!(r"\)\s*:\s*\??(?P<match>{TYPE_LIST})"),
        ),
        ("php.new-object", TokenKind::Type, 53, r"\bnew\s+(?P<match>[\w\\]+)".to_string()),
        (
            "php.class-name",
            TokenKind::Type,
            54,
            r"\b(?:class|interface|trait|enum|extends|implements|instanceof)\s+(?P<match>[\w\\]+)"
                .to_string(),
        ),
        ("php.static-class", TokenKind::Type, 55, r"(?P<match>[\w\\]+)::".to_string()),
        (
            "php.namespace",
            TokenKind::Type,
            56,
            r"\b(?:namespace|use)\s+(?P<match>[\w\\]+)".to_string(),
        ),
        ("php.variable", TokenKind::Variable, 60, r"(?P<match>\$\w+)".to_string()),
        (
            "php.number",
            TokenKind::Number,
            70,
            r"(?:^|[^\w#$.])(?P<match>\d+(?:\.\d+)?)\b".to_string(),
        ),
    ]
}

/// Compile a single built-in PHP pattern by ID
///
/// # Errors
///
/// Returns an error if the pattern fails to compile.
pub fn pattern(id: &str) -> Result<Option<RegexPattern>> {
    definitions()
        .into_iter()
        .find(|(def_id, ..)| *def_id == id)
        .map(|(id, kind, priority, expr)| {
            RegexPattern::new(id, kind, &expr).map(|p| p.with_priority(priority))
        })
        .transpose()
}

/// Build the PHP language with all built-in patterns
///
/// # Errors
///
/// Returns an error if a pattern fails to compile.
pub fn language() -> Result<Language> {
    let mut language = Language::new(NAME).with_extension("php");

    for (id, kind, priority, expr) in definitions() {
        let pattern = RegexPattern::new(id, kind, &expr)?.with_priority(priority);
        language.push_pattern(Arc::new(pattern));
    }

    Ok(language)
}
