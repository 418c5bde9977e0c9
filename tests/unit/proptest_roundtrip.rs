//! Property-based tests for the tokenizer and HTML renderer
//!
//! Uses proptest to verify properties that should hold for all inputs.

use highlight::escape::escape_html;
use highlight::highlight::{Segment, TokenKind, reassemble, tokens};
use proptest::prelude::*;

use crate::common::{highlighter, strip_markup};

/// Snippets of PHP-like code glued together with arbitrary text
fn php_like() -> impl Strategy<Value = String> {
    let piece = prop_oneof![snippet(), "\\PC{0,12}"];
    prop::collection::vec(piece, 0..8).prop_map(|pieces| pieces.concat())
}

/// Complete PHP-like constructs; every string and comment is closed
fn snippet() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "function foo() {}",
        "$this->bar()",
        "public ?int $count;",
        "// comment\n",
        "/* block */",
        "'single' . \"double\"",
        "new Foo(1, 2.5)",
        "#[Attr]",
        // Quotes and comment markers nested in strings
        "\"it's\"",
        "'/*'",
        "\"// not a comment\"",
        r"'a\\'",
        "\"*/\" '//'",
    ])
    .prop_map(str::to_string)
}

fn assert_contiguous(input: &str, segments: &[Segment]) -> Result<(), TestCaseError> {
    let mut pos = 0;
    for segment in segments {
        let span = segment.span();
        prop_assert_eq!(span.start, pos);
        prop_assert!(!span.is_empty());
        prop_assert_eq!(&input[span.start..span.end], segment.text());
        pos = span.end;
    }
    prop_assert_eq!(pos, input.len());
    Ok(())
}

proptest! {
    /// Segment texts concatenate back to the input
    #[test]
    fn segments_reassemble_input(raw in php_like()) {
        let input = escape_html(&raw);
        let segments = highlighter().tokenize(&input, "php").unwrap();
        prop_assert_eq!(reassemble(&segments), input);
    }

    /// Segments are contiguous, non-empty and never overlap
    #[test]
    fn segments_cover_input_without_overlap(raw in php_like()) {
        let input = escape_html(&raw);
        let segments = highlighter().tokenize(&input, "php").unwrap();
        assert_contiguous(&input, &segments)?;
    }

    /// Removing the added markup gives back the escaped input
    #[test]
    fn html_markup_is_additive(raw in php_like()) {
        let input = escape_html(&raw);
        let html = highlighter().highlight(&input, "php").unwrap();
        prop_assert_eq!(strip_markup(&html), input);
    }

    /// A string after closed constructs is never swallowed by them
    #[test]
    fn trailing_string_survives_closed_constructs(
        pieces in prop::collection::vec(snippet(), 0..6)
    ) {
        let input = escape_html(&format!("{}; $t = 'x';", pieces.join("; ")));
        let segments = highlighter().tokenize(&input, "php").unwrap();
        let last = tokens(&segments).last().map(|t| (t.kind, t.text.as_str()));
        prop_assert_eq!(last, Some((TokenKind::Value, "&#039;x&#039;")));
    }

    /// Tokenizing the same input twice gives the same result
    #[test]
    fn tokenizing_is_deterministic(raw in php_like()) {
        let input = escape_html(&raw);
        let highlighter = highlighter();
        let first = highlighter.tokenize(&input, "php").unwrap();
        let second = highlighter.tokenize(&input, "php").unwrap();
        prop_assert_eq!(first, second);
    }
}
