//! HTML escaping of raw source before highlighting
//!
//! Patterns match escaped text, so raw snippets go through [`escape_html`]
//! first. The entities are the ones the docs pipeline produces: `&amp;`,
//! `&lt;`, `&gt;`, `&quot;` and `&#039;`.

/// Escape the HTML special characters in `input`
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() + input.len() / 8);

    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
