//! Integration tests for configuration-driven registries

use highlight::highlight::{TokenKind, tokens};
use highlight::{HighlightConfig, HighlightError, Highlighter};
use tempfile::TempDir;

const BLADE: &str = r#"
[render]
class_prefix = "code-"
default_language = "blade"

[[language]]
name = "blade"
aliases = ["blade.php"]
extends = "php"

[[language.pattern]]
id = "blade.directive"
kind = "keyword"
regex = '@(?P<match>\w+)'
priority = 35
"#;

#[test]
fn test_discover_without_file_is_default() {
    let temp = TempDir::new().unwrap();
    let config = HighlightConfig::discover(temp.path()).unwrap();
    assert_eq!(config, HighlightConfig::default());
}

#[test]
fn test_discover_loads_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(HighlightConfig::path_in(temp.path()), BLADE).unwrap();

    let config = HighlightConfig::discover(temp.path()).unwrap();
    assert_eq!(config.render.class_prefix, "code-");
    assert_eq!(config.render.default_language.as_deref(), Some("blade"));
    assert_eq!(config.languages.len(), 1);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = HighlightConfig::load(&temp.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, HighlightError::Io(_)));
}

#[test]
fn test_extended_language_inherits_patterns() {
    let config = HighlightConfig::parse(BLADE).unwrap();
    let highlighter = Highlighter::from_config(&config).unwrap();

    let segments = highlighter.tokenize("@if function foo()", "blade").unwrap();
    let found: Vec<_> = tokens(&segments).map(|t| (t.kind, t.text.as_str())).collect();

    assert_eq!(
        found,
        vec![
            (TokenKind::Keyword, "if"),
            (TokenKind::Keyword, "function"),
            (TokenKind::FunctionName, "foo"),
        ]
    );
    // The parent language is untouched
    assert!(highlighter.registry().get("php").unwrap().pattern("blade.directive").is_none());
}

#[test]
fn test_class_prefix_applies_to_html() {
    let config = HighlightConfig::parse(BLADE).unwrap();
    let highlighter = Highlighter::from_config(&config).unwrap();

    let html = highlighter.highlight("function foo()", "php").unwrap();
    assert!(html.contains(r#"<span class="code-function-name">foo</span>"#));
}

#[test]
fn test_same_name_extends_builtin_in_place() {
    let config = HighlightConfig::parse(
        r#"
        [[language]]
        name = "php"
        aliases = ["php8"]

        [[language.pattern]]
        id = "php.todo"
        kind = "generic"
        regex = 'TODO'
        priority = 5
        "#,
    )
    .unwrap();
    let registry = config.build_registry().unwrap();

    assert_eq!(registry.languages().len(), 1);
    let php = registry.get("php8").unwrap();
    assert!(php.pattern("php.todo").is_some());
    assert!(php.pattern("php.function-name").is_some());
}

#[test]
fn test_malformed_regex_fails_at_build_time() {
    let config = HighlightConfig::parse(
        r#"
        [[language]]
        name = "broken"

        [[language.pattern]]
        id = "broken.group"
        kind = "keyword"
        regex = '(unclosed'
        "#,
    )
    .unwrap();

    let err = Highlighter::from_config(&config).unwrap_err();
    assert!(matches!(err, HighlightError::InvalidPattern { ref id, .. } if id == "broken.group"));
    assert!(err.to_string().contains("broken.group"));
}

#[test]
fn test_extends_unknown_language() {
    let config = HighlightConfig::parse(
        r#"
        [[language]]
        name = "twig"
        extends = "jinja"
        "#,
    )
    .unwrap();

    let err = config.build_registry().unwrap_err();
    assert!(matches!(err, HighlightError::UnsupportedLanguage(ref l) if l == "jinja"));
}

#[test]
fn test_alias_clash_is_rejected() {
    let config = HighlightConfig::parse(
        r#"
        [[language]]
        name = "hack"
        aliases = ["php"]
        "#,
    )
    .unwrap();

    let err = config.build_registry().unwrap_err();
    assert!(matches!(err, HighlightError::DuplicateLanguage(ref l) if l == "php"));
}
