//! Integration tests for the highlight CLI

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn highlight() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("highlight"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version() {
    highlight()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("highlight"));
}

#[test]
fn test_help() {
    highlight()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Syntax highlighting for documentation code blocks"))
        .stdout(predicate::str::contains("--raw"));
}

#[test]
fn test_no_args_shows_info() {
    highlight().assert().success().stdout(predicate::str::contains("highlight v"));
}

#[test]
fn test_render_raw_stdin() {
    let temp = TempDir::new().unwrap();

    highlight()
        .args(["render", "--lang", "php", "--raw"])
        .current_dir(temp.path())
        .write_stdin("$this->foo()")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"-&gt;<span class="hl-property-access">foo</span>()"#,
        ));
}

#[test]
fn test_render_infers_language_from_extension() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("snippet.php");
    std::fs::write(&file, "function foo()").unwrap();

    highlight()
        .arg("render")
        .arg(&file)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<span class="hl-function-name">foo</span>"#));
}

#[test]
fn test_render_infers_dotted_extension() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("highlight.toml"),
        r#"
[[language]]
name = "blade"
extends = "php"
extensions = ["blade.php"]

[[language.pattern]]
id = "blade.directive"
kind = "keyword"
regex = '@(?P<match>\w+)'
priority = 35
"#,
    )
    .unwrap();
    let file = temp.path().join("x.blade.php");
    std::fs::write(&file, "@if($a)").unwrap();

    highlight()
        .args(["--json", "render"])
        .arg(&file)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"language\": \"blade\""));

    highlight()
        .arg("render")
        .arg(&file)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"@<span class="hl-keyword">if</span>"#));
}

#[test]
fn test_render_unknown_language_falls_back_to_plain() {
    let temp = TempDir::new().unwrap();

    highlight()
        .args(["render", "--lang", "cobol"])
        .current_dir(temp.path())
        .write_stdin("function foo()")
        .assert()
        .success()
        .stdout("function foo()")
        .stderr(predicate::str::contains("language not supported: cobol"));
}

#[test]
fn test_render_json() {
    let temp = TempDir::new().unwrap();

    highlight()
        .args(["--json", "render", "--lang", "php"])
        .current_dir(temp.path())
        .write_stdin("function foo()")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"language\": \"php\""));
}

#[test]
fn test_tokens_json() {
    let temp = TempDir::new().unwrap();

    highlight()
        .args(["--json", "tokens", "--lang", "php", "--raw"])
        .current_dir(temp.path())
        .write_stdin("$obj->foo")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"property-access\""))
        .stdout(predicate::str::contains("\"text\": \"foo\""));
}

#[test]
fn test_tokens_unknown_language_fails() {
    let temp = TempDir::new().unwrap();

    highlight()
        .args(["tokens", "--lang", "cobol"])
        .current_dir(temp.path())
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("language not supported"));
}

#[test]
fn test_languages_lists_php() {
    let temp = TempDir::new().unwrap();

    highlight()
        .arg("languages")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("php"));
}

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    highlight()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created highlight.toml"));

    assert!(temp.path().join("highlight.toml").exists());

    // The starter config is itself valid
    highlight()
        .arg("languages")
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn test_init_does_not_overwrite() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("highlight.toml"), "# mine\n").unwrap();

    highlight()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));

    let content = std::fs::read_to_string(temp.path().join("highlight.toml")).unwrap();
    assert_eq!(content, "# mine\n");
}

#[test]
fn test_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("highlight.toml"),
        "[[language]]\nname = \"x\"\n\n[[language.pattern]]\nid = \"x.bad\"\nkind = \"keyword\"\nregex = '('\n",
    )
    .unwrap();

    highlight()
        .arg("languages")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern `x.bad`"));
}
