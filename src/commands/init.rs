//! Initialize a highlight.toml in the current directory

use std::fs;
use std::path::Path;

use highlight::config::CONFIG_FILE;
use highlight::output::OutputMode;

const STARTER_CONFIG: &str = r#"# highlight configuration

[render]
class_prefix = "hl-"
default_language = "php"

# Add a language, or extend a built-in one by reusing its name:
#
# [[language]]
# name = "blade"
# extends = "php"
#
# [[language.pattern]]
# id = "blade.directive"
# kind = "keyword"          # keyword, function-name, property-access, type,
#                           # variable, comment, value, number, attribute, generic
# regex = '@(?P<match>\w+)' # the `match` group is what gets highlighted
# priority = 35             # lower is tried first
"#;

/// Write a starter config file
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !force {
        if mode == OutputMode::Json {
            println!("{}", serde_json::json!({ "created": false, "path": CONFIG_FILE }));
        } else {
            println!("Already initialized ({CONFIG_FILE} exists).");
            println!("Use --force to overwrite.");
        }
        return Ok(());
    }

    fs::write(path, STARTER_CONFIG)?;

    if mode == OutputMode::Json {
        println!("{}", serde_json::json!({ "created": true, "path": CONFIG_FILE }));
    } else {
        println!("Created {CONFIG_FILE}");
    }
    Ok(())
}
