//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands;
use highlight::output::OutputMode;

/// highlight - Syntax highlighting for documentation code blocks
#[derive(Parser, Debug)]
#[command(
    name = "highlight",
    version,
    about = "Syntax highlighting for documentation code blocks",
    long_about = "Syntax highlighting for documentation code blocks.\n\n\
                  Tokenize source code with per-construct patterns and wrap the\n\
                  recognized tokens in markup.\n\n\
                  Input is expected to be HTML-escaped; pass --raw to escape it first."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a config file (defaults to ./highlight.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Highlight a file or stdin
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },

    /// Show the tokens found in a file or stdin
    Tokens {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List supported languages
    Languages,

    /// Write a starter highlight.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Where the source comes from and how to read it
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Source file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Language name or alias (inferred from the file extension when omitted)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Input is raw source; escape HTML entities before highlighting
    #[arg(long)]
    pub raw: bool,
}

/// Output format for rendering
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// HTML spans with class names
    Html,
    /// ANSI colors for the terminal
    Ansi,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Render { input, format }) => {
            commands::render(&input, format, config_path, output_mode)
        },
        Some(Command::Tokens { input }) => commands::tokens(&input, config_path, output_mode),
        Some(Command::Languages) => commands::languages(config_path, output_mode),
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("highlight v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("highlight v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'highlight --help' for usage");
                println!("Run 'highlight render <file>' to highlight a snippet");
            }
            Ok(())
        },
    }
}
