//! highlight - syntax highlighting for documentation code blocks
//!
//! This library tokenizes HTML-escaped source code with per-construct
//! patterns and renders the recognized tokens as styled markup.
//!
//! ```
//! use highlight::Highlighter;
//!
//! let highlighter = Highlighter::new().unwrap();
//! let html = highlighter.highlight("function foo()", "php").unwrap();
//! assert!(html.contains(r#"<span class="hl-function-name">foo</span>"#));
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod escape;
pub mod highlight;
pub mod output;

pub use config::HighlightConfig;
pub use error::{HighlightError, Result};
pub use highlight::{Highlighter, Segment, Token, TokenKind};
