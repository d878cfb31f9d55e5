//! makalah CLI - Command-line interface library
//!
//! This library provides the CLI functionality for makalah, including:
//! - Generate: metadata to oracle content to DOCX
//! - Render / Preview: saved metadata and content to DOCX, HTML or text
//! - Inspect: list the paragraphs of a generated DOCX
//!
//! # Binary Usage
//!
//! ```bash
//! # Generate a paper (API key in $API_KEY)
//! makalah generate --title "Dampak Urbanisasi" --author "Budi" --preview paper.html
//!
//! # Re-export from saved content without calling the oracle
//! makalah render paper.toml content.json --output makalah.docx
//!
//! # Print the table of contents
//! makalah preview paper.toml content.json --format outline
//! ```

pub mod app;
pub mod config;

// Re-export main entry point and types
pub use app::{
    generate_command, init_command, inspect_command, load_metadata, preview_command,
    render_command,
};
pub use app::{run_cli, GenerateArgs, LevelArg, ModeArg, OutputFormat, PreviewFormat, StyleArg};
pub use config::{ConfigError, Settings};
