//! makalah-core - academic paper assembly
//!
//! Core library for makalah: the text sanitizer, the paper assembler that
//! turns metadata and oracle content into a block sequence, the shared style
//! sheet, the HTML/text preview and the single-cycle session.
//!
//! # Example
//!
//! ```
//! use makalah_ast::{ContentTree, Introduction, PaperMetadata};
//! use makalah_core::{assemble, render_text};
//!
//! let meta = PaperMetadata::new("Dampak Urbanisasi", "Budi");
//! let content = ContentTree {
//!     introduction: Introduction {
//!         background: "Line one.\n\nLine two.".to_string(),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! let doc = assemble(&meta, &content);
//! let text = render_text(&doc);
//! assert!(text.contains("DAMPAK URBANISASI"));
//! assert!(text.contains("Line two."));
//! ```

pub mod assembler;
pub mod preview;
pub mod sanitize;
pub mod session;
pub mod style;
pub mod validate;

// Re-export main types and functions
pub use assembler::{assemble, split_paragraphs, strip_chapter_label, to_roman};
pub use preview::{render_html, render_outline, render_text};
pub use sanitize::{is_safe_char, sanitize, sanitize_str};
pub use session::{Cycle, GeneratedPaper, PaperSession};
pub use style::{FontSizes, PageMargins, ParagraphSpacing, StyleSheet};
pub use validate::{validate_metadata, MetadataError, MAX_ESTIMATED_PAGES};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
