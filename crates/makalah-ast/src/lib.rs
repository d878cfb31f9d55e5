//! makalah-ast - Paper data model
//!
//! This crate provides the types shared by every makalah crate: the metadata
//! a user submits, the content tree the oracle returns, and the block
//! sequence the assembler produces.

pub mod block;
pub mod content;
pub mod document;
pub mod paper;

pub use block::{Alignment, Block, Heading, Indent, ListItem, Paragraph, ParagraphRole};
pub use content::{Chapter, Closing, ContentTree, Introduction, SubChapter};
pub use document::{AssembledDocument, OutlineEntry};
pub use paper::{EducationLevel, GenerationMode, LanguageStyle, PaperMetadata};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
