//! Assembled document root
//!
//! `AssembledDocument` is derived from metadata and content in one pass and
//! never edited afterwards. It is the only input of the preview renderer and
//! of the DOCX exporter.

use serde::{Deserialize, Serialize};

use crate::block::{Block, Heading};

/// An assembled paper
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssembledDocument {
    /// Sanitized paper title, used for document properties
    pub title: String,
    /// Sanitized author, used for document properties
    pub author: String,
    /// Blocks in reading order
    pub blocks: Vec<Block>,
}

/// One table-of-contents entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub level: u8,
    pub label: String,
}

impl AssembledDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with title and author set
    pub fn with_title(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks, page breaks included
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Number of blocks that print something
    pub fn content_len(&self) -> usize {
        self.blocks.iter().filter(|b| !b.is_page_break()).count()
    }

    /// Blocks grouped into pages, split on page breaks
    pub fn sections(&self) -> Vec<&[Block]> {
        self.blocks
            .split(Block::is_page_break)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// All headings in order
    pub fn headings(&self) -> impl Iterator<Item = &Heading> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Heading(h) => Some(h),
            _ => None,
        })
    }

    /// Table-of-contents entries derived from the headings
    pub fn outline(&self) -> Vec<OutlineEntry> {
        self.headings()
            .map(|h| OutlineEntry {
                level: h.level,
                label: h.label(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Alignment, Paragraph};

    fn heading(level: u8, num: &str, text: &str) -> Block {
        Block::Heading(Heading {
            level,
            text: text.to_string(),
            numbering: Some(num.to_string()),
            alignment: Alignment::Left,
        })
    }

    #[test]
    fn test_empty_document() {
        let doc = AssembledDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
        assert!(doc.sections().is_empty());
    }

    #[test]
    fn test_sections_split_on_page_breaks() {
        let mut doc = AssembledDocument::with_title("Judul", "Budi");
        doc.push(Block::Paragraph(Paragraph::body("cover")));
        doc.push(Block::PageBreak);
        doc.push(heading(1, "BAB I", "PENDAHULUAN"));
        doc.push(Block::Paragraph(Paragraph::body("isi")));

        let sections = doc.sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].len(), 2);
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.content_len(), 3);
    }

    #[test]
    fn test_outline() {
        let mut doc = AssembledDocument::new();
        doc.push(heading(1, "BAB I", "PENDAHULUAN"));
        doc.push(heading(2, "1.1", "Latar Belakang"));
        let outline = doc.outline();
        assert_eq!(outline.len(), 2);
        assert_eq!(outline[0].label, "BAB I PENDAHULUAN");
        assert_eq!(outline[1].level, 2);
    }
}
