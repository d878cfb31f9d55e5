//! Block-level elements of an assembled paper
//!
//! An assembled paper is a flat sequence of blocks. Preview and export both
//! walk the same sequence, so every visual distinction they need (cover line
//! sizes, list markers, hanging indents) is carried on the block itself.

use serde::{Deserialize, Serialize};

/// One unit of assembled output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// A section or sub-section heading
    Heading(Heading),
    /// A paragraph of text
    Paragraph(Paragraph),
    /// One entry of an enumerated or unnumbered list
    ListItem(ListItem),
    /// Page boundary between top-level sections
    PageBreak,
}

/// A section heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// 1 for top-level sections ("BAB I"), 2 for sub-sections ("1.1")
    pub level: u8,
    /// Heading text, already sanitized
    pub text: String,
    /// Section number label such as "BAB II" or "2.1"
    pub numbering: Option<String>,
    pub alignment: Alignment,
}

/// A paragraph block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    pub alignment: Alignment,
    pub indent: Indent,
    pub role: ParagraphRole,
}

/// A list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// 1-based position for enumerated lists, `None` for unnumbered entries
    pub index: Option<usize>,
    pub text: String,
    pub indent: Indent,
}

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    #[default]
    Justified,
}

/// Paragraph indentation convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Indent {
    #[default]
    None,
    /// First line indented (body text)
    FirstLine,
    /// Every line but the first indented (bibliography, enumerations)
    Hanging,
}

/// What a paragraph is, used to pick size and weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParagraphRole {
    #[default]
    Body,
    /// "MAKALAH" caption above the title
    CoverCaption,
    CoverTitle,
    /// "Disusun Oleh:" label
    CoverAuthorLabel,
    CoverAuthor,
    CoverInstitution,
    /// Subject, lecturer and academic year lines
    CoverDetail,
}

impl ParagraphRole {
    pub fn is_cover(self) -> bool {
        self != ParagraphRole::Body
    }

    /// Cover lines printed in bold
    pub fn is_bold(self) -> bool {
        matches!(
            self,
            ParagraphRole::CoverCaption
                | ParagraphRole::CoverTitle
                | ParagraphRole::CoverAuthor
                | ParagraphRole::CoverInstitution
        )
    }
}

impl Block {
    /// Plain text carried by the block, `None` for page breaks
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading(h) => Some(&h.text),
            Block::Paragraph(p) => Some(&p.text),
            Block::ListItem(item) => Some(&item.text),
            Block::PageBreak => None,
        }
    }

    pub fn is_page_break(&self) -> bool {
        matches!(self, Block::PageBreak)
    }
}

impl Heading {
    /// Full label: numbering and text joined by a space
    pub fn label(&self) -> String {
        match &self.numbering {
            Some(num) if !self.text.is_empty() => format!("{} {}", num, self.text),
            Some(num) => num.clone(),
            None => self.text.clone(),
        }
    }
}

impl Paragraph {
    /// Justified body paragraph
    pub fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: Alignment::Justified,
            indent: Indent::FirstLine,
            role: ParagraphRole::Body,
        }
    }

    /// Centered cover line
    pub fn cover(role: ParagraphRole, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: Alignment::Center,
            indent: Indent::None,
            role,
        }
    }
}

impl ListItem {
    /// Marker printed before the text ("1." or nothing)
    pub fn marker(&self) -> Option<String> {
        self.index.map(|i| format!("{}.", i))
    }

    /// Marker and text joined as printed
    pub fn rendered(&self) -> String {
        match self.marker() {
            Some(marker) => format!("{} {}", marker, self.text),
            None => self.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_label() {
        let h = Heading {
            level: 2,
            text: "Latar Belakang".to_string(),
            numbering: Some("1.1".to_string()),
            alignment: Alignment::Left,
        };
        assert_eq!(h.label(), "1.1 Latar Belakang");

        let unnumbered = Heading {
            numbering: None,
            text: "KATA PENGANTAR".to_string(),
            ..h
        };
        assert_eq!(unnumbered.label(), "KATA PENGANTAR");
    }

    #[test]
    fn test_list_item_rendering() {
        let numbered = ListItem {
            index: Some(2),
            text: "Mengetahui.".to_string(),
            indent: Indent::Hanging,
        };
        assert_eq!(numbered.rendered(), "2. Mengetahui.");

        let plain = ListItem {
            index: None,
            text: "Ref 1.".to_string(),
            indent: Indent::Hanging,
        };
        assert_eq!(plain.marker(), None);
        assert_eq!(plain.rendered(), "Ref 1.");
    }

    #[test]
    fn test_block_text() {
        assert_eq!(Block::PageBreak.text(), None);
        assert!(Block::PageBreak.is_page_break());
        let p = Block::Paragraph(Paragraph::body("Isi."));
        assert_eq!(p.text(), Some("Isi."));
    }

    #[test]
    fn test_cover_roles() {
        assert!(ParagraphRole::CoverTitle.is_bold());
        assert!(!ParagraphRole::CoverDetail.is_bold());
        assert!(ParagraphRole::CoverDetail.is_cover());
        assert!(!ParagraphRole::Body.is_cover());
    }
}
