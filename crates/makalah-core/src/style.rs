//! Style sheet shared by preview and export
//!
//! A single parameterized style sheet drives font, sizes, spacing and page
//! margins. The defaults follow the common Indonesian paper convention:
//! Times New Roman 12 pt, 1.5 line spacing, 4 cm left margin and 3 cm on the
//! other sides.

use serde::{Deserialize, Serialize};

use makalah_ast::{Heading, ParagraphRole};

/// Twips per centimetre (1 twip = 1/1440 inch)
const TWIPS_PER_CM: f64 = 566.93;

/// Complete style configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    /// Font family used for every run
    pub font_family: String,
    pub sizes: FontSizes,
    pub margins: PageMargins,
    /// Line spacing in twentieths of a point per line (240 = single, 360 = 1.5)
    pub line_spacing: u32,
    pub paragraph_spacing: ParagraphSpacing,
}

/// Font sizes in points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub cover_title: u32,
    pub cover_caption: u32,
    /// Top-level section headings
    pub heading: u32,
    /// Sub-section headings
    pub subheading: u32,
    pub body: u32,
}

/// Page margins in twips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMargins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

/// Space before and after body paragraphs, in twips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphSpacing {
    pub before: u32,
    pub after: u32,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            font_family: "Times New Roman".to_string(),
            sizes: FontSizes::default(),
            margins: PageMargins::default(),
            line_spacing: 360,
            paragraph_spacing: ParagraphSpacing::default(),
        }
    }
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            cover_title: 16,
            cover_caption: 14,
            heading: 14,
            subheading: 12,
            body: 12,
        }
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            top: 1701,
            right: 1701,
            bottom: 1701,
            left: 2268,
        }
    }
}

impl Default for ParagraphSpacing {
    fn default() -> Self {
        Self {
            before: 120,
            after: 120,
        }
    }
}

impl PageMargins {
    /// Uniform margins given in centimetres
    pub fn from_cm(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        let twips = |cm: f64| (cm * TWIPS_PER_CM).round() as u32;
        Self {
            top: twips(top),
            right: twips(right),
            bottom: twips(bottom),
            left: twips(left),
        }
    }

    /// A margin in centimetres, rounded to one decimal
    pub fn to_cm(twips: u32) -> f64 {
        (twips as f64 / TWIPS_PER_CM * 10.0).round() / 10.0
    }
}

impl StyleSheet {
    /// Point size for a paragraph role
    pub fn paragraph_size(&self, role: ParagraphRole) -> u32 {
        match role {
            ParagraphRole::CoverTitle => self.sizes.cover_title,
            ParagraphRole::CoverCaption
            | ParagraphRole::CoverAuthor
            | ParagraphRole::CoverInstitution => self.sizes.cover_caption,
            ParagraphRole::Body | ParagraphRole::CoverAuthorLabel | ParagraphRole::CoverDetail => {
                self.sizes.body
            }
        }
    }

    /// Point size for a heading
    pub fn heading_size(&self, heading: &Heading) -> u32 {
        if heading.level <= 1 {
            self.sizes.heading
        } else {
            self.sizes.subheading
        }
    }

    /// Extra space (twips) above a cover line, separating the cover groups
    pub fn cover_gap(&self, role: ParagraphRole) -> u32 {
        match role {
            ParagraphRole::CoverTitle => 800,
            ParagraphRole::CoverAuthorLabel => 2000,
            ParagraphRole::CoverInstitution => 2500,
            _ => 0,
        }
    }

    /// Line spacing as a CSS multiplier
    pub fn line_height(&self) -> f64 {
        self.line_spacing as f64 / 240.0
    }
}
