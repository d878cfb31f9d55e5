//! Paper assembler
//!
//! Maps `{PaperMetadata, ContentTree}` to an [`AssembledDocument`]. The
//! transform is pure and total: missing or empty optional content removes the
//! corresponding section, it never produces an error.
//!
//! Section order is fixed: cover, preface, introduction (BAB I), one BAB per
//! chapter, closing, bibliography. Each chapter is its own BAB numbered from
//! II; its sub-chapters are numbered `<bab>.<n>` with `n` restarting at 1.
//! The closing takes the BAB number after the last chapter.
//!
//! # Example
//!
//! ```
//! use makalah_ast::{Chapter, ContentTree, PaperMetadata};
//! use makalah_core::assemble;
//!
//! let meta = PaperMetadata::new("Dampak Urbanisasi", "Budi");
//! let content = ContentTree {
//!     chapters: vec![Chapter::new("Pembahasan").with_sub("Topik A", "Isi A.")],
//!     ..Default::default()
//! };
//!
//! let doc = assemble(&meta, &content);
//! assert!(doc.headings().any(|h| h.label() == "2.1 Topik A"));
//! ```

use std::sync::OnceLock;

use regex::Regex;

use makalah_ast::{
    Alignment, AssembledDocument, Block, Chapter, Closing, ContentTree, Heading, Indent,
    Introduction, ListItem, PaperMetadata, Paragraph, ParagraphRole,
};

use crate::sanitize::sanitize_str;

const COVER_CAPTION: &str = "MAKALAH";
const AUTHOR_LABEL: &str = "Disusun Oleh:";
const LECTURER_LABEL: &str = "Dosen Pengampu:";
const PREFACE: &str = "KATA PENGANTAR";
const INTRODUCTION: &str = "PENDAHULUAN";
const BACKGROUND: &str = "Latar Belakang";
const PROBLEMS: &str = "Rumusan Masalah";
const OBJECTIVES: &str = "Tujuan";
const CLOSING: &str = "PENUTUP";
const CONCLUSION: &str = "Kesimpulan";
const SUGGESTIONS: &str = "Saran";
const BIBLIOGRAPHY: &str = "DAFTAR PUSTAKA";

/// First BAB number used by body chapters (BAB I is the introduction)
const FIRST_CHAPTER_ORDINAL: usize = 2;

/// Assemble a paper from metadata and content
pub fn assemble(metadata: &PaperMetadata, content: &ContentTree) -> AssembledDocument {
    let mut builder = DocumentBuilder::new(metadata);

    builder.cover(metadata);

    if metadata.include_preface {
        let paragraphs = split_paragraphs(content.preface.as_deref());
        if !paragraphs.is_empty() {
            builder.preface(paragraphs);
        }
    }

    builder.introduction(&content.introduction);

    for (i, chapter) in content.chapters.iter().enumerate() {
        builder.chapter(FIRST_CHAPTER_ORDINAL + i, chapter);
    }

    if metadata.include_closing {
        if let Some(closing) = &content.closing {
            builder.closing(FIRST_CHAPTER_ORDINAL + content.chapters.len(), closing);
        }
    }

    if metadata.include_bibliography {
        let entries: Vec<String> = content
            .bibliography
            .iter()
            .flatten()
            .map(|e| clean_line(e))
            .filter(|e| !e.is_empty())
            .collect();
        if !entries.is_empty() {
            builder.bibliography(entries);
        }
    }

    let doc = builder.finish();
    log::debug!(
        "assembled {} blocks ({} chapters, {} sections)",
        doc.len(),
        content.chapters.len(),
        doc.sections().len()
    );
    doc
}

/// Split multi-line text into paragraph strings
///
/// Lines are split on LF and CR, sanitized, trimmed, and dropped when empty.
pub fn split_paragraphs(text: Option<&str>) -> Vec<String> {
    text.unwrap_or_default()
        .split(['\n', '\r'])
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Roman numeral for a positive ordinal; 0 renders as an empty string
pub fn to_roman(mut n: usize) -> String {
    const TABLE: &[(usize, &str)] = &[
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut out = String::new();
    for &(value, numeral) in TABLE {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}

/// Remove a leading "BAB II" / "Bab 2:" label from an oracle chapter title
pub fn strip_chapter_label(title: &str) -> &str {
    static LABEL_RE: OnceLock<Regex> = OnceLock::new();
    let re = LABEL_RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*bab\s+(?:[ivxlcdm]+|\d+)\b[\s:.\-–]*").unwrap()
    });
    match re.find(title) {
        Some(m) => &title[m.end()..],
        None => title,
    }
}

fn clean_line(line: &str) -> String {
    sanitize_str(line).trim().to_string()
}

/// Uppercase after sanitizing, then sanitize again since case mapping can
/// introduce combining marks outside the safe set
fn upper(text: &str) -> String {
    sanitize_str(&clean_line(text).to_uppercase())
}

fn bab(ordinal: usize) -> String {
    format!("BAB {}", to_roman(ordinal))
}

/// Accumulates blocks and separates top-level groups with page breaks
struct DocumentBuilder {
    doc: AssembledDocument,
    groups: usize,
}

impl DocumentBuilder {
    fn new(metadata: &PaperMetadata) -> Self {
        Self {
            doc: AssembledDocument::with_title(
                clean_line(&metadata.title),
                clean_line(&metadata.author),
            ),
            groups: 0,
        }
    }

    fn finish(self) -> AssembledDocument {
        self.doc
    }

    /// Start a top-level group, breaking the page after the previous one
    fn begin_group(&mut self) {
        if self.groups > 0 {
            self.doc.push(Block::PageBreak);
        }
        self.groups += 1;
    }

    fn cover_line(&mut self, role: ParagraphRole, text: String) {
        self.doc.push(Block::Paragraph(Paragraph::cover(role, text)));
    }

    fn section_heading(&mut self, numbering: Option<String>, text: impl Into<String>) {
        self.doc.push(Block::Heading(Heading {
            level: 1,
            text: text.into(),
            numbering,
            alignment: Alignment::Center,
        }));
    }

    fn sub_heading(&mut self, numbering: String, text: impl Into<String>) {
        self.doc.push(Block::Heading(Heading {
            level: 2,
            text: text.into(),
            numbering: Some(numbering),
            alignment: Alignment::Left,
        }));
    }

    fn paragraphs(&mut self, paragraphs: Vec<String>) {
        for text in paragraphs {
            self.doc.push(Block::Paragraph(Paragraph::body(text)));
        }
    }

    fn enumerated(&mut self, items: &[String]) {
        let items = items.iter().map(|i| clean_line(i)).filter(|i| !i.is_empty());
        for (i, text) in items.enumerate() {
            self.doc.push(Block::ListItem(ListItem {
                index: Some(i + 1),
                text,
                indent: Indent::Hanging,
            }));
        }
    }

    fn cover(&mut self, metadata: &PaperMetadata) {
        self.begin_group();

        self.cover_line(ParagraphRole::CoverCaption, COVER_CAPTION.to_string());
        self.cover_line(ParagraphRole::CoverTitle, upper(&metadata.title));
        self.cover_line(ParagraphRole::CoverAuthorLabel, AUTHOR_LABEL.to_string());
        self.cover_line(ParagraphRole::CoverAuthor, clean_line(&metadata.author));

        let institution = upper(&metadata.institution);
        if !institution.is_empty() {
            self.cover_line(ParagraphRole::CoverInstitution, institution);
        }
        let subject = clean_line(&metadata.subject);
        if !subject.is_empty() {
            self.cover_line(ParagraphRole::CoverDetail, subject);
        }
        let lecturer = clean_line(metadata.lecturer.as_deref().unwrap_or_default());
        if !lecturer.is_empty() {
            self.cover_line(
                ParagraphRole::CoverDetail,
                format!("{} {}", LECTURER_LABEL, lecturer),
            );
        }
        let year = clean_line(&metadata.academic_year);
        if !year.is_empty() {
            self.cover_line(ParagraphRole::CoverDetail, year);
        }
    }

    fn preface(&mut self, paragraphs: Vec<String>) {
        self.begin_group();
        self.section_heading(None, PREFACE);
        self.paragraphs(paragraphs);
    }

    fn introduction(&mut self, intro: &Introduction) {
        self.begin_group();
        self.section_heading(Some(bab(1)), INTRODUCTION);

        self.sub_heading("1.1".to_string(), BACKGROUND);
        self.paragraphs(split_paragraphs(Some(&intro.background)));

        self.sub_heading("1.2".to_string(), PROBLEMS);
        self.enumerated(&intro.problem_formulation);

        self.sub_heading("1.3".to_string(), OBJECTIVES);
        self.enumerated(&intro.objectives);
    }

    fn chapter(&mut self, ordinal: usize, chapter: &Chapter) {
        self.begin_group();
        let title = upper(strip_chapter_label(&chapter.title));
        self.section_heading(Some(bab(ordinal)), title);

        for (j, sub) in chapter.sub_chapters.iter().enumerate() {
            self.sub_heading(format!("{}.{}", ordinal, j + 1), clean_line(&sub.title));
            self.paragraphs(split_paragraphs(Some(&sub.content)));
        }
    }

    fn closing(&mut self, ordinal: usize, closing: &Closing) {
        let conclusion = split_paragraphs(Some(&closing.conclusion));
        let suggestions = split_paragraphs(Some(&closing.suggestions));
        if conclusion.is_empty() && suggestions.is_empty() {
            return;
        }

        self.begin_group();
        self.section_heading(Some(bab(ordinal)), CLOSING);
        self.sub_heading(format!("{}.1", ordinal), CONCLUSION);
        self.paragraphs(conclusion);
        self.sub_heading(format!("{}.2", ordinal), SUGGESTIONS);
        self.paragraphs(suggestions);
    }

    fn bibliography(&mut self, entries: Vec<String>) {
        self.begin_group();
        self.section_heading(None, BIBLIOGRAPHY);
        for text in entries {
            self.doc.push(Block::ListItem(ListItem {
                index: None,
                text,
                indent: Indent::Hanging,
            }));
        }
    }
}
