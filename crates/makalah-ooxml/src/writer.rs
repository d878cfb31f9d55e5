//! DOCX writer
//!
//! Generates `word/document.xml` from an [`AssembledDocument`]. Each block
//! becomes exactly one `w:p`, so the paragraph sequence of the exported file
//! lines up with the preview element sequence.

use makalah_ast::{
    Alignment, AssembledDocument, Block, Heading, Indent, ListItem, Paragraph,
};
use makalah_core::StyleSheet;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{OoxmlError, Result};
use crate::parts::style_id;

/// A4 in twips
pub const PAGE_WIDTH: u32 = 11906;
pub const PAGE_HEIGHT: u32 = 16838;

/// Indent step for first-line and hanging indents (1.25 cm)
pub const INDENT_STEP: u32 = 709;

/// Writes the main document part
pub struct DocxWriter<'a> {
    style: &'a StyleSheet,
    output: String,
}

impl<'a> DocxWriter<'a> {
    pub fn new(style: &'a StyleSheet) -> Self {
        Self {
            style,
            output: String::new(),
        }
    }

    /// Generate document.xml for the whole document
    pub fn generate_document_xml(mut self, doc: &AssembledDocument) -> String {
        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(r#"<w:document "#);
        self.output
            .push_str(r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#);
        self.output.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );
        self.output.push('\n');
        self.output.push_str("<w:body>\n");

        for block in &doc.blocks {
            self.generate_block(block);
        }

        self.generate_section_properties();
        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");
        self.output
    }

    fn generate_block(&mut self, block: &Block) {
        match block {
            Block::Heading(h) => self.generate_heading(h),
            Block::Paragraph(p) => self.generate_paragraph(p),
            Block::ListItem(item) => self.generate_list_item(item),
            Block::PageBreak => self.generate_page_break(),
        }
    }

    fn generate_heading(&mut self, heading: &Heading) {
        let style = if heading.level <= 1 {
            style_id::HEADING_1
        } else {
            style_id::HEADING_2
        };
        let size = self.style.heading_size(heading);

        self.output.push_str("<w:p>\n");
        self.paragraph_properties(style, heading.alignment, Indent::None, 0);

        match (&heading.numbering, heading.level <= 1) {
            // "BAB I" on its own line above the chapter title
            (Some(num), true) => {
                self.run(num, size, true);
                if !heading.text.is_empty() {
                    self.output.push_str("<w:r><w:br/></w:r>\n");
                    self.run(&heading.text, size, true);
                }
            }
            _ => self.run(&heading.label(), size, true),
        }

        self.output.push_str("</w:p>\n");
    }

    fn generate_paragraph(&mut self, para: &Paragraph) {
        let (style, gap) = if para.role.is_cover() {
            (style_id::COVER, self.style.cover_gap(para.role))
        } else {
            (style_id::NORMAL, 0)
        };
        let size = self.style.paragraph_size(para.role);

        self.output.push_str("<w:p>\n");
        self.paragraph_properties(style, para.alignment, para.indent, gap);
        self.run(&para.text, size, para.role.is_bold());
        self.output.push_str("</w:p>\n");
    }

    fn generate_list_item(&mut self, item: &ListItem) {
        self.output.push_str("<w:p>\n");
        self.paragraph_properties(style_id::LIST, Alignment::Justified, item.indent, 0);
        self.run(&item.rendered(), self.style.sizes.body, false);
        self.output.push_str("</w:p>\n");
    }

    fn generate_page_break(&mut self) {
        self.output.push_str("<w:p>\n");
        self.output.push_str("<w:r>\n");
        self.output.push_str("<w:br w:type=\"page\"/>\n");
        self.output.push_str("</w:r>\n");
        self.output.push_str("</w:p>\n");
    }

    fn paragraph_properties(&mut self, style: &str, alignment: Alignment, indent: Indent, gap: u32) {
        self.output.push_str("<w:pPr>\n");
        self.output
            .push_str(&format!("<w:pStyle w:val=\"{}\"/>\n", style));
        if gap > 0 {
            self.output.push_str(&format!(
                "<w:spacing w:before=\"{}\" w:line=\"{}\" w:lineRule=\"auto\"/>\n",
                gap, self.style.line_spacing
            ));
        } else {
            self.output.push_str(&format!(
                "<w:spacing w:line=\"{}\" w:lineRule=\"auto\"/>\n",
                self.style.line_spacing
            ));
        }
        match indent {
            Indent::None => {}
            Indent::FirstLine => self
                .output
                .push_str(&format!("<w:ind w:firstLine=\"{}\"/>\n", INDENT_STEP)),
            Indent::Hanging => self.output.push_str(&format!(
                "<w:ind w:left=\"{}\" w:hanging=\"{}\"/>\n",
                INDENT_STEP, INDENT_STEP
            )),
        }
        self.output
            .push_str(&format!("<w:jc w:val=\"{}\"/>\n", jc_value(alignment)));
        self.output.push_str("</w:pPr>\n");
    }

    fn run(&mut self, text: &str, size_pt: u32, bold: bool) {
        let font = escape_xml(&self.style.font_family);
        let half_points = size_pt * 2;
        self.output.push_str("<w:r>\n<w:rPr>");
        self.output.push_str(&format!(
            "<w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:cs=\"{font}\"/>"
        ));
        if bold {
            self.output.push_str("<w:b/><w:bCs/>");
        }
        self.output.push_str(&format!(
            "<w:sz w:val=\"{half_points}\"/><w:szCs w:val=\"{half_points}\"/>"
        ));
        self.output.push_str("</w:rPr>\n");
        self.output.push_str(&format!(
            "<w:t xml:space=\"preserve\">{}</w:t>\n",
            escape_xml(text)
        ));
        self.output.push_str("</w:r>\n");
    }

    fn generate_section_properties(&mut self) {
        let m = &self.style.margins;
        self.output.push_str("<w:sectPr>\n");
        self.output.push_str(&format!(
            "<w:pgSz w:w=\"{}\" w:h=\"{}\"/>\n",
            PAGE_WIDTH, PAGE_HEIGHT
        ));
        self.output.push_str(&format!(
            "<w:pgMar w:top=\"{}\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\" w:header=\"709\" w:footer=\"709\" w:gutter=\"0\"/>\n",
            m.top, m.right, m.bottom, m.left
        ));
        self.output.push_str("</w:sectPr>\n");
    }
}

fn jc_value(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Justified => "both",
    }
}

/// Escape text for XML element content and attribute values
pub(crate) fn escape_xml(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}

/// Check that a generated part parses as a single well-formed element tree
pub fn check_well_formed(part: &str, xml: &str) -> Result<()> {
    let mut reader = Reader::from_str(xml);
    let mut depth: usize = 0;
    let mut roots: usize = 0;

    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Ok(Event::Empty(_)) => {
                if depth == 0 {
                    roots += 1;
                }
            }
            Ok(Event::End(_)) => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    OoxmlError::InvalidStructure(format!("{}: unbalanced end tag", part))
                })?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(OoxmlError::Xml(e)),
        }
    }

    if depth != 0 {
        return Err(OoxmlError::InvalidStructure(format!(
            "{}: {} unclosed element(s)",
            part, depth
        )));
    }
    if roots != 1 {
        return Err(OoxmlError::InvalidStructure(format!(
            "{}: expected one root element, found {}",
            part, roots
        )));
    }
    Ok(())
}
