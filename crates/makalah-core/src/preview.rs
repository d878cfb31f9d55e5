//! Preview rendering
//!
//! Renders an [`AssembledDocument`] for on-screen reading. The HTML preview
//! is a standalone page whose page breaks become print page breaks, so the
//! browser's own print dialog produces the paginated copy. The text preview
//! is meant for terminals.
//!
//! Both renderers emit exactly one element per non-break block, in block
//! order, so the preview and the exported DOCX stay structurally aligned.

use std::fmt::Write;

use makalah_ast::{
    Alignment, AssembledDocument, Block, Heading, Indent, ListItem, Paragraph, ParagraphRole,
};

use crate::style::{PageMargins, StyleSheet};

/// Render a standalone HTML preview page
pub fn render_html(doc: &AssembledDocument, style: &StyleSheet) -> String {
    HtmlRenderer::new(style).render(doc)
}

/// Render a plain text preview
pub fn render_text(doc: &AssembledDocument) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        match block {
            Block::Heading(h) if h.level <= 1 => {
                if let Some(num) = &h.numbering {
                    writeln!(out, "{}", num).unwrap();
                }
                if !h.text.is_empty() {
                    writeln!(out, "{}", h.text).unwrap();
                }
                writeln!(out).unwrap();
            }
            Block::Heading(h) => {
                writeln!(out, "{}", h.label()).unwrap();
            }
            Block::Paragraph(p) => {
                writeln!(out, "{}", p.text).unwrap();
                if !p.role.is_cover() {
                    writeln!(out).unwrap();
                }
            }
            Block::ListItem(item) => match item.marker() {
                Some(marker) => writeln!(out, "  {} {}", marker, item.text).unwrap(),
                None => writeln!(out, "{}", item.text).unwrap(),
            },
            Block::PageBreak => {
                writeln!(out, "\n{}\n", "-".repeat(40)).unwrap();
            }
        }
    }
    out.trim_end().to_string()
}

/// Render the table of contents ("DAFTAR ISI") as plain text
pub fn render_outline(doc: &AssembledDocument) -> String {
    let mut out = String::from("DAFTAR ISI\n");
    for entry in doc.outline() {
        let indent = "  ".repeat(entry.level.saturating_sub(1) as usize);
        writeln!(out, "{}{}", indent, entry.label).unwrap();
    }
    out.trim_end().to_string()
}

struct HtmlRenderer<'a> {
    style: &'a StyleSheet,
    output: String,
    next_id: usize,
}

impl<'a> HtmlRenderer<'a> {
    fn new(style: &'a StyleSheet) -> Self {
        Self {
            style,
            output: String::new(),
            next_id: 0,
        }
    }

    fn render(mut self, doc: &AssembledDocument) -> String {
        self.output.push_str("<!DOCTYPE html>\n<html lang=\"id\">\n<head>\n");
        self.output.push_str("<meta charset=\"utf-8\">\n");
        writeln!(self.output, "<title>{}</title>", escape_html(&doc.title)).unwrap();
        self.write_css();
        self.output.push_str("</head>\n<body>\n<main class=\"paper\">\n");

        for block in &doc.blocks {
            match block {
                Block::Heading(h) => self.heading(h),
                Block::Paragraph(p) => self.paragraph(p),
                Block::ListItem(item) => self.list_item(item),
                Block::PageBreak => self.output.push_str("<hr class=\"page-break\">\n"),
            }
        }

        self.output.push_str("</main>\n</body>\n</html>\n");
        self.output
    }

    fn write_css(&mut self) {
        let s = self.style;
        let m = &s.margins;
        self.output.push_str("<style>\n");
        writeln!(
            self.output,
            ".paper {{ font-family: \"{}\", serif; font-size: {}pt; line-height: {}; \
             padding: {}cm {}cm {}cm {}cm; max-width: 21cm; margin: 0 auto; }}",
            escape_html(&s.font_family),
            s.sizes.body,
            s.line_height(),
            PageMargins::to_cm(m.top),
            PageMargins::to_cm(m.right),
            PageMargins::to_cm(m.bottom),
            PageMargins::to_cm(m.left),
        )
        .unwrap();
        writeln!(
            self.output,
            "h1 {{ font-size: {}pt; text-align: center; }}\nh2 {{ font-size: {}pt; }}",
            s.sizes.heading, s.sizes.subheading
        )
        .unwrap();
        writeln!(
            self.output,
            ".cover {{ text-align: center; margin: 0; }}\n.cover-title {{ font-size: {}pt; }}\n\
             .cover-large {{ font-size: {}pt; }}\n.bold {{ font-weight: bold; }}",
            s.sizes.cover_title, s.sizes.cover_caption
        )
        .unwrap();
        self.output.push_str(
            ".justify { text-align: justify; }\n.center { text-align: center; }\n\
             .first-line { text-indent: 1.25cm; }\n\
             .hanging { padding-left: 1.25cm; text-indent: -1.25cm; }\n\
             .page-break { border: 0; border-top: 1px dashed #999; margin: 2em 0; \
             page-break-after: always; break-after: page; }\n\
             @media print { .page-break { border: 0; margin: 0; } }\n",
        );
        self.output.push_str("</style>\n");
    }

    fn block_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn heading(&mut self, heading: &Heading) {
        let id = self.block_id();
        let tag = if heading.level <= 1 { "h1" } else { "h2" };
        write!(
            self.output,
            "<{} data-block=\"{}\" class=\"{}\">",
            tag,
            id,
            alignment_class(heading.alignment)
        )
        .unwrap();
        match (&heading.numbering, heading.level <= 1) {
            (Some(num), true) if !heading.text.is_empty() => {
                write!(
                    self.output,
                    "{}<br>{}",
                    escape_html(num),
                    escape_html(&heading.text)
                )
                .unwrap();
            }
            _ => self.output.push_str(&escape_html(&heading.label())),
        }
        writeln!(self.output, "</{}>", tag).unwrap();
    }

    fn paragraph(&mut self, para: &Paragraph) {
        let id = self.block_id();
        let mut classes = vec![alignment_class(para.alignment)];
        if para.role.is_cover() {
            classes.push("cover");
        }
        match para.role {
            ParagraphRole::CoverTitle => classes.push("cover-title"),
            ParagraphRole::CoverCaption
            | ParagraphRole::CoverAuthor
            | ParagraphRole::CoverInstitution => classes.push("cover-large"),
            _ => {}
        }
        if para.role.is_bold() {
            classes.push("bold");
        }
        if let Some(class) = indent_class(para.indent) {
            classes.push(class);
        }
        let gap = self.style.cover_gap(para.role);
        let style_attr = if gap > 0 {
            format!(" style=\"margin-top: {}pt\"", gap / 20)
        } else {
            String::new()
        };
        writeln!(
            self.output,
            "<p data-block=\"{}\" class=\"{}\"{}>{}</p>",
            id,
            classes.join(" "),
            style_attr,
            escape_html(&para.text)
        )
        .unwrap();
    }

    fn list_item(&mut self, item: &ListItem) {
        let id = self.block_id();
        let mut classes = vec!["list-item", "justify"];
        if let Some(class) = indent_class(item.indent) {
            classes.push(class);
        }
        write!(
            self.output,
            "<p data-block=\"{}\" class=\"{}\">",
            id,
            classes.join(" ")
        )
        .unwrap();
        if let Some(marker) = item.marker() {
            write!(self.output, "<span class=\"marker\">{}</span> ", marker).unwrap();
        }
        writeln!(self.output, "{}</p>", escape_html(&item.text)).unwrap();
    }
}

fn alignment_class(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Justified => "justify",
    }
}

fn indent_class(indent: Indent) -> Option<&'static str> {
    match indent {
        Indent::None => None,
        Indent::FirstLine => Some("first-line"),
        Indent::Hanging => Some("hanging"),
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
