//! Paragraph extraction from generated packages
//!
//! Reads `word/document.xml` back into a flat list of paragraphs. Only what
//! the writer produces is understood: paragraph styles, text runs, line
//! breaks and page breaks.

use std::io::Cursor;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::archive::OoxmlArchive;
use crate::error::{OoxmlError, Result};

/// One `w:p` of the document body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocxParagraph {
    /// Concatenated run text; a `w:br` line break becomes `\n`
    pub text: String,
    /// Paragraph style id (`w:pStyle`)
    pub style: Option<String>,
    /// Paragraph holds a page break
    pub page_break: bool,
}

impl DocxParagraph {
    pub fn is_heading(&self) -> bool {
        self.style
            .as_deref()
            .is_some_and(|s| s.starts_with("Heading"))
    }
}

/// Read every body paragraph of a `.docx` held in memory
pub fn read_paragraphs(bytes: &[u8]) -> Result<Vec<DocxParagraph>> {
    let archive = OoxmlArchive::from_reader(Cursor::new(bytes))?;
    parse_document_xml(archive.document_xml()?)
}

/// Parse the paragraphs of a document.xml part
pub fn parse_document_xml(xml: &[u8]) -> Result<Vec<DocxParagraph>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<DocxParagraph> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => current = Some(DocxParagraph::default()),
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => {
                if let Some(para) = current.as_mut() {
                    match e.local_name().as_ref() {
                        b"pStyle" => para.style = get_attr(e, b"w:val"),
                        b"br" => match get_attr(e, b"w:type").as_deref() {
                            Some("page") => para.page_break = true,
                            _ => para.text.push('\n'),
                        },
                        b"tab" => para.text.push('\t'),
                        _ => {}
                    }
                }
            }
            Ok(Event::Text(ref e)) if in_text => {
                if let Some(para) = current.as_mut() {
                    para.text.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if let Some(para) = current.take() {
                        paragraphs.push(para);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

fn get_attr(e: &BytesStart, name: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == name)
        .and_then(|a| String::from_utf8(a.value.to_vec()).ok())
}
