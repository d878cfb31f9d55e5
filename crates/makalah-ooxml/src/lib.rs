//! makalah-ooxml - DOCX export
//!
//! Writes an assembled paper as a complete Word package, built from scratch
//! without a template, and reads the paragraphs of such a package back.
//!
//! # Example
//!
//! ```
//! use makalah_ast::{ContentTree, PaperMetadata};
//! use makalah_core::{assemble, StyleSheet};
//! use makalah_ooxml::{export, read_paragraphs};
//!
//! let meta = PaperMetadata::new("Dampak Urbanisasi", "Budi");
//! let doc = assemble(&meta, &ContentTree::default());
//!
//! let file = export(&doc, &StyleSheet::default(), &meta.title).unwrap();
//! assert_eq!(file.filename, "Dampak_Urbanisasi.docx");
//!
//! let paragraphs = read_paragraphs(&file.bytes).unwrap();
//! assert_eq!(paragraphs.len(), doc.len());
//! ```

pub mod archive;
pub mod error;
pub mod filename;
pub mod parts;
pub mod reader;
pub mod writer;

use std::io::Cursor;

use makalah_ast::AssembledDocument;
use makalah_core::StyleSheet;

pub use archive::OoxmlArchive;
pub use error::{ExportError, OoxmlError, Result};
pub use filename::export_filename;
pub use reader::{read_paragraphs, DocxParagraph};
pub use writer::DocxWriter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A finished download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Export an assembled document as a `.docx`
pub fn export(
    doc: &AssembledDocument,
    style: &StyleSheet,
    filename_hint: &str,
) -> std::result::Result<ExportedFile, ExportError> {
    let bytes = build_package(doc, style)?;
    let filename = export_filename(filename_hint);
    log::info!("exported {} ({} bytes, {} blocks)", filename, bytes.len(), doc.len());
    Ok(ExportedFile { filename, bytes })
}

fn build_package(doc: &AssembledDocument, style: &StyleSheet) -> Result<Vec<u8>> {
    let package = [
        (parts::CONTENT_TYPES_PART, parts::content_types_xml()),
        (parts::PACKAGE_RELS_PART, parts::package_rels_xml()),
        (
            archive::DOCUMENT_PART,
            DocxWriter::new(style).generate_document_xml(doc),
        ),
        (parts::STYLES_PART, parts::styles_xml(style)),
        (parts::SETTINGS_PART, parts::settings_xml()),
        (parts::DOCUMENT_RELS_PART, parts::document_rels_xml()),
        (parts::CORE_PROPS_PART, parts::core_props_xml(&doc.title, &doc.author)),
        (parts::APP_PROPS_PART, parts::app_props_xml()),
    ];

    let mut archive = OoxmlArchive::new();
    for (path, xml) in package {
        writer::check_well_formed(path, &xml)?;
        log::debug!("{}: {} bytes", path, xml.len());
        archive.set_string(path, xml);
    }

    let mut buffer = Cursor::new(Vec::new());
    archive.write_to(&mut buffer)?;
    Ok(buffer.into_inner())
}
