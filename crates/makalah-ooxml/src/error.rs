//! Error types for OOXML operations

use thiserror::Error;

/// Errors that can occur while writing or reading a package
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// Error reading or writing the ZIP archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing XML content
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Required file not found in archive
    #[error("Required file not found: {0}")]
    MissingFile(String),

    /// Generated part is not well-formed
    #[error("Invalid document structure: {0}")]
    InvalidStructure(String),
}

/// Failure surfaced to callers of [`crate::export`]
///
/// The underlying cause is kept as the error source; callers decide whether
/// to retry.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("document assembly failed")]
    AssemblyFailed(#[source] OoxmlError),
}

impl From<OoxmlError> for ExportError {
    fn from(err: OoxmlError) -> Self {
        ExportError::AssemblyFailed(err)
    }
}

/// Result type for OOXML operations
pub type Result<T> = std::result::Result<T, OoxmlError>;
