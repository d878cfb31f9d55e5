//! Metadata validation
//!
//! Runs before the oracle is called. The assembler itself never validates;
//! it accepts whatever it is given.

use thiserror::Error;

use makalah_ast::PaperMetadata;

use crate::sanitize::sanitize_str;

/// Reasons a metadata submission is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("Paper title is required")]
    MissingTitle,

    #[error("Author name is required")]
    MissingAuthor,

    #[error("Estimated page count must be between 1 and {max}, got {got}")]
    PageCountOutOfRange { got: u32, max: u32 },
}

/// Upper bound on the estimated page hint
pub const MAX_ESTIMATED_PAGES: u32 = 100;

/// Check that the required fields survive sanitization
pub fn validate_metadata(metadata: &PaperMetadata) -> Result<(), MetadataError> {
    if sanitize_str(&metadata.title).trim().is_empty() {
        return Err(MetadataError::MissingTitle);
    }
    if sanitize_str(&metadata.author).trim().is_empty() {
        return Err(MetadataError::MissingAuthor);
    }
    if metadata.estimated_pages == 0 || metadata.estimated_pages > MAX_ESTIMATED_PAGES {
        return Err(MetadataError::PageCountOutOfRange {
            got: metadata.estimated_pages,
            max: MAX_ESTIMATED_PAGES,
        });
    }
    Ok(())
}
