//! makalah-oracle - content oracle clients
//!
//! A content oracle turns paper metadata into a [`ContentTree`]. The
//! [`GeminiOracle`] asks the Gemini API for it; the [`FixtureOracle`] serves
//! a saved tree for offline runs and tests.
//!
//! # Example
//!
//! ```no_run
//! use makalah_ast::PaperMetadata;
//! use makalah_oracle::{ContentOracle, GeminiOracle, OracleConfig};
//!
//! let oracle = GeminiOracle::new(OracleConfig::default())?;
//! let content = oracle.generate(&PaperMetadata::new("Dampak Urbanisasi", "Budi"))?;
//! println!("{} chapters", content.chapters.len());
//! # Ok::<(), makalah_oracle::OracleError>(())
//! ```

pub mod config;
pub mod error;
pub mod fixture;
pub mod gemini;
pub mod prompt;

use makalah_ast::{ContentTree, PaperMetadata};

pub use config::OracleConfig;
pub use error::{OracleError, Result};
pub use fixture::FixtureOracle;
pub use gemini::{extract_text, parse_content, strip_code_fence, GeminiOracle};
pub use prompt::{build_prompt, build_request, response_schema};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Source of paper content
pub trait ContentOracle: Send + Sync {
    /// Name used in log and progress output
    fn name(&self) -> &str;

    /// Produce the content tree for a paper
    fn generate(&self, metadata: &PaperMetadata) -> Result<ContentTree>;
}
