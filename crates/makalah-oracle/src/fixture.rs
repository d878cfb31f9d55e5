//! Offline content oracle backed by a JSON file

use std::fs;
use std::path::{Path, PathBuf};

use makalah_ast::{ContentTree, PaperMetadata};

use crate::error::Result;
use crate::gemini::parse_content;
use crate::ContentOracle;

/// Returns the same content tree for every request
#[derive(Debug, Clone)]
pub struct FixtureOracle {
    source: Option<PathBuf>,
    content: ContentTree,
}

impl FixtureOracle {
    pub fn new(content: ContentTree) -> Self {
        Self {
            source: None,
            content,
        }
    }

    /// Load a content tree saved as JSON (optionally fenced, as the
    /// oracle returns it)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let content = parse_content(&text)?;
        log::debug!(
            "loaded fixture content from {} ({} chapters)",
            path.display(),
            content.chapters.len()
        );
        Ok(Self {
            source: Some(path.to_path_buf()),
            content,
        })
    }

    pub fn content(&self) -> &ContentTree {
        &self.content
    }
}

impl ContentOracle for FixtureOracle {
    fn name(&self) -> &str {
        "fixture"
    }

    fn generate(&self, metadata: &PaperMetadata) -> Result<ContentTree> {
        match &self.source {
            Some(path) => log::info!(
                "using fixture content {} for '{}'",
                path.display(),
                metadata.title
            ),
            None => log::info!("using in-memory content for '{}'", metadata.title),
        }
        Ok(self.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OracleError;
    use makalah_ast::Chapter;

    #[test]
    fn test_in_memory() {
        let content = ContentTree {
            chapters: vec![Chapter::new("Pembahasan")],
            ..Default::default()
        };
        let oracle = FixtureOracle::new(content.clone());
        let got = oracle.generate(&PaperMetadata::new("T", "A")).unwrap();
        assert_eq!(got, content);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        fs::write(
            &path,
            r#"{"preface":"Halo.","chapters":[{"title":"Satu","subChapters":[{"title":"a","content":"b"}]}]}"#,
        )
        .unwrap();

        let oracle = FixtureOracle::load(&path).unwrap();
        let content = oracle.generate(&PaperMetadata::new("T", "A")).unwrap();
        assert_eq!(content.preface.as_deref(), Some("Halo."));
        assert_eq!(content.chapters[0].sub_chapters[0].content, "b");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FixtureOracle::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, OracleError::Io(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            FixtureOracle::load(&path),
            Err(OracleError::MalformedResponse(_))
        ));
    }
}
