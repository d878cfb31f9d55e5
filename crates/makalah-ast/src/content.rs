//! Structured paper content returned by the content oracle
//!
//! The shape mirrors the JSON schema requested from the oracle. Every field
//! defaults when absent or `null`, so a partial response still deserializes
//! and the assembler can degrade section by section instead of failing.

use serde::{Deserialize, Deserializer, Serialize};

/// Full content tree for one paper
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentTree {
    /// Preface text ("Kata Pengantar")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preface: Option<String>,
    /// Introduction, always rendered
    #[serde(deserialize_with = "null_as_default")]
    pub introduction: Introduction,
    /// Body chapters in order
    #[serde(deserialize_with = "null_as_default")]
    pub chapters: Vec<Chapter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing: Option<Closing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bibliography: Option<Vec<String>>,
}

/// Introduction section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Introduction {
    #[serde(deserialize_with = "null_as_default")]
    pub background: String,
    #[serde(deserialize_with = "null_as_default")]
    pub problem_formulation: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub objectives: Vec<String>,
}

/// One body chapter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Chapter {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_chapters: Vec<SubChapter>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubChapter {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}

/// Closing section ("Penutup")
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Closing {
    #[serde(deserialize_with = "null_as_default")]
    pub conclusion: String,
    #[serde(deserialize_with = "null_as_default")]
    pub suggestions: String,
}

impl Chapter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sub_chapters: Vec::new(),
        }
    }

    /// Append a sub-chapter
    pub fn with_sub(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.sub_chapters.push(SubChapter {
            title: title.into(),
            content: content.into(),
        });
        self
    }
}

impl ContentTree {
    /// Total number of sub-chapters across all chapters
    pub fn sub_chapter_count(&self) -> usize {
        self.chapters.iter().map(|c| c.sub_chapters.len()).sum()
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_tree_parses() {
        let json = r#"{
            "preface": "Kata pengantar.",
            "introduction": {
                "background": "Latar.",
                "problemFormulation": ["Apa?"],
                "objectives": ["Mengetahui."]
            },
            "chapters": [
                {"title": "Pembahasan", "subChapters": [{"title": "Topik A", "content": "Isi A."}]}
            ],
            "closing": {"conclusion": "Simpulan.", "suggestions": "Saran."},
            "bibliography": ["Ref 1."]
        }"#;
        let tree: ContentTree = serde_json::from_str(json).unwrap();
        assert_eq!(tree.preface.as_deref(), Some("Kata pengantar."));
        assert_eq!(tree.introduction.problem_formulation, vec!["Apa?"]);
        assert_eq!(tree.chapters[0].sub_chapters[0].title, "Topik A");
        assert_eq!(tree.bibliography.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_missing_required_sections_degrade() {
        let tree: ContentTree = serde_json::from_str("{}").unwrap();
        assert!(tree.introduction.background.is_empty());
        assert!(tree.chapters.is_empty());
        assert!(tree.closing.is_none());
    }

    #[test]
    fn test_null_leaves_become_empty() {
        let json = r#"{
            "introduction": null,
            "chapters": [{"title": null, "subChapters": null}],
            "closing": {"conclusion": null}
        }"#;
        let tree: ContentTree = serde_json::from_str(json).unwrap();
        assert_eq!(tree.chapters.len(), 1);
        assert!(tree.chapters[0].title.is_empty());
        assert!(tree.chapters[0].sub_chapters.is_empty());
        let closing = tree.closing.unwrap();
        assert!(closing.conclusion.is_empty());
        assert!(closing.suggestions.is_empty());
    }

    #[test]
    fn test_sub_chapter_count() {
        let tree = ContentTree {
            chapters: vec![
                Chapter::new("A").with_sub("a1", "x").with_sub("a2", "y"),
                Chapter::new("B").with_sub("b1", "z"),
            ],
            ..Default::default()
        };
        assert_eq!(tree.sub_chapter_count(), 3);
    }
}
