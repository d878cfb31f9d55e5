//! Paper metadata submitted by the user
//!
//! `PaperMetadata` is everything the user fills in before generation. It is
//! read by the content oracle (prompt) and by the assembler (cover page and
//! section toggles).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Education level the paper is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EducationLevel {
    /// Lower-secondary school
    #[serde(rename = "SMP")]
    Smp,
    /// Upper-secondary or vocational school
    #[serde(rename = "SMA/SMK")]
    Sma,
    /// University student
    #[default]
    #[serde(rename = "Mahasiswa")]
    Mahasiswa,
}

impl EducationLevel {
    /// Display label, identical to the serialized form
    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::Smp => "SMP",
            EducationLevel::Sma => "SMA/SMK",
            EducationLevel::Mahasiswa => "Mahasiswa",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Register of the generated prose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LanguageStyle {
    #[default]
    #[serde(rename = "Formal Akademik")]
    Formal,
    #[serde(rename = "Semi Formal")]
    SemiFormal,
}

impl LanguageStyle {
    pub fn label(self) -> &'static str {
        match self {
            LanguageStyle::Formal => "Formal Akademik",
            LanguageStyle::SemiFormal => "Semi Formal",
        }
    }
}

impl fmt::Display for LanguageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Generation depth requested from the content oracle
///
/// Only the oracle reads this; assembly is identical for both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Quick,
    Deep,
}

impl GenerationMode {
    pub fn is_deep(self) -> bool {
        self == GenerationMode::Deep
    }
}

/// Metadata for one paper, immutable once submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaperMetadata {
    /// Paper title (required)
    pub title: String,
    /// Author name (required)
    pub author: String,
    /// School, campus or institution
    pub institution: String,
    /// Course or subject the paper is written for
    pub subject: String,
    /// Supervising lecturer, printed on the cover when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lecturer: Option<String>,
    /// Free-form academic year, e.g. "2024/2025"
    pub academic_year: String,
    /// Rough length hint passed to the oracle
    pub estimated_pages: u32,
    pub education_level: EducationLevel,
    pub language_style: LanguageStyle,
    pub include_preface: bool,
    pub include_closing: bool,
    pub include_bibliography: bool,
    pub mode: GenerationMode,
}

impl Default for PaperMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            institution: String::new(),
            subject: String::new(),
            lecturer: None,
            academic_year: String::new(),
            estimated_pages: 10,
            education_level: EducationLevel::default(),
            language_style: LanguageStyle::default(),
            include_preface: true,
            include_closing: true,
            include_bibliography: true,
            mode: GenerationMode::default(),
        }
    }
}

impl PaperMetadata {
    /// Create metadata with the two required fields and form defaults
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Default::default()
        }
    }

    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = institution.into();
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_lecturer(mut self, lecturer: impl Into<String>) -> Self {
        self.lecturer = Some(lecturer.into());
        self
    }

    pub fn with_academic_year(mut self, year: impl Into<String>) -> Self {
        self.academic_year = year.into();
        self
    }

    pub fn with_education_level(mut self, level: EducationLevel) -> Self {
        self.education_level = level;
        self
    }

    pub fn with_language_style(mut self, style: LanguageStyle) -> Self {
        self.language_style = style;
        self
    }

    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Toggle the three optional sections at once
    pub fn with_sections(mut self, preface: bool, closing: bool, bibliography: bool) -> Self {
        self.include_preface = preface;
        self.include_closing = closing;
        self.include_bibliography = bibliography;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form() {
        let meta = PaperMetadata::default();
        assert_eq!(meta.education_level, EducationLevel::Mahasiswa);
        assert_eq!(meta.language_style, LanguageStyle::Formal);
        assert_eq!(meta.mode, GenerationMode::Quick);
        assert_eq!(meta.estimated_pages, 10);
        assert!(meta.include_preface && meta.include_closing && meta.include_bibliography);
    }

    #[test]
    fn test_json_uses_camel_case_and_labels() {
        let meta = PaperMetadata::new("Dampak Urbanisasi", "Budi")
            .with_education_level(EducationLevel::Sma)
            .with_mode(GenerationMode::Deep);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["academicYear"], "");
        assert_eq!(json["educationLevel"], "SMA/SMK");
        assert_eq!(json["languageStyle"], "Formal Akademik");
        assert_eq!(json["mode"], "deep");
        assert!(json.get("lecturer").is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let meta: PaperMetadata = toml::from_str(
            r#"
title = "Etika Digital"
author = "Sari"
includeClosing = false
languageStyle = "Semi Formal"
"#,
        )
        .unwrap();
        assert_eq!(meta.title, "Etika Digital");
        assert!(!meta.include_closing);
        assert!(meta.include_preface);
        assert_eq!(meta.language_style, LanguageStyle::SemiFormal);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(EducationLevel::Smp.to_string(), "SMP");
        assert_eq!(LanguageStyle::SemiFormal.to_string(), "Semi Formal");
    }
}
