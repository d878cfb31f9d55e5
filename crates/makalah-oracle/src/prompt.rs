//! Prompt and request body construction

use std::fmt::Write;

use makalah_ast::PaperMetadata;
use serde_json::{json, Value};

use crate::config::OracleConfig;

/// Build the Indonesian generation prompt for a paper
pub fn build_prompt(metadata: &PaperMetadata) -> String {
    let mut prompt = String::from("Buatkan konten makalah akademik Bahasa Indonesia.\n");
    writeln!(prompt, "Judul: {}", metadata.title.trim()).unwrap();
    if !metadata.subject.trim().is_empty() {
        writeln!(prompt, "Mata Kuliah: {}", metadata.subject.trim()).unwrap();
    }
    writeln!(prompt, "Tingkat Pendidikan: {}", metadata.education_level.label()).unwrap();
    writeln!(prompt, "Gaya Bahasa: {}", metadata.language_style.label()).unwrap();
    writeln!(
        prompt,
        "Mode: {}",
        if metadata.mode.is_deep() {
            "Mendalam"
        } else {
            "Standar"
        }
    )
    .unwrap();
    writeln!(prompt, "Perkiraan Panjang: {} halaman", metadata.estimated_pages).unwrap();

    let yes_no = |flag: bool| if flag { "ya" } else { "tidak" };
    writeln!(prompt, "Sertakan Kata Pengantar: {}", yes_no(metadata.include_preface)).unwrap();
    writeln!(prompt, "Sertakan Penutup: {}", yes_no(metadata.include_closing)).unwrap();
    writeln!(
        prompt,
        "Sertakan Daftar Pustaka: {}",
        yes_no(metadata.include_bibliography)
    )
    .unwrap();

    prompt.push('\n');
    prompt.push_str(
        "Judul bab ditulis tanpa nomor bab. Pisahkan paragraf dengan baris baru.\n",
    );
    prompt.push_str(
        "PENTING: Gunakan Bahasa Indonesia formal (PUEBI). Jangan gunakan opini pribadi.\n",
    );
    prompt
}

/// JSON schema of the content tree, in the API's schema dialect
pub fn response_schema() -> Value {
    let string = json!({ "type": "STRING" });
    let string_list = json!({ "type": "ARRAY", "items": { "type": "STRING" } });

    json!({
        "type": "OBJECT",
        "properties": {
            "preface": string,
            "introduction": {
                "type": "OBJECT",
                "properties": {
                    "background": string,
                    "problemFormulation": string_list,
                    "objectives": string_list,
                },
                "required": ["background", "problemFormulation", "objectives"],
            },
            "chapters": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": string,
                        "subChapters": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "title": string,
                                    "content": string,
                                },
                                "required": ["title", "content"],
                            },
                        },
                    },
                    "required": ["title", "subChapters"],
                },
            },
            "closing": {
                "type": "OBJECT",
                "properties": {
                    "conclusion": string,
                    "suggestions": string,
                },
                "required": ["conclusion", "suggestions"],
            },
            "bibliography": string_list,
        },
        "required": ["introduction", "chapters", "closing", "bibliography"],
    })
}

/// Complete `generateContent` request body
pub fn build_request(metadata: &PaperMetadata, config: &OracleConfig) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": build_prompt(metadata) }],
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
            "thinkingConfig": {
                "thinkingBudget": config.thinking_budget(metadata.mode),
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use makalah_ast::{EducationLevel, GenerationMode, LanguageStyle};

    #[test]
    fn test_prompt_mentions_metadata() {
        let meta = PaperMetadata::new("Dampak Urbanisasi", "Budi")
            .with_subject("Geografi")
            .with_education_level(EducationLevel::Sma)
            .with_language_style(LanguageStyle::SemiFormal)
            .with_mode(GenerationMode::Deep)
            .with_sections(true, false, true);
        let prompt = build_prompt(&meta);

        assert!(prompt.contains("Judul: Dampak Urbanisasi"));
        assert!(prompt.contains("Mata Kuliah: Geografi"));
        assert!(prompt.contains("Tingkat Pendidikan: SMA/SMK"));
        assert!(prompt.contains("Gaya Bahasa: Semi Formal"));
        assert!(prompt.contains("Mode: Mendalam"));
        assert!(prompt.contains("Perkiraan Panjang: 10 halaman"));
        assert!(prompt.contains("Sertakan Penutup: tidak"));
        assert!(prompt.contains("PUEBI"));
    }

    #[test]
    fn test_prompt_without_subject() {
        let prompt = build_prompt(&PaperMetadata::new("T", "A"));
        assert!(!prompt.contains("Mata Kuliah"));
        assert!(prompt.contains("Mode: Standar"));
    }

    #[test]
    fn test_schema_requires_core_sections() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(
            required,
            vec!["introduction", "chapters", "closing", "bibliography"]
        );
        assert_eq!(
            schema["properties"]["chapters"]["items"]["properties"]["subChapters"]["type"],
            "ARRAY"
        );
    }

    #[test]
    fn test_request_thinking_budget_follows_mode() {
        let config = OracleConfig::default();
        let quick = build_request(&PaperMetadata::new("T", "A"), &config);
        assert_eq!(
            quick["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            0
        );

        let deep_meta = PaperMetadata::new("T", "A").with_mode(GenerationMode::Deep);
        let deep = build_request(&deep_meta, &config);
        assert_eq!(
            deep["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            10000
        );
        assert_eq!(
            deep["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert!(deep["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("Judul: T"));
    }
}
