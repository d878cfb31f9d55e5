//! A saved oracle reply drives assembly end to end

use std::fs;

use makalah_ast::PaperMetadata;
use makalah_oracle::{extract_text, ContentOracle, FixtureOracle};

const REPLY: &str = r#"{
  "candidates": [{
    "content": {
      "role": "model",
      "parts": [{ "text": "```json\n{\"preface\":\"Puji syukur.\",\"introduction\":{\"background\":\"Kota tumbuh.\",\"problemFormulation\":[\"Apa?\"],\"objectives\":[\"Mengetahui.\"]},\"chapters\":[{\"title\":\"Pembahasan\",\"subChapters\":[{\"title\":\"Topik\",\"content\":\"Isi.\"}]}],\"closing\":{\"conclusion\":\"Simpulan.\",\"suggestions\":\"Saran.\"},\"bibliography\":[\"Ref 1.\"]}\n```" }]
    },
    "finishReason": "STOP"
  }]
}"#;

#[test]
fn test_saved_reply_loads_as_fixture() {
    let text = extract_text(REPLY).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.json");
    fs::write(&path, text).unwrap();

    let oracle = FixtureOracle::load(&path).unwrap();
    let content = oracle
        .generate(&PaperMetadata::new("Dampak Urbanisasi", "Budi"))
        .unwrap();

    assert_eq!(content.preface.as_deref(), Some("Puji syukur."));
    assert_eq!(content.introduction.problem_formulation, vec!["Apa?"]);
    assert_eq!(content.chapters.len(), 1);
    assert_eq!(content.sub_chapter_count(), 1);
    assert_eq!(content.bibliography.as_deref().map(<[String]>::len), Some(1));
}
