//! Text sanitizer
//!
//! Oracle output occasionally carries control characters and other code
//! points that make `word/document.xml` unreadable. Every string that enters
//! a block goes through [`sanitize`] first.
//!
//! Kept: tab, line feed, carriage return, printable Basic Latin, Latin-1
//! Supplement, Latin Extended-A/B and Latin Extended Additional. All of these
//! are valid XML 1.0 characters.

use std::sync::OnceLock;

use regex::Regex;

/// Remove every character outside the safe set
///
/// Total and idempotent; `None` yields an empty string.
///
/// # Example
///
/// ```
/// use makalah_core::sanitize;
///
/// assert_eq!(sanitize(Some("Bab\u{0}I\u{1F600}")), "BabI");
/// assert_eq!(sanitize(None), "");
/// ```
pub fn sanitize(raw: Option<&str>) -> String {
    match raw {
        Some(text) => sanitize_str(text),
        None => String::new(),
    }
}

/// [`sanitize`] for a borrowed string
pub fn sanitize_str(text: &str) -> String {
    static UNSAFE_RE: OnceLock<Regex> = OnceLock::new();
    let re = UNSAFE_RE.get_or_init(|| {
        Regex::new(r"[^\t\n\r\x20-\x7E\xA0-\x{24F}\x{1E00}-\x{1EFF}]").unwrap()
    });
    re.replace_all(text, "").into_owned()
}

/// Whether a single character survives [`sanitize`]
pub fn is_safe_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{24F}' | '\u{1E00}'..='\u{1EFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "Plain ASCII text.",
        "Tab\tNew\nLine\r\n",
        "Ekonomi kreatif: ñ é ü ß Đ ạ ỹ",
        "ctrl\u{0}\u{1}\u{8}\u{B}\u{C}\u{1F}chars",
        "del\u{7F}and c1\u{80}\u{9F}",
        "emoji \u{1F600} and cjk 漢字",
        "surrogate-area \u{E000}\u{FFFD}\u{FFFF}",
        "zero\u{200B}width",
    ];

    #[test]
    fn test_none_is_empty() {
        assert_eq!(sanitize(None), "");
        assert_eq!(sanitize(Some("")), "");
    }

    #[test]
    fn test_safe_strings_unchanged() {
        for s in [
            "Dampak Urbanisasi",
            "Tab\tNew\nLine\r\n",
            "Café, naïve, Łódź, Ştefan, Nguyễn",
            "~!@#$%^&*()_+{}|:\"<>?`-=[]\\;',./",
        ] {
            assert_eq!(sanitize_str(s), s, "safe input changed: {:?}", s);
        }
    }

    #[test]
    fn test_unsafe_chars_removed() {
        assert_eq!(sanitize_str("ctrl\u{0}\u{1}\u{1F}chars"), "ctrlchars");
        assert_eq!(sanitize_str("del\u{7F}and c1\u{80}\u{9F}"), "deland c1");
        assert_eq!(sanitize_str("emoji \u{1F600}!"), "emoji !");
        assert_eq!(sanitize_str("\u{FFFE}\u{FFFF}"), "");
    }

    #[test]
    fn test_output_only_safe_chars() {
        for s in SAMPLES {
            let out = sanitize_str(s);
            assert!(out.chars().all(is_safe_char), "unsafe char left in {:?}", out);
        }
    }

    #[test]
    fn test_idempotent() {
        for s in SAMPLES {
            let once = sanitize_str(s);
            assert_eq!(sanitize_str(&once), once);
        }
        assert_eq!(sanitize(Some(&sanitize(None))), sanitize(None));
    }

    #[test]
    fn test_regex_and_predicate_agree() {
        for code in (0u32..0x2000).chain([0xE000, 0xFFFD, 0x1F600]) {
            if let Some(c) = char::from_u32(code) {
                let kept = sanitize_str(&c.to_string()) == c.to_string();
                assert_eq!(kept, is_safe_char(c), "mismatch at U+{:04X}", code);
            }
        }
    }
}
