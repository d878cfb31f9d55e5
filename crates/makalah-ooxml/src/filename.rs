//! Download filename derivation

/// Base name used when the hint has nothing usable
pub const DEFAULT_BASENAME: &str = "Makalah_Akademik";

/// Longest base name kept, in characters
pub const MAX_BASENAME_LEN: usize = 50;

/// Derive `<base>.docx` from a free-form hint (usually the paper title)
///
/// Every character that is not an ASCII letter or digit becomes `_`.
pub fn export_filename(hint: &str) -> String {
    let base: String = hint
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(MAX_BASENAME_LEN)
        .collect();

    if base.is_empty() {
        format!("{}.docx", DEFAULT_BASENAME)
    } else {
        format!("{}.docx", base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_non_alphanumeric() {
        assert_eq!(export_filename("Dampak Urbanisasi"), "Dampak_Urbanisasi.docx");
        assert_eq!(export_filename("a/b:c?"), "a_b_c_.docx");
        assert_eq!(export_filename("Café"), "Caf_.docx");
    }

    #[test]
    fn test_truncates_to_fifty() {
        let name = export_filename(&"x".repeat(80));
        assert_eq!(name.len(), MAX_BASENAME_LEN + ".docx".len());
    }

    #[test]
    fn test_empty_hint_falls_back() {
        assert_eq!(export_filename(""), "Makalah_Akademik.docx");
    }

    #[test]
    fn test_whitespace_hint_is_kept_as_underscores() {
        assert_eq!(export_filename("  "), "__.docx");
    }
}
