use unicode_categories::UnicodeCategories;

/// Reduce text to its canonical form: letters only, lowercased.
///
/// Digits, punctuation, whitespace and symbols are dropped outright, so
/// paragraphs that differ only in numbering or layout compare equal.
/// "Letter" means the Unicode letter categories (L*), so letter-numbers such
/// as `Ⅳ` and combining marks are dropped too. Lowercasing runs over the whole
/// string before filtering: a capital that lowercases to a letter plus a
/// combining mark (`İ`) leaves only the letter.
pub fn canonicalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_letter())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(canonicalize("Hello, World!"), "helloworld");
        assert_eq!(canonicalize("  hello world  "), "helloworld");
    }

    #[test]
    fn test_digits_and_punctuation_dropped() {
        assert_eq!(
            canonicalize("Sec. 102(a)(1) of title 23, U.S.C."),
            "secaoftitleusc"
        );
        assert_eq!(canonicalize("1234 -- ;;"), "");
    }

    #[test]
    fn test_non_ascii_letters_kept() {
        assert_eq!(canonicalize("Ñandú Café"), "ñandúcafé");
    }

    #[test]
    fn test_idempotent() {
        for s in [
            "",
            "Hello, World!",
            "SEC. 2. DEFINITIONS.\n\tIn this Act:",
            "Ñandú Café 42",
            "ΟΔΟΣ",
            "İstanbul",
            "ΣΑ1Σ",
        ] {
            let once = canonicalize(s);
            assert_eq!(canonicalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_dotted_capital_i_leaves_no_mark() {
        assert_eq!(canonicalize("İstanbul"), "istanbul");
    }

    #[test]
    fn test_letter_numbers_and_marks_dropped() {
        assert_eq!(canonicalize("Title Ⅳ"), "title");
        assert_eq!(canonicalize("Cafe\u{301}"), "cafe");
    }

    #[test]
    fn test_output_is_letters_only() {
        for s in ["İstanbul", "ΣΑ1Σ", "Title Ⅳ", "Ǆemal"] {
            assert!(canonicalize(s).chars().all(|c| c.is_letter()), "{s:?}");
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(canonicalize(""), "");
    }
}
