use billhash_core::model::{ParagraphMatch, ParagraphRecord};

/// One tab-separated line per record: bill id, paragraph id, fingerprint and,
/// when kept, the display text.
pub fn format_records(records: &[ParagraphRecord]) -> String {
    records
        .iter()
        .map(|r| match &r.display_text {
            Some(text) => format!(
                "{}\t{}\t{}\t{}",
                r.bill_id, r.paragraph_id, r.fingerprint, text
            ),
            None => format!("{}\t{}\t{}", r.bill_id, r.paragraph_id, r.fingerprint),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_matches(matches: &[ParagraphMatch]) -> String {
    matches
        .iter()
        .map(|m| format!("{}\t{}", m.fingerprint, m.display_text))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_records(records: &[ParagraphRecord]) {
    if records.is_empty() {
        eprintln!("No paragraphs found.");
        return;
    }
    println!("{}", format_records(records));
}

pub fn print_matches(matches: &[ParagraphMatch]) {
    if matches.is_empty() {
        eprintln!("No matching paragraphs.");
        return;
    }
    println!("{}", format_matches(matches));
}

#[cfg(test)]
mod tests {
    use super::*;
    use billhash_core::fingerprint::fingerprint_text;

    #[test]
    fn test_format_records_with_and_without_text() {
        let plain = ParagraphRecord::new("112 HR 7 HR", "H1", fingerprint_text("abc"));
        let with_text = plain.clone().with_display_text("The text.".into());
        assert_eq!(
            format_records(&[plain, with_text]),
            "112 HR 7 HR\th1\ta9993e364706816aba3e25717850c26c9cd0d89d\n\
             112 HR 7 HR\th1\ta9993e364706816aba3e25717850c26c9cd0d89d\tThe text."
        );
    }

    #[test]
    fn test_format_matches() {
        let m = ParagraphMatch {
            fingerprint: fingerprint_text(""),
            display_text: "Empty".into(),
        };
        assert_eq!(
            format_matches(&[m]),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709\tEmpty"
        );
    }
}
