use std::collections::HashSet;

use crate::document::Document;
use crate::fingerprint::{paragraph_fingerprint, Fingerprint};
use crate::model::ParagraphMatch;
use crate::text::{display_text, element_text};
use crate::DocumentSchema;

/// Find the paragraphs of `document` whose fingerprint is in `targets`.
///
/// Results follow document order. A paragraph repeated in the document is
/// reported once per occurrence. No title element is required.
pub fn find_matches(
    document: &Document,
    targets: &HashSet<Fingerprint>,
    schema: &DocumentSchema,
) -> Vec<ParagraphMatch> {
    if targets.is_empty() {
        return Vec::new();
    }

    let matches: Vec<ParagraphMatch> = document
        .elements_named(&schema.paragraph_tag)
        .into_iter()
        .filter_map(|paragraph| {
            let fingerprint = paragraph_fingerprint(paragraph);
            targets.contains(&fingerprint).then(|| ParagraphMatch {
                fingerprint,
                display_text: display_text(&element_text(paragraph)),
            })
        })
        .collect();

    log::debug!(
        "{}: {} paragraph(s) matched {} target fingerprint(s)",
        document.source(),
        matches.len(),
        targets.len()
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::fingerprint_text;

    const BILL: &str = r#"<bill>
<paragraph id="a"><enum>(1)</enum> Except as <i>provided</i>,</paragraph>
<paragraph id="b">Something
else entirely.</paragraph>
<paragraph id="c"><enum>(7)</enum> EXCEPT AS PROVIDED</paragraph>
</bill>"#;

    fn doc() -> Document {
        Document::parse("bill.xml", BILL).unwrap()
    }

    #[test]
    fn test_empty_targets_yield_nothing() {
        assert!(find_matches(&doc(), &HashSet::new(), &DocumentSchema::default()).is_empty());
    }

    #[test]
    fn test_disjoint_targets_yield_nothing() {
        let targets = HashSet::from([fingerprint_text("nothinglikethis")]);
        assert!(find_matches(&doc(), &targets, &DocumentSchema::default()).is_empty());
    }

    #[test]
    fn test_each_occurrence_reported_in_document_order() {
        let target = fingerprint_text("exceptasprovided");
        let targets = HashSet::from([target, fingerprint_text("unused")]);
        let matches = find_matches(&doc(), &targets, &DocumentSchema::default());
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.fingerprint == target));
        assert_eq!(matches[0].display_text, "(1) Except as provided,");
        assert_eq!(matches[1].display_text, "(7) EXCEPT AS PROVIDED");
    }

    #[test]
    fn test_display_text_strips_newlines() {
        let targets = HashSet::from([fingerprint_text("somethingelseentirely")]);
        let matches = find_matches(&doc(), &targets, &DocumentSchema::default());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].display_text, "Somethingelse entirely.");
    }
}
