use serde::{Deserialize, Serialize};

use crate::fingerprint::Fingerprint;

/// One indexed paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphRecord {
    pub bill_id: String,
    /// Lowercased value of the paragraph's id attribute.
    pub paragraph_id: String,
    pub fingerprint: Fingerprint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}

impl ParagraphRecord {
    pub fn new(bill_id: impl Into<String>, paragraph_id: &str, fingerprint: Fingerprint) -> Self {
        ParagraphRecord {
            bill_id: bill_id.into(),
            paragraph_id: paragraph_id.to_lowercase(),
            fingerprint,
            display_text: None,
        }
    }

    pub fn with_display_text(mut self, text: String) -> Self {
        self.display_text = Some(text);
        self
    }
}

/// A paragraph whose fingerprint was among the ones searched for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphMatch {
    pub fingerprint: Fingerprint,
    pub display_text: String,
}

/// Bill identifier from title text: everything before the first colon, or
/// the whole title when there is none.
///
/// Titles look like `112 HR 7 HR: American Energy and Infrastructure Jobs
/// Act`, but the prefix is not validated since real titles are inconsistent.
pub fn bill_id_from_title(title: &str) -> &str {
    match title.split_once(':') {
        Some((id, _)) => id,
        None => title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::fingerprint_text;

    #[test]
    fn test_bill_id_before_first_colon() {
        assert_eq!(
            bill_id_from_title("112 HR 7 HR: American Energy and Infrastructure Jobs Act"),
            "112 HR 7 HR"
        );
        assert_eq!(bill_id_from_title("112 S 1: Part: Two"), "112 S 1");
    }

    #[test]
    fn test_bill_id_without_colon_is_whole_title() {
        assert_eq!(bill_id_from_title("Untitled draft"), "Untitled draft");
        assert_eq!(bill_id_from_title(""), "");
        assert_eq!(bill_id_from_title(":leading"), "");
    }

    #[test]
    fn test_record_lowercases_id() {
        let record = ParagraphRecord::new("112 HR 7 HR", "H1F2A3B", fingerprint_text("x"));
        assert_eq!(record.paragraph_id, "h1f2a3b");
        assert_eq!(record.display_text, None);
    }

    #[test]
    fn test_record_json_omits_missing_text() {
        let record = ParagraphRecord::new("b", "p1", fingerprint_text("abc"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["fingerprint"], "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert!(json.get("display_text").is_none());

        let with_text = record.with_display_text("ABC".into());
        let json = serde_json::to_value(&with_text).unwrap();
        assert_eq!(json["display_text"], "ABC");
    }
}
