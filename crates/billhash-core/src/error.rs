#[derive(Debug, thiserror::Error)]
pub enum BillhashError {
    #[error("{document}: malformed XML{}: {message}", position_suffix(.position))]
    Parse {
        document: String,
        position: Option<u64>,
        message: String,
    },

    #[error("{document} doesn't have a title tag")]
    MissingTitle { document: String },

    #[error("{document} has more than one title tag ({count} found)")]
    AmbiguousTitle { document: String, count: usize },

    #[error("{document}: paragraph #{index} has no id attribute")]
    MissingParagraphId { document: String, index: usize },

    #[error("invalid fingerprint '{0}': expected 40 hex characters")]
    InvalidFingerprint(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BillhashError {
    /// True for failures of the XML layer itself, as opposed to structural
    /// problems found in an otherwise well-formed document.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, BillhashError::Parse { .. })
    }
}

fn position_suffix(position: &Option<u64>) -> String {
    match position {
        Some(p) => format!(" at byte {p}"),
        None => String::new(),
    }
}
