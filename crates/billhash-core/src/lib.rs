pub mod document;
pub mod error;
pub mod fingerprint;
pub mod index;
pub mod matcher;
pub mod model;
pub mod text;

use std::collections::HashSet;
use std::path::Path;

use document::Document;
use error::BillhashError;
use fingerprint::Fingerprint;
use model::{ParagraphMatch, ParagraphRecord};

/// Element and attribute names used to locate titles and paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSchema {
    /// Qualified name of the single title element.
    pub title_tag: String,
    pub paragraph_tag: String,
    /// Attribute holding a paragraph's id.
    pub id_attribute: String,
}

impl Default for DocumentSchema {
    fn default() -> Self {
        DocumentSchema {
            title_tag: "dc:title".into(),
            paragraph_tag: "paragraph".into(),
            id_attribute: "id".into(),
        }
    }
}

/// Options controlling indexing.
#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    /// Attach display text to each record.
    pub keep_display_text: bool,
    pub schema: DocumentSchema,
}

/// Main API entry point: parse XML bytes and fingerprint every paragraph.
///
/// `source` identifies the document in error messages.
pub fn index_xml(
    source: &str,
    xml: &[u8],
    options: &IndexOptions,
) -> Result<Vec<ParagraphRecord>, BillhashError> {
    let document = Document::parse_bytes(source, xml)?;
    index::index(&document, options)
}

/// Like [`index_xml`], reading the document from a file.
pub fn index_file(
    path: &Path,
    options: &IndexOptions,
) -> Result<Vec<ParagraphRecord>, BillhashError> {
    let document = Document::open(path)?;
    index::index(&document, options)
}

/// Parse XML bytes and return the paragraphs whose fingerprint is in `targets`.
pub fn match_xml(
    source: &str,
    xml: &[u8],
    targets: &HashSet<Fingerprint>,
    schema: &DocumentSchema,
) -> Result<Vec<ParagraphMatch>, BillhashError> {
    let document = Document::parse_bytes(source, xml)?;
    Ok(matcher::find_matches(&document, targets, schema))
}

/// Like [`match_xml`], reading the document from a file.
pub fn match_file(
    path: &Path,
    targets: &HashSet<Fingerprint>,
    schema: &DocumentSchema,
) -> Result<Vec<ParagraphMatch>, BillhashError> {
    let document = Document::open(path)?;
    Ok(matcher::find_matches(&document, targets, schema))
}
