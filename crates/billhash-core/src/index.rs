use crate::document::{Document, Element, Node};
use crate::error::BillhashError;
use crate::fingerprint::fingerprint_text;
use crate::model::{bill_id_from_title, ParagraphRecord};
use crate::text::{canonicalize, display_text, element_text};
use crate::{DocumentSchema, IndexOptions};

/// Fingerprint every paragraph of a document, in document order.
///
/// Fails if the document does not have exactly one title element, or if a
/// paragraph lacks its id attribute. Repeated ids produce repeated records.
pub fn index(
    document: &Document,
    options: &IndexOptions,
) -> Result<Vec<ParagraphRecord>, BillhashError> {
    let schema = &options.schema;
    let bill_id = bill_id(document, schema)?;

    let paragraphs = document.elements_named(&schema.paragraph_tag);
    let mut records = Vec::with_capacity(paragraphs.len());
    for (index, paragraph) in paragraphs.into_iter().enumerate() {
        let paragraph_id = paragraph
            .attribute(&schema.id_attribute)
            .ok_or_else(|| BillhashError::MissingParagraphId {
                document: document.source().to_string(),
                index,
            })?;

        let raw = element_text(paragraph);
        let canonical = canonicalize(&raw);
        if canonical.is_empty() {
            log::debug!(
                "{}: paragraph '{paragraph_id}' has no alphabetic text",
                document.source()
            );
        }

        let mut record =
            ParagraphRecord::new(bill_id.as_str(), paragraph_id, fingerprint_text(&canonical));
        if options.keep_display_text {
            record = record.with_display_text(display_text(&raw));
        }
        records.push(record);
    }

    log::debug!(
        "{}: indexed {} paragraph(s) for '{bill_id}'",
        document.source(),
        records.len()
    );
    Ok(records)
}

/// The document's bill identifier, taken from its single title element.
pub fn bill_id(document: &Document, schema: &DocumentSchema) -> Result<String, BillhashError> {
    let titles = document.elements_named(&schema.title_tag);
    let title = match titles.as_slice() {
        [title] => *title,
        [] => {
            return Err(BillhashError::MissingTitle {
                document: document.source().to_string(),
            })
        }
        _ => {
            return Err(BillhashError::AmbiguousTitle {
                document: document.source().to_string(),
                count: titles.len(),
            })
        }
    };

    let title_text = leading_text(title);
    if !title_text.contains(':') {
        log::warn!(
            "{}: title '{title_text}' has no ':', using it whole as the bill id",
            document.source()
        );
    }
    Ok(bill_id_from_title(&title_text).to_string())
}

/// Text of the title's leading text leaves, stopping at the first child that
/// is not text.
fn leading_text(title: &Element) -> String {
    title
        .children
        .iter()
        .map_while(|child| match child {
            Node::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}
