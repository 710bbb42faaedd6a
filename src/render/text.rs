//! Plain text rendering for block documents.

use crate::model::Document;

/// Convert a document to plain text, one block per paragraph.
pub fn to_text(doc: &Document) -> String {
    doc.plain_text().trim().to_string()
}
