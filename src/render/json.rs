//! JSON rendering for block documents.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    serialize(doc, format)
}

/// Serialize any value with the given format, mapping failures to
/// [`Error::Render`].
pub(crate) fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, HeadingLevel, RichTextRun};

    fn sample() -> Document {
        Document::from(vec![
            Block::heading(HeadingLevel::H1, "Title"),
            Block::paragraph(vec![RichTextRun::plain("Hello")]),
        ])
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"kind\": \"heading\""));
        assert!(json.contains("Hello"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
        assert_eq!(
            json,
            r#"{"blocks":[{"kind":"heading","level":1,"text":"Title"},{"kind":"paragraph","runs":[{"text":"Hello","bold":false}]}]}"#
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let doc = sample();
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
