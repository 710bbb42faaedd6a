//! Rich text runs.

use serde::{Deserialize, Serialize};

/// A contiguous span of text with a single bold flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextRun {
    /// The text content
    #[serde(rename = "text")]
    pub content: String,

    /// Bold text
    pub bold: bool,
}

impl RichTextRun {
    /// Create a plain (non-bold) run.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            bold: false,
        }
    }

    /// Create a bold run.
    pub fn bold(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            bold: true,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of characters (Unicode scalar values) in the run.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}
