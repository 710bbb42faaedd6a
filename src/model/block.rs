//! Block-level types.

use super::RichTextRun;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One typed unit of output content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A heading, stored as verbatim text (never tokenized)
    Heading {
        /// Heading level (1-3)
        level: HeadingLevel,
        /// Heading text
        text: String,
    },

    /// A single-line bulleted list item
    #[serde(rename = "bullet")]
    BulletItem {
        /// Formatted runs of the item
        runs: Vec<RichTextRun>,
    },

    /// A paragraph of merged plain lines
    Paragraph {
        /// Formatted runs of the paragraph
        runs: Vec<RichTextRun>,
    },
}

impl Block {
    /// Create a heading block.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a bullet item block.
    pub fn bullet(runs: Vec<RichTextRun>) -> Self {
        Block::BulletItem { runs }
    }

    /// Create a paragraph block.
    pub fn paragraph(runs: Vec<RichTextRun>) -> Self {
        Block::Paragraph { runs }
    }

    /// Get the kind of this block.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { .. } => BlockKind::Heading,
            Block::BulletItem { .. } => BlockKind::Bullet,
            Block::Paragraph { .. } => BlockKind::Paragraph,
        }
    }

    /// Get the formatted runs, or `None` for headings.
    pub fn runs(&self) -> Option<&[RichTextRun]> {
        match self {
            Block::Heading { .. } => None,
            Block::BulletItem { runs } | Block::Paragraph { runs } => Some(runs),
        }
    }

    /// Get plain text content of the block (formatting stripped).
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text, .. } => text.clone(),
            Block::BulletItem { runs } | Block::Paragraph { runs } => {
                runs.iter().map(|r| r.content.as_str()).collect()
            }
        }
    }

    /// Number of characters in the block's text content.
    pub fn char_count(&self) -> usize {
        match self {
            Block::Heading { text, .. } => text.chars().count(),
            Block::BulletItem { runs } | Block::Paragraph { runs } => {
                runs.iter().map(RichTextRun::char_count).sum()
            }
        }
    }

    /// Check if any run of the block is bold.
    pub fn has_bold(&self) -> bool {
        self.runs().is_some_and(|runs| runs.iter().any(|r| r.bold))
    }
}

/// Discriminant of a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Heading block
    Heading,
    /// Bullet item block
    Bullet,
    /// Paragraph block
    Paragraph,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Heading => "heading",
            BlockKind::Bullet => "bullet",
            BlockKind::Paragraph => "paragraph",
        };
        f.write_str(name)
    }
}

/// Heading level. Only three levels exist in the mini-grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum HeadingLevel {
    /// `# `
    H1,
    /// `## `
    H2,
    /// `### `
    H3,
}

impl HeadingLevel {
    /// Numeric level (1-3).
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// The line prefix introducing this level, including the trailing space.
    pub fn prefix(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "# ",
            HeadingLevel::H2 => "## ",
            HeadingLevel::H3 => "### ",
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            other => Err(format!("heading level must be 1-3, got {}", other)),
        }
    }
}
