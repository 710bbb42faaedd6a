//! Line classification for the summary mini-grammar.

use crate::model::HeadingLevel;

/// Prefix introducing a bullet line.
pub const BULLET_PREFIX: &str = "- ";

/// Kind of a single trimmed line, borrowing its text from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty line; separates blocks
    Blank,
    /// Heading with its verbatim remainder
    Heading {
        /// Heading level
        level: HeadingLevel,
        /// Text after the prefix
        text: &'a str,
    },
    /// Bullet with the text after `- `
    Bullet(&'a str),
    /// Anything else
    Plain(&'a str),
}

impl LineKind<'_> {
    /// Whether this is a plain text line.
    pub fn is_plain(&self) -> bool {
        matches!(self, LineKind::Plain(_))
    }

    /// Whether this line can continue a paragraph in progress.
    ///
    /// Plain lines starting with a bare `#` or `-` (e.g. `#tag`, `-5`) end
    /// the paragraph and start a new one.
    pub fn continues_paragraph(&self) -> bool {
        match self {
            LineKind::Plain(text) => !text.starts_with(['#', '-']),
            _ => false,
        }
    }
}

/// Classify one line. The line is trimmed before inspection.
///
/// Prefixes are literal and case-sensitive: `# `, `## `, `### ` for
/// headings and `- ` for bullets. There is no escaping.
pub fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim();

    if line.is_empty() {
        return LineKind::Blank;
    }

    for level in [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3] {
        if let Some(text) = line.strip_prefix(level.prefix()) {
            return LineKind::Heading { level, text };
        }
    }

    if let Some(text) = line.strip_prefix(BULLET_PREFIX) {
        return LineKind::Bullet(text);
    }

    LineKind::Plain(line)
}
