//! Inline bold tokenizer.
//!
//! Bold spans are written `**text**`. The scanner walks the text once from
//! left to right, toggling `inside_bold` at each delimiter. The first `**`
//! after an opening delimiter closes it (shortest match), spans never nest,
//! and an opening delimiter that is never closed stays in the output as
//! literal text.

use crate::model::RichTextRun;

/// Delimiter surrounding a bold span.
pub const BOLD_DELIMITER: &str = "**";

/// Outcome of scanning a span of text for bold runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tokenized<'a> {
    /// No complete bold span was found; the text is one plain run
    Plain(&'a str),
    /// At least one bold span was found
    Formatted(Vec<Segment<'a>>),
}

impl Tokenized<'_> {
    /// Convert into owned rich text runs.
    pub fn into_runs(self) -> Vec<RichTextRun> {
        match self {
            Tokenized::Plain(text) => vec![RichTextRun::plain(text)],
            Tokenized::Formatted(segments) => segments
                .into_iter()
                .map(|s| RichTextRun {
                    content: s.text.to_string(),
                    bold: s.bold,
                })
                .collect(),
        }
    }

    /// Whether any bold span was found.
    pub fn is_formatted(&self) -> bool {
        matches!(self, Tokenized::Formatted(_))
    }
}

/// A borrowed run of text produced by [`scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Text without delimiters
    pub text: &'a str,
    /// Bold flag
    pub bold: bool,
}

/// Scan `text` for bold spans.
///
/// Empty plain segments are dropped; empty bold captures (`****`) are kept
/// as bold segments with empty text.
pub fn scan(text: &str) -> Tokenized<'_> {
    let mut segments = Vec::new();
    let mut inside_bold = false;
    // Start of the pending plain text; only emitted once the bold span
    // after it closes, so an unmatched opener stays part of it.
    let mut plain_start = 0;
    let mut open_at = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(BOLD_DELIMITER) {
        let at = cursor + offset;
        if inside_bold {
            let plain = &text[plain_start..open_at];
            if !plain.is_empty() {
                segments.push(Segment {
                    text: plain,
                    bold: false,
                });
            }
            segments.push(Segment {
                text: &text[open_at + BOLD_DELIMITER.len()..at],
                bold: true,
            });
            plain_start = at + BOLD_DELIMITER.len();
        } else {
            open_at = at;
        }
        inside_bold = !inside_bold;
        cursor = at + BOLD_DELIMITER.len();
    }

    if segments.is_empty() {
        return Tokenized::Plain(text);
    }

    let rest = &text[plain_start..];
    if !rest.is_empty() {
        segments.push(Segment {
            text: rest,
            bold: false,
        });
    }

    Tokenized::Formatted(segments)
}

/// Split `text` into rich text runs.
///
/// Concatenating the runs' content reproduces `text` with the delimiters of
/// every matched bold span removed.
pub fn tokenize(text: &str) -> Vec<RichTextRun> {
    scan(text).into_runs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(items: &[(&str, bool)]) -> Vec<RichTextRun> {
        items
            .iter()
            .map(|(text, bold)| RichTextRun {
                content: text.to_string(),
                bold: *bold,
            })
            .collect()
    }

    #[test]
    fn test_plain_text_is_single_run() {
        assert_eq!(tokenize("just text"), runs(&[("just text", false)]));
        assert!(!scan("just text").is_formatted());
    }

    #[test]
    fn test_empty_text_is_single_empty_run() {
        assert_eq!(tokenize(""), runs(&[("", false)]));
    }

    #[test]
    fn test_bold_in_middle() {
        assert_eq!(
            tokenize("plain **bold** plain"),
            runs(&[("plain ", false), ("bold", true), (" plain", false)])
        );
    }

    #[test]
    fn test_bold_at_edges_omits_empty_plain() {
        assert_eq!(tokenize("**all bold**"), runs(&[("all bold", true)]));
        assert_eq!(
            tokenize("**a**b**c**"),
            runs(&[("a", true), ("b", false), ("c", true)])
        );
    }

    #[test]
    fn test_empty_bold_capture_is_kept() {
        assert_eq!(
            tokenize("x****y"),
            runs(&[("x", false), ("", true), ("y", false)])
        );
        assert_eq!(tokenize("****"), runs(&[("", true)]));
    }

    #[test]
    fn test_unmatched_opener_is_literal() {
        assert_eq!(tokenize("a **b"), runs(&[("a **b", false)]));
        assert_eq!(
            tokenize("x **y** z **w"),
            runs(&[("x ", false), ("y", true), (" z **w", false)])
        );
    }

    #[test]
    fn test_shortest_match() {
        assert_eq!(
            tokenize("**a** and **b**"),
            runs(&[("a", true), (" and ", false), ("b", true)])
        );
        // The third star belongs to the bold content
        assert_eq!(tokenize("***a**"), runs(&[("*a", true)]));
    }

    #[test]
    fn test_emoji_bullet_content() {
        assert_eq!(
            tokenize("🔍 **Topic:** Specific detail"),
            runs(&[("🔍 ", false), ("Topic:", true), (" Specific detail", false)])
        );
    }

    #[test]
    fn test_other_markup_passes_through() {
        assert_eq!(
            tokenize("*italic* `code` [link](url) ~~gone~~"),
            runs(&[("*italic* `code` [link](url) ~~gone~~", false)])
        );
    }

    #[test]
    fn test_concatenation_drops_only_matched_delimiters() {
        let text = "lead **one** mid **two** tail **open";
        let joined: String = tokenize(text).into_iter().map(|r| r.content).collect();
        assert_eq!(joined, "lead one mid two tail **open");
    }
}
