//! Summary text parser producing block documents.

use std::fs;
use std::io::Read;
use std::path::Path;

use rayon::prelude::*;

use crate::error::Result;
use crate::model::{Block, Document};
use crate::render::ConversionStats;

use super::accumulator::{logical_units, LogicalUnit};
use super::chunker::chunk_paragraph;
use super::options::ParseOptions;
use super::rich_text::tokenize;

/// Converter from summary mini-grammar text to a [`Document`].
///
/// The parser holds only validated options, so one instance can be shared
/// across threads and reused for any number of inputs.
#[derive(Debug, Clone, Default)]
pub struct SummaryParser {
    options: ParseOptions,
}

impl SummaryParser {
    /// Create a parser with default limits (2000 / 1990 characters).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    ///
    /// Fails when the options cannot uphold the paragraph length limit.
    pub fn with_options(options: ParseOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Get the options in use.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Convert summary text into blocks.
    ///
    /// Never fails: malformed markup degrades to plain text and blank input
    /// yields an empty document.
    pub fn parse(&self, text: &str) -> Document {
        self.convert(text, None)
    }

    /// Convert summary text and collect statistics over the result.
    pub fn parse_with_stats(&self, text: &str) -> (Document, ConversionStats) {
        let mut stats = ConversionStats::new();
        let document = self.convert(text, Some(&mut stats));
        (document, stats)
    }

    fn convert(&self, text: &str, mut stats: Option<&mut ConversionStats>) -> Document {
        let mut document = Document::new();

        for unit in logical_units(text) {
            let blocks = match unit {
                LogicalUnit::Heading { level, text } => vec![Block::heading(level, text)],
                LogicalUnit::Bullet(text) => vec![Block::bullet(tokenize(text))],
                LogicalUnit::Paragraph(text) => chunk_paragraph(&text, &self.options),
            };

            if let Some(stats) = stats.as_deref_mut() {
                if blocks.len() > 1 {
                    stats.add_chunked_paragraph();
                }
                for block in &blocks {
                    stats.record(block);
                }
            }

            document.extend(blocks);
        }

        log::debug!(
            "Converted {} bytes of summary text into {} blocks",
            text.len(),
            document.len()
        );

        document
    }

    /// Read and convert a UTF-8 file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let text = fs::read_to_string(path)?;
        Ok(self.parse(&text))
    }

    /// Read and convert UTF-8 text from a reader.
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Document> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(self.parse(&text))
    }

    /// Convert several independent texts, keeping input order.
    ///
    /// Uses the rayon thread pool unless the options are sequential.
    pub fn parse_many<S>(&self, texts: &[S]) -> Vec<Document>
    where
        S: AsRef<str> + Sync,
    {
        if self.options.parallel {
            texts.par_iter().map(|t| self.parse(t.as_ref())).collect()
        } else {
            texts.iter().map(|t| self.parse(t.as_ref())).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockKind, HeadingLevel, RichTextRun};
    use crate::Error;

    #[test]
    fn test_parse_structured_summary() {
        let text = "\
Intro paragraph with **key** idea
that spans two lines.

## Highlights

- 🎯 **Main Topic:** Rust
- 🔑 **Key Points:** Ownership

Closing words.";

        let doc = SummaryParser::new().parse(text);
        assert_eq!(
            doc.blocks(),
            &[
                Block::paragraph(vec![
                    RichTextRun::plain("Intro paragraph with "),
                    RichTextRun::bold("key"),
                    RichTextRun::plain(" idea that spans two lines."),
                ]),
                Block::heading(HeadingLevel::H2, "Highlights"),
                Block::bullet(vec![
                    RichTextRun::plain("🎯 "),
                    RichTextRun::bold("Main Topic:"),
                    RichTextRun::plain(" Rust"),
                ]),
                Block::bullet(vec![
                    RichTextRun::plain("🔑 "),
                    RichTextRun::bold("Key Points:"),
                    RichTextRun::plain(" Ownership"),
                ]),
                Block::paragraph(vec![RichTextRun::plain("Closing words.")]),
            ]
        );
    }

    #[test]
    fn test_heading_keeps_bold_markers() {
        let doc = SummaryParser::new().parse("### **Not** tokenized");
        assert_eq!(
            doc.blocks(),
            &[Block::heading(HeadingLevel::H3, "**Not** tokenized")]
        );
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let parser = SummaryParser::new();
        assert!(parser.parse("").is_empty());
        assert!(parser.parse("   \n \t\n\n").is_empty());
    }

    #[test]
    fn test_with_options_validates() {
        let bad = ParseOptions::new()
            .with_max_paragraph_chars(5)
            .with_chunk_chars(6);
        assert!(matches!(
            SummaryParser::with_options(bad),
            Err(Error::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_custom_limits_are_used() {
        let options = ParseOptions::new()
            .with_max_paragraph_chars(10)
            .with_chunk_chars(4);
        let parser = SummaryParser::with_options(options).unwrap();
        let doc = parser.parse("abcdefghijk");
        let texts: Vec<String> = doc.iter().map(Block::plain_text).collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ijk"]);
        assert_eq!(doc.count(BlockKind::Paragraph), 3);
    }

    #[test]
    fn test_parse_with_stats_counts_chunked_paragraphs() {
        let text = format!("## Title\n\n{}\n\n- **a** b\n\nshort", "y".repeat(4100));
        let (doc, stats) = SummaryParser::new().parse_with_stats(&text);

        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.bullet_count, 1);
        // 4100 chars become 1990 + 1990 + 120, plus the short paragraph
        assert_eq!(stats.paragraph_count, 4);
        assert_eq!(stats.chunked_paragraph_count, 1);
        assert_eq!(stats.bold_run_count, 1);
        assert_eq!(stats.block_count() as usize, doc.len());
    }

    #[test]
    fn test_parse_reader() {
        let reader = std::io::Cursor::new("# Title\n- item");
        let doc = SummaryParser::new().parse_reader(reader).unwrap();
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_parse_many_preserves_order() {
        let texts: Vec<String> = (0..32).map(|i| format!("# Doc {}", i)).collect();
        for parser in [
            SummaryParser::new(),
            SummaryParser::with_options(ParseOptions::new().sequential()).unwrap(),
        ] {
            let docs = parser.parse_many(&texts);
            assert_eq!(docs.len(), 32);
            for (i, doc) in docs.iter().enumerate() {
                assert_eq!(doc.blocks()[0].plain_text(), format!("Doc {}", i));
            }
        }
    }
}
