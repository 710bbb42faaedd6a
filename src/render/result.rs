//! Rendering result and conversion statistics.

use serde::{Deserialize, Serialize};

use crate::model::{Block, Document};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown, text, etc.)
    pub content: String,

    /// Statistics over the rendered blocks
    pub stats: ConversionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: ConversionStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected over converted blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Number of heading blocks
    pub heading_count: u32,

    /// Number of bullet item blocks
    pub bullet_count: u32,

    /// Number of paragraph blocks (each chunk counts once)
    pub paragraph_count: u32,

    /// Number of source paragraphs that exceeded the limit and were chunked
    pub chunked_paragraph_count: u32,

    /// Number of bold runs
    pub bold_run_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics over every block of a document.
    ///
    /// `chunked_paragraph_count` is left at zero; only the parser knows
    /// which paragraph blocks came from one source paragraph.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        for block in doc {
            stats.record(block);
        }
        stats
    }

    /// Count one block.
    pub fn record(&mut self, block: &Block) {
        match block {
            Block::Heading { .. } => self.heading_count += 1,
            Block::BulletItem { .. } => self.bullet_count += 1,
            Block::Paragraph { .. } => self.paragraph_count += 1,
        }
        if let Some(runs) = block.runs() {
            self.bold_run_count += runs.iter().filter(|r| r.bold).count() as u32;
        }
        self.count_text(&block.plain_text());
    }

    /// Count a source paragraph that was split into several blocks.
    pub fn add_chunked_paragraph(&mut self) {
        self.chunked_paragraph_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Total number of blocks counted.
    pub fn block_count(&self) -> u32 {
        self.heading_count + self.bullet_count + self.paragraph_count
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ConversionStats) {
        self.heading_count += other.heading_count;
        self.bullet_count += other.bullet_count;
        self.paragraph_count += other.paragraph_count;
        self.chunked_paragraph_count += other.chunked_paragraph_count;
        self.bold_run_count += other.bold_run_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingLevel, RichTextRun};

    #[test]
    fn test_conversion_stats_count_text() {
        let mut stats = ConversionStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_from_document() {
        let doc = Document::from(vec![
            Block::heading(HeadingLevel::H2, "Highlights"),
            Block::bullet(vec![RichTextRun::bold("A:"), RichTextRun::plain(" b c")]),
            Block::paragraph(vec![RichTextRun::plain("d")]),
        ]);
        let stats = ConversionStats::from_document(&doc);

        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.bullet_count, 1);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.bold_run_count, 1);
        assert_eq!(stats.word_count, 5);
        assert_eq!(stats.block_count(), 3);
        assert_eq!(stats.chunked_paragraph_count, 0);
    }

    #[test]
    fn test_conversion_stats_merge() {
        let mut stats1 = ConversionStats::new();
        stats1.paragraph_count = 5;
        stats1.heading_count = 2;

        let stats2 = ConversionStats {
            paragraph_count: 3,
            heading_count: 1,
            chunked_paragraph_count: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.paragraph_count, 8);
        assert_eq!(stats1.heading_count, 3);
        assert_eq!(stats1.chunked_paragraph_count, 4);
    }

    #[test]
    fn test_render_result_content_len() {
        let result = RenderResult::new("# Hello".to_string(), ConversionStats::new());
        assert_eq!(result.content, "# Hello");
        assert_eq!(result.content_len(), 7);
        assert_eq!(result.stats.block_count(), 0);
    }
}
