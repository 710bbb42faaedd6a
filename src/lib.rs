//! # noteblocks
//!
//! Converter from lightweight Markdown summary text to typed content blocks.
//!
//! Summaries written with `#`/`##`/`###` headings, `- ` bullets and
//! `**bold**` spans are turned into an ordered list of heading, bulleted
//! list item and paragraph blocks, ready to be sent as the children of a
//! page in a hierarchical document API.
//!
//! ## Quick Start
//!
//! ```
//! use noteblocks::{parse_str, render};
//!
//! fn main() -> noteblocks::Result<()> {
//!     let doc = parse_str("## Highlights\n\n- **Main Topic:** Rust");
//!     assert_eq!(doc.len(), 2);
//!
//!     // Notion block children
//!     let json = render::to_notion_json(&doc, render::JsonFormat::Compact)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Mini-grammar parsing**: headings, bullets, multi-line paragraphs
//! - **Bold runs**: `**bold**` spans become annotated rich text
//! - **Length limits**: over-length paragraphs are chunked below the API limit
//! - **Multiple output formats**: block JSON, Notion JSON, Markdown, plain text
//! - **Parallel processing**: Uses Rayon for batches of summaries
//! - **Fallback summaries**: deterministic summary text from a transcript

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod summary;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Block, BlockKind, Document, HeadingLevel, RichTextRun};
pub use parser::{ChunkMode, ParseOptions, SummaryParser};
pub use render::{ConversionStats, JsonFormat, PageRequest};
pub use summary::{FallbackSummarizer, Summarizer, Summary, SummaryOrigin, VideoInfo};

use std::io::Read;
use std::path::Path;

/// Convert summary text into blocks with default limits.
///
/// # Example
///
/// ```
/// use noteblocks::{parse_str, BlockKind};
///
/// let doc = parse_str("# Title\nSome **bold** text");
/// assert_eq!(doc.count(BlockKind::Heading), 1);
/// assert_eq!(doc.count(BlockKind::Paragraph), 1);
/// ```
pub fn parse_str(text: &str) -> Document {
    SummaryParser::new().parse(text)
}

/// Convert summary text with custom options.
///
/// # Example
///
/// ```
/// use noteblocks::{parse_str_with_options, ParseOptions};
///
/// let options = ParseOptions::new().run_aware();
/// let doc = parse_str_with_options("plain **bold**", options).unwrap();
/// assert!(doc.blocks()[0].has_bold());
/// ```
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Result<Document> {
    Ok(SummaryParser::with_options(options)?.parse(text))
}

/// Read and convert a summary file.
///
/// # Arguments
///
/// * `path` - Path to a UTF-8 text file
///
/// # Example
///
/// ```no_run
/// use noteblocks::parse_file;
///
/// let doc = parse_file("summary.md").unwrap();
/// println!("Blocks: {}", doc.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    SummaryParser::new().parse_file(path)
}

/// Read and convert a summary file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    SummaryParser::with_options(options)?.parse_file(path)
}

/// Read and convert summary text from a reader.
///
/// # Example
///
/// ```no_run
/// use noteblocks::parse_reader;
///
/// let doc = parse_reader(std::io::stdin()).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    SummaryParser::new().parse_reader(reader)
}

/// Convert summary text to block JSON.
///
/// # Example
///
/// ```
/// use noteblocks::{to_json, JsonFormat};
///
/// let json = to_json("# Hi", JsonFormat::Compact).unwrap();
/// assert_eq!(json, r#"{"blocks":[{"kind":"heading","level":1,"text":"Hi"}]}"#);
/// ```
pub fn to_json(text: &str, format: JsonFormat) -> Result<String> {
    render::to_json(&parse_str(text), format)
}

/// Convert summary text to Notion block children JSON.
pub fn to_notion_json(text: &str, format: JsonFormat) -> Result<String> {
    render::to_notion_json(&parse_str(text), format)
}

/// Builder for converting summary text.
///
/// # Example
///
/// ```
/// use noteblocks::NoteBlocks;
///
/// let json = NoteBlocks::new()
///     .max_paragraph_chars(1000)
///     .chunk_chars(900)
///     .run_aware()
///     .parse("## Notes\n\n- **a** b")?
///     .to_notion_json(noteblocks::JsonFormat::Pretty)?;
/// # Ok::<(), noteblocks::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct NoteBlocks {
    parse_options: ParseOptions,
}

impl NoteBlocks {
    /// Create a new builder with default limits.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
        }
    }

    /// Set the maximum paragraph length in characters.
    pub fn max_paragraph_chars(mut self, chars: usize) -> Self {
        self.parse_options = self.parse_options.with_max_paragraph_chars(chars);
        self
    }

    /// Set the chunk length for over-length paragraphs.
    pub fn chunk_chars(mut self, chars: usize) -> Self {
        self.parse_options = self.parse_options.with_chunk_chars(chars);
        self
    }

    /// Set the chunk mode.
    pub fn chunk_mode(mut self, mode: ChunkMode) -> Self {
        self.parse_options = self.parse_options.with_chunk_mode(mode);
        self
    }

    /// Keep bold formatting when chunking.
    pub fn run_aware(mut self) -> Self {
        self.parse_options = self.parse_options.run_aware();
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parse_options = self.parse_options.sequential();
        self
    }

    /// Build the parser these settings describe.
    pub fn parser(&self) -> Result<SummaryParser> {
        SummaryParser::with_options(self.parse_options.clone())
    }

    /// Convert summary text and return a result wrapper.
    pub fn parse(self, text: &str) -> Result<NoteBlocksResult> {
        let (document, stats) = self.parser()?.parse_with_stats(text);
        Ok(NoteBlocksResult { document, stats })
    }

    /// Read and convert a summary file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<NoteBlocksResult> {
        let text = std::fs::read_to_string(path)?;
        self.parse(&text)
    }

    /// Convert several summaries, keeping input order.
    pub fn parse_many<S>(self, texts: &[S]) -> Result<Vec<Document>>
    where
        S: AsRef<str> + Sync,
    {
        Ok(self.parser()?.parse_many(texts))
    }
}

impl Default for NoteBlocks {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of converting summary text.
#[derive(Debug, Clone)]
pub struct NoteBlocksResult {
    /// The converted document
    pub document: Document,
    /// Statistics over the conversion
    pub stats: ConversionStats,
}

impl NoteBlocksResult {
    /// Convert to block JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert to Notion block children JSON.
    pub fn to_notion_json(&self, format: JsonFormat) -> Result<String> {
        render::to_notion_json(&self.document, format)
    }

    /// Render back to summary text.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.document)
    }

    /// Render to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Build a page-create request carrying the blocks as children.
    pub fn page_request(
        &self,
        database_id: impl Into<String>,
        title: impl Into<String>,
    ) -> PageRequest {
        PageRequest::new(database_id, title).with_document(&self.document)
    }

    /// Build the page-create request for a video, titled after it and
    /// carrying its URL.
    pub fn video_page_request(
        &self,
        database_id: impl Into<String>,
        info: &VideoInfo,
    ) -> PageRequest {
        PageRequest::for_video(database_id, info).with_document(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take the document.
    pub fn into_document(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noteblocks_builder() {
        let builder = NoteBlocks::new()
            .max_paragraph_chars(100)
            .chunk_chars(50)
            .run_aware();

        assert_eq!(builder.parse_options.max_paragraph_chars, 100);
        assert_eq!(builder.parse_options.chunk_chars, 50);
        assert_eq!(builder.parse_options.chunk_mode, ChunkMode::RunAware);
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_parse_str_empty() {
        assert!(parse_str("").is_empty());
        assert!(parse_str("\n\n  \n").is_empty());
    }

    #[test]
    fn test_parse_str_with_invalid_options() {
        let options = ParseOptions::new().with_chunk_chars(0);
        let result = parse_str_with_options("text", options);
        assert!(matches!(result, Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("/nonexistent/summary.md");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_parse_reader() {
        let doc = parse_reader("- one\n- two".as_bytes()).unwrap();
        assert_eq!(doc.count(BlockKind::Bullet), 2);
    }

    // ==================== Builder Pattern Tests ====================

    #[test]
    fn test_noteblocks_builder_default() {
        let builder = NoteBlocks::default();
        assert_eq!(builder.parse_options, ParseOptions::default());
    }

    #[test]
    fn test_noteblocks_builder_sequential() {
        let builder = NoteBlocks::new().sequential();
        assert!(!builder.parse_options.parallel);
    }

    #[test]
    fn test_noteblocks_builder_rejects_invalid_limits() {
        let result = NoteBlocks::new()
            .max_paragraph_chars(10)
            .chunk_chars(20)
            .parse("text");
        assert!(result.is_err());
    }

    #[test]
    fn test_noteblocks_parse_many() {
        let docs = NoteBlocks::new()
            .sequential()
            .parse_many(&["# a", "- b", "c"])
            .unwrap();
        let kinds: Vec<BlockKind> = docs.iter().map(|d| d.blocks()[0].kind()).collect();
        assert_eq!(
            kinds,
            vec![BlockKind::Heading, BlockKind::Bullet, BlockKind::Paragraph]
        );
    }

    // ==================== Output Format Tests ====================

    #[test]
    fn test_result_outputs() {
        let result = NoteBlocks::new()
            .parse("## Notes\n\n- **Key:** value")
            .unwrap();

        assert_eq!(result.stats.heading_count, 1);
        assert_eq!(result.stats.bullet_count, 1);
        assert_eq!(result.to_markdown(), "## Notes\n\n- **Key:** value");
        assert_eq!(result.to_text(), "Notes\n\nKey: value");

        let json = result.to_notion_json(JsonFormat::Compact).unwrap();
        assert!(json.contains(r#""type":"heading_2""#));
        assert!(json.contains(r#""type":"bulleted_list_item""#));
    }

    #[test]
    fn test_result_page_request() {
        let result = NoteBlocks::new().parse("# T").unwrap();
        let request = result.page_request("db-1", "Title");
        assert_eq!(request.children().len(), 1);
    }

    #[test]
    fn test_to_json_convenience() {
        let json = to_json("plain **bold**", JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"{"blocks":[{"kind":"paragraph","runs":[{"text":"plain ","bold":false},{"text":"bold","bold":true}]}]}"#
        );
    }
}
