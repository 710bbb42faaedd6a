//! Markdown rendering back into the summary mini-grammar.

use crate::model::{Block, Document, RichTextRun};
use crate::parser::{BOLD_DELIMITER, BULLET_PREFIX};

use super::{ConversionStats, RenderResult};

/// Convert a document to mini-grammar Markdown.
pub fn to_markdown(doc: &Document) -> String {
    MarkdownRenderer::new().render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document) -> RenderResult {
    MarkdownRenderer::new().render_with_stats(doc)
}

/// Markdown renderer.
///
/// Blocks are separated by a blank line so that each paragraph re-parses
/// as its own paragraph.
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    stats: ConversionStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &Document) -> String {
        self.render_internal(doc)
    }

    /// Render a document to Markdown with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> RenderResult {
        let content = self.render_internal(doc);
        RenderResult::new(content, self.stats)
    }

    fn render_internal(&mut self, doc: &Document) -> String {
        let mut output = String::new();

        for block in doc {
            if !output.is_empty() {
                output.push_str("\n\n");
            }
            self.render_block(&mut output, block);
            self.stats.record(block);
        }

        output
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Heading { level, text } => {
                output.push_str(level.prefix());
                output.push_str(text);
            }
            Block::BulletItem { runs } => {
                output.push_str(BULLET_PREFIX);
                render_runs(output, runs);
            }
            Block::Paragraph { runs } => render_runs(output, runs),
        }
    }
}

fn render_runs(output: &mut String, runs: &[RichTextRun]) {
    for run in runs {
        if run.bold {
            output.push_str(BOLD_DELIMITER);
            output.push_str(&run.content);
            output.push_str(BOLD_DELIMITER);
        } else {
            output.push_str(&run.content);
        }
    }
}
