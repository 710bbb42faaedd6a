//! Rendering module for converting block documents to output formats.

mod json;
mod markdown;
pub mod notion;
mod result;
mod text;

pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use notion::{
    to_notion_blocks, to_notion_json, NotionBlock, NotionRichText, PageRequest, NOTION_API_BASE,
    NOTION_VERSION,
};
pub use result::{ConversionStats, RenderResult};
pub use text::to_text;
