//! Document model types for converted summary content.
//!
//! This module defines the block representation that bridges summary text
//! parsing and rendering into the wire format of a hierarchical document
//! API. Every value is built once per conversion and never mutated after
//! it has been emitted.

mod block;
mod document;
mod rich_text;

pub use block::{Block, BlockKind, HeadingLevel};
pub use document::Document;
pub use rich_text::RichTextRun;
