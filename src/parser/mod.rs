//! Summary text parsing module.
//!
//! The pipeline runs line classification, paragraph accumulation, bold
//! tokenization and paragraph chunking, in that order.

mod accumulator;
mod chunker;
mod line;
mod options;
mod rich_text;
mod summary_parser;

pub use accumulator::{logical_units, LogicalUnit, LogicalUnits};
pub use line::{classify, LineKind, BULLET_PREFIX};
pub use options::{ChunkMode, ParseOptions, DEFAULT_CHUNK_CHARS, DEFAULT_MAX_PARAGRAPH_CHARS};
pub use rich_text::{scan, tokenize, Segment, Tokenized, BOLD_DELIMITER};
pub use summary_parser::SummaryParser;
