//! Parsing options and configuration.

use crate::error::{Error, Result};

/// Default maximum number of characters in one paragraph block.
pub const DEFAULT_MAX_PARAGRAPH_CHARS: usize = 2000;

/// Default slice size used when an over-length paragraph is chunked.
pub const DEFAULT_CHUNK_CHARS: usize = 1990;

/// Options for converting summary text into blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Paragraphs longer than this (in characters) are chunked
    pub max_paragraph_chars: usize,

    /// Maximum characters per chunk of an over-length paragraph
    pub chunk_chars: usize,

    /// How over-length paragraphs are split
    pub chunk_mode: ChunkMode,

    /// Whether to use parallel processing for batches
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paragraph length limit.
    pub fn with_max_paragraph_chars(mut self, chars: usize) -> Self {
        self.max_paragraph_chars = chars;
        self
    }

    /// Set the chunk size for over-length paragraphs.
    pub fn with_chunk_chars(mut self, chars: usize) -> Self {
        self.chunk_chars = chars;
        self
    }

    /// Set chunk mode.
    pub fn with_chunk_mode(mut self, mode: ChunkMode) -> Self {
        self.chunk_mode = mode;
        self
    }

    /// Keep bold formatting when chunking.
    pub fn run_aware(mut self) -> Self {
        self.chunk_mode = ChunkMode::RunAware;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check that the limits can uphold the paragraph length invariant.
    pub fn validate(&self) -> Result<()> {
        if self.max_paragraph_chars == 0 {
            return Err(Error::InvalidOptions(
                "max_paragraph_chars must be greater than zero".into(),
            ));
        }
        if self.chunk_chars == 0 {
            return Err(Error::InvalidOptions(
                "chunk_chars must be greater than zero".into(),
            ));
        }
        if self.chunk_chars > self.max_paragraph_chars {
            return Err(Error::InvalidOptions(format!(
                "chunk_chars ({}) exceeds max_paragraph_chars ({})",
                self.chunk_chars, self.max_paragraph_chars
            )));
        }
        Ok(())
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_paragraph_chars: DEFAULT_MAX_PARAGRAPH_CHARS,
            chunk_chars: DEFAULT_CHUNK_CHARS,
            chunk_mode: ChunkMode::Legacy,
            parallel: true,
        }
    }
}

/// How an over-length paragraph is split into blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChunkMode {
    /// Fixed-size raw slices as single plain runs; bold markers are kept
    /// as literal text and formatting is lost
    #[default]
    Legacy,
    /// Tokenize first and pack runs into chunks, splitting a run only
    /// when it alone exceeds the chunk size
    RunAware,
}
