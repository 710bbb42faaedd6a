//! Paragraph chunking.
//!
//! A paragraph within `max_paragraph_chars` becomes one block. A longer one
//! is split according to [`ChunkMode`]. Lengths are counted in characters,
//! not bytes.

use crate::model::{Block, RichTextRun};

use super::options::{ChunkMode, ParseOptions};
use super::rich_text::tokenize;

/// Turn an assembled paragraph into one or more paragraph blocks.
///
/// `options` must have passed [`ParseOptions::validate`].
pub(crate) fn chunk_paragraph(text: &str, options: &ParseOptions) -> Vec<Block> {
    let max = options.max_paragraph_chars;

    match options.chunk_mode {
        ChunkMode::Legacy => {
            let len = text.chars().count();
            if len <= max {
                return vec![Block::paragraph(tokenize(text))];
            }
            log::debug!("Paragraph of {} chars exceeds limit of {}, slicing", len, max);

            split_chars(text, options.chunk_chars)
                .map(|slice| Block::paragraph(vec![RichTextRun::plain(slice)]))
                .collect()
        }
        ChunkMode::RunAware => {
            // Delimiters are not content, so measure after tokenizing
            let runs = tokenize(text);
            let len: usize = runs.iter().map(RichTextRun::char_count).sum();
            if len <= max {
                return vec![Block::paragraph(runs)];
            }
            log::debug!(
                "Paragraph of {} chars exceeds limit of {}, packing runs",
                len,
                max
            );

            pack_runs(runs, options.chunk_chars)
                .into_iter()
                .map(Block::paragraph)
                .collect()
        }
    }
}

/// Split `text` into consecutive slices of at most `size` characters.
///
/// Slices ignore word and delimiter boundaries. A zero `size` is treated
/// as one.
pub(crate) fn split_chars(text: &str, size: usize) -> impl Iterator<Item = &str> + '_ {
    let size = size.max(1);
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest
            .char_indices()
            .nth(size)
            .map_or(rest.len(), |(idx, _)| idx);
        let (slice, tail) = rest.split_at(end);
        rest = tail;
        Some(slice)
    })
}

/// Pack runs into groups of at most `size` content characters.
///
/// A run is only split when it alone is longer than `size`; each piece keeps
/// the run's bold flag.
fn pack_runs(runs: Vec<RichTextRun>, size: usize) -> Vec<Vec<RichTextRun>> {
    let mut chunks = Vec::new();
    let mut current: Vec<RichTextRun> = Vec::new();
    let mut current_len = 0;

    for run in runs {
        let pieces: Vec<RichTextRun> = if run.char_count() > size {
            split_chars(&run.content, size)
                .map(|piece| RichTextRun {
                    content: piece.to_string(),
                    bold: run.bold,
                })
                .collect()
        } else {
            vec![run]
        };

        for piece in pieces {
            let piece_len = piece.char_count();
            if current_len + piece_len > size && !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            current_len += piece_len;
            current.push(piece);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    log::trace!("Packed runs into {} chunks", chunks.len());
    chunks
}
