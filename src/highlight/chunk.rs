//! File chunking
//!
//! Partitions a file's lines into fixed-size chunks for block-by-block
//! rendering, computing the comment-continuation state each chunk is
//! entered with. The entry states come from one authoritative forward
//! pass over all lines using the exact line transition function, so a
//! chunk render is a pure function of the chunk alone and chunks can
//! be rendered independently (or in parallel) once planned.

use super::line::{LineHighlighter, RenderState};

/// A bounded, ordered slice of a file's lines rendered as one block
#[derive(Debug, Clone)]
pub struct Chunk {
    /// 1-based line number of the chunk's first line
    pub start_line: usize,
    /// The chunk's lines, in order
    pub lines: Vec<String>,
    /// Whether this is the file's first chunk (top border)
    pub is_first: bool,
    /// Whether this is the file's last chunk (bottom border)
    pub is_last: bool,
    /// Comment state active at the chunk's first line
    pub entry_state: RenderState,
}

/// Splits files into chunks of at most `chunk_size` lines
pub struct Chunker {
    chunk_size: usize,
}

impl Chunker {
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Plan the chunks for one file.
    ///
    /// Always yields at least one chunk (an empty file is a single
    /// chunk with one empty line, the way splitting "" on newlines
    /// leaves one empty string).
    pub fn chunks(&self, highlighter: &LineHighlighter, lines: &[String]) -> Vec<Chunk> {
        let count = lines.len().max(1);
        let num_chunks = (count + self.chunk_size - 1) / self.chunk_size;

        let mut chunks = Vec::with_capacity(num_chunks);
        let mut state = RenderState::normal();

        for idx in 0..num_chunks {
            let start = idx * self.chunk_size;
            let end = (start + self.chunk_size).min(lines.len());
            let chunk_lines: Vec<String> = lines[start..end].to_vec();

            let entry_state = state;
            for line in &chunk_lines {
                state = highlighter.exit_state(line, state);
            }

            chunks.push(Chunk {
                start_line: start + 1,
                lines: chunk_lines,
                is_first: idx == 0,
                is_last: idx == num_chunks - 1,
                entry_state,
            });
        }

        chunks
    }
}
