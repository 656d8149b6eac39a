//! Lexical classification and stateful highlighting
//!
//! The pipeline: the tokenizer splits one line into a gap-free token
//! stream, the classifier refines tokens into semantic categories, the
//! line highlighter layers the comment/preprocessor state machine on
//! top, and the chunker partitions a file into renderable blocks while
//! threading the comment state across boundaries.

mod chunk;
mod classify;
mod lexer;
mod line;
mod tokens;

pub use chunk::{Chunk, Chunker};
pub use classify::Classifier;
pub use lexer::Tokenizer;
pub use line::{LineHighlighter, RenderState};
pub use tokens::{Category, RawKind, StyledSpan, Token};
