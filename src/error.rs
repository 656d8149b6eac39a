//! Error types for codepress

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for codepress operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Rendering run error types
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown theme '{0}' (use --list-themes to see available themes)")]
    UnknownTheme(String),

    #[error("could not read {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to finalize document {}: {source}", path.display())]
    DocumentFinalize {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),
}
