use thiserror::Error;

/// Top-level errors surfaced by the punctuation engines.
#[derive(Debug, Error)]
pub enum PunctError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Alignment(#[from] AlignmentError),
    #[error("word at position {index} has no label votes")]
    UnvotedSlot { index: usize },
    #[error("labeler failed: {0}")]
    Labeler(#[from] anyhow::Error),
}

/// Invalid window geometry, rejected when the configuration is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,
    #[error("overlap {overlap} must be smaller than chunk size {chunk_size}")]
    OverlapTooLarge { chunk_size: usize, overlap: usize },
}

/// Labeler output that cannot be reconciled word-for-word with the window it
/// was produced for. Always a contract defect, never an input error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignmentError {
    #[error("window at word {window_start} expanded to {found} words, expected {expected}")]
    SpanCount {
        window_start: usize,
        expected: usize,
        found: usize,
    },
    #[error(
        "window at word {window_start} returned '{found}' at position {index} where '{expected}' was expected"
    )]
    WordMismatch {
        window_start: usize,
        index: usize,
        expected: String,
        found: String,
    },
}
