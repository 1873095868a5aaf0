//! Error types for annotation loading and phrase extraction.

use thiserror::Error;

/// The annotation handed over by an annotator violates the expected shape.
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("unknown coarse part-of-speech tag `{0}`")]
    UnknownPos(String),

    #[error("token {token} has head {head}, but the document has {len} tokens")]
    HeadOutOfRange { token: usize, head: usize, len: usize },

    #[error("{kind} span {start}..{end} is out of range for {len} tokens")]
    SpanOutOfRange {
        kind: &'static str,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("{kind} span {start}..{end} is empty")]
    EmptySpan {
        kind: &'static str,
        start: usize,
        end: usize,
    },

    #[error("noun chunk {start}..{end} has root {root} outside the span")]
    RootOutsideSpan { start: usize, end: usize, root: usize },

    #[error("token {token} never reaches a sentence root through its heads")]
    CyclicHead { token: usize },

    #[error("failed to parse JSON annotation: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse RON annotation: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Errors raised by the extractors themselves.
#[derive(Debug, Error)]
pub enum PhraseError {
    #[error("invalid anchor pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to parse extractor config: {0}")]
    Config(#[from] ron::error::SpannedError),
}

/// Neighbor lookup stepped outside the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no token at offset {offset} from token {index}")]
pub struct OutOfRange {
    pub index: usize,
    pub offset: isize,
}
