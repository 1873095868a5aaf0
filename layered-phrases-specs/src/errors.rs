//! Error types for the fixture harness.

use layered_phrases::{AnnotationError, PhraseError};
use thiserror::Error;

/// Errors that can occur while loading or running fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Error parsing a fixture file.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error loading a fixture file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// The fixture's annotation is not a well-formed tree.
    #[error("invalid annotation: {0}")]
    Annotation(#[from] AnnotationError),

    /// A verb phrase query in the fixture does not compile.
    #[error("invalid query: {0}")]
    Query(#[from] PhraseError),
}

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;
