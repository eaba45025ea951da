//! Error types for record transformation.
//!
//! Every error is fatal for the record being processed. Retrying is up to
//! the host pipeline.

use thiserror::Error;

use crate::query::{EngineError, QueryResultKind};

/// Errors raised by a single step.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransformError {
    /// A step read a field the record does not hold, or one that was cleared.
    #[error("field '{field}' is missing from the record")]
    MissingField { field: String },

    #[error("field '{field}' holds {found}, expected {expected}")]
    UnexpectedFieldType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A coded value had no table entry and is not a null marker.
    #[error("no IRI mapping for value '{value}' in field '{field}'")]
    LookupMiss { field: String, value: String },

    /// The embedded query produced something other than row bindings.
    #[error("unexpected query result type '{kind}' for field '{field}', expected 'bindings'")]
    UnexpectedResultKind {
        field: String,
        kind: QueryResultKind,
    },

    #[error("while executing a SELECT query: {source}")]
    QueryExecution {
        #[source]
        source: EngineError,
    },

    /// A query step ran in a context without a query engine.
    #[error("no query engine is configured for this pipeline")]
    QueryEngineUnavailable,

    #[error("failed to encode hash input: {0}")]
    HashInput(#[from] serde_json::Error),

    /// Two CSV columns share a name once headers are normalised.
    #[error("duplicate CSV header '{header}'")]
    DuplicateHeader { header: String },

    #[error("failed to read CSV records: {0}")]
    Csv(#[from] csv::Error),
}

impl TransformError {
    pub(crate) fn missing(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }
}

/// A step failure annotated with where it happened.
#[derive(Debug, Error)]
#[error("record {record}: step '{step}' failed: {source}")]
pub struct PipelineError {
    /// Zero-based index of the record in its batch.
    pub record: usize,
    pub step: String,
    #[source]
    pub source: TransformError,
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
