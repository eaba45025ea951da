//! Record-level transformation steps for record-to-RDF ETL.
//!
//! This crate provides the steps a host pipeline inserts between reading
//! source rows and writing triples:
//!
//! - **record**: the per-row field map and query row bindings
//! - **step / pipeline**: the step trait and ordered, short-circuiting execution
//! - **steps**: `hashed_iri`, `split`, `string_to_iri` and `sparql_select`
//! - **query**: the query engine and graph store seam
//! - **source**: CSV rows as records
//! - **logging**: subscriber setup and value redaction

pub mod error;
pub mod hash;
pub mod logging;
pub mod pipeline;
pub mod query;
pub mod record;
pub mod source;
pub mod step;
pub mod steps;

pub use error::{PipelineError, Result, TransformError};
pub use pipeline::Pipeline;
pub use query::{
    BindingsStream, EngineError, GraphStore, QueryEngine, QueryResult, QueryResultKind,
    QuerySources,
};
pub use record::{FieldValue, Record, RowBinding};
pub use source::read_csv_records;
pub use step::{RecordStep, Step, StepContext};
