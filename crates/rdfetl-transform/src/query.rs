//! Query engine seam.
//!
//! The engine and the graph store belong to the host pipeline. This crate
//! only issues queries through [`QueryEngine`] and never writes to a store.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use rdfetl_model::Triple;
use serde::{Deserialize, Serialize};

use crate::record::RowBinding;

/// Error type reported by a query engine.
pub type EngineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The in-progress collection of triples a pipeline is building.
///
/// Opaque to steps: it is handed to the [`QueryEngine`] as a query source
/// and never read or written here.
pub trait GraphStore: Send + Sync {
    /// Number of triples currently held. Only used for diagnostics, in the
    /// query step's debug log.
    fn triple_count(&self) -> usize;
}

/// Executes query strings against one or more graph stores.
#[async_trait]
pub trait QueryEngine: Send + Sync {
    async fn execute(
        &self,
        query: &str,
        sources: &[Arc<dyn GraphStore>],
    ) -> Result<QueryResult, EngineError>;
}

/// Asynchronous accessor for the rows of a bindings result.
#[async_trait]
pub trait BindingsStream: Send {
    /// Collect every row, preserving the engine's order.
    async fn to_vec(self: Box<Self>) -> Result<Vec<RowBinding>, EngineError>;
}

#[async_trait]
impl BindingsStream for Vec<RowBinding> {
    async fn to_vec(self: Box<Self>) -> Result<Vec<RowBinding>, EngineError> {
        Ok(*self)
    }
}

/// Discriminant of a [`QueryResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryResultKind {
    Bindings,
    Boolean,
    Quads,
    Void,
}

impl QueryResultKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bindings => "bindings",
            Self::Boolean => "boolean",
            Self::Quads => "quads",
            Self::Void => "void",
        }
    }
}

impl fmt::Display for QueryResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an engine returns for one query.
pub enum QueryResult {
    /// SELECT.
    Bindings(Box<dyn BindingsStream>),
    /// ASK.
    Boolean(bool),
    /// CONSTRUCT / DESCRIBE.
    Quads(Vec<Triple>),
    /// Updates.
    Void,
}

impl QueryResult {
    /// Bindings result backed by already materialised rows.
    pub fn bindings(rows: Vec<RowBinding>) -> Self {
        Self::Bindings(Box::new(rows))
    }

    pub fn kind(&self) -> QueryResultKind {
        match self {
            Self::Bindings(_) => QueryResultKind::Bindings,
            Self::Boolean(_) => QueryResultKind::Boolean,
            Self::Quads(_) => QueryResultKind::Quads,
            Self::Void => QueryResultKind::Void,
        }
    }
}

impl fmt::Debug for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bindings(_) => f.write_str("QueryResult::Bindings(..)"),
            Self::Boolean(value) => write!(f, "QueryResult::Boolean({value})"),
            Self::Quads(triples) => write!(f, "QueryResult::Quads({} triples)", triples.len()),
            Self::Void => f.write_str("QueryResult::Void"),
        }
    }
}

/// Engine plus the stores it should query, as handed to steps.
#[derive(Clone)]
pub struct QuerySources {
    pub engine: Arc<dyn QueryEngine>,
    pub stores: Vec<Arc<dyn GraphStore>>,
}

impl QuerySources {
    pub fn new(engine: Arc<dyn QueryEngine>, store: Arc<dyn GraphStore>) -> Self {
        Self {
            engine,
            stores: vec![store],
        }
    }

    /// Triples visible across all stores.
    pub fn triple_count(&self) -> usize {
        self.stores.iter().map(|store| store.triple_count()).sum()
    }
}

impl fmt::Debug for QuerySources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuerySources")
            .field("stores", &self.stores.len())
            .finish_non_exhaustive()
    }
}
