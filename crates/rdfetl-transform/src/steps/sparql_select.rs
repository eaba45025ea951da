//! Embedded SELECT query step.
//!
//! Runs a query against the graph accumulated so far and stores the
//! resulting rows on the record. Only bindings results are accepted; any
//! other result kind means the wrong kind of query was supplied.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Result, TransformError};
use crate::query::{QueryResult, QuerySources};
use crate::record::{Record, RowBinding};
use crate::step::{Step, StepContext};

/// Run `query` and return its rows in engine order.
pub async fn select_rows(
    sources: &QuerySources,
    key: &str,
    query: &str,
) -> Result<Vec<RowBinding>> {
    debug!(key, triples = sources.triple_count(), "issuing SELECT query");
    let result = sources
        .engine
        .execute(query, &sources.stores)
        .await
        .map_err(|source| TransformError::QueryExecution { source })?;
    match result {
        QueryResult::Bindings(stream) => stream
            .to_vec()
            .await
            .map_err(|source| TransformError::QueryExecution { source }),
        other => Err(TransformError::UnexpectedResultKind {
            field: key.to_string(),
            kind: other.kind(),
        }),
    }
}

/// Step storing the rows of a SELECT query under `key`.
#[derive(Debug, Clone)]
pub struct SparqlSelect {
    name: String,
    key: String,
    query: String,
}

impl SparqlSelect {
    pub fn new(key: impl Into<String>, query: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            name: format!("sparql_select({key})"),
            key,
            query: query.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[async_trait]
impl Step for SparqlSelect {
    fn name(&self) -> &str {
        &self.name
    }

    async fn apply(&self, record: &mut Record, ctx: &StepContext) -> Result<()> {
        let sources = ctx
            .query_sources()
            .ok_or(TransformError::QueryEngineUnavailable)?;
        let rows = select_rows(sources, &self.key, &self.query).await?;
        debug!(key = %self.key, rows = rows.len(), "stored query bindings");
        record.set(self.key.clone(), rows);
        Ok(())
    }
}

/// Step running the SELECT `query` into `key`.
pub fn sparql_select(key: impl Into<String>, query: impl Into<String>) -> SparqlSelect {
    SparqlSelect::new(key, query)
}
