//! The step abstraction.
//!
//! A step transforms one record in place. Steps are composed into a
//! [`Pipeline`](crate::pipeline::Pipeline) that runs them in order and stops
//! at the first error.

use async_trait::async_trait;

use crate::error::Result;
use crate::query::QuerySources;
use crate::record::Record;

/// Shared, read-only state available to every step.
#[derive(Debug, Clone, Default)]
pub struct StepContext {
    query: Option<QuerySources>,
}

impl StepContext {
    /// Context without a query engine. Query steps fail in it.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query_sources(mut self, sources: QuerySources) -> Self {
        self.query = Some(sources);
        self
    }

    pub fn query_sources(&self) -> Option<&QuerySources> {
        self.query.as_ref()
    }
}

/// A record-transforming pipeline step.
#[async_trait]
pub trait Step: Send + Sync {
    /// Name used in logs and in [`PipelineError`](crate::error::PipelineError).
    fn name(&self) -> &str;

    async fn apply(&self, record: &mut Record, ctx: &StepContext) -> Result<()>;
}

/// Steps that never suspend.
///
/// Implementors get [`Step`] for free.
pub trait RecordStep: Send + Sync {
    fn name(&self) -> &str;

    fn apply_to(&self, record: &mut Record) -> Result<()>;
}

#[async_trait]
impl<T: RecordStep> Step for T {
    fn name(&self) -> &str {
        RecordStep::name(self)
    }

    async fn apply(&self, record: &mut Record, _ctx: &StepContext) -> Result<()> {
        self.apply_to(record)
    }
}
