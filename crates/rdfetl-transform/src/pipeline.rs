//! Ordered step execution.
//!
//! A [`Pipeline`] runs its steps one after another on a record; each step
//! sees the cumulative effect of the earlier ones. The first failing step
//! aborts the record and is reported together with the record index.
//!
//! # Example
//!
//! ```ignore
//! use rdfetl_transform::pipeline::Pipeline;
//! use rdfetl_transform::steps::{hashed_iri, split, string_to_iri};
//!
//! let pipeline = Pipeline::new()
//!     .with_step(split("tags", None))
//!     .with_step(string_to_iri("country", table, ["", "unknown"]))
//!     .with_step(hashed_iri(id_ns, ["name", "country"], "_id"));
//!
//! let records = pipeline.run_batch(records, &StepContext::new()).await?;
//! ```

use tracing::{Instrument, debug, info, info_span};

use crate::error::PipelineError;
use crate::record::Record;
use crate::step::{Step, StepContext};

/// Ordered list of steps applied to each record.
#[derive(Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step, builder style.
    #[must_use]
    pub fn with_step(mut self, step: impl Step + 'static) -> Self {
        self.add_step(step);
        self
    }

    pub fn add_step(&mut self, step: impl Step + 'static) {
        self.steps.push(Box::new(step));
    }

    /// Append a group of steps that belong together, keeping their order.
    pub fn extend_steps(&mut self, steps: impl IntoIterator<Item = Box<dyn Step>>) {
        self.steps.extend(steps);
    }

    pub fn step_names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|step| step.name())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Apply every step to one record.
    ///
    /// `index` only labels logs and errors.
    pub async fn run_record(
        &self,
        index: usize,
        mut record: Record,
        ctx: &StepContext,
    ) -> Result<Record, PipelineError> {
        async move {
            for step in &self.steps {
                debug!(step = step.name(), "applying step");
                step.apply(&mut record, ctx)
                    .await
                    .map_err(|source| PipelineError {
                        record: index,
                        step: step.name().to_string(),
                        source,
                    })?;
            }
            Ok::<_, PipelineError>(record)
        }
        .instrument(info_span!("record", index))
        .await
    }

    /// Process records in order, stopping at the first failing one.
    pub async fn run_batch(
        &self,
        records: Vec<Record>,
        ctx: &StepContext,
    ) -> Result<Vec<Record>, PipelineError> {
        let total = records.len();
        let mut output = Vec::with_capacity(total);
        for (index, record) in records.into_iter().enumerate() {
            output.push(self.run_record(index, record, ctx).await?);
        }
        info!(records = total, steps = self.steps.len(), "pipeline batch complete");
        Ok(output)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.step_names().collect::<Vec<_>>())
            .finish()
    }
}
