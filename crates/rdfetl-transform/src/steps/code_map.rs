//! Coded string values to IRIs.
//!
//! Values are matched exactly, without trimming or case folding. A value
//! listed as a null marker clears the field; any other value without a table
//! entry fails the record.

use std::collections::{HashMap, HashSet};

use rdfetl_model::NamedNode;
use tracing::{debug, warn};

use crate::error::{Result, TransformError};
use crate::logging::redact_value;
use crate::record::Record;
use crate::step::RecordStep;

/// Outcome of resolving one coded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeLookup<'a> {
    Mapped(&'a NamedNode),
    Null,
    Unmapped,
}

/// Step replacing a coded text field with the IRI it stands for.
#[derive(Debug, Clone)]
pub struct StringToIri {
    name: String,
    key: String,
    table: HashMap<String, NamedNode>,
    nulls: HashSet<String>,
}

impl StringToIri {
    pub fn new<N, S>(key: impl Into<String>, table: HashMap<String, NamedNode>, nulls: N) -> Self
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        Self {
            name: format!("string_to_iri({key})"),
            key,
            table,
            nulls: nulls.into_iter().map(Into::into).collect(),
        }
    }

    /// Null markers take precedence over table entries.
    pub fn lookup(&self, value: &str) -> CodeLookup<'_> {
        if self.nulls.contains(value) {
            CodeLookup::Null
        } else if let Some(iri) = self.table.get(value) {
            CodeLookup::Mapped(iri)
        } else {
            CodeLookup::Unmapped
        }
    }
}

impl RecordStep for StringToIri {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply_to(&self, record: &mut Record) -> Result<()> {
        let value = record.require_text(&self.key)?;
        match self.lookup(value) {
            CodeLookup::Null => {
                debug!(key = %self.key, value = redact_value(value), "null marker, clearing field");
                record.clear(self.key.clone());
            }
            CodeLookup::Mapped(iri) => {
                let iri = iri.clone();
                record.set(self.key.clone(), iri);
            }
            CodeLookup::Unmapped => {
                warn!(key = %self.key, value = redact_value(value), "unmapped coded value");
                return Err(TransformError::LookupMiss {
                    field: self.key.clone(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Step mapping `key` through `table`, clearing it on any of `nulls`.
pub fn string_to_iri<N, S>(
    key: impl Into<String>,
    table: HashMap<String, NamedNode>,
    nulls: N,
) -> StringToIri
where
    N: IntoIterator<Item = S>,
    S: Into<String>,
{
    StringToIri::new(key, table, nulls)
}
