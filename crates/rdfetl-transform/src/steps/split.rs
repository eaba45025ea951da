//! Delimited text fields to multi-valued fields.

use tracing::debug;

use crate::error::Result;
use crate::record::Record;
use crate::step::RecordStep;

pub const DEFAULT_SEPARATOR: &str = ",";

/// Split on `separator`, trim every part and drop the empty ones.
pub fn split_values(value: &str, separator: &str) -> Vec<String> {
    value
        .split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Step replacing a text field with its split parts.
#[derive(Debug, Clone)]
pub struct Split {
    name: String,
    key: String,
    separator: String,
}

impl Split {
    pub fn new(key: impl Into<String>, separator: Option<&str>) -> Self {
        let key = key.into();
        Self {
            name: format!("split({key})"),
            key,
            separator: separator.unwrap_or(DEFAULT_SEPARATOR).to_string(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl RecordStep for Split {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply_to(&self, record: &mut Record) -> Result<()> {
        let parts = split_values(record.require_text(&self.key)?, &self.separator);
        debug!(key = %self.key, parts = parts.len(), "split field");
        record.set(self.key.clone(), parts);
        Ok(())
    }
}

/// Step splitting `key` on `separator` (default `,`).
pub fn split(key: impl Into<String>, separator: Option<&str>) -> Split {
    Split::new(key, separator)
}
