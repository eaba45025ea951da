//! CSV rows as records.
//!
//! Header names become field names and every cell becomes a text field.
//! Headers and cells are trimmed (including a leading byte-order mark);
//! empty cells stay as empty text so null markers can match them. Headers
//! that coincide after trimming are rejected.

use std::collections::HashSet;
use std::io::Read;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{Result, TransformError};
use crate::record::Record;

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read all rows of a headed CSV document.
///
/// Rows with a different number of cells than the header are an error.
pub fn read_csv_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    let mut seen = HashSet::with_capacity(headers.len());
    if let Some(header) = headers.iter().find(|header| !seen.insert(*header)) {
        return Err(TransformError::DuplicateHeader {
            header: header.clone(),
        });
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(
            headers
                .iter()
                .zip(row.iter())
                .map(|(header, cell)| (header.clone(), normalize_cell(cell)))
                .collect(),
        );
    }
    debug!(records = records.len(), fields = headers.len(), "read CSV records");
    Ok(records)
}
