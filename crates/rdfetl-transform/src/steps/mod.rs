//! Record-level pipeline steps.
//!
//! - **hashed_iri**: content-derived identifiers
//! - **split**: delimited text to multi-valued fields
//! - **code_map**: coded values to IRIs (`string_to_iri`)
//! - **sparql_select**: fold SELECT query rows into the record

pub mod code_map;
pub mod hashed_iri;
pub mod sparql_select;
pub mod split;

pub use code_map::{CodeLookup, StringToIri, string_to_iri};
pub use hashed_iri::{HashedIri, hashed_iri, mint_hashed_iri};
pub use sparql_select::{SparqlSelect, select_rows, sparql_select};
pub use split::{DEFAULT_SEPARATOR, Split, split, split_values};
