//! RDF term model for record-to-RDF ETL.
//!
//! - **term**: named nodes, literals and triples
//! - **namespace**: namespace bindings and the prefix alias registry
//! - **builders**: `iri` / `literal` constructors per call shape
//! - **vocab**: the XSD and RDF constants the builders rely on

pub mod builders;
pub mod error;
pub mod namespace;
pub mod term;
pub mod vocab;

pub use builders::{IriRef, LiteralTag, iri, literal};
pub use error::{ModelError, Result};
pub use namespace::{Namespace, NamespaceRegistry};
pub use term::{Literal, LiteralAnnotation, NamedNode, Term, Triple};
