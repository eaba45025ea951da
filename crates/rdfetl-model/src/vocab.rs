//! Static vocabulary constants used by the term builders.
//!
//! Only the handful of IRIs the builders themselves depend on live here.
//! Larger vocabularies are plain data owned by the host pipeline.

/// `rdf:` namespace.
pub mod rdf {
    pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// Datatype reported by language-tagged literals.
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// `rdfs:` namespace.
pub mod rdfs {
    pub const NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";

    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
}

/// `xsd:` namespace.
pub mod xsd {
    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

    /// Default datatype of plain literals.
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}

pub mod owl {
    pub const NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";
}

pub mod skos {
    pub const NAMESPACE: &str = "http://www.w3.org/2004/02/skos/core#";
}

pub mod sh {
    pub const NAMESPACE: &str = "http://www.w3.org/ns/shacl#";
}
