//! RDF term types: named nodes, literals and triples.
//!
//! Terms are immutable values with no identity beyond their content. No
//! validation is performed on IRIs or lexical forms; malformed terms
//! surface downstream when a store or query engine rejects them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vocab::{rdf, xsd};

/// An IRI used as a node in an RDF graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedNode(String);

impl NamedNode {
    /// Wrap an IRI string verbatim.
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl AsRef<str> for NamedNode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Datatype or language tag attached to a literal. The two are mutually
/// exclusive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralAnnotation {
    Datatype(NamedNode),
    Language(String),
}

/// A lexical form plus a datatype or a language tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Literal {
    value: String,
    annotation: LiteralAnnotation,
}

impl Literal {
    /// Literal typed as `xsd:string`.
    pub fn new_string(value: impl Into<String>) -> Self {
        Self::new_typed(value, NamedNode::new(xsd::STRING))
    }

    pub fn new_typed(value: impl Into<String>, datatype: NamedNode) -> Self {
        Self {
            value: value.into(),
            annotation: LiteralAnnotation::Datatype(datatype),
        }
    }

    /// The tag is kept exactly as given.
    pub fn new_language_tagged(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            annotation: LiteralAnnotation::Language(language.into()),
        }
    }

    /// Lexical form.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn annotation(&self) -> &LiteralAnnotation {
        &self.annotation
    }

    /// Datatype IRI; language-tagged literals report `rdf:langString`.
    pub fn datatype(&self) -> &str {
        match &self.annotation {
            LiteralAnnotation::Datatype(datatype) => datatype.as_str(),
            LiteralAnnotation::Language(_) => rdf::LANG_STRING,
        }
    }

    pub fn language(&self) -> Option<&str> {
        match &self.annotation {
            LiteralAnnotation::Language(language) => Some(language),
            LiteralAnnotation::Datatype(_) => None,
        }
    }

    pub fn is_plain_string(&self) -> bool {
        self.datatype() == xsd::STRING
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        write_escaped(f, &self.value)?;
        f.write_str("\"")?;
        match &self.annotation {
            LiteralAnnotation::Language(language) => write!(f, "@{language}"),
            LiteralAnnotation::Datatype(datatype) if datatype.as_str() == xsd::STRING => Ok(()),
            LiteralAnnotation::Datatype(datatype) => write!(f, "^^{datatype}"),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for ch in value.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            other => write!(f, "{other}")?,
        }
    }
    Ok(())
}

/// A node usable as the object of a triple.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "termType", content = "value", rename_all = "PascalCase")]
pub enum Term {
    NamedNode(NamedNode),
    Literal(Literal),
}

impl Term {
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            Self::NamedNode(node) => Some(node),
            Self::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(literal) => Some(literal),
            Self::NamedNode(_) => None,
        }
    }

    /// The IRI of a named node or the lexical form of a literal.
    pub fn lexical(&self) -> &str {
        match self {
            Self::NamedNode(node) => node.as_str(),
            Self::Literal(literal) => literal.value(),
        }
    }
}

impl From<NamedNode> for Term {
    fn from(node: NamedNode) -> Self {
        Self::NamedNode(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedNode(node) => node.fmt(f),
            Self::Literal(literal) => literal.fmt(f),
        }
    }
}

/// A single statement. Renders as one N-Triples line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: NamedNode,
    pub predicate: NamedNode,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: NamedNode, predicate: NamedNode, object: impl Into<Term>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
