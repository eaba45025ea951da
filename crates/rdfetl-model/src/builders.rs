//! Term builders.
//!
//! Each call shape has its own explicitly named constructor. [`IriRef`] and
//! [`LiteralTag`] put the shapes behind one entry point each ([`iri`] and
//! [`literal`]) for call sites that want a single function.
//!
//! ```
//! use rdfetl_model::builders::{iri, literal, IriRef};
//! use rdfetl_model::{Namespace, NamespaceRegistry, NamedNode};
//! use rdfetl_model::vocab::xsd;
//!
//! let t = Namespace::new("https://triply.cc/");
//! let mut registry = NamespaceRegistry::new();
//! registry.insert("t", t.clone());
//!
//! let a = iri(&registry, IriRef::Full("https://triply.cc/abc")).unwrap();
//! let b = iri(&registry, IriRef::Namespaced(&t, "abc")).unwrap();
//! let c = iri(&registry, IriRef::Aliased("t", "abc")).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(b, c);
//!
//! let price = literal("1.23", NamedNode::new(xsd::DECIMAL));
//! assert_eq!(price.datatype(), xsd::DECIMAL);
//! let label = literal("foo", "en");
//! assert_eq!(label.language(), Some("en"));
//! ```

use crate::error::Result;
use crate::namespace::{Namespace, NamespaceRegistry};
use crate::term::{Literal, NamedNode};

/// The three ways of naming an IRI.
#[derive(Debug, Clone, Copy)]
pub enum IriRef<'a> {
    /// A complete IRI, used verbatim.
    Full(&'a str),
    /// A namespace plus a local name.
    Namespaced(&'a Namespace, &'a str),
    /// A registry alias plus a local name.
    Aliased(&'a str, &'a str),
}

/// Wrap a complete IRI verbatim.
pub fn iri_from_full(iri: &str) -> NamedNode {
    NamedNode::new(iri)
}

pub fn iri_from_namespace(namespace: &Namespace, local: &str) -> NamedNode {
    namespace.iri(local)
}

/// Resolve `alias` through the registry, then concatenate as
/// [`iri_from_namespace`] does.
pub fn iri_from_alias(registry: &NamespaceRegistry, alias: &str, local: &str) -> Result<NamedNode> {
    Ok(registry.resolve(alias)?.iri(local))
}

/// Build a named node from any [`IriRef`].
///
/// Only the `Aliased` shape can fail, when the alias is not registered.
pub fn iri(registry: &NamespaceRegistry, reference: IriRef<'_>) -> Result<NamedNode> {
    match reference {
        IriRef::Full(full) => Ok(iri_from_full(full)),
        IriRef::Namespaced(namespace, local) => Ok(iri_from_namespace(namespace, local)),
        IriRef::Aliased(alias, local) => iri_from_alias(registry, alias, local),
    }
}

/// Second argument of [`literal`].
///
/// A named node always means a datatype and a bare string always means a
/// language tag. A datatype cannot be requested through a string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LiteralTag {
    #[default]
    Plain,
    Datatype(NamedNode),
    Language(String),
}

impl From<NamedNode> for LiteralTag {
    fn from(datatype: NamedNode) -> Self {
        Self::Datatype(datatype)
    }
}

impl From<&str> for LiteralTag {
    fn from(language: &str) -> Self {
        Self::Language(language.to_string())
    }
}

impl From<String> for LiteralTag {
    fn from(language: String) -> Self {
        Self::Language(language)
    }
}

/// `xsd:string` literal.
pub fn literal_string(value: impl Into<String>) -> Literal {
    Literal::new_string(value)
}

pub fn literal_typed(value: impl Into<String>, datatype: NamedNode) -> Literal {
    Literal::new_typed(value, datatype)
}

pub fn literal_lang(value: impl Into<String>, language: impl Into<String>) -> Literal {
    Literal::new_language_tagged(value, language)
}

/// Build a literal, dispatching on the shape of `tag`.
pub fn literal(value: impl Into<String>, tag: impl Into<LiteralTag>) -> Literal {
    match tag.into() {
        LiteralTag::Plain => literal_string(value),
        LiteralTag::Datatype(datatype) => literal_typed(value, datatype),
        LiteralTag::Language(language) => literal_lang(value, language),
    }
}
