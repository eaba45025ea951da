//! Namespace bindings and the prefix alias registry.
//!
//! A [`Namespace`] mints named nodes by plain string concatenation of its
//! base IRI and a local name. No percent-encoding, normalization or
//! trailing-slash correction happens here; callers supply well-formed bases
//! and local names.
//!
//! The registry is built once at process start (from [`NamespaceRegistry::standard`],
//! a TOML table, or both) and is read-only afterwards:
//!
//! ```toml
//! [prefixes]
//! t = "https://triply.cc/"
//! country = "https://example.org/country/"
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{ModelError, Result};
use crate::term::NamedNode;
use crate::vocab::{owl, rdf, rdfs, sh, skos, xsd};

/// A base IRI that produces named nodes for local names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    base: Arc<str>,
}

impl Namespace {
    pub fn new(base: impl AsRef<str>) -> Self {
        Self {
            base: Arc::from(base.as_ref()),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `base + local`, verbatim.
    pub fn iri(&self, local: &str) -> NamedNode {
        let mut iri = String::with_capacity(self.base.len() + local.len());
        iri.push_str(&self.base);
        iri.push_str(local);
        NamedNode::new(iri)
    }
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    prefixes: BTreeMap<String, String>,
}

/// Alias to namespace lookup table.
#[derive(Debug, Clone, Default)]
pub struct NamespaceRegistry {
    bindings: BTreeMap<String, Namespace>,
}

impl NamespaceRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the W3C prefixes `rdf`, `rdfs`, `xsd`, `owl`, `skos`
    /// and `sh`.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (alias, base) in [
            ("rdf", rdf::NAMESPACE),
            ("rdfs", rdfs::NAMESPACE),
            ("xsd", xsd::NAMESPACE),
            ("owl", owl::NAMESPACE),
            ("skos", skos::NAMESPACE),
            ("sh", sh::NAMESPACE),
        ] {
            registry.insert(alias, Namespace::new(base));
        }
        registry
    }

    /// Parse a `[prefixes]` table.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RegistryFile = toml::from_str(content)?;
        let bindings = file
            .prefixes
            .into_iter()
            .map(|(alias, base)| (alias, Namespace::new(base)))
            .collect();
        Ok(Self { bindings })
    }

    /// Bind `alias`, replacing any previous binding.
    pub fn insert(&mut self, alias: impl Into<String>, namespace: Namespace) {
        self.bindings.insert(alias.into(), namespace);
    }

    /// Overlay `other` on top of `self`; aliases in `other` win.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.bindings.extend(other.bindings);
        self
    }

    pub fn get(&self, alias: &str) -> Option<&Namespace> {
        self.bindings.get(alias)
    }

    /// Like [`get`](Self::get), but an unknown alias is an error.
    pub fn resolve(&self, alias: &str) -> Result<&Namespace> {
        self.get(alias)
            .ok_or_else(|| ModelError::UnknownPrefix(alias.to_string()))
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
