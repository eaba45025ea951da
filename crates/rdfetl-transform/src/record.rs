//! Records and their field values.
//!
//! A [`Record`] is the per-row field map that flows through a pipeline.
//! Steps may read and overwrite its fields but never keep a reference past
//! the call.

use std::collections::BTreeMap;

use rdfetl_model::{Literal, NamedNode, Term};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{Result, TransformError};

/// One solution row of a SELECT query: variable name to bound term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowBinding(BTreeMap<String, Term>);

impl RowBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, variable: impl Into<String>, term: impl Into<Term>) -> Self {
        self.insert(variable, term);
        self
    }

    pub fn insert(&mut self, variable: impl Into<String>, term: impl Into<Term>) {
        self.0.insert(variable.into(), term.into());
    }

    pub fn get(&self, variable: &str) -> Option<&Term> {
        self.0.get(variable)
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.0.iter().map(|(variable, term)| (variable.as_str(), term))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, T: Into<Term>> FromIterator<(K, T)> for RowBinding {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(variable, term)| (variable.into(), term.into()))
                .collect(),
        )
    }
}

/// Value held by a record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Term(Term),
    Bindings(Vec<RowBinding>),
    /// Explicitly cleared; distinct from a field that was never set.
    Absent,
}

impl FieldValue {
    /// Short name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Term(_) => "term",
            Self::Bindings(_) => "bindings",
            Self::Absent => "absent",
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Self::Term(term) => Some(term),
            _ => None,
        }
    }

    pub fn as_bindings(&self) -> Option<&[RowBinding]> {
        match self {
            Self::Bindings(rows) => Some(rows),
            _ => None,
        }
    }

    /// JSON form used when minting hashed identifiers.
    ///
    /// Text stays a JSON string and lists stay arrays of strings. Terms
    /// become objects carrying the IRI, or the lexical form together with
    /// the datatype and language tag, so no two distinct values share an
    /// input. Binding rows become objects of such terms. `None` for
    /// [`FieldValue::Absent`].
    pub fn to_hash_input(&self) -> Option<serde_json::Value> {
        use serde_json::Value;

        match self {
            Self::Text(text) => Some(Value::String(text.clone())),
            Self::List(items) => Some(Value::Array(
                items.iter().cloned().map(Value::String).collect(),
            )),
            Self::Term(term) => Some(term_hash_input(term)),
            Self::Bindings(rows) => Some(Value::Array(
                rows.iter()
                    .map(|row| {
                        Value::Object(
                            row.iter()
                                .map(|(variable, term)| {
                                    (variable.to_string(), term_hash_input(term))
                                })
                                .collect(),
                        )
                    })
                    .collect(),
            )),
            Self::Absent => None,
        }
    }
}

fn term_hash_input(term: &Term) -> serde_json::Value {
    match term {
        Term::NamedNode(node) => json!({ "iri": node.as_str() }),
        Term::Literal(literal) => match literal.language() {
            Some(language) => json!({
                "value": literal.value(),
                "datatype": literal.datatype(),
                "language": language,
            }),
            None => json!({
                "value": literal.value(),
                "datatype": literal.datatype(),
            }),
        },
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Term> for FieldValue {
    fn from(term: Term) -> Self {
        Self::Term(term)
    }
}

impl From<NamedNode> for FieldValue {
    fn from(node: NamedNode) -> Self {
        Self::Term(node.into())
    }
}

impl From<Literal> for FieldValue {
    fn from(literal: Literal) -> Self {
        Self::Term(literal.into())
    }
}

impl From<Vec<RowBinding>> for FieldValue {
    fn from(rows: Vec<RowBinding>) -> Self {
        Self::Bindings(rows)
    }
}

/// Mutable field map for one input row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// The field's value unless it is unset or cleared.
    pub fn get_present(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key).filter(|value| !value.is_absent())
    }

    /// The field's value, or [`TransformError::MissingField`].
    pub fn require(&self, key: &str) -> Result<&FieldValue> {
        self.get_present(key)
            .ok_or_else(|| TransformError::missing(key))
    }

    /// The field's text value; other shapes are an error.
    pub fn require_text(&self, key: &str) -> Result<&str> {
        let value = self.require(key)?;
        value
            .as_text()
            .ok_or_else(|| TransformError::UnexpectedFieldType {
                field: key.to_string(),
                expected: "text",
                found: value.kind_name(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get_present(key).is_some()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Mark the field as explicitly absent.
    pub fn clear(&mut self, key: impl Into<String>) {
        self.fields.insert(key.into(), FieldValue::Absent);
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
