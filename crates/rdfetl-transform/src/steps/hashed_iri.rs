//! Content-derived identifiers.
//!
//! The identifier for a record is `namespace + sha256_hex(input)` where
//! `input` is the JSON array of the selected fields' hash inputs (see
//! [`FieldValue::to_hash_input`](crate::FieldValue::to_hash_input)), in the
//! order the fields were given. JSON framing keeps `("ab", "c")` and
//! `("a", "bc")` apart. Reordering the fields changes the identity scheme.
//!
//! A named field that is unset or cleared is an error; no placeholder value
//! is ever hashed.

use rdfetl_model::{NamedNode, Namespace};
use tracing::debug;

use crate::error::{Result, TransformError};
use crate::hash::sha256_hex;
use crate::record::Record;
use crate::step::RecordStep;

/// Mint the hashed IRI for `fields` of `record` without storing it.
pub fn mint_hashed_iri(
    namespace: &Namespace,
    record: &Record,
    fields: &[String],
) -> Result<NamedNode> {
    let mut values = Vec::with_capacity(fields.len());
    for field in fields {
        let value = record
            .get(field)
            .and_then(|value| value.to_hash_input())
            .ok_or_else(|| TransformError::missing(field))?;
        values.push(value);
    }
    let input = serde_json::to_string(&values)?;
    Ok(namespace.iri(&sha256_hex(input.as_bytes())))
}

/// Step that stores the minted IRI under `key`.
#[derive(Debug, Clone)]
pub struct HashedIri {
    name: String,
    namespace: Namespace,
    fields: Vec<String>,
    key: String,
}

impl HashedIri {
    pub fn new<I, S>(namespace: Namespace, fields: I, key: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        Self {
            name: format!("hashed_iri({key})"),
            namespace,
            fields: fields.into_iter().map(Into::into).collect(),
            key,
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl RecordStep for HashedIri {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply_to(&self, record: &mut Record) -> Result<()> {
        let iri = mint_hashed_iri(&self.namespace, record, &self.fields)?;
        debug!(key = %self.key, iri = %iri, "minted hashed IRI");
        record.set(self.key.clone(), iri);
        Ok(())
    }
}

/// Step minting a hashed IRI from `fields` into `key`.
pub fn hashed_iri<I, S>(namespace: Namespace, fields: I, key: impl Into<String>) -> HashedIri
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    HashedIri::new(namespace, fields, key)
}

#[cfg(test)]
mod tests {
    use rdfetl_model::{Literal, Term};

    use super::*;
    use crate::record::{FieldValue, RowBinding};

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    fn person() -> Record {
        [("first", "Ada"), ("last", "Lovelace")].into_iter().collect()
    }

    #[test]
    fn iri_is_namespace_plus_hex_digest() {
        let ns = Namespace::new("https://triply.cc/id/");
        let iri = mint_hashed_iri(&ns, &person(), &fields(&["first", "last"])).unwrap();
        let expected = sha256_hex(br#"["Ada","Lovelace"]"#);
        assert_eq!(iri.as_str(), format!("https://triply.cc/id/{expected}"));
        assert_eq!(expected.len(), 64);
    }

    #[test]
    fn concatenation_is_unambiguous() {
        let ns = Namespace::new("https://triply.cc/id/");
        let left: Record = [("a", "ab"), ("b", "c")].into_iter().collect();
        let right: Record = [("a", "a"), ("b", "bc")].into_iter().collect();
        let keys = fields(&["a", "b"]);
        assert_ne!(
            mint_hashed_iri(&ns, &left, &keys).unwrap(),
            mint_hashed_iri(&ns, &right, &keys).unwrap()
        );
    }

    #[test]
    fn field_order_changes_identity() {
        let ns = Namespace::new("https://triply.cc/id/");
        let record = person();
        assert_ne!(
            mint_hashed_iri(&ns, &record, &fields(&["first", "last"])).unwrap(),
            mint_hashed_iri(&ns, &record, &fields(&["last", "first"])).unwrap()
        );
    }

    #[test]
    fn missing_and_cleared_fields_fail() {
        let ns = Namespace::new("https://triply.cc/id/");
        let mut record = person();
        let err = mint_hashed_iri(&ns, &record, &fields(&["first", "middle"])).unwrap_err();
        assert!(matches!(err, TransformError::MissingField { field } if field == "middle"));

        record.clear("last");
        let err = mint_hashed_iri(&ns, &record, &fields(&["first", "last"])).unwrap_err();
        assert!(matches!(err, TransformError::MissingField { field } if field == "last"));
    }

    #[test]
    fn literal_annotation_changes_identity() {
        let ns = Namespace::new("https://triply.cc/id/");
        let keys = fields(&["label"]);
        let mint = |value: FieldValue| {
            let mut record = Record::new();
            record.set("label", value);
            mint_hashed_iri(&ns, &record, &keys).unwrap()
        };
        let en = mint(Literal::new_language_tagged("chat", "en").into());
        let fr = mint(Literal::new_language_tagged("chat", "fr").into());
        let typed = mint(Literal::new_typed("chat", NamedNode::new("http://x/dt")).into());
        let plain = mint(Literal::new_string("chat").into());
        let text = mint("chat".into());
        let all = [&en, &fr, &typed, &plain, &text];
        for (i, left) in all.iter().enumerate() {
            for right in &all[i + 1..] {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn named_node_differs_from_text_with_same_string() {
        let ns = Namespace::new("https://triply.cc/id/");
        let keys = fields(&["country"]);
        let text: Record = [("country", "https://example.org/country/NL")]
            .into_iter()
            .collect();
        let mut mapped = Record::new();
        mapped.set("country", NamedNode::new("https://example.org/country/NL"));
        assert_ne!(
            mint_hashed_iri(&ns, &text, &keys).unwrap(),
            mint_hashed_iri(&ns, &mapped, &keys).unwrap()
        );
    }

    #[test]
    fn list_differs_from_joined_text() {
        let ns = Namespace::new("https://triply.cc/id/");
        let keys = fields(&["tags"]);
        let text: Record = [("tags", "a,b")].into_iter().collect();
        let mut list = Record::new();
        list.set("tags", vec!["a".to_string(), "b".to_string()]);
        assert_ne!(
            mint_hashed_iri(&ns, &text, &keys).unwrap(),
            mint_hashed_iri(&ns, &list, &keys).unwrap()
        );
    }

    #[test]
    fn binding_rows_contribute_typed_terms() {
        let ns = Namespace::new("https://triply.cc/id/");
        let keys = fields(&["people"]);
        let mint = |term: Term| {
            let mut record = Record::new();
            record.set("people", vec![RowBinding::new().with("name", term)]);
            mint_hashed_iri(&ns, &record, &keys).unwrap()
        };
        assert_ne!(
            mint(Literal::new_language_tagged("Ada", "en").into()),
            mint(Literal::new_string("Ada").into())
        );
        assert_ne!(
            mint(NamedNode::new("Ada").into()),
            mint(Literal::new_string("Ada").into())
        );
    }

    #[test]
    fn step_writes_destination_field() {
        let ns = Namespace::new("https://triply.cc/id/");
        let step = hashed_iri(ns.clone(), ["first", "last"], "_id");
        let mut record = person();
        step.apply_to(&mut record).unwrap();
        let minted = record.get("_id").and_then(|value| value.as_term()).unwrap();
        let expected = mint_hashed_iri(&ns, &person(), step.fields()).unwrap();
        assert_eq!(minted.as_named_node(), Some(&expected));
        assert_eq!(RecordStep::name(&step), "hashed_iri(_id)");
    }
}
