//! Tests for the term builders and the namespace registry.

use rdfetl_model::builders::{iri_from_alias, iri_from_full, iri_from_namespace, literal_lang};
use rdfetl_model::vocab::xsd;
use rdfetl_model::{IriRef, LiteralTag, NamedNode, NamespaceRegistry, Term, iri, literal};

fn registry() -> NamespaceRegistry {
    let loaded = NamespaceRegistry::from_toml_str(
        r#"
[prefixes]
t = "https://triply.cc/"
country = "https://example.org/country/"
"#,
    )
    .expect("parse prefixes");
    NamespaceRegistry::standard().merge(loaded)
}

#[test]
fn builder_equivalence_for_triply_namespace() {
    let registry = registry();
    let t = registry.resolve("t").expect("t binding").clone();

    let expected = "https://triply.cc/abc";
    assert_eq!(iri_from_full(expected).as_str(), expected);
    assert_eq!(iri_from_namespace(&t, "abc").as_str(), expected);
    assert_eq!(
        iri_from_alias(&registry, "t", "abc").expect("alias").as_str(),
        expected
    );

    let shapes = [
        IriRef::Full(expected),
        IriRef::Namespaced(&t, "abc"),
        IriRef::Aliased("t", "abc"),
    ];
    for shape in shapes {
        assert_eq!(iri(&registry, shape).expect("iri").as_str(), expected);
    }
}

#[test]
fn literal_overloads() {
    let decimal = literal("1.23", NamedNode::new(xsd::DECIMAL));
    assert_eq!(decimal.value(), "1.23");
    assert_eq!(decimal.datatype(), xsd::DECIMAL);

    let english = literal("foo", "en");
    assert_eq!(english.value(), "foo");
    assert_eq!(english.language(), Some("en"));
    assert_eq!(english, literal_lang("foo", "en"));

    let plain = literal("foo", LiteralTag::default());
    assert_eq!(plain.datatype(), xsd::STRING);
    assert_eq!(plain.language(), None);
}

#[test]
fn terms_render_as_ntriples() {
    let registry = registry();
    let nl: Term = iri(&registry, IriRef::Aliased("country", "NL"))
        .expect("country alias")
        .into();
    assert_eq!(nl.to_string(), "<https://example.org/country/NL>");
    assert_eq!(Term::from(literal("foo", "en")).to_string(), "\"foo\"@en");
    assert_eq!(
        Term::from(literal("foo", LiteralTag::Plain)).to_string(),
        "\"foo\""
    );
}
