//! End-to-end tests: CSV rows through an ordered pipeline of steps.

use std::collections::HashMap;

use rdfetl_model::NamespaceRegistry;
use rdfetl_transform::steps::{hashed_iri, split, string_to_iri};
use rdfetl_transform::{Pipeline, Record, Step, StepContext, TransformError, read_csv_records};
use serde_json::json;

const PEOPLE: &str = "\
name,country,tags
Ada,NL,\"math, poetry ,\"
Grace,US,navy
";

fn registry() -> NamespaceRegistry {
    NamespaceRegistry::from_toml_str(
        r#"
[prefixes]
id = "https://triply.cc/id/"
country = "https://example.org/country/"
"#,
    )
    .expect("parse prefixes")
}

fn pipeline(registry: &NamespaceRegistry) -> Pipeline {
    let country = registry.resolve("country").expect("country prefix");
    let id = registry.resolve("id").expect("id prefix").clone();
    let table = HashMap::from([
        ("NL".to_string(), country.iri("NL")),
        ("US".to_string(), country.iri("US")),
    ]);
    Pipeline::new()
        .with_step(split("tags", None))
        .with_step(string_to_iri("country", table, ["", "unknown"]))
        .with_step(hashed_iri(id, ["name", "country"], "_id"))
}

#[tokio::test]
async fn csv_rows_flow_through_steps() {
    let registry = registry();
    let records = read_csv_records(PEOPLE.as_bytes()).expect("read csv");
    let output = pipeline(&registry)
        .run_batch(records, &StepContext::new())
        .await
        .expect("pipeline succeeds");

    let json = serde_json::to_value(&output).expect("serialize records");
    assert_eq!(
        json,
        json!([
            {
                "_id": { "type": "term", "value": { "termType": "NamedNode", "value":
                    "https://triply.cc/id/db55c742b79f52fa6f53e1f69a9ef975d2f098d755881b14646aced5830ced78" } },
                "country": { "type": "term", "value": { "termType": "NamedNode", "value":
                    "https://example.org/country/NL" } },
                "name": { "type": "text", "value": "Ada" },
                "tags": { "type": "list", "value": ["math", "poetry"] },
            },
            {
                "_id": { "type": "term", "value": { "termType": "NamedNode", "value":
                    "https://triply.cc/id/df65ecf79a9a695834431e8bf30f4f7c6007aaaadcd3a0dc4d1b79f1b6b5edc5" } },
                "country": { "type": "term", "value": { "termType": "NamedNode", "value":
                    "https://example.org/country/US" } },
                "name": { "type": "text", "value": "Grace" },
                "tags": { "type": "list", "value": ["navy"] },
            },
        ])
    );
}

#[tokio::test]
async fn reruns_mint_the_same_identifiers() {
    let registry = registry();
    let pipeline = pipeline(&registry);
    let ctx = StepContext::new();
    let first = pipeline
        .run_batch(read_csv_records(PEOPLE.as_bytes()).unwrap(), &ctx)
        .await
        .unwrap();
    let second = pipeline
        .run_batch(read_csv_records(PEOPLE.as_bytes()).unwrap(), &ctx)
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn failure_names_record_and_step() {
    let registry = registry();
    let csv = "name,country,tags\nAda,NL,a\nZed,XX,b\nNobody,NL,c\n";
    let records = read_csv_records(csv.as_bytes()).unwrap();

    let err = pipeline(&registry)
        .run_batch(records, &StepContext::new())
        .await
        .unwrap_err();

    assert_eq!(err.record, 1);
    assert_eq!(err.step, "string_to_iri(country)");
    assert!(matches!(err.source, TransformError::LookupMiss { ref value, .. } if value == "XX"));
    insta::assert_snapshot!(
        err.to_string(),
        @"record 1: step 'string_to_iri(country)' failed: no IRI mapping for value 'XX' in field 'country'"
    );
}

#[tokio::test]
async fn cleared_field_stops_identifier_minting() {
    let registry = registry();
    let csv = "name,country,tags\nAda,unknown,a\n";
    let records = read_csv_records(csv.as_bytes()).unwrap();

    let err = pipeline(&registry)
        .run_record(0, records.into_iter().next().unwrap(), &StepContext::new())
        .await
        .unwrap_err();

    assert_eq!(err.step, "hashed_iri(_id)");
    assert!(matches!(err.source, TransformError::MissingField { ref field } if field == "country"));
}

#[test]
fn step_names_keep_insertion_order() {
    let registry = registry();
    let names: Vec<_> = pipeline(&registry).step_names().map(str::to_string).collect();
    assert_eq!(
        names,
        ["split(tags)", "string_to_iri(country)", "hashed_iri(_id)"]
    );
}

#[tokio::test]
async fn grouped_steps_run_in_place() {
    let registry = registry();
    let country = registry.resolve("country").expect("country prefix");
    let table = HashMap::from([("NL".to_string(), country.iri("NL"))]);
    let group: Vec<Box<dyn Step>> = vec![
        Box::new(split("tags", None)),
        Box::new(string_to_iri("country", table, [""])),
    ];

    let mut grouped = Pipeline::new();
    grouped.extend_steps(group);
    grouped.add_step(hashed_iri(
        registry.resolve("id").expect("id prefix").clone(),
        ["name", "country"],
        "_id",
    ));
    assert_eq!(grouped.len(), 3);

    let record: Record = [("name", "Ada"), ("country", "NL"), ("tags", "math, poetry ,")]
        .into_iter()
        .collect();
    let output = grouped
        .run_record(0, record, &StepContext::new())
        .await
        .expect("grouped pipeline succeeds");
    let expected = pipeline(&registry)
        .run_record(
            0,
            read_csv_records(PEOPLE.as_bytes()).unwrap().remove(0),
            &StepContext::new(),
        )
        .await
        .unwrap();
    assert_eq!(output, expected);
}
