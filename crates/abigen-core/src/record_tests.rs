use indoc::indoc;

use crate::{
    Category, RecordError, TypeMetadata, TypeRecord, ensure_well_formed, parse_type_records,
};

#[test]
fn record_exposes_metadata() {
    let record = TypeRecord::new("Sample.Space", "Map`2", 2, Category::Interface);

    assert_eq!(record.namespace(), "Sample.Space");
    assert_eq!(record.name(), "Map`2");
    assert_eq!(record.generic_param_count(), 2);
    assert_eq!(record.category(), Category::Interface);
    assert!(record.is_generic());
}

#[test]
fn metadata_through_reference() {
    let record = TypeRecord::new("A", "B", 0, Category::Struct);
    let view: &dyn TypeMetadata = &record;

    assert_eq!(TypeRecord::from_metadata(&view), record);
    assert!(!view.is_generic());
}

#[test]
fn parse_list() {
    let json = indoc! {r#"
        [
            { "namespace": "Sample.Space", "name": "Widget", "category": "class" },
            { "namespace": "Sample.Space", "name": "Map`2", "genericArity": 2, "category": "interface" },
            { "namespace": "Sample", "name": "Handler", "generic_arity": 0, "category": "delegate" }
        ]
    "#};

    let records = parse_type_records(json).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0],
        TypeRecord::new("Sample.Space", "Widget", 0, Category::Class)
    );
    assert_eq!(records[1].generic_arity, 2);
    assert_eq!(records[2].category, Category::Delegate);
}

#[test]
fn parse_rejects_unknown_category() {
    let json = r#"[{ "namespace": "A", "name": "B", "category": "record" }]"#;

    let err = parse_type_records(json).unwrap_err();

    assert!(matches!(err, RecordError::Json(_)));
}

#[test]
fn parse_reports_index_of_invalid_record() {
    let json = indoc! {r#"
        [
            { "namespace": "A", "name": "B", "category": "class" },
            { "namespace": "", "name": "C", "category": "struct" }
        ]
    "#};

    let err = parse_type_records(json).unwrap_err();

    assert_eq!(err.to_string(), "record 1: type `C` has an empty namespace");
}

#[test]
fn validate_empty_name() {
    let record = TypeRecord::new("A.B", "", 0, Category::Enum);

    let err = record.validate().unwrap_err();

    assert_eq!(err.to_string(), "type in namespace `A.B` has an empty name");
}

#[test]
fn serialize_uses_snake_case_fields() {
    let record = TypeRecord::new("A", "B", 1, Category::Delegate);

    let json = serde_json::to_string(&record).unwrap();

    assert_eq!(
        json,
        r#"{"namespace":"A","name":"B","generic_arity":1,"category":"delegate"}"#
    );
}

#[test]
fn ensure_well_formed_accepts_valid() {
    ensure_well_formed(&TypeRecord::new("A", "B", 0, Category::Class));
}

#[test]
#[should_panic(expected = "empty namespace")]
fn ensure_well_formed_panics_on_empty_namespace() {
    ensure_well_formed(&TypeRecord::new("", "B", 0, Category::Class));
}
