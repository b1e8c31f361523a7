//! Tests for TOML index schema loading and body assembly.

use es_schema_rs::SchemaError;
use es_schema_rs::schema::IndexSchema;
use serde_json::json;

const MESSAGES_SCHEMA: &str = r#"
[index]
name = "messages"

[settings]
number_of_shards = 1
number_of_replicas = 0

[mapping]
field_names = false
source = true
fields = [
    ["text", "text", { analyzer = "ik_max_word", search_analyzer = "ik_smart" }],
    ["long", "chat_id"],
    ["date", "date", { format = "epoch_second" }],
    ["keyword", "message_type"],
]
"#;

#[test]
fn test_schema_parses() {
    let schema = IndexSchema::parse(MESSAGES_SCHEMA).unwrap();
    assert_eq!(schema.index.name, "messages");
    assert_eq!(schema.mapping.fields.len(), 4);
}

#[test]
fn test_mapping_is_built_from_field_entries() {
    let schema = IndexSchema::parse(MESSAGES_SCHEMA).unwrap();
    let mapping = schema.build_mapping().unwrap();

    assert_eq!(
        mapping.to_value(),
        json!({
            "_field_names": { "enabled": false },
            "_source": { "enabled": true },
            "properties": {
                "text": {
                    "type": "text",
                    "analyzer": "ik_max_word",
                    "search_analyzer": "ik_smart"
                },
                "chat_id": { "type": "long" },
                "date": { "type": "date", "format": "epoch_second" },
                "message_type": { "type": "keyword" }
            }
        })
    );
}

#[test]
fn test_create_index_body_has_settings_and_mappings() {
    let schema = IndexSchema::parse(MESSAGES_SCHEMA).unwrap();
    let body = schema.create_index_body().unwrap();

    assert_eq!(
        body.pointer("/settings/number_of_shards"),
        Some(&json!(1))
    );
    assert_eq!(
        body.pointer("/settings/number_of_replicas"),
        Some(&json!(0))
    );
    assert_eq!(
        body.pointer("/mappings/properties/text/analyzer"),
        Some(&json!("ik_max_word"))
    );
    assert_eq!(
        body.pointer("/mappings/_source/enabled"),
        Some(&json!(true))
    );
}

#[test]
fn test_bare_schema_renders_empty_body() {
    let schema = IndexSchema::parse("[index]\nname = \"empty\"\n").unwrap();
    assert_eq!(schema.create_index_body().unwrap(), json!({}));
}

#[test]
fn test_camel_case_type_names_are_normalized() {
    let schema = IndexSchema::parse(
        r#"
[index]
name = "places"

[mapping]
fields = [["geoPoint", "location"]]
"#,
    )
    .unwrap();

    assert_eq!(
        schema.build_mapping().unwrap().to_value(),
        json!({ "properties": { "location": { "type": "geo_point" } } })
    );
}

#[test]
fn test_type_option_cannot_override_declared_type() {
    let schema = IndexSchema::parse(
        r#"
[index]
name = "docs"

[mapping]
fields = [["keyword", "id", { type = "text" }]]
"#,
    )
    .unwrap();

    assert_eq!(
        schema.build_mapping().unwrap().to_value(),
        json!({ "properties": { "id": { "type": "keyword" } } })
    );
}

#[test]
fn test_dynamic_mode_passes_through() {
    let schema = IndexSchema::parse(
        r#"
[index]
name = "docs"

[mapping]
dynamic = "strict"
"#,
    )
    .unwrap();

    assert_eq!(
        schema.build_mapping().unwrap().to_value(),
        json!({ "dynamic": "strict" })
    );
}

#[test]
fn test_field_entry_with_too_many_arguments_is_rejected() {
    let schema = IndexSchema::parse(
        r#"
[index]
name = "docs"

[mapping]
fields = [["text", "bar", { boost = 1 }, { store = true }]]
"#,
    )
    .unwrap();

    let err = schema.build_mapping().unwrap_err();
    assert!(matches!(err, SchemaError::InvalidInvocation { .. }));
}

#[test]
fn test_field_entry_without_name_is_rejected() {
    let schema = IndexSchema::parse(
        r#"
[index]
name = "docs"

[mapping]
fields = [["text"]]
"#,
    )
    .unwrap();

    let err = schema.build_mapping().unwrap_err();
    assert!(matches!(err, SchemaError::InvalidInvocation { .. }));
}

#[test]
fn test_empty_field_entry_is_rejected() {
    let schema = IndexSchema::parse(
        r#"
[index]
name = "docs"

[mapping]
fields = [[]]
"#,
    )
    .unwrap();

    let err = schema.build_mapping().unwrap_err();
    assert!(matches!(err, SchemaError::Config(_)));
}

#[test]
fn test_field_entry_with_non_string_head_is_rejected() {
    let schema = IndexSchema::parse(
        r#"
[index]
name = "docs"

[mapping]
fields = [[1, "foo"]]
"#,
    )
    .unwrap();

    let err = schema.build_mapping().unwrap_err();
    assert!(matches!(err, SchemaError::Config(_)));
}

#[test]
fn test_empty_index_name_is_rejected() {
    let err = IndexSchema::parse("[index]\nname = \"\"\n").unwrap_err();
    assert!(matches!(err, SchemaError::Config(_)));
}

#[test]
fn test_malformed_toml_is_rejected() {
    let err = IndexSchema::parse("not a schema :::").unwrap_err();
    assert!(matches!(err, SchemaError::Toml(_)));
}

#[test]
fn test_missing_index_table_is_rejected() {
    let err = IndexSchema::parse("[mapping]\nsource = true\n").unwrap_err();
    assert!(matches!(err, SchemaError::Toml(_)));
}
