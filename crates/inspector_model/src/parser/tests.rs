//! Parser and resolver unit tests.
//!
//! These cover the accepted file shapes, `$ref` resolution (local, cross-domain, cross-file), and the error
//! reported for each kind of malformed schema.

use super::*;
use crate::model::TypeKind;

const DATABASE: &str = r#"{
    "domain": "Database",
    "types": [
        { "id": "DatabaseId", "type": "string" },
        {
            "id": "Database",
            "type": "object",
            "properties": [
                { "name": "id", "$ref": "DatabaseId" },
                { "name": "domain", "type": "string" },
                { "name": "version", "type": "string", "optional": true }
            ]
        },
        { "id": "PrimaryColors", "type": "string", "enum": ["red", "green", "blue"] }
    ],
    "commands": [
        { "name": "enable" },
        {
            "name": "getDatabaseTableNames",
            "parameters": [ { "name": "databaseId", "$ref": "DatabaseId" } ],
            "returns": [ { "name": "tableNames", "type": "array", "items": { "type": "string" } } ]
        }
    ],
    "events": [
        { "name": "didAddDatabase", "parameters": [ { "name": "database", "$ref": "Database" } ] },
        {
            "name": "didChangeColor",
            "parameters": [
                { "name": "color", "$ref": "PrimaryColors" },
                { "name": "reason", "type": "string", "enum": ["user", "script"], "optional": true }
            ]
        }
    ]
}"#;

fn parse(source: &str) -> Result<Protocol, ModelError> {
    parse_protocol(source, "Database.json", Framework::Test)
}

#[test]
fn test_parse_single_domain_object() {
    let protocol = parse(DATABASE).unwrap();
    assert_eq!(protocol.framework(), Framework::Test);
    assert_eq!(protocol.domains().len(), 1);

    let domain = protocol.domain("Database").unwrap();
    assert!(!domain.is_supplemental);
    assert_eq!(domain.type_declarations.len(), 3);
    assert_eq!(domain.commands.len(), 2);
    assert_eq!(domain.events.len(), 2);
    assert_eq!(domain.commands[1].returns[0].name, "tableNames");
}

#[test]
fn test_declarations_resolve_to_alias_object_and_enum() {
    let protocol = parse(DATABASE).unwrap();

    let id = protocol.declaration(&QualifiedName::new("Database", "DatabaseId")).unwrap();
    assert_eq!(
        id.ty,
        Type::Alias {
            name: QualifiedName::new("Database", "DatabaseId"),
            aliased: Box::new(Type::Primitive(PrimitiveId::String)),
        }
    );

    let database = protocol.declaration(&QualifiedName::new("Database", "Database")).unwrap();
    assert_eq!(database.ty, Type::Object(QualifiedName::new("Database", "Database")));
    let member_names: Vec<&str> = database.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(member_names, ["id", "domain", "version"]);
    assert!(database.members[2].is_optional);

    let colors = protocol.declaration(&QualifiedName::new("Database", "PrimaryColors")).unwrap();
    assert!(matches!(&colors.ty, Type::Enum { name: Some(_), values, .. } if values.len() == 3));
}

#[test]
fn test_event_parameters_keep_order_and_optionality() {
    let protocol = parse(DATABASE).unwrap();
    let event = &protocol.domain("Database").unwrap().events[1];

    assert_eq!(event.parameters[0].name, "color");
    assert!(!event.parameters[0].is_optional);
    assert_eq!(event.parameters[1].name, "reason");
    assert!(event.parameters[1].is_optional);
    assert!(event.parameters[1].ty.is_anonymous_enum());
}

#[test]
fn test_domains_wrapper_and_bare_list_are_accepted() {
    let wrapped = r#"{"domains": [{"domain": "A"}, {"domain": "B"}]}"#;
    let listed = r#"[{"domain": "A"}, {"domain": "B"}]"#;

    for source in [wrapped, listed] {
        let protocol = parse(source).unwrap();
        let names: Vec<&str> = protocol.domains().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }
}

#[test]
fn test_cross_domain_reference() {
    let source = r#"[
        { "domain": "Runtime", "types": [ { "id": "RemoteObject", "type": "object" } ] },
        {
            "domain": "Console",
            "events": [
                { "name": "messageAdded", "parameters": [ { "name": "value", "$ref": "Runtime.RemoteObject" } ] }
            ]
        }
    ]"#;
    let protocol = parse(source).unwrap();
    let param = &protocol.domain("Console").unwrap().events[0].parameters[0];
    assert_eq!(param.ty, Type::Object(QualifiedName::new("Runtime", "RemoteObject")));
}

#[test]
fn test_self_referential_object_is_allowed() {
    let source = r#"{
        "domain": "DOM",
        "types": [
            {
                "id": "Node",
                "type": "object",
                "properties": [ { "name": "children", "type": "array", "items": { "$ref": "Node" }, "optional": true } ]
            }
        ]
    }"#;
    let protocol = parse(source).unwrap();
    let node = protocol.declaration(&QualifiedName::new("DOM", "Node")).unwrap();
    assert_eq!(
        node.members[0].ty,
        Type::Array(Box::new(Type::Object(QualifiedName::new("DOM", "Node"))))
    );
}

#[test]
fn test_supplemental_file_provides_types() {
    let mut builder = ProtocolBuilder::new(Framework::Test);
    builder
        .add_specification(
            r#"{"domain": "Page", "events": [{"name": "loaded", "parameters": [{"name": "frame", "$ref": "Frame.FrameId"}]}]}"#,
            "Page.json",
            false,
        )
        .unwrap();
    builder
        .add_specification(
            r#"{"domain": "Frame", "types": [{"id": "FrameId", "type": "string"}]}"#,
            "Frame.json",
            true,
        )
        .unwrap();
    let protocol = builder.build().unwrap();

    assert!(!protocol.domain("Page").unwrap().is_supplemental);
    assert!(protocol.domain("Frame").unwrap().is_supplemental);
    let param = &protocol.domain("Page").unwrap().events[0].parameters[0];
    assert_eq!(param.ty.kind(), TypeKind::Primitive(PrimitiveId::String));
}

#[test]
fn test_unknown_reference_is_reported() {
    let source = r#"{"domain": "A", "events": [{"name": "e", "parameters": [{"name": "p", "$ref": "Missing"}]}]}"#;
    let err = parse(source).unwrap_err();
    match err {
        ModelError::UnknownReference { domain, owner, reference } => {
            assert_eq!(domain, "A");
            assert_eq!(owner, "event `e` parameter `p`");
            assert_eq!(reference, "Missing");
        }
        other => panic!("expected UnknownReference, got {other:?}"),
    }
}

#[test]
fn test_unknown_primitive_is_reported() {
    let source = r#"{"domain": "A", "events": [{"name": "e", "parameters": [{"name": "p", "type": "long"}]}]}"#;
    assert!(matches!(parse(source), Err(ModelError::UnknownPrimitive { kind, .. }) if kind == "long"));
}

#[test]
fn test_cyclic_alias_is_reported() {
    let source = r#"{
        "domain": "A",
        "types": [
            { "id": "Left", "type": "array", "items": { "$ref": "Right" } },
            { "id": "Right", "type": "array", "items": { "$ref": "Left" } }
        ]
    }"#;
    assert!(matches!(parse(source), Err(ModelError::CyclicAlias { .. })));
}

#[test]
fn test_array_without_items_is_reported() {
    let source = r#"{"domain": "A", "events": [{"name": "e", "parameters": [{"name": "p", "type": "array"}]}]}"#;
    assert!(matches!(parse(source), Err(ModelError::MissingItems { .. })));
}

#[test]
fn test_enum_rules() {
    let empty = r#"{"domain": "A", "types": [{"id": "E", "type": "string", "enum": []}]}"#;
    assert!(matches!(parse(empty), Err(ModelError::EmptyEnum { .. })));

    let numeric = r#"{"domain": "A", "types": [{"id": "E", "type": "integer", "enum": ["1"]}]}"#;
    assert!(matches!(parse(numeric), Err(ModelError::NonStringEnum { .. })));
}

#[test]
fn test_duplicates_are_reported() {
    let domains = r#"[{"domain": "A"}, {"domain": "A"}]"#;
    assert!(matches!(parse(domains), Err(ModelError::DuplicateDomain { domain }) if domain == "A"));

    let events = r#"{"domain": "A", "events": [{"name": "e"}, {"name": "e"}]}"#;
    assert!(matches!(parse(events), Err(ModelError::DuplicateEvent { .. })));

    let params = r#"{"domain": "A", "events": [{"name": "e", "parameters": [
        {"name": "p", "type": "string"}, {"name": "p", "type": "integer"}
    ]}]}"#;
    assert!(matches!(parse(params), Err(ModelError::DuplicateParameter { parameter, .. }) if parameter == "p"));

    let types = r#"{"domain": "A", "types": [{"id": "T", "type": "string"}, {"id": "T", "type": "string"}]}"#;
    assert!(matches!(parse(types), Err(ModelError::DuplicateType { name }) if name == "A.T"));
}

#[test]
fn test_parameter_without_type_is_reported() {
    let source = r#"{"domain": "A", "events": [{"name": "e", "parameters": [{"name": "p"}]}]}"#;
    assert!(matches!(parse(source), Err(ModelError::MissingType { .. })));
}

#[test]
fn test_json_syntax_error_carries_location() {
    let source = "{\n  \"domain\": \"A\",\n  \"events\": [,]\n}";
    match parse(source) {
        Err(ModelError::Json { file_name, span, .. }) => {
            assert_eq!(file_name, "Database.json");
            assert_eq!(&source[span.offset()..span.offset() + 1], ",");
        }
        other => panic!("expected Json error, got {other:?}"),
    }
}

#[test]
fn test_wrong_shape_is_reported() {
    assert!(matches!(parse(r#"{"name": "A"}"#), Err(ModelError::Shape { .. })));
    assert!(matches!(parse("42"), Err(ModelError::Shape { .. })));
}

#[test]
fn test_error_messages() {
    let source = r#"{"domain": "A", "events": [{"name": "e", "parameters": [{"name": "p", "$ref": "B.Missing"}]}]}"#;
    let err = parse(source).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"A: event `e` parameter `p` refers to unknown type `B.Missing`");
}
