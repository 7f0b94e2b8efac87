use jschema::{validator_for, Schema, Validator};
use serde_json::{json, Value};
use test_case::test_case;

fn compile(document: Value) -> Validator {
    let schema = Schema::from_value(&document).expect("schema parses");
    validator_for(&schema).expect("schema compiles")
}

#[test_case(json!({"const": 1}), json!(1), true)]
#[test_case(json!({"const": 1}), json!(2), false)]
#[test_case(json!({"properties": {"p": {"const": 1}}}), json!({"p": 1}), true)]
#[test_case(json!({"properties": {"p": {"const": 1}}}), json!({"p": 2}), false)]
#[test_case(json!({"properties": {"p": {"const": 1}}}), json!({"q": 2}), true ; "missing property is unconstrained")]
#[test_case(json!({"type": "integer", "minimum": 0, "maximum": 10}), json!(5), true)]
#[test_case(json!({"type": "integer", "minimum": 0, "maximum": 10}), json!(11), false)]
#[test_case(json!({"type": "integer", "minimum": 0, "maximum": 10}), json!("5"), false ; "type gate rejects strings")]
#[test_case(json!({"uniqueItems": true}), json!([1, 2, 1]), false)]
#[test_case(json!({"uniqueItems": true}), json!([1, 2, 3]), true)]
fn verdicts(schema: Value, instance: Value, expected: bool) {
    assert_eq!(compile(schema).is_valid(&instance), expected);
}

#[test]
fn keywords_compose_as_a_conjunction() {
    let validator = compile(json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": {"type": "string", "minLength": 1},
            "age": {"type": "integer", "minimum": 0}
        },
        "additionalProperties": false
    }));
    assert!(validator.is_valid(&json!({"name": "ada", "age": 36})));
    assert!(validator.is_valid(&json!({"name": "ada"})));
    assert!(!validator.is_valid(&json!({"age": 36})));
    assert!(!validator.is_valid(&json!({"name": ""})));
    assert!(!validator.is_valid(&json!({"name": "ada", "extra": 1})));
    assert!(!validator.is_valid(&json!({"name": "ada", "age": -1})));
}

#[test]
fn unknown_keywords_are_ignored_by_validation() {
    let validator = compile(json!({"minimum": 1, "x-internal": {"anything": [1, 2]}}));
    assert!(validator.is_valid(&json!(2)));
    assert!(!validator.is_valid(&json!(0)));
}

#[test]
fn self_referential_schema_compiles_and_recurses() {
    let validator = compile(json!({
        "type": "object",
        "required": ["value"],
        "properties": {
            "value": {"type": "integer"},
            "next": {"$ref": "#"}
        },
        "additionalProperties": false
    }));
    assert!(validator.is_valid(&json!({"value": 1})));
    assert!(validator.is_valid(&json!({"value": 1, "next": {"value": 2, "next": {"value": 3}}})));
    assert!(!validator.is_valid(&json!({"value": 1, "next": {"value": "x"}})));
    assert!(!validator.is_valid(&json!({"value": 1, "next": {"next": {"value": 3}}})));
    assert!(!validator.is_valid(&json!({"value": 1, "other": 2})));
}

#[test]
fn mutually_recursive_definitions() {
    let validator = compile(json!({
        "$ref": "#/definitions/a",
        "definitions": {
            "a": {
                "type": "object",
                "properties": {"b": {"$ref": "#/definitions/b"}}
            },
            "b": {
                "type": "object",
                "required": ["a"],
                "properties": {"a": {"$ref": "#/definitions/a"}}
            }
        }
    }));
    assert!(validator.is_valid(&json!({})));
    assert!(validator.is_valid(&json!({"b": {"a": {}}})));
    assert!(validator.is_valid(&json!({"b": {"a": {"b": {"a": {}}}}})));
    assert!(!validator.is_valid(&json!({"b": {}})));
    assert!(!validator.is_valid(&json!("not an object")));
}

#[test]
fn reference_replaces_sibling_keywords() {
    let validator = compile(json!({
        "$ref": "#/definitions/positive",
        "maximum": 5,
        "definitions": {"positive": {"minimum": 0}}
    }));
    // The sibling `maximum` is ignored in drafts up to 7.
    assert!(validator.is_valid(&json!(10)));
    assert!(!validator.is_valid(&json!(-1)));
}

#[test]
fn shared_definition_compiles_once_and_works_everywhere() {
    let validator = compile(json!({
        "properties": {
            "a": {"$ref": "#/definitions/name"},
            "b": {"$ref": "#/definitions/name"}
        },
        "definitions": {"name": {"type": "string", "minLength": 2}}
    }));
    assert!(validator.is_valid(&json!({"a": "ab", "b": "cd"})));
    assert!(!validator.is_valid(&json!({"a": "ab", "b": "c"})));
}

#[test]
fn unresolvable_reference_is_a_construction_error() {
    let schema = Schema::from_value(&json!({"$ref": "#/definitions/missing"})).unwrap();
    assert!(validator_for(&schema).is_err());
}

#[test]
fn circular_reference_chain_is_a_construction_error() {
    let schema = Schema::from_value(&json!({
        "$ref": "#/definitions/a",
        "definitions": {
            "a": {"$ref": "#/definitions/b"},
            "b": {"$ref": "#/definitions/a"}
        }
    }))
    .unwrap();
    assert!(validator_for(&schema).is_err());
}

#[test]
fn boolean_sub_schemas_fold_to_constants() {
    let validator = compile(json!({"allOf": [true, {"not": false}]}));
    assert!(validator.is_valid(&json!(1)));
    let never = compile(json!({"anyOf": [false]}));
    assert!(!never.is_valid(&json!(1)));
}

#[test]
fn draft_changes_integer_semantics() {
    let draft4 = compile(json!({
        "$schema": "http://json-schema.org/draft-04/schema#",
        "items": {"type": "integer"}
    }));
    assert!(!draft4.is_valid(&json!([1.0])));
    assert!(draft4.is_valid(&json!([1])));

    let draft7 = compile(json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "items": {"type": "integer"}
    }));
    assert!(draft7.is_valid(&json!([1.0])));
}

#[test]
fn validator_reuse_is_stateless() {
    let validator = compile(json!({"oneOf": [{"minimum": 0}, {"maximum": 10}]}));
    for _ in 0..3 {
        assert!(!validator.is_valid(&json!(5)));
        assert!(validator.is_valid(&json!(11)));
        assert!(validator.is_valid(&json!(-1)));
    }
}
