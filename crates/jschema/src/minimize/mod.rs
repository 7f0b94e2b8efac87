//! Schema minimization: depth-first traversal plus fixed-point rule
//! application.
//!
//! Children are rewritten first through the standard rebuild traversal,
//! then the rule battery runs at the node until a full pass changes
//! nothing. Every accepted rewrite restarts the pass from the first rule.

mod rules;

use jschema_ast::equality::deep_equal;
use jschema_ast::schema::Schema;
use jschema_ast::visitor::{walk_schema, SchemaVisitor};
use std::borrow::Cow;

use rules::RULES;

/// Produce a structurally smaller schema accepting the same documents.
/// The input is never mutated.
pub fn minimize(schema: &Schema) -> Schema {
    Minimizer.visit_schema(schema)
}

struct Minimizer;

impl SchemaVisitor for Minimizer {
    fn visit_schema(&mut self, schema: &Schema) -> Schema {
        let rebuilt = walk_schema(self, schema);
        reduce_fixed_point(rebuilt)
    }
}

fn reduce_fixed_point(mut schema: Schema) -> Schema {
    'pass: loop {
        for rule in RULES {
            let reduced = rule.reduce(&schema);
            // Same object back: the rule did not apply, skip the deep
            // comparison.
            let Cow::Owned(candidate) = reduced else {
                continue;
            };
            if deep_equal(&candidate.to_value(), &schema.to_value()) {
                continue;
            }
            tracing::debug!(rule = rule.name(), "reduction applied");
            schema = candidate;
            continue 'pass;
        }
        break;
    }
    schema
}

#[cfg(test)]
mod tests {
    use super::minimize;
    use jschema_ast::equality::deep_equal;
    use jschema_ast::schema::Schema;
    use serde_json::{json, Value};
    use test_case::test_case;

    fn schema(document: &Value) -> Schema {
        Schema::from_value(document).unwrap()
    }

    fn assert_minimizes(input: Value, expected: Value) {
        let minimized = minimize(&schema(&input)).to_value();
        assert!(deep_equal(&minimized, &expected), "{minimized} != {expected}");
    }

    #[test]
    fn drops_duplicate_all_of_members() {
        assert_minimizes(
            json!({"title": "T", "allOf": [{"const": "F"}, {"const": "B"}, {"const": "F"}]}),
            json!({"title": "T", "allOf": [{"const": "F"}, {"const": "B"}]}),
        );
    }

    #[test]
    fn drops_enum_pinned_by_const() {
        assert_minimizes(
            json!({"title": "T", "const": "BOB", "enum": ["A", "BOB"]}),
            json!({"title": "T", "const": "BOB"}),
        );
    }

    #[test]
    fn flattens_nested_all_of() {
        assert_minimizes(
            json!({"title": "T", "allOf": [{"allOf": [
                {"title": "C", "const": "F"},
                {"title": "D", "const": "B"}
            ]}]}),
            json!({"title": "T", "allOf": [
                {"title": "C", "const": "F"},
                {"title": "D", "const": "B"}
            ]}),
        );
    }

    #[test]
    fn clears_one_of_allowing_everything() {
        assert_minimizes(
            json!({"title": "T", "oneOf": [{}, {"title": "F"}]}),
            json!({"title": "T"}),
        );
    }

    #[test]
    fn rewrites_nested_schemas_depth_first() {
        assert_minimizes(
            json!({"properties": {"p": {"allOf": [{}, {"const": 1}, {"const": 1}]}}}),
            json!({"properties": {"p": {"allOf": [{"const": 1}]}}}),
        );
    }

    #[test]
    fn rules_cascade_to_a_fixed_point() {
        // Flattening exposes duplicates and empty members, which later
        // rules then remove.
        assert_minimizes(
            json!({"allOf": [
                {"allOf": [{"const": "F"}, {}]},
                {"allOf": [{"const": "F"}]}
            ]}),
            json!({"allOf": [{"const": "F"}]}),
        );
    }

    #[test]
    fn lifts_one_of_from_lone_all_of_child() {
        assert_minimizes(
            json!({"title": "T", "allOf": [{"oneOf": [{"const": 1}, {"const": 2}]}]}),
            json!({"title": "T", "oneOf": [{"const": 1}, {"const": 2}]}),
        );
    }

    #[test_case(json!({}))]
    #[test_case(json!({"title": "T", "allOf": [{"const": "F"}, {"const": "B"}, {"const": "F"}]}))]
    #[test_case(json!({"const": "BOB", "enum": ["A", "BOB"]}))]
    #[test_case(json!({"oneOf": [{}, {"title": "F"}]}))]
    #[test_case(json!({"allOf": [{"allOf": [{"allOf": [{"const": 1}]}]}]}))]
    #[test_case(json!({"type": "integer", "allOf": [{"type": "integer"}, {"minimum": 0}]}))]
    #[test_case(json!({"properties": {"p": {"anyOf": [true, true]}}}))]
    fn minimization_is_idempotent(document: Value) {
        let once = minimize(&schema(&document));
        let twice = minimize(&once);
        assert!(
            deep_equal(&once.to_value(), &twice.to_value()),
            "{} != {}",
            once.to_value(),
            twice.to_value()
        );
    }

    #[test_case(
        json!({"allOf": [{"minimum": 0}, {"minimum": 0}, {"maximum": 10}]}),
        &[json!(-1), json!(0), json!(5), json!(10), json!(11), json!("x")]
    )]
    #[test_case(
        json!({"const": 2, "enum": [1, 2, 2]}),
        &[json!(1), json!(2), json!(3), json!(null)]
    )]
    #[test_case(
        json!({"allOf": [{"allOf": [{"type": "integer"}, {"minimum": 0}]}]}),
        &[json!(-1), json!(0), json!(3), json!(2.5), json!("3")]
    )]
    #[test_case(
        json!({"type": "integer", "allOf": [{"type": "integer"}, {"multipleOf": 3}]}),
        &[json!(3), json!(4), json!(3.0), json!("3")]
    )]
    #[test_case(
        json!({"oneOf": [{}, {"const": 99}]}),
        &[json!(1), json!("x"), json!(null)]
    )]
    fn minimization_preserves_verdicts(document: Value, instances: &[Value]) {
        let original = schema(&document);
        let minimized = minimize(&original);
        let before = crate::validator_for(&original).unwrap();
        let after = crate::validator_for(&minimized).unwrap();
        for instance in instances {
            assert_eq!(
                before.is_valid(instance),
                after.is_valid(instance),
                "verdict changed for {instance} after minimizing {document}"
            );
        }
    }

    #[test]
    fn input_schema_is_untouched() {
        let original = schema(&json!({"allOf": [{}, {"const": 1}]}));
        let serialized = original.to_value();
        let _ = minimize(&original);
        assert!(deep_equal(&original.to_value(), &serialized));
    }
}
