//! `minimum`, `maximum`, `exclusiveMinimum`, `exclusiveMaximum`.
//!
//! Drafts 3 and 4 spell exclusivity as a boolean flag modifying
//! `minimum`/`maximum`; drafts 6 and 7 make the exclusive bounds standalone
//! numbers. Both forms compile to the same validators.

use jschema_ast::schema::{ExclusiveBound, Schema};
use serde_json::{Number, Value};

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::keywords::helpers;
use crate::node::{BoxedValidator, Validate};

pub(crate) struct MinimumValidator {
    limit: Number,
}

impl Validate for MinimumValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        match instance {
            Value::Number(n) => helpers::num_ge(n, &self.limit),
            _ => true,
        }
    }
}

pub(crate) struct MaximumValidator {
    limit: Number,
}

impl Validate for MaximumValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        match instance {
            Value::Number(n) => helpers::num_le(n, &self.limit),
            _ => true,
        }
    }
}

pub(crate) struct ExclusiveMinimumValidator {
    limit: Number,
}

impl Validate for ExclusiveMinimumValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        match instance {
            Value::Number(n) => helpers::num_gt(n, &self.limit),
            _ => true,
        }
    }
}

pub(crate) struct ExclusiveMaximumValidator {
    limit: Number,
}

impl Validate for ExclusiveMaximumValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        match instance {
            Value::Number(n) => helpers::num_lt(n, &self.limit),
            _ => true,
        }
    }
}

fn exclusive_flag(bound: &Option<ExclusiveBound>) -> bool {
    matches!(bound, Some(ExclusiveBound::Flag(true)))
}

pub(crate) fn compile<'s>(
    _ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    if let Some(limit) = &schema.minimum {
        let limit = limit.clone();
        if exclusive_flag(&schema.exclusive_minimum) {
            validators.push(Box::new(ExclusiveMinimumValidator { limit }));
        } else {
            validators.push(Box::new(MinimumValidator { limit }));
        }
    }
    if let Some(limit) = &schema.maximum {
        let limit = limit.clone();
        if exclusive_flag(&schema.exclusive_maximum) {
            validators.push(Box::new(ExclusiveMaximumValidator { limit }));
        } else {
            validators.push(Box::new(MaximumValidator { limit }));
        }
    }
    if let Some(ExclusiveBound::Limit(limit)) = &schema.exclusive_minimum {
        validators.push(Box::new(ExclusiveMinimumValidator {
            limit: limit.clone(),
        }));
    }
    if let Some(ExclusiveBound::Limit(limit)) = &schema.exclusive_maximum {
        validators.push(Box::new(ExclusiveMaximumValidator {
            limit: limit.clone(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"minimum": 0}), &json!(0), true)]
    #[test_case(&json!({"minimum": 0}), &json!(-1), false)]
    #[test_case(&json!({"minimum": 0}), &json!(0.5), true)]
    #[test_case(&json!({"minimum": 0.5}), &json!(0), false)]
    #[test_case(&json!({"minimum": 0}), &json!("-1"), true ; "non numbers pass")]
    #[test_case(&json!({"maximum": 10}), &json!(10), true)]
    #[test_case(&json!({"maximum": 10}), &json!(10.5), false)]
    #[test_case(&json!({"maximum": 10}), &json!([99]), true ; "arrays pass")]
    #[test_case(&json!({"exclusiveMinimum": 3}), &json!(3), false ; "draft7 numeric form")]
    #[test_case(&json!({"exclusiveMinimum": 3}), &json!(3.1), true)]
    #[test_case(&json!({"exclusiveMaximum": 3}), &json!(3), false)]
    #[test_case(&json!({"exclusiveMaximum": 3}), &json!(2.9), true)]
    #[test_case(&json!({"minimum": -9.5, "maximum": -2}), &json!(-3), true)]
    #[test_case(&json!({"maximum": 18446744073709551615u64}), &json!(18446744073709551615u64), true ; "u64 max bound")]
    fn verdicts(schema: &Value, instance: &Value, expected: bool) {
        if expected {
            tests_util::is_valid(schema, instance);
        } else {
            tests_util::is_not_valid(schema, instance);
        }
    }

    // Draft 4 spells exclusivity as a boolean next to the bound.
    #[test_case(&json!({"minimum": 3, "exclusiveMinimum": true}), &json!(3), false)]
    #[test_case(&json!({"minimum": 3, "exclusiveMinimum": true}), &json!(4), true)]
    #[test_case(&json!({"minimum": 3, "exclusiveMinimum": false}), &json!(3), true)]
    #[test_case(&json!({"maximum": 3, "exclusiveMaximum": true}), &json!(3), false)]
    #[test_case(&json!({"maximum": 3, "exclusiveMaximum": true}), &json!(2), true)]
    fn draft4_flag_form(schema: &Value, instance: &Value, expected: bool) {
        let schema = {
            let mut with_draft = schema.as_object().unwrap().clone();
            with_draft.insert(
                "$schema".to_owned(),
                json!("http://json-schema.org/draft-04/schema#"),
            );
            Value::Object(with_draft)
        };
        if expected {
            tests_util::is_valid(&schema, instance);
        } else {
            tests_util::is_not_valid(&schema, instance);
        }
    }

    // Bounds wider than u64 must compare exactly, not through f64.
    #[cfg(feature = "arbitrary-precision")]
    mod arbitrary_precision {
        use crate::tests_util;
        use serde_json::Value;
        use test_case::test_case;

        fn parse(text: &str) -> Value {
            serde_json::from_str(text).unwrap()
        }

        #[test_case(r#"{"minimum": 99999999999999999999999}"#, "99999999999999999999999", true ; "huge minimum met exactly")]
        #[test_case(r#"{"minimum": 99999999999999999999999}"#, "99999999999999999999998", false ; "one below huge minimum")]
        #[test_case(r#"{"minimum": 99999999999999999999998}"#, "99999999999999999999999", true ; "one above huge minimum")]
        #[test_case(r#"{"maximum": 99999999999999999999998}"#, "99999999999999999999999", false ; "one above huge maximum")]
        #[test_case(r#"{"maximum": 99999999999999999999999}"#, "99999999999999999999998", true ; "one below huge maximum")]
        #[test_case(r#"{"exclusiveMinimum": 99999999999999999999999}"#, "99999999999999999999999", false ; "exclusive huge minimum met exactly")]
        #[test_case(r#"{"exclusiveMinimum": 99999999999999999999998}"#, "99999999999999999999999", true ; "exclusive huge minimum exceeded")]
        #[test_case(r#"{"exclusiveMaximum": 99999999999999999999999}"#, "99999999999999999999999", false ; "exclusive huge maximum met exactly")]
        #[test_case(r#"{"exclusiveMaximum": 99999999999999999999999}"#, "99999999999999999999998", true ; "exclusive huge maximum respected")]
        #[test_case(r#"{"minimum": 0.5}"#, "99999999999999999999999", true ; "huge instance against float minimum")]
        #[test_case(r#"{"maximum": 0.5}"#, "99999999999999999999999", false ; "huge instance against float maximum")]
        #[test_case(r#"{"minimum": 99999999999999999999999}"#, "-99999999999999999999999", false ; "negative huge below huge minimum")]
        #[test_case(r#"{"minimum": 18446744073709551615}"#, "18446744073709551616", true ; "one past u64 max meets u64 minimum")]
        fn huge_integer_bounds(schema_json: &str, instance_json: &str, expected: bool) {
            let schema = parse(schema_json);
            let instance = parse(instance_json);
            if expected {
                tests_util::is_valid(&schema, &instance);
            } else {
                tests_util::is_not_valid(&schema, &instance);
            }
        }
    }
}
