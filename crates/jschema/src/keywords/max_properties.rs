//! The `maxProperties` keyword.

use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, Validate};

pub(crate) struct MaxPropertiesValidator {
    limit: u64,
}

impl Validate for MaxPropertiesValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        match instance {
            Value::Object(object) => object.len() as u64 <= self.limit,
            _ => true,
        }
    }
}

pub(crate) fn compile<'s>(
    _ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    if let Some(limit) = schema.max_properties {
        validators.push(Box::new(MaxPropertiesValidator { limit }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"maxProperties": 1}), &json!({"a": 1}), true)]
    #[test_case(&json!({"maxProperties": 1}), &json!({"a": 1, "b": 2}), false)]
    #[test_case(&json!({"maxProperties": 0}), &json!({}), true)]
    #[test_case(&json!({"maxProperties": 0}), &json!([1, 2]), true ; "non objects pass")]
    fn verdicts(schema: &Value, instance: &Value, expected: bool) {
        if expected {
            tests_util::is_valid(schema, instance);
        } else {
            tests_util::is_not_valid(schema, instance);
        }
    }
}
