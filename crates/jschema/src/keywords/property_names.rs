//! The `propertyNames` keyword: every key, viewed as a string value, must
//! match the sub-schema.

use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, SubSchema, Validate};

pub(crate) struct PropertyNamesValidator {
    node: SubSchema,
}

impl Validate for PropertyNamesValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        let Value::Object(object) = instance else {
            return true;
        };
        object
            .keys()
            .all(|key| self.node.is_valid(&Value::String(key.clone())))
    }
}

pub(crate) fn compile<'s>(
    ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    if let Some(names) = &schema.property_names {
        let node = ctx.subschema(names)?;
        validators.push(Box::new(PropertyNamesValidator { node }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"propertyNames": {"maxLength": 2}}), &json!({"ab": 1}), true)]
    #[test_case(&json!({"propertyNames": {"maxLength": 2}}), &json!({"abc": 1}), false)]
    #[test_case(&json!({"propertyNames": {"pattern": "^x"}}), &json!({"x1": 1, "x2": 2}), true)]
    #[test_case(&json!({"propertyNames": {"pattern": "^x"}}), &json!({"x1": 1, "y": 2}), false)]
    #[test_case(&json!({"propertyNames": false}), &json!({}), true ; "no keys to reject")]
    #[test_case(&json!({"propertyNames": false}), &json!({"a": 1}), false)]
    #[test_case(&json!({"propertyNames": {"maxLength": 1}}), &json!(["ab"]), true ; "non objects pass")]
    fn verdicts(schema: &Value, instance: &Value, expected: bool) {
        if expected {
            tests_util::is_valid(schema, instance);
        } else {
            tests_util::is_not_valid(schema, instance);
        }
    }
}
