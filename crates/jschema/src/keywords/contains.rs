//! The `contains` keyword.

use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, SubSchema, Validate};

pub(crate) struct ContainsValidator {
    node: SubSchema,
}

impl Validate for ContainsValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        match instance {
            Value::Array(items) => items.iter().any(|item| self.node.is_valid(item)),
            _ => true,
        }
    }
}

pub(crate) fn compile<'s>(
    ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    if let Some(contains) = &schema.contains {
        let node = ctx.subschema(contains)?;
        validators.push(Box::new(ContainsValidator { node }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"contains": {"const": 3}}), &json!([1, 2, 3]), true)]
    #[test_case(&json!({"contains": {"const": 3}}), &json!([1, 2]), false)]
    #[test_case(&json!({"contains": {"const": 3}}), &json!([]), false ; "empty array contains nothing")]
    #[test_case(&json!({"contains": {"type": "integer"}}), &json!(["a", 4]), true)]
    #[test_case(&json!({"contains": {"const": 3}}), &json!({"a": 3}), true ; "non arrays pass")]
    fn verdicts(schema: &Value, instance: &Value, expected: bool) {
        if expected {
            tests_util::is_valid(schema, instance);
        } else {
            tests_util::is_not_valid(schema, instance);
        }
    }
}
