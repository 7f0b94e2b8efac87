//! `if`/`then`/`else`. An unset branch passes; `then`/`else` without `if`
//! impose nothing.

use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, SubSchema, Validate};

pub(crate) struct IfThenValidator {
    condition: SubSchema,
    then_node: SubSchema,
}

impl Validate for IfThenValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        if self.condition.is_valid(instance) {
            self.then_node.is_valid(instance)
        } else {
            true
        }
    }
}

pub(crate) struct IfElseValidator {
    condition: SubSchema,
    else_node: SubSchema,
}

impl Validate for IfElseValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        if self.condition.is_valid(instance) {
            true
        } else {
            self.else_node.is_valid(instance)
        }
    }
}

pub(crate) struct IfThenElseValidator {
    condition: SubSchema,
    then_node: SubSchema,
    else_node: SubSchema,
}

impl Validate for IfThenElseValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        if self.condition.is_valid(instance) {
            self.then_node.is_valid(instance)
        } else {
            self.else_node.is_valid(instance)
        }
    }
}

pub(crate) fn compile<'s>(
    ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    let Some(condition) = &schema.if_schema else {
        return Ok(());
    };
    let condition = ctx.subschema(condition)?;
    match (&schema.then_schema, &schema.else_schema) {
        (Some(then_schema), Some(else_schema)) => {
            validators.push(Box::new(IfThenElseValidator {
                condition,
                then_node: ctx.subschema(then_schema)?,
                else_node: ctx.subschema(else_schema)?,
            }));
        }
        (Some(then_schema), None) => {
            validators.push(Box::new(IfThenValidator {
                condition,
                then_node: ctx.subschema(then_schema)?,
            }));
        }
        (None, Some(else_schema)) => {
            validators.push(Box::new(IfElseValidator {
                condition,
                else_node: ctx.subschema(else_schema)?,
            }));
        }
        (None, None) => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"if": {"minimum": 0}, "then": {"multipleOf": 2}}), &json!(4), true)]
    #[test_case(&json!({"if": {"minimum": 0}, "then": {"multipleOf": 2}}), &json!(3), false)]
    #[test_case(&json!({"if": {"minimum": 0}, "then": {"multipleOf": 2}}), &json!(-3), true ; "condition false then skipped")]
    #[test_case(&json!({"if": {"minimum": 0}, "else": {"multipleOf": 2}}), &json!(3), true ; "condition true else skipped")]
    #[test_case(&json!({"if": {"minimum": 0}, "else": {"multipleOf": 2}}), &json!(-2), true)]
    #[test_case(&json!({"if": {"minimum": 0}, "else": {"multipleOf": 2}}), &json!(-3), false)]
    #[test_case(&json!({"if": {"minimum": 0}, "then": {"multipleOf": 2}, "else": {"multipleOf": 3}}), &json!(4), true)]
    #[test_case(&json!({"if": {"minimum": 0}, "then": {"multipleOf": 2}, "else": {"multipleOf": 3}}), &json!(-3), true)]
    #[test_case(&json!({"if": {"minimum": 0}, "then": {"multipleOf": 2}, "else": {"multipleOf": 3}}), &json!(-4), false)]
    #[test_case(&json!({"then": {"multipleOf": 2}}), &json!(3), true ; "then without if is inert")]
    #[test_case(&json!({"else": {"multipleOf": 2}}), &json!(3), true ; "else without if is inert")]
    fn verdicts(schema: &Value, instance: &Value, expected: bool) {
        if expected {
            tests_util::is_valid(schema, instance);
        } else {
            tests_util::is_not_valid(schema, instance);
        }
    }
}
