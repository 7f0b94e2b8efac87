//! The `format` keyword. Unknown format names accept any string.

use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::formats;
use crate::node::{BoxedValidator, Validate};

pub(crate) struct FormatValidator {
    check: fn(&str) -> bool,
}

impl Validate for FormatValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        match instance {
            Value::String(text) => (self.check)(text),
            _ => true,
        }
    }
}

pub(crate) fn compile<'s>(
    _ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    if let Some(name) = &schema.format {
        if let Some(check) = formats::find(name) {
            validators.push(Box::new(FormatValidator { check }));
        } else {
            tracing::debug!(format = name.as_str(), "unrecognized format accepts any string");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"format": "date"}), &json!("2024-02-29"), true)]
    #[test_case(&json!({"format": "date"}), &json!("2023-02-29"), false ; "not a leap year")]
    #[test_case(&json!({"format": "made-up"}), &json!("anything"), true ; "unknown formats pass")]
    #[test_case(&json!({"format": "ipv4"}), &json!(1234), true ; "non strings pass")]
    fn verdicts(schema: &Value, instance: &Value, expected: bool) {
        if expected {
            tests_util::is_valid(schema, instance);
        } else {
            tests_util::is_not_valid(schema, instance);
        }
    }
}
