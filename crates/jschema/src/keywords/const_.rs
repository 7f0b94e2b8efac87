//! The `const` keyword.

use jschema_ast::equality::deep_equal;
use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, Validate};

pub(crate) struct ConstValidator {
    value: Value,
}

impl Validate for ConstValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        deep_equal(instance, &self.value)
    }
}

pub(crate) fn compile<'s>(
    _ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    if let Some(value) = &schema.const_value {
        validators.push(Box::new(ConstValidator {
            value: value.clone(),
        }));
    }
    Ok(())
}
