//! The `enum` keyword.

use jschema_ast::equality::deep_equal;
use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, Validate};

pub(crate) struct EnumValidator {
    options: Vec<Value>,
}

impl Validate for EnumValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        self.options.iter().any(|option| deep_equal(instance, option))
    }
}

pub(crate) fn compile<'s>(
    _ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    if let Some(options) = &schema.enum_values {
        validators.push(Box::new(EnumValidator {
            options: options.clone(),
        }));
    }
    Ok(())
}
