//! The `minProperties` keyword.

use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, Validate};

pub(crate) struct MinPropertiesValidator {
    limit: u64,
}

impl Validate for MinPropertiesValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        match instance {
            Value::Object(object) => object.len() as u64 >= self.limit,
            _ => true,
        }
    }
}

pub(crate) fn compile<'s>(
    _ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    if let Some(limit) = schema.min_properties {
        validators.push(Box::new(MinPropertiesValidator { limit }));
    }
    Ok(())
}
