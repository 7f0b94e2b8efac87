//! `minLength` and `maxLength`, counted in text elements.

use jschema_ast::schema::Schema;
use jschema_ast::value::text_elements;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, Validate};

pub(crate) struct MinLengthValidator {
    limit: u64,
}

impl Validate for MinLengthValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        match instance {
            Value::String(text) => text_elements(text) as u64 >= self.limit,
            _ => true,
        }
    }
}

pub(crate) struct MaxLengthValidator {
    limit: u64,
}

impl Validate for MaxLengthValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        match instance {
            Value::String(text) => text_elements(text) as u64 <= self.limit,
            _ => true,
        }
    }
}

pub(crate) fn compile<'s>(
    _ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    if let Some(limit) = schema.min_length {
        validators.push(Box::new(MinLengthValidator { limit }));
    }
    if let Some(limit) = schema.max_length {
        validators.push(Box::new(MaxLengthValidator { limit }));
    }
    Ok(())
}
