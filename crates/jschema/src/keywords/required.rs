//! The `required` keyword.

use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, Validate};

pub(crate) struct RequiredValidator {
    names: Vec<String>,
}

impl Validate for RequiredValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        match instance {
            Value::Object(object) => self.names.iter().all(|name| object.contains_key(name)),
            _ => true,
        }
    }
}

pub(crate) fn compile<'s>(
    _ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    if let Some(names) = &schema.required {
        validators.push(Box::new(RequiredValidator {
            names: names.clone(),
        }));
    }
    Ok(())
}
