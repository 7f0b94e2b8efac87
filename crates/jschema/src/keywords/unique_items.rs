//! The `uniqueItems` keyword: pairwise structural distinctness.

use jschema_ast::equality::deep_equal;
use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, Validate};

pub(crate) struct UniqueItemsValidator;

impl Validate for UniqueItemsValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        let Value::Array(items) = instance else {
            return true;
        };
        for (index, item) in items.iter().enumerate() {
            if items[..index].iter().any(|seen| deep_equal(seen, item)) {
                return false;
            }
        }
        true
    }
}

pub(crate) fn compile<'s>(
    _ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    if schema.unique_items == Some(true) {
        validators.push(Box::new(UniqueItemsValidator));
    }
    Ok(())
}
