//! The `not` keyword.

use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, NodeValidator, SubSchema, Validate};

pub(crate) struct NotValidator {
    node: SubSchema,
}

impl Validate for NotValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        !self.node.is_valid(instance)
    }

    fn constant_verdict(&self) -> Option<bool> {
        self.node.constant_verdict().map(|verdict| !verdict)
    }
}

pub(crate) fn compile<'s>(
    ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    let Some(negated) = &schema.not else {
        return Ok(());
    };
    // `not: {not: X}` compiles straight to X.
    if negated.only_key("not") {
        if let Some(inner) = &negated.not {
            let node = ctx.subschema(inner)?;
            validators.push(Box::new(NodeValidator { node }));
            return Ok(());
        }
    }
    let node = ctx.subschema(negated)?;
    validators.push(Box::new(NotValidator { node }));
    Ok(())
}
