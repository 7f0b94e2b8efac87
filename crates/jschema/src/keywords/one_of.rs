//! The `oneOf` keyword: exactly one branch passes.

use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, SubSchema, Validate};

pub(crate) struct OneOfValidator {
    nodes: Vec<SubSchema>,
}

impl Validate for OneOfValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        // Short-circuiting scan: remember one pass, bail on the second.
        let mut seen_pass = false;
        for node in &self.nodes {
            if node.is_valid(instance) {
                if seen_pass {
                    return false;
                }
                seen_pass = true;
            }
        }
        seen_pass
    }
}

pub(crate) fn compile<'s>(
    ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    let Some(branches) = &schema.one_of else {
        return Ok(());
    };
    let mut nodes = Vec::with_capacity(branches.len());
    for branch in branches {
        nodes.push(ctx.subschema(branch)?);
    }
    validators.push(Box::new(OneOfValidator { nodes }));
    Ok(())
}
