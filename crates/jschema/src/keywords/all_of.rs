//! The `allOf` keyword.

use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, NodeValidator, SubSchema, Validate};

pub(crate) struct AllOfValidator {
    nodes: Vec<SubSchema>,
}

impl Validate for AllOfValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        self.nodes.iter().all(|node| node.is_valid(instance))
    }
}

pub(crate) fn compile<'s>(
    ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    let Some(branches) = &schema.all_of else {
        return Ok(());
    };
    let mut nodes = Vec::with_capacity(branches.len());
    for branch in branches {
        let node = ctx.subschema(branch)?;
        match node.constant_verdict() {
            // `true AND x` is `x`.
            Some(true) => {}
            Some(false) => {
                validators.push(Box::new(crate::keywords::boolean::FalseValidator));
                return Ok(());
            }
            None => nodes.push(node),
        }
    }
    match nodes.as_slice() {
        [] => {}
        // A one-branch conjunction is the branch itself.
        [node] => validators.push(Box::new(NodeValidator { node: node.clone() })),
        _ => validators.push(Box::new(AllOfValidator { nodes })),
    }
    Ok(())
}
