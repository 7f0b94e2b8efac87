//! The `anyOf` keyword.

use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, SubSchema, Validate};

pub(crate) struct AnyOfValidator {
    nodes: Vec<SubSchema>,
}

impl Validate for AnyOfValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        self.nodes.iter().any(|node| node.is_valid(instance))
    }
}

pub(crate) fn compile<'s>(
    ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    let Some(branches) = &schema.any_of else {
        return Ok(());
    };
    let mut nodes = Vec::with_capacity(branches.len());
    for branch in branches {
        let node = ctx.subschema(branch)?;
        match node.constant_verdict() {
            // `true OR x` satisfies the keyword outright.
            Some(true) => return Ok(()),
            Some(false) => {}
            None => nodes.push(node),
        }
    }
    if nodes.is_empty() {
        // Every branch was constant false, or there were none to begin
        // with: the disjunction can never be satisfied.
        validators.push(Box::new(crate::keywords::boolean::FalseValidator));
        return Ok(());
    }
    validators.push(Box::new(AnyOfValidator { nodes }));
    Ok(())
}
