//! `items` and `additionalItems`.
//!
//! The single-schema form constrains every element. The positional form
//! constrains element `i` with `items[i]`; what happens past the prefix
//! depends on `additionalItems`: `false` caps the length, a schema
//! constrains the tail, anything else leaves it alone.

use jschema_ast::schema::{Items, Schema};
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, SubSchema, Validate};

pub(crate) struct ItemsValidator {
    node: SubSchema,
}

impl Validate for ItemsValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        match instance {
            Value::Array(items) => items.iter().all(|item| self.node.is_valid(item)),
            _ => true,
        }
    }
}

enum Tail {
    Unconstrained,
    Forbidden,
    Node(SubSchema),
}

pub(crate) struct PositionalItemsValidator {
    prefix: Vec<SubSchema>,
    tail: Tail,
}

impl Validate for PositionalItemsValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        let Value::Array(items) = instance else {
            return true;
        };
        for (item, node) in items.iter().zip(self.prefix.iter()) {
            if !node.is_valid(item) {
                return false;
            }
        }
        if items.len() <= self.prefix.len() {
            return true;
        }
        match &self.tail {
            Tail::Unconstrained => true,
            Tail::Forbidden => false,
            Tail::Node(node) => items[self.prefix.len()..]
                .iter()
                .all(|item| node.is_valid(item)),
        }
    }
}

pub(crate) fn compile<'s>(
    ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    match &schema.items {
        Some(Items::Single(item_schema)) => {
            let node = ctx.subschema(item_schema)?;
            validators.push(Box::new(ItemsValidator { node }));
        }
        Some(Items::Positional(list)) => {
            let mut prefix = Vec::with_capacity(list.len());
            for item_schema in list {
                prefix.push(ctx.subschema(item_schema)?);
            }
            let tail = if schema.allow_additional_items == Some(false) {
                Tail::Forbidden
            } else if let Some(rest) = &schema.additional_items {
                Tail::Node(ctx.subschema(rest)?)
            } else {
                Tail::Unconstrained
            };
            validators.push(Box::new(PositionalItemsValidator { prefix, tail }));
        }
        None => {}
    }
    Ok(())
}
