//! The `dependencies` keyword, both shapes: name lists and schemas.

use jschema_ast::schema::{Dependency, Schema};
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, SubSchema, Validate};

enum Requirement {
    Names(Vec<String>),
    Node(SubSchema),
}

pub(crate) struct DependenciesValidator {
    entries: Vec<(String, Requirement)>,
}

impl Validate for DependenciesValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        let Value::Object(object) = instance else {
            return true;
        };
        for (key, requirement) in &self.entries {
            if !object.contains_key(key) {
                continue;
            }
            match requirement {
                Requirement::Names(names) => {
                    if !names.iter().all(|name| object.contains_key(name)) {
                        return false;
                    }
                }
                Requirement::Node(node) => {
                    if !node.is_valid(instance) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

pub(crate) fn compile<'s>(
    ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    if let Some(dependencies) = &schema.dependencies {
        let mut entries = Vec::with_capacity(dependencies.len());
        for (key, dependency) in dependencies {
            let requirement = match dependency {
                Dependency::Required(names) => Requirement::Names(names.clone()),
                Dependency::Node(node) => Requirement::Node(ctx.subschema(node)?),
            };
            entries.push((key.clone(), requirement));
        }
        validators.push(Box::new(DependenciesValidator { entries }));
    }
    Ok(())
}
