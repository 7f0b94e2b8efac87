//! `properties`, `patternProperties`, and `additionalProperties`.
//!
//! The three keywords share one notion of "matched": a key matched by
//! `properties` or by any `patternProperties` regex is exempt from
//! `additionalProperties`. When only `properties` is present the simple
//! validator skips the bookkeeping.

use ahash::AHashMap;
use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, SubSchema, Validate};

pub(crate) struct PropertiesValidator {
    properties: Vec<(String, SubSchema)>,
}

impl Validate for PropertiesValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        let Value::Object(object) = instance else {
            return true;
        };
        self.properties.iter().all(|(name, node)| {
            object
                .get(name)
                .map_or(true, |property| node.is_valid(property))
        })
    }
}

enum Additional {
    Unconstrained,
    Forbidden,
    Node(SubSchema),
}

pub(crate) struct ObjectShapeValidator {
    properties: AHashMap<String, SubSchema>,
    patterns: Vec<(fancy_regex::Regex, SubSchema)>,
    additional: Additional,
}

impl Validate for ObjectShapeValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        let Value::Object(object) = instance else {
            return true;
        };
        for (key, property) in object {
            let mut matched = false;
            if let Some(node) = self.properties.get(key) {
                matched = true;
                if !node.is_valid(property) {
                    return false;
                }
            }
            for (regex, node) in &self.patterns {
                if regex.is_match(key).unwrap_or(false) {
                    matched = true;
                    if !node.is_valid(property) {
                        return false;
                    }
                }
            }
            if !matched {
                match &self.additional {
                    Additional::Unconstrained => {}
                    Additional::Forbidden => return false,
                    Additional::Node(node) => {
                        if !node.is_valid(property) {
                            return false;
                        }
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
    let additional = if schema.allow_additional_properties == Some(false) {
        Additional::Forbidden
    } else if let Some(node) = &schema.additional_properties {
        Additional::Node(ctx.subschema(node)?)
    } else {
        Additional::Unconstrained
    };
    let plain_additional = matches!(additional, Additional::Unconstrained);

    if schema.pattern_properties.is_none() && plain_additional {
        if let Some(properties) = &schema.properties {
            let mut compiled = Vec::with_capacity(properties.len());
            for (name, property_schema) in properties {
                compiled.push((name.clone(), ctx.subschema(property_schema)?));
            }
            validators.push(Box::new(PropertiesValidator {
                properties: compiled,
            }));
        }
        return Ok(());
    }

    let mut properties = AHashMap::new();
    if let Some(named) = &schema.properties {
        for (name, property_schema) in named {
            properties.insert(name.clone(), ctx.subschema(property_schema)?);
        }
    }
    let mut patterns = Vec::new();
    if let Some(by_pattern) = &schema.pattern_properties {
        for (pattern, property_schema) in by_pattern {
            let regex = fancy_regex::Regex::new(pattern)
                .map_err(|error| SchemaConstructionError::invalid_pattern(pattern, &error))?;
            patterns.push((regex, ctx.subschema(property_schema)?));
        }
    }
    validators.push(Box::new(ObjectShapeValidator {
        properties,
        patterns,
        additional,
    }));
    Ok(())
}
