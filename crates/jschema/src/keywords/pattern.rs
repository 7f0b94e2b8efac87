//! The `pattern` keyword.

use jschema_ast::schema::Schema;
use serde_json::Value;

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, Validate};

pub(crate) struct PatternValidator {
    regex: fancy_regex::Regex,
}

impl Validate for PatternValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        match instance {
            // Backtracking-limit errors count as no match.
            Value::String(text) => self.regex.is_match(text).unwrap_or(false),
            _ => true,
        }
    }
}

pub(crate) fn compile<'s>(
    _ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    if let Some(pattern) = &schema.pattern {
        let regex = fancy_regex::Regex::new(pattern)
            .map_err(|error| SchemaConstructionError::invalid_pattern(pattern, &error))?;
        validators.push(Box::new(PatternValidator { regex }));
    }
    Ok(())
}
