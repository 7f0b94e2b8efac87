//! The `type` keyword.

use jschema_ast::schema::{Draft, Schema, SchemaType, TypeSet};
use serde_json::{Number, Value};

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, Validate};

/// Whether `n` counts as an integer. `u64`/`i64` always do; a float with a
/// zero fractional part only from draft 6 on.
pub(crate) fn is_integer(n: &Number, draft: Draft) -> bool {
    if n.is_u64() || n.is_i64() {
        return true;
    }
    if n.is_f64() {
        if !draft.float_with_zero_fraction_is_integer() {
            return false;
        }
        // Plain decimals are checked on the literal text: a wide value
        // like 99999999999999999999999.5 rounds to an integral f64.
        let literal = n.to_string();
        if let Some((_, fraction)) = literal.split_once('.') {
            if !fraction.contains(['e', 'E']) {
                return !fraction.is_empty() && fraction.bytes().all(|b| b == b'0');
            }
        }
        return n.as_f64().is_some_and(|f| f.fract() == 0.0);
    }
    // No 64-bit representation at all: an integer literal wider than u64
    // (arbitrary-precision). An integer token in every draft.
    let literal = n.to_string();
    let digits = literal.strip_prefix('-').unwrap_or(&literal);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) struct TypeValidator {
    types: TypeSet,
    draft: Draft,
}

impl Validate for TypeValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        match instance {
            Value::Null => self.types.contains(SchemaType::Null),
            Value::Bool(_) => self.types.contains(SchemaType::Boolean),
            Value::Number(n) => {
                // `integer` implies `number`, never the other way around.
                self.types.contains(SchemaType::Number)
                    || (self.types.contains(SchemaType::Integer) && is_integer(n, self.draft))
            }
            Value::String(_) => self.types.contains(SchemaType::String),
            Value::Array(_) => self.types.contains(SchemaType::Array),
            Value::Object(_) => self.types.contains(SchemaType::Object),
        }
    }
}

pub(crate) fn compile<'s>(
    ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    if let Some(types) = &schema.types {
        validators.push(Box::new(TypeValidator {
            types: types.clone(),
            draft: ctx.draft(),
        }));
    }
    Ok(())
}
