//! The `multipleOf` keyword.
//!
//! Integer instance against an integer multiple stays in integer
//! arithmetic. Any float on either side goes through `BigFraction`, an
//! exact binary rational, so `0.0075 % 0.0001` style checks do not suffer
//! float error.

use fraction::{BigFraction, Zero};
use jschema_ast::schema::Schema;
use serde_json::{Number, Value};

use crate::compiler::Context;
use crate::error::SchemaConstructionError;
use crate::node::{BoxedValidator, Validate};

pub(crate) struct MultipleOfIntegerValidator {
    multiple: i128,
    /// Exact copy of the multiple for float instances.
    fraction: BigFraction,
}

impl Validate for MultipleOfIntegerValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        let Value::Number(n) = instance else {
            return true;
        };
        if let Some(value) = as_wide_integer(n) {
            // `multipleOf: 0` has no multiples.
            self.multiple != 0 && value % self.multiple == 0
        } else {
            fraction_multiple(n, &self.fraction).unwrap_or(false)
        }
    }
}

pub(crate) struct MultipleOfFractionValidator {
    multiple: BigFraction,
}

impl Validate for MultipleOfFractionValidator {
    fn is_valid(&self, instance: &Value) -> bool {
        let Value::Number(n) = instance else {
            return true;
        };
        fraction_multiple(n, &self.multiple).unwrap_or(false)
    }
}

fn as_wide_integer(n: &Number) -> Option<i128> {
    if let Some(value) = n.as_u64() {
        Some(i128::from(value))
    } else if let Some(value) = n.as_i64() {
        Some(i128::from(value))
    } else {
        None
    }
}

fn as_fraction(n: &Number) -> Option<BigFraction> {
    if let Some(value) = n.as_u64() {
        Some(BigFraction::from(value))
    } else if let Some(value) = n.as_i64() {
        Some(BigFraction::from(value))
    } else {
        n.as_f64().map(BigFraction::from)
    }
}

fn fraction_multiple(instance: &Number, multiple: &BigFraction) -> Option<bool> {
    if multiple.is_zero() {
        return Some(false);
    }
    let value = as_fraction(instance)?;
    Some((value / multiple.clone()).fract().is_zero())
}

pub(crate) fn compile<'s>(
    _ctx: &Context<'s>,
    schema: &'s Schema,
    validators: &mut Vec<BoxedValidator>,
) -> Result<(), SchemaConstructionError> {
    let Some(multiple) = &schema.multiple_of else {
        return Ok(());
    };
    if let Some(value) = as_wide_integer(multiple) {
        let fraction = as_fraction(multiple).expect("integer number converts to a fraction");
        validators.push(Box::new(MultipleOfIntegerValidator {
            multiple: value,
            fraction,
        }));
    } else if let Some(multiple) = as_fraction(multiple) {
        validators.push(Box::new(MultipleOfFractionValidator { multiple }));
    }
    Ok(())
}
