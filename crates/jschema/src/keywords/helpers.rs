//! Mixed-representation numeric comparisons.
//!
//! JSON numbers arrive as `u64`, `i64`, or `f64`; under the
//! `arbitrary-precision` feature, integers wider than 64 bits additionally
//! keep their exact textual form. `num_cmp` compares across the primitive
//! widths without rounding, and `num_bigint` takes over whenever an operand
//! has no 64-bit representation at all, so the bound keywords stay exact
//! past both `u64::MAX` and `f64`'s 53-bit mantissa.

use std::cmp::Ordering;

use num_cmp::NumCmp;
use serde_json::Number;

macro_rules! against_limit {
    ($lhs:expr, $limit:expr, $method:ident) => {
        if let Some(rhs) = $limit.as_u64() {
            NumCmp::$method($lhs, rhs)
        } else if let Some(rhs) = $limit.as_i64() {
            NumCmp::$method($lhs, rhs)
        } else if let Some(rhs) = $limit.as_f64() {
            NumCmp::$method($lhs, rhs)
        } else {
            false
        }
    };
}

macro_rules! comparison {
    ($name:ident, $accepted:pat) => {
        pub(crate) fn $name(instance: &Number, limit: &Number) -> bool {
            if let Some(ordering) = bignum::compare(instance, limit) {
                return matches!(ordering, $accepted);
            }
            if let Some(lhs) = instance.as_u64() {
                against_limit!(lhs, limit, $name)
            } else if let Some(lhs) = instance.as_i64() {
                against_limit!(lhs, limit, $name)
            } else if let Some(lhs) = instance.as_f64() {
                against_limit!(lhs, limit, $name)
            } else {
                false
            }
        }
    };
}

comparison!(num_le, Ordering::Less | Ordering::Equal);
comparison!(num_lt, Ordering::Less);
comparison!(num_ge, Ordering::Greater | Ordering::Equal);
comparison!(num_gt, Ordering::Greater);

/// Exact ordering for integers with no 64-bit representation.
mod bignum {
    use std::cmp::Ordering;
    use std::str::FromStr;

    use num_bigint::BigInt;
    use serde_json::Number;

    fn fits_fast_path(n: &Number) -> bool {
        n.is_u64() || n.is_i64() || n.is_f64()
    }

    fn integer_literal(n: &Number) -> Option<BigInt> {
        if n.is_f64() {
            return None;
        }
        BigInt::from_str(&n.to_string()).ok()
    }

    /// `Some` when at least one operand only exists as a wide integer
    /// literal; `None` defers to the primitive fast path.
    pub(super) fn compare(instance: &Number, limit: &Number) -> Option<Ordering> {
        if fits_fast_path(instance) && fits_fast_path(limit) {
            return None;
        }
        match (integer_literal(instance), integer_literal(limit)) {
            (Some(lhs), Some(rhs)) => Some(lhs.cmp(&rhs)),
            (Some(lhs), None) => against_float(&lhs, limit.as_f64()?),
            (None, Some(rhs)) => against_float(&rhs, instance.as_f64()?).map(Ordering::reverse),
            (None, None) => None,
        }
    }

    fn against_float(integer: &BigInt, float: f64) -> Option<Ordering> {
        if float.is_nan() {
            return None;
        }
        if float == f64::INFINITY {
            return Some(Ordering::Less);
        }
        if float == f64::NEG_INFINITY {
            return Some(Ordering::Greater);
        }
        // An integral f64 prints exactly with zero precision.
        let truncated = BigInt::from_str(&format!("{:.0}", float.trunc())).ok()?;
        Some(match integer.cmp(&truncated) {
            Ordering::Equal if float.fract() > 0.0 => Ordering::Less,
            Ordering::Equal if float.fract() < 0.0 => Ordering::Greater,
            ordering => ordering,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{num_ge, num_gt, num_le, num_lt};
    use serde_json::{json, Number, Value};
    use test_case::test_case;

    fn number(value: Value) -> Number {
        match value {
            Value::Number(n) => n,
            other => panic!("not a number: {other}"),
        }
    }

    #[test_case(json!(3), json!(5), true)]
    #[test_case(json!(5), json!(5), true)]
    #[test_case(json!(6), json!(5), false)]
    #[test_case(json!(3), json!(3.5), true)]
    #[test_case(json!(-1), json!(0.5), true)]
    #[test_case(json!(18446744073709551615u64), json!(18446744073709551615u64), true ; "u64 max le itself")]
    #[test_case(json!(18446744073709551615u64), json!(9.2e18), false ; "u64 max not le smaller float")]
    fn le(instance: Value, limit: Value, expected: bool) {
        assert_eq!(num_le(&number(instance), &number(limit)), expected);
    }

    #[test_case(json!(5), json!(5), false)]
    #[test_case(json!(4.9), json!(5), true)]
    #[test_case(json!(-3), json!(-2), true)]
    fn lt(instance: Value, limit: Value, expected: bool) {
        assert_eq!(num_lt(&number(instance), &number(limit)), expected);
    }

    #[test_case(json!(5), json!(5), true)]
    #[test_case(json!(5.1), json!(5), true)]
    #[test_case(json!(4), json!(5), false)]
    fn ge(instance: Value, limit: Value, expected: bool) {
        assert_eq!(num_ge(&number(instance), &number(limit)), expected);
    }

    #[test_case(json!(5), json!(5), false)]
    #[test_case(json!(9007199254740993u64), json!(9007199254740992.0), true ; "past f64 precision")]
    fn gt(instance: Value, limit: Value, expected: bool) {
        assert_eq!(num_gt(&number(instance), &number(limit)), expected);
    }

    #[cfg(feature = "arbitrary-precision")]
    mod arbitrary_precision {
        use super::super::{num_ge, num_gt, num_le, num_lt};
        use serde_json::{Number, Value};
        use test_case::test_case;

        fn number(text: &str) -> Number {
            match serde_json::from_str(text).unwrap() {
                Value::Number(n) => n,
                other => panic!("not a number: {other}"),
            }
        }

        // Operands differing only beyond f64's mantissa must stay distinct.
        #[test_case("99999999999999999999999", "99999999999999999999999", false, true ; "huge equal")]
        #[test_case("99999999999999999999998", "99999999999999999999999", true, false ; "huge one apart")]
        #[test_case("-99999999999999999999999", "99999999999999999999999", true, false ; "huge negative below huge positive")]
        #[test_case("5", "99999999999999999999999", true, false ; "small int below huge")]
        #[test_case("99999999999999999999999", "0.5", false, false ; "huge above float")]
        #[test_case("18446744073709551616", "18446744073709551615", false, false ; "one past u64 max")]
        fn orderings(left: &str, right: &str, lt: bool, eq: bool) {
            let (left, right) = (number(left), number(right));
            assert_eq!(num_lt(&left, &right), lt);
            assert_eq!(num_le(&left, &right), lt || eq);
            assert_eq!(num_gt(&left, &right), !lt && !eq);
            assert_eq!(num_ge(&left, &right), !lt || eq);
        }
    }
}
