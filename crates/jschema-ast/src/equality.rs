//! Structural equality over JSON values.
//!
//! This is the single notion of equivalence in the system: `const` and
//! `enum` matching, `uniqueItems`, duplicate detection in the minimizer, and
//! the minimizer's change test all go through [`deep_equal`].

use serde_json::{Number, Value};

/// Structural equality with distinct integer and float tags.
///
/// Arrays compare positionally, objects by key set and per-key equality
/// (insertion order does not matter), scalars by natural equality. `1` and
/// `1.0` carry different tags and are unequal.
pub fn deep_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => equal_numbers(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        _ => false,
    }
}

fn equal_numbers(a: &Number, b: &Number) -> bool {
    match (a.is_f64(), b.is_f64()) {
        (true, true) => a.as_f64() == b.as_f64(),
        (false, false) => match (as_wide_integer(a), as_wide_integer(b)) {
            (Some(x), Some(y)) => x == y,
            // Integers with no 64-bit representation keep their exact
            // textual form (arbitrary-precision); JSON integer literals
            // are canonical, so text equality is value equality.
            (None, None) => a.to_string() == b.to_string(),
            _ => false,
        },
        // Mixed tags never compare equal, even for 1 vs 1.0.
        _ => false,
    }
}

fn as_wide_integer(n: &Number) -> Option<i128> {
    if let Some(value) = n.as_u64() {
        Some(i128::from(value))
    } else {
        n.as_i64().map(i128::from)
    }
}

#[cfg(test)]
mod tests {
    use super::deep_equal;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!(null), &json!(null), true)]
    #[test_case(&json!(1), &json!(1), true)]
    #[test_case(&json!(1), &json!(1.0), false ; "integer and float tags differ")]
    #[test_case(&json!(1.0), &json!(1.0), true)]
    #[test_case(&json!(-2), &json!(-2), true)]
    #[test_case(&json!(0), &json!(false), false)]
    #[test_case(&json!("a"), &json!("a"), true)]
    #[test_case(&json!([1, 2]), &json!([1, 2]), true)]
    #[test_case(&json!([1, 2]), &json!([2, 1]), false ; "arrays are positional")]
    #[test_case(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1}), true ; "object order ignored")]
    #[test_case(&json!({"a": 1}), &json!({"a": 1, "b": 2}), false)]
    #[test_case(&json!({"a": [1.5]}), &json!({"a": [1.5]}), true)]
    fn pairs(left: &Value, right: &Value, expected: bool) {
        assert_eq!(deep_equal(left, right), expected);
        // Symmetry comes with the definition; check it anyway.
        assert_eq!(deep_equal(right, left), expected);
    }

    #[test]
    fn reflexive_on_nested_values() {
        let value = json!({"a": [1, 2.5, {"b": null}], "c": "text"});
        assert!(deep_equal(&value, &value));
    }

    #[test]
    fn transitive_sample() {
        let a = json!({"x": [1, {"y": 2}]});
        let b = json!({"x": [1, {"y": 2}]});
        let c = json!({"x": [1, {"y": 2}]});
        assert!(deep_equal(&a, &b));
        assert!(deep_equal(&b, &c));
        assert!(deep_equal(&a, &c));
    }

    #[test]
    fn u64_beyond_i64_range() {
        let big = json!(18446744073709551615u64);
        assert!(deep_equal(&big, &big));
        assert!(!deep_equal(&big, &json!(-1)));
    }

    #[cfg(feature = "arbitrary-precision")]
    mod arbitrary_precision {
        use crate::equality::deep_equal;
        use serde_json::Value;
        use test_case::test_case;

        fn parse(text: &str) -> Value {
            serde_json::from_str(text).unwrap()
        }

        #[test_case("99999999999999999999999", "99999999999999999999999", true ; "huge equal")]
        #[test_case("99999999999999999999999", "99999999999999999999998", false ; "differ beyond f64 mantissa")]
        #[test_case("99999999999999999999999", "1", false ; "huge vs small")]
        #[test_case("99999999999999999999999", "99999999999999999999999.0", false ; "huge integer and float tags differ")]
        #[test_case("-99999999999999999999999", "-99999999999999999999999", true ; "negative huge equal")]
        fn wide_integers(left: &str, right: &str, expected: bool) {
            assert_eq!(deep_equal(&parse(left), &parse(right)), expected);
        }
    }
}
