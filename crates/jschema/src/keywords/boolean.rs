//! The constant-false predicate backing `false` schemas and folded
//! always-failing branches. The true constant needs no validator at all:
//! an empty conjunction already accepts everything.

use serde_json::Value;

use crate::node::Validate;

pub(crate) struct FalseValidator;

impl Validate for FalseValidator {
    #[inline]
    fn is_valid(&self, _: &Value) -> bool {
        false
    }

    fn constant_verdict(&self) -> Option<bool> {
        Some(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn boolean_schemas() {
        tests_util::is_valid(&json!(true), &json!(42));
        tests_util::is_not_valid(&json!(false), &json!(42));
        tests_util::is_not_valid(&json!(false), &json!(null));
    }

    #[test]
    fn empty_schema_accepts_everything() {
        for instance in [json!(null), json!(1), json!("x"), json!([1]), json!({"a": 1})] {
            tests_util::is_valid(&json!({}), &instance);
        }
    }
}
