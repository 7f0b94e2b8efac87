//! Type tags and checked accessors for JSON values.

use std::fmt;

use serde_json::{Map, Number, Value};
use unicode_segmentation::UnicodeSegmentation;

/// Observable tag of a JSON value.
///
/// `Integer` and `Float` are distinct tags: `1` and `1.0` carry different
/// tags even though they are numerically equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JsonType {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl JsonType {
    /// The tag of `value`.
    pub fn of(value: &Value) -> JsonType {
        match value {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Boolean,
            Value::Number(n) if n.is_f64() => JsonType::Float,
            Value::Number(_) => JsonType::Integer,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::Boolean => "boolean",
            JsonType::Integer => "integer",
            JsonType::Float => "float",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed accessor was applied to a value with a different tag.
///
/// Surfacing this on a well-formed schema is a bug in the caller, not in the
/// document being validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeMismatch {
    pub expected: JsonType,
    pub actual: JsonType,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, got {}", self.expected, self.actual)
    }
}

impl std::error::Error for TypeMismatch {}

macro_rules! checked_accessors {
    ($($name:ident => $variant:ident, $expected:ident, $out:ty;)*) => {
        $(
            pub fn $name(value: &Value) -> Result<$out, TypeMismatch> {
                match value {
                    Value::$variant(inner) => Ok(inner),
                    other => Err(TypeMismatch {
                        expected: JsonType::$expected,
                        actual: JsonType::of(other),
                    }),
                }
            }
        )*
    };
}

checked_accessors!(
    as_object => Object, Object, &Map<String, Value>;
    as_array => Array, Array, &Vec<Value>;
    as_str => String, String, &str;
    as_number => Number, Float, &Number;
    as_bool => Bool, Boolean, &bool;
);

/// Length of `text` in text elements (extended grapheme clusters).
///
/// Schema `minLength`/`maxLength` count user-perceived characters, not
/// UTF-16 code units and not Unicode scalar values.
pub fn text_elements(text: &str) -> usize {
    text.graphemes(true).count()
}
