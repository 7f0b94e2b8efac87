use std::fmt;

/// The compiler met a schema it cannot turn into a validator.
///
/// Raised at construction time; validation itself never fails and a
/// compiled validator always produces a verdict.
#[derive(Debug)]
pub enum SchemaConstructionError {
    /// A `pattern` or `patternProperties` regex did not compile.
    InvalidPattern { pattern: String, message: String },
    /// A `$ref` does not point at a schema within this document.
    UnresolvableReference { reference: String },
}

impl SchemaConstructionError {
    pub(crate) fn invalid_pattern(
        pattern: &str,
        error: &fancy_regex::Error,
    ) -> SchemaConstructionError {
        SchemaConstructionError::InvalidPattern {
            pattern: pattern.to_owned(),
            message: error.to_string(),
        }
    }

    pub(crate) fn unresolvable(reference: &str) -> SchemaConstructionError {
        SchemaConstructionError::UnresolvableReference {
            reference: reference.to_owned(),
        }
    }
}

impl fmt::Display for SchemaConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaConstructionError::InvalidPattern { pattern, message } => {
                write!(f, "invalid regular expression {pattern:?}: {message}")
            }
            SchemaConstructionError::UnresolvableReference { reference } => {
                write!(f, "unresolvable reference {reference:?}")
            }
        }
    }
}

impl std::error::Error for SchemaConstructionError {}
