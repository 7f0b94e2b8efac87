//! JSON Schema compiled validators and a schema minimizer.
//!
//! A [`Schema`] compiles once into a [`Validator`], a closure tree over
//! JSON values, and the validator answers any number of membership
//! questions with a plain boolean. Recursive schemas (`$ref` back into the
//! same document) compile in bounded time through late-bound placeholder
//! cells.
//!
//! ```
//! use jschema::{validator_for, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::from_value(&json!({"type": "integer", "minimum": 0}))?;
//! let validator = validator_for(&schema)?;
//! assert!(validator.is_valid(&json!(5)));
//! assert!(!validator.is_valid(&json!(-1)));
//! assert!(!validator.is_valid(&json!("5")));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`minimize`] rewrites a schema into a structurally smaller equivalent:
//!
//! ```
//! use jschema::{minimize, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::from_value(&json!({
//!     "title": "T",
//!     "allOf": [{"const": "F"}, {"const": "B"}, {"const": "F"}]
//! }))?;
//! assert_eq!(
//!     minimize(&schema).to_value(),
//!     json!({"title": "T", "allOf": [{"const": "F"}, {"const": "B"}]})
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Drafts 3, 4, 6, and 7 are supported; the draft is read from `$schema`
//! and can be overridden through [`options`]. Validation never fails for
//! document-shape reasons: malformed schemas are rejected at construction
//! time, and format or content probes that hit library errors simply
//! report `false` for their keyword.

mod compiler;
mod error;
mod formats;
mod keywords;
mod minimize;
mod node;
mod resolver;

pub use error::SchemaConstructionError;
pub use jschema_ast::schema::{Dependency, Draft, ExclusiveBound, Items, Schema, SchemaError};
pub use minimize::minimize;

use node::SubSchema;
use serde_json::Value;

/// A compiled schema. Build one per schema and reuse it across documents;
/// validation is read-only and the validator is `Send + Sync`.
pub struct Validator {
    root: SubSchema,
}

impl Validator {
    /// Whether `instance` satisfies the schema.
    #[must_use]
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.root.is_valid(instance)
    }
}

/// Compile `schema` with the draft it declares.
pub fn validator_for(schema: &Schema) -> Result<Validator, SchemaConstructionError> {
    options().build(schema)
}

/// One-shot convenience: compile and validate a single document.
pub fn is_valid(schema: &Schema, instance: &Value) -> Result<bool, SchemaConstructionError> {
    validator_for(schema).map(|validator| validator.is_valid(instance))
}

/// Start building validation options.
pub fn options() -> ValidationOptions {
    ValidationOptions::default()
}

/// Compilation options.
///
/// ```
/// use jschema::{options, Draft, Schema};
/// use serde_json::json;
///
/// let schema = Schema::from_value(&json!({"type": "integer"}))?;
/// let validator = options().with_draft(Draft::Draft4).build(&schema)?;
/// // Draft 4 rejects floats with a zero fraction as integers.
/// assert!(!validator.is_valid(&json!(1.0)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ValidationOptions {
    draft: Option<Draft>,
}

impl ValidationOptions {
    /// Override the draft instead of reading it from `$schema`.
    #[must_use]
    pub fn with_draft(mut self, draft: Draft) -> ValidationOptions {
        self.draft = Some(draft);
        self
    }

    /// Compile `schema` under these options.
    pub fn build(&self, schema: &Schema) -> Result<Validator, SchemaConstructionError> {
        let draft = self.draft.unwrap_or_else(|| schema.draft());
        tracing::debug!(?draft, "compiling schema");
        let root = compiler::compile_root(schema, draft)?;
        Ok(Validator { root })
    }
}

#[cfg(test)]
pub(crate) mod tests_util {
    use jschema_ast::schema::{Draft, Schema};
    use serde_json::Value;

    pub(crate) fn schema(document: &Value) -> Schema {
        Schema::from_value(document).expect("test schema is well-formed")
    }

    pub(crate) fn is_valid(schema_doc: &Value, instance: &Value) {
        let validator = crate::validator_for(&schema(schema_doc)).expect("schema compiles");
        assert!(
            validator.is_valid(instance),
            "{schema_doc} should accept {instance}"
        );
    }

    pub(crate) fn is_not_valid(schema_doc: &Value, instance: &Value) {
        let validator = crate::validator_for(&schema(schema_doc)).expect("schema compiles");
        assert!(
            !validator.is_valid(instance),
            "{schema_doc} should reject {instance}"
        );
    }

    pub(crate) fn is_valid_with_draft(draft: Draft, schema_doc: &Value, instance: &Value) {
        let validator = crate::options()
            .with_draft(draft)
            .build(&schema(schema_doc))
            .expect("schema compiles");
        assert!(
            validator.is_valid(instance),
            "{schema_doc} should accept {instance} under {draft:?}"
        );
    }

    pub(crate) fn is_not_valid_with_draft(draft: Draft, schema_doc: &Value, instance: &Value) {
        let validator = crate::options()
            .with_draft(draft)
            .build(&schema(schema_doc))
            .expect("schema compiles");
        assert!(
            !validator.is_valid(instance),
            "{schema_doc} should reject {instance} under {draft:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid, options, validator_for, Draft, Schema};
    use serde_json::json;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn validator_is_shareable() {
        assert_send_sync::<super::Validator>();
    }

    #[test]
    fn one_shot_convenience() {
        let schema = Schema::from_value(&json!({"const": 1})).unwrap();
        assert!(is_valid(&schema, &json!(1)).unwrap());
        assert!(!is_valid(&schema, &json!(2)).unwrap());
    }

    #[test]
    fn draft_override_beats_schema_version() {
        let schema = Schema::from_value(&json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "integer"
        }))
        .unwrap();
        let default = validator_for(&schema).unwrap();
        assert!(default.is_valid(&json!(1.0)));
        let strict = options().with_draft(Draft::Draft4).build(&schema).unwrap();
        assert!(!strict.is_valid(&json!(1.0)));
    }

    #[test]
    fn validator_outlives_the_source_schema(){
        let validator = {
            let schema = Schema::from_value(&json!({"minimum": 3})).unwrap();
            validator_for(&schema).unwrap()
        };
        assert!(validator.is_valid(&json!(4)));
    }
}
