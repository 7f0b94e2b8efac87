//! Typed representation of JSON Schema documents.
//!
//! This crate holds the pieces shared by the validator compiler and the
//! schema minimizer in the `jschema` crate:
//!
//! - [`value`]: type tags, checked accessors, and text-element length for
//!   [`serde_json::Value`] instances.
//! - [`equality`]: [`deep_equal`](equality::deep_equal), the structural
//!   equality used everywhere (`1` and `1.0` are *not* equal).
//! - [`schema`]: the [`Schema`] record with one field per keyword, plus the
//!   canonical [`Schema::to_value`] / [`Schema::from_value`] conversions.
//! - [`visitor`]: [`SchemaVisitor`](visitor::SchemaVisitor), a rebuild
//!   traversal over every schema field.
//!
//! Schemas are plain owned trees and are immutable once loaded; every
//! rewrite produces a new value.

pub mod equality;
pub mod schema;
pub mod value;
pub mod visitor;

pub use schema::{
    Dependency, Draft, ExclusiveBound, Items, Schema, SchemaError, SchemaType, TypeSet,
};
pub use value::{JsonType, TypeMismatch};
