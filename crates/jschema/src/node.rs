//! Compiled validator nodes.

use std::sync::{Arc, OnceLock};

use serde_json::Value;

/// A single compiled keyword predicate.
pub(crate) trait Validate: Send + Sync {
    fn is_valid(&self, instance: &Value) -> bool;

    /// `Some(verdict)` when this validator ignores its input entirely.
    /// Conjunction assembly folds such validators away.
    fn constant_verdict(&self) -> Option<bool> {
        None
    }
}

pub(crate) type BoxedValidator = Box<dyn Validate>;

pub(crate) type CompilationResult = Result<BoxedValidator, crate::SchemaConstructionError>;

/// The compiled form of one schema: a short-circuiting conjunction of its
/// keyword predicates. An empty node accepts everything.
pub(crate) struct SchemaNode {
    validators: Box<[BoxedValidator]>,
}

impl SchemaNode {
    pub(crate) fn new(validators: Vec<BoxedValidator>) -> SchemaNode {
        SchemaNode {
            validators: validators.into_boxed_slice(),
        }
    }

    pub(crate) fn constant(verdict: bool) -> SchemaNode {
        if verdict {
            SchemaNode::new(Vec::new())
        } else {
            SchemaNode::new(vec![Box::new(crate::keywords::boolean::FalseValidator)])
        }
    }

    #[inline]
    pub(crate) fn is_valid(&self, instance: &Value) -> bool {
        self.validators.iter().all(|v| v.is_valid(instance))
    }

    pub(crate) fn constant_verdict(&self) -> Option<bool> {
        match self.validators.as_ref() {
            [] => Some(true),
            [single] => single.constant_verdict(),
            _ => None,
        }
    }
}

/// Late-bound indirection for a schema that was still compiling when it was
/// referenced. The compiler fills every cell in its final pass.
pub(crate) type LateBoundCell = Arc<OnceLock<Arc<SchemaNode>>>;

/// A compiled sub-schema: either the body itself or an indirection through
/// a placeholder cell (the back-edge of a recursive schema).
#[derive(Clone)]
pub(crate) enum SubSchema {
    Direct(Arc<SchemaNode>),
    Deferred(LateBoundCell),
}

impl SubSchema {
    #[inline]
    pub(crate) fn is_valid(&self, instance: &Value) -> bool {
        match self {
            SubSchema::Direct(node) => node.is_valid(instance),
            SubSchema::Deferred(cell) => cell
                .get()
                .expect("late-bound cell is filled before validation")
                .is_valid(instance),
        }
    }

    pub(crate) fn constant_verdict(&self) -> Option<bool> {
        match self {
            SubSchema::Direct(node) => node.constant_verdict(),
            // A cycle's verdict depends on its input.
            SubSchema::Deferred(_) => None,
        }
    }
}

/// Adapter exposing a compiled sub-schema as a keyword predicate.
pub(crate) struct NodeValidator {
    pub(crate) node: SubSchema,
}

impl Validate for NodeValidator {
    #[inline]
    fn is_valid(&self, instance: &Value) -> bool {
        self.node.is_valid(instance)
    }

    fn constant_verdict(&self) -> Option<bool> {
        self.node.constant_verdict()
    }
}
