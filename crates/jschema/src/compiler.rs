//! Schema compilation driver.
//!
//! Every schema lowers to a [`SchemaNode`]: the conjunction of its compiled
//! keyword predicates. Sub-schemas compile through [`Context::subschema`],
//! which also carries the recursion machinery: two tables keyed by the
//! schema's address within the borrowed document:
//!
//! - `delayed`: schemas currently being compiled. Hitting one mid-cycle
//!   allocates a placeholder cell and emits an indirect call through it.
//! - `compiled`: finished bodies, shared when the same node is referenced
//!   from several places.
//!
//! [`Context::finish`] binds every allocated cell to its compiled body,
//! closing the back-edges of recursive schemas.

use std::cell::RefCell;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use jschema_ast::schema::{Draft, Schema};

use crate::error::SchemaConstructionError;
use crate::keywords;
use crate::node::{BoxedValidator, LateBoundCell, SchemaNode, SubSchema};
use crate::resolver;

pub(crate) struct Context<'s> {
    root: &'s Schema,
    draft: Draft,
    state: RefCell<State>,
}

#[derive(Default)]
struct State {
    delayed: AHashMap<usize, Option<LateBoundCell>>,
    compiled: AHashMap<usize, Arc<SchemaNode>>,
    bindings: Vec<(usize, LateBoundCell)>,
    /// Reference nodes currently being chased; re-entering one means the
    /// chain is `$ref` → `$ref` with no schema body in between.
    resolving: AHashSet<usize>,
}

impl<'s> Context<'s> {
    pub(crate) fn new(root: &'s Schema, draft: Draft) -> Context<'s> {
        Context {
            root,
            draft,
            state: RefCell::new(State::default()),
        }
    }

    pub(crate) fn draft(&self) -> Draft {
        self.draft
    }

    /// Compile `schema`, reusing earlier work and tolerating cycles.
    pub(crate) fn subschema(
        &self,
        schema: &'s Schema,
    ) -> Result<SubSchema, SchemaConstructionError> {
        if let Some(reference) = &schema.reference {
            // Drafts up to 7: a reference replaces its sibling keywords.
            let ref_key = schema as *const Schema as usize;
            if !self.state.borrow_mut().resolving.insert(ref_key) {
                return Err(SchemaConstructionError::unresolvable(reference));
            }
            let target = resolver::resolve(self.root, reference)?;
            tracing::trace!(reference = reference.as_str(), "resolved local reference");
            let compiled = self.subschema(target);
            self.state.borrow_mut().resolving.remove(&ref_key);
            return compiled;
        }
        let key = schema as *const Schema as usize;
        {
            let mut state = self.state.borrow_mut();
            if let Some(slot) = state.delayed.get_mut(&key) {
                // Mid-cycle: hand out an indirection instead of recursing.
                let cell = slot.get_or_insert_with(LateBoundCell::default).clone();
                return Ok(SubSchema::Deferred(cell));
            }
            if let Some(node) = state.compiled.get(&key) {
                return Ok(SubSchema::Direct(node.clone()));
            }
            state.delayed.insert(key, None);
        }
        let body = self.compile_keywords(schema)?;
        let node = Arc::new(body);
        let mut state = self.state.borrow_mut();
        let observed = state.delayed.remove(&key).flatten();
        state.compiled.insert(key, node.clone());
        match observed {
            Some(cell) => {
                // Recursion reached this schema while it was compiling; all
                // callers (including us) go through the placeholder.
                state.bindings.push((key, cell.clone()));
                Ok(SubSchema::Deferred(cell))
            }
            None => Ok(SubSchema::Direct(node)),
        }
    }

    /// Bind every placeholder cell to its compiled body.
    pub(crate) fn finish(&self) {
        let state = self.state.borrow();
        for (key, cell) in &state.bindings {
            let node = state
                .compiled
                .get(key)
                .expect("every placeholder has a compiled body")
                .clone();
            let _ = cell.set(node);
        }
    }

    fn compile_keywords(
        &self,
        schema: &'s Schema,
    ) -> Result<SchemaNode, SchemaConstructionError> {
        if let Some(valid) = schema.valid {
            return Ok(SchemaNode::constant(valid));
        }
        let mut validators: Vec<BoxedValidator> = Vec::new();
        keywords::type_::compile(self, schema, &mut validators)?;
        keywords::const_::compile(self, schema, &mut validators)?;
        keywords::enum_::compile(self, schema, &mut validators)?;
        keywords::numeric::compile(self, schema, &mut validators)?;
        keywords::multiple_of::compile(self, schema, &mut validators)?;
        keywords::string_length::compile(self, schema, &mut validators)?;
        keywords::pattern::compile(self, schema, &mut validators)?;
        keywords::format::compile(self, schema, &mut validators)?;
        keywords::content::compile(self, schema, &mut validators)?;
        keywords::items::compile(self, schema, &mut validators)?;
        keywords::min_items::compile(self, schema, &mut validators)?;
        keywords::max_items::compile(self, schema, &mut validators)?;
        keywords::unique_items::compile(self, schema, &mut validators)?;
        keywords::contains::compile(self, schema, &mut validators)?;
        keywords::properties::compile(self, schema, &mut validators)?;
        keywords::property_names::compile(self, schema, &mut validators)?;
        keywords::required::compile(self, schema, &mut validators)?;
        keywords::dependencies::compile(self, schema, &mut validators)?;
        keywords::min_properties::compile(self, schema, &mut validators)?;
        keywords::max_properties::compile(self, schema, &mut validators)?;
        keywords::all_of::compile(self, schema, &mut validators)?;
        keywords::any_of::compile(self, schema, &mut validators)?;
        keywords::one_of::compile(self, schema, &mut validators)?;
        keywords::not::compile(self, schema, &mut validators)?;
        keywords::if_::compile(self, schema, &mut validators)?;

        // Constant folding: drop always-true members, collapse on a
        // constant false.
        let mut folded = Vec::with_capacity(validators.len());
        for validator in validators {
            match validator.constant_verdict() {
                Some(true) => {}
                Some(false) => return Ok(SchemaNode::constant(false)),
                None => folded.push(validator),
            }
        }
        tracing::trace!(predicates = folded.len(), "compiled schema node");
        Ok(SchemaNode::new(folded))
    }
}

/// Compile a whole document into its root node.
pub(crate) fn compile_root(
    root: &Schema,
    draft: Draft,
) -> Result<SubSchema, SchemaConstructionError> {
    let ctx = Context::new(root, draft);
    let compiled = ctx.subschema(root)?;
    ctx.finish();
    Ok(compiled)
}
