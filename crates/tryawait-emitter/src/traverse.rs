//! Host tree walker.
//!
//! A transform registers callbacks keyed by node kind in a
//! `TransformDescriptor`. `traverse` walks a compilation unit depth-first in
//! pre-order and calls the callback for each node whose kind is registered.
//! A node's children are read after its callback returns, so nodes produced
//! by a rewrite are visited too. A tree nested deeper than `MAX_AST_DEPTH`
//! fails the whole walk rather than leaving a subtree unvisited.

use crate::compilation_unit::CompilationUnit;
use crate::error::TransformError;
use rustc_hash::FxHashMap;
use std::rc::Rc;
use tryawait_parser::NodeIndex;

/// Maximum recursion depth for AST traversal to prevent stack overflow
const MAX_AST_DEPTH: u32 = 500;

pub type VisitFn<S> =
    Rc<dyn Fn(NodeIndex, &mut CompilationUnit, &mut S) -> Result<(), TransformError>>;

/// A named transform: node kind -> callback. `S` is per-unit state, created
/// fresh for every traversal.
pub struct TransformDescriptor<S> {
    pub name: &'static str,
    visitor: FxHashMap<u16, VisitFn<S>>,
}

impl<S> TransformDescriptor<S> {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            visitor: FxHashMap::default(),
        }
    }

    /// Register `callback` for every kind in `kinds`.
    #[must_use]
    pub fn on_kinds<F>(mut self, kinds: &[u16], callback: F) -> Self
    where
        F: Fn(NodeIndex, &mut CompilationUnit, &mut S) -> Result<(), TransformError> + 'static,
    {
        let callback: VisitFn<S> = Rc::new(callback);
        for &kind in kinds {
            self.visitor.insert(kind, Rc::clone(&callback));
        }
        self
    }

    #[must_use]
    pub fn visits(&self, kind: u16) -> bool {
        self.visitor.contains_key(&kind)
    }

    /// Registered kinds, sorted.
    #[must_use]
    pub fn visited_kinds(&self) -> Vec<u16> {
        let mut kinds: Vec<u16> = self.visitor.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }
}

/// Walk `unit` with `descriptor` and return the final per-unit state.
pub fn traverse<S: Default>(
    unit: &mut CompilationUnit,
    descriptor: &TransformDescriptor<S>,
) -> Result<S, TransformError> {
    let mut state = S::default();
    let mut walker = Walker {
        descriptor,
        visit_depth: 0,
    };
    let root = unit.root;
    walker.visit(unit, root, &mut state)?;
    Ok(state)
}

struct Walker<'d, S> {
    descriptor: &'d TransformDescriptor<S>,
    visit_depth: u32,
}

impl<S> Walker<'_, S> {
    fn visit(
        &mut self,
        unit: &mut CompilationUnit,
        idx: NodeIndex,
        state: &mut S,
    ) -> Result<(), TransformError> {
        if self.visit_depth >= MAX_AST_DEPTH {
            tracing::warn!(
                transform = self.descriptor.name,
                node = idx.0,
                "[traverse] depth limit reached, aborting"
            );
            return Err(TransformError::DepthLimitExceeded { node: idx });
        }

        let Some(kind) = unit.arena.get(idx).map(|node| node.kind) else {
            return Ok(());
        };

        if let Some(callback) = self.descriptor.visitor.get(&kind) {
            callback(idx, unit, state)?;
        }

        self.visit_depth += 1;
        let result = unit
            .arena
            .get_children(idx)
            .into_iter()
            .try_for_each(|child| self.visit(unit, child, state));
        self.visit_depth -= 1;
        result
    }
}

#[cfg(test)]
#[path = "../tests/traverse.rs"]
mod tests;
