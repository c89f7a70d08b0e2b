//! Transform utilities for syntax analysis.
//!
//! Common functions used by the try-await rewrites.

use crate::parser::{NodeArena, NodeIndex, syntax_kind_ext};

/// Function-like kinds that own their own `await` scope.
#[must_use]
pub const fn is_function_like_kind(kind: u16) -> bool {
    matches!(
        kind,
        syntax_kind_ext::FUNCTION_DECLARATION
            | syntax_kind_ext::FUNCTION_EXPRESSION
            | syntax_kind_ext::ARROW_FUNCTION
            | syntax_kind_ext::METHOD_DECLARATION
    )
}

#[derive(Clone, Copy)]
enum SuspensionTarget {
    /// `await expr`
    Await,
    /// `try await expr`
    AsyncTry,
}

impl SuspensionTarget {
    fn matches(self, arena: &NodeArena, idx: NodeIndex) -> bool {
        let Some(node) = arena.get(idx) else {
            return false;
        };
        match self {
            Self::Await => node.kind == syntax_kind_ext::AWAIT_EXPRESSION,
            Self::AsyncTry => arena
                .get_try_expr(node)
                .is_some_and(|try_expr| try_expr.is_async && !try_expr.is_generator),
        }
    }
}

/// Check if a node contains a reference to `arguments`.
///
/// Used to decide whether a rewritten arrow body still needs the enclosing
/// function's `arguments`. Regular functions have their own `arguments`, so
/// we don't recurse into them; arrows inherit the parent's. Property names
/// (`x.arguments`) are not references.
#[must_use]
pub fn contains_arguments_reference(arena: &NodeArena, node_idx: NodeIndex) -> bool {
    let mut stack = vec![node_idx];
    while let Some(idx) = stack.pop() {
        let Some(node) = arena.get(idx) else {
            continue;
        };
        if is_function_like_kind(node.kind) && node.kind != syntax_kind_ext::ARROW_FUNCTION {
            continue;
        }
        if arena.identifier_text(idx) == Some("arguments") {
            return true;
        }
        if let Some(access) = arena.get_access_expr(node) {
            stack.push(access.expression);
            continue;
        }
        stack.extend(arena.get_children(idx));
    }
    false
}

/// All `await` expressions under `node_idx` that belong to the enclosing
/// function, in source order. The root itself is never treated as a
/// function boundary.
#[must_use]
pub fn collect_await_expressions(arena: &NodeArena, node_idx: NodeIndex) -> Vec<NodeIndex> {
    collect_suspension_points(arena, node_idx, SuspensionTarget::Await)
}

/// All `try await` expressions under `node_idx` that belong to the enclosing
/// function, in source order.
#[must_use]
pub fn collect_async_try_expressions(arena: &NodeArena, node_idx: NodeIndex) -> Vec<NodeIndex> {
    collect_suspension_points(arena, node_idx, SuspensionTarget::AsyncTry)
}

fn collect_suspension_points(
    arena: &NodeArena,
    root: NodeIndex,
    target: SuspensionTarget,
) -> Vec<NodeIndex> {
    let mut found = Vec::new();
    let mut stack = vec![root];
    while let Some(idx) = stack.pop() {
        let Some(node) = arena.get(idx) else {
            continue;
        };
        if idx != root && is_function_like_kind(node.kind) {
            continue;
        }
        if target.matches(arena, idx) {
            found.push(idx);
        }
        // Reverse so the stack pops children in source order.
        stack.extend(arena.get_children(idx).into_iter().rev());
    }
    found
}

#[cfg(test)]
#[path = "../../tests/transform_utils_tests.rs"]
mod tests;
