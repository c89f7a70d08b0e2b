//! Node rewriter for the try-await transform.
//!
//! # Transform Patterns
//!
//! ## Async function
//! ```javascript
//! async function foo(a) {
//!     const x = await bar(a);
//!     return x;
//! }
//! ```
//! Becomes:
//! ```javascript
//! function foo(a) {
//!     return _wrap(function* () {
//!         const x = yield bar(a);
//!         return x;
//!     }).apply(this, arguments);
//! }
//! ```
//!
//! Arrows have no `arguments` of their own and use `.call(this)` instead.
//! An arrow whose body reads the enclosing function's `arguments` keeps
//! `.apply(this, arguments)`, so inside the generator `arguments` still holds
//! the enclosing values:
//! ```javascript
//! const f = async () => await g(arguments[0]);
//! ```
//! Becomes:
//! ```javascript
//! const f = () => {
//!     return _wrap(function* () {
//!         return yield g(arguments[0]);
//!     }).apply(this, arguments);
//! };
//! ```
//! An expression-bodied arrow gets a block body first.
//!
//! ## Try expression
//! ```javascript
//! const r = try await load();
//! ```
//! Becomes:
//! ```javascript
//! const r = await _tryAwait(load());
//! ```

use crate::compilation_unit::CompilationUnit;
use crate::error::TransformError;
use tryawait_parser::parser::node::{
    AccessExprData, BlockData, CallExprData, FunctionData, IdentifierData, ReturnData,
    UnaryExprDataEx,
};
use tryawait_parser::parser::syntax_kind_ext;
use tryawait_parser::syntax::transform_utils::{
    collect_async_try_expressions, collect_await_expressions, contains_arguments_reference,
    is_function_like_kind,
};
use tryawait_parser::{NodeArena, NodeIndex, NodeList};

/// Rewrites one eligible node in place so it routes through `helper`.
pub trait ExpressionRewriter {
    fn rewrite(
        &self,
        unit: &mut CompilationUnit,
        node: NodeIndex,
        helper: NodeIndex,
    ) -> Result<(), TransformError>;
}

/// Default rewriter producing generator-wrapped functions and awaited helper
/// calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct WrapTryAwait;

impl ExpressionRewriter for WrapTryAwait {
    fn rewrite(
        &self,
        unit: &mut CompilationUnit,
        node: NodeIndex,
        helper: NodeIndex,
    ) -> Result<(), TransformError> {
        let kind = unit
            .arena
            .get(node)
            .ok_or(TransformError::MissingNode(node))?
            .kind;
        if is_function_like_kind(kind) {
            wrap_function(&mut unit.arena, node, helper)
        } else if kind == syntax_kind_ext::TRY_EXPRESSION {
            wrap_try_expression(&mut unit.arena, node, helper)
        } else {
            Err(TransformError::UnexpectedNode {
                expected: "function or try expression",
                found: syntax_kind_ext::kind_name(kind),
            })
        }
    }
}

fn wrap_function(
    arena: &mut NodeArena,
    func: NodeIndex,
    helper: NodeIndex,
) -> Result<(), TransformError> {
    let is_arrow = arena
        .get(func)
        .is_some_and(|node| node.kind == syntax_kind_ext::ARROW_FUNCTION);
    let original_body = arena
        .get_function_mut(func)
        .ok_or(TransformError::MissingNode(func))?
        .body;
    let forwards_arguments = !is_arrow || contains_arguments_reference(arena, original_body);

    let body = match arena.get(original_body) {
        Some(node) if node.kind == syntax_kind_ext::BLOCK => original_body,
        Some(_) => {
            let ret = arena.add_return(
                0,
                0,
                ReturnData {
                    expression: original_body,
                },
            );
            block(arena, vec![ret])
        }
        None => block(arena, Vec::new()),
    };

    suspend_with_yield(arena, body);

    let generator = arena.add_function(
        syntax_kind_ext::FUNCTION_EXPRESSION,
        0,
        0,
        FunctionData {
            name: NodeIndex::NONE,
            parameters: NodeList::new(),
            body,
            is_async: false,
            asterisk_token: true,
        },
    );
    let wrapped = call(arena, helper, vec![generator]);

    let this = arena.add_token(syntax_kind_ext::THIS_KEYWORD, 0, 0);
    let (method, arguments) = if forwards_arguments {
        let arguments = identifier(arena, "arguments");
        ("apply", vec![this, arguments])
    } else {
        ("call", vec![this])
    };
    let method = identifier(arena, method);
    let callee = arena.add_access_expr(
        syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION,
        0,
        0,
        AccessExprData {
            expression: wrapped,
            name_or_argument: method,
        },
    );
    let invoke = call(arena, callee, arguments);
    let ret = arena.add_return(0, 0, ReturnData { expression: invoke });
    let new_body = block(arena, vec![ret]);

    arena.set_function_body(func, new_body);
    if let Some(data) = arena.get_function_mut(func) {
        data.is_async = false;
    }
    Ok(())
}

/// `await e` -> `yield e` and `try await e` -> `try yield e` for suspension
/// points owned by `body`.
fn suspend_with_yield(arena: &mut NodeArena, body: NodeIndex) {
    for await_idx in collect_await_expressions(arena, body) {
        let Some(expression) = arena
            .get(await_idx)
            .and_then(|node| arena.get_unary_expr_ex(node))
            .map(|data| data.expression)
        else {
            continue;
        };
        arena.replace_with_unary_expr_ex(
            await_idx,
            syntax_kind_ext::YIELD_EXPRESSION,
            UnaryExprDataEx {
                expression,
                asterisk_token: false,
            },
        );
    }

    for try_idx in collect_async_try_expressions(arena, body) {
        if let Some(data) = arena.get_try_expr_mut(try_idx) {
            data.is_async = false;
            data.is_generator = true;
        }
    }
}

fn wrap_try_expression(
    arena: &mut NodeArena,
    try_idx: NodeIndex,
    helper: NodeIndex,
) -> Result<(), TransformError> {
    let operand = arena
        .get_try_expr_mut(try_idx)
        .ok_or(TransformError::MissingNode(try_idx))?
        .expression;
    let wrapped = call(arena, helper, vec![operand]);
    arena.replace_with_unary_expr_ex(
        try_idx,
        syntax_kind_ext::AWAIT_EXPRESSION,
        UnaryExprDataEx {
            expression: wrapped,
            asterisk_token: false,
        },
    );
    Ok(())
}

fn identifier(arena: &mut NodeArena, text: &str) -> NodeIndex {
    arena.add_identifier(
        syntax_kind_ext::IDENTIFIER,
        0,
        0,
        IdentifierData {
            escaped_text: text.to_string(),
        },
    )
}

fn call(arena: &mut NodeArena, callee: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
    arena.add_call_expr(
        syntax_kind_ext::CALL_EXPRESSION,
        0,
        0,
        CallExprData {
            expression: callee,
            arguments: NodeList::from_nodes(arguments),
        },
    )
}

fn block(arena: &mut NodeArena, statements: Vec<NodeIndex>) -> NodeIndex {
    arena.add_block(
        syntax_kind_ext::BLOCK,
        0,
        0,
        BlockData {
            statements: NodeList::from_nodes(statements),
        },
    )
}

#[cfg(test)]
#[path = "../../tests/wrap_try_await.rs"]
mod tests;
