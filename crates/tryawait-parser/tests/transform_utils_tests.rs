use super::*;
use crate::parser::NodeList;
use crate::parser::node::*;

fn ident(arena: &mut NodeArena, text: &str) -> NodeIndex {
    arena.add_identifier(
        syntax_kind_ext::IDENTIFIER,
        0,
        0,
        IdentifierData {
            escaped_text: text.to_string(),
        },
    )
}

fn await_of(arena: &mut NodeArena, name: &str) -> NodeIndex {
    let operand = ident(arena, name);
    arena.add_unary_expr_ex(
        syntax_kind_ext::AWAIT_EXPRESSION,
        0,
        0,
        UnaryExprDataEx {
            expression: operand,
            asterisk_token: false,
        },
    )
}

fn statement(arena: &mut NodeArena, expression: NodeIndex) -> NodeIndex {
    arena.add_expr_statement(0, 0, ExprStatementData { expression })
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

fn function(arena: &mut NodeArena, kind: u16, body: NodeIndex, is_async: bool) -> NodeIndex {
    arena.add_function(
        kind,
        0,
        0,
        FunctionData {
            name: NodeIndex::NONE,
            parameters: NodeList::new(),
            body,
            is_async,
            asterisk_token: false,
        },
    )
}

#[test]
fn test_function_like_kinds() {
    assert!(is_function_like_kind(syntax_kind_ext::FUNCTION_DECLARATION));
    assert!(is_function_like_kind(syntax_kind_ext::FUNCTION_EXPRESSION));
    assert!(is_function_like_kind(syntax_kind_ext::ARROW_FUNCTION));
    assert!(is_function_like_kind(syntax_kind_ext::METHOD_DECLARATION));
    assert!(!is_function_like_kind(syntax_kind_ext::TRY_EXPRESSION));
    assert!(!is_function_like_kind(syntax_kind_ext::BLOCK));
}

#[test]
fn test_collect_awaits_in_source_order() {
    let mut arena = NodeArena::new();
    let first = await_of(&mut arena, "a");
    let second = await_of(&mut arena, "b");
    let s1 = statement(&mut arena, first);
    let s2 = statement(&mut arena, second);
    let body = block(&mut arena, vec![s1, s2]);

    assert_eq!(collect_await_expressions(&arena, body), vec![first, second]);
}

#[test]
fn test_collect_awaits_skips_nested_functions() {
    let mut arena = NodeArena::new();
    let inner_await = await_of(&mut arena, "inner");
    let inner_stmt = statement(&mut arena, inner_await);
    let inner_body = block(&mut arena, vec![inner_stmt]);
    let inner_fn = function(
        &mut arena,
        syntax_kind_ext::FUNCTION_DECLARATION,
        inner_body,
        true,
    );
    let outer_await = await_of(&mut arena, "outer");
    let outer_stmt = statement(&mut arena, outer_await);
    let outer_body = block(&mut arena, vec![inner_fn, outer_stmt]);

    assert_eq!(collect_await_expressions(&arena, outer_body), vec![outer_await]);
    // A function passed as the root is scanned, not skipped.
    assert_eq!(collect_await_expressions(&arena, inner_fn), vec![inner_await]);
}

#[test]
fn test_no_await() {
    let mut arena = NodeArena::new();
    let value = ident(&mut arena, "value");
    let stmt = statement(&mut arena, value);
    let body = block(&mut arena, vec![stmt]);
    assert!(collect_await_expressions(&arena, body).is_empty());
    assert!(collect_await_expressions(&arena, NodeIndex::NONE).is_empty());
}

#[test]
fn test_collect_async_try_expressions() {
    let mut arena = NodeArena::new();
    let p = ident(&mut arena, "p");
    let async_try = arena.add_try_expr(
        0,
        0,
        TryExprData {
            expression: p,
            is_async: true,
            is_generator: false,
        },
    );
    let q = ident(&mut arena, "q");
    let sync_try = arena.add_try_expr(
        0,
        0,
        TryExprData {
            expression: q,
            is_async: false,
            is_generator: false,
        },
    );
    let r = ident(&mut arena, "r");
    let yield_try = arena.add_try_expr(
        0,
        0,
        TryExprData {
            expression: r,
            is_async: true,
            is_generator: true,
        },
    );
    let s1 = statement(&mut arena, async_try);
    let s2 = statement(&mut arena, sync_try);
    let s3 = statement(&mut arena, yield_try);
    let body = block(&mut arena, vec![s1, s2, s3]);

    assert_eq!(collect_async_try_expressions(&arena, body), vec![async_try]);
}

#[test]
fn test_arguments_reference_through_arrows() {
    let mut arena = NodeArena::new();
    let args = ident(&mut arena, "arguments");
    let stmt = statement(&mut arena, args);
    let arrow_body = block(&mut arena, vec![stmt]);
    let arrow = function(&mut arena, syntax_kind_ext::ARROW_FUNCTION, arrow_body, false);
    let outer_stmt = statement(&mut arena, arrow);
    let body = block(&mut arena, vec![outer_stmt]);

    assert!(contains_arguments_reference(&arena, body));
}

#[test]
fn test_arguments_reference_stops_at_regular_functions() {
    let mut arena = NodeArena::new();
    let args = ident(&mut arena, "arguments");
    let stmt = statement(&mut arena, args);
    let inner_body = block(&mut arena, vec![stmt]);
    let inner = function(
        &mut arena,
        syntax_kind_ext::FUNCTION_EXPRESSION,
        inner_body,
        false,
    );
    let outer_stmt = statement(&mut arena, inner);
    let body = block(&mut arena, vec![outer_stmt]);

    assert!(!contains_arguments_reference(&arena, body));
    assert!(!contains_arguments_reference(&arena, inner));
}

#[test]
fn test_property_named_arguments_is_not_a_reference() {
    let mut arena = NodeArena::new();
    let object = ident(&mut arena, "fn");
    let name = ident(&mut arena, "arguments");
    let access = arena.add_access_expr(
        syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION,
        0,
        0,
        AccessExprData {
            expression: object,
            name_or_argument: name,
        },
    );
    let stmt = statement(&mut arena, access);
    let body = block(&mut arena, vec![stmt]);

    assert!(!contains_arguments_reference(&arena, body));
    assert!(!contains_arguments_reference(&arena, NodeIndex::NONE));
}
