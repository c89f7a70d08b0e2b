//! Node storage for the tryawait syntax tree.
//!
//! Nodes live in a single `NodeArena`. Each `Node` is a small header (kind,
//! flags, span, data index); kind-specific payloads live in typed pools and
//! are reached through the `get_*` accessors.

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod node;
pub use node::{Node, NodeArena};

mod node_access;
mod node_arena;

/// Node kinds.
///
/// Values are stable within a build; hosts key their visitor maps on them.
pub mod syntax_kind_ext {
    pub const UNKNOWN: u16 = 0;

    // Tokens and leaves
    pub const IDENTIFIER: u16 = 1;
    pub const STRING_LITERAL: u16 = 2;
    pub const NUMERIC_LITERAL: u16 = 3;
    pub const THIS_KEYWORD: u16 = 4;

    // Top level
    pub const SOURCE_FILE: u16 = 10;

    // Declarations
    pub const FUNCTION_DECLARATION: u16 = 20;
    pub const VARIABLE_STATEMENT: u16 = 21;
    pub const VARIABLE_DECLARATION: u16 = 22;
    pub const IMPORT_DECLARATION: u16 = 23;
    pub const IMPORT_SPECIFIER: u16 = 24;
    pub const METHOD_DECLARATION: u16 = 25;

    // Statements
    pub const BLOCK: u16 = 40;
    pub const EXPRESSION_STATEMENT: u16 = 41;
    pub const RETURN_STATEMENT: u16 = 42;

    // Expressions
    pub const FUNCTION_EXPRESSION: u16 = 60;
    pub const ARROW_FUNCTION: u16 = 61;
    pub const CALL_EXPRESSION: u16 = 62;
    pub const PROPERTY_ACCESS_EXPRESSION: u16 = 63;
    pub const AWAIT_EXPRESSION: u16 = 64;
    pub const YIELD_EXPRESSION: u16 = 65;
    pub const TRY_EXPRESSION: u16 = 66;
    pub const OBJECT_LITERAL_EXPRESSION: u16 = 67;
    pub const ARRAY_LITERAL_EXPRESSION: u16 = 68;

    /// Human readable kind name for diagnostics and logs.
    #[must_use]
    pub const fn kind_name(kind: u16) -> &'static str {
        match kind {
            IDENTIFIER => "Identifier",
            STRING_LITERAL => "StringLiteral",
            NUMERIC_LITERAL => "NumericLiteral",
            THIS_KEYWORD => "ThisKeyword",
            SOURCE_FILE => "SourceFile",
            FUNCTION_DECLARATION => "FunctionDeclaration",
            VARIABLE_STATEMENT => "VariableStatement",
            VARIABLE_DECLARATION => "VariableDeclaration",
            IMPORT_DECLARATION => "ImportDeclaration",
            IMPORT_SPECIFIER => "ImportSpecifier",
            METHOD_DECLARATION => "MethodDeclaration",
            BLOCK => "Block",
            EXPRESSION_STATEMENT => "ExpressionStatement",
            RETURN_STATEMENT => "ReturnStatement",
            FUNCTION_EXPRESSION => "FunctionExpression",
            ARROW_FUNCTION => "ArrowFunction",
            CALL_EXPRESSION => "CallExpression",
            PROPERTY_ACCESS_EXPRESSION => "PropertyAccessExpression",
            AWAIT_EXPRESSION => "AwaitExpression",
            YIELD_EXPRESSION => "YieldExpression",
            TRY_EXPRESSION => "TryExpression",
            OBJECT_LITERAL_EXPRESSION => "ObjectLiteralExpression",
            ARRAY_LITERAL_EXPRESSION => "ArrayLiteralExpression",
            _ => "Unknown",
        }
    }
}

/// Node flags stored on the node header.
pub mod node_flags {
    pub const NONE: u32 = 0;
    pub const LET: u32 = 1;
    pub const CONST: u32 = 2;
}

#[cfg(test)]
#[path = "../../tests/tests.rs"]
mod tests;
