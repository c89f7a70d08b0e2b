//! Node header and typed data pools.

use super::base::{NodeIndex, NodeList};

/// Marker for nodes without a data payload (tokens).
pub(crate) const NO_DATA: u32 = u32::MAX;

/// Node header. Kind-specific payload is stored in a pool of `NodeArena`
/// selected by `kind` and addressed by `data_index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: u16,
    pub flags: u32,
    pub pos: u32,
    pub end: u32,
    pub data_index: u32,
}

impl Node {
    #[must_use]
    pub const fn new(kind: u16, pos: u32, end: u32) -> Self {
        Self {
            kind,
            flags: 0,
            pos,
            end,
            data_index: NO_DATA,
        }
    }

    #[must_use]
    pub const fn with_data(kind: u16, pos: u32, end: u32, data_index: u32) -> Self {
        Self {
            kind,
            flags: 0,
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.data_index != NO_DATA
    }
}

/// Parent links, kept out of the hot header.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtendedNodeInfo {
    pub parent: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// String and numeric literals. `text` is the cooked value.
#[derive(Clone, Debug)]
pub struct LiteralData {
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: NodeList,
}

/// Function declarations, expressions, arrows and methods.
#[derive(Clone, Debug)]
pub struct FunctionData {
    pub name: NodeIndex,
    pub parameters: NodeList,
    /// Block for everything except expression-bodied arrows.
    pub body: NodeIndex,
    pub is_async: bool,
    /// `function*`
    pub asterisk_token: bool,
}

#[derive(Clone, Debug)]
pub struct BlockData {
    pub statements: NodeList,
}

#[derive(Clone, Debug)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub arguments: NodeList,
}

#[derive(Clone, Debug)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name_or_argument: NodeIndex,
}

/// Await and yield expressions.
#[derive(Clone, Debug)]
pub struct UnaryExprDataEx {
    pub expression: NodeIndex,
    /// `yield*`
    pub asterisk_token: bool,
}

/// `try await expr` / `try yield expr` / `try expr`.
#[derive(Clone, Debug)]
pub struct TryExprData {
    pub expression: NodeIndex,
    pub is_async: bool,
    pub is_generator: bool,
}

#[derive(Clone, Debug)]
pub struct ReturnData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct VariableData {
    pub declarations: NodeList,
}

#[derive(Clone, Debug)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ImportDeclData {
    pub specifiers: NodeList,
    pub module_specifier: NodeIndex,
}

/// `import { property_name as name }`. `property_name` is NONE when the
/// specifier is not renamed.
#[derive(Clone, Debug)]
pub struct SpecifierData {
    pub property_name: NodeIndex,
    pub name: NodeIndex,
}

/// Object and array literal elements.
#[derive(Clone, Debug)]
pub struct LiteralExprData {
    pub elements: NodeList,
}

/// Arena holding every node of one tree.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    pub extended_info: Vec<ExtendedNodeInfo>,
    pub identifiers: Vec<IdentifierData>,
    pub literals: Vec<LiteralData>,
    pub source_files: Vec<SourceFileData>,
    pub functions: Vec<FunctionData>,
    pub blocks: Vec<BlockData>,
    pub call_exprs: Vec<CallExprData>,
    pub access_exprs: Vec<AccessExprData>,
    pub unary_exprs_ex: Vec<UnaryExprDataEx>,
    pub try_exprs: Vec<TryExprData>,
    pub return_data: Vec<ReturnData>,
    pub expr_statements: Vec<ExprStatementData>,
    pub variables: Vec<VariableData>,
    pub variable_declarations: Vec<VariableDeclarationData>,
    pub import_decls: Vec<ImportDeclData>,
    pub specifiers: Vec<SpecifierData>,
    pub literal_exprs: Vec<LiteralExprData>,
}
