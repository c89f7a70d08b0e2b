//! Typed node accessors and child enumeration.

use super::base::{NodeIndex, NodeList};
use super::node::*;
use super::syntax_kind_ext::*;

macro_rules! pool_accessor {
    ($get:ident, $get_mut:ident, $pool:ident, $data:ty, $($kind:pat_param)|+) => {
        #[inline]
        pub fn $get(&self, node: &Node) -> Option<&$data> {
            if node.has_data() && matches!(node.kind, $($kind)|+) {
                self.$pool.get(node.data_index as usize)
            } else {
                None
            }
        }

        #[inline]
        pub fn $get_mut(&mut self, idx: NodeIndex) -> Option<&mut $data> {
            let node = *self.nodes.get(idx.0 as usize)?;
            if node.has_data() && matches!(node.kind, $($kind)|+) {
                self.$pool.get_mut(node.data_index as usize)
            } else {
                None
            }
        }
    };
}

impl NodeArena {
    #[inline]
    #[must_use]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.0 as usize)
    }

    #[must_use]
    pub fn parent(&self, idx: NodeIndex) -> NodeIndex {
        self.extended_info
            .get(idx.0 as usize)
            .map_or(NodeIndex::NONE, |info| info.parent)
    }

    pool_accessor!(get_identifier, get_identifier_mut, identifiers, IdentifierData, IDENTIFIER);
    pool_accessor!(
        get_literal,
        get_literal_mut,
        literals,
        LiteralData,
        STRING_LITERAL | NUMERIC_LITERAL
    );
    pool_accessor!(get_source_file, get_source_file_mut, source_files, SourceFileData, SOURCE_FILE);
    pool_accessor!(
        get_function,
        get_function_mut,
        functions,
        FunctionData,
        FUNCTION_DECLARATION | FUNCTION_EXPRESSION | ARROW_FUNCTION | METHOD_DECLARATION
    );
    pool_accessor!(get_block, get_block_mut, blocks, BlockData, BLOCK);
    pool_accessor!(get_call_expr, get_call_expr_mut, call_exprs, CallExprData, CALL_EXPRESSION);
    pool_accessor!(
        get_access_expr,
        get_access_expr_mut,
        access_exprs,
        AccessExprData,
        PROPERTY_ACCESS_EXPRESSION
    );
    pool_accessor!(
        get_unary_expr_ex,
        get_unary_expr_ex_mut,
        unary_exprs_ex,
        UnaryExprDataEx,
        AWAIT_EXPRESSION | YIELD_EXPRESSION
    );
    pool_accessor!(get_try_expr, get_try_expr_mut, try_exprs, TryExprData, TRY_EXPRESSION);
    pool_accessor!(get_return, get_return_mut, return_data, ReturnData, RETURN_STATEMENT);
    pool_accessor!(
        get_expr_statement,
        get_expr_statement_mut,
        expr_statements,
        ExprStatementData,
        EXPRESSION_STATEMENT
    );
    pool_accessor!(get_variable, get_variable_mut, variables, VariableData, VARIABLE_STATEMENT);
    pool_accessor!(
        get_variable_declaration,
        get_variable_declaration_mut,
        variable_declarations,
        VariableDeclarationData,
        VARIABLE_DECLARATION
    );
    pool_accessor!(
        get_import_decl,
        get_import_decl_mut,
        import_decls,
        ImportDeclData,
        IMPORT_DECLARATION
    );
    pool_accessor!(get_specifier, get_specifier_mut, specifiers, SpecifierData, IMPORT_SPECIFIER);
    pool_accessor!(
        get_literal_expr,
        get_literal_expr_mut,
        literal_exprs,
        LiteralExprData,
        OBJECT_LITERAL_EXPRESSION | ARRAY_LITERAL_EXPRESSION
    );

    /// Identifier text of `idx`, if it is an identifier.
    #[must_use]
    pub fn identifier_text(&self, idx: NodeIndex) -> Option<&str> {
        let node = self.get(idx)?;
        self.get_identifier(node)
            .map(|ident| ident.escaped_text.as_str())
    }

    /// Statement list of a source file or block.
    pub fn get_statements_mut(&mut self, idx: NodeIndex) -> Option<&mut NodeList> {
        let kind = self.get(idx)?.kind;
        match kind {
            SOURCE_FILE => self.get_source_file_mut(idx).map(|sf| &mut sf.statements),
            BLOCK => self.get_block_mut(idx).map(|block| &mut block.statements),
            _ => None,
        }
    }

    /// Children of `idx` in source order.
    #[must_use]
    pub fn get_children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let Some(node) = self.get(idx) else {
            return Vec::new();
        };

        let mut children = Vec::new();
        let mut push = |child: NodeIndex| {
            if child.is_some() {
                children.push(child);
            }
        };

        match node.kind {
            SOURCE_FILE => {
                if let Some(sf) = self.get_source_file(node) {
                    sf.statements.nodes.iter().copied().for_each(&mut push);
                }
            }
            FUNCTION_DECLARATION | FUNCTION_EXPRESSION | ARROW_FUNCTION | METHOD_DECLARATION => {
                if let Some(func) = self.get_function(node) {
                    push(func.name);
                    func.parameters.nodes.iter().copied().for_each(&mut push);
                    push(func.body);
                }
            }
            BLOCK => {
                if let Some(block) = self.get_block(node) {
                    block.statements.nodes.iter().copied().for_each(&mut push);
                }
            }
            CALL_EXPRESSION => {
                if let Some(call) = self.get_call_expr(node) {
                    push(call.expression);
                    call.arguments.nodes.iter().copied().for_each(&mut push);
                }
            }
            PROPERTY_ACCESS_EXPRESSION => {
                if let Some(access) = self.get_access_expr(node) {
                    push(access.expression);
                    push(access.name_or_argument);
                }
            }
            AWAIT_EXPRESSION | YIELD_EXPRESSION => {
                if let Some(unary) = self.get_unary_expr_ex(node) {
                    push(unary.expression);
                }
            }
            TRY_EXPRESSION => {
                if let Some(try_expr) = self.get_try_expr(node) {
                    push(try_expr.expression);
                }
            }
            RETURN_STATEMENT => {
                if let Some(ret) = self.get_return(node) {
                    push(ret.expression);
                }
            }
            EXPRESSION_STATEMENT => {
                if let Some(stmt) = self.get_expr_statement(node) {
                    push(stmt.expression);
                }
            }
            VARIABLE_STATEMENT => {
                if let Some(var) = self.get_variable(node) {
                    var.declarations.nodes.iter().copied().for_each(&mut push);
                }
            }
            VARIABLE_DECLARATION => {
                if let Some(decl) = self.get_variable_declaration(node) {
                    push(decl.name);
                    push(decl.initializer);
                }
            }
            IMPORT_DECLARATION => {
                if let Some(import) = self.get_import_decl(node) {
                    import.specifiers.nodes.iter().copied().for_each(&mut push);
                    push(import.module_specifier);
                }
            }
            IMPORT_SPECIFIER => {
                if let Some(spec) = self.get_specifier(node) {
                    push(spec.property_name);
                    push(spec.name);
                }
            }
            OBJECT_LITERAL_EXPRESSION | ARRAY_LITERAL_EXPRESSION => {
                if let Some(lit) = self.get_literal_expr(node) {
                    lit.elements.nodes.iter().copied().for_each(&mut push);
                }
            }
            _ => {}
        }

        children
    }
}
