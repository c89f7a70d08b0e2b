//! NodeArena creation and mutation methods (add_* / replace_* / clone_node).

use super::base::{NodeIndex, NodeList};
use super::node::*;
use super::syntax_kind_ext::*;

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Number of nodes ever allocated (including orphaned ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if !child.is_none() {
            if let Some(info) = self.extended_info.get_mut(child.0 as usize) {
                info.parent = parent;
            }
        }
    }

    fn set_parent_list(&mut self, list: &NodeList, parent: NodeIndex) {
        for &child in &list.nodes {
            self.set_parent(child, parent);
        }
    }

    fn push_node(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        self.extended_info.push(ExtendedNodeInfo::default());
        NodeIndex(index)
    }

    /// Add a token node (no payload), e.g. `this`.
    pub fn add_token(&mut self, kind: u16, pos: u32, end: u32) -> NodeIndex {
        self.push_node(Node::new(kind, pos, end))
    }

    /// Add an identifier node
    pub fn add_identifier(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: IdentifierData,
    ) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(data);
        self.push_node(Node::with_data(kind, pos, end, data_index))
    }

    /// Add a string or numeric literal node
    pub fn add_literal(&mut self, kind: u16, pos: u32, end: u32, data: LiteralData) -> NodeIndex {
        let data_index = self.literals.len() as u32;
        self.literals.push(data);
        self.push_node(Node::with_data(kind, pos, end, data_index))
    }

    /// Add a source file node
    pub fn add_source_file(&mut self, pos: u32, end: u32, data: SourceFileData) -> NodeIndex {
        let statements = data.statements.clone();

        let data_index = self.source_files.len() as u32;
        self.source_files.push(data);
        let parent = self.push_node(Node::with_data(SOURCE_FILE, pos, end, data_index));
        self.set_parent_list(&statements, parent);

        parent
    }

    /// Add a function node (declaration, expression, arrow or method)
    pub fn add_function(&mut self, kind: u16, pos: u32, end: u32, data: FunctionData) -> NodeIndex {
        let name = data.name;
        let parameters = data.parameters.clone();
        let body = data.body;

        let data_index = self.functions.len() as u32;
        self.functions.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(name, parent);
        self.set_parent_list(&parameters, parent);
        self.set_parent(body, parent);

        parent
    }

    /// Add a block node
    pub fn add_block(&mut self, kind: u16, pos: u32, end: u32, data: BlockData) -> NodeIndex {
        let statements = data.statements.clone();

        let data_index = self.blocks.len() as u32;
        self.blocks.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent_list(&statements, parent);

        parent
    }

    /// Add a call expression node
    pub fn add_call_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: CallExprData,
    ) -> NodeIndex {
        let expression = data.expression;
        let arguments = data.arguments.clone();

        let data_index = self.call_exprs.len() as u32;
        self.call_exprs.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(expression, parent);
        self.set_parent_list(&arguments, parent);

        parent
    }

    /// Add a property access node
    pub fn add_access_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: AccessExprData,
    ) -> NodeIndex {
        let expression = data.expression;
        let name_or_argument = data.name_or_argument;

        let data_index = self.access_exprs.len() as u32;
        self.access_exprs.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(expression, parent);
        self.set_parent(name_or_argument, parent);

        parent
    }

    /// Add an await or yield expression node
    pub fn add_unary_expr_ex(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: UnaryExprDataEx,
    ) -> NodeIndex {
        let expression = data.expression;

        let data_index = self.unary_exprs_ex.len() as u32;
        self.unary_exprs_ex.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent(expression, parent);

        parent
    }

    /// Add a try expression node
    pub fn add_try_expr(&mut self, pos: u32, end: u32, data: TryExprData) -> NodeIndex {
        let expression = data.expression;

        let data_index = self.try_exprs.len() as u32;
        self.try_exprs.push(data);
        let parent = self.push_node(Node::with_data(TRY_EXPRESSION, pos, end, data_index));
        self.set_parent(expression, parent);

        parent
    }

    /// Add a return statement node
    pub fn add_return(&mut self, pos: u32, end: u32, data: ReturnData) -> NodeIndex {
        let expression = data.expression;

        let data_index = self.return_data.len() as u32;
        self.return_data.push(data);
        let parent = self.push_node(Node::with_data(RETURN_STATEMENT, pos, end, data_index));
        self.set_parent(expression, parent);

        parent
    }

    /// Add an expression statement node
    pub fn add_expr_statement(
        &mut self,
        pos: u32,
        end: u32,
        data: ExprStatementData,
    ) -> NodeIndex {
        let expression = data.expression;

        let data_index = self.expr_statements.len() as u32;
        self.expr_statements.push(data);
        let parent =
            self.push_node(Node::with_data(EXPRESSION_STATEMENT, pos, end, data_index));
        self.set_parent(expression, parent);

        parent
    }

    /// Add a variable statement node. `flags` carries `node_flags::LET` / `CONST`.
    pub fn add_variable(
        &mut self,
        flags: u32,
        pos: u32,
        end: u32,
        data: VariableData,
    ) -> NodeIndex {
        let declarations = data.declarations.clone();

        let data_index = self.variables.len() as u32;
        self.variables.push(data);
        let mut node = Node::with_data(VARIABLE_STATEMENT, pos, end, data_index);
        node.flags = flags;
        let parent = self.push_node(node);
        self.set_parent_list(&declarations, parent);

        parent
    }

    /// Add a variable declaration node
    pub fn add_variable_declaration(
        &mut self,
        pos: u32,
        end: u32,
        data: VariableDeclarationData,
    ) -> NodeIndex {
        let name = data.name;
        let initializer = data.initializer;

        let data_index = self.variable_declarations.len() as u32;
        self.variable_declarations.push(data);
        let parent =
            self.push_node(Node::with_data(VARIABLE_DECLARATION, pos, end, data_index));
        self.set_parent(name, parent);
        self.set_parent(initializer, parent);

        parent
    }

    /// Add an import declaration node
    pub fn add_import_decl(&mut self, pos: u32, end: u32, data: ImportDeclData) -> NodeIndex {
        let specifiers = data.specifiers.clone();
        let module_specifier = data.module_specifier;

        let data_index = self.import_decls.len() as u32;
        self.import_decls.push(data);
        let parent =
            self.push_node(Node::with_data(IMPORT_DECLARATION, pos, end, data_index));
        self.set_parent_list(&specifiers, parent);
        self.set_parent(module_specifier, parent);

        parent
    }

    /// Add an import specifier node
    pub fn add_specifier(&mut self, pos: u32, end: u32, data: SpecifierData) -> NodeIndex {
        let property_name = data.property_name;
        let name = data.name;

        let data_index = self.specifiers.len() as u32;
        self.specifiers.push(data);
        let parent = self.push_node(Node::with_data(IMPORT_SPECIFIER, pos, end, data_index));
        self.set_parent(property_name, parent);
        self.set_parent(name, parent);

        parent
    }

    /// Add an object or array literal node
    pub fn add_literal_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: LiteralExprData,
    ) -> NodeIndex {
        let elements = data.elements.clone();

        let data_index = self.literal_exprs.len() as u32;
        self.literal_exprs.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));
        self.set_parent_list(&elements, parent);

        parent
    }

    // =========================================================================
    // In-place mutation
    // =========================================================================

    /// Replace the body of a function node. Returns false if `func` is not a
    /// function.
    pub fn set_function_body(&mut self, func: NodeIndex, body: NodeIndex) -> bool {
        let Some(data) = self.get_function_mut(func) else {
            return false;
        };
        data.body = body;
        self.set_parent(body, func);
        true
    }

    /// Insert a statement into a source file or block at `position`
    /// (clamped to the end of the list).
    pub fn insert_statement(
        &mut self,
        container: NodeIndex,
        position: usize,
        statement: NodeIndex,
    ) -> bool {
        let Some(statements) = self.get_statements_mut(container) else {
            return false;
        };
        let position = position.min(statements.nodes.len());
        statements.nodes.insert(position, statement);
        self.set_parent(statement, container);
        true
    }

    /// Turn the node at `idx` into an await/yield expression, keeping its
    /// index (and therefore every reference to it) intact.
    pub fn replace_with_unary_expr_ex(
        &mut self,
        idx: NodeIndex,
        kind: u16,
        data: UnaryExprDataEx,
    ) -> bool {
        if self.get(idx).is_none() {
            return false;
        }
        let expression = data.expression;
        let data_index = self.unary_exprs_ex.len() as u32;
        self.unary_exprs_ex.push(data);
        if let Some(node) = self.nodes.get_mut(idx.0 as usize) {
            node.kind = kind;
            node.data_index = data_index;
        }
        self.set_parent(expression, idx);
        true
    }

    // =========================================================================
    // Cloning
    // =========================================================================

    /// Deep-clone the subtree rooted at `idx` into fresh nodes.
    ///
    /// The clone shares no node indices with the original, so it can be
    /// placed anywhere in the tree without aliasing. Returns `NodeIndex::NONE`
    /// for a missing node.
    pub fn clone_node(&mut self, idx: NodeIndex) -> NodeIndex {
        let Some(node) = self.get(idx).copied() else {
            return NodeIndex::NONE;
        };
        let (pos, end) = (node.pos, node.end);

        let cloned = match node.kind {
            IDENTIFIER => {
                let Some(data) = self.get_identifier(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                self.add_identifier(node.kind, pos, end, data)
            }
            STRING_LITERAL | NUMERIC_LITERAL => {
                let Some(data) = self.get_literal(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                self.add_literal(node.kind, pos, end, data)
            }
            SOURCE_FILE => {
                let Some(data) = self.get_source_file(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                let statements = self.clone_list(&data.statements);
                self.add_source_file(
                    pos,
                    end,
                    SourceFileData {
                        file_name: data.file_name,
                        statements,
                    },
                )
            }
            FUNCTION_DECLARATION | FUNCTION_EXPRESSION | ARROW_FUNCTION | METHOD_DECLARATION => {
                let Some(data) = self.get_function(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                let name = self.clone_opt(data.name);
                let parameters = self.clone_list(&data.parameters);
                let body = self.clone_opt(data.body);
                self.add_function(
                    node.kind,
                    pos,
                    end,
                    FunctionData {
                        name,
                        parameters,
                        body,
                        ..data
                    },
                )
            }
            BLOCK => {
                let Some(data) = self.get_block(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                let statements = self.clone_list(&data.statements);
                self.add_block(node.kind, pos, end, BlockData { statements })
            }
            CALL_EXPRESSION => {
                let Some(data) = self.get_call_expr(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                let expression = self.clone_opt(data.expression);
                let arguments = self.clone_list(&data.arguments);
                self.add_call_expr(
                    node.kind,
                    pos,
                    end,
                    CallExprData {
                        expression,
                        arguments,
                    },
                )
            }
            PROPERTY_ACCESS_EXPRESSION => {
                let Some(data) = self.get_access_expr(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                let expression = self.clone_opt(data.expression);
                let name_or_argument = self.clone_opt(data.name_or_argument);
                self.add_access_expr(
                    node.kind,
                    pos,
                    end,
                    AccessExprData {
                        expression,
                        name_or_argument,
                    },
                )
            }
            AWAIT_EXPRESSION | YIELD_EXPRESSION => {
                let Some(data) = self.get_unary_expr_ex(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                let expression = self.clone_opt(data.expression);
                self.add_unary_expr_ex(
                    node.kind,
                    pos,
                    end,
                    UnaryExprDataEx { expression, ..data },
                )
            }
            TRY_EXPRESSION => {
                let Some(data) = self.get_try_expr(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                let expression = self.clone_opt(data.expression);
                self.add_try_expr(pos, end, TryExprData { expression, ..data })
            }
            RETURN_STATEMENT => {
                let Some(data) = self.get_return(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                let expression = self.clone_opt(data.expression);
                self.add_return(pos, end, ReturnData { expression })
            }
            EXPRESSION_STATEMENT => {
                let Some(data) = self.get_expr_statement(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                let expression = self.clone_opt(data.expression);
                self.add_expr_statement(pos, end, ExprStatementData { expression })
            }
            VARIABLE_STATEMENT => {
                let Some(data) = self.get_variable(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                let declarations = self.clone_list(&data.declarations);
                self.add_variable(node.flags, pos, end, VariableData { declarations })
            }
            VARIABLE_DECLARATION => {
                let Some(data) = self.get_variable_declaration(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                let name = self.clone_opt(data.name);
                let initializer = self.clone_opt(data.initializer);
                self.add_variable_declaration(
                    pos,
                    end,
                    VariableDeclarationData { name, initializer },
                )
            }
            IMPORT_DECLARATION => {
                let Some(data) = self.get_import_decl(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                let specifiers = self.clone_list(&data.specifiers);
                let module_specifier = self.clone_opt(data.module_specifier);
                self.add_import_decl(
                    pos,
                    end,
                    ImportDeclData {
                        specifiers,
                        module_specifier,
                    },
                )
            }
            IMPORT_SPECIFIER => {
                let Some(data) = self.get_specifier(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                let property_name = self.clone_opt(data.property_name);
                let name = self.clone_opt(data.name);
                self.add_specifier(pos, end, SpecifierData { property_name, name })
            }
            OBJECT_LITERAL_EXPRESSION | ARRAY_LITERAL_EXPRESSION => {
                let Some(data) = self.get_literal_expr(&node).cloned() else {
                    return NodeIndex::NONE;
                };
                let elements = self.clone_list(&data.elements);
                self.add_literal_expr(node.kind, pos, end, LiteralExprData { elements })
            }
            _ => self.add_token(node.kind, pos, end),
        };

        if let Some(new_node) = self.nodes.get_mut(cloned.0 as usize) {
            new_node.flags = node.flags;
        }
        cloned
    }

    fn clone_opt(&mut self, idx: NodeIndex) -> NodeIndex {
        if idx.is_none() {
            NodeIndex::NONE
        } else {
            self.clone_node(idx)
        }
    }

    fn clone_list(&mut self, list: &NodeList) -> NodeList {
        NodeList::from_nodes(list.nodes.iter().map(|&idx| self.clone_node(idx)).collect())
    }
}
