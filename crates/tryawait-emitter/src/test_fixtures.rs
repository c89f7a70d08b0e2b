//! Tree building shortcuts for tests.

use crate::compilation_unit::CompilationUnit;
use tryawait_parser::parser::node::*;
use tryawait_parser::parser::{node_flags, syntax_kind_ext};
use tryawait_parser::{NodeArena, NodeIndex, NodeList};

#[derive(Default)]
pub(crate) struct TreeBuilder {
    pub arena: NodeArena,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ident(&mut self, text: &str) -> NodeIndex {
        self.arena.add_identifier(
            syntax_kind_ext::IDENTIFIER,
            0,
            0,
            IdentifierData {
                escaped_text: text.to_string(),
            },
        )
    }

    pub fn string(&mut self, text: &str) -> NodeIndex {
        self.arena.add_literal(
            syntax_kind_ext::STRING_LITERAL,
            0,
            0,
            LiteralData {
                text: text.to_string(),
            },
        )
    }

    pub fn call(&mut self, callee: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.arena.add_call_expr(
            syntax_kind_ext::CALL_EXPRESSION,
            0,
            0,
            CallExprData {
                expression: callee,
                arguments: NodeList::from_nodes(arguments),
            },
        )
    }

    /// `name(arg, ...)` with identifier arguments.
    pub fn call_named(&mut self, name: &str, arguments: &[&str]) -> NodeIndex {
        let callee = self.ident(name);
        let arguments = arguments.iter().map(|arg| self.ident(arg)).collect();
        self.call(callee, arguments)
    }

    pub fn await_expr(&mut self, expression: NodeIndex) -> NodeIndex {
        self.arena.add_unary_expr_ex(
            syntax_kind_ext::AWAIT_EXPRESSION,
            0,
            0,
            UnaryExprDataEx {
                expression,
                asterisk_token: false,
            },
        )
    }

    pub fn try_expr(&mut self, expression: NodeIndex, is_async: bool, is_generator: bool) -> NodeIndex {
        self.arena.add_try_expr(
            0,
            0,
            TryExprData {
                expression,
                is_async,
                is_generator,
            },
        )
    }

    /// `try await name()`
    pub fn try_await_call(&mut self, name: &str) -> NodeIndex {
        let call = self.call_named(name, &[]);
        self.try_expr(call, true, false)
    }

    pub fn stmt(&mut self, expression: NodeIndex) -> NodeIndex {
        self.arena
            .add_expr_statement(0, 0, ExprStatementData { expression })
    }

    pub fn ret(&mut self, expression: NodeIndex) -> NodeIndex {
        self.arena.add_return(0, 0, ReturnData { expression })
    }

    pub fn block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.arena.add_block(
            syntax_kind_ext::BLOCK,
            0,
            0,
            BlockData {
                statements: NodeList::from_nodes(statements),
            },
        )
    }

    /// `const name = initializer;`
    pub fn const_decl(&mut self, name: &str, initializer: NodeIndex) -> NodeIndex {
        let name = self.ident(name);
        let decl = self
            .arena
            .add_variable_declaration(0, 0, VariableDeclarationData { name, initializer });
        self.arena.add_variable(
            node_flags::CONST,
            0,
            0,
            VariableData {
                declarations: NodeList::from_nodes(vec![decl]),
            },
        )
    }

    fn function(
        &mut self,
        kind: u16,
        name: Option<&str>,
        params: &[&str],
        body: NodeIndex,
        is_async: bool,
        is_generator: bool,
    ) -> NodeIndex {
        let name = name.map_or(NodeIndex::NONE, |name| self.ident(name));
        let parameters = params.iter().map(|param| self.ident(param)).collect();
        self.arena.add_function(
            kind,
            0,
            0,
            FunctionData {
                name,
                parameters: NodeList::from_nodes(parameters),
                body,
                is_async,
                asterisk_token: is_generator,
            },
        )
    }

    pub fn function_decl(
        &mut self,
        name: &str,
        params: &[&str],
        statements: Vec<NodeIndex>,
        is_async: bool,
        is_generator: bool,
    ) -> NodeIndex {
        let body = self.block(statements);
        self.function(
            syntax_kind_ext::FUNCTION_DECLARATION,
            Some(name),
            params,
            body,
            is_async,
            is_generator,
        )
    }

    pub fn function_expr(
        &mut self,
        params: &[&str],
        statements: Vec<NodeIndex>,
        is_async: bool,
        is_generator: bool,
    ) -> NodeIndex {
        let body = self.block(statements);
        self.function(
            syntax_kind_ext::FUNCTION_EXPRESSION,
            None,
            params,
            body,
            is_async,
            is_generator,
        )
    }

    /// Arrow with an arbitrary body (block or expression).
    pub fn arrow(&mut self, params: &[&str], body: NodeIndex, is_async: bool) -> NodeIndex {
        self.function(
            syntax_kind_ext::ARROW_FUNCTION,
            None,
            params,
            body,
            is_async,
            false,
        )
    }

    pub fn method(
        &mut self,
        name: &str,
        statements: Vec<NodeIndex>,
        is_async: bool,
        is_generator: bool,
    ) -> NodeIndex {
        let body = self.block(statements);
        self.function(
            syntax_kind_ext::METHOD_DECLARATION,
            Some(name),
            &[],
            body,
            is_async,
            is_generator,
        )
    }

    pub fn object(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.arena.add_literal_expr(
            syntax_kind_ext::OBJECT_LITERAL_EXPRESSION,
            0,
            0,
            LiteralExprData {
                elements: NodeList::from_nodes(elements),
            },
        )
    }

    /// `import { name } from "module";`
    pub fn import(&mut self, name: &str, module: &str) -> NodeIndex {
        let name = self.ident(name);
        let specifier = self.arena.add_specifier(
            0,
            0,
            SpecifierData {
                property_name: NodeIndex::NONE,
                name,
            },
        );
        let module_specifier = self.string(module);
        self.arena.add_import_decl(
            0,
            0,
            ImportDeclData {
                specifiers: NodeList::from_nodes(vec![specifier]),
                module_specifier,
            },
        )
    }

    /// Wrap `statements` in a source file named `test.js`.
    pub fn finish(mut self, statements: Vec<NodeIndex>) -> CompilationUnit {
        let root = self.arena.add_source_file(
            0,
            0,
            SourceFileData {
                file_name: "test.js".to_string(),
                statements: NodeList::from_nodes(statements),
            },
        );
        match CompilationUnit::new(self.arena, root) {
            Ok(unit) => unit,
            Err(err) => panic!("test tree should have a source file root: {err}"),
        }
    }
}

/// Import declarations at the top level of `unit`, as `(imported, local, module)`.
pub(crate) fn imports(unit: &CompilationUnit) -> Vec<(String, String, String)> {
    let arena = &unit.arena;
    let mut found = Vec::new();
    for &stmt in unit.statements() {
        let Some(import) = arena.get(stmt).and_then(|node| arena.get_import_decl(node)) else {
            continue;
        };
        let module = arena
            .get(import.module_specifier)
            .and_then(|node| arena.get_literal(node))
            .map(|lit| lit.text.clone())
            .unwrap_or_default();
        for &spec_idx in &import.specifiers.nodes {
            let Some(spec) = arena.get(spec_idx).and_then(|node| arena.get_specifier(node)) else {
                continue;
            };
            let local = arena.identifier_text(spec.name).unwrap_or_default().to_string();
            let imported = if spec.property_name.is_some() {
                arena
                    .identifier_text(spec.property_name)
                    .unwrap_or_default()
                    .to_string()
            } else {
                local.clone()
            };
            found.push((imported, local, module.clone()));
        }
    }
    found
}
