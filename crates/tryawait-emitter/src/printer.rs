//! Printer - serializes a compilation unit back to JavaScript text.
//!
//! Shared helpers requested during the transform are emitted first, then the
//! file's statements. Indentation is four spaces.

use crate::compilation_unit::CompilationUnit;
use tryawait_parser::parser::node::Node;
use tryawait_parser::parser::{node_flags, syntax_kind_ext};
use tryawait_parser::{NodeArena, NodeIndex};

/// Print `unit` to a string.
#[must_use]
pub fn print_unit(unit: &CompilationUnit) -> String {
    let mut printer = Printer::new(&unit.arena);
    for (helper, local) in unit.helpers.iter() {
        for line in helper.text.replace("{name}", local).lines() {
            printer.write(line);
            printer.output.push('\n');
        }
    }
    for &stmt in unit.statements() {
        printer.emit(stmt);
        printer.output.push('\n');
    }
    printer.output
}

pub struct Printer<'a> {
    arena: &'a NodeArena,
    output: String,
    indent_level: u32,
}

impl<'a> Printer<'a> {
    #[must_use]
    pub fn new(arena: &'a NodeArena) -> Self {
        Self {
            arena,
            output: String::with_capacity(1024),
            indent_level: 0,
        }
    }

    /// Print a single node.
    #[must_use]
    pub fn print_node(mut self, idx: NodeIndex) -> String {
        self.emit(idx);
        self.output
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_line(&mut self) {
        self.output.push('\n');
        for _ in 0..self.indent_level {
            self.output.push_str("    ");
        }
    }

    fn emit_comma_separated(&mut self, nodes: &[NodeIndex]) {
        let mut first = true;
        for &idx in nodes {
            if !first {
                self.write(", ");
            }
            first = false;
            self.emit(idx);
        }
    }

    fn emit(&mut self, idx: NodeIndex) {
        let Some(node) = self.arena.get(idx) else {
            return;
        };

        match node.kind {
            syntax_kind_ext::IDENTIFIER => {
                if let Some(ident) = self.arena.get_identifier(node) {
                    self.write(&ident.escaped_text);
                }
            }
            syntax_kind_ext::STRING_LITERAL => {
                if let Some(lit) = self.arena.get_literal(node) {
                    self.emit_string_literal(&lit.text);
                }
            }
            syntax_kind_ext::NUMERIC_LITERAL => {
                if let Some(lit) = self.arena.get_literal(node) {
                    self.write(&lit.text);
                }
            }
            syntax_kind_ext::THIS_KEYWORD => self.write("this"),
            syntax_kind_ext::FUNCTION_DECLARATION
            | syntax_kind_ext::FUNCTION_EXPRESSION
            | syntax_kind_ext::METHOD_DECLARATION => self.emit_function(node),
            syntax_kind_ext::ARROW_FUNCTION => self.emit_arrow_function(node),
            syntax_kind_ext::BLOCK => {
                if let Some(block) = self.arena.get_block(node) {
                    self.emit_block(&block.statements.nodes);
                }
            }
            syntax_kind_ext::EXPRESSION_STATEMENT => {
                if let Some(stmt) = self.arena.get_expr_statement(node) {
                    self.emit(stmt.expression);
                    self.write(";");
                }
            }
            syntax_kind_ext::RETURN_STATEMENT => {
                if let Some(ret) = self.arena.get_return(node) {
                    self.write("return");
                    if ret.expression.is_some() {
                        self.write(" ");
                        self.emit(ret.expression);
                    }
                    self.write(";");
                }
            }
            syntax_kind_ext::VARIABLE_STATEMENT => {
                if let Some(var) = self.arena.get_variable(node) {
                    let keyword = if node.flags & node_flags::CONST != 0 {
                        "const "
                    } else if node.flags & node_flags::LET != 0 {
                        "let "
                    } else {
                        "var "
                    };
                    self.write(keyword);
                    self.emit_comma_separated(&var.declarations.nodes);
                    self.write(";");
                }
            }
            syntax_kind_ext::VARIABLE_DECLARATION => {
                if let Some(decl) = self.arena.get_variable_declaration(node) {
                    self.emit(decl.name);
                    if decl.initializer.is_some() {
                        self.write(" = ");
                        self.emit(decl.initializer);
                    }
                }
            }
            syntax_kind_ext::IMPORT_DECLARATION => {
                if let Some(import) = self.arena.get_import_decl(node) {
                    self.write("import { ");
                    self.emit_comma_separated(&import.specifiers.nodes);
                    self.write(" } from ");
                    self.emit(import.module_specifier);
                    self.write(";");
                }
            }
            syntax_kind_ext::IMPORT_SPECIFIER => {
                if let Some(spec) = self.arena.get_specifier(node) {
                    if spec.property_name.is_some() {
                        self.emit(spec.property_name);
                        self.write(" as ");
                    }
                    self.emit(spec.name);
                }
            }
            syntax_kind_ext::CALL_EXPRESSION => {
                if let Some(call) = self.arena.get_call_expr(node) {
                    self.emit(call.expression);
                    self.write("(");
                    self.emit_comma_separated(&call.arguments.nodes);
                    self.write(")");
                }
            }
            syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION => {
                if let Some(access) = self.arena.get_access_expr(node) {
                    self.emit(access.expression);
                    self.write(".");
                    self.emit(access.name_or_argument);
                }
            }
            syntax_kind_ext::AWAIT_EXPRESSION => {
                if let Some(unary) = self.arena.get_unary_expr_ex(node) {
                    self.write("await ");
                    self.emit(unary.expression);
                }
            }
            syntax_kind_ext::YIELD_EXPRESSION => {
                if let Some(unary) = self.arena.get_unary_expr_ex(node) {
                    self.write(if unary.asterisk_token { "yield*" } else { "yield" });
                    if unary.expression.is_some() {
                        self.write(" ");
                        self.emit(unary.expression);
                    }
                }
            }
            syntax_kind_ext::TRY_EXPRESSION => {
                if let Some(try_expr) = self.arena.get_try_expr(node) {
                    self.write("try ");
                    if try_expr.is_async {
                        self.write("await ");
                    } else if try_expr.is_generator {
                        self.write("yield ");
                    }
                    self.emit(try_expr.expression);
                }
            }
            syntax_kind_ext::OBJECT_LITERAL_EXPRESSION => {
                if let Some(lit) = self.arena.get_literal_expr(node) {
                    if lit.elements.is_empty() {
                        self.write("{}");
                    } else {
                        self.write("{ ");
                        self.emit_comma_separated(&lit.elements.nodes);
                        self.write(" }");
                    }
                }
            }
            syntax_kind_ext::ARRAY_LITERAL_EXPRESSION => {
                if let Some(lit) = self.arena.get_literal_expr(node) {
                    self.write("[");
                    self.emit_comma_separated(&lit.elements.nodes);
                    self.write("]");
                }
            }
            _ => {}
        }
    }

    fn emit_string_literal(&mut self, text: &str) {
        self.output.push('"');
        for ch in text.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }

    fn emit_function(&mut self, node: &Node) {
        let Some(func) = self.arena.get_function(node) else {
            return;
        };
        if func.is_async {
            self.write("async ");
        }
        if node.kind == syntax_kind_ext::METHOD_DECLARATION {
            if func.asterisk_token {
                self.write("*");
            }
        } else {
            self.write(if func.asterisk_token { "function*" } else { "function" });
            if func.name.is_some() || node.kind == syntax_kind_ext::FUNCTION_EXPRESSION {
                self.write(" ");
            }
        }
        self.emit(func.name);
        self.write("(");
        self.emit_comma_separated(&func.parameters.nodes);
        self.write(") ");
        self.emit(func.body);
    }

    fn emit_arrow_function(&mut self, node: &Node) {
        let Some(func) = self.arena.get_function(node) else {
            return;
        };
        if func.is_async {
            self.write("async ");
        }
        self.write("(");
        self.emit_comma_separated(&func.parameters.nodes);
        self.write(") => ");
        let body_is_object = self
            .arena
            .get(func.body)
            .is_some_and(|body| body.kind == syntax_kind_ext::OBJECT_LITERAL_EXPRESSION);
        if body_is_object {
            self.write("(");
            self.emit(func.body);
            self.write(")");
        } else {
            self.emit(func.body);
        }
    }

    fn emit_block(&mut self, statements: &[NodeIndex]) {
        if statements.is_empty() {
            self.write("{ }");
            return;
        }
        self.write("{");
        self.indent_level += 1;
        for &stmt in statements {
            self.write_line();
            self.emit(stmt);
        }
        self.indent_level -= 1;
        self.write_line();
        self.write("}");
    }
}

#[cfg(test)]
#[path = "../tests/printer.rs"]
mod tests;
