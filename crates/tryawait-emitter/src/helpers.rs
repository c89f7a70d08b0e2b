//! Helper resolution.
//!
//! Two ways of getting a reference to a runtime helper into the tree:
//!
//! - `add_named` injects `import { export as _local } from "module"` and
//!   returns an identifier for `_local`. Every call injects a new import;
//!   callers that need one import per file must cache the reference.
//! - `add_helper` resolves a helper from the built-in table. The helper's
//!   declaration is emitted once per file by the printer, no matter how many
//!   references are requested.

use crate::compilation_unit::CompilationUnit;
use crate::error::TransformError;
use rustc_hash::FxHashMap;
use tracing::debug;
use tryawait_parser::parser::node::{IdentifierData, ImportDeclData, LiteralData, SpecifierData};
use tryawait_parser::parser::syntax_kind_ext;
use tryawait_parser::{NodeIndex, NodeList};

/// Built-in runtime helper. `{name}` in `text` is replaced by the helper's
/// local name when printed.
#[derive(Debug)]
pub struct HelperDef {
    pub name: &'static str,
    pub text: &'static str,
}

/// Converts a settled promise into `[error]` or `[undefined, result]`.
pub const TRY_AWAIT_HELPER: HelperDef = HelperDef {
    name: "tryAwait",
    text: r#"function {name}(value) {
    return Promise.resolve(value).then(function (result) {
        return [undefined, result];
    }, function (error) {
        return [error];
    });
}"#,
};

static HELPERS: &[&HelperDef] = &[&TRY_AWAIT_HELPER];

#[must_use]
pub fn lookup_helper(name: &str) -> Option<&'static HelperDef> {
    HELPERS.iter().copied().find(|helper| helper.name == name)
}

/// Shared helpers requested by one compilation unit, in request order.
#[derive(Debug, Default)]
pub struct EmitHelpers {
    used: Vec<(&'static HelperDef, String)>,
    by_name: FxHashMap<&'static str, usize>,
}

impl EmitHelpers {
    /// Local binding name of `helper`, if it has been requested.
    #[must_use]
    pub fn local_name(&self, helper: &str) -> Option<&str> {
        self.by_name
            .get(helper)
            .map(|&slot| self.used[slot].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static HelperDef, &str)> + '_ {
        self.used.iter().map(|(def, local)| (*def, local.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    fn register(&mut self, def: &'static HelperDef, local: String) {
        self.by_name.insert(def.name, self.used.len());
        self.used.push((def, local));
    }
}

impl CompilationUnit {
    /// Inject `import { export_name as _local } from "module"` and return a
    /// reference to `_local`.
    pub fn add_named(
        &mut self,
        export_name: &str,
        module: &str,
    ) -> Result<NodeIndex, TransformError> {
        let local = self.make_unique_name(export_name);

        let imported = self.synthesize_identifier(export_name);
        let local_ident = self.synthesize_identifier(&local);
        let specifier = self.arena.add_specifier(
            0,
            0,
            SpecifierData {
                property_name: imported,
                name: local_ident,
            },
        );
        let module_specifier = self.arena.add_literal(
            syntax_kind_ext::STRING_LITERAL,
            0,
            0,
            LiteralData {
                text: module.to_string(),
            },
        );
        let import = self.arena.add_import_decl(
            0,
            0,
            ImportDeclData {
                specifiers: NodeList::from_nodes(vec![specifier]),
                module_specifier,
            },
        );

        let position = self.leading_import_count();
        if !self.arena.insert_statement(self.root, position, import) {
            return Err(TransformError::MissingRoot);
        }
        debug!(
            file = %self.file_name,
            export = export_name,
            module,
            local = %local,
            "[helpers] injected named import"
        );

        Ok(self.synthesize_identifier(&local))
    }

    /// Resolve a built-in helper and return a fresh reference to it.
    pub fn add_helper(&mut self, name: &str) -> Result<NodeIndex, TransformError> {
        if let Some(local) = self.helpers.local_name(name).map(str::to_string) {
            return Ok(self.synthesize_identifier(&local));
        }

        let def = lookup_helper(name).ok_or_else(|| TransformError::UnknownHelper(name.to_string()))?;
        let local = self.make_unique_name(def.name);
        debug!(
            file = %self.file_name,
            helper = name,
            local = %local,
            "[helpers] registered helper"
        );
        self.helpers.register(def, local.clone());
        Ok(self.synthesize_identifier(&local))
    }

    /// Independent deep copy of a helper reference.
    pub fn clone_reference(&mut self, reference: NodeIndex) -> Result<NodeIndex, TransformError> {
        let cloned = self.arena.clone_node(reference);
        if cloned.is_none() {
            return Err(TransformError::MissingNode(reference));
        }
        Ok(cloned)
    }

    pub(crate) fn synthesize_identifier(&mut self, text: &str) -> NodeIndex {
        self.arena.add_identifier(
            syntax_kind_ext::IDENTIFIER,
            0,
            0,
            IdentifierData {
                escaped_text: text.to_string(),
            },
        )
    }

    fn leading_import_count(&self) -> usize {
        self.statements()
            .iter()
            .take_while(|&&stmt| {
                self.arena
                    .get(stmt)
                    .is_some_and(|node| node.kind == syntax_kind_ext::IMPORT_DECLARATION)
            })
            .count()
    }
}

#[cfg(test)]
#[path = "../tests/helpers.rs"]
mod tests;
