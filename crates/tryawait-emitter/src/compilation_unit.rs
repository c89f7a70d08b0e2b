//! Compilation unit: one source file's tree plus unit-scoped transform state.

use crate::error::TransformError;
use crate::helpers::EmitHelpers;
use rustc_hash::FxHashSet;
use tryawait_parser::parser::syntax_kind_ext;
use tryawait_parser::{NodeArena, NodeIndex};

pub struct CompilationUnit {
    pub file_name: String,
    pub arena: NodeArena,
    pub root: NodeIndex,
    /// Shared runtime helpers requested while transforming this unit.
    pub helpers: EmitHelpers,
    /// Identifier texts present in the file when the unit was created.
    file_identifiers: FxHashSet<String>,
    generated_names: FxHashSet<String>,
}

impl CompilationUnit {
    /// Wrap a parsed tree. `root` must be a `SOURCE_FILE` node.
    pub fn new(arena: NodeArena, root: NodeIndex) -> Result<Self, TransformError> {
        let file_name = {
            let node = arena.get(root).ok_or(TransformError::MissingRoot)?;
            if node.kind != syntax_kind_ext::SOURCE_FILE {
                return Err(TransformError::MissingRoot);
            }
            arena
                .get_source_file(node)
                .ok_or(TransformError::MissingRoot)?
                .file_name
                .clone()
        };

        let file_identifiers = arena
            .identifiers
            .iter()
            .map(|ident| ident.escaped_text.clone())
            .collect();

        Ok(Self {
            file_name,
            arena,
            root,
            helpers: EmitHelpers::default(),
            file_identifiers,
            generated_names: FxHashSet::default(),
        })
    }

    /// Generate a name derived from `base` that doesn't collide with any
    /// identifier in the source file or any previously generated name.
    ///
    /// Generates `_base`, `_base2`, `_base3`, ...
    pub fn make_unique_name(&mut self, base: &str) -> String {
        let base = base.trim_start_matches('_');
        let mut suffix = 1u32;
        loop {
            let name = if suffix == 1 {
                format!("_{base}")
            } else {
                format!("_{base}{suffix}")
            };
            suffix += 1;

            if !self.file_identifiers.contains(&name) && !self.generated_names.contains(&name) {
                self.generated_names.insert(name.clone());
                return name;
            }
        }
    }

    /// Statements of the root source file.
    #[must_use]
    pub fn statements(&self) -> &[NodeIndex] {
        self.arena
            .get(self.root)
            .and_then(|node| self.arena.get_source_file(node))
            .map_or(&[], |sf| sf.statements.nodes.as_slice())
    }
}

#[cfg(test)]
#[path = "../tests/compilation_unit.rs"]
mod tests;
