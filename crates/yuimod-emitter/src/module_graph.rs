//! Module graph.
//!
//! The graph owns every module of a run. Modules refer to their siblings by
//! [`ModuleId`] only; cross-module reads go through the graph.

use rustc_hash::FxHashMap;
use yuimod_ast::Program;

use crate::declarations::{DeclarationCollection, collect_declarations};
use crate::error::{EmitError, Result};

/// Unique identifier for a module in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(pub u32);

/// Where a module is in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    /// Syntax tree loaded, declaration collections empty.
    Parsed,
    /// Import/export collections filled in.
    Resolved,
    /// Import/export declarations replaced in the body.
    Rewritten,
    /// Body wrapped in the loader registration call.
    Wrapped,
}

impl std::fmt::Display for ModuleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Parsed => "parsed",
            Self::Resolved => "resolved",
            Self::Rewritten => "rewritten",
            Self::Wrapped => "wrapped",
        })
    }
}

/// One translation unit.
#[derive(Debug)]
pub struct Module {
    pub id: ModuleId,
    /// Loader registry key; other modules address this one by it.
    pub name: String,
    pub relative_path: String,
    pub ast: Program,
    pub imports: DeclarationCollection,
    pub exports: DeclarationCollection,
    pub state: ModuleState,
}

impl Module {
    /// Identifier of this module's namespace object: the name with every
    /// non-identifier character replaced by `$`, plus a `$$` suffix.
    ///
    /// `rsvp/defer` → `rsvp$defer$$`
    pub fn namespace_ident(&self) -> String {
        let mut ident: String = self
            .name
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c == '$' {
                    c
                } else {
                    '$'
                }
            })
            .collect();
        if ident.starts_with(|c: char| c.is_ascii_digit()) {
            ident.insert(0, '_');
        }
        ident.push_str("$$");
        ident
    }

    pub(crate) fn expect_state(&self, expected: ModuleState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(EmitError::StageOrder {
                module: self.relative_path.clone(),
                expected,
                found: self.state,
            })
        }
    }
}

/// Module dependency graph
#[derive(Debug, Default)]
pub struct ModuleGraph {
    /// All modules, indexed by `ModuleId`
    modules: Vec<Module>,
    /// Module name to ID mapping
    by_name: FxHashMap<String, ModuleId>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module. Names must be unique within the graph.
    pub fn add_module(
        &mut self,
        name: impl Into<String>,
        relative_path: impl Into<String>,
        ast: Program,
    ) -> Result<ModuleId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(EmitError::DuplicateModule { name });
        }
        let id = ModuleId(self.modules.len() as u32);
        self.by_name.insert(name.clone(), id);
        self.modules.push(Module {
            id,
            name,
            relative_path: relative_path.into(),
            ast,
            imports: DeclarationCollection::default(),
            exports: DeclarationCollection::default(),
            state: ModuleState::Parsed,
        });
        Ok(id)
    }

    /// Look up a module by its registry name.
    pub fn lookup(&self, name: &str) -> Option<ModuleId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: ModuleId) -> Option<&Module> {
        self.modules.get(id.0 as usize)
    }

    /// # Panics
    ///
    /// Panics if `id` was not produced by this graph.
    pub fn module(&self, id: ModuleId) -> &Module {
        &self.modules[id.0 as usize]
    }

    /// # Panics
    ///
    /// Panics if `id` was not produced by this graph.
    pub fn module_mut(&mut self, id: ModuleId) -> &mut Module {
        &mut self.modules[id.0 as usize]
    }

    /// Module IDs in registration order.
    pub fn ids(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.modules.iter().map(|module| module.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Fill in every parsed module's import/export collections from the
    /// top-level declarations of its syntax tree.
    ///
    /// Sources are resolved with [`resolve_module_name`] against the importing
    /// module's name and must name a module in this graph; a source that
    /// climbs above the root is unresolved.
    pub fn resolve_declarations(&mut self) -> Result<()> {
        for index in 0..self.modules.len() {
            let module = &self.modules[index];
            if module.state != ModuleState::Parsed {
                continue;
            }
            let (imports, exports) = collect_declarations(module, |specifier| {
                resolve_module_name(&module.name, specifier).and_then(|name| self.lookup(&name))
            })?;
            tracing::debug!(
                module = %module.name,
                imports = imports.names.len(),
                exports = exports.names.len(),
                dependencies = imports.modules.len() + exports.modules.len(),
                "resolved declarations"
            );

            let module = &mut self.modules[index];
            module.imports = imports;
            module.exports = exports;
            module.state = ModuleState::Resolved;
        }
        Ok(())
    }
}

/// Resolve a module specifier against the name of the importing module.
///
/// Relative specifiers (`./x`, `../x`) are joined to the importer's directory
/// and normalized; bare specifiers are used as names unchanged. A trailing
/// `.js` is dropped in both cases. `None` when `..` climbs above the root.
pub fn resolve_module_name(importer: &str, specifier: &str) -> Option<String> {
    let specifier = specifier.strip_suffix(".js").unwrap_or(specifier);
    if !(specifier.starts_with("./") || specifier.starts_with("../")) {
        return Some(specifier.to_string());
    }

    let mut segments: Vec<&str> = importer.split('/').collect();
    segments.pop();
    for part in specifier.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }
    Some(segments.join("/"))
}

#[cfg(test)]
#[path = "tests/module_graph_tests.rs"]
mod module_graph_tests;
