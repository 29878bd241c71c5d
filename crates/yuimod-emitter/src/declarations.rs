//! Import/export declaration collections.
//!
//! Each module carries two collections: `imports` (names this module binds
//! from other modules) and `exports` (names this module exposes, locally or by
//! re-exporting). A collection records the declarations in source order, the
//! specifiers they introduce, and the set of modules they reference.

use indexmap::IndexSet;
use yuimod_ast::{Declaration, ExportNamedDeclaration, ImportSpecifier, Literal, Statement};

use crate::error::{EmitError, Result};
use crate::module_graph::{Module, ModuleId};

/// Index of a declaration within its collection.
pub type DeclarationId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `import ... from "m"` or `import "m"`
    Import,
    /// `export { a, b as c }`
    ExportSpecifiers,
    /// `export { a } from "m"`
    ReExport,
    /// `export function f() {}`, `export var a`, `export class C {}`
    ExportDeclaration,
    /// `export default ...`
    ExportDefault,
}

/// One import or export statement of the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDeclaration {
    pub kind: DeclarationKind,
    /// Module the declaration reads from; `None` for local exports.
    pub source: Option<ModuleId>,
    /// Position of the statement in the original module body.
    pub statement_index: usize,
}

/// One name clause of an import or export declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    /// Local binding name for imports, exported name for exports.
    pub name: String,
    /// The name on the other side of the clause: the source module's export
    /// name for imports and re-exports, the local binding for `export { x as y }`.
    /// `None` for namespace imports and inline declaration exports.
    pub from: Option<String>,
    pub declaration: DeclarationId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationCollection {
    /// Names introduced by this collection, in source order.
    pub names: IndexSet<String>,
    /// Modules referenced by this collection, in order of first reference.
    pub modules: IndexSet<ModuleId>,
    pub declarations: Vec<ModuleDeclaration>,
    pub specifiers: Vec<Specifier>,
}

impl DeclarationCollection {
    pub fn find_specifier_by_name(&self, name: &str) -> Option<&Specifier> {
        self.specifiers.iter().find(|specifier| specifier.name == name)
    }

    /// The declaration `specifier` belongs to.
    pub fn declaration_of(&self, specifier: &Specifier) -> Option<&ModuleDeclaration> {
        self.declarations.get(specifier.declaration)
    }

    pub fn add_declaration(
        &mut self,
        kind: DeclarationKind,
        source: Option<ModuleId>,
        statement_index: usize,
    ) -> DeclarationId {
        if let Some(source) = source {
            self.modules.insert(source);
        }
        self.declarations.push(ModuleDeclaration {
            kind,
            source,
            statement_index,
        });
        self.declarations.len() - 1
    }

    /// Register a specifier. Returns `false` if the name is already taken.
    pub fn add_specifier(
        &mut self,
        name: impl Into<String>,
        from: Option<String>,
        declaration: DeclarationId,
    ) -> bool {
        let name = name.into();
        if !self.names.insert(name.clone()) {
            return false;
        }
        self.specifiers.push(Specifier {
            name,
            from,
            declaration,
        });
        true
    }
}

/// Build the import and export collections of `module` from the top-level
/// statements of its syntax tree. `resolve` maps a source string to a module.
pub fn collect_declarations(
    module: &Module,
    resolve: impl Fn(&str) -> Option<ModuleId>,
) -> Result<(DeclarationCollection, DeclarationCollection)> {
    let mut imports = DeclarationCollection::default();
    let mut exports = DeclarationCollection::default();

    for (index, stmt) in module.ast.body.iter().enumerate() {
        match stmt {
            Statement::ImportDeclaration(import) => {
                let source = resolve_source(module, &import.source, &resolve)?;
                let decl = imports.add_declaration(DeclarationKind::Import, Some(source), index);
                for specifier in &import.specifiers {
                    let from = match specifier {
                        ImportSpecifier::Named { imported, .. } => Some(imported.name.clone()),
                        ImportSpecifier::Default { .. } => Some("default".to_string()),
                        ImportSpecifier::Namespace { .. } => None,
                    };
                    add_unique(module, &mut imports, &specifier.local().name, from, decl)?;
                }
            }
            Statement::ExportNamedDeclaration(export) => {
                collect_named_export(module, &mut exports, export, index, &resolve)?;
            }
            Statement::ExportDefaultDeclaration(_) => {
                let decl = exports.add_declaration(DeclarationKind::ExportDefault, None, index);
                add_unique(module, &mut exports, "default", None, decl)?;
            }
            Statement::ExportAllDeclaration(_) => {
                return Err(EmitError::UnsupportedExport {
                    module: module.relative_path.clone(),
                    node_type: stmt.node_type(),
                });
            }
            _ => {}
        }
    }

    Ok((imports, exports))
}

fn collect_named_export(
    module: &Module,
    exports: &mut DeclarationCollection,
    export: &ExportNamedDeclaration,
    index: usize,
    resolve: &impl Fn(&str) -> Option<ModuleId>,
) -> Result<()> {
    if let Some(declaration) = &export.declaration {
        let decl = exports.add_declaration(DeclarationKind::ExportDeclaration, None, index);
        let names: Vec<&str> = match declaration {
            Declaration::FunctionDeclaration(func) => {
                func.id.iter().map(|id| id.name.as_str()).collect()
            }
            Declaration::ClassDeclaration(class) => {
                class.id.iter().map(|id| id.name.as_str()).collect()
            }
            Declaration::VariableDeclaration(var) => var
                .declarations
                .iter()
                .flat_map(|declarator| declarator.id.bound_names())
                .collect(),
        };
        for name in names {
            add_unique(module, exports, name, None, decl)?;
        }
        return Ok(());
    }

    let (kind, source) = match &export.source {
        Some(source) => (
            DeclarationKind::ReExport,
            Some(resolve_source(module, source, resolve)?),
        ),
        None => (DeclarationKind::ExportSpecifiers, None),
    };
    let decl = exports.add_declaration(kind, source, index);
    for specifier in &export.specifiers {
        add_unique(
            module,
            exports,
            &specifier.exported.name,
            Some(specifier.local.name.clone()),
            decl,
        )?;
    }
    Ok(())
}

fn resolve_source(
    module: &Module,
    source: &Literal,
    resolve: &impl Fn(&str) -> Option<ModuleId>,
) -> Result<ModuleId> {
    let specifier = source.as_str().unwrap_or_default();
    resolve(specifier).ok_or_else(|| EmitError::UnresolvedModule {
        module: module.relative_path.clone(),
        specifier: specifier.to_string(),
    })
}

fn add_unique(
    module: &Module,
    collection: &mut DeclarationCollection,
    name: &str,
    from: Option<String>,
    declaration: DeclarationId,
) -> Result<()> {
    if collection.add_specifier(name, from, declaration) {
        Ok(())
    } else {
        Err(EmitError::DuplicateBinding {
            module: module.relative_path.clone(),
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "tests/declarations_tests.rs"]
mod declarations_tests;
