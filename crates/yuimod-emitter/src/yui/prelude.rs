//! Prelude and dependency list.
//!
//! Both read only resolved declaration data; neither touches the body.

use indexmap::IndexSet;
use yuimod_ast::{Expression, Identifier, Statement};

use super::YuiOptions;
use super::exports::register;
use crate::declarations::{DeclarationCollection, Specifier};
use crate::error::{EmitError, Result};
use crate::module_graph::{Module, ModuleGraph, ModuleId};

/// Names of the modules `module` depends on, for the loader's `requires`.
///
/// Sources from `imports` come first, then those from `exports`; each module
/// appears once, at its first occurrence.
pub fn build_dependencies(graph: &ModuleGraph, module: &Module) -> Result<Vec<String>> {
    let mut seen = IndexSet::new();
    let mut dependencies = Vec::new();

    for collection in [&module.imports, &module.exports] {
        for &source in &collection.modules {
            if !seen.insert(source) {
                continue;
            }
            let name = module_name(graph, module, source)?;
            if !collection
                .declarations
                .iter()
                .any(|declaration| declaration.source == Some(source))
            {
                return Err(EmitError::MissingDeclaration {
                    module: module.relative_path.clone(),
                    source: name.to_string(),
                });
            }
            dependencies.push(name.to_string());
        }
    }

    Ok(dependencies)
}

/// Local bindings for every imported name, then forwarding calls for every
/// re-exported name.
///
/// ```text
/// var a;
/// a = __imports__["dep"]["default"];
/// var ns;
/// ns = __imports__["dep"];
/// __es6_export__("z", __imports__["other"]["z"]);
/// ```
pub fn build_prelude(
    graph: &ModuleGraph,
    module: &Module,
    options: &YuiOptions,
) -> Result<Vec<Statement>> {
    let mut prelude = Vec::new();
    let table = |source: &str| {
        Expression::computed(
            Expression::id(&options.imports_param),
            Expression::string(source),
        )
    };

    for name in &module.imports.names {
        let specifier = find_specifier(module, &module.imports, name)?;
        let Some(source) = source_of(module, &module.imports, specifier)? else {
            return Err(EmitError::MissingDeclaration {
                module: module.relative_path.clone(),
                source: name.clone(),
            });
        };
        let source = module_name(graph, module, source)?;

        let value = match &specifier.from {
            Some(from) => Expression::computed(table(source), Expression::string(from)),
            None => table(source),
        };
        prelude.push(Statement::var(&specifier.name, None));
        prelude.push(Statement::expr(Expression::assign(
            Identifier::new(&specifier.name),
            value,
        )));
    }

    for name in &module.exports.names {
        let specifier = find_specifier(module, &module.exports, name)?;
        // Local exports are registered where they are declared.
        let Some(source) = source_of(module, &module.exports, specifier)? else {
            continue;
        };
        let source = module_name(graph, module, source)?;
        let from = specifier.from.as_deref().unwrap_or(&specifier.name);
        prelude.push(register(
            &options.export_helper,
            &specifier.name,
            Expression::computed(table(source), Expression::string(from)),
        ));
    }

    Ok(prelude)
}

fn find_specifier<'a>(
    module: &Module,
    collection: &'a DeclarationCollection,
    name: &str,
) -> Result<&'a Specifier> {
    collection
        .find_specifier_by_name(name)
        .ok_or_else(|| EmitError::MissingSpecifier {
            module: module.relative_path.clone(),
            name: name.to_string(),
        })
}

fn source_of(
    module: &Module,
    collection: &DeclarationCollection,
    specifier: &Specifier,
) -> Result<Option<ModuleId>> {
    collection
        .declaration_of(specifier)
        .map(|declaration| declaration.source)
        .ok_or_else(|| EmitError::MissingDeclaration {
            module: module.relative_path.clone(),
            source: specifier.name.clone(),
        })
}

fn module_name<'g>(graph: &'g ModuleGraph, module: &Module, id: ModuleId) -> Result<&'g str> {
    graph
        .get(id)
        .map(|source| source.name.as_str())
        .ok_or_else(|| EmitError::UnknownModule {
            module: module.relative_path.clone(),
            id,
        })
}

#[cfg(test)]
#[path = "../tests/prelude_tests.rs"]
mod prelude_tests;
