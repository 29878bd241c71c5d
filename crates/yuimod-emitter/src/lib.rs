//! ES module to loader-registration rewriting.
//!
//! The pipeline runs in two explicit stages over a [`ModuleGraph`]:
//!
//! 1. [`rewriter::rewrite_module`] replaces import/export declarations in each
//!    resolved body, driven by a [`ModuleFormatter`].
//! 2. [`ModuleFormatter::build`] assembles every rewritten module into its
//!    final wrapped tree, in the dependency order supplied by the caller.
//!
//! [`transpile`] runs both stages.

pub mod declarations;
pub mod error;
pub mod formatter;
pub mod module_graph;
pub mod rewriter;
pub mod yui;

pub use declarations::{DeclarationCollection, DeclarationKind, ModuleDeclaration, Specifier};
pub use error::{EmitError, Result};
pub use formatter::{ModuleFormatter, Replacement, RewriteTable};
pub use module_graph::{Module, ModuleGraph, ModuleId, ModuleState, resolve_module_name};
pub use yui::{YuiFormatter, YuiOptions};

/// Resolve, rewrite and build every module in `order`.
///
/// `order` is execution order: each module after the modules it depends on.
/// On error the graph must be discarded; no module is wrapped unless all are.
pub fn transpile(
    graph: &mut ModuleGraph,
    order: &[ModuleId],
    formatter: &dyn ModuleFormatter,
) -> Result<()> {
    graph.resolve_declarations()?;
    for &id in order {
        if graph.get(id).is_none() {
            return Err(EmitError::UnknownModule {
                module: "build order".to_string(),
                id,
            });
        }
        rewriter::rewrite_module(graph, id, formatter)?;
    }
    formatter.build(graph, order)
}

#[cfg(test)]
#[path = "../tests/fixtures/estree.rs"]
mod estree;
