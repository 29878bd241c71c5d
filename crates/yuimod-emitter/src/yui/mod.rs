//! `YUI.add()` target format.
//!
//! Each module becomes one loader registration call:
//!
//! ```text
//! YUI.add("name", function (Y, NAME, __imports__, __exports__) {
//!     "use strict";
//!     function __es6_export__(name, value) {
//!         __exports__[name] = value;
//!     }
//!     ...prelude, rewritten body...
//!     return __exports__;
//! }, "@VERSION@", {
//!     "es": true,
//!     "requires": ["dep"]
//! });
//! ```
//!
//! Exported bindings are captured by the registration helper, so local code is
//! never rewritten: every entry of the rewrite table is a pass-through.

mod exports;
mod prelude;
mod wrapper;

pub use exports::ExportShape;
pub use prelude::{build_dependencies, build_prelude};

use serde::{Deserialize, Serialize};
use tracing::debug;
use yuimod_ast::{
    DefaultDeclaration, ExportNamedDeclaration, Expression, ImportDeclaration, Statement,
};

use crate::error::{EmitError, Result};
use crate::formatter::{ModuleFormatter, Replacement, RewriteTable};
use crate::module_graph::{Module, ModuleGraph, ModuleId, ModuleState};

/// Capability table for `YUI.add()` output.
pub const YUI_REWRITES: RewriteTable = RewriteTable::PASS_THROUGH;

/// Runtime names emitted into every wrapped module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YuiOptions {
    /// Loader registration entry point, dotted.
    pub loader: String,
    /// Name of the per-module export registration helper.
    pub export_helper: String,
    pub imports_param: String,
    pub exports_param: String,
    /// First factory parameter: the YUI instance.
    pub host_param: String,
    /// Second factory parameter: the module's own name.
    pub name_param: String,
    /// Version marker passed to the loader.
    pub version: String,
}

impl Default for YuiOptions {
    fn default() -> Self {
        Self {
            loader: "YUI.add".to_string(),
            export_helper: "__es6_export__".to_string(),
            imports_param: "__imports__".to_string(),
            exports_param: "__exports__".to_string(),
            host_param: "Y".to_string(),
            name_param: "NAME".to_string(),
            version: "@VERSION@".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct YuiFormatter {
    options: YuiOptions,
}

impl YuiFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_options(options: YuiOptions) -> Self {
        Self { options }
    }

    pub const fn options(&self) -> &YuiOptions {
        &self.options
    }
}

impl ModuleFormatter for YuiFormatter {
    /// `rsvp/defer` + `isFunction` → `rsvp$defer$$.isFunction`
    fn reference(&self, module: &Module, name: &str) -> Expression {
        Expression::member(Expression::id(module.namespace_ident()), name)
    }

    fn rewrites(&self) -> &RewriteTable {
        &YUI_REWRITES
    }

    fn default_export(
        &self,
        _module: &Module,
        declaration: DefaultDeclaration,
    ) -> Result<Vec<Statement>> {
        Ok(ExportShape::from_default(declaration).emit(&self.options.export_helper))
    }

    fn process_export_declaration(
        &self,
        module: &Module,
        export: ExportNamedDeclaration,
    ) -> Result<Replacement> {
        let shape = ExportShape::from_named(export).map_err(|node_type| {
            EmitError::UnsupportedExport {
                module: module.relative_path.clone(),
                node_type,
            }
        })?;
        Ok(match shape {
            ExportShape::ReExport => Replacement::Remove,
            shape => Replacement::Swap(shape.emit(&self.options.export_helper)),
        })
    }

    fn process_import_declaration(
        &self,
        _module: &Module,
        _import: &ImportDeclaration,
    ) -> Replacement {
        Replacement::Remove
    }

    fn build(&self, graph: &mut ModuleGraph, order: &[ModuleId]) -> Result<()> {
        // Everything fallible runs before the first module is touched.
        let mut prepared = Vec::with_capacity(order.len());
        for &id in order {
            let module = graph.get(id).ok_or_else(|| EmitError::UnknownModule {
                module: "build order".to_string(),
                id,
            })?;
            module.expect_state(ModuleState::Rewritten)?;
            let prelude = build_prelude(graph, module, &self.options)?;
            let dependencies = build_dependencies(graph, module)?;
            prepared.push((id, prelude, dependencies));
        }

        for (id, prelude, dependencies) in prepared {
            wrapper::wrap_module(graph.module_mut(id), prelude, dependencies, &self.options);
        }
        debug!(modules = order.len(), "built YUI modules");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/yui_tests.rs"]
mod yui_tests;
