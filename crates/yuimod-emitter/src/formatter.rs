//! Target-format strategy.
//!
//! A [`ModuleFormatter`] decides, per top-level construct, what replaces it in
//! the output, and assembles whole modules once every body has been rewritten.
//! Formatters share one stage-one driver ([`crate::rewriter`]); they differ in
//! the [`RewriteTable`] they return and in their declaration handlers.

use yuimod_ast::{
    AssignmentExpression, DefaultDeclaration, ExportNamedDeclaration, Expression, Function,
    Identifier, ImportDeclaration, Statement, VariableDeclaration,
};

use crate::error::Result;
use crate::module_graph::{Module, ModuleGraph, ModuleId};

/// What to put in place of one top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    /// Drop the statement.
    Remove,
    /// Put these statements where the original stood, in order.
    Swap(Vec<Statement>),
}

impl Replacement {
    pub fn into_statements(self) -> Vec<Statement> {
        match self {
            Self::Remove => Vec::new(),
            Self::Swap(statements) => statements,
        }
    }
}

/// Rewrite of a top-level declaration. `None` keeps the node as written.
pub type DeclarationRewrite<N> = fn(&Module, &N) -> Option<Vec<Statement>>;

/// Rewrite of one identifier reference. `None` keeps the reference as written.
pub type ReferenceRewrite = fn(&Module, &Identifier) -> Option<Expression>;

/// Rewrite of an assignment to an exported binding. `None` keeps it as written.
pub type ReassignmentRewrite = fn(&Module, &AssignmentExpression) -> Option<Expression>;

/// Per-format rewrite capabilities.
///
/// Each entry is consulted by the rewriter for the nodes it classifies into
/// that bucket. A format that needs no rewrite for a bucket uses [`keep`];
/// [`RewriteTable::PASS_THROUGH`] is the table with every entry set to it.
#[derive(Clone, Copy)]
pub struct RewriteTable {
    pub variable_declaration: DeclarationRewrite<VariableDeclaration>,
    pub function_declaration: DeclarationRewrite<Function>,
    /// References to bindings declared in this module and not exported.
    pub local_reference: ReferenceRewrite,
    /// References to bindings this module exports.
    pub exported_reference: ReferenceRewrite,
    /// References to bindings this module imports.
    pub imported_reference: ReferenceRewrite,
    /// `exported = value` for a locally exported binding.
    pub export_reassignment: ReassignmentRewrite,
}

impl RewriteTable {
    pub const PASS_THROUGH: Self = Self {
        variable_declaration: keep,
        function_declaration: keep,
        local_reference: keep,
        exported_reference: keep,
        imported_reference: keep,
        export_reassignment: keep,
    };
}

impl std::fmt::Debug for RewriteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriteTable").finish_non_exhaustive()
    }
}

/// Leave the node exactly as written.
pub const fn keep<N, R>(_module: &Module, _node: &N) -> Option<R> {
    None
}

pub trait ModuleFormatter {
    /// Expression reading `name` off `module`'s namespace object.
    fn reference(&self, module: &Module, name: &str) -> Expression;

    fn rewrites(&self) -> &RewriteTable;

    /// Statements replacing `export default <declaration>`.
    fn default_export(&self, module: &Module, declaration: DefaultDeclaration)
    -> Result<Vec<Statement>>;

    fn process_export_declaration(
        &self,
        module: &Module,
        export: ExportNamedDeclaration,
    ) -> Result<Replacement>;

    fn process_import_declaration(&self, module: &Module, import: &ImportDeclaration)
    -> Replacement;

    /// Turn every rewritten module in `order` into its final output tree.
    /// Either every module is built or none is touched.
    fn build(&self, graph: &mut ModuleGraph, order: &[ModuleId]) -> Result<()>;
}

#[cfg(test)]
#[path = "tests/formatter_tests.rs"]
mod formatter_tests;
