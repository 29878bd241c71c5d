//! Emitter errors.
//!
//! Every error is fatal for the whole batch: the input is already resolved, so
//! an error means either an unsupported source shape or an inconsistency in the
//! resolved declaration data.

use crate::module_graph::{ModuleId, ModuleState};

pub type Result<T> = std::result::Result<T, EmitError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// An export whose shape this format cannot express.
    UnsupportedExport {
        module: String,
        node_type: &'static str,
    },
    /// A source module listed in a declaration collection with no declaration
    /// that imports or re-exports from it.
    MissingDeclaration { module: String, source: String },
    /// A name listed in a declaration collection with no specifier behind it.
    MissingSpecifier { module: String, name: String },
    /// A module specifier that names no module in the graph.
    UnresolvedModule { module: String, specifier: String },
    /// A `ModuleId` that does not belong to the graph.
    UnknownModule { module: String, id: ModuleId },
    /// The same local or exported name declared twice.
    DuplicateBinding { module: String, name: String },
    /// Two modules registered under one name.
    DuplicateModule { name: String },
    /// A pipeline stage run against a module in the wrong state.
    StageOrder {
        module: String,
        expected: ModuleState,
        found: ModuleState,
    },
    /// Import/export syntax left in a body after the rewrite stage.
    LeftoverModuleSyntax {
        module: String,
        node_type: &'static str,
    },
    /// A body nested deeper than the rewriter walks.
    NestingTooDeep { module: String, limit: u32 },
    /// A reference rewrite produced a node that cannot be assigned to.
    InvalidAssignmentTarget {
        module: String,
        node_type: &'static str,
    },
}

impl std::fmt::Display for EmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedExport { module, node_type } => write!(
                f,
                "unexpected export style in {module}, found a declaration of type: {node_type}"
            ),
            Self::MissingDeclaration { module, source } => write!(
                f,
                "no matching declaration for source module `{source}` in {module}"
            ),
            Self::MissingSpecifier { module, name } => {
                write!(f, "no specifier found for name `{name}` in {module}")
            }
            Self::UnresolvedModule { module, specifier } => {
                write!(f, "cannot resolve module `{specifier}` from {module}")
            }
            Self::UnknownModule { module, id } => {
                write!(f, "{module} refers to unknown module #{}", id.0)
            }
            Self::DuplicateBinding { module, name } => {
                write!(f, "duplicate binding `{name}` in {module}")
            }
            Self::DuplicateModule { name } => {
                write!(f, "module `{name}` is registered more than once")
            }
            Self::StageOrder {
                module,
                expected,
                found,
            } => write!(f, "{module} is {found}, expected it to be {expected}"),
            Self::LeftoverModuleSyntax { module, node_type } => write!(
                f,
                "{module} still contains a {node_type} after rewriting"
            ),
            Self::NestingTooDeep { module, limit } => {
                write!(f, "{module} is nested more than {limit} levels deep")
            }
            Self::InvalidAssignmentTarget { module, node_type } => write!(
                f,
                "rewriting an assignment target in {module} produced a {node_type}"
            ),
        }
    }
}

impl std::error::Error for EmitError {}
