//! JavaScript syntax tree for the yuimod formatter.
//!
//! The tree is an ESTree-shaped subset: it deserializes directly from the JSON
//! that JavaScript parsers (acorn, esprima, espree) produce, so source parsing
//! stays outside this workspace. The formatter mutates the tree in place and the
//! [`Printer`] renders the result back to JavaScript.
//!
//! - `node`: statements, expressions and module declarations
//! - `builders`: constructors for synthesized nodes
//! - `printer`: tree → JavaScript text

pub mod builders;
pub mod node;
pub mod printer;

pub use node::*;
pub use printer::Printer;
