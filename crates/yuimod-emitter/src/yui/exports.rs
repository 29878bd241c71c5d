//! Export emitter.

use yuimod_ast::{
    Declaration, DefaultDeclaration, ExportNamedDeclaration, ExportSpecifier, Expression, Function,
    Identifier, Statement, VariableDeclaration,
};

/// Every export form the YUI output can express.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportShape {
    /// `export function f() {}`
    Function(Function),
    /// `export var a = 1, { b, c: d } = obj;`
    Variable(VariableDeclaration),
    /// `export { a, b as c };`
    SpecifierList(Vec<ExportSpecifier>),
    /// `export default function f() {}` / `export default class C {}`
    DefaultDeclaration { declaration: Statement, name: Identifier },
    /// `export default <expression>;`
    DefaultExpression(Expression),
    /// `export { a } from "m";`, forwarded by the prelude.
    ReExport,
}

impl ExportShape {
    /// Classify `export ...`. Fails with the node type of an inline
    /// declaration the format cannot express.
    pub fn from_named(export: ExportNamedDeclaration) -> Result<Self, &'static str> {
        match export.declaration {
            Some(Declaration::FunctionDeclaration(func)) if func.id.is_some() => {
                Ok(Self::Function(func))
            }
            Some(Declaration::VariableDeclaration(decl)) => Ok(Self::Variable(decl)),
            Some(other) => Err(other.node_type()),
            None if export.source.is_some() => Ok(Self::ReExport),
            None => Ok(Self::SpecifierList(export.specifiers)),
        }
    }

    /// Classify `export default ...`. Anonymous function and class
    /// declarations have no local identity and are exported as expressions.
    pub fn from_default(declaration: DefaultDeclaration) -> Self {
        match declaration {
            DefaultDeclaration::Function(func) => match func.id.clone() {
                Some(name) => Self::DefaultDeclaration {
                    declaration: Statement::FunctionDeclaration(func),
                    name,
                },
                None => Self::DefaultExpression(Expression::FunctionExpression(func)),
            },
            DefaultDeclaration::Class(class) => match class.id.clone() {
                Some(name) => Self::DefaultDeclaration {
                    declaration: Statement::ClassDeclaration(class),
                    name,
                },
                None => Self::DefaultExpression(Expression::ClassExpression(class)),
            },
            DefaultDeclaration::Expression(expr) => Self::DefaultExpression(expr),
        }
    }

    /// Replacement statements: the kept declaration first, then one
    /// `helper(name, value)` call per exported binding.
    pub fn emit(self, helper: &str) -> Vec<Statement> {
        match self {
            Self::Function(func) => {
                let name = func.id.as_ref().map(|id| id.name.clone()).unwrap_or_default();
                let register = register(helper, &name, Expression::id(&name));
                vec![Statement::FunctionDeclaration(func), register]
            }
            Self::Variable(decl) => {
                let registers: Vec<Statement> = decl
                    .declarations
                    .iter()
                    .flat_map(|declarator| declarator.id.bound_names())
                    .map(|name| register(helper, name, Expression::id(name)))
                    .collect();
                let mut statements = Vec::with_capacity(registers.len() + 1);
                statements.push(Statement::VariableDeclaration(decl));
                statements.extend(registers);
                statements
            }
            Self::SpecifierList(specifiers) => specifiers
                .into_iter()
                .map(|specifier| {
                    register(
                        helper,
                        &specifier.exported.name,
                        Expression::Identifier(specifier.local),
                    )
                })
                .collect(),
            Self::DefaultDeclaration { declaration, name } => {
                vec![
                    declaration,
                    register(helper, "default", Expression::Identifier(name)),
                ]
            }
            Self::DefaultExpression(expr) => vec![register(helper, "default", expr)],
            Self::ReExport => Vec::new(),
        }
    }
}

/// `helper("name", value);`
pub(super) fn register(helper: &str, name: &str, value: Expression) -> Statement {
    Statement::expr(Expression::call(
        Expression::id(helper),
        vec![Expression::string(name), value],
    ))
}

#[cfg(test)]
#[path = "../tests/exports_tests.rs"]
mod exports_tests;
