//! Stage one: per-node rewrite of a resolved module body.
//!
//! Every top-level statement is first walked for identifier references, which
//! are classified by binding name and handed to the formatter's
//! [`RewriteTable`]. The statement itself is then dispatched: import and export
//! declarations to the formatter's declaration handlers, variable and function
//! declarations to the table. Anything else is kept.
//!
//! Classification is by top-level name only. A nested binding that shadows an
//! imported or exported name is classified as if it were the top-level one.
//!
//! On success the body holds no import/export syntax and the module is
//! [`ModuleState::Rewritten`].

use rustc_hash::FxHashSet;
use tracing::{debug, trace};
use yuimod_ast::{
    ArrowBody, Class, Declaration, DefaultDeclaration, Expression, ForInLeft, ForInit, Function,
    Identifier, MemberExpression, ObjectMember, Pattern, PatternProperty, Statement,
    VariableDeclaration,
};

use crate::declarations::DeclarationKind;
use crate::error::{EmitError, Result};
use crate::formatter::{ModuleFormatter, Replacement, RewriteTable};
use crate::module_graph::{Module, ModuleGraph, ModuleId, ModuleState};

/// Maximum recursion depth for AST traversal to prevent stack overflow.
/// Deeper trees fail with [`EmitError::NestingTooDeep`].
pub const MAX_AST_DEPTH: u32 = 500;

/// How a free identifier relates to the module's top-level bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Imported,
    Exported,
    Local,
}

/// Rewrite one resolved module in place.
pub fn rewrite_module(
    graph: &mut ModuleGraph,
    id: ModuleId,
    formatter: &dyn ModuleFormatter,
) -> Result<()> {
    graph.module(id).expect_state(ModuleState::Resolved)?;
    let body = std::mem::take(&mut graph.module_mut(id).ast.body);

    let module = graph.module(id);
    let rewritten = rewrite_body(module, body, formatter)?;
    if let Some(stmt) = rewritten.iter().find(|stmt| stmt.is_module_declaration()) {
        return Err(EmitError::LeftoverModuleSyntax {
            module: module.relative_path.clone(),
            node_type: stmt.node_type(),
        });
    }
    debug!(
        module = %module.name,
        statements = rewritten.len(),
        "rewrote module body"
    );

    let module = graph.module_mut(id);
    module.ast.body = rewritten;
    module.state = ModuleState::Rewritten;
    Ok(())
}

fn rewrite_body(
    module: &Module,
    body: Vec<Statement>,
    formatter: &dyn ModuleFormatter,
) -> Result<Vec<Statement>> {
    let table = formatter.rewrites();
    let mut references = ReferenceRewriter::new(module, table);
    let mut output = Vec::with_capacity(body.len());

    for mut stmt in body {
        references.visit_statement(&mut stmt)?;
        let node_type = stmt.node_type();

        let replacement = match stmt {
            Statement::ImportDeclaration(import) => {
                formatter.process_import_declaration(module, &import)
            }
            Statement::ExportNamedDeclaration(export) => {
                formatter.process_export_declaration(module, export)?
            }
            Statement::ExportDefaultDeclaration(export) => {
                Replacement::Swap(formatter.default_export(module, export.declaration)?)
            }
            Statement::ExportAllDeclaration(_) => {
                return Err(EmitError::UnsupportedExport {
                    module: module.relative_path.clone(),
                    node_type,
                });
            }
            Statement::VariableDeclaration(decl) => {
                match (table.variable_declaration)(module, &decl) {
                    Some(statements) => Replacement::Swap(statements),
                    None => {
                        output.push(Statement::VariableDeclaration(decl));
                        continue;
                    }
                }
            }
            Statement::FunctionDeclaration(func) => {
                match (table.function_declaration)(module, &func) {
                    Some(statements) => Replacement::Swap(statements),
                    None => {
                        output.push(Statement::FunctionDeclaration(func));
                        continue;
                    }
                }
            }
            other => {
                output.push(other);
                continue;
            }
        };

        trace!(module = %module.name, node_type, ?replacement, "replaced statement");
        output.extend(replacement.into_statements());
    }

    Ok(output)
}

/// Local binding names behind the module's non-forwarded exports.
fn exported_locals(module: &Module) -> FxHashSet<&str> {
    let exports = &module.exports;
    exports
        .specifiers
        .iter()
        .filter_map(|specifier| {
            match exports.declaration_of(specifier)?.kind {
                DeclarationKind::ExportDeclaration => Some(specifier.name.as_str()),
                DeclarationKind::ExportSpecifiers => specifier.from.as_deref(),
                _ => None,
            }
        })
        .collect()
}

/// Walks one statement tree and applies the reference entries of a
/// [`RewriteTable`] to every identifier in reference position.
///
/// Identifiers in binding positions (declarators, parameters, catch
/// parameters) are left alone; assignment targets are references.
struct ReferenceRewriter<'a> {
    module: &'a Module,
    table: &'a RewriteTable,
    exported: FxHashSet<&'a str>,
    /// Current recursion depth for stack overflow protection
    visit_depth: u32,
}

impl<'a> ReferenceRewriter<'a> {
    fn new(module: &'a Module, table: &'a RewriteTable) -> Self {
        Self {
            module,
            table,
            exported: exported_locals(module),
            visit_depth: 0,
        }
    }

    fn kind_of(&self, name: &str) -> ReferenceKind {
        if self.module.imports.names.contains(name) {
            ReferenceKind::Imported
        } else if self.exported.contains(name) {
            ReferenceKind::Exported
        } else {
            ReferenceKind::Local
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.visit_depth >= MAX_AST_DEPTH {
            return Err(EmitError::NestingTooDeep {
                module: self.module.relative_path.clone(),
                limit: MAX_AST_DEPTH,
            });
        }
        self.visit_depth += 1;
        Ok(())
    }

    const fn leave(&mut self) {
        self.visit_depth -= 1;
    }

    /// The table's replacement for a reference to `ident`, if any.
    fn rewrite_reference(&self, ident: &Identifier) -> Option<Expression> {
        let kind = self.kind_of(&ident.name);
        let rewrite = match kind {
            ReferenceKind::Imported => self.table.imported_reference,
            ReferenceKind::Exported => self.table.exported_reference,
            ReferenceKind::Local => self.table.local_reference,
        };
        let replacement = rewrite(self.module, ident)?;
        trace!(name = %ident.name, ?kind, "rewrote reference");
        Some(replacement)
    }

    fn visit_statements(&mut self, statements: &mut [Statement]) -> Result<()> {
        for stmt in statements {
            self.visit_statement(stmt)?;
        }
        Ok(())
    }

    fn visit_statement(&mut self, stmt: &mut Statement) -> Result<()> {
        self.enter()?;

        match stmt {
            Statement::ExpressionStatement(expr) => self.visit_expression(&mut expr.expression)?,
            Statement::VariableDeclaration(decl) => self.visit_variable_declaration(decl)?,
            Statement::FunctionDeclaration(func) => self.visit_function(func)?,
            Statement::ClassDeclaration(class) => self.visit_class(class)?,
            Statement::ReturnStatement(ret) => {
                if let Some(argument) = &mut ret.argument {
                    self.visit_expression(argument)?;
                }
            }
            Statement::IfStatement(stmt) => {
                self.visit_expression(&mut stmt.test)?;
                self.visit_statement(&mut stmt.consequent)?;
                if let Some(alternate) = &mut stmt.alternate {
                    self.visit_statement(alternate)?;
                }
            }
            Statement::BlockStatement(block) => self.visit_statements(&mut block.body)?,
            Statement::ForStatement(stmt) => {
                match &mut stmt.init {
                    Some(ForInit::Variable(decl)) => self.visit_variable_declaration(decl)?,
                    Some(ForInit::Expression(expr)) => self.visit_expression(expr)?,
                    None => {}
                }
                if let Some(test) = &mut stmt.test {
                    self.visit_expression(test)?;
                }
                if let Some(update) = &mut stmt.update {
                    self.visit_expression(update)?;
                }
                self.visit_statement(&mut stmt.body)?;
            }
            Statement::ForInStatement(stmt) | Statement::ForOfStatement(stmt) => {
                match &mut stmt.left {
                    ForInLeft::Variable(decl) => self.visit_variable_declaration(decl)?,
                    ForInLeft::Pattern(target) => self.visit_target(target)?,
                }
                self.visit_expression(&mut stmt.right)?;
                self.visit_statement(&mut stmt.body)?;
            }
            Statement::WhileStatement(stmt) | Statement::DoWhileStatement(stmt) => {
                self.visit_expression(&mut stmt.test)?;
                self.visit_statement(&mut stmt.body)?;
            }
            Statement::TryStatement(stmt) => {
                self.visit_statements(&mut stmt.block.body)?;
                if let Some(handler) = &mut stmt.handler {
                    if let Some(param) = &mut handler.param {
                        self.visit_binding(param)?;
                    }
                    self.visit_statements(&mut handler.body.body)?;
                }
                if let Some(finalizer) = &mut stmt.finalizer {
                    self.visit_statements(&mut finalizer.body)?;
                }
            }
            Statement::SwitchStatement(stmt) => {
                self.visit_expression(&mut stmt.discriminant)?;
                for case in &mut stmt.cases {
                    if let Some(test) = &mut case.test {
                        self.visit_expression(test)?;
                    }
                    self.visit_statements(&mut case.consequent)?;
                }
            }
            Statement::LabeledStatement(stmt) => self.visit_statement(&mut stmt.body)?,
            Statement::ThrowStatement(stmt) => self.visit_expression(&mut stmt.argument)?,
            Statement::ExportNamedDeclaration(export) => match &mut export.declaration {
                Some(Declaration::FunctionDeclaration(func)) => self.visit_function(func)?,
                Some(Declaration::ClassDeclaration(class)) => self.visit_class(class)?,
                Some(Declaration::VariableDeclaration(decl)) => {
                    self.visit_variable_declaration(decl)?;
                }
                None => {}
            },
            Statement::ExportDefaultDeclaration(export) => match &mut export.declaration {
                DefaultDeclaration::Function(func) => self.visit_function(func)?,
                DefaultDeclaration::Class(class) => self.visit_class(class)?,
                DefaultDeclaration::Expression(expr) => self.visit_expression(expr)?,
            },
            // Specifiers and sources are bindings, not references.
            Statement::ImportDeclaration(_)
            | Statement::ExportAllDeclaration(_)
            | Statement::BreakStatement(_)
            | Statement::ContinueStatement(_)
            | Statement::DebuggerStatement
            | Statement::EmptyStatement => {}
        }

        self.leave();
        Ok(())
    }

    fn visit_variable_declaration(&mut self, decl: &mut VariableDeclaration) -> Result<()> {
        for declarator in &mut decl.declarations {
            self.visit_binding(&mut declarator.id)?;
            if let Some(init) = &mut declarator.init {
                self.visit_expression(init)?;
            }
        }
        Ok(())
    }

    fn visit_function(&mut self, func: &mut Function) -> Result<()> {
        for param in &mut func.params {
            self.visit_binding(param)?;
        }
        self.visit_statements(&mut func.body.body)
    }

    fn visit_class(&mut self, class: &mut Class) -> Result<()> {
        if let Some(super_class) = &mut class.super_class {
            self.visit_expression(super_class)?;
        }
        for method in &mut class.body.body {
            if method.computed {
                self.visit_expression(&mut method.key)?;
            }
            self.visit_function(&mut method.value)?;
        }
        Ok(())
    }

    /// A declared pattern: only default values and computed keys hold
    /// references.
    fn visit_binding(&mut self, pattern: &mut Pattern) -> Result<()> {
        self.enter()?;
        match pattern {
            Pattern::Identifier(_) => {}
            Pattern::ObjectPattern(object) => {
                for property in &mut object.properties {
                    match property {
                        PatternProperty::Property(prop) => {
                            if prop.computed {
                                self.visit_expression(&mut prop.key)?;
                            }
                            self.visit_binding(&mut prop.value)?;
                        }
                        PatternProperty::RestElement(rest) => {
                            self.visit_binding(&mut rest.argument)?;
                        }
                    }
                }
            }
            Pattern::ArrayPattern(array) => {
                for element in array.elements.iter_mut().flatten() {
                    self.visit_binding(element)?;
                }
            }
            Pattern::AssignmentPattern(assign) => {
                self.visit_binding(&mut assign.left)?;
                self.visit_expression(&mut assign.right)?;
            }
            Pattern::RestElement(rest) => self.visit_binding(&mut rest.argument)?,
            Pattern::MemberExpression(member) => self.visit_member(member)?,
        }
        self.leave();
        Ok(())
    }

    /// An assignment target: identifiers are references to existing bindings
    /// and may be replaced by another identifier or a member expression.
    fn visit_target(&mut self, pattern: &mut Pattern) -> Result<()> {
        self.enter()?;
        match pattern {
            Pattern::Identifier(ident) => {
                if let Some(replacement) = self.rewrite_reference(ident) {
                    *pattern = match replacement {
                        Expression::Identifier(ident) => Pattern::Identifier(ident),
                        Expression::MemberExpression(member) => Pattern::MemberExpression(member),
                        other => {
                            return Err(EmitError::InvalidAssignmentTarget {
                                module: self.module.relative_path.clone(),
                                node_type: other.node_type(),
                            });
                        }
                    };
                }
            }
            Pattern::ObjectPattern(object) => {
                for property in &mut object.properties {
                    match property {
                        PatternProperty::Property(prop) => {
                            if prop.computed {
                                self.visit_expression(&mut prop.key)?;
                            }
                            let before = prop.shorthand.then(|| prop.value.clone());
                            self.visit_target(&mut prop.value)?;
                            if before.is_some_and(|value| !same_target_name(&value, &prop.value)) {
                                prop.shorthand = false;
                            }
                        }
                        PatternProperty::RestElement(rest) => {
                            self.visit_target(&mut rest.argument)?;
                        }
                    }
                }
            }
            Pattern::ArrayPattern(array) => {
                for element in array.elements.iter_mut().flatten() {
                    self.visit_target(element)?;
                }
            }
            Pattern::AssignmentPattern(assign) => {
                self.visit_target(&mut assign.left)?;
                self.visit_expression(&mut assign.right)?;
            }
            Pattern::RestElement(rest) => self.visit_target(&mut rest.argument)?,
            Pattern::MemberExpression(member) => self.visit_member(member)?,
        }
        self.leave();
        Ok(())
    }

    fn visit_member(&mut self, member: &mut MemberExpression) -> Result<()> {
        self.visit_expression(&mut member.object)?;
        if member.computed {
            self.visit_expression(&mut member.property)?;
        }
        Ok(())
    }

    fn visit_expression(&mut self, expr: &mut Expression) -> Result<()> {
        self.enter()?;

        match expr {
            Expression::Identifier(ident) => {
                if let Some(replacement) = self.rewrite_reference(ident) {
                    *expr = replacement;
                }
            }
            Expression::AssignmentExpression(assign) => {
                let reassigns_export = assign
                    .left
                    .as_identifier()
                    .is_some_and(|target| self.exported.contains(target.name.as_str()));
                self.visit_expression(&mut assign.right)?;
                if reassigns_export {
                    if let Some(replacement) = (self.table.export_reassignment)(self.module, assign)
                    {
                        trace!("rewrote export reassignment");
                        *expr = replacement;
                    }
                } else {
                    self.visit_target(&mut assign.left)?;
                }
            }
            Expression::Literal(_) | Expression::ThisExpression | Expression::Super => {}
            Expression::ArrayExpression(array) => {
                for element in array.elements.iter_mut().flatten() {
                    self.visit_expression(element)?;
                }
            }
            Expression::ObjectExpression(object) => {
                for member in &mut object.properties {
                    match member {
                        ObjectMember::Property(prop) => {
                            if prop.computed {
                                self.visit_expression(&mut prop.key)?;
                            }
                            let before = prop.shorthand.then(|| prop.value.clone());
                            self.visit_expression(&mut prop.value)?;
                            if before.is_some_and(|value| value != prop.value) {
                                prop.shorthand = false;
                            }
                        }
                        ObjectMember::SpreadElement(spread) => {
                            self.visit_expression(&mut spread.argument)?;
                        }
                    }
                }
            }
            Expression::FunctionExpression(func) => self.visit_function(func)?,
            Expression::ArrowFunctionExpression(arrow) => {
                for param in &mut arrow.params {
                    self.visit_binding(param)?;
                }
                match &mut arrow.body {
                    ArrowBody::Block(block) => self.visit_statements(&mut block.body)?,
                    ArrowBody::Expression(body) => self.visit_expression(body)?,
                }
            }
            Expression::ClassExpression(class) => self.visit_class(class)?,
            Expression::UnaryExpression(unary) => self.visit_expression(&mut unary.argument)?,
            Expression::UpdateExpression(update) => self.visit_expression(&mut update.argument)?,
            Expression::BinaryExpression(binary) | Expression::LogicalExpression(binary) => {
                self.visit_expression(&mut binary.left)?;
                self.visit_expression(&mut binary.right)?;
            }
            Expression::ConditionalExpression(cond) => {
                self.visit_expression(&mut cond.test)?;
                self.visit_expression(&mut cond.consequent)?;
                self.visit_expression(&mut cond.alternate)?;
            }
            Expression::CallExpression(call) | Expression::NewExpression(call) => {
                self.visit_expression(&mut call.callee)?;
                for arg in &mut call.arguments {
                    self.visit_expression(arg)?;
                }
            }
            Expression::MemberExpression(member) => self.visit_member(member)?,
            Expression::SequenceExpression(seq) => {
                for expr in &mut seq.expressions {
                    self.visit_expression(expr)?;
                }
            }
            Expression::TemplateLiteral(template) => {
                for expr in &mut template.expressions {
                    self.visit_expression(expr)?;
                }
            }
            Expression::TaggedTemplateExpression(tagged) => {
                self.visit_expression(&mut tagged.tag)?;
                for expr in &mut tagged.quasi.expressions {
                    self.visit_expression(expr)?;
                }
            }
            Expression::SpreadElement(spread) => self.visit_expression(&mut spread.argument)?,
            Expression::YieldExpression(yield_expr) => {
                if let Some(argument) = &mut yield_expr.argument {
                    self.visit_expression(argument)?;
                }
            }
            Expression::AwaitExpression(await_expr) => {
                self.visit_expression(&mut await_expr.argument)?;
            }
        }

        self.leave();
        Ok(())
    }
}

/// Shorthand `{ a }` survives a rewrite only while the target is still `a`.
fn same_target_name(before: &Pattern, after: &Pattern) -> bool {
    match (before, after) {
        (Pattern::AssignmentPattern(before), Pattern::AssignmentPattern(after)) => {
            same_target_name(&before.left, &after.left)
        }
        _ => before == after,
    }
}

#[cfg(test)]
#[path = "tests/rewriter_tests.rs"]
mod rewriter_tests;
