//! JavaScript printer.
//!
//! Walks the syntax tree and writes JavaScript text. Parentheses are not part of
//! the tree, so the printer inserts them from operator precedence.

use std::fmt::Write as _;

use serde_json::Value;

use crate::node::*;

/// Operator precedence levels, loosest first.
mod prec {
    pub const SEQUENCE: u8 = 1;
    pub const ASSIGNMENT: u8 = 2;
    pub const CONDITIONAL: u8 = 3;
    pub const NULLISH: u8 = 4;
    pub const LOGICAL_OR: u8 = 5;
    pub const LOGICAL_AND: u8 = 6;
    pub const BITWISE_OR: u8 = 7;
    pub const BITWISE_XOR: u8 = 8;
    pub const BITWISE_AND: u8 = 9;
    pub const EQUALITY: u8 = 10;
    pub const RELATIONAL: u8 = 11;
    pub const SHIFT: u8 = 12;
    pub const ADDITIVE: u8 = 13;
    pub const MULTIPLICATIVE: u8 = 14;
    pub const EXPONENT: u8 = 15;
    pub const UNARY: u8 = 16;
    pub const POSTFIX: u8 = 17;
    pub const CALL: u8 = 18;
    pub const NEW: u8 = 19;
    pub const PRIMARY: u8 = 20;
}

/// `??` cannot be mixed with `||` or `&&` without parentheses.
fn mixes_nullish(operator: &str, operand: &Expression) -> bool {
    let Expression::LogicalExpression(inner) = operand else {
        return false;
    };
    match operator {
        "??" => matches!(inner.operator.as_str(), "||" | "&&"),
        "||" | "&&" => inner.operator == "??",
        _ => false,
    }
}

/// A decimal integer literal, which would swallow a following `.` as its
/// fraction: `1.toString` does not parse.
fn is_bare_integer(lit: &Literal) -> bool {
    if !lit.value.is_number() {
        return false;
    }
    let text = lit.raw.clone().unwrap_or_else(|| lit.value.to_string());
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn binary_precedence(operator: &str) -> u8 {
    match operator {
        "??" => prec::NULLISH,
        "||" => prec::LOGICAL_OR,
        "&&" => prec::LOGICAL_AND,
        "|" => prec::BITWISE_OR,
        "^" => prec::BITWISE_XOR,
        "&" => prec::BITWISE_AND,
        "==" | "!=" | "===" | "!==" => prec::EQUALITY,
        "<" | ">" | "<=" | ">=" | "instanceof" | "in" => prec::RELATIONAL,
        "<<" | ">>" | ">>>" => prec::SHIFT,
        "+" | "-" => prec::ADDITIVE,
        "*" | "/" | "%" => prec::MULTIPLICATIVE,
        "**" => prec::EXPONENT,
        _ => prec::PRIMARY,
    }
}

fn precedence(expr: &Expression) -> u8 {
    match expr {
        Expression::SequenceExpression(_) => prec::SEQUENCE,
        Expression::AssignmentExpression(_)
        | Expression::ArrowFunctionExpression(_)
        | Expression::YieldExpression(_)
        | Expression::SpreadElement(_) => prec::ASSIGNMENT,
        Expression::ConditionalExpression(_) => prec::CONDITIONAL,
        Expression::BinaryExpression(bin) | Expression::LogicalExpression(bin) => {
            binary_precedence(&bin.operator)
        }
        Expression::UnaryExpression(_) | Expression::AwaitExpression(_) => prec::UNARY,
        Expression::UpdateExpression(update) if update.prefix => prec::UNARY,
        Expression::UpdateExpression(_) => prec::POSTFIX,
        Expression::CallExpression(_) | Expression::TaggedTemplateExpression(_) => prec::CALL,
        Expression::NewExpression(_) | Expression::MemberExpression(_) => prec::NEW,
        _ => prec::PRIMARY,
    }
}

/// Whether an expression statement would begin with `function`, `class` or `{`
/// and so has to be parenthesized to stay an expression.
fn starts_like_declaration(expr: &Expression) -> bool {
    match expr {
        Expression::FunctionExpression(_)
        | Expression::ClassExpression(_)
        | Expression::ObjectExpression(_) => true,
        Expression::CallExpression(call) => starts_like_declaration(&call.callee),
        Expression::MemberExpression(member) => starts_like_declaration(&member.object),
        Expression::BinaryExpression(bin) | Expression::LogicalExpression(bin) => {
            starts_like_declaration(&bin.left)
        }
        Expression::AssignmentExpression(assign) => match assign.left.as_ref() {
            Pattern::ObjectPattern(_) => true,
            Pattern::MemberExpression(member) => starts_like_declaration(&member.object),
            _ => false,
        },
        Expression::TaggedTemplateExpression(tagged) => starts_like_declaration(&tagged.tag),
        Expression::ConditionalExpression(cond) => starts_like_declaration(&cond.test),
        Expression::SequenceExpression(seq) => {
            seq.expressions.first().is_some_and(starts_like_declaration)
        }
        Expression::UpdateExpression(update) if !update.prefix => {
            starts_like_declaration(&update.argument)
        }
        _ => false,
    }
}

/// Printer for syntax trees.
pub struct Printer {
    output: String,
    indent_level: u32,
    indent_str: &'static str,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub const fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_str: "    ",
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    /// Render a whole program, one top-level statement per line.
    pub fn print_program(program: &Program) -> String {
        let mut printer = Self::new();
        printer.emit_statements(&program.body);
        printer.finish()
    }

    /// Render a single statement.
    pub fn emit_to_string(stmt: &Statement) -> String {
        let mut printer = Self::new();
        printer.emit_statement(stmt);
        printer.finish()
    }

    /// Render a single expression.
    pub fn expression_to_string(expr: &Expression) -> String {
        let mut printer = Self::new();
        printer.emit_expression(expr, prec::SEQUENCE);
        printer.finish()
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn emit_statements(&mut self, statements: &[Statement]) {
        for stmt in statements {
            self.write_indent();
            self.emit_statement(stmt);
            self.write_line();
        }
    }

    pub fn emit_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::ExpressionStatement(expr_stmt) => {
                let expr = &expr_stmt.expression;
                if starts_like_declaration(expr) {
                    self.write("(");
                    self.emit_expression(expr, prec::SEQUENCE);
                    self.write(")");
                } else {
                    self.emit_expression(expr, prec::SEQUENCE);
                }
                self.write(";");
            }
            Statement::VariableDeclaration(decl) => {
                self.emit_variable_declaration(decl);
                self.write(";");
            }
            Statement::FunctionDeclaration(func) => self.emit_function(func),
            Statement::ClassDeclaration(class) => self.emit_class(class),
            Statement::ReturnStatement(ret) => {
                self.write("return");
                if let Some(argument) = &ret.argument {
                    self.write(" ");
                    self.emit_expression(argument, prec::SEQUENCE);
                }
                self.write(";");
            }
            Statement::IfStatement(if_stmt) => {
                self.write("if (");
                self.emit_expression(&if_stmt.test, prec::SEQUENCE);
                self.write(") ");
                self.emit_statement(&if_stmt.consequent);
                if let Some(alternate) = &if_stmt.alternate {
                    self.write(" else ");
                    self.emit_statement(alternate);
                }
            }
            Statement::BlockStatement(block) => self.emit_block(block),
            Statement::ForStatement(for_stmt) => {
                self.write("for (");
                match &for_stmt.init {
                    Some(ForInit::Variable(decl)) => self.emit_variable_declaration(decl),
                    Some(ForInit::Expression(expr)) => self.emit_expression(expr, prec::SEQUENCE),
                    None => {}
                }
                self.write(";");
                if let Some(test) = &for_stmt.test {
                    self.write(" ");
                    self.emit_expression(test, prec::SEQUENCE);
                }
                self.write(";");
                if let Some(update) = &for_stmt.update {
                    self.write(" ");
                    self.emit_expression(update, prec::SEQUENCE);
                }
                self.write(") ");
                self.emit_statement(&for_stmt.body);
            }
            Statement::ForInStatement(for_in) => self.emit_for_in("in", for_in),
            Statement::ForOfStatement(for_of) => self.emit_for_in("of", for_of),
            Statement::WhileStatement(while_stmt) => {
                self.write("while (");
                self.emit_expression(&while_stmt.test, prec::SEQUENCE);
                self.write(") ");
                self.emit_statement(&while_stmt.body);
            }
            Statement::DoWhileStatement(do_while) => {
                self.write("do ");
                self.emit_statement(&do_while.body);
                self.write(" while (");
                self.emit_expression(&do_while.test, prec::SEQUENCE);
                self.write(");");
            }
            Statement::TryStatement(try_stmt) => {
                self.write("try ");
                self.emit_block(&try_stmt.block);
                if let Some(handler) = &try_stmt.handler {
                    self.write(" catch ");
                    if let Some(param) = &handler.param {
                        self.write("(");
                        self.emit_pattern(param);
                        self.write(") ");
                    }
                    self.emit_block(&handler.body);
                }
                if let Some(finalizer) = &try_stmt.finalizer {
                    self.write(" finally ");
                    self.emit_block(finalizer);
                }
            }
            Statement::SwitchStatement(switch) => self.emit_switch(switch),
            Statement::LabeledStatement(labeled) => {
                self.write(&labeled.label.name);
                self.write(": ");
                self.emit_statement(&labeled.body);
            }
            Statement::DebuggerStatement => self.write("debugger;"),
            Statement::ThrowStatement(throw) => {
                self.write("throw ");
                self.emit_expression(&throw.argument, prec::SEQUENCE);
                self.write(";");
            }
            Statement::BreakStatement(jump) => self.emit_jump("break", jump),
            Statement::ContinueStatement(jump) => self.emit_jump("continue", jump),
            Statement::EmptyStatement => self.write(";"),
            Statement::ImportDeclaration(import) => self.emit_import(import),
            Statement::ExportNamedDeclaration(export) => self.emit_export_named(export),
            Statement::ExportDefaultDeclaration(export) => {
                self.write("export default ");
                match &export.declaration {
                    DefaultDeclaration::Function(func) => self.emit_function(func),
                    DefaultDeclaration::Class(class) => self.emit_class(class),
                    DefaultDeclaration::Expression(expr) => {
                        self.emit_expression(expr, prec::ASSIGNMENT);
                        self.write(";");
                    }
                }
            }
            Statement::ExportAllDeclaration(export) => {
                self.write("export *");
                if let Some(exported) = &export.exported {
                    self.write(" as ");
                    self.write(&exported.name);
                }
                self.write(" from ");
                self.emit_literal(&export.source);
                self.write(";");
            }
        }
    }

    fn emit_for_in(&mut self, keyword: &str, stmt: &ForInStatement) {
        self.write("for ");
        if stmt.is_await {
            self.write("await ");
        }
        self.write("(");
        match &stmt.left {
            ForInLeft::Variable(decl) => self.emit_variable_declaration(decl),
            ForInLeft::Pattern(pattern) => self.emit_pattern(pattern),
        }
        self.write(" ");
        self.write(keyword);
        self.write(" ");
        let right_prec = if keyword == "of" {
            prec::ASSIGNMENT
        } else {
            prec::SEQUENCE
        };
        self.emit_expression(&stmt.right, right_prec);
        self.write(") ");
        self.emit_statement(&stmt.body);
    }

    fn emit_switch(&mut self, switch: &SwitchStatement) {
        self.write("switch (");
        self.emit_expression(&switch.discriminant, prec::SEQUENCE);
        self.write(") ");
        if switch.cases.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.write_line();
        self.increase_indent();
        for case in &switch.cases {
            self.write_indent();
            match &case.test {
                Some(test) => {
                    self.write("case ");
                    self.emit_expression(test, prec::SEQUENCE);
                    self.write(":");
                }
                None => self.write("default:"),
            }
            self.write_line();
            self.increase_indent();
            self.emit_statements(&case.consequent);
            self.decrease_indent();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    fn emit_jump(&mut self, keyword: &str, jump: &JumpStatement) {
        self.write(keyword);
        if let Some(label) = &jump.label {
            self.write(" ");
            self.write(&label.name);
        }
        self.write(";");
    }

    fn emit_variable_declaration(&mut self, decl: &VariableDeclaration) {
        self.write(decl.kind.as_str());
        self.write(" ");
        for (i, declarator) in decl.declarations.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_pattern(&declarator.id);
            if let Some(init) = &declarator.init {
                self.write(" = ");
                self.emit_expression(init, prec::ASSIGNMENT);
            }
        }
    }

    pub fn emit_block(&mut self, block: &BlockStatement) {
        if block.body.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.write_line();
        self.increase_indent();
        self.emit_statements(&block.body);
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    fn emit_function(&mut self, func: &Function) {
        if func.is_async {
            self.write("async ");
        }
        self.write("function");
        if func.generator {
            self.write("*");
        }
        match &func.id {
            Some(id) => {
                self.write(" ");
                self.write(&id.name);
            }
            None => self.write(" "),
        }
        self.emit_parameters(&func.params);
        self.write(" ");
        self.emit_block(&func.body);
    }

    fn emit_parameters(&mut self, params: &[Pattern]) {
        self.write("(");
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_pattern(param);
        }
        self.write(")");
    }

    pub fn emit_pattern(&mut self, pattern: &Pattern) {
        match pattern {
            Pattern::Identifier(id) => self.write(&id.name),
            Pattern::ObjectPattern(object) => {
                if object.properties.is_empty() {
                    self.write("{}");
                    return;
                }
                self.write("{ ");
                for (i, property) in object.properties.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    match property {
                        PatternProperty::Property(prop) if prop.shorthand => {
                            self.emit_pattern(&prop.value);
                        }
                        PatternProperty::Property(prop) => {
                            self.emit_property_key(&prop.key, prop.computed);
                            self.write(": ");
                            self.emit_pattern(&prop.value);
                        }
                        PatternProperty::RestElement(rest) => {
                            self.write("...");
                            self.emit_pattern(&rest.argument);
                        }
                    }
                }
                self.write(" }");
            }
            Pattern::ArrayPattern(array) => {
                self.write("[");
                for (i, element) in array.elements.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    if let Some(element) = element {
                        self.emit_pattern(element);
                    }
                }
                if matches!(array.elements.last(), Some(None)) {
                    self.write(",");
                }
                self.write("]");
            }
            Pattern::AssignmentPattern(assign) => {
                self.emit_pattern(&assign.left);
                self.write(" = ");
                self.emit_expression(&assign.right, prec::ASSIGNMENT);
            }
            Pattern::RestElement(rest) => {
                self.write("...");
                self.emit_pattern(&rest.argument);
            }
            Pattern::MemberExpression(member) => self.emit_member(member),
        }
    }

    fn emit_class(&mut self, class: &Class) {
        self.write("class");
        if let Some(id) = &class.id {
            self.write(" ");
            self.write(&id.name);
        }
        if let Some(super_class) = &class.super_class {
            self.write(" extends ");
            self.emit_expression(super_class, prec::CALL);
        }
        self.write(" ");
        if class.body.body.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.write_line();
        self.increase_indent();
        for method in &class.body.body {
            self.write_indent();
            self.emit_method(method);
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    fn emit_method(&mut self, method: &MethodDefinition) {
        if method.is_static {
            self.write("static ");
        }
        match method.kind {
            MethodKind::Get => self.write("get "),
            MethodKind::Set => self.write("set "),
            MethodKind::Constructor | MethodKind::Method => {}
        }
        if method.value.is_async {
            self.write("async ");
        }
        if method.value.generator {
            self.write("*");
        }
        self.emit_property_key(&method.key, method.computed);
        self.emit_parameters(&method.value.params);
        self.write(" ");
        self.emit_block(&method.value.body);
    }

    fn emit_import(&mut self, import: &ImportDeclaration) {
        self.write("import ");
        if !import.specifiers.is_empty() {
            let mut named = Vec::new();
            let mut first = true;
            for specifier in &import.specifiers {
                match specifier {
                    ImportSpecifier::Default { local } => {
                        if !first {
                            self.write(", ");
                        }
                        self.write(&local.name);
                        first = false;
                    }
                    ImportSpecifier::Namespace { local } => {
                        if !first {
                            self.write(", ");
                        }
                        self.write("* as ");
                        self.write(&local.name);
                        first = false;
                    }
                    ImportSpecifier::Named { imported, local } => named.push((imported, local)),
                }
            }
            if !named.is_empty() {
                if !first {
                    self.write(", ");
                }
                self.write("{ ");
                for (i, (imported, local)) in named.into_iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_alias(&imported.name, &local.name);
                }
                self.write(" }");
            }
            self.write(" from ");
        }
        self.emit_literal(&import.source);
        self.write(";");
    }

    fn emit_export_named(&mut self, export: &ExportNamedDeclaration) {
        self.write("export ");
        if let Some(declaration) = &export.declaration {
            match declaration {
                Declaration::FunctionDeclaration(func) => self.emit_function(func),
                Declaration::ClassDeclaration(class) => self.emit_class(class),
                Declaration::VariableDeclaration(decl) => {
                    self.emit_variable_declaration(decl);
                    self.write(";");
                }
            }
            return;
        }
        self.write("{");
        for (i, specifier) in export.specifiers.iter().enumerate() {
            self.write(if i > 0 { ", " } else { " " });
            self.emit_alias(&specifier.local.name, &specifier.exported.name);
        }
        self.write(if export.specifiers.is_empty() { "}" } else { " }" });
        if let Some(source) = &export.source {
            self.write(" from ");
            self.emit_literal(source);
        }
        self.write(";");
    }

    fn emit_alias(&mut self, from: &str, to: &str) {
        self.write(from);
        if from != to {
            self.write(" as ");
            self.write(to);
        }
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// Emit `expr`, parenthesizing it when it binds looser than `min_prec`.
    pub fn emit_expression(&mut self, expr: &Expression, min_prec: u8) {
        self.emit_operand(expr, min_prec, false);
    }

    /// Like [`Self::emit_expression`], with `force` adding parentheses that
    /// precedence alone would not.
    fn emit_operand(&mut self, expr: &Expression, min_prec: u8, force: bool) {
        let needs_parens = force || precedence(expr) < min_prec;
        if needs_parens {
            self.write("(");
        }
        self.emit_expression_inner(expr);
        if needs_parens {
            self.write(")");
        }
    }

    fn emit_expression_inner(&mut self, expr: &Expression) {
        match expr {
            Expression::Identifier(id) => self.write(&id.name),
            Expression::Literal(lit) => self.emit_literal(lit),
            Expression::ThisExpression => self.write("this"),
            Expression::Super => self.write("super"),
            Expression::ArrayExpression(array) => {
                self.write("[");
                for (i, element) in array.elements.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    if let Some(element) = element {
                        self.emit_expression(element, prec::ASSIGNMENT);
                    }
                }
                // A trailing hole needs its own comma: `[a, ,]`.
                if matches!(array.elements.last(), Some(None)) {
                    self.write(",");
                }
                self.write("]");
            }
            Expression::ObjectExpression(object) => self.emit_object(object),
            Expression::FunctionExpression(func) => self.emit_function(func),
            Expression::ArrowFunctionExpression(arrow) => {
                if arrow.is_async {
                    self.write("async ");
                }
                self.emit_parameters(&arrow.params);
                self.write(" => ");
                match &arrow.body {
                    ArrowBody::Block(block) => self.emit_block(block),
                    ArrowBody::Expression(body) => {
                        if matches!(**body, Expression::ObjectExpression(_)) {
                            self.write("(");
                            self.emit_expression(body, prec::ASSIGNMENT);
                            self.write(")");
                        } else {
                            self.emit_expression(body, prec::ASSIGNMENT);
                        }
                    }
                }
            }
            Expression::ClassExpression(class) => self.emit_class(class),
            Expression::UnaryExpression(unary) => {
                self.write(&unary.operator);
                let word = unary.operator.chars().all(|c| c.is_ascii_alphabetic());
                let same_sign = matches!(unary.operator.as_str(), "+" | "-")
                    && Self::argument_starts_with(&unary.argument, &unary.operator);
                if word || same_sign {
                    self.write(" ");
                }
                self.emit_expression(&unary.argument, prec::UNARY);
            }
            Expression::UpdateExpression(update) => {
                if update.prefix {
                    self.write(&update.operator);
                    self.emit_expression(&update.argument, prec::UNARY);
                } else {
                    self.emit_expression(&update.argument, prec::POSTFIX);
                    self.write(&update.operator);
                }
            }
            Expression::BinaryExpression(bin) | Expression::LogicalExpression(bin) => {
                let p = binary_precedence(&bin.operator);
                let (left_prec, right_prec) = if bin.operator == "**" {
                    (p + 1, p)
                } else {
                    (p, p + 1)
                };
                // `-a ** b` is a syntax error.
                let left_forced = if bin.operator == "**" {
                    matches!(
                        *bin.left,
                        Expression::UnaryExpression(_) | Expression::AwaitExpression(_)
                    )
                } else {
                    mixes_nullish(&bin.operator, &bin.left)
                };
                let right_forced = mixes_nullish(&bin.operator, &bin.right);
                self.emit_operand(&bin.left, left_prec, left_forced);
                self.write(" ");
                self.write(&bin.operator);
                self.write(" ");
                self.emit_operand(&bin.right, right_prec, right_forced);
            }
            Expression::AssignmentExpression(assign) => {
                self.emit_pattern(&assign.left);
                self.write(" ");
                self.write(&assign.operator);
                self.write(" ");
                self.emit_expression(&assign.right, prec::ASSIGNMENT);
            }
            Expression::ConditionalExpression(cond) => {
                self.emit_expression(&cond.test, prec::NULLISH);
                self.write(" ? ");
                self.emit_expression(&cond.consequent, prec::ASSIGNMENT);
                self.write(" : ");
                self.emit_expression(&cond.alternate, prec::ASSIGNMENT);
            }
            Expression::CallExpression(call) => {
                self.emit_expression(&call.callee, prec::CALL);
                self.emit_arguments(&call.arguments);
            }
            Expression::NewExpression(call) => {
                self.write("new ");
                // `new (f())()` must keep the callee's call out of the `new`.
                let callee_has_call = contains_call(&call.callee);
                if callee_has_call {
                    self.write("(");
                    self.emit_expression(&call.callee, prec::SEQUENCE);
                    self.write(")");
                } else {
                    self.emit_expression(&call.callee, prec::NEW);
                }
                self.emit_arguments(&call.arguments);
            }
            Expression::MemberExpression(member) => self.emit_member(member),
            Expression::SequenceExpression(seq) => {
                for (i, item) in seq.expressions.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_expression(item, prec::ASSIGNMENT);
                }
            }
            Expression::TemplateLiteral(template) => self.emit_template(template),
            Expression::TaggedTemplateExpression(tagged) => {
                self.emit_expression(&tagged.tag, prec::CALL);
                self.emit_template(&tagged.quasi);
            }
            Expression::SpreadElement(spread) => {
                self.write("...");
                self.emit_expression(&spread.argument, prec::ASSIGNMENT);
            }
            Expression::YieldExpression(yield_expr) => {
                self.write(if yield_expr.delegate { "yield*" } else { "yield" });
                if let Some(argument) = &yield_expr.argument {
                    self.write(" ");
                    self.emit_expression(argument, prec::ASSIGNMENT);
                }
            }
            Expression::AwaitExpression(await_expr) => {
                self.write("await ");
                self.emit_expression(&await_expr.argument, prec::UNARY);
            }
        }
    }

    fn emit_member(&mut self, member: &MemberExpression) {
        let bare_integer = !member.computed
            && matches!(member.object.as_ref(), Expression::Literal(lit) if is_bare_integer(lit));
        self.emit_operand(&member.object, prec::CALL, bare_integer);
        if member.computed {
            self.write("[");
            self.emit_expression(&member.property, prec::SEQUENCE);
            self.write("]");
        } else {
            self.write(".");
            self.emit_expression(&member.property, prec::PRIMARY);
        }
    }

    fn emit_template(&mut self, template: &TemplateLiteral) {
        self.write("`");
        for (i, quasi) in template.quasis.iter().enumerate() {
            self.write(&quasi.value.raw);
            if let Some(expr) = template.expressions.get(i) {
                self.write("${");
                self.emit_expression(expr, prec::SEQUENCE);
                self.write("}");
            }
        }
        self.write("`");
    }

    fn argument_starts_with(argument: &Expression, operator: &str) -> bool {
        match argument {
            Expression::UnaryExpression(inner) => inner.operator.starts_with(operator),
            Expression::UpdateExpression(inner) => {
                inner.prefix && inner.operator.starts_with(operator)
            }
            _ => false,
        }
    }

    fn emit_arguments(&mut self, arguments: &[Expression]) {
        self.write("(");
        for (i, arg) in arguments.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_expression(arg, prec::ASSIGNMENT);
        }
        self.write(")");
    }

    fn emit_object(&mut self, object: &ObjectExpression) {
        if object.properties.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.write_line();
        self.increase_indent();
        for (i, member) in object.properties.iter().enumerate() {
            self.write_indent();
            match member {
                ObjectMember::Property(prop) => self.emit_property(prop),
                ObjectMember::SpreadElement(spread) => {
                    self.write("...");
                    self.emit_expression(&spread.argument, prec::ASSIGNMENT);
                }
            }
            if i < object.properties.len() - 1 {
                self.write(",");
            }
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    fn emit_property(&mut self, prop: &Property) {
        if prop.shorthand {
            self.emit_expression(&prop.value, prec::ASSIGNMENT);
            return;
        }
        let accessor = match prop.kind {
            PropertyKind::Get => Some("get "),
            PropertyKind::Set => Some("set "),
            PropertyKind::Init => None,
        };
        if let Expression::FunctionExpression(func) = &prop.value
            && (prop.method || accessor.is_some())
        {
            if let Some(accessor) = accessor {
                self.write(accessor);
            }
            self.emit_property_key(&prop.key, prop.computed);
            self.emit_parameters(&func.params);
            self.write(" ");
            self.emit_block(&func.body);
            return;
        }
        self.emit_property_key(&prop.key, prop.computed);
        self.write(": ");
        self.emit_expression(&prop.value, prec::ASSIGNMENT);
    }

    fn emit_property_key(&mut self, key: &Expression, computed: bool) {
        if computed {
            self.write("[");
            self.emit_expression(key, prec::ASSIGNMENT);
            self.write("]");
        } else {
            self.emit_expression(key, prec::PRIMARY);
        }
    }

    pub fn emit_literal(&mut self, lit: &Literal) {
        if let Some(raw) = &lit.raw {
            self.write(raw);
            return;
        }
        match &lit.value {
            Value::String(s) => {
                self.write("\"");
                self.write_escaped(s);
                self.write("\"");
            }
            Value::Null => self.write("null"),
            // Numbers and booleans share their JSON spelling.
            other => {
                let text = other.to_string();
                self.write(&text);
            }
        }
    }

    // =========================================================================
    // Output
    // =========================================================================

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_escaped(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\0' => self.output.push_str("\\0"),
                '\u{2028}' => self.output.push_str("\\u2028"),
                '\u{2029}' => self.output.push_str("\\u2029"),
                c if (c as u32) < 0x20 || c == '\x7F' => {
                    let _ = write!(self.output, "\\u{:04X}", c as u32);
                }
                _ => self.output.push(c),
            }
        }
    }

    fn write_line(&mut self) {
        self.output.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(self.indent_str);
        }
    }

    const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    const fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}

fn contains_call(expr: &Expression) -> bool {
    match expr {
        Expression::CallExpression(_) => true,
        Expression::MemberExpression(member) => contains_call(&member.object),
        _ => false,
    }
}

#[cfg(test)]
#[path = "tests/printer_tests.rs"]
mod printer_tests;
