//! Syntax tree nodes.
//!
//! Variant and field names follow ESTree so that `serde` can read parser output
//! as-is. Location fields (`start`, `end`, `loc`, `range`) are ignored.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A whole module.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Program {
    pub body: Vec<Statement>,
    /// Output file name hint, set once the module has been wrapped.
    #[serde(default)]
    pub filename: Option<String>,
}

impl Program {
    pub fn new(body: Vec<Statement>) -> Self {
        Self {
            body,
            filename: None,
        }
    }

    /// Top-level import/export statements still present in the body.
    pub fn module_declarations(&self) -> impl Iterator<Item = &Statement> {
        self.body.iter().filter(|stmt| stmt.is_module_declaration())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Literal {
    pub value: Value,
    /// Source spelling; printed verbatim when present.
    #[serde(default)]
    pub raw: Option<String>,
}

impl Literal {
    /// The literal's value when it is a string.
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}

// =========================================================================
// Statements
// =========================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    ExpressionStatement(ExpressionStatement),
    VariableDeclaration(VariableDeclaration),
    FunctionDeclaration(Function),
    ClassDeclaration(Class),
    ReturnStatement(ReturnStatement),
    IfStatement(IfStatement),
    BlockStatement(BlockStatement),
    ForStatement(ForStatement),
    ForInStatement(ForInStatement),
    ForOfStatement(ForInStatement),
    WhileStatement(WhileStatement),
    DoWhileStatement(WhileStatement),
    TryStatement(TryStatement),
    SwitchStatement(SwitchStatement),
    LabeledStatement(LabeledStatement),
    ThrowStatement(ThrowStatement),
    BreakStatement(JumpStatement),
    ContinueStatement(JumpStatement),
    DebuggerStatement,
    EmptyStatement,

    // Module declarations
    ImportDeclaration(ImportDeclaration),
    ExportNamedDeclaration(ExportNamedDeclaration),
    ExportDefaultDeclaration(ExportDefaultDeclaration),
    ExportAllDeclaration(ExportAllDeclaration),
}

impl Statement {
    /// ESTree node type, used in diagnostics.
    pub const fn node_type(&self) -> &'static str {
        match self {
            Self::ExpressionStatement(_) => "ExpressionStatement",
            Self::VariableDeclaration(_) => "VariableDeclaration",
            Self::FunctionDeclaration(_) => "FunctionDeclaration",
            Self::ClassDeclaration(_) => "ClassDeclaration",
            Self::ReturnStatement(_) => "ReturnStatement",
            Self::IfStatement(_) => "IfStatement",
            Self::BlockStatement(_) => "BlockStatement",
            Self::ForStatement(_) => "ForStatement",
            Self::ForInStatement(_) => "ForInStatement",
            Self::ForOfStatement(_) => "ForOfStatement",
            Self::WhileStatement(_) => "WhileStatement",
            Self::DoWhileStatement(_) => "DoWhileStatement",
            Self::TryStatement(_) => "TryStatement",
            Self::SwitchStatement(_) => "SwitchStatement",
            Self::LabeledStatement(_) => "LabeledStatement",
            Self::ThrowStatement(_) => "ThrowStatement",
            Self::BreakStatement(_) => "BreakStatement",
            Self::ContinueStatement(_) => "ContinueStatement",
            Self::DebuggerStatement => "DebuggerStatement",
            Self::EmptyStatement => "EmptyStatement",
            Self::ImportDeclaration(_) => "ImportDeclaration",
            Self::ExportNamedDeclaration(_) => "ExportNamedDeclaration",
            Self::ExportDefaultDeclaration(_) => "ExportDefaultDeclaration",
            Self::ExportAllDeclaration(_) => "ExportAllDeclaration",
        }
    }

    pub const fn is_module_declaration(&self) -> bool {
        matches!(
            self,
            Self::ImportDeclaration(_)
                | Self::ExportNamedDeclaration(_)
                | Self::ExportDefaultDeclaration(_)
                | Self::ExportAllDeclaration(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
    /// Directive prologue text (`"use strict"`), when the parser marks one.
    #[serde(default)]
    pub directive: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator>,
}

/// `id = init`; `id` may be a destructuring pattern.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableDeclarator {
    pub id: Pattern,
    #[serde(default)]
    pub init: Option<Expression>,
}

/// Function declaration or expression.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Function {
    #[serde(default)]
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: BlockStatement,
    #[serde(default)]
    pub generator: bool,
    #[serde(default, rename = "async")]
    pub is_async: bool,
}

/// Class declaration or expression.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Class {
    #[serde(default)]
    pub id: Option<Identifier>,
    #[serde(default, rename = "superClass")]
    pub super_class: Option<Box<Expression>>,
    pub body: ClassBody,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassBody {
    pub body: Vec<MethodDefinition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MethodDefinition {
    pub key: Expression,
    pub value: Function,
    pub kind: MethodKind,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReturnStatement {
    #[serde(default)]
    pub argument: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IfStatement {
    pub test: Expression,
    pub consequent: Box<Statement>,
    #[serde(default)]
    pub alternate: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BlockStatement {
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForStatement {
    #[serde(default)]
    pub init: Option<ForInit>,
    #[serde(default)]
    pub test: Option<Expression>,
    #[serde(default)]
    pub update: Option<Expression>,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    Variable(VariableDeclaration),
    Expression(Expression),
}

impl<'de> Deserialize<'de> for ForInit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if node_type(&value) == Some("VariableDeclaration") {
            VariableDeclaration::deserialize(value)
                .map(Self::Variable)
                .map_err(D::Error::custom)
        } else {
            Expression::deserialize(value)
                .map(Self::Expression)
                .map_err(D::Error::custom)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WhileStatement {
    pub test: Expression,
    pub body: Box<Statement>,
}

/// `for (left in right)` and `for (left of right)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForInStatement {
    pub left: ForInLeft,
    pub right: Expression,
    pub body: Box<Statement>,
    /// `for await (... of ...)`
    #[serde(default, rename = "await")]
    pub is_await: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInLeft {
    Variable(VariableDeclaration),
    Pattern(Pattern),
}

impl<'de> Deserialize<'de> for ForInLeft {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if node_type(&value) == Some("VariableDeclaration") {
            VariableDeclaration::deserialize(value)
                .map(Self::Variable)
                .map_err(D::Error::custom)
        } else {
            Pattern::deserialize(value)
                .map(Self::Pattern)
                .map_err(D::Error::custom)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TryStatement {
    pub block: BlockStatement,
    #[serde(default)]
    pub handler: Option<CatchClause>,
    #[serde(default)]
    pub finalizer: Option<BlockStatement>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatchClause {
    /// `None` for `catch { ... }`.
    #[serde(default)]
    pub param: Option<Pattern>,
    pub body: BlockStatement,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SwitchStatement {
    pub discriminant: Expression,
    pub cases: Vec<SwitchCase>,
}

/// `case test:` or, without a test, `default:`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SwitchCase {
    #[serde(default)]
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabeledStatement {
    pub label: Identifier,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThrowStatement {
    pub argument: Expression,
}

/// `break` / `continue` with an optional label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JumpStatement {
    #[serde(default)]
    pub label: Option<Identifier>,
}

// =========================================================================
// Patterns
// =========================================================================

/// Binding or assignment target.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    Identifier(Identifier),
    ObjectPattern(ObjectPattern),
    ArrayPattern(ArrayPattern),
    /// `target = default`
    AssignmentPattern(AssignmentPattern),
    RestElement(RestElement),
    /// Only valid as an assignment target, never as a binding.
    MemberExpression(MemberExpression),
}

impl Pattern {
    pub const fn node_type(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "Identifier",
            Self::ObjectPattern(_) => "ObjectPattern",
            Self::ArrayPattern(_) => "ArrayPattern",
            Self::AssignmentPattern(_) => "AssignmentPattern",
            Self::RestElement(_) => "RestElement",
            Self::MemberExpression(_) => "MemberExpression",
        }
    }

    pub const fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Self::Identifier(id) => Some(id),
            _ => None,
        }
    }

    /// Every name this pattern binds, left to right.
    pub fn bound_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_bound_names(&mut names);
        names
    }

    fn collect_bound_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Identifier(id) => names.push(&id.name),
            Self::ObjectPattern(object) => {
                for property in &object.properties {
                    match property {
                        PatternProperty::Property(prop) => prop.value.collect_bound_names(names),
                        PatternProperty::RestElement(rest) => {
                            rest.argument.collect_bound_names(names);
                        }
                    }
                }
            }
            Self::ArrayPattern(array) => {
                for element in array.elements.iter().flatten() {
                    element.collect_bound_names(names);
                }
            }
            Self::AssignmentPattern(assign) => assign.left.collect_bound_names(names),
            Self::RestElement(rest) => rest.argument.collect_bound_names(names),
            Self::MemberExpression(_) => {}
        }
    }
}

impl From<Identifier> for Pattern {
    fn from(id: Identifier) -> Self {
        Self::Identifier(id)
    }
}

impl From<MemberExpression> for Pattern {
    fn from(member: MemberExpression) -> Self {
        Self::MemberExpression(member)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectPattern {
    pub properties: Vec<PatternProperty>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum PatternProperty {
    Property(AssignmentProperty),
    RestElement(RestElement),
}

/// `key: value` inside an object pattern; `{ a = 1 }` is shorthand with an
/// `AssignmentPattern` value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssignmentProperty {
    pub key: Expression,
    pub value: Pattern,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub shorthand: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArrayPattern {
    /// `None` marks a skipped element: `[, b]`.
    pub elements: Vec<Option<Pattern>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssignmentPattern {
    pub left: Box<Pattern>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RestElement {
    pub argument: Box<Pattern>,
}

// =========================================================================
// Module declarations
// =========================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportDeclaration {
    pub specifiers: Vec<ImportSpecifier>,
    pub source: Literal,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ImportSpecifier {
    /// `import { imported as local } from "m"`
    #[serde(rename = "ImportSpecifier")]
    Named {
        imported: Identifier,
        local: Identifier,
    },
    /// `import local from "m"`
    #[serde(rename = "ImportDefaultSpecifier")]
    Default { local: Identifier },
    /// `import * as local from "m"`
    #[serde(rename = "ImportNamespaceSpecifier")]
    Namespace { local: Identifier },
}

impl ImportSpecifier {
    pub const fn local(&self) -> &Identifier {
        match self {
            Self::Named { local, .. } | Self::Default { local } | Self::Namespace { local } => {
                local
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportNamedDeclaration {
    #[serde(default)]
    pub declaration: Option<Declaration>,
    #[serde(default)]
    pub specifiers: Vec<ExportSpecifier>,
    #[serde(default)]
    pub source: Option<Literal>,
}

/// `local as exported`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportSpecifier {
    pub local: Identifier,
    pub exported: Identifier,
}

/// Inline declaration of `export <declaration>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Declaration {
    FunctionDeclaration(Function),
    VariableDeclaration(VariableDeclaration),
    ClassDeclaration(Class),
}

impl Declaration {
    pub const fn node_type(&self) -> &'static str {
        match self {
            Self::FunctionDeclaration(_) => "FunctionDeclaration",
            Self::VariableDeclaration(_) => "VariableDeclaration",
            Self::ClassDeclaration(_) => "ClassDeclaration",
        }
    }

    pub fn into_statement(self) -> Statement {
        match self {
            Self::FunctionDeclaration(func) => Statement::FunctionDeclaration(func),
            Self::VariableDeclaration(decl) => Statement::VariableDeclaration(decl),
            Self::ClassDeclaration(class) => Statement::ClassDeclaration(class),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportDefaultDeclaration {
    pub declaration: DefaultDeclaration,
}

/// The operand of `export default`: a hoistable declaration or any expression.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultDeclaration {
    Function(Function),
    Class(Class),
    Expression(Expression),
}

impl DefaultDeclaration {
    pub const fn node_type(&self) -> &'static str {
        match self {
            Self::Function(_) => "FunctionDeclaration",
            Self::Class(_) => "ClassDeclaration",
            Self::Expression(expr) => expr.node_type(),
        }
    }
}

impl<'de> Deserialize<'de> for DefaultDeclaration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match node_type(&value) {
            Some("FunctionDeclaration") => Function::deserialize(value)
                .map(Self::Function)
                .map_err(D::Error::custom),
            Some("ClassDeclaration") => Class::deserialize(value)
                .map(Self::Class)
                .map_err(D::Error::custom),
            _ => Expression::deserialize(value)
                .map(Self::Expression)
                .map_err(D::Error::custom),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportAllDeclaration {
    pub source: Literal,
    #[serde(default)]
    pub exported: Option<Identifier>,
}

// =========================================================================
// Expressions
// =========================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    ThisExpression,
    Super,
    ArrayExpression(ArrayExpression),
    ObjectExpression(ObjectExpression),
    FunctionExpression(Function),
    ArrowFunctionExpression(ArrowFunction),
    ClassExpression(Class),
    UnaryExpression(UnaryExpression),
    UpdateExpression(UpdateExpression),
    BinaryExpression(BinaryExpression),
    LogicalExpression(BinaryExpression),
    AssignmentExpression(AssignmentExpression),
    ConditionalExpression(ConditionalExpression),
    CallExpression(CallExpression),
    NewExpression(CallExpression),
    MemberExpression(MemberExpression),
    SequenceExpression(SequenceExpression),
    TemplateLiteral(TemplateLiteral),
    TaggedTemplateExpression(TaggedTemplateExpression),
    /// `...argument`, in array elements and call arguments.
    SpreadElement(SpreadElement),
    YieldExpression(YieldExpression),
    AwaitExpression(AwaitExpression),
}

impl Expression {
    pub const fn node_type(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "Identifier",
            Self::Literal(_) => "Literal",
            Self::ThisExpression => "ThisExpression",
            Self::Super => "Super",
            Self::ArrayExpression(_) => "ArrayExpression",
            Self::ObjectExpression(_) => "ObjectExpression",
            Self::FunctionExpression(_) => "FunctionExpression",
            Self::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
            Self::ClassExpression(_) => "ClassExpression",
            Self::UnaryExpression(_) => "UnaryExpression",
            Self::UpdateExpression(_) => "UpdateExpression",
            Self::BinaryExpression(_) => "BinaryExpression",
            Self::LogicalExpression(_) => "LogicalExpression",
            Self::AssignmentExpression(_) => "AssignmentExpression",
            Self::ConditionalExpression(_) => "ConditionalExpression",
            Self::CallExpression(_) => "CallExpression",
            Self::NewExpression(_) => "NewExpression",
            Self::MemberExpression(_) => "MemberExpression",
            Self::SequenceExpression(_) => "SequenceExpression",
            Self::TemplateLiteral(_) => "TemplateLiteral",
            Self::TaggedTemplateExpression(_) => "TaggedTemplateExpression",
            Self::SpreadElement(_) => "SpreadElement",
            Self::YieldExpression(_) => "YieldExpression",
            Self::AwaitExpression(_) => "AwaitExpression",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArrayExpression {
    /// `None` marks a hole: `[a, , b]`.
    pub elements: Vec<Option<Expression>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectExpression {
    pub properties: Vec<ObjectMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectMember {
    Property(Property),
    /// `{ ...rest }`
    SpreadElement(SpreadElement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    #[default]
    Init,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    pub key: Expression,
    pub value: Expression,
    #[serde(default)]
    pub kind: PropertyKind,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub shorthand: bool,
    #[serde(default)]
    pub method: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArrowFunction {
    pub params: Vec<Pattern>,
    pub body: ArrowBody,
    #[serde(default, rename = "async")]
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArrowBody {
    Block(BlockStatement),
    Expression(Box<Expression>),
}

impl<'de> Deserialize<'de> for ArrowBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if node_type(&value) == Some("BlockStatement") {
            BlockStatement::deserialize(value)
                .map(Self::Block)
                .map_err(D::Error::custom)
        } else {
            Expression::deserialize(value)
                .map(|expr| Self::Expression(Box::new(expr)))
                .map_err(D::Error::custom)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnaryExpression {
    pub operator: String,
    pub argument: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateExpression {
    pub operator: String,
    pub prefix: bool,
    pub argument: Box<Expression>,
}

/// Binary or logical expression.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BinaryExpression {
    pub operator: String,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssignmentExpression {
    pub operator: String,
    pub left: Box<Pattern>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConditionalExpression {
    pub test: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Box<Expression>,
}

/// Call or `new` expression.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemberExpression {
    pub object: Box<Expression>,
    pub property: Box<Expression>,
    #[serde(default)]
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SequenceExpression {
    pub expressions: Vec<Expression>,
}

/// `` `a${b}c` ``: `quasis` always holds one more element than `expressions`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateLiteral {
    pub quasis: Vec<TemplateElement>,
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateElement {
    pub value: TemplateValue,
    #[serde(default)]
    pub tail: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateValue {
    /// Source text between the backticks and substitutions; printed verbatim.
    pub raw: String,
    #[serde(default)]
    pub cooked: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaggedTemplateExpression {
    pub tag: Box<Expression>,
    pub quasi: TemplateLiteral,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpreadElement {
    pub argument: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct YieldExpression {
    #[serde(default)]
    pub argument: Option<Box<Expression>>,
    /// `yield*`
    #[serde(default)]
    pub delegate: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AwaitExpression {
    pub argument: Box<Expression>,
}

fn node_type(value: &Value) -> Option<&str> {
    value.get("type").and_then(Value::as_str)
}
