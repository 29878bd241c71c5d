//! Builder helpers for synthesized nodes.

use serde_json::Value;

use crate::node::*;

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Literal {
    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self {
            value: Value::String(s.into()),
            raw: None,
        }
    }

    /// Create a boolean literal
    pub const fn boolean(b: bool) -> Self {
        Self {
            value: Value::Bool(b),
            raw: None,
        }
    }
}

impl Expression {
    /// Create an identifier reference
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier::new(name))
    }

    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self::Literal(Literal::string(s))
    }

    /// Create a boolean literal
    pub const fn boolean(b: bool) -> Self {
        Self::Literal(Literal::boolean(b))
    }

    /// Create a call expression: `callee(args)`
    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        Self::CallExpression(CallExpression {
            callee: Box::new(callee),
            arguments: args,
        })
    }

    /// Create a dot access: `object.property`
    pub fn member(object: Self, property: impl Into<String>) -> Self {
        Self::MemberExpression(MemberExpression::dot(object, property))
    }

    /// Create an element access: `object[index]`
    pub fn computed(object: Self, index: Self) -> Self {
        Self::MemberExpression(MemberExpression::computed(object, index))
    }

    /// Create an assignment: `target = value`
    pub fn assign(target: impl Into<Pattern>, value: Self) -> Self {
        Self::AssignmentExpression(AssignmentExpression {
            operator: "=".to_string(),
            left: Box::new(target.into()),
            right: Box::new(value),
        })
    }

    /// Create an anonymous or named function expression
    pub fn function(name: Option<&str>, params: &[&str], body: Vec<Statement>) -> Self {
        Self::FunctionExpression(Function::new(name, params, body))
    }

    /// Create an array literal
    pub const fn array(elements: Vec<Option<Self>>) -> Self {
        Self::ArrayExpression(ArrayExpression { elements })
    }

    /// Create an object literal
    pub fn object(properties: Vec<Property>) -> Self {
        Self::ObjectExpression(ObjectExpression {
            properties: properties.into_iter().map(ObjectMember::Property).collect(),
        })
    }
}

impl MemberExpression {
    pub fn dot(object: Expression, property: impl Into<String>) -> Self {
        Self {
            object: Box::new(object),
            property: Box::new(Expression::id(property)),
            computed: false,
        }
    }

    pub fn computed(object: Expression, index: Expression) -> Self {
        Self {
            object: Box::new(object),
            property: Box::new(index),
            computed: true,
        }
    }
}

impl Function {
    pub fn new(name: Option<&str>, params: &[&str], body: Vec<Statement>) -> Self {
        Self {
            id: name.map(Identifier::new),
            params: params
                .iter()
                .map(|&param| Pattern::Identifier(Identifier::new(param)))
                .collect(),
            body: BlockStatement { body },
            generator: false,
            is_async: false,
        }
    }
}

impl Property {
    /// `key: value`
    pub const fn init(key: Expression, value: Expression) -> Self {
        Self {
            key,
            value,
            kind: PropertyKind::Init,
            computed: false,
            shorthand: false,
            method: false,
        }
    }
}

impl Statement {
    /// Create an expression statement
    pub const fn expr(expression: Expression) -> Self {
        Self::ExpressionStatement(ExpressionStatement {
            expression,
            directive: None,
        })
    }

    /// Create a directive prologue entry: `"use strict";`
    pub fn directive(text: &str) -> Self {
        Self::ExpressionStatement(ExpressionStatement {
            expression: Expression::string(text),
            directive: Some(text.to_string()),
        })
    }

    /// Create a single-binding `var` declaration
    pub fn var(name: impl Into<String>, init: Option<Expression>) -> Self {
        Self::VariableDeclaration(VariableDeclaration {
            kind: VariableKind::Var,
            declarations: vec![VariableDeclarator {
                id: Pattern::Identifier(Identifier::new(name)),
                init,
            }],
        })
    }

    /// Create a return statement
    pub const fn ret(argument: Option<Expression>) -> Self {
        Self::ReturnStatement(ReturnStatement { argument })
    }

    /// Create a function declaration
    pub fn function(name: &str, params: &[&str], body: Vec<Self>) -> Self {
        Self::FunctionDeclaration(Function::new(Some(name), params, body))
    }
}
