//! ESTree fixture builders.
//!
//! Shared by unit and integration tests; depends only on `serde_json` and
//! `yuimod_ast`.
#![allow(dead_code)]

use serde_json::{Value, json};
use yuimod_ast::Program;

pub fn program(body: Vec<Value>) -> Program {
    serde_json::from_value(json!({ "type": "Program", "sourceType": "module", "body": body }))
        .expect("fixture is a valid ESTree program")
}

pub fn id(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

pub fn num(value: i64) -> Value {
    json!({ "type": "Literal", "value": value, "raw": value.to_string() })
}

pub fn string(value: &str) -> Value {
    json!({ "type": "Literal", "value": value })
}

pub fn binary(op: &str, left: Value, right: Value) -> Value {
    json!({ "type": "BinaryExpression", "operator": op, "left": left, "right": right })
}

pub fn call(callee: Value, arguments: Vec<Value>) -> Value {
    json!({ "type": "CallExpression", "callee": callee, "arguments": arguments })
}

pub fn assign(target: &str, value: Value) -> Value {
    json!({ "type": "AssignmentExpression", "operator": "=", "left": id(target), "right": value })
}

pub fn expr(expression: Value) -> Value {
    json!({ "type": "ExpressionStatement", "expression": expression })
}

pub fn ret(argument: Value) -> Value {
    json!({ "type": "ReturnStatement", "argument": argument })
}

pub fn var(bindings: &[(&str, Value)]) -> Value {
    let declarations: Vec<Value> = bindings
        .iter()
        .map(|(name, init)| json!({ "type": "VariableDeclarator", "id": id(name), "init": init }))
        .collect();
    json!({ "type": "VariableDeclaration", "kind": "var", "declarations": declarations })
}

pub fn function(name: Option<&str>, params: &[&str], body: Vec<Value>) -> Value {
    let params: Vec<Value> = params.iter().map(|p| id(p)).collect();
    json!({
        "type": "FunctionDeclaration",
        "id": name.map(id),
        "params": params,
        "body": { "type": "BlockStatement", "body": body }
    })
}

pub fn class(name: Option<&str>) -> Value {
    json!({
        "type": "ClassDeclaration",
        "id": name.map(id),
        "superClass": null,
        "body": { "type": "ClassBody", "body": [] }
    })
}

pub fn import_default(local: &str, source: &str) -> Value {
    json!({
        "type": "ImportDeclaration",
        "specifiers": [{ "type": "ImportDefaultSpecifier", "local": id(local) }],
        "source": string(source)
    })
}

pub fn import_named(pairs: &[(&str, &str)], source: &str) -> Value {
    let specifiers: Vec<Value> = pairs
        .iter()
        .map(|(imported, local)| {
            json!({ "type": "ImportSpecifier", "imported": id(imported), "local": id(local) })
        })
        .collect();
    json!({ "type": "ImportDeclaration", "specifiers": specifiers, "source": string(source) })
}

pub fn import_namespace(local: &str, source: &str) -> Value {
    json!({
        "type": "ImportDeclaration",
        "specifiers": [{ "type": "ImportNamespaceSpecifier", "local": id(local) }],
        "source": string(source)
    })
}

pub fn import_bare(source: &str) -> Value {
    json!({ "type": "ImportDeclaration", "specifiers": [], "source": string(source) })
}

/// `export { local as exported, ... } [from "source"]`
pub fn export_specifiers(pairs: &[(&str, &str)], source: Option<&str>) -> Value {
    let specifiers: Vec<Value> = pairs
        .iter()
        .map(|(local, exported)| {
            json!({ "type": "ExportSpecifier", "local": id(local), "exported": id(exported) })
        })
        .collect();
    json!({
        "type": "ExportNamedDeclaration",
        "declaration": null,
        "specifiers": specifiers,
        "source": source.map(string)
    })
}

pub fn export_declaration(declaration: Value) -> Value {
    json!({
        "type": "ExportNamedDeclaration",
        "declaration": declaration,
        "specifiers": [],
        "source": null
    })
}

pub fn export_default(declaration: Value) -> Value {
    json!({ "type": "ExportDefaultDeclaration", "declaration": declaration })
}

pub fn export_all(source: &str) -> Value {
    json!({ "type": "ExportAllDeclaration", "source": string(source), "exported": null })
}

pub fn array(elements: Vec<Value>) -> Value {
    json!({ "type": "ArrayExpression", "elements": elements })
}

/// `` `q0${e0}q1...` ``
pub fn template(quasis: &[&str], expressions: Vec<Value>) -> Value {
    let last = quasis.len().saturating_sub(1);
    let quasis: Vec<Value> = quasis
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            json!({
                "type": "TemplateElement",
                "value": { "raw": raw, "cooked": raw },
                "tail": i == last
            })
        })
        .collect();
    json!({ "type": "TemplateLiteral", "quasis": quasis, "expressions": expressions })
}

pub fn block(body: Vec<Value>) -> Value {
    json!({ "type": "BlockStatement", "body": body })
}

pub fn try_catch(body: Vec<Value>, param: &str, handler: Vec<Value>) -> Value {
    json!({
        "type": "TryStatement",
        "block": block(body),
        "handler": { "type": "CatchClause", "param": id(param), "body": block(handler) },
        "finalizer": null
    })
}

/// `for (const binding of right) { body }`
pub fn for_of(binding: &str, right: Value, body: Vec<Value>) -> Value {
    json!({
        "type": "ForOfStatement",
        "left": {
            "type": "VariableDeclaration",
            "kind": "const",
            "declarations": [{ "type": "VariableDeclarator", "id": id(binding), "init": null }]
        },
        "right": right,
        "body": block(body),
        "await": false
    })
}

/// `{ key: value, ... }` as a pattern; `value == id(key)` is written shorthand.
pub fn object_pattern(pairs: &[(&str, Value)]) -> Value {
    let properties: Vec<Value> = pairs
        .iter()
        .map(|(key, value)| {
            json!({
                "type": "Property",
                "key": id(key),
                "value": value,
                "kind": "init",
                "computed": false,
                "shorthand": *value == id(key)
            })
        })
        .collect();
    json!({ "type": "ObjectPattern", "properties": properties })
}

pub fn array_pattern(elements: Vec<Value>) -> Value {
    json!({ "type": "ArrayPattern", "elements": elements })
}

/// `target = fallback` inside a pattern.
pub fn with_default(target: Value, fallback: Value) -> Value {
    json!({ "type": "AssignmentPattern", "left": target, "right": fallback })
}

/// Assignment whose left side is a pattern.
pub fn assign_pattern(target: Value, value: Value) -> Value {
    json!({ "type": "AssignmentExpression", "operator": "=", "left": target, "right": value })
}

pub fn var_pattern(pattern: Value, init: Value) -> Value {
    json!({
        "type": "VariableDeclaration",
        "kind": "var",
        "declarations": [{ "type": "VariableDeclarator", "id": pattern, "init": init }]
    })
}
