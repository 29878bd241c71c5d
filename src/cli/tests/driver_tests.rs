use super::args::CliArgs;
use super::driver::{compile, render_stdout, write_outputs, EmittedModule};
use clap::Parser;
use std::path::Path;

const UTIL_AST: &str = r#"{
    "type": "Program",
    "sourceType": "module",
    "body": [{
        "type": "ExportNamedDeclaration",
        "declaration": {
            "type": "VariableDeclaration",
            "kind": "var",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": { "type": "Identifier", "name": "answer" },
                "init": { "type": "Literal", "value": 42, "raw": "42" }
            }]
        },
        "specifiers": [],
        "source": null
    }]
}"#;

const MAIN_AST: &str = r#"{
    "type": "Program",
    "sourceType": "module",
    "body": [
        {
            "type": "ImportDeclaration",
            "specifiers": [{
                "type": "ImportSpecifier",
                "imported": { "type": "Identifier", "name": "answer" },
                "local": { "type": "Identifier", "name": "answer" }
            }],
            "source": { "type": "Literal", "value": "./util" }
        },
        {
            "type": "ExpressionStatement",
            "expression": {
                "type": "CallExpression",
                "callee": { "type": "Identifier", "name": "print" },
                "arguments": [{ "type": "Identifier", "name": "answer" }]
            }
        }
    ]
}"#;

const CLASS_AST: &str = r#"{
    "type": "Program",
    "sourceType": "module",
    "body": [{
        "type": "ExportNamedDeclaration",
        "declaration": {
            "type": "ClassDeclaration",
            "id": { "type": "Identifier", "name": "Widget" },
            "superClass": null,
            "body": { "type": "ClassBody", "body": [] }
        },
        "specifiers": [],
        "source": null
    }]
}"#;

fn write_manifest(dir: &Path, modules: &[(&str, &str)]) {
    let entries: Vec<String> = modules
        .iter()
        .map(|(name, ast)| format!(r#"{{ "name": "{name}", "ast": {ast} }}"#))
        .collect();
    std::fs::write(
        dir.join("modules.json"),
        format!(r#"{{ "modules": [{}] }}"#, entries.join(", ")),
    )
    .unwrap();
}

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["yuimod", "modules.json"];
    argv.extend_from_slice(extra);
    CliArgs::parse_from(argv)
}

#[test]
fn test_compile_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), &[("app/util", UTIL_AST), ("app/main", MAIN_AST)]);

    let result = compile(&args(&[]), dir.path()).unwrap();
    assert!(result.emitted_files.is_empty());
    assert_eq!(result.modules.len(), 2);

    let util = &result.modules[0];
    assert_eq!(util.relative_path, "app/util.js");
    assert!(util.text.starts_with("YUI.add(\"app/util\", function (Y, NAME, __imports__, __exports__) {"));
    assert!(util.text.contains("var answer = 42;\n"));
    assert!(util.text.contains("__es6_export__(\"answer\", answer);"));

    let main = &result.modules[1];
    assert!(main.text.contains("answer = __imports__[\"app/util\"][\"answer\"];"));
    assert!(main.text.contains("print(answer);"));
    assert!(main.text.contains("\"requires\": [\"app/util\"]"));
    assert!(!main.text.contains("import"));

    let rendered = render_stdout(&result.modules);
    assert!(rendered.starts_with("// app/util.js\nYUI.add("));
    assert!(rendered.contains("\n// app/main.js\nYUI.add("));
}

#[test]
fn test_compile_writes_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), &[("app/util", UTIL_AST), ("app/main", MAIN_AST)]);

    let result = compile(&args(&["--out-dir", "dist", "--version-marker", "9.9.9"]), dir.path()).unwrap();
    let expected = vec![
        dir.path().join("dist").join("app/util.js"),
        dir.path().join("dist").join("app/main.js"),
    ];
    assert_eq!(result.emitted_files, expected);

    let written = std::fs::read_to_string(&expected[1]).unwrap();
    assert_eq!(written, result.modules[1].text);
    assert!(written.contains("}, \"9.9.9\", {"));
}

#[test]
fn test_unsupported_export_fails_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), &[("app/util", UTIL_AST), ("app/widget", CLASS_AST)]);

    let err = compile(&args(&["-o", "dist"]), dir.path()).unwrap_err();
    let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
    assert!(chain[0].starts_with("failed to rewrite"));
    assert!(chain.iter().any(|cause| cause.contains("ClassDeclaration")));
    assert!(!dir.path().join("dist").exists());
}

#[test]
fn test_unresolved_import_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), &[("app/main", MAIN_AST)]);

    let err = compile(&args(&[]), dir.path()).unwrap_err();
    assert!(
        err.chain()
            .any(|cause| cause.to_string() == "cannot resolve module `./util` from app/main.js")
    );
}

#[test]
fn test_write_outputs_creates_directories() {
    let dir = tempfile::tempdir().unwrap();
    let modules = vec![EmittedModule {
        name: "deep/nested/mod".to_string(),
        relative_path: "deep/nested/mod.js".to_string(),
        text: "YUI.add();\n".to_string(),
    }];
    let written = write_outputs(&modules, dir.path()).unwrap();
    assert_eq!(written, vec![dir.path().join("deep/nested/mod.js")]);
    assert_eq!(std::fs::read_to_string(&written[0]).unwrap(), "YUI.add();\n");
}

#[test]
fn test_write_outputs_rejects_paths_outside_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("out");
    for bad in ["../escape.js", "a/../../escape.js", "/tmp/abs.js"] {
        let modules = vec![
            EmittedModule {
                name: "ok".to_string(),
                relative_path: "ok.js".to_string(),
                text: "YUI.add();\n".to_string(),
            },
            EmittedModule {
                name: "bad".to_string(),
                relative_path: bad.to_string(),
                text: "YUI.add();\n".to_string(),
            },
        ];
        let err = write_outputs(&modules, &out_dir).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("output path `{bad}` is not inside the output directory")
        );
        assert!(!out_dir.exists(), "nothing is written when {bad} is rejected");
    }
    assert!(!dir.path().join("escape.js").exists());
}

#[test]
fn test_compile_rejects_escaping_relative_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("modules.json"),
        serde_json::json!({
            "modules": [{
                "name": "escape",
                "relativePath": "../escape.js",
                "ast": { "type": "Program", "sourceType": "module", "body": [] }
            }]
        })
        .to_string(),
    )
    .unwrap();

    let out_dir = dir.path().join("out");
    let err = compile(&args(&["--out-dir", out_dir.to_str().unwrap()]), dir.path()).unwrap_err();
    assert!(
        err.chain()
            .any(|cause| cause.to_string().contains("`../escape.js` is not inside"))
    );
    assert!(!dir.path().join("escape.js").exists());
}
