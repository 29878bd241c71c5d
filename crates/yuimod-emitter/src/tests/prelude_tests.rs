use super::*;
use crate::estree::*;
use yuimod_ast::Printer;

/// `a` and `b` export things; `main` has `body`. All resolved.
fn graph_with(body: Vec<serde_json::Value>) -> (ModuleGraph, ModuleId) {
    let mut graph = ModuleGraph::new();
    graph
        .add_module(
            "lib/a",
            "lib/a.js",
            program(vec![export_declaration(var(&[("x", num(1))]))]),
        )
        .unwrap();
    graph
        .add_module(
            "lib/b",
            "lib/b.js",
            program(vec![export_declaration(function(Some("z"), &[], vec![ret(num(30))]))]),
        )
        .unwrap();
    let main = graph.add_module("lib/main", "lib/main.js", program(body)).unwrap();
    graph.resolve_declarations().unwrap();
    (graph, main)
}

fn printed(statements: &[Statement]) -> Vec<String> {
    statements.iter().map(Printer::emit_to_string).collect()
}

#[test]
fn test_dependencies_imports_first_then_exports() {
    let (graph, main) = graph_with(vec![
        export_specifiers(&[("z", "z")], Some("./b")),
        import_default("a", "./a"),
        import_named(&[("x", "y")], "./a"),
    ]);
    let deps = build_dependencies(&graph, graph.module(main)).unwrap();
    assert_eq!(deps, ["lib/a", "lib/b"]);
}

#[test]
fn test_dependencies_are_deduplicated_across_collections() {
    let (graph, main) = graph_with(vec![
        import_named(&[("x", "x")], "./b"),
        export_specifiers(&[("z", "z")], Some("./b")),
        import_bare("./a"),
    ]);
    let module = graph.module(main);
    let first = build_dependencies(&graph, module).unwrap();
    assert_eq!(first, ["lib/b", "lib/a"]);
    assert_eq!(build_dependencies(&graph, module).unwrap(), first);
}

#[test]
fn test_dependency_without_declaration_is_an_error() {
    let (mut graph, main) = graph_with(vec![]);
    let a = graph.lookup("lib/a").unwrap();
    graph.module_mut(main).imports.modules.insert(a);

    let err = build_dependencies(&graph, graph.module(main)).unwrap_err();
    assert_eq!(
        err,
        EmitError::MissingDeclaration {
            module: "lib/main.js".to_string(),
            source: "lib/a".to_string(),
        }
    );
}

#[test]
fn test_prelude_binds_imports_and_forwards_re_exports() {
    let (graph, main) = graph_with(vec![
        import_default("a", "./a"),
        import_named(&[("x", "y")], "./a"),
        import_namespace("b", "./b"),
        export_specifiers(&[("z", "z"), ("z", "w")], Some("./b")),
        export_declaration(var(&[("local", num(1))])),
    ]);
    let prelude = build_prelude(&graph, graph.module(main), &YuiOptions::default()).unwrap();
    assert_eq!(
        printed(&prelude),
        [
            "var a;",
            "a = __imports__[\"lib/a\"][\"default\"];",
            "var y;",
            "y = __imports__[\"lib/a\"][\"x\"];",
            "var b;",
            "b = __imports__[\"lib/b\"];",
            "__es6_export__(\"z\", __imports__[\"lib/b\"][\"z\"]);",
            "__es6_export__(\"w\", __imports__[\"lib/b\"][\"z\"]);",
        ]
    );
}

#[test]
fn test_default_re_export_is_forwarded() {
    let (graph, main) = graph_with(vec![export_specifiers(&[("default", "default")], Some("./a"))]);
    let prelude = build_prelude(&graph, graph.module(main), &YuiOptions::default()).unwrap();
    assert_eq!(
        printed(&prelude),
        ["__es6_export__(\"default\", __imports__[\"lib/a\"][\"default\"]);"]
    );
}

#[test]
fn test_prelude_uses_configured_names() {
    let (graph, main) = graph_with(vec![import_named(&[("x", "x")], "./a")]);
    let options = YuiOptions {
        imports_param: "imports".to_string(),
        ..YuiOptions::default()
    };
    let prelude = build_prelude(&graph, graph.module(main), &options).unwrap();
    assert_eq!(printed(&prelude)[1], "x = imports[\"lib/a\"][\"x\"];");
}

#[test]
fn test_export_name_without_specifier_is_an_error() {
    let (mut graph, main) = graph_with(vec![]);
    graph.module_mut(main).exports.names.insert("ghost".to_string());

    let err = build_prelude(&graph, graph.module(main), &YuiOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "no specifier found for name `ghost` in lib/main.js"
    );
}
