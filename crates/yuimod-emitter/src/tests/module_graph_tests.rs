use super::*;
use crate::estree::*;

#[test]
fn test_resolve_module_name_relative() {
    let resolve = |importer, specifier| resolve_module_name(importer, specifier);
    assert_eq!(resolve("app/main", "./util").as_deref(), Some("app/util"));
    assert_eq!(resolve("app/main", "./util.js").as_deref(), Some("app/util"));
    assert_eq!(resolve("app/sub/main", "../lib/x").as_deref(), Some("app/lib/x"));
    assert_eq!(resolve("lib/a", "../x").as_deref(), Some("x"));
    assert_eq!(resolve("main", "./dep").as_deref(), Some("dep"));
    assert_eq!(resolve("a/b", "./c/./d").as_deref(), Some("a/c/d"));
}

#[test]
fn test_resolve_module_name_above_root() {
    assert_eq!(resolve_module_name("main", "../x"), None);
    assert_eq!(resolve_module_name("lib/a", "../../x"), None);
    assert_eq!(resolve_module_name("app/sub/main", "../../../x"), None);
}

#[test]
fn test_source_above_root_is_unresolved() {
    let mut graph = ModuleGraph::new();
    graph.add_module("x", "x.js", program(vec![])).unwrap();
    graph
        .add_module("main", "main.js", program(vec![import_default("x", "../../x")]))
        .unwrap();

    let err = graph.resolve_declarations().unwrap_err();
    assert_eq!(
        err,
        EmitError::UnresolvedModule {
            module: "main.js".to_string(),
            specifier: "../../x".to_string(),
        }
    );
}

#[test]
fn test_resolve_module_name_bare() {
    assert_eq!(
        resolve_module_name("app/main", "rsvp/defer").as_deref(),
        Some("rsvp/defer")
    );
    assert_eq!(
        resolve_module_name("app/main", "lodash.js").as_deref(),
        Some("lodash")
    );
}

#[test]
fn test_namespace_ident() {
    let mut graph = ModuleGraph::new();
    let id = graph.add_module("rsvp/defer", "rsvp/defer.js", program(vec![])).unwrap();
    assert_eq!(graph.module(id).namespace_ident(), "rsvp$defer$$");

    let id = graph.add_module("2d-utils", "2d-utils.js", program(vec![])).unwrap();
    assert_eq!(graph.module(id).namespace_ident(), "_2d$utils$$");
}

#[test]
fn test_add_module_rejects_duplicate_names() {
    let mut graph = ModuleGraph::new();
    graph.add_module("a", "a.js", program(vec![])).unwrap();
    let err = graph.add_module("a", "other/a.js", program(vec![])).unwrap_err();
    assert_eq!(err, EmitError::DuplicateModule { name: "a".to_string() });
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_lookup_and_ids_follow_registration_order() {
    let mut graph = ModuleGraph::new();
    assert!(graph.is_empty());
    let a = graph.add_module("a", "a.js", program(vec![])).unwrap();
    let b = graph.add_module("b", "b.js", program(vec![])).unwrap();
    assert_eq!(graph.lookup("b"), Some(b));
    assert_eq!(graph.lookup("c"), None);
    assert_eq!(graph.ids().collect::<Vec<_>>(), [a, b]);
    assert!(graph.get(ModuleId(7)).is_none());
}

#[test]
fn test_resolve_declarations_marks_modules_resolved() {
    let mut graph = ModuleGraph::new();
    let util = graph
        .add_module("app/util", "app/util.js", program(vec![export_declaration(var(&[("x", num(1))]))]))
        .unwrap();
    let main = graph
        .add_module("app/main", "app/main.js", program(vec![import_named(&[("x", "x")], "./util")]))
        .unwrap();

    graph.resolve_declarations().unwrap();

    let main = graph.module(main);
    assert_eq!(main.state, ModuleState::Resolved);
    assert_eq!(main.imports.modules.iter().copied().collect::<Vec<_>>(), [util]);
    assert_eq!(graph.module(util).exports.names.len(), 1);
}

#[test]
fn test_resolve_declarations_skips_resolved_modules() {
    let mut graph = ModuleGraph::new();
    let id = graph.add_module("a", "a.js", program(vec![])).unwrap();
    graph.resolve_declarations().unwrap();
    graph.module_mut(id).state = ModuleState::Rewritten;
    graph.resolve_declarations().unwrap();
    assert_eq!(graph.module(id).state, ModuleState::Rewritten);
}

#[test]
fn test_expect_state_reports_stage_order() {
    let mut graph = ModuleGraph::new();
    let id = graph.add_module("a", "a.js", program(vec![])).unwrap();
    let err = graph.module(id).expect_state(ModuleState::Rewritten).unwrap_err();
    assert_eq!(err.to_string(), "a.js is parsed, expected it to be rewritten");
}
