use super::*;
use crate::estree::*;
use crate::module_graph::ModuleGraph;

/// Registers `dep` and `other` alongside a module `main` with `body`, then
/// collects `main`'s declarations.
fn collect(body: Vec<serde_json::Value>) -> Result<(DeclarationCollection, DeclarationCollection)> {
    let mut graph = ModuleGraph::new();
    let dep = graph.add_module("dep", "dep.js", program(vec![]))?;
    let other = graph.add_module("other", "other.js", program(vec![]))?;
    let main = graph.add_module("main", "main.js", program(body))?;
    collect_declarations(graph.module(main), |specifier| match specifier {
        "./dep" => Some(dep),
        "./other" => Some(other),
        _ => None,
    })
}

#[test]
fn test_import_specifier_names_and_sources() {
    let (imports, exports) = collect(vec![
        import_default("a", "./dep"),
        import_named(&[("b", "c"), ("d", "d")], "./dep"),
        import_namespace("ns", "./other"),
    ])
    .unwrap();

    assert!(exports.names.is_empty());
    let names: Vec<&str> = imports.names.iter().map(String::as_str).collect();
    assert_eq!(names, ["a", "c", "d", "ns"]);
    assert_eq!(imports.modules.len(), 2);
    assert_eq!(imports.declarations.len(), 3);

    let a = imports.find_specifier_by_name("a").unwrap();
    assert_eq!(a.from.as_deref(), Some("default"));
    let c = imports.find_specifier_by_name("c").unwrap();
    assert_eq!(c.from.as_deref(), Some("b"));
    let ns = imports.find_specifier_by_name("ns").unwrap();
    assert_eq!(ns.from, None);
    assert_eq!(imports.declaration_of(ns).unwrap().source, Some(ModuleId(1)));
}

#[test]
fn test_export_specifier_names() {
    let (_, exports) = collect(vec![
        var(&[("x", num(1))]),
        export_specifiers(&[("x", "y")], None),
        export_specifiers(&[("z", "z")], Some("./other")),
        export_declaration(function(Some("f"), &[], vec![])),
        export_declaration(var(&[("a", num(10)), ("b", num(20))])),
        export_default(num(3)),
    ])
    .unwrap();

    let names: Vec<&str> = exports.names.iter().map(String::as_str).collect();
    assert_eq!(names, ["y", "z", "f", "a", "b", "default"]);

    let y = exports.find_specifier_by_name("y").unwrap();
    assert_eq!(y.from.as_deref(), Some("x"));
    assert_eq!(exports.declaration_of(y).unwrap().kind, DeclarationKind::ExportSpecifiers);
    assert_eq!(exports.declaration_of(y).unwrap().source, None);

    let z = exports.find_specifier_by_name("z").unwrap();
    assert_eq!(z.from.as_deref(), Some("z"));
    assert_eq!(exports.declaration_of(z).unwrap().kind, DeclarationKind::ReExport);
    assert_eq!(exports.declaration_of(z).unwrap().source, Some(ModuleId(1)));

    let f = exports.find_specifier_by_name("f").unwrap();
    assert_eq!(f.from, None);
    assert_eq!(exports.declaration_of(f).unwrap().statement_index, 3);

    // Only the re-export references another module.
    assert_eq!(exports.modules.iter().copied().collect::<Vec<_>>(), [ModuleId(1)]);
}

#[test]
fn test_side_effect_import_adds_module_without_names() {
    let (imports, _) = collect(vec![import_bare("./other")]).unwrap();
    assert!(imports.names.is_empty());
    assert!(imports.specifiers.is_empty());
    assert_eq!(imports.modules.iter().copied().collect::<Vec<_>>(), [ModuleId(1)]);
    assert_eq!(imports.declarations.len(), 1);
}

#[test]
fn test_duplicate_import_binding_is_rejected() {
    let err = collect(vec![
        import_default("a", "./dep"),
        import_named(&[("a", "a")], "./other"),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        EmitError::DuplicateBinding {
            module: "main.js".to_string(),
            name: "a".to_string(),
        }
    );
}

#[test]
fn test_duplicate_export_name_is_rejected() {
    let err = collect(vec![
        export_declaration(var(&[("a", num(1))])),
        export_specifiers(&[("b", "a")], None),
    ])
    .unwrap_err();
    assert!(matches!(err, EmitError::DuplicateBinding { name, .. } if name == "a"));
}

#[test]
fn test_unresolved_source_is_rejected() {
    let err = collect(vec![import_default("a", "./missing")]).unwrap_err();
    assert_eq!(
        err,
        EmitError::UnresolvedModule {
            module: "main.js".to_string(),
            specifier: "./missing".to_string(),
        }
    );
}

#[test]
fn test_export_all_is_unsupported() {
    let err = collect(vec![export_all("./dep")]).unwrap_err();
    assert_eq!(
        err,
        EmitError::UnsupportedExport {
            module: "main.js".to_string(),
            node_type: "ExportAllDeclaration",
        }
    );
}

#[test]
fn test_add_specifier_reports_taken_names() {
    let mut collection = DeclarationCollection::default();
    let decl = collection.add_declaration(DeclarationKind::ExportSpecifiers, None, 0);
    assert!(collection.add_specifier("a", None, decl));
    assert!(!collection.add_specifier("a", Some("b".to_string()), decl));
    assert_eq!(collection.specifiers.len(), 1);
    assert!(collection.modules.is_empty());
}
