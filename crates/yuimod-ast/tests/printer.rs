use yuimod_ast::*;

#[test]
fn test_emit_literals() {
    assert_eq!(
        Printer::expression_to_string(&Expression::string("hello")),
        "\"hello\""
    );
    assert_eq!(
        Printer::expression_to_string(&Expression::boolean(true)),
        "true"
    );
    let raw = Expression::Literal(Literal {
        value: serde_json::json!(0.5),
        raw: Some(".5".to_string()),
    });
    assert_eq!(Printer::expression_to_string(&raw), ".5");
}

#[test]
fn test_emit_member_access() {
    let dot = Expression::member(Expression::id("rsvp$defer$$"), "default");
    assert_eq!(Printer::expression_to_string(&dot), "rsvp$defer$$.default");

    let computed = Expression::computed(
        Expression::computed(Expression::id("__imports__"), Expression::string("a")),
        Expression::string("b"),
    );
    assert_eq!(
        Printer::expression_to_string(&computed),
        "__imports__[\"a\"][\"b\"]"
    );
}

#[test]
fn test_emit_var_decl() {
    assert_eq!(Printer::emit_to_string(&Statement::var("x", None)), "var x;");
    assert_eq!(
        Printer::emit_to_string(&Statement::var("y", Some(Expression::id("z")))),
        "var y = z;"
    );
}

#[test]
fn test_emit_return_statement() {
    assert_eq!(Printer::emit_to_string(&Statement::ret(None)), "return;");
    assert_eq!(
        Printer::emit_to_string(&Statement::ret(Some(Expression::id("__exports__")))),
        "return __exports__;"
    );
}

#[test]
fn test_emit_function_declaration() {
    let func = Statement::function(
        "__es6_export__",
        &["name", "value"],
        vec![Statement::expr(Expression::assign(
            MemberExpression::computed(Expression::id("__exports__"), Expression::id("name")),
            Expression::id("value"),
        ))],
    );
    assert_eq!(
        Printer::emit_to_string(&func),
        "function __es6_export__(name, value) {\n    __exports__[name] = value;\n}"
    );
}

#[test]
fn test_emit_object_literal_multiline() {
    let object = Expression::object(vec![
        Property::init(Expression::string("es"), Expression::boolean(true)),
        Property::init(
            Expression::string("requires"),
            Expression::array(vec![Some(Expression::string("a"))]),
        ),
    ]);
    assert_eq!(
        Printer::expression_to_string(&object),
        "{\n    \"es\": true,\n    \"requires\": [\"a\"]\n}"
    );
}

#[test]
fn test_emit_directive() {
    assert_eq!(
        Printer::emit_to_string(&Statement::directive("use strict")),
        "\"use strict\";"
    );
}

#[test]
fn test_print_program_nests_function_bodies() {
    let program = Program::new(vec![Statement::expr(Expression::call(
        Expression::member(Expression::id("YUI"), "add"),
        vec![
            Expression::string("m"),
            Expression::function(None, &["Y"], vec![Statement::ret(None)]),
        ],
    ))]);
    assert_eq!(
        Printer::print_program(&program),
        "YUI.add(\"m\", function (Y) {\n    return;\n});\n"
    );
}
