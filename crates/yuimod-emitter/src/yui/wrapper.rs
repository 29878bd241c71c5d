//! Module wrapper assembly.

use yuimod_ast::{Expression, MemberExpression, Property, Statement};

use super::YuiOptions;
use crate::module_graph::{Module, ModuleState};

/// Wrap a rewritten module body into the loader registration call.
///
/// `prelude` and `dependencies` come from [`super::build_prelude`] and
/// [`super::build_dependencies`] for this module.
#[tracing::instrument(level = "debug", skip_all, fields(module = %module.name))]
pub(super) fn wrap_module(
    module: &mut Module,
    prelude: Vec<Statement>,
    dependencies: Vec<String>,
    options: &YuiOptions,
) {
    let original = std::mem::take(&mut module.ast.body);

    let mut body = Vec::with_capacity(original.len() + prelude.len() + 3);
    body.push(Statement::directive("use strict"));
    body.push(export_helper(options));
    body.extend(prelude);
    body.extend(original);
    body.push(Statement::ret(Some(Expression::id(&options.exports_param))));

    let factory = Expression::function(
        None,
        &[
            options.host_param.as_str(),
            options.name_param.as_str(),
            options.imports_param.as_str(),
            options.exports_param.as_str(),
        ],
        body,
    );
    let requires = dependencies
        .into_iter()
        .map(|name| Some(Expression::string(name)))
        .collect();
    let config = Expression::object(vec![
        Property::init(Expression::string("es"), Expression::boolean(true)),
        Property::init(Expression::string("requires"), Expression::array(requires)),
    ]);

    module.ast.body = vec![Statement::expr(Expression::call(
        loader_callee(&options.loader),
        vec![
            Expression::string(&module.name),
            factory,
            Expression::string(&options.version),
            config,
        ],
    ))];
    module.ast.filename = Some(module.relative_path.clone());
    module.state = ModuleState::Wrapped;
}

/// `function __es6_export__(name, value) { __exports__[name] = value; }`
fn export_helper(options: &YuiOptions) -> Statement {
    Statement::function(
        &options.export_helper,
        &["name", "value"],
        vec![Statement::expr(Expression::assign(
            MemberExpression::computed(Expression::id(&options.exports_param), Expression::id("name")),
            Expression::id("value"),
        ))],
    )
}

/// `YUI.add` → `YUI` `.add`
fn loader_callee(loader: &str) -> Expression {
    let mut parts = loader.split('.');
    let head = Expression::id(parts.next().unwrap_or_default());
    parts.fold(head, Expression::member)
}
