//! Matchers over swc script nodes.
//!
//! Each matcher inspects a single node and returns what it names, without
//! touching any accumulator. The walker decides how results are recorded.

use swc_ecma_ast::{
    BlockStmt, BlockStmtOrExpr, CallExpr, Callee, ClassMethod, ClassProp, Expr, ExprOrSpread,
    Lit, MemberProp, ObjectLit, Prop, PropName, PropOrSpread, Stmt, SuperProp,
};

const CONTROLLER_FOR: &str = "controllerFor";
const NEEDS: &str = "needs";
const RENDER_TEMPLATE: &str = "renderTemplate";
const RENDER: &str = "render";

/// Names collected from one `renderTemplate` hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outlet {
    pub controllers: Vec<String>,
    pub templates: Vec<String>,
}

impl Outlet {
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty() && self.templates.is_empty()
    }
}

/// `x.controllerFor('post')` or `super.controllerFor('post')` yields `post`.
pub fn controller_for(call: &CallExpr) -> Option<String> {
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    let is_controller_for = match &**callee {
        Expr::Member(member) => {
            matches!(&member.prop, MemberProp::Ident(prop) if prop.sym == CONTROLLER_FOR)
        }
        Expr::SuperProp(sup) => {
            matches!(&sup.prop, SuperProp::Ident(prop) if prop.sym == CONTROLLER_FOR)
        }
        _ => false,
    };
    if !is_controller_for {
        return None;
    }
    call.args.first().and_then(string_arg)
}

/// `needs: 'post'` or `needs: ['post', 'comments']` inside an object literal.
pub fn needs(prop: &Prop) -> Option<Vec<String>> {
    let Prop::KeyValue(kv) = prop else {
        return None;
    };
    if !is_named(&kv.key, NEEDS) {
        return None;
    }
    needs_value(&kv.value)
}

/// `needs = ['post']` as a class field.
pub fn class_needs(prop: &ClassProp) -> Option<Vec<String>> {
    if !is_named(&prop.key, NEEDS) {
        return None;
    }
    prop.value.as_deref().and_then(needs_value)
}

fn needs_value(value: &Expr) -> Option<Vec<String>> {
    match value {
        Expr::Lit(_) => string_value(value).map(|name| vec![name]),
        Expr::Array(array) => Some(
            array
                .elems
                .iter()
                .flatten()
                .filter(|elem| elem.spread.is_none())
                .filter_map(|elem| string_value(&elem.expr))
                .collect(),
        ),
        _ => None,
    }
}

/// `renderTemplate: function () { ... }`, its arrow form with a block body,
/// or the method shorthand `renderTemplate() { ... }`.
pub fn render_outlet(prop: &Prop) -> Option<Outlet> {
    match prop {
        Prop::KeyValue(kv) if is_named(&kv.key, RENDER_TEMPLATE) => {
            function_body(&kv.value).map(outlet_from_body)
        }
        Prop::Method(method) if is_named(&method.key, RENDER_TEMPLATE) => {
            method.function.body.as_ref().map(outlet_from_body)
        }
        _ => None,
    }
}

/// `renderTemplate() { ... }` as a class method.
pub fn class_render_outlet(method: &ClassMethod) -> Option<Outlet> {
    if !is_named(&method.key, RENDER_TEMPLATE) {
        return None;
    }
    method.function.body.as_ref().map(outlet_from_body)
}

fn function_body(value: &Expr) -> Option<&BlockStmt> {
    match value {
        Expr::Fn(func) => func.function.body.as_ref(),
        Expr::Arrow(arrow) => match &*arrow.body {
            BlockStmtOrExpr::BlockStmt(body) => Some(body),
            BlockStmtOrExpr::Expr(_) => None,
        },
        _ => None,
    }
}

/// Only `this.render(...)` calls that are top-level statements of the hook
/// body count; nested calls are ignored.
fn outlet_from_body(body: &BlockStmt) -> Outlet {
    let mut outlet = Outlet::default();

    let calls = body.stmts.iter().filter_map(|stmt| match stmt {
        Stmt::Expr(expr_stmt) => match &*expr_stmt.expr {
            Expr::Call(call) if is_this_render(call) => Some(call),
            _ => None,
        },
        _ => None,
    });

    for call in calls {
        for arg in &call.args {
            if arg.spread.is_some() {
                continue;
            }
            match &*arg.expr {
                Expr::Object(options) => read_render_options(options, &mut outlet),
                expr => outlet.templates.extend(string_value(expr)),
            }
        }
    }

    outlet
}

fn read_render_options(options: &ObjectLit, outlet: &mut Outlet) {
    for prop in &options.props {
        let PropOrSpread::Prop(prop) = prop else {
            continue;
        };
        let Prop::KeyValue(kv) = &**prop else {
            continue;
        };
        if is_named(&kv.key, "into") {
            outlet.templates.extend(string_value(&kv.value));
        } else if is_named(&kv.key, "controller") {
            outlet.controllers.extend(string_value(&kv.value));
        }
    }
}

fn is_this_render(call: &CallExpr) -> bool {
    let Callee::Expr(callee) = &call.callee else {
        return false;
    };
    let Expr::Member(member) = &**callee else {
        return false;
    };
    matches!(&*member.obj, Expr::This(_))
        && matches!(&member.prop, MemberProp::Ident(prop) if prop.sym == RENDER)
}

fn is_named(key: &PropName, name: &str) -> bool {
    matches!(key, PropName::Ident(ident) if ident.sym.as_str() == name)
}

fn string_arg(arg: &ExprOrSpread) -> Option<String> {
    if arg.spread.is_some() {
        return None;
    }
    string_value(&arg.expr)
}

fn string_value(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|s| s.to_string()),
        _ => None,
    }
}
