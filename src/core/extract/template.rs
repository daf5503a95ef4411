//! Matchers over Handlebars helper calls.

use handlebars::template::{HelperTemplate, Parameter};
use serde_json::Value;

const PARTIAL: &str = "partial";
const RENDER: &str = "render";
const VIEW: &str = "view";

/// `{{partial "foo"}}`: the first parameter's source text.
pub fn partial(helper: &HelperTemplate) -> Option<String> {
    if helper.name.as_name() != Some(PARTIAL) {
        return None;
    }
    helper.params.first().and_then(name_of)
}

/// `{{render "foo" model}}`: the first string literal parameter, wherever it sits.
pub fn render(helper: &HelperTemplate) -> Option<String> {
    if helper.name.as_name() != Some(RENDER) {
        return None;
    }
    helper
        .params
        .iter()
        .find(|param| matches!(param, Parameter::Literal(Value::String(_))))
        .and_then(name_of)
}

/// `{{view "foo"}}`: every parameter's source text, in order.
pub fn view(helper: &HelperTemplate) -> Vec<String> {
    if helper.name.as_name() != Some(VIEW) {
        return Vec::new();
    }
    helper.params.iter().filter_map(name_of).collect()
}

/// Paths keep their raw text and scalar literals their value; `null`,
/// `undefined`, array/object literals and subexpressions name nothing.
fn name_of(param: &Parameter) -> Option<String> {
    let name = match param {
        Parameter::Path(_) => param.as_name().filter(|raw| *raw != "undefined")?.to_string(),
        Parameter::Literal(Value::String(value)) => value.clone(),
        Parameter::Literal(Value::Number(value)) => value.to_string(),
        Parameter::Literal(Value::Bool(value)) => value.to_string(),
        _ => return None,
    };
    Some(name).filter(|name| !name.is_empty())
}
