use handlebars::template::Template;

use crate::core::{error::ExtractError, file_kind::FileKind};

/// Parse Handlebars source into a compiled `Template`.
///
/// The element tree keeps every helper call with its raw parameters, which is
/// all the template matchers read. Errors without a position (bad literal
/// parameters) are reported at the start of the file.
pub fn parse_template_source(code: &str) -> Result<Template, ExtractError> {
    Template::compile(code).map_err(|err| {
        let (line, column) = err.pos().unwrap_or((1, 1));
        ExtractError::Syntax {
            kind: FileKind::Template,
            line,
            column,
            message: err.reason().to_string(),
        }
    })
}
