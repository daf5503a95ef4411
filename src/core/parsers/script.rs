use swc_common::{FileName, Globals, GLOBALS, SourceMap, Spanned, sync::Lrc};
use swc_ecma_ast::Program;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax, error::Error as ParserError};

use crate::core::{error::ExtractError, file_kind::FileKind};

/// Parse script source into a swc `Program`.
///
/// Sources are parsed with the TypeScript syntax (decorators enabled), which
/// accepts the plain JavaScript found in Ember apps as well as `.ts` files.
/// Both fatal and recoverable parser errors are reported as syntax errors.
pub fn parse_script_source(code: &str, file_name: Option<&str>) -> Result<Program, ExtractError> {
    GLOBALS.set(&Globals::new(), || {
        let source_map: Lrc<SourceMap> = Default::default();
        let name = match file_name {
            Some(path) => FileName::Real(path.into()),
            None => FileName::Anon,
        };
        let source_file = source_map.new_source_file(name.into(), code.to_string());

        let syntax = Syntax::Typescript(TsSyntax {
            decorators: true,
            ..Default::default()
        });
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let program = parser
            .parse_program()
            .map_err(|e| to_syntax_error(&source_map, &e))?;

        if let Some(e) = parser.take_errors().first() {
            return Err(to_syntax_error(&source_map, e));
        }

        Ok(program)
    })
}

fn to_syntax_error(source_map: &SourceMap, error: &ParserError) -> ExtractError {
    let loc = source_map.lookup_char_pos(error.span().lo);
    ExtractError::Syntax {
        kind: FileKind::Script,
        line: loc.line,
        column: loc.col.0 + 1,
        message: error.kind().msg().to_string(),
    }
}
