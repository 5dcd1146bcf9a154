use std::{path::Path, sync::Arc};

use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::error::{Error, Result};

pub struct ParsedJSX {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Parse JSX/TSX source code string into an AST.
///
/// `.ts` files are parsed without JSX so that angle-bracket type assertions
/// keep working; every other extension gets TSX syntax.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing.
pub fn parse_jsx_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedJSX> {
    use swc_common::GLOBALS;

    let tsx = Path::new(file_path).extension().and_then(|e| e.to_str()) != Some("ts");

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser.parse_module().map_err(|e| Error::Parse {
            path: file_path.to_string(),
            message: format!("{:?}", e),
        })?;

        Ok(ParsedJSX { module, source_map })
    })
}

#[cfg(test)]
pub(crate) fn parse_for_test(code: &str, file_path: &str) -> ParsedJSX {
    let source_map = Arc::new(SourceMap::default());
    parse_jsx_source(code.to_string(), file_path, source_map).expect("parse failed")
}
