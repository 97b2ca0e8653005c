use swc_core::common::input::StringInput;
use swc_core::common::sync::Lrc;
use swc_core::common::{FileName, SourceMap};
use swc_core::ecma::ast::Module;
use swc_core::ecma::parser::lexer::Lexer;
use swc_core::ecma::parser::{EsSyntax, Parser, Syntax, TsSyntax};

use crate::ExtractError;

/// Pick a parser syntax from the file extension. Plain JavaScript is parsed
/// with JSX enabled since the scanned sources are component files.
fn syntax_for_file_name(name: &str) -> Syntax {
  if name.ends_with(".ts") || name.ends_with(".tsx") || name.ends_with(".cts") {
    Syntax::Typescript(TsSyntax {
      tsx: name.ends_with(".tsx"),
      ..Default::default()
    })
  } else {
    Syntax::Es(EsSyntax {
      jsx: true,
      ..Default::default()
    })
  }
}

pub(crate) fn parse_source(code: &str, file_name: &str) -> Result<Module, ExtractError> {
  let cm: Lrc<SourceMap> = Default::default();
  let fm = cm.new_source_file(Lrc::new(FileName::Anon), code.into());

  let lexer = Lexer::new(
    syntax_for_file_name(file_name),
    Default::default(),
    StringInput::from(&*fm),
    None,
  );

  let mut parser = Parser::new_from(lexer);
  let module = parser.parse_module().map_err(ExtractError::Parse)?;

  // Recovered errors still mean the file cannot be analyzed safely.
  if let Some(error) = parser.take_errors().into_iter().next() {
    return Err(ExtractError::Parse(error));
  }

  Ok(module)
}
