//! Stylesheet parse and serialize helpers for the text-level entry point.

use std::sync::Arc;

use anyhow::anyhow;
use swc_core::common::input::StringInput;
use swc_core::common::{FileName, SourceMap};
use swc_core::css::ast::Stylesheet;
use swc_core::css::codegen::{writer::basic::BasicCssWriter, CodeGenerator, CodegenConfig, Emit};
use swc_core::css::parser::{parse_string_input, parser::ParserConfig};

pub(crate) fn parse_stylesheet(css: &str) -> anyhow::Result<Stylesheet> {
  let cm: Arc<SourceMap> = Default::default();
  let fm = cm.new_source_file(FileName::Custom("input.css".into()).into(), css.into());
  let mut errors = vec![];

  let stylesheet = parse_string_input::<Stylesheet>(
    StringInput::from(&*fm),
    None,
    ParserConfig::default(),
    &mut errors,
  )
  .map_err(|err| anyhow!("failed to parse stylesheet: {err:?}"))?;

  if let Some(error) = errors.into_iter().next() {
    return Err(anyhow!("failed to parse stylesheet: {error:?}"));
  }

  Ok(stylesheet)
}

pub(crate) fn serialize_stylesheet(stylesheet: &Stylesheet) -> anyhow::Result<String> {
  let mut output = String::new();
  {
    let writer = BasicCssWriter::new(&mut output, None, Default::default());
    let mut generator = CodeGenerator::new(writer, CodegenConfig { minify: false });
    generator
      .emit(stylesheet)
      .map_err(|err| anyhow!("failed to serialize stylesheet: {err}"))?;
  }

  Ok(output)
}
