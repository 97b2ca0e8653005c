//! Static extraction of referenced CSS class names from component sources.
//!
//! Two passes run over each parsed module and their results are merged:
//!
//! 1. Arguments of the first call to the `classnames` composer, when that
//!    module is imported.
//! 2. Literal `className` attribute values in JSX markup, split on
//!    whitespace.
//!
//! Both passes only recognize patterns that are provably class names and
//! treat everything else as "no information" rather than guessing.

use indexmap::IndexSet;
use swc_core::ecma::visit::VisitWith;

mod composer;
mod jsx;
mod parse;

use composer::{find_composer_alias, ComposerCallCollector};
use jsx::JsxClassNameCollector;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
  #[error("failed to parse source module")]
  Parse(swc_core::ecma::parser::error::Error),
}

/// Extract every class name `code` provably references. `file_name` selects
/// the parser syntax; the result is deduplicated in discovery order.
///
/// Unparseable source is a hard error: a file that cannot be analyzed must
/// fail the run rather than silently contribute nothing.
pub fn extract_class_names(code: &str, file_name: &str) -> Result<Vec<String>, ExtractError> {
  let module = parse::parse_source(code, file_name)?;

  let mut class_names: IndexSet<String> = IndexSet::new();

  if let Some(alias) = find_composer_alias(&module) {
    let mut collector = ComposerCallCollector::new(alias);
    module.visit_with(&mut collector);
    class_names.extend(collector.into_class_names());
  }

  let mut collector = JsxClassNameCollector::default();
  module.visit_with(&mut collector);
  class_names.extend(collector.into_class_names());

  Ok(class_names.into_iter().collect())
}
