//! Construction of the set of class names that are live for one run.

use anyhow::{anyhow, Context};
use indexmap::IndexSet;
use tokio::task::JoinSet;

use classcull_class_extractor::extract_class_names;

use crate::file_patterns::{resolve_file_patterns, ResolveOptions};
use crate::options::Options;

/// The class names proven to be referenced during one optimizer run, merged
/// from every scanned source file plus the configured allow-list.
///
/// Built once before the rule walk and read-only afterwards.
#[derive(Debug, Default)]
pub struct LiveClassSet {
  names: IndexSet<String>,
}

impl LiveClassSet {
  /// Resolve the configured file patterns, extract class names from every
  /// matched file, and merge the results with the allow-list.
  ///
  /// Files are read and analyzed concurrently; all extractions are joined
  /// before the set is assembled, and any read or parse failure fails the
  /// whole run.
  pub async fn collect(options: &Options) -> anyhow::Result<Self> {
    let patterns = options
      .files
      .as_ref()
      .map(|files| files.as_patterns())
      .unwrap_or_default();
    let files = resolve_file_patterns(patterns, &ResolveOptions::default())?;

    let mut jobs = JoinSet::new();
    for (index, path) in files.into_iter().enumerate() {
      jobs.spawn(async move {
        let code = tokio::fs::read_to_string(&path)
          .await
          .with_context(|| format!("failed to read {}", path.display()))?;
        let class_names = extract_class_names(&code, &path.to_string_lossy())
          .map_err(|err| anyhow!("failed to analyze {}: {err}", path.display()))?;

        Ok::<_, anyhow::Error>((index, class_names))
      });
    }

    let mut extracted = Vec::new();
    while let Some(joined) = jobs.join_next().await {
      extracted.push(joined.context("class extraction task failed")??);
    }

    // Tasks complete in arbitrary order; merge in original file order.
    extracted.sort_by_key(|(index, _)| *index);

    let mut names: IndexSet<String> = IndexSet::new();
    for (_, class_names) in extracted {
      names.extend(class_names);
    }
    names.extend(options.white_list_classes.iter().cloned());

    tracing::debug!(live_classes = names.len(), "collected live class set");

    Ok(Self { names })
  }

  pub fn names(&self) -> &IndexSet<String> {
    &self.names
  }

  pub fn contains(&self, class_name: &str) -> bool {
    self.names.contains(class_name)
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use assert_fs::prelude::*;
  use assert_fs::TempDir;
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::options::FilePatterns;

  fn options_for(root: &TempDir, suffix: &str, white_list: &[&str]) -> Options {
    Options {
      white_list_classes: white_list.iter().map(|name| name.to_string()).collect(),
      files: Some(FilePatterns::from(
        root.path().join(suffix).to_string_lossy().into_owned(),
      )),
    }
  }

  #[tokio::test]
  async fn merges_extracted_classes_with_the_allow_list() {
    let root = TempDir::new().unwrap();
    root
      .child("x.jsx")
      .write_str("export default <div className=\"x shared\" />;")
      .unwrap();
    root
      .child("y.jsx")
      .write_str("export default <div className=\"y shared\" />;")
      .unwrap();

    let live = LiveClassSet::collect(&options_for(&root, "*.jsx", &["extra"]))
      .await
      .unwrap();

    let names: Vec<&str> = live.names().iter().map(String::as_str).collect();
    assert_eq!(names, ["x", "shared", "y", "extra"]);
  }

  #[tokio::test]
  async fn allow_list_alone_needs_no_files() {
    let live = LiveClassSet::collect(&Options {
      white_list_classes: vec!["kept".into()],
      files: None,
    })
    .await
    .unwrap();

    assert_eq!(live.len(), 1);
    assert!(live.contains("kept"));
  }

  #[tokio::test]
  async fn fails_when_a_file_cannot_be_parsed() {
    let root = TempDir::new().unwrap();
    root.child("broken.js").write_str("const = ;").unwrap();

    let result = LiveClassSet::collect(&options_for(&root, "*.js", &[])).await;

    assert!(result.is_err());
  }
}
