//! Resolution of source-file glob patterns into a flat file list.

use std::path::{Path, PathBuf};

use glob_match::glob_match;
use indexmap::IndexSet;

/// Options forwarded to every glob scan.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
  /// Patterns whose matches are excluded from the result.
  pub ignore: Vec<String>,
}

impl Default for ResolveOptions {
  fn default() -> Self {
    Self {
      ignore: vec!["bower_components/**".into(), "node_modules/**".into()],
    }
  }
}

#[derive(Debug, thiserror::Error)]
pub enum FilePatternError {
  #[error("invalid file pattern `{pattern}`")]
  Pattern {
    pattern: String,
    #[source]
    source: glob::PatternError,
  },
  #[error("failed to scan file pattern")]
  Scan(#[from] glob::GlobError),
}

/// Resolve glob patterns into a deduplicated flat list of paths, in pattern
/// order. A pattern that cannot be compiled or a directory that cannot be
/// scanned fails the whole resolution.
pub fn resolve_file_patterns(
  patterns: &[String],
  options: &ResolveOptions,
) -> Result<Vec<PathBuf>, FilePatternError> {
  let mut files: IndexSet<PathBuf> = IndexSet::new();

  for pattern in patterns {
    let entries = glob::glob(pattern).map_err(|source| FilePatternError::Pattern {
      pattern: pattern.clone(),
      source,
    })?;

    for entry in entries {
      let path = entry?;
      if !is_ignored(&path, &options.ignore) {
        files.insert(path);
      }
    }
  }

  Ok(files.into_iter().collect())
}

fn is_ignored(path: &Path, ignore: &[String]) -> bool {
  let path = path.to_string_lossy();
  ignore.iter().any(|pattern| glob_match(pattern, path.as_ref()))
}
