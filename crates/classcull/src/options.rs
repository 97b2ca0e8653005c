use serde::Deserialize;

/// Options recognized by [`crate::UnusedClassOptimizer`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
  /// Class names that are always treated as live.
  pub white_list_classes: Vec<String>,
  /// Glob pattern(s) selecting the source files to scan for class usage.
  pub files: Option<FilePatterns>,
}

/// A single glob pattern or a list of patterns.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FilePatterns {
  One(String),
  Many(Vec<String>),
}

impl FilePatterns {
  pub fn as_patterns(&self) -> &[String] {
    match self {
      FilePatterns::One(pattern) => std::slice::from_ref(pattern),
      FilePatterns::Many(patterns) => patterns.as_slice(),
    }
  }
}

impl From<&str> for FilePatterns {
  fn from(pattern: &str) -> Self {
    FilePatterns::One(pattern.to_string())
  }
}

impl From<String> for FilePatterns {
  fn from(pattern: String) -> Self {
    FilePatterns::One(pattern)
  }
}

impl From<Vec<String>> for FilePatterns {
  fn from(patterns: Vec<String>) -> Self {
    FilePatterns::Many(patterns)
  }
}
