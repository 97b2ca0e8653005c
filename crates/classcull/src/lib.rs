//! Dead CSS class elimination.
//!
//! Given a stylesheet and a set of source files that render markup, this
//! crate determines which class selectors are never referenced and removes
//! the corresponding rules, or individual selector chains, from the
//! stylesheet. Only selector shapes made purely of classes and combinators
//! are acted upon; everything else is conservatively kept.
//!
//! ```no_run
//! use classcull::{optimize_css, Options};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let options = Options {
//!   white_list_classes: vec!["keep-me".into()],
//!   files: Some("src/**/*.jsx".into()),
//! };
//! let css = optimize_css(".keep-me {} .gone {}", options).await?;
//! # Ok(())
//! # }
//! ```

mod file_patterns;
mod live_classes;
mod optimizer;
mod options;
mod stylesheet;

pub use file_patterns::{resolve_file_patterns, FilePatternError, ResolveOptions};
pub use live_classes::LiveClassSet;
pub use optimizer::UnusedClassOptimizer;
pub use options::{FilePatterns, Options};

/// Parse `css`, run the optimizer over it, and serialize the result.
///
/// The AST-level entry point is [`UnusedClassOptimizer::optimize`]; callers
/// that already hold a parsed stylesheet should prefer it and keep control of
/// serialization.
pub async fn optimize_css(css: &str, options: Options) -> anyhow::Result<String> {
  let mut parsed = stylesheet::parse_stylesheet(css)?;
  UnusedClassOptimizer::new(options)
    .optimize(&mut parsed)
    .await?;
  stylesheet::serialize_stylesheet(&parsed)
}
