//! The rule walk: drops selector chains proven dead and deletes rules with
//! no surviving chain.

use swc_core::css::ast::{
  ComponentValue, QualifiedRule, QualifiedRulePrelude, Rule, SimpleBlock, Stylesheet,
};

use classcull_selectors::{can_omit, is_supported};

use crate::live_classes::LiveClassSet;
use crate::options::Options;

/// Removes style rules whose classes are never referenced by the scanned
/// sources or the allow-list.
#[derive(Debug, Default)]
pub struct UnusedClassOptimizer {
  options: Options,
}

impl UnusedClassOptimizer {
  pub fn new(options: Options) -> Self {
    Self { options }
  }

  /// Build the live class set for this run, then walk every rule and drop
  /// each selector chain that is supported and provably dead. A rule with no
  /// surviving chain is deleted. Chains whose shape is not understood are
  /// left completely untouched, as is the whole stylesheet when nothing can
  /// be removed.
  pub async fn optimize(&self, stylesheet: &mut Stylesheet) -> anyhow::Result<()> {
    let live_classes = LiveClassSet::collect(&self.options).await?;
    prune_stylesheet(stylesheet, &live_classes);
    Ok(())
  }
}

fn prune_stylesheet(stylesheet: &mut Stylesheet, live_classes: &LiveClassSet) {
  stylesheet.rules.retain_mut(|rule| match rule {
    Rule::QualifiedRule(rule) => !prune_qualified_rule(rule, live_classes),
    Rule::AtRule(rule) => {
      if let Some(block) = &mut rule.block {
        prune_simple_block(block, live_classes);
      }

      true
    }
    Rule::ListOfComponentValues(_) => true,
  });
}

/// Returns true when the rule lost every selector chain and must be deleted.
fn prune_qualified_rule(rule: &mut QualifiedRule, live_classes: &LiveClassSet) -> bool {
  let QualifiedRulePrelude::SelectorList(selectors) = &mut rule.prelude else {
    return false;
  };

  let chain_count = selectors.children.len();
  selectors
    .children
    .retain(|selector| !(is_supported(selector) && can_omit(selector, live_classes.names())));

  let removed = chain_count - selectors.children.len();
  if removed > 0 {
    tracing::debug!(removed, "dropped dead selector chains");
  }

  selectors.children.is_empty()
}

fn prune_simple_block(block: &mut SimpleBlock, live_classes: &LiveClassSet) {
  block.value.retain_mut(|component| match component {
    ComponentValue::QualifiedRule(rule) => !prune_qualified_rule(rule, live_classes),
    ComponentValue::AtRule(rule) => {
      if let Some(block) = &mut rule.block {
        prune_simple_block(block, live_classes);
      }

      true
    }
    _ => true,
  });
}
