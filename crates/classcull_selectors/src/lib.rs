//! Selector-level predicates for the unused-class optimizer.
//!
//! A selector chain is only acted upon when its shape is fully understood:
//! every element must be a class selector or a combinator joining classes.
//! Anything else (ids, attributes, pseudo-classes, tag names) marks the chain
//! as unsupported and the caller leaves it untouched.

use indexmap::IndexSet;
use swc_core::atoms::Atom;
use swc_core::css::ast::{
  CombinatorValue, ComplexSelector, ComplexSelectorChildren, CompoundSelector, SubclassSelector,
};

/// One element of a flattened selector chain.
#[derive(Debug, Clone, PartialEq)]
pub enum SimpleSelector {
  /// A `.class` selector carrying its class name.
  Class(Atom),
  /// A combinator joining two compound selectors.
  Combinator(CombinatorValue),
  /// Any selector element the optimizer does not reason about.
  Other,
}

impl SimpleSelector {
  fn is_class(&self) -> bool {
    matches!(self, SimpleSelector::Class(_))
  }

  fn is_class_or_combinator(&self) -> bool {
    matches!(self, SimpleSelector::Class(_) | SimpleSelector::Combinator(_))
  }
}

/// Flatten a complex selector into its constituent simple selectors, in parse
/// order. Compound selectors contribute one element per constituent, so
/// `.a.b > .c` becomes `[Class(a), Class(b), Combinator(>), Class(c)]`.
pub fn simple_selectors(selector: &ComplexSelector) -> Vec<SimpleSelector> {
  let mut parts = Vec::new();

  for child in &selector.children {
    match child {
      ComplexSelectorChildren::CompoundSelector(compound) => {
        flatten_compound(compound, &mut parts)
      }
      ComplexSelectorChildren::Combinator(combinator) => parts.push(match combinator.value {
        CombinatorValue::Descendant
        | CombinatorValue::Child
        | CombinatorValue::NextSibling
        | CombinatorValue::LaterSibling => SimpleSelector::Combinator(combinator.value.clone()),
        // `||` has no counterpart in the supported chain grammar.
        CombinatorValue::Column => SimpleSelector::Other,
      }),
    }
  }

  parts
}

fn flatten_compound(compound: &CompoundSelector, parts: &mut Vec<SimpleSelector>) {
  if compound.nesting_selector.is_some() {
    parts.push(SimpleSelector::Other);
  }

  if compound.type_selector.is_some() {
    parts.push(SimpleSelector::Other);
  }

  for subclass in &compound.subclass_selectors {
    parts.push(match subclass {
      SubclassSelector::Class(class) => SimpleSelector::Class(class.text.value.clone()),
      _ => SimpleSelector::Other,
    });
  }
}

/// Whether the optimizer understands this selector chain well enough to
/// reason about it. The first and last element must be a class selector and
/// every interior element must be a class or a combinator.
///
/// Supported shapes:
/// - `.a`
/// - `.a.b`
/// - `.a .b`
/// - `.a > .b`
/// - `.a + .b`
/// - `.a ~ .b`
pub fn is_supported(selector: &ComplexSelector) -> bool {
  let parts = simple_selectors(selector);
  let count = parts.len();

  count > 0
    && parts.iter().enumerate().all(|(index, part)| {
      if index == 0 || index == count - 1 {
        part.is_class()
      } else {
        part.is_class_or_combinator()
      }
    })
}

/// Whether a supported selector chain can never match and is safe to drop.
///
/// Every class in a supported chain is a necessary condition for the chain to
/// match, so a single class missing from `live_classes` proves the whole
/// chain dead. Callers must check [`is_supported`] first.
pub fn can_omit(selector: &ComplexSelector, live_classes: &IndexSet<String>) -> bool {
  simple_selectors(selector).iter().any(|part| match part {
    SimpleSelector::Class(name) => !live_classes.contains(name.as_ref()),
    _ => false,
  })
}
