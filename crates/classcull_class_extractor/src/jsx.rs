//! Extraction of literal `className` attribute values from JSX markup.

use swc_core::ecma::ast::{Expr, JSXAttr, JSXAttrName, JSXAttrValue, JSXExpr, Lit};
use swc_core::ecma::visit::{Visit, VisitWith};

/// The conventional class-binding attribute of JSX markup.
const CLASS_NAME_ATTRIBUTE: &str = "className";

/// Split a space-joined class string into individual class names, dropping
/// empty tokens. Mirrors the space-joining convention of the class-name
/// composer, with `char::is_whitespace` as the separator class.
pub(crate) fn split_class_list(raw: &str) -> impl Iterator<Item = String> + '_ {
  raw
    .split(char::is_whitespace)
    .filter(|token| !token.is_empty())
    .map(str::to_string)
}

/// Collects literal `className` values from every JSX element, regardless of
/// nesting depth.
#[derive(Default)]
pub(crate) struct JsxClassNameCollector {
  class_names: Vec<String>,
}

impl JsxClassNameCollector {
  pub(crate) fn into_class_names(self) -> Vec<String> {
    self.class_names
  }
}

impl Visit for JsxClassNameCollector {
  fn visit_jsx_attr(&mut self, attribute: &JSXAttr) {
    if let JSXAttrName::Ident(name) = &attribute.name {
      if name.sym.as_ref() == CLASS_NAME_ATTRIBUTE {
        if let Some(raw) = literal_attribute_value(attribute.value.as_ref()) {
          self.class_names.extend(split_class_list(raw));
        }
      }
    }

    attribute.visit_children_with(self);
  }
}

/// Read an attribute value that is a string literal, unwrapping a single
/// expression-container level. Dynamic values (identifiers, calls,
/// conditionals, templates) carry no static class information.
fn literal_attribute_value(value: Option<&JSXAttrValue>) -> Option<&str> {
  match value? {
    JSXAttrValue::Lit(Lit::Str(value)) => Some(value.value.as_ref()),
    JSXAttrValue::JSXExprContainer(container) => match &container.expr {
      JSXExpr::Expr(expr) => match &**expr {
        Expr::Lit(Lit::Str(value)) => Some(value.value.as_ref()),
        _ => None,
      },
      JSXExpr::JSXEmptyExpr(_) => None,
    },
    _ => None,
  }
}
