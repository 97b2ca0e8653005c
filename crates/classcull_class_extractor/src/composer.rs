//! Extraction of class names passed to the class-name composer utility
//! (the `classnames` package).

use swc_core::atoms::Atom;
use swc_core::ecma::ast::{
  CallExpr, Callee, Expr, ImportSpecifier, Lit, Module, ModuleDecl, ModuleItem, Prop, PropName,
  PropOrSpread,
};
use swc_core::ecma::visit::{Visit, VisitWith};

/// Module specifier the composer utility is imported from.
const COMPOSER_MODULE: &str = "classnames";

/// Find the local binding of the composer import, conventionally a default
/// import such as `import cx from "classnames"`. Returns `None` when the
/// module is not imported; differently named helpers are never guessed at.
pub(crate) fn find_composer_alias(module: &Module) -> Option<Atom> {
  for item in &module.body {
    let ModuleItem::ModuleDecl(ModuleDecl::Import(import)) = item else {
      continue;
    };

    if import.src.value.as_ref() != COMPOSER_MODULE {
      continue;
    }

    return import.specifiers.first().map(local_name);
  }

  None
}

fn local_name(specifier: &ImportSpecifier) -> Atom {
  match specifier {
    ImportSpecifier::Named(named) => named.local.sym.clone(),
    ImportSpecifier::Default(default) => default.local.sym.clone(),
    ImportSpecifier::Namespace(namespace) => namespace.local.sym.clone(),
  }
}

/// Collects class names from the first invocation of the composer alias.
///
/// Only argument shapes whose class names are statically certain contribute:
/// string literals and literal-string object keys. The value side of an
/// object argument is selected on runtime truthiness and is never inspected.
pub(crate) struct ComposerCallCollector {
  alias: Atom,
  class_names: Vec<String>,
  visited_call: bool,
}

impl ComposerCallCollector {
  pub(crate) fn new(alias: Atom) -> Self {
    Self {
      alias,
      class_names: Vec::new(),
      visited_call: false,
    }
  }

  pub(crate) fn into_class_names(self) -> Vec<String> {
    self.class_names
  }

  fn collect_argument(&mut self, argument: &Expr) {
    match argument {
      Expr::Lit(Lit::Str(value)) => {
        self.class_names.push(value.value.as_ref().to_string());
      }
      Expr::Object(object) => {
        for prop in &object.props {
          let PropOrSpread::Prop(prop) = prop else {
            continue;
          };
          let Prop::KeyValue(key_value) = &**prop else {
            continue;
          };

          if let PropName::Str(key) = &key_value.key {
            self.class_names.push(key.value.as_ref().to_string());
          }
        }
      }
      // Identifiers, nested calls, templates and the like carry no static
      // class information.
      _ => {}
    }
  }
}

impl Visit for ComposerCallCollector {
  fn visit_call_expr(&mut self, call: &CallExpr) {
    if !self.visited_call {
      if let Callee::Expr(callee) = &call.callee {
        if let Expr::Ident(ident) = &**callee {
          if ident.sym == self.alias {
            self.visited_call = true;
            for argument in &call.args {
              self.collect_argument(&argument.expr);
            }
            return;
          }
        }
      }
    }

    call.visit_children_with(self);
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use swc_core::ecma::visit::VisitWith;

  use super::*;
  use crate::parse::parse_source;

  fn composer_classes(code: &str) -> Vec<String> {
    let module = parse_source(code, "component.js").expect("failed to parse source");
    let alias = find_composer_alias(&module).expect("expected a composer import");

    let mut collector = ComposerCallCollector::new(alias);
    module.visit_with(&mut collector);
    collector.into_class_names()
  }

  #[test]
  fn finds_default_import_alias() {
    let module =
      parse_source("import cx from \"classnames\";", "component.js").expect("failed to parse");

    assert_eq!(find_composer_alias(&module), Some(Atom::from("cx")));
  }

  #[test]
  fn ignores_other_modules() {
    let module =
      parse_source("import cx from \"clsx\";", "component.js").expect("failed to parse");

    assert_eq!(find_composer_alias(&module), None);
  }

  #[test]
  fn collects_a_single_literal_argument() {
    let code = r#"
      import cx from "classnames";

      cx("hello");
    "#;

    assert_eq!(composer_classes(code), vec!["hello"]);
  }

  #[test]
  fn collects_multiple_literal_arguments() {
    let code = r#"
      import cx from "classnames";

      cx("hello", "worlds");
    "#;

    assert_eq!(composer_classes(code), vec!["hello", "worlds"]);
  }

  #[test]
  fn collects_literal_object_keys() {
    let code = r#"
      import cx from "classnames";

      cx({ "hello": true });
    "#;

    assert_eq!(composer_classes(code), vec!["hello"]);
  }

  #[test]
  fn ignores_computed_and_identifier_keys() {
    let code = r#"
      import cx from "classnames";

      cx({ [dynamic]: true, shorthand: true, "literal": maybe() });
    "#;

    assert_eq!(composer_classes(code), vec!["literal"]);
  }

  #[test]
  fn ignores_dynamic_argument_shapes() {
    let code = r#"
      import cx from "classnames";

      cx(someVariable, helper(), `template`);
    "#;

    assert_eq!(composer_classes(code), Vec::<String>::new());
  }

  #[test]
  fn only_inspects_the_first_invocation() {
    let code = r#"
      import cx from "classnames";

      cx("first");
      cx("second");
    "#;

    assert_eq!(composer_classes(code), vec!["first"]);
  }
}
