/* Rendering of a codec type declaration as a Java compilation unit */

use super::spec::{BuilderCall, CodecTypeSpec, MethodSpec, PutField, Statement, TypeName};
use crate::codegen::shared::code_writer::CodeWriter;
use std::collections::{BTreeMap, BTreeSet};

/* Continuation lines of a fluent chain sit two levels deeper than the statement */
const CHAIN_INDENT: usize = 2;

/* How each referenced class is spelled inside one compilation unit.
 *
 * At most one class per simple name is spelled simply; every other class
 * sharing that name is written out qualified and never imported. A class
 * sharing the declared type's own name is always qualified.
 */
#[derive(Debug, Default)]
pub struct ImportPlan {
  imports: Vec<String>,
  qualified: BTreeSet<TypeName>,
}

impl ImportPlan {
  pub fn resolve(package: &str, declared_name: &str, referenced: &BTreeSet<TypeName>) -> Self {
    let mut by_simple_name: BTreeMap<&str, Vec<&TypeName>> = BTreeMap::new();
    for type_name in referenced {
      by_simple_name.entry(type_name.simple_name.as_str()).or_default().push(type_name);
    }

    let mut plan = ImportPlan::default();
    for (simple_name, group) in by_simple_name {
      /* default-package classes have no qualified spelling, so they keep the simple one */
      let simple = if simple_name == declared_name {
        None
      } else {
        group.iter().find(|t| t.package.is_empty()).or(group.first()).copied()
      };

      for type_name in group {
        if Some(type_name) != simple {
          plan.qualified.insert(type_name.clone());
        } else if !type_name.is_java_lang() && !type_name.package.is_empty() && type_name.package != package {
          plan.imports.push(type_name.qualified_name());
        }
      }
    }
    plan.imports.sort();
    plan
  }

  pub fn imports(&self) -> &[String] {
    &self.imports
  }

  /* Source form of a type reference, e.g. `JsonCodec<Point>` */
  pub fn spell(&self, type_name: &TypeName) -> String {
    let bare = TypeName::class(&type_name.package, &type_name.simple_name);
    let name = if self.qualified.contains(&bare) {
      type_name.qualified_name()
    } else {
      type_name.simple_name.clone()
    };
    if type_name.type_args.is_empty() {
      return name;
    }
    let args: Vec<String> = type_name.type_args.iter().map(|arg| self.spell(arg)).collect();
    format!("{}<{}>", name, args.join(", "))
  }
}

pub struct JavaFile {
  pub package: String,
  pub type_spec: CodecTypeSpec,
  pub indent_width: usize,
}

impl JavaFile {
  pub fn new(package: &str, type_spec: CodecTypeSpec) -> Self {
    Self {
      package: package.to_string(),
      type_spec,
      indent_width: 2,
    }
  }

  pub fn with_indent_width(mut self, indent_width: usize) -> Self {
    self.indent_width = indent_width;
    self
  }

  pub fn import_plan(&self) -> ImportPlan {
    ImportPlan::resolve(&self.package, &self.type_spec.name, &self.type_spec.referenced_types())
  }

  /* Qualified names to import: skips java.lang, the default package, our own package and clashes */
  pub fn imports(&self) -> Vec<String> {
    self.import_plan().imports().to_vec()
  }

  pub fn render(&self) -> String {
    let mut w = CodeWriter::with_indent_spaces(self.indent_width);

    if !self.package.is_empty() {
      w.writeln(&format!("package {};", self.package));
      w.blank_line();
    }

    let plan = self.import_plan();
    for import in plan.imports() {
      w.writeln(&format!("import {};", import));
    }
    if !plan.imports().is_empty() {
      w.blank_line();
    }

    let spec = &self.type_spec;
    let mut header = String::new();
    for modifier in &spec.modifiers {
      header.push_str(modifier.keyword());
      header.push(' ');
    }
    header.push_str(&format!("class {} extends {}", spec.name, plan.spell(&spec.superclass)));

    w.block(&header, |w| {
      for (i, method) in spec.methods.iter().enumerate() {
        if i > 0 {
          w.blank_line();
        }
        emit_method(w, &plan, method);
      }
    });

    w.into_inner()
  }
}

fn emit_method(w: &mut CodeWriter, plan: &ImportPlan, method: &MethodSpec) {
  for annotation in &method.annotations {
    w.writeln(&format!("@{}", plan.spell(annotation)));
  }

  let mut header = String::new();
  for modifier in &method.modifiers {
    header.push_str(modifier.keyword());
    header.push(' ');
  }
  let params: Vec<String> = method
    .parameters
    .iter()
    .map(|p| format!("{} {}", plan.spell(&p.type_name), p.name))
    .collect();
  header.push_str(&format!("{} {}({})", plan.spell(&method.returns), method.name, params.join(", ")));

  w.block(&header, |w| {
    for statement in &method.body {
      emit_statement(w, plan, statement);
    }
  });
}

pub fn emit_statement(w: &mut CodeWriter, plan: &ImportPlan, statement: &Statement) {
  match statement {
    Statement::DeclareTree { tree_type, var, context, puts } => {
      let head = format!("{} {} = {}.mapper().createObjectNode()", plan.spell(tree_type), var, context);
      let links: Vec<String> = puts.iter().map(render_put).collect();
      emit_chain(w, &head, &links);
    }
    Statement::ObjectGuard { param } => {
      w.block(&format!("if ({0} == null || !{0}.isObject())", param), |w| {
        w.writeln("return null;");
      });
    }
    Statement::ReturnVar { var } => {
      w.writeln(&format!("return {};", var));
    }
    Statement::ReturnBuilt { target, calls } => {
      let head = format!("return {}.builder()", plan.spell(target));
      let mut links: Vec<String> = calls.iter().map(render_builder_call).collect();
      links.push(".build()".to_string());
      emit_chain(w, &head, &links);
    }
  }
}

/* `head` on its own line, one link per continuation line, `;` after the last */
fn emit_chain(w: &mut CodeWriter, head: &str, links: &[String]) {
  if links.is_empty() {
    w.writeln(&format!("{};", head));
    return;
  }
  w.writeln(head);
  w.indented(CHAIN_INDENT, |w| {
    let last = links.len() - 1;
    for (i, link) in links.iter().enumerate() {
      if i == last {
        w.writeln(&format!("{};", link));
      } else {
        w.writeln(link);
      }
    }
  });
}

fn render_put(put: &PutField) -> String {
  format!(".put({}, {}.{}())", string_literal(&put.field), put.source, put.getter)
}

fn render_builder_call(call: &BuilderCall) -> String {
  format!(
    ".{}({}.get({}).{})",
    call.field,
    call.tree,
    string_literal(&call.field),
    call.accessor.method()
  )
}

fn string_literal(value: &str) -> String {
  let mut out = String::with_capacity(value.len() + 2);
  out.push('"');
  for c in value.chars() {
    match c {
      '"' => out.push_str("\\\""),
      '\\' => out.push_str("\\\\"),
      _ => out.push(c),
    }
  }
  out.push('"');
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::codegen::java_gen::accessor::JsonAccessor;

  fn render(statement: &Statement) -> String {
    let mut w = CodeWriter::with_indent_spaces(2);
    emit_statement(&mut w, &ImportPlan::default(), statement);
    w.into_inner()
  }

  #[test]
  fn test_empty_tree_declaration_is_single_line() {
    let text = render(&Statement::DeclareTree {
      tree_type: TypeName::class("com.fasterxml.jackson.databind.node", "ObjectNode"),
      var: "resultJson".to_string(),
      context: "context".to_string(),
      puts: vec![],
    });
    assert_eq!(text, "ObjectNode resultJson = context.mapper().createObjectNode();\n");
  }

  #[test]
  fn test_builder_chain() {
    let text = render(&Statement::ReturnBuilt {
      target: TypeName::class("app", "User"),
      calls: vec![BuilderCall { field: "name".to_string(), tree: "fromJson".to_string(), accessor: JsonAccessor::Text }],
    });
    assert_eq!(text, "return User.builder()\n    .name(fromJson.get(\"name\").asText())\n    .build();\n");
  }

  #[test]
  fn test_guard() {
    let text = render(&Statement::ObjectGuard { param: "fromJson".to_string() });
    assert_eq!(text, "if (fromJson == null || !fromJson.isObject()) {\n  return null;\n}\n");
  }

  fn jackson_node() -> TypeName {
    TypeName::class("com.fasterxml.jackson.databind.node", "ObjectNode")
  }

  #[test]
  fn test_plan_without_clashes_imports_everything_foreign() {
    let referenced: BTreeSet<TypeName> =
      [jackson_node(), TypeName::class("java.lang", "Override"), TypeName::class("codecs", "Helper"), TypeName::class("app", "User")]
        .into_iter()
        .collect();

    let plan = ImportPlan::resolve("codecs", "UserCodec", &referenced);
    assert_eq!(plan.imports(), ["app.User", "com.fasterxml.jackson.databind.node.ObjectNode"]);
    assert_eq!(plan.spell(&jackson_node()), "ObjectNode");
  }

  #[test]
  fn test_plan_qualifies_second_class_with_same_simple_name() {
    let target = TypeName::class("app", "ObjectNode");
    let referenced: BTreeSet<TypeName> = [target.clone(), jackson_node()].into_iter().collect();

    let plan = ImportPlan::resolve("codecs", "ObjectNodeCodec", &referenced);
    assert_eq!(plan.imports(), ["app.ObjectNode"]);
    assert_eq!(plan.spell(&target), "ObjectNode");
    assert_eq!(plan.spell(&jackson_node()), "com.fasterxml.jackson.databind.node.ObjectNode");

    let statement = Statement::DeclareTree {
      tree_type: jackson_node(),
      var: "resultJson".to_string(),
      context: "context".to_string(),
      puts: vec![],
    };
    let mut w = CodeWriter::with_indent_spaces(2);
    emit_statement(&mut w, &plan, &statement);
    assert_eq!(
      w.into_inner(),
      "com.fasterxml.jackson.databind.node.ObjectNode resultJson = context.mapper().createObjectNode();\n"
    );
  }

  #[test]
  fn test_plan_keeps_default_package_class_simple() {
    let local = TypeName::class("", "ObjectNode");
    let referenced: BTreeSet<TypeName> = [local.clone(), jackson_node()].into_iter().collect();

    let plan = ImportPlan::resolve("", "ObjectNodeCodec", &referenced);
    assert!(plan.imports().is_empty());
    assert_eq!(plan.spell(&local), "ObjectNode");
    assert_eq!(plan.spell(&jackson_node()), "com.fasterxml.jackson.databind.node.ObjectNode");
  }

  #[test]
  fn test_plan_qualifies_class_named_like_declared_type() {
    let json_codec = TypeName::class("org.onosproject.codec", "JsonCodec");
    let superclass = json_codec.clone().parameterized(vec![TypeName::class("app", "Json")]);
    let referenced: BTreeSet<TypeName> = [json_codec, TypeName::class("app", "Json")].into_iter().collect();

    let plan = ImportPlan::resolve("app", "JsonCodec", &referenced);
    assert!(plan.imports().is_empty());
    assert_eq!(plan.spell(&superclass), "org.onosproject.codec.JsonCodec<Json>");
  }

  #[test]
  fn test_string_literal_escapes() {
    assert_eq!(string_literal("plain"), "\"plain\"");
    assert_eq!(string_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
  }
}
