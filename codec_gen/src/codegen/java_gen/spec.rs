/* Structured description of a generated Java codec.
 *
 * Synthesizers produce these values; only the emitter turns them into text.
 */

use super::accessor::JsonAccessor;
use codec_types::TypeMetadata;
use serde_derive::Serialize;
use std::collections::BTreeSet;

/// Reference to a (possibly parameterized) Java class.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct TypeName {
  /// Dotted package, empty for the default package.
  pub package: String,
  pub simple_name: String,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub type_args: Vec<TypeName>,
}

impl TypeName {
  pub fn class(package: &str, simple_name: &str) -> Self {
    Self {
      package: package.to_string(),
      simple_name: simple_name.to_string(),
      type_args: Vec::new(),
    }
  }

  pub fn of<T: TypeMetadata + ?Sized>(target: &T) -> Self {
    Self::class(target.package(), target.simple_name())
  }

  pub fn parameterized(mut self, type_args: Vec<TypeName>) -> Self {
    self.type_args = type_args;
    self
  }

  pub fn is_java_lang(&self) -> bool {
    self.package == "java.lang"
  }

  pub fn qualified_name(&self) -> String {
    if self.package.is_empty() {
      self.simple_name.clone()
    } else {
      format!("{}.{}", self.package, self.simple_name)
    }
  }

  /* Add this type and its type arguments to the set of referenced classes */
  pub fn collect_references(&self, out: &mut BTreeSet<TypeName>) {
    out.insert(TypeName::class(&self.package, &self.simple_name));
    for arg in &self.type_args {
      arg.collect_references(out);
    }
  }
}

impl PartialOrd for TypeName {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for TypeName {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self
      .qualified_name()
      .cmp(&other.qualified_name())
      .then_with(|| self.type_args.cmp(&other.type_args))
  }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
  Public,
}

impl Modifier {
  pub fn keyword(self) -> &'static str {
    match self {
      Modifier::Public => "public",
    }
  }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ParameterSpec {
  pub type_name: TypeName,
  pub name: String,
}

impl ParameterSpec {
  pub fn new(type_name: TypeName, name: &str) -> Self {
    Self { type_name, name: name.to_string() }
  }
}

/// `.put("<field>", <source>.<getter>())`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct PutField {
  pub field: String,
  pub source: String,
  pub getter: String,
}

/// `.<field>(<tree>.get("<field>").<accessor>)`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct BuilderCall {
  pub field: String,
  pub tree: String,
  pub accessor: JsonAccessor,
}

/// One statement of a synthesized method body.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Statement {
  /// `<tree_type> <var> = <context>.mapper().createObjectNode()` with chained puts.
  DeclareTree {
    tree_type: TypeName,
    var: String,
    context: String,
    puts: Vec<PutField>,
  },
  /// `if (<param> == null || !<param>.isObject()) { return null; }`
  ObjectGuard { param: String },
  ReturnVar { var: String },
  /// `return <target>.builder()` with chained calls, then `.build()`.
  ReturnBuilt { target: TypeName, calls: Vec<BuilderCall> },
}

impl Statement {
  pub fn collect_references(&self, out: &mut BTreeSet<TypeName>) {
    match self {
      Statement::DeclareTree { tree_type, .. } => tree_type.collect_references(out),
      Statement::ReturnBuilt { target, .. } => target.collect_references(out),
      Statement::ObjectGuard { .. } | Statement::ReturnVar { .. } => {}
    }
  }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct MethodSpec {
  pub name: String,
  pub modifiers: Vec<Modifier>,
  pub annotations: Vec<TypeName>,
  pub returns: TypeName,
  pub parameters: Vec<ParameterSpec>,
  pub body: Vec<Statement>,
}

impl MethodSpec {
  pub fn collect_references(&self, out: &mut BTreeSet<TypeName>) {
    for annotation in &self.annotations {
      annotation.collect_references(out);
    }
    self.returns.collect_references(out);
    for parameter in &self.parameters {
      parameter.type_name.collect_references(out);
    }
    for statement in &self.body {
      statement.collect_references(out);
    }
  }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct CodecTypeSpec {
  pub name: String,
  pub modifiers: Vec<Modifier>,
  pub superclass: TypeName,
  pub methods: Vec<MethodSpec>,
}

impl CodecTypeSpec {
  pub fn method(&self, name: &str) -> Option<&MethodSpec> {
    self.methods.iter().find(|m| m.name == name)
  }

  /* Every class referenced by the declaration, deduplicated and sorted */
  pub fn referenced_types(&self) -> BTreeSet<TypeName> {
    let mut out = BTreeSet::new();
    self.superclass.collect_references(&mut out);
    for method in &self.methods {
      method.collect_references(&mut out);
    }
    out
  }
}
