/* Synthesis of the object -> JSON tree method */

use super::fields::FieldMap;
use super::spec::{MethodSpec, Modifier, ParameterSpec, PutField, Statement, TypeName};
use super::{
  CODEC_CONTEXT_CLASS, CONTEXT, ENCODE_METHOD_NAME, JSON_CODEC_PACKAGE, OBJECT_NODE_CLASS, OBJECT_NODE_PACKAGE,
  RESULT_JSON, TO_JSON,
};

/* `name` -> `getName`: first character upper-cased, rest unchanged */
pub fn getter_name(field: &str) -> String {
  let mut chars = field.chars();
  match chars.next() {
    Some(first) => format!("get{}{}", first.to_uppercase(), chars.as_str()),
    None => "get".to_string(),
  }
}

/* One put per field, chained onto a fresh object node, then return it */
pub fn build_encode_body(fields: &FieldMap, source_param: &str) -> Vec<Statement> {
  let puts = fields
    .values()
    .map(|field| PutField {
      field: field.name.clone(),
      source: source_param.to_string(),
      getter: getter_name(&field.name),
    })
    .collect();

  vec![
    Statement::DeclareTree {
      tree_type: TypeName::class(OBJECT_NODE_PACKAGE, OBJECT_NODE_CLASS),
      var: RESULT_JSON.to_string(),
      context: CONTEXT.to_string(),
      puts,
    },
    Statement::ReturnVar { var: RESULT_JSON.to_string() },
  ]
}

/* `public ObjectNode encode(<Target> toJson, CodecContext context)` */
pub fn encode_method_spec(target: &TypeName, fields: &FieldMap) -> MethodSpec {
  MethodSpec {
    name: ENCODE_METHOD_NAME.to_string(),
    modifiers: vec![Modifier::Public],
    annotations: vec![TypeName::class("java.lang", "Override")],
    returns: TypeName::class(OBJECT_NODE_PACKAGE, OBJECT_NODE_CLASS),
    parameters: vec![
      ParameterSpec::new(target.clone(), TO_JSON),
      ParameterSpec::new(TypeName::class(JSON_CODEC_PACKAGE, CODEC_CONTEXT_CLASS), CONTEXT),
    ],
    body: build_encode_body(fields, TO_JSON),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::codegen::java_gen::fields::FieldDescriptor;

  fn field_map(entries: &[(&str, &str)]) -> FieldMap {
    entries
      .iter()
      .map(|(name, ty)| (name.to_string(), FieldDescriptor { name: name.to_string(), type_name: ty.to_string() }))
      .collect()
  }

  #[test]
  fn test_getter_name() {
    assert_eq!(getter_name("x"), "getX");
    assert_eq!(getter_name("firstName"), "getFirstName");
    assert_eq!(getter_name("URL"), "getURL");
    assert_eq!(getter_name("_id"), "get_id");
    assert_eq!(getter_name(""), "get");
  }

  #[test]
  fn test_one_put_per_field_in_order() {
    let body = build_encode_body(&field_map(&[("x", "int"), ("y", "int")]), TO_JSON);

    let Statement::DeclareTree { var, puts, .. } = &body[0] else {
      panic!("expected tree declaration, got {:?}", body[0]);
    };
    assert_eq!(var, RESULT_JSON);
    assert_eq!(
      puts,
      &vec![
        PutField { field: "x".to_string(), source: TO_JSON.to_string(), getter: "getX".to_string() },
        PutField { field: "y".to_string(), source: TO_JSON.to_string(), getter: "getY".to_string() },
      ]
    );
    assert_eq!(body[1], Statement::ReturnVar { var: RESULT_JSON.to_string() });
  }

  #[test]
  fn test_encode_ignores_declared_types() {
    /* No accessor table lookup: unsupported types still encode */
    let body = build_encode_body(&field_map(&[("ratio", "double")]), TO_JSON);
    let Statement::DeclareTree { puts, .. } = &body[0] else { panic!() };
    assert_eq!(puts.len(), 1);
  }

  #[test]
  fn test_method_signature() {
    let spec = encode_method_spec(&TypeName::class("geo", "Point"), &FieldMap::new());
    assert_eq!(spec.name, "encode");
    assert_eq!(spec.returns.simple_name, "ObjectNode");
    assert_eq!(spec.parameters[0].name, "toJson");
    assert_eq!(spec.parameters[0].type_name.simple_name, "Point");
    assert_eq!(spec.parameters[1].name, "context");
    assert_eq!(spec.annotations[0].simple_name, "Override");
  }
}
