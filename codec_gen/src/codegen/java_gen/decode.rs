/* Synthesis of the JSON tree -> object method */

use super::accessor::{lookup_accessor, AccessorLookup};
use super::errors::CodegenError;
use super::fields::FieldMap;
use super::spec::{BuilderCall, MethodSpec, Modifier, ParameterSpec, Statement, TypeName};
use super::{CODEC_CONTEXT_CLASS, CONTEXT, DECODE_METHOD_NAME, FROM_JSON, JSON_CODEC_PACKAGE, OBJECT_NODE_CLASS, OBJECT_NODE_PACKAGE};

/* Guard, then `<Type>.builder()` with one call per field and `.build()` */
pub fn build_decode_body(fields: &FieldMap, target: &TypeName, tree_param: &str) -> Result<Vec<Statement>, CodegenError> {
  let mut calls = Vec::with_capacity(fields.len());

  for field in fields.values() {
    let accessor = match lookup_accessor(&field.type_name) {
      AccessorLookup::Found(accessor) => accessor,
      AccessorLookup::Unsupported(field_type) => {
        return Err(CodegenError::UnsupportedFieldType {
          type_name: target.simple_name.clone(),
          field: field.name.clone(),
          field_type: field_type.to_string(),
        });
      }
    };
    calls.push(BuilderCall {
      field: field.name.clone(),
      tree: tree_param.to_string(),
      accessor,
    });
  }

  Ok(vec![
    Statement::ObjectGuard { param: tree_param.to_string() },
    Statement::ReturnBuilt { target: target.clone(), calls },
  ])
}

/* `public <Target> decode(ObjectNode fromJson, CodecContext context)` */
pub fn decode_method_spec(target: &TypeName, fields: &FieldMap) -> Result<MethodSpec, CodegenError> {
  Ok(MethodSpec {
    name: DECODE_METHOD_NAME.to_string(),
    modifiers: vec![Modifier::Public],
    annotations: vec![TypeName::class("java.lang", "Override")],
    returns: target.clone(),
    parameters: vec![
      ParameterSpec::new(TypeName::class(OBJECT_NODE_PACKAGE, OBJECT_NODE_CLASS), FROM_JSON),
      ParameterSpec::new(TypeName::class(JSON_CODEC_PACKAGE, CODEC_CONTEXT_CLASS), CONTEXT),
    ],
    body: build_decode_body(fields, target, FROM_JSON)?,
  })
}
