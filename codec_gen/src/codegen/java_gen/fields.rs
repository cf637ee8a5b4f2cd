/* Field extraction from target type metadata */

use super::errors::CodegenError;
use codec_types::TypeMetadata;
use indexmap::IndexMap;
use serde_derive::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct FieldDescriptor {
  pub name: String,
  pub type_name: String,
}

/* Serializable fields keyed by name, in declaration order */
pub type FieldMap = IndexMap<String, FieldDescriptor>;

/* Collect the serializable fields of a type, skipping synthetic ones */
pub fn extract_fields<T: TypeMetadata + ?Sized>(target: &T) -> Result<FieldMap, CodegenError> {
  let mut fields = FieldMap::new();

  for declared in target.declared_fields().into_iter().filter(|f| !f.synthetic) {
    if fields.contains_key(declared.name) {
      return Err(CodegenError::DuplicateField {
        type_name: target.simple_name().to_string(),
        field: declared.name.to_string(),
      });
    }
    fields.insert(
      declared.name.to_string(),
      FieldDescriptor {
        name: declared.name.to_string(),
        type_name: declared.type_name.to_string(),
      },
    );
  }

  Ok(fields)
}
