/* Declared field type -> JSON-tree read accessor */

use serde_derive::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum JsonAccessor {
  Text,
  Int,
  Long,
  Boolean,
}

impl JsonAccessor {
  /* Accessor call as emitted after `get("field").` */
  pub fn method(self) -> &'static str {
    match self {
      JsonAccessor::Text => "asText()",
      JsonAccessor::Int => "asInt()",
      JsonAccessor::Long => "asLong()",
      JsonAccessor::Boolean => "asBoolean()",
    }
  }
}

/* Simple type names matched exactly; boxed and unboxed forms share an accessor */
static ACCESSOR_TABLE: &[(&str, JsonAccessor)] = &[
  ("String", JsonAccessor::Text),
  ("int", JsonAccessor::Int),
  ("Integer", JsonAccessor::Int),
  ("long", JsonAccessor::Long),
  ("Long", JsonAccessor::Long),
  ("boolean", JsonAccessor::Boolean),
  ("Boolean", JsonAccessor::Boolean),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorLookup<'a> {
  Found(JsonAccessor),
  Unsupported(&'a str),
}

pub fn lookup_accessor(type_name: &str) -> AccessorLookup<'_> {
  ACCESSOR_TABLE
    .iter()
    .find(|(name, _)| *name == type_name)
    .map(|(_, accessor)| AccessorLookup::Found(*accessor))
    .unwrap_or(AccessorLookup::Unsupported(type_name))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_boxed_and_unboxed_share_accessor() {
    assert_eq!(lookup_accessor("int"), AccessorLookup::Found(JsonAccessor::Int));
    assert_eq!(lookup_accessor("Integer"), AccessorLookup::Found(JsonAccessor::Int));
    assert_eq!(lookup_accessor("long"), AccessorLookup::Found(JsonAccessor::Long));
    assert_eq!(lookup_accessor("Long"), AccessorLookup::Found(JsonAccessor::Long));
    assert_eq!(lookup_accessor("boolean"), AccessorLookup::Found(JsonAccessor::Boolean));
    assert_eq!(lookup_accessor("Boolean"), AccessorLookup::Found(JsonAccessor::Boolean));
    assert_eq!(lookup_accessor("String"), AccessorLookup::Found(JsonAccessor::Text));
  }

  #[test]
  fn test_unmapped_types_are_reported() {
    assert_eq!(lookup_accessor("double"), AccessorLookup::Unsupported("double"));
    assert_eq!(lookup_accessor("string"), AccessorLookup::Unsupported("string"));
    assert_eq!(lookup_accessor("java.lang.String"), AccessorLookup::Unsupported("java.lang.String"));
  }

  #[test]
  fn test_accessor_methods() {
    assert_eq!(JsonAccessor::Text.method(), "asText()");
    assert_eq!(JsonAccessor::Boolean.method(), "asBoolean()");
  }
}
