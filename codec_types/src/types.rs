use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct FieldDef {
    pub name: String,
    /// Simple name of the declared type (`int`, `Long`, `String`, ...).
    pub field_type: String,
    /// Compiler-generated fields (outer-instance refs, switch maps) are never serialized.
    #[serde(default)]
    pub synthetic: bool,
}

impl FieldDef {
    pub fn new(name: &str, field_type: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            synthetic: false,
        }
    }

    pub fn synthetic(name: &str, field_type: &str) -> Self {
        Self {
            synthetic: true,
            ..Self::new(name, field_type)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct TypeDef {
    pub name: String,
    /// Dotted package; empty for the default package.
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl TypeDef {
    pub fn new(package: &str, name: &str, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.to_string(),
            package: package.to_string(),
            fields,
        }
    }

    /* Fully qualified name, e.g. "app.model.User" */
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }
}
