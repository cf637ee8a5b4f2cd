use codec_types::TypeDef;
use serde_derive::{Deserialize, Serialize};

/* Generation options carried by a descriptor file */
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct CodecOptions {
    /* Package for generated codecs; defaults to each target type's own package */
    #[serde(default)]
    pub package: Option<String>,

    /* Spaces per indentation level in generated sources */
    #[serde(default)]
    pub indent_width: Option<usize>,
}

impl CodecOptions {
    /* Fill options still unset from another source */
    pub fn merge_missing(&mut self, other: &CodecOptions) {
        if self.package.is_none() {
            self.package = other.package.clone();
        }
        if self.indent_width.is_none() {
            self.indent_width = other.indent_width;
        }
    }
}

/* A descriptor file: options plus the target types to generate codecs for */
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct CodecFile {
    #[serde(default)]
    pub codec: CodecOptions,

    #[serde(default)]
    pub types: Vec<TypeDef>,
}

impl CodecFile {
    pub fn options(&self) -> &CodecOptions {
        &self.codec
    }

    pub fn get_types(&self) -> &[TypeDef] {
        &self.types
    }
}
