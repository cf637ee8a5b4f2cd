use thiserror::Error;

/// Errors raised while synthesizing a codec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodegenError {
    /// The declared type of a field has no JSON-tree accessor.
    #[error("field '{field}' of type '{type_name}' has unsupported type '{field_type}'")]
    UnsupportedFieldType {
        type_name: String,
        field: String,
        field_type: String,
    },

    /// Field names must be unique within a type.
    #[error("type '{type_name}' declares field '{field}' more than once")]
    DuplicateField { type_name: String, field: String },

    /// Java cannot import from the unnamed package.
    #[error("type '{type_name}' is in the default package and cannot be referenced from package '{package}'")]
    DefaultPackageTarget { type_name: String, package: String },

    /// Two codecs would be written to the same file.
    #[error("codecs for '{first}' and '{second}' would both be written to '{path}'")]
    OutputCollision {
        path: String,
        first: String,
        second: String,
    },
}
