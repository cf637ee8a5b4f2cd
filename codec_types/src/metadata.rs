//! Field metadata query contract.
//!
//! Codec generation only needs to ask a target type three things: its simple
//! name, its package and its declared fields. Anything that can answer those
//! questions (descriptor files, hand-built fixtures, compiler front ends) can
//! drive the generator.

use crate::types::TypeDef;

/// Borrowed view of one declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclaredField<'a> {
    pub name: &'a str,
    pub type_name: &'a str,
    pub synthetic: bool,
}

/// Metadata provider for a record-like target type.
pub trait TypeMetadata {
    fn simple_name(&self) -> &str;

    /// Dotted package name, empty for the default package.
    fn package(&self) -> &str;

    /// Declared fields in declaration order, synthetic ones included.
    fn declared_fields(&self) -> Vec<DeclaredField<'_>>;
}

impl TypeMetadata for TypeDef {
    fn simple_name(&self) -> &str {
        &self.name
    }

    fn package(&self) -> &str {
        &self.package
    }

    fn declared_fields(&self) -> Vec<DeclaredField<'_>> {
        self.fields
            .iter()
            .map(|field| DeclaredField {
                name: &field.name,
                type_name: &field.field_type,
                synthetic: field.synthetic,
            })
            .collect()
    }
}
