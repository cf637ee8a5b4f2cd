//! Codec Type Descriptors
//!
//! This crate contains the data model describing record-like target types
//! for codec generation. It provides pure data structures and the
//! `TypeMetadata` query contract without any file I/O or code generation
//! logic.

pub mod metadata;
pub mod types;

// Re-export commonly used types at the crate root
pub use metadata::*;
pub use types::*;
