//! Codec Descriptor Loading
//!
//! This crate reads YAML descriptor files listing target types and the
//! options used to generate their codecs, and merges several files into a
//! single set of type definitions ready for code generation.

pub mod file;
pub mod loader;

// Re-export commonly used types at the crate root
pub use file::{CodecFile, CodecOptions};
pub use loader::{parse_str, DescriptorLoader};

// Re-export codec_types for convenience
pub use codec_types;
