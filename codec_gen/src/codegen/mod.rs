pub mod java;
pub mod java_gen;
pub mod shared;

pub use java::{GeneratedSource, JavaCodecGenerator, JavaCodecGeneratorOptions};
pub use java_gen::CodegenError;

pub const OUTPUT_DIR: &str = "generated";
