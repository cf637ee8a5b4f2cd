pub mod accessor;
pub mod assemble;
pub mod decode;
pub mod emit;
pub mod encode;
pub mod errors;
pub mod fields;
pub mod spec;

// Re-export main public functions
pub use accessor::{lookup_accessor, AccessorLookup, JsonAccessor};
pub use assemble::assemble_codec_type;
pub use decode::{build_decode_body, decode_method_spec};
pub use emit::{ImportPlan, JavaFile};
pub use encode::{build_encode_body, encode_method_spec, getter_name};
pub use errors::CodegenError;
pub use fields::{extract_fields, FieldDescriptor, FieldMap};
pub use spec::{BuilderCall, CodecTypeSpec, MethodSpec, Modifier, ParameterSpec, PutField, Statement, TypeName};

/* Parameter and local names used by generated codecs */
pub const TO_JSON: &str = "toJson";
pub const FROM_JSON: &str = "fromJson";
pub const CONTEXT: &str = "context";
pub const RESULT_JSON: &str = "resultJson";

pub const ENCODE_METHOD_NAME: &str = "encode";
pub const DECODE_METHOD_NAME: &str = "decode";
pub const CODEC_SUFFIX: &str = "Codec";

/* Host framework types the generated code compiles against */
pub const JSON_CODEC_PACKAGE: &str = "org.onosproject.codec";
pub const JSON_CODEC_CLASS: &str = "JsonCodec";
pub const CODEC_CONTEXT_CLASS: &str = "CodecContext";
pub const OBJECT_NODE_PACKAGE: &str = "com.fasterxml.jackson.databind.node";
pub const OBJECT_NODE_CLASS: &str = "ObjectNode";
