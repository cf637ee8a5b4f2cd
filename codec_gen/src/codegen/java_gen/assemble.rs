use super::spec::{CodecTypeSpec, MethodSpec, Modifier, TypeName};
use super::{CODEC_SUFFIX, JSON_CODEC_CLASS, JSON_CODEC_PACKAGE};

/* `public class <Target>Codec extends JsonCodec<Target>` holding encode and decode */
pub fn assemble_codec_type(target: &TypeName, encode: MethodSpec, decode: MethodSpec) -> CodecTypeSpec {
  CodecTypeSpec {
    name: format!("{}{}", target.simple_name, CODEC_SUFFIX),
    modifiers: vec![Modifier::Public],
    superclass: TypeName::class(JSON_CODEC_PACKAGE, JSON_CODEC_CLASS).parameterized(vec![target.clone()]),
    methods: vec![encode, decode],
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::codegen::java_gen::decode::decode_method_spec;
  use crate::codegen::java_gen::encode::encode_method_spec;
  use crate::codegen::java_gen::fields::FieldMap;

  #[test]
  fn test_codec_name_and_superclass() {
    let user = TypeName::class("app.model", "User");
    let fields = FieldMap::new();
    let spec = assemble_codec_type(
      &user,
      encode_method_spec(&user, &fields),
      decode_method_spec(&user, &fields).unwrap(),
    );

    assert_eq!(spec.name, "UserCodec");
    assert_eq!(spec.modifiers, vec![Modifier::Public]);
    assert_eq!(spec.superclass.qualified_name(), "org.onosproject.codec.JsonCodec");
    assert_eq!(spec.superclass.type_args, vec![user.clone()]);
    assert!(spec.method("encode").is_some());
    assert!(spec.method("decode").is_some());

    let refs: Vec<String> = spec.referenced_types().iter().map(TypeName::qualified_name).collect();
    assert_eq!(
      refs,
      vec![
        "app.model.User",
        "com.fasterxml.jackson.databind.node.ObjectNode",
        "java.lang.Override",
        "org.onosproject.codec.CodecContext",
        "org.onosproject.codec.JsonCodec",
      ]
    );
  }
}
