use crate::codegen::java_gen::{
  assemble_codec_type, decode_method_spec, encode_method_spec, extract_fields, CodecTypeSpec, CodegenError, JavaFile,
  TypeName,
};
use codec_types::{TypeDef, TypeMetadata};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/* Final text of one generated codec */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
  pub package: String,
  pub type_name: String,
  pub source: String,
}

impl GeneratedSource {
  /* Path under an output root, e.g. "app/model/UserCodec.java" */
  pub fn relative_path(&self) -> PathBuf {
    let mut path = PathBuf::new();
    for part in self.package.split('.').filter(|p| !p.is_empty()) {
      path.push(part);
    }
    path.push(format!("{}.java", self.type_name));
    path
  }
}

pub struct JavaCodecGeneratorOptions {
  /* Package for every generated codec; None keeps each target type's own package */
  pub package: Option<String>,
  pub indent_width: usize,
}

impl Default for JavaCodecGeneratorOptions {
  fn default() -> Self {
    Self {
      package: None,
      indent_width: 2,
    }
  }
}

pub struct JavaCodecGenerator {
  options: JavaCodecGeneratorOptions,
}

impl JavaCodecGenerator {
  pub fn new(options: JavaCodecGeneratorOptions) -> Self {
    Self { options }
  }

  pub fn output_package<T: TypeMetadata + ?Sized>(&self, target: &T) -> String {
    match &self.options.package {
      Some(package) => package.clone(),
      None => target.package().to_string(),
    }
  }

  /* Fields -> encode/decode method specs -> codec type, without rendering */
  pub fn build_codec_spec<T: TypeMetadata + ?Sized>(&self, target: &T) -> Result<CodecTypeSpec, CodegenError> {
    let fields = extract_fields(target)?;
    let target_name = TypeName::of(target);

    debug!(
      "synthesizing codec for {} ({} field(s))",
      target_name.qualified_name(),
      fields.len()
    );

    let encode = encode_method_spec(&target_name, &fields);
    let decode = decode_method_spec(&target_name, &fields)?;
    Ok(assemble_codec_type(&target_name, encode, decode))
  }

  pub fn generate_codec<T: TypeMetadata + ?Sized>(&self, target: &T) -> Result<GeneratedSource, CodegenError> {
    let package = self.output_package(target);
    if target.package().is_empty() && !package.is_empty() {
      return Err(CodegenError::DefaultPackageTarget {
        type_name: target.simple_name().to_string(),
        package,
      });
    }

    let spec = self.build_codec_spec(target)?;
    let type_name = spec.name.clone();

    let source = JavaFile::new(&package, spec)
      .with_indent_width(self.options.indent_width)
      .render();

    Ok(GeneratedSource { package, type_name, source })
  }

  /* Generate every type in order, stopping at the first failure or at two codecs sharing a file */
  pub fn generate_all(&self, typedefs: &[TypeDef]) -> Result<Vec<GeneratedSource>, CodegenError> {
    let mut owners: HashMap<PathBuf, String> = HashMap::new();
    let mut sources = Vec::with_capacity(typedefs.len());

    for typedef in typedefs {
      let generated = self.generate_codec(typedef)?;
      let path = generated.relative_path();
      if let Some(first) = owners.get(&path) {
        return Err(CodegenError::OutputCollision {
          path: path.display().to_string(),
          first: first.clone(),
          second: typedef.qualified_name(),
        });
      }
      owners.insert(path, typedef.qualified_name());
      sources.push(generated);
    }
    Ok(sources)
  }
}
