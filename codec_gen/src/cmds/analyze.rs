/* Analyze command - show the structured codec description of each type */

use super::common::{load_descriptors, resolve_options};
use crate::codegen::java_gen::{extract_fields, CodecTypeSpec, FieldMap};
use crate::codegen::JavaCodecGenerator;
use serde_derive::Serialize;
use std::path::PathBuf;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OutputFormat {
  Json,
  Yaml,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct CodecReport {
  pub target: String,
  pub package: String,
  pub fields: FieldMap,
  pub codec: CodecTypeSpec,
}

/* Build reports for every loaded type, or only `type_filter` when given */
pub fn build_reports(files: &[PathBuf], type_filter: Option<&str>) -> anyhow::Result<Vec<CodecReport>> {
  let loader = load_descriptors(files)?;
  let generator = JavaCodecGenerator::new(resolve_options(None, None, loader.options()));

  let typedefs: Vec<_> = match type_filter {
    Some(name) => {
      let typedef = loader
        .get_type(name)
        .ok_or_else(|| anyhow::anyhow!("type '{}' not found in descriptor files", name))?;
      vec![typedef]
    }
    None => loader.get_all_types().iter().collect(),
  };

  let mut reports = Vec::with_capacity(typedefs.len());
  for typedef in typedefs {
    reports.push(CodecReport {
      target: typedef.qualified_name(),
      package: generator.output_package(typedef),
      fields: extract_fields(typedef)?,
      codec: generator.build_codec_spec(typedef)?,
    });
  }
  Ok(reports)
}

/* Execute the analyze command */
pub fn run(files: Vec<PathBuf>, format: OutputFormat, type_filter: Option<String>) -> anyhow::Result<()> {
  let reports = build_reports(&files, type_filter.as_deref())?;

  let rendered = match format {
    OutputFormat::Json => serde_json::to_string_pretty(&reports)?,
    OutputFormat::Yaml => serde_yml::to_string(&reports)?,
  };
  println!("{}", rendered);
  Ok(())
}
