/* Common utilities shared between analyze and codegen commands */

use crate::codegen::JavaCodecGeneratorOptions;
use codec_loader::{CodecOptions, DescriptorLoader};
use std::path::PathBuf;
use tracing::debug;

/* Load every descriptor file into one loader */
pub fn load_descriptors(files: &[PathBuf]) -> anyhow::Result<DescriptorLoader> {
  let mut loader = DescriptorLoader::new();
  loader.load_files(files)?;

  debug!(
    "loaded {} type(s) from {} descriptor file(s)",
    loader.get_all_types().len(),
    loader.loaded_file_count()
  );
  Ok(loader)
}

/* Command-line values win over descriptor options, which win over defaults */
pub fn resolve_options(
  package: Option<String>,
  indent_width: Option<usize>,
  file_options: &CodecOptions,
) -> JavaCodecGeneratorOptions {
  let mut cli_options = CodecOptions { package, indent_width };
  cli_options.merge_missing(file_options);

  let defaults = JavaCodecGeneratorOptions::default();
  JavaCodecGeneratorOptions {
    package: cli_options.package,
    indent_width: cli_options.indent_width.unwrap_or(defaults.indent_width),
  }
}
