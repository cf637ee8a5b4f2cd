/* Codegen command - generate Java codecs from descriptor files */

use super::common::{load_descriptors, resolve_options};
use crate::codegen::{GeneratedSource, JavaCodecGenerator};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

/* Execute the codegen command */
pub fn run(
  files: Vec<PathBuf>,
  output_dir: PathBuf,
  package: Option<String>,
  indent_width: Option<usize>,
  verbose: bool,
) -> anyhow::Result<Vec<PathBuf>> {
  if verbose {
    println!("Codec Generator - Code Generation Tool");
    println!("======================================\n");
    println!("[~] Configuration:");
    println!("  Output directory: {}", output_dir.display());
    if let Some(package) = &package {
      println!("  Package override: {}", package);
    }
    println!("  Input files: {}", files.len());
    for file in &files {
      println!("    - {}", file.display());
    }
    println!();
  }

  let loader = load_descriptors(&files)?;
  let options = resolve_options(package, indent_width, loader.options());
  let generator = JavaCodecGenerator::new(options);

  let sources = generator.generate_all(loader.get_all_types())?;
  let written = write_sources(&sources, &output_dir)?;

  if verbose {
    println!("[✓] Generated Java codecs:");
    for path in &written {
      println!("    - {}", path.display());
    }
  }
  println!("[✓] Code generation complete! ({} codec(s))", written.len());
  Ok(written)
}

/* Write each source under `<output_dir>/<package path>/` */
pub fn write_sources(sources: &[GeneratedSource], output_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
  let mut written = Vec::with_capacity(sources.len());

  for source in sources {
    let path = output_dir.join(source.relative_path());
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(&path, &source.source).with_context(|| format!("failed to write '{}'", path.display()))?;

    info!("wrote {}", path.display());
    written.push(path);
  }

  Ok(written)
}
