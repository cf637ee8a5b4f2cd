use crate::file::{CodecFile, CodecOptions};
use anyhow::Context;
use codec_types::TypeDef;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/* Parse descriptor YAML held in memory */
pub fn parse_str(contents: &str) -> anyhow::Result<CodecFile> {
    let codec_file: CodecFile = serde_yml::from_str(contents)?;
    Ok(codec_file)
}

/* Collects target types and options from one or more descriptor files */
#[derive(Debug, Default)]
pub struct DescriptorLoader {
    /* Canonical paths of files already loaded */
    loaded_files: HashSet<PathBuf>,
    /* Qualified names of types already collected */
    qualified_names: HashSet<String>,
    all_types: Vec<TypeDef>,
    options: CodecOptions,
}

impl DescriptorLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /* Load a single descriptor file; loading the same file twice is a no-op */
    pub fn load_file(&mut self, file_path: &Path) -> anyhow::Result<()> {
        let canonical_path = file_path
            .canonicalize()
            .with_context(|| format!("descriptor file '{}' not found", file_path.display()))?;

        if self.loaded_files.contains(&canonical_path) {
            debug!("skipping already loaded descriptor file {}", file_path.display());
            return Ok(());
        }

        let contents = std::fs::read_to_string(&canonical_path)
            .with_context(|| format!("failed to read '{}'", file_path.display()))?;
        let codec_file = parse_str(&contents)
            .with_context(|| format!("failed to parse '{}'", file_path.display()))?;

        debug!(
            "loaded descriptor file {} ({} type(s))",
            file_path.display(),
            codec_file.get_types().len()
        );

        self.add_file(codec_file)
            .with_context(|| format!("while loading '{}'", file_path.display()))?;
        self.loaded_files.insert(canonical_path);
        Ok(())
    }

    /* Load several descriptor files in order */
    pub fn load_files<P: AsRef<Path>>(&mut self, file_paths: &[P]) -> anyhow::Result<()> {
        for file_path in file_paths {
            self.load_file(file_path.as_ref())?;
        }
        Ok(())
    }

    /* Merge an already parsed descriptor file; the first file setting an option wins */
    pub fn add_file(&mut self, codec_file: CodecFile) -> anyhow::Result<()> {
        let mut incoming = HashSet::new();
        for typedef in &codec_file.types {
            let qualified = typedef.qualified_name();
            if self.qualified_names.contains(&qualified) || !incoming.insert(qualified.clone()) {
                anyhow::bail!("type '{}' is defined more than once", qualified);
            }
        }

        self.options.merge_missing(&codec_file.codec);
        for typedef in codec_file.types {
            self.qualified_names.insert(typedef.qualified_name());
            self.all_types.push(typedef);
        }
        Ok(())
    }

    /* Get all collected type definitions in load order */
    pub fn get_all_types(&self) -> &[TypeDef] {
        &self.all_types
    }

    /* Find a type by simple or fully qualified name */
    pub fn get_type(&self, type_name: &str) -> Option<&TypeDef> {
        self.all_types
            .iter()
            .find(|t| t.name == type_name || t.qualified_name() == type_name)
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    pub fn loaded_file_count(&self) -> usize {
        self.loaded_files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_and_types() {
        let codec_file = parse_str(
            r#"
codec:
  package: "app.codec"
  indent-width: 4
types:
  - name: User
    package: app.model
    fields:
      - name: name
        field-type: String
"#,
        )
        .unwrap();

        assert_eq!(codec_file.options().package.as_deref(), Some("app.codec"));
        assert_eq!(codec_file.options().indent_width, Some(4));
        assert_eq!(codec_file.get_types()[0].qualified_name(), "app.model.User");
    }

    #[test]
    fn test_codec_section_is_optional() {
        let codec_file = parse_str("types:\n  - name: Empty\n").unwrap();
        assert_eq!(codec_file.codec, CodecOptions::default());
        assert!(codec_file.get_types()[0].fields.is_empty());
    }

    #[test]
    fn test_first_option_wins() {
        let mut loader = DescriptorLoader::new();
        loader
            .add_file(parse_str("codec:\n  package: first\n").unwrap())
            .unwrap();
        loader
            .add_file(parse_str("codec:\n  package: second\n  indent-width: 8\n").unwrap())
            .unwrap();

        assert_eq!(loader.options().package.as_deref(), Some("first"));
        assert_eq!(loader.options().indent_width, Some(8));
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let mut loader = DescriptorLoader::new();
        let yaml = "types:\n  - name: User\n    package: app.model\n";
        loader.add_file(parse_str(yaml).unwrap()).unwrap();

        let err = loader.add_file(parse_str(yaml).unwrap()).unwrap_err();
        assert!(err.to_string().contains("app.model.User"));
        assert_eq!(loader.get_all_types().len(), 1);

        let err = DescriptorLoader::new()
            .add_file(parse_str("types:\n  - name: Point\n  - name: Point\n").unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("'Point'"));
    }

    #[test]
    fn test_same_name_in_other_package_allowed() {
        let mut loader = DescriptorLoader::new();
        loader
            .add_file(parse_str("types:\n  - name: User\n    package: a\n  - name: User\n    package: b\n").unwrap())
            .unwrap();

        assert_eq!(loader.get_all_types().len(), 2);
        assert_eq!(loader.get_type("b.User").unwrap().package, "b");
    }
}
