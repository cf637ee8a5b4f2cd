use clap::{Parser, Subcommand, ValueEnum};
use codec_gen::cmds;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "codec-gen")]
#[command(about = "Generate JSON codec classes for record-like Java types", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate codec sources from type descriptor files
    Codegen {
        /// Input YAML files describing the target types
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Output directory for generated sources
        #[arg(
            short = 'o',
            long = "output",
            value_name = "DIR",
            default_value = codec_gen::codegen::OUTPUT_DIR
        )]
        output_dir: PathBuf,

        /// Package for generated codecs (defaults to each target type's package)
        #[arg(short = 'p', long = "package", value_name = "PACKAGE")]
        package: Option<String>,

        /// Spaces per indentation level
        #[arg(long = "indent", value_name = "N")]
        indent_width: Option<usize>,

        /// Enable verbose output
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },

    /// Show extracted fields and the structured encode/decode bodies
    Analyze {
        /// Input YAML files describing the target types
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(long = "format", value_enum, default_value = "json")]
        format: ReportFormat,

        /// Only analyze this type (simple or qualified name)
        #[arg(long = "type", value_name = "TYPE")]
        type_name: Option<String>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum ReportFormat {
    Json,
    Yaml,
}

impl From<ReportFormat> for cmds::analyze::OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Json => cmds::analyze::OutputFormat::Json,
            ReportFormat::Yaml => cmds::analyze::OutputFormat::Yaml,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Codegen {
            files,
            output_dir,
            package,
            indent_width,
            verbose,
        } => {
            init_tracing(verbose);
            cmds::codegen::run(files, output_dir, package, indent_width, verbose)?;
        }

        Commands::Analyze {
            files,
            format,
            type_name,
        } => {
            init_tracing(false);
            cmds::analyze::run(files, format.into(), type_name)?;
        }
    }

    Ok(())
}
