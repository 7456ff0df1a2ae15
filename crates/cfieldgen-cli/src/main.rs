//! cfieldgen CLI - C message code generator
//!
//! Commands:
//! - `cfieldgen generate` - Generate `.pb-c.h` / `.pb-c.c` from a schema description
//! - `cfieldgen check` - Validate a schema description without writing output

use anyhow::{Context, Result};
use cfieldgen_cli::logging::init_logging;
use cfieldgen_cli::{SchemaFile, assemble_file, check_file, failure_headline, load_options};
use cfieldgen_core::LogLevel;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cfieldgen")]
#[command(author, version, about = "Generate protobuf-c message code", long_about = None)]
struct Cli {
    /// Diagnostic verbosity (trace, debug, info, warn, error, off)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate C header and source for a schema description
    Generate {
        /// Path to the schema description (.json or .toml)
        #[arg(short, long)]
        schema: PathBuf,

        /// Output directory (default: print both files to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Options file (.json or .toml) replacing the schema's `[options]`
        #[arg(long)]
        options: Option<PathBuf>,

        /// Declare string members as `const char *`
        #[arg(long)]
        const_strings: bool,
    },

    /// Validate a schema description
    Check {
        /// Path to the schema description (.json or .toml)
        #[arg(short, long)]
        schema: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Commands::Generate {
            schema,
            output,
            options,
            const_strings,
        } => {
            generate(&schema, output.as_deref(), options.as_deref(), const_strings)?;
        }
        Commands::Check { schema } => {
            check(&schema)?;
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<SchemaFile> {
    let schema = SchemaFile::from_file(path)?;
    schema.validate()?;
    Ok(schema)
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "schema".to_string())
}

fn generate(
    schema_path: &Path,
    output: Option<&Path>,
    options_path: Option<&Path>,
    const_strings: bool,
) -> Result<()> {
    let mut schema = load(schema_path)?;
    if let Some(path) = options_path {
        schema.options = load_options(path)?;
    }
    if const_strings {
        schema.options.const_strings = true;
    }

    let file = assemble_file(&schema, &stem_of(schema_path)).map_err(|err| {
        let headline = failure_headline(&err);
        anyhow::Error::new(err).context(format!("{headline} for {}", schema_path.display()))
    })?;

    match output {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
            let header_path = dir.join(&file.header_name);
            let source_path = dir.join(&file.source_name);
            fs::write(&header_path, &file.header)
                .with_context(|| format!("Failed to write {}", header_path.display()))?;
            fs::write(&source_path, &file.source)
                .with_context(|| format!("Failed to write {}", source_path.display()))?;
            println!("Generated {}", header_path.display());
            println!("Generated {}", source_path.display());
        }
        None => {
            print!("{}", file.header);
            println!();
            print!("{}", file.source);
        }
    }

    Ok(())
}

fn check(schema_path: &Path) -> Result<()> {
    println!("Checking schema: {}", schema_path.display());

    let schema = load(schema_path)?;
    let fields = check_file(&schema).map_err(|err| {
        let headline = failure_headline(&err);
        anyhow::Error::new(err).context(format!("{headline} for {}", schema_path.display()))
    })?;

    println!(
        "✓ {} message(s), {} field(s) generate cleanly",
        schema.messages.len(),
        fields
    );
    Ok(())
}
