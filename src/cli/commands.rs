use crate::error::Error;
use crate::generator::Generator;
use crate::parser::Parser as DocumentParser;
use crate::VERSION;
use anyhow::bail;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default location of the generated Markdown
pub const DEFAULT_OUTPUT: &str = "docs/openapi.md";

/// Exit code for failures that are not a [`Error`] variant
pub const EXIT_UNEXPECTED: i32 = 4;

/// Command-line interface for Transducer
///
/// Generates Markdown documentation from OpenAPI 3.0/3.1 documents.
#[derive(Debug, Parser)]
#[command(name = "transducer")]
#[command(about = "Generate Markdown documentation from OpenAPI specifications", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate Markdown documentation from an OpenAPI specification
    Generate {
        /// Path to the OpenAPI document (YAML or JSON)
        input: PathBuf,

        /// Output file path for the generated Markdown
        #[arg(short, long, env = "TRANSDUCER_OUTPUT", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Custom Jinja template file
        #[arg(short, long, env = "TRANSDUCER_TEMPLATE")]
        template: Option<PathBuf>,
    },
    /// Display version information
    Version,
}

/// The `generate` input path does not exist; checked before parsing
#[derive(Debug, thiserror::Error)]
#[error("Input file not found: {}", .0.display())]
pub struct InputNotFound(pub PathBuf);

/// Run one command and return the line to print on success.
///
/// # Errors
///
/// Pipeline failures are returned as [`Error`] wrapped in `anyhow`, and a
/// missing input file as [`InputNotFound`].
pub fn execute(command: &Commands) -> anyhow::Result<String> {
    match command {
        Commands::Generate {
            input,
            output,
            template,
        } => {
            generate(input, output, template.as_deref())?;
            Ok(format!(
                "✓ Documentation generated successfully: {}",
                output.display()
            ))
        }
        Commands::Version => Ok(format!("Transducer version {VERSION}")),
    }
}

fn generate(input: &Path, output: &Path, template: Option<&Path>) -> anyhow::Result<()> {
    if !input.exists() {
        bail!(InputNotFound(input.to_path_buf()));
    }
    debug!(input = %input.display(), output = %output.display(), "generating documentation");

    let document = DocumentParser::new(input).parse()?;
    let mut generator = Generator::new(document);
    if let Some(template) = template {
        generator = generator.with_template(template);
    }
    generator.to_file(output)?;
    Ok(())
}

/// Exit code for a failed command: the library error's code, or
/// [`EXIT_UNEXPECTED`] for anything else.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.is::<InputNotFound>() {
        return 1;
    }
    err.downcast_ref::<Error>()
        .map_or(EXIT_UNEXPECTED, Error::exit_code)
}

/// The `✗ …` line printed on stderr for a failed command.
pub fn error_message(err: &anyhow::Error) -> String {
    if let Some(missing) = err.downcast_ref::<InputNotFound>() {
        return format!("✗ {missing}");
    }
    match err.downcast_ref::<Error>() {
        Some(e @ Error::File(_)) => format!("✗ File error: {e}"),
        Some(e @ Error::Parse { .. }) => format!("✗ Parse error: {e}"),
        Some(e @ Error::Validation { .. }) => format!("✗ Validation error: {e}"),
        None => format!("✗ Unexpected error: {err}"),
    }
}

/// Run the parsed command line, printing the outcome, and return the process
/// exit code.
pub fn run_cli(cli: Cli) -> i32 {
    match execute(&cli.command) {
        Ok(message) => {
            println!("{message}");
            0
        }
        Err(err) => {
            eprintln!("{}", error_message(&err));
            exit_code(&err)
        }
    }
}
