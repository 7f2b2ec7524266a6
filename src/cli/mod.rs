//! CLI module for the protocol binding generator
//!
//! This module provides the command-line interface for the generator.
//!
//! ## Commands
//!
//! - `generate <INPUT>...` - Generate `<Prefix>EventDispatchers.mm` (or check it is up to date)
//! - `check <INPUT>...` - Validate specification files and summarize their domains
//!
//! The first input is the primary specification; further inputs are supplemental. Their types may be referenced,
//! but their domains are not generated.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use inspector_core::frameworks::{self, Framework};

use crate::version::INSPECTOR_CODEGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a failure error from a diagnostic, rendered with its source context.
    pub fn diagnostic(diagnostic: impl miette::Diagnostic + Send + Sync + 'static) -> Self {
        Self::failure(format!("{:?}", miette::Report::new(diagnostic)))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate native bindings from inspector protocol specifications
#[derive(Parser, Debug)]
#[command(name = "inspector-codegen")]
#[command(version = INSPECTOR_CODEGEN_VERSION)]
#[command(about = "Generate native bindings from inspector protocol specifications", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the Objective-C event dispatcher implementation
    Generate {
        /// Primary specification, followed by supplemental specifications
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,
        /// Framework the bindings are generated for
        #[arg(long, value_parser = parse_framework, default_value = "Global")]
        framework: Framework,
        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output_dir: PathBuf,
        /// Class prefix for generated Objective-C names
        #[arg(long, value_name = "PREFIX", default_value = inspector_core::DEFAULT_OBJC_PREFIX)]
        objc_prefix: String,
        /// Print the generated file instead of writing it
        #[arg(long, conflicts_with = "check")]
        stdout: bool,
        /// Fail if the file on disk differs from what would be generated
        #[arg(long)]
        check: bool,
    },

    /// Validate specifications and summarize their domains
    Check {
        /// Primary specification, followed by supplemental specifications
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,
        /// Framework the specifications belong to
        #[arg(long, value_parser = parse_framework, default_value = "Global")]
        framework: Framework,
        /// Summary format
        #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,
    },
}

/// Output format for `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    Text,
    Json,
}

fn parse_framework(name: &str) -> Result<Framework, String> {
    frameworks::from_str(name).ok_or_else(|| {
        let known: Vec<&str> = frameworks::FRAMEWORKS.iter().map(|f| f.canonical).collect();
        format!("unknown framework `{name}` (expected one of: {})", known.join(", "))
    })
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Generate {
            inputs,
            framework,
            output_dir,
            objc_prefix,
            stdout,
            check,
        } => commands::generate(&commands::GenerateOptions {
            inputs,
            framework,
            output_dir,
            objc_prefix,
            stdout,
            check,
        }),
        Command::Check {
            inputs,
            framework,
            format,
        } => commands::check(&inputs, framework, format),
    }
}

// ============================================================================
// Tests
// ============================================================================
