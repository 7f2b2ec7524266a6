//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use inspector_core::frameworks::Framework;
use inspector_model::{Protocol, ProtocolBuilder};

use crate::backend::{Generator, GeneratorConfig, ObjCFrontendDispatcherImplementationGenerator};

use super::{CliError, CliResult, ExitCode, SummaryFormat};

/// Maximum specification file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while parsing.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Options for the `generate` command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Primary specification first, supplemental ones after it
    pub inputs: Vec<PathBuf>,
    pub framework: Framework,
    pub output_dir: PathBuf,
    pub objc_prefix: String,
    pub stdout: bool,
    pub check: bool,
}

/// Read specification file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Specification file '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// Validate the output directory to prevent path traversal.
///
/// The path must not contain `..` components. Absolute paths are allowed but logged.
fn validate_output_dir(out_dir: &Path) -> CliResult<()> {
    for component in out_dir.components() {
        if let std::path::Component::ParentDir = component {
            return Err(CliError::failure(format!(
                "Output directory '{}' contains path traversal (..)",
                out_dir.display()
            )));
        }
    }

    if out_dir.is_absolute() {
        tracing::warn!(path = %out_dir.display(), "using absolute output path");
    }

    Ok(())
}

/// File name shown in generated banners.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse and resolve the primary specification plus any supplemental ones.
pub fn load_protocol(inputs: &[PathBuf], framework: Framework) -> CliResult<Protocol> {
    let mut builder = ProtocolBuilder::new(framework);
    for (index, path) in inputs.iter().enumerate() {
        let source = read_source(path)?;
        let is_supplemental = index > 0;
        builder
            .add_specification(&source, &display_name(path), is_supplemental)
            .map_err(CliError::diagnostic)?;
        tracing::info!(file = %path.display(), supplemental = is_supplemental, "loaded specification");
    }
    builder.build().map_err(CliError::diagnostic)
}

/// Generate the Objective-C event dispatcher implementation.
pub fn generate(options: &GenerateOptions) -> CliResult<ExitCode> {
    let Some(primary) = options.inputs.first() else {
        return Err(CliError::failure("No specification files given"));
    };
    let protocol = load_protocol(&options.inputs, options.framework)?;

    let config = GeneratorConfig::new()
        .with_input_filename(display_name(primary))
        .with_objc_prefix(&options.objc_prefix);
    let generator = ObjCFrontendDispatcherImplementationGenerator::new(&protocol, config);
    let output = generator.generate_output().map_err(CliError::diagnostic)?;

    if options.stdout {
        print!("{output}");
        return Ok(ExitCode::SUCCESS);
    }

    validate_output_dir(&options.output_dir)?;
    let path = options.output_dir.join(generator.output_filename());

    if options.check {
        return check_up_to_date(&path, &output);
    }

    fs::create_dir_all(&options.output_dir).map_err(|e| {
        CliError::failure(format!(
            "Error creating output directory '{}': {}",
            options.output_dir.display(),
            e
        ))
    })?;
    fs::write(&path, &output)
        .map_err(|e| CliError::failure(format!("Error writing '{}': {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), bytes = output.len(), "wrote generated file");
    println!("Generated {}", path.display());
    Ok(ExitCode::SUCCESS)
}

/// Compare `expected` against the file at `path`.
fn check_up_to_date(path: &Path, expected: &str) -> CliResult<ExitCode> {
    let existing = fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("Cannot read '{}' for comparison: {}", path.display(), e)))?;

    match line_diff(&existing, expected) {
        None => {
            println!("✓ {} is up to date", path.display());
            Ok(ExitCode::SUCCESS)
        }
        Some(diff) => Err(CliError::failure(format!(
            "{} is out of date:\n{}",
            path.display(),
            diff.trim_end()
        ))),
    }
}

/// Line-by-line diff between what is on disk and what would be generated.
///
/// Returns `None` when the texts are byte-identical.
pub fn line_diff(existing: &str, generated: &str) -> Option<String> {
    if existing == generated {
        return None;
    }

    let mut diff = String::new();
    let existing_lines: Vec<&str> = existing.lines().collect();
    let generated_lines: Vec<&str> = generated.lines().collect();

    let max_lines = existing_lines.len().max(generated_lines.len());

    for i in 0..max_lines {
        let old = existing_lines.get(i).copied();
        let new = generated_lines.get(i).copied();

        if old != new {
            if let Some(old) = old {
                diff.push_str(&format!("-{:4} | {}\n", i + 1, old));
            }
            if let Some(new) = new {
                diff.push_str(&format!("+{:4} | {}\n", i + 1, new));
            }
        }
    }

    if diff.is_empty() {
        // Same lines, different line endings or trailing newline
        diff.push_str("(files differ only in line endings or trailing newlines)\n");
    }
    Some(diff)
}

/// Validate specifications and print a per-domain summary.
pub fn check(inputs: &[PathBuf], framework: Framework, format: SummaryFormat) -> CliResult<ExitCode> {
    let protocol = load_protocol(inputs, framework)?;

    match format {
        SummaryFormat::Text => {
            for domain in protocol.domains() {
                println!(
                    "{}{}: {} types, {} commands, {} events",
                    domain.name,
                    if domain.is_supplemental { " (supplemental)" } else { "" },
                    domain.type_declarations.len(),
                    domain.commands.len(),
                    domain.events.len()
                );
            }
            println!("✓ {} domains valid for framework {}", protocol.domains().len(), protocol.framework());
        }
        SummaryFormat::Json => {
            let domains: Vec<serde_json::Value> = protocol
                .domains()
                .iter()
                .map(|domain| {
                    serde_json::json!({
                        "domain": domain.name,
                        "supplemental": domain.is_supplemental,
                        "types": domain.type_declarations.len(),
                        "commands": domain.commands.len(),
                        "events": domain.events.len(),
                    })
                })
                .collect();
            let summary = serde_json::json!({
                "framework": protocol.framework().to_string(),
                "domains": domains,
            });
            let text = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::failure(format!("Error rendering summary: {}", e)))?;
            println!("{text}");
        }
    }
    Ok(ExitCode::SUCCESS)
}
