//! Golden file tests for the Objective-C event dispatcher generator
//!
//! Each test loads specifications from `tests/fixtures/`, generates `<Prefix>EventDispatchers.mm`
//! and compares it byte-for-byte against `tests/expected/<name>.mm`.
//!
//! Run with: `cargo test --test golden_tests`

use std::fs;
use std::path::{Path, PathBuf};

use inspector_codegen::cli::ExitCode;
use inspector_codegen::cli::commands::{self, GenerateOptions};
use inspector_codegen::model::ProtocolBuilder;
use inspector_codegen::{Generator, GeneratorConfig, ObjCFrontendDispatcherImplementationGenerator};
use inspector_core::frameworks::Framework;

fn fixture_path(name: &str) -> PathBuf {
    Path::new("tests/fixtures").join(name)
}

fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path.display()))
}

fn load_expected(name: &str) -> String {
    let path = Path::new("tests/expected").join(format!("{name}.mm"));
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read expected output: {}", path.display()))
}

/// Generate from a primary fixture plus supplemental fixtures.
fn generate(framework: Framework, primary: &str, supplemental: &[&str]) -> String {
    let mut builder = ProtocolBuilder::new(framework);
    builder
        .add_specification(&load_fixture(primary), primary, false)
        .expect("primary specification failed to parse");
    for name in supplemental {
        builder
            .add_specification(&load_fixture(name), name, true)
            .expect("supplemental specification failed to parse");
    }
    let protocol = builder.build().expect("protocol failed to resolve");

    let config = GeneratorConfig::new().with_input_filename(primary);
    let generator = ObjCFrontendDispatcherImplementationGenerator::new(&protocol, config);
    assert_eq!(generator.output_filename(), "RWIProtocolEventDispatchers.mm");
    generator.generate_output().expect("generation failed")
}

fn assert_matches_expected(name: &str, actual: &str) {
    let expected = load_expected(name);
    if actual != expected {
        let diff = commands::line_diff(&expected, actual).unwrap_or_default();
        panic!("generated output for `{name}` differs from tests/expected/{name}.mm:\n{diff}");
    }
}

#[test]
fn test_every_parameter_shape() {
    let output = generate(Framework::Test, "database.json", &[]);
    assert_matches_expected("database", &output);
}

#[test]
fn test_multiple_domains_filtered_by_framework() {
    let output = generate(Framework::JavaScriptCore, "multiple-domains.json", &[]);
    assert_matches_expected("multiple-domains", &output);
}

#[test]
fn test_domain_without_events() {
    let output = generate(Framework::Test, "no-events.json", &[]);
    assert_matches_expected("no-events", &output);
}

#[test]
fn test_supplemental_domains_are_not_generated() {
    let output = generate(Framework::Test, "with-supplemental.json", &["supplemental-shared.json"]);
    assert_matches_expected("with-supplemental", &output);
}

#[test]
fn test_generation_is_deterministic() {
    let first = generate(Framework::Test, "database.json", &[]);
    let second = generate(Framework::Test, "database.json", &[]);
    assert_eq!(first, second);
}

#[test]
fn test_generate_command_writes_and_checks_output() {
    let out_dir = std::env::temp_dir().join(format!("inspector-codegen-golden-{}", std::process::id()));
    let _ = fs::remove_dir_all(&out_dir);

    let mut options = GenerateOptions {
        inputs: vec![fixture_path("database.json")],
        framework: Framework::Test,
        output_dir: out_dir.clone(),
        objc_prefix: "RWIProtocol".to_string(),
        stdout: false,
        check: false,
    };
    assert_eq!(commands::generate(&options).unwrap(), ExitCode::SUCCESS);

    let written = fs::read_to_string(out_dir.join("RWIProtocolEventDispatchers.mm")).unwrap();
    assert_eq!(written, load_expected("database"));

    options.check = true;
    assert_eq!(commands::generate(&options).unwrap(), ExitCode::SUCCESS);

    fs::write(out_dir.join("RWIProtocolEventDispatchers.mm"), "stale\n").unwrap();
    let err = commands::generate(&options).unwrap_err();
    assert!(err.message.contains("out of date"));
    assert!(err.message.contains("-   1 | stale"));

    let _ = fs::remove_dir_all(&out_dir);
}

#[test]
fn test_generate_command_reports_model_errors() {
    let options = GenerateOptions {
        inputs: vec![fixture_path("with-supplemental.json")],
        framework: Framework::Test,
        output_dir: PathBuf::from("unused"),
        objc_prefix: "RWIProtocol".to_string(),
        stdout: true,
        check: false,
    };
    // Without the supplemental file, `Shared.Record` cannot be resolved.
    let err = commands::generate(&options).unwrap_err();
    assert!(err.message.contains("Shared.Record"));
}

#[test]
fn test_missing_input_file_is_reported() {
    let err = commands::read_source(Path::new("tests/fixtures/does-not-exist.json")).unwrap_err();
    assert!(err.message.contains("does-not-exist.json"));
}
