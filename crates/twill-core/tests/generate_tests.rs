//! End-to-end tests against a stand-in generator binary: a shell script
//! that prints a canned output table, standing where the real generator
//! would. Unix-only because the stand-in relies on an executable script.
#![cfg(unix)]

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use serde_json::json;
use twill_core::{
    generate, generate_stats, plain, EngineConfig, GenOptions, ModelSpec, Parameter, TwillError,
};

/// Writes an executable script that ignores its arguments and prints `table`.
fn stand_in_generator(dir: &Path, table: &str) -> EngineConfig {
    let path = dir.join("fake-generator");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "#!/bin/sh\nprintf '%s' '{table}'\n").unwrap();
    let mut permissions = file.metadata().unwrap().permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(&path, permissions).unwrap();
    EngineConfig::with_binary(path)
}

#[test]
fn test_generate_round_trips_typed_values() {
    let dir = tempfile::tempdir().unwrap();
    let config = stand_in_generator(
        dir.path(),
        "0\t1\n0.0\t1.0\n0.0\t1.1\n0.1\t1.0\n0.1\t1.1\n",
    );

    let spec = ModelSpec::new(vec![
        Parameter::new("A", vec![plain(json!(1)), plain(json!(2))]),
        Parameter::new("B", vec![plain(json!("x")), plain(json!(null))]),
    ]);
    let cases = generate(&spec, &GenOptions::default(), &config).unwrap();

    assert_eq!(cases.len(), 4);
    // Membership over all four pairs; row order is the generator's business.
    for a in [json!(1), json!(2)] {
        for b in [json!("x"), json!(null)] {
            assert!(
                cases
                    .iter()
                    .any(|case| case.get("A") == Some(&a) && case.get("B") == Some(&b)),
                "missing pair {a:?}/{b:?}"
            );
        }
    }
}

#[test]
fn test_generate_rejects_mismatched_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = stand_in_generator(dir.path(), "0\n5.5\n");

    let spec = ModelSpec::new(vec![Parameter::new("A", vec![plain(json!(1))])]);
    let err = generate(&spec, &GenOptions::default(), &config).unwrap_err();
    assert!(matches!(err, TwillError::Decode(_)));
}

#[test]
fn test_generate_stats_parses_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = stand_in_generator(
        dir.path(),
        "Combinations: 4\nGenerated tests: 4\nGeneration time: 0:00:00\n",
    );

    let spec = ModelSpec::new(vec![
        Parameter::new("A", vec![plain(json!(1)), plain(json!(2))]),
        Parameter::new("B", vec![plain(json!(3)), plain(json!(4))]),
    ]);
    let stats = generate_stats(&spec, &GenOptions::default(), &config).unwrap();
    assert_eq!(stats.combinations, 4);
    assert_eq!(stats.generated_tests, 4);
}

#[test]
fn test_generate_validates_before_spawning() {
    // An invalid spec must fail shape validation without touching the
    // (nonexistent) binary.
    let config = EngineConfig::with_binary("/nonexistent/generator");
    let spec: ModelSpec<serde_json::Value> = ModelSpec::new(vec![]);
    let err = generate(&spec, &GenOptions::default(), &config).unwrap_err();
    assert!(matches!(err, TwillError::Shape(_)));
}
