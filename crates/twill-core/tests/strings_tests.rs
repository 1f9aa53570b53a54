//! String-mode API tests.
#![cfg(unix)]

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use twill_core::{
    alias, generate_strings, negative, plain, weight, EngineConfig, ModelSpec, Parameter,
    Separators, StringOptions, TwillError,
};
use twill_wire::BuildError;

fn stand_in_generator(dir: &Path, table: &str) -> EngineConfig {
    let path = dir.join("fake-generator");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "#!/bin/sh\nprintf '%s' '{table}'\n").unwrap();
    let mut permissions = file.metadata().unwrap().permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(&path, permissions).unwrap();
    EngineConfig::with_binary(path)
}

fn string_values(values: &[&str]) -> Vec<twill_core::ParamValue<String>> {
    values.iter().map(|value| plain(value.to_string())).collect()
}

#[test]
fn test_cases_come_back_under_parameter_keys() {
    let dir = tempfile::tempdir().unwrap();
    let config = stand_in_generator(
        dir.path(),
        "color\tsize\nred\tsmall\nblue\t~large\n",
    );

    let spec = ModelSpec::new(vec![
        Parameter::new("color", string_values(&["red", "blue"])),
        Parameter::new("size", string_values(&["small", "large"])),
    ]);
    let cases = generate_strings(&spec, &StringOptions::default(), &config).unwrap();

    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].get("color").map(String::as_str), Some("red"));
    // The negative marker is stripped before the value reaches the caller.
    assert_eq!(cases[1].get("size").map(String::as_str), Some("large"));
}

#[test]
fn test_reserved_character_in_value_fails() {
    let config = EngineConfig::with_binary("/nonexistent/generator");
    let spec = ModelSpec::new(vec![Parameter::new(
        "a",
        string_values(&["plain", "with,comma"]),
    )]);
    let err = generate_strings(&spec, &StringOptions::default(), &config).unwrap_err();
    assert!(matches!(
        err,
        TwillError::Build(BuildError::ReservedCharacter { separator: ',', .. })
    ));
}

#[test]
fn test_custom_separators_free_the_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = stand_in_generator(dir.path(), "a\nwith,comma\n");

    // With ';' as the value separator, a comma inside a value is legal.
    let options = StringOptions::with_separators(Separators {
        alias: '/',
        value: ';',
        negative: '!',
    });
    let spec = ModelSpec::new(vec![Parameter::new(
        "a",
        string_values(&["with,comma", "other"]),
    )]);
    let cases = generate_strings(&spec, &options, &config).unwrap();
    assert_eq!(
        cases[0].get("a").map(String::as_str),
        Some("with,comma")
    );
}

#[test]
fn test_annotations_render_with_configured_separators() {
    // The stand-in ignores its input, so this exercises the build path for
    // every annotation shape in one spec.
    let dir = tempfile::tempdir().unwrap();
    let config = stand_in_generator(dir.path(), "a\nx\n");

    let spec = ModelSpec::new(vec![Parameter::new(
        "a",
        vec![
            plain("x".to_string()),
            alias(["y".to_string(), "z".to_string()]),
            negative("bad".to_string()),
            weight("hot".to_string(), 9),
        ],
    )]);
    assert!(generate_strings(&spec, &StringOptions::default(), &config).is_ok());
}
