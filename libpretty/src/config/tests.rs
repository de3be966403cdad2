use super::*;
use crate::bytes::format_byte_size;
use crate::duration::{TimeSpan, format_duration};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.locale, "en-US");

    // Verify default duration settings
    assert_eq!(config.duration.max_unit_groups, 2);
    assert_eq!(config.duration.representation, Representation::Long);
    assert_eq!(config.duration.highest_unit, DurationUnit::Days);
    assert_eq!(config.duration.lowest_unit, DurationUnit::Seconds);
    assert_eq!(config.duration.rounding, Rounding::Down);

    // Verify default byte settings
    assert!(config.bytes.long_form);
    assert_eq!(config.bytes.base, ByteBase::Decimal);
    assert!(config.bytes.number_format.is_none());
}

#[test]
fn test_from_str_empty_yaml() {
    let config = Config::from_yaml_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_from_str_partial_yaml() {
    let yaml = r#"
locale: nb-NO
duration:
  max_unit_groups: 3
  rounding: nearest-or-up
bytes:
  base: binary
"#;
    let config = Config::from_yaml_str(yaml).unwrap();

    // Check specified values
    assert_eq!(config.locale, "nb-NO");
    assert_eq!(config.duration.max_unit_groups, 3);
    assert_eq!(config.duration.rounding, Rounding::NearestOrUp);
    assert_eq!(config.bytes.base, ByteBase::Binary);

    // Check that other values are still default
    assert_eq!(config.duration.representation, Representation::Long);
    assert_eq!(config.duration.lowest_unit, DurationUnit::Seconds);
    assert!(config.bytes.long_form);
}

#[test]
fn test_from_str_full_yaml() {
    let yaml = r#"
locale: ko-KR
duration:
  max_unit_groups: 4
  representation: compact-with-space
  highest_unit: hours
  lowest_unit: milliseconds
  rounding: up
bytes:
  long_form: false
  base: decimal
  number_format: "0.00"
"#;
    let config = Config::from_yaml_str(yaml).unwrap();
    assert_eq!(config.duration.representation, Representation::CompactWithSpace);
    assert_eq!(config.duration.highest_unit, DurationUnit::Hours);
    assert_eq!(config.duration.lowest_unit, DurationUnit::Milliseconds);
    assert_eq!(config.duration.rounding, Rounding::Up);
    assert!(!config.bytes.long_form);
    assert_eq!(config.bytes.number_format.as_deref(), Some("0.00"));
}

#[test]
fn test_from_str_unknown_enum_value() {
    let yaml = "duration:\n  representation: verbose\n";
    let err = Config::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, PrettyError::Config { .. }));
}

#[test]
fn test_from_str_invalid_yaml() {
    let err = Config::from_yaml_str("duration: [unclosed").unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}

#[test]
fn test_load_without_path_returns_defaults() {
    let config = Config::load(None).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "duration:\n  representation: short\nbytes:\n  long_form: false").unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.duration.representation, Representation::Short);
    assert!(!config.bytes.long_form);
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");

    let err = Config::load(Some(&path)).unwrap_err();
    match err {
        PrettyError::Config {
            path: Some(reported),
            ..
        } => assert!(reported.ends_with("missing.yaml")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_to_duration_options() {
    let yaml = "duration:\n  representation: compact\n  max_unit_groups: 2\n";
    let options = Config::from_yaml_str(yaml)
        .unwrap()
        .to_duration_options()
        .unwrap();
    let text = format_duration(TimeSpan::from_parts(0, 3, 4, 0, 0), &options).unwrap();
    assert_eq!(text, "3h4m");
}

#[test]
fn test_to_duration_options_rejects_zero_groups() {
    let config = Config::from_yaml_str("duration:\n  max_unit_groups: 0\n").unwrap();
    assert!(config.to_duration_options().unwrap_err().is_argument_error());
}

#[test]
fn test_to_byte_size_options() {
    let config = Config::from_yaml_str("locale: nb-NO\nbytes:\n  long_form: false\n").unwrap();
    let options = config.to_byte_size_options().unwrap();
    assert_eq!(format_byte_size(1_234_560, &options), "1,23 MB");
}

#[test]
fn test_to_byte_size_options_with_pattern() {
    let config = Config::from_yaml_str("bytes:\n  number_format: \"0.000\"\n").unwrap();
    let options = config.to_byte_size_options().unwrap();
    assert_eq!(format_byte_size(1_234_560, &options), "1.235 megabytes");

    let bad = Config::from_yaml_str("bytes:\n  number_format: \"x\"\n").unwrap();
    assert!(matches!(
        bad.to_byte_size_options(),
        Err(PrettyError::InvalidFormat { .. })
    ));
}
