use super::*;
use libpretty::Config;

fn ctx() -> AppContext {
    AppContext::with_config(Config::default())
}

fn args(bytes: u64) -> SizeArgs {
    SizeArgs {
        bytes,
        ..SizeArgs::default()
    }
}

#[test]
fn test_size_uses_config_defaults() {
    let report = run_size(&ctx(), &args(1_234_560)).unwrap();
    assert_eq!(report.text, "1.23 megabytes");
    assert_eq!(report.unit, "mega");
    assert_eq!(report.base, 1000);
}

#[test]
fn test_short_flag_overrides_config() {
    let report = run_size(
        &ctx(),
        &SizeArgs {
            short: true,
            ..args(1_500)
        },
    )
    .unwrap();
    assert_eq!(report.text, "1.5 KB");
}

#[test]
fn test_long_flag_overrides_short_config() {
    let config = Config::from_yaml_str("bytes:\n  long_form: false\n").unwrap();
    let ctx = AppContext::with_config(config);
    assert_eq!(run_size(&ctx, &args(1)).unwrap().text, "1 B");

    let report = run_size(
        &ctx,
        &SizeArgs {
            long: true,
            ..args(1)
        },
    )
    .unwrap();
    assert_eq!(report.text, "1 byte");
}

#[test]
fn test_base_flag() {
    let report = run_size(
        &ctx(),
        &SizeArgs {
            base: Some("1024".to_string()),
            ..args(1_536)
        },
    )
    .unwrap();
    assert_eq!(report.text, "1.5 kilobytes");
    assert_eq!(report.base, 1024);
}

#[test]
fn test_bad_base_flag() {
    let err = run_size(
        &ctx(),
        &SizeArgs {
            base: Some("1023".to_string()),
            ..args(1)
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("1023"));
}

#[test]
fn test_locale_and_number_format_flags() {
    let report = run_size(
        &ctx(),
        &SizeArgs {
            locale: Some("nb-NO".to_string()),
            number_format: Some("0.000".to_string()),
            ..args(1_234_560)
        },
    )
    .unwrap();
    assert_eq!(report.text, "1,235 megabytes");
}

#[test]
fn test_size_report_json() {
    let report = run_size(&ctx(), &args(2_000)).unwrap();
    let json = crate::format::format_output(&report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["text"], "2 kilobytes");
    assert_eq!(value["bytes"], 2000);
    assert_eq!(report.format_pretty(), "2 kilobytes");
}
