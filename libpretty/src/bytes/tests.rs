use super::*;
use crate::names::KOREAN_BYTE_NAMES;

const KB: u64 = 1000;
const MB: u64 = 1000 * KB;
const GB: u64 = 1000 * MB;
const TB: u64 = 1000 * GB;
const PB: u64 = 1000 * TB;
const EB: u64 = 1000 * PB;

fn long(bytes: u64) -> String {
    format_byte_size(bytes, &ByteSizeOptions::long())
}

fn short(bytes: u64) -> String {
    format_byte_size(bytes, &ByteSizeOptions::short())
}

#[test]
fn test_zero_bytes() {
    assert_eq!(long(0), "0 bytes");
    assert_eq!(short(0), "0 B");
}

#[test]
fn test_bytes_under_one_kilobyte() {
    assert_eq!(long(1), "1 byte");
    assert_eq!(short(1), "1 B");
    assert_eq!(long(500), "500 bytes");
    assert_eq!(short(500), "500 B");
}

#[test]
fn test_each_unit_singular_and_plural() {
    let cases = [
        (KB, "kilobyte", "KB"),
        (MB, "megabyte", "MB"),
        (GB, "gigabyte", "GB"),
        (TB, "terabyte", "TB"),
        (PB, "petabyte", "PB"),
    ];
    for (scale, long_name, short_name) in cases {
        assert_eq!(long(scale), format!("1 {}", long_name));
        assert_eq!(short(scale), format!("1 {}", short_name));
        assert_eq!(long(500 * scale), format!("500 {}s", long_name));
        assert_eq!(short(500 * scale), format!("500 {}", short_name));
    }
}

#[test]
fn test_exabytes_are_the_largest_unit() {
    assert_eq!(long(EB), "1 exabyte");
    assert_eq!(long(4 * EB), "4 exabytes");
    assert_eq!(short(u64::MAX), "18.4 EB");
}

#[test]
fn test_default_format_uses_fewer_decimals_for_larger_values() {
    assert_eq!(long(1_234_560), "1.23 megabytes");
    assert_eq!(long(10_234_560), "10.2 megabytes");
    assert_eq!(long(100_234_560), "100 megabytes");
}

#[test]
fn test_default_format_trims_trailing_zeros() {
    assert_eq!(short(1_500), "1.5 KB");
    assert_eq!(short(20_000), "20 KB");
    assert_eq!(short(99_960), "100 KB");
}

#[test]
fn test_plurality_follows_rounded_value() {
    assert_eq!(long(1_001), "1 kilobyte");
    assert_eq!(long(1_010), "1.01 kilobytes");
}

#[test]
fn test_custom_number_format() {
    let options = ByteSizeOptions::long().with_number_pattern("0.000").unwrap();
    assert_eq!(format_byte_size(0, &options), "0.000 bytes");
    assert_eq!(format_byte_size(1_234_560, &options), "1.235 megabytes");
    assert_eq!(format_byte_size(10_234_560, &options), "10.235 megabytes");
    assert_eq!(format_byte_size(100_234_560, &options), "100.235 megabytes");
}

#[test]
fn test_custom_number_pattern_rejected() {
    assert!(ByteSizeOptions::long().with_number_pattern("0.a").is_err());
}

#[test]
fn test_binary_base() {
    let options = ByteSizeOptions::long().with_base(ByteBase::Binary);
    assert_eq!(format_byte_size(1024, &options), "1 kilobyte");
    assert_eq!(format_byte_size(1000, &options), "1000 bytes");
    assert_eq!(format_byte_size(500 * 1024 * 1024, &options), "500 megabytes");
    assert_eq!(format_byte_size(1536, &options), "1.5 kilobytes");
}

#[test]
fn test_korean_names() {
    let options = ByteSizeOptions::long().with_locale(Locale::new("ko-KR"));
    assert_eq!(format_byte_size(0, &options), "0 바이트");
    assert_eq!(format_byte_size(1, &options), "1 바이트");
    assert_eq!(format_byte_size(500 * KB, &options), "500 킬로바이트");
    assert_eq!(format_byte_size(1_234_560, &options), "1.23 메가바이트");

    let short = ByteSizeOptions::short().with_locale(Locale::new("ko-KR"));
    assert_eq!(format_byte_size(4 * EB, &short), "4 EB");
}

#[test]
fn test_norwegian_decimal_comma() {
    let options = ByteSizeOptions::short().with_locale(Locale::new("nb-NO"));
    assert_eq!(format_byte_size(1_234_560, &options), "1,23 MB");
    assert_eq!(format_byte_size(500, &options), "500 B");
}

#[test]
fn test_unknown_locale_falls_back_to_english() {
    let options = ByteSizeOptions::long().with_locale(Locale::new("zh-CN"));
    assert_eq!(format_byte_size(2 * GB, &options), "2 gigabytes");
}

#[test]
fn test_custom_name_table() {
    let options = ByteSizeOptions::long()
        .with_locale(Locale::new("en-US"))
        .with_names(KOREAN_BYTE_NAMES);
    assert_eq!(format_byte_size(3 * TB, &options), "3 테라바이트");
}

#[test]
fn test_default_number_format_thresholds() {
    assert_eq!(default_number_format(0.0), NumberFormat::INTEGER);
    assert_eq!(default_number_format(9.99), NumberFormat::optional_decimals(2));
    assert_eq!(default_number_format(10.0), NumberFormat::optional_decimals(1));
    assert_eq!(default_number_format(100.0), NumberFormat::INTEGER);
}

#[test]
fn test_scale_bytes_picks_unit_in_range() {
    let (value, unit) = scale_bytes(5_350_000, ByteBase::Decimal);
    assert_eq!(unit, ByteUnit::Mega);
    assert!((value - 5.35).abs() < 1e-9);
}
