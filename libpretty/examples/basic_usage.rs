//! Basic usage example for the pretty library.
//!
//! This example prints a handful of byte sizes and durations in each
//! representation.
//!
//! Run with: cargo run --example basic_usage

use libpretty::{
    ByteBase, ByteSizeOptions, DurationOptions, DurationUnit, Locale, Representation, Rounding,
    TimeSpan, format_byte_size, format_duration, format_time_remaining,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Pretty Library - Basic Usage Example\n");

    println!("Byte sizes:");
    for bytes in [0, 1, 1_500, 1_234_560, 10_234_560, 5_000_000_000_000] {
        println!(
            "  {:>16}  {:<20} {}",
            bytes,
            format_byte_size(bytes, &ByteSizeOptions::long()),
            format_byte_size(bytes, &ByteSizeOptions::short().with_base(ByteBase::Binary)),
        );
    }

    let korean = ByteSizeOptions::long().with_locale(Locale::new("ko-KR"));
    println!("  ko-KR: {}\n", format_byte_size(1_234_560, &korean));

    println!("Durations:");
    let span = TimeSpan::from_parts(2, 3, 4, 5, 6);
    for rep in [
        Representation::Long,
        Representation::Short,
        Representation::Compact,
        Representation::CompactWithSpace,
    ] {
        let options = DurationOptions::new(3)
            .with_representation(rep)
            .with_lowest_unit(DurationUnit::Milliseconds);
        println!("  {:<20} {}", rep, format_duration(span, &options)?);
    }

    let up = DurationOptions::default().with_rounding(Rounding::Up);
    println!("\n  59.9 s rounded up: {}", format_duration(TimeSpan::from_seconds(59.9), &up)?);

    println!("\nTime remaining:");
    for seconds in [3661.0, 60.1, 0.1] {
        let text = format_time_remaining(TimeSpan::from_seconds(seconds), &DurationOptions::new(2))?;
        println!("  {:>8} s  {}", seconds, text);
    }

    Ok(())
}
