//! Pretty - Human-Readable Sizes and Durations
//!
//! Pretty turns byte counts and time spans into short English (or
//! localized) text such as "1.23 megabytes" or "2 days and 3 hours".
//!
//! # Quick Start
//!
//! ```
//! use libpretty::{ByteSizeOptions, DurationOptions, TimeSpan};
//! use libpretty::{format_byte_size, format_duration, format_time_remaining};
//!
//! fn main() -> libpretty::Result<()> {
//!     // Byte sizes
//!     assert_eq!(format_byte_size(1_234_560, &ByteSizeOptions::long()), "1.23 megabytes");
//!
//!     // Durations, showing at most two unit groups
//!     let options = DurationOptions::new(2);
//!     let span = TimeSpan::from_parts(2, 3, 0, 5, 0);
//!     assert_eq!(format_duration(span, &options)?, "2 days and 3 hours");
//!
//!     // Countdowns never undershoot
//!     let left = TimeSpan::from_seconds(3661.0);
//!     assert_eq!(format_time_remaining(left, &options)?, "1 hour and 2 minutes");
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - **Carry-up rounding**: 59.9 seconds rounded up reads "1 minute", not "60 seconds"
//! - **Representations**: long, short ("3 hrs 4 mins") and compact ("3h4m")
//! - **Locales**: decimal separator and byte unit names per culture
//! - **Custom names**: plug in per-unit callbacks for other languages
//! - **Configuration**: YAML defaults via [`Config`]
//!
//! # Main Types
//!
//! - [`TimeSpan`] - Signed duration in 100 ns ticks
//! - [`DurationOptions`] - Unit range, group count, representation and rounding
//! - [`ByteSizeOptions`] - Long or short names, base, locale and number format
//! - [`Locale`] / [`NumberFormat`] - Numeric rendering
//! - [`PrettyError`] - Everything that can go wrong

#![warn(clippy::all)]

/// Returns the libpretty crate version.
///
/// # Examples
///
/// ```
/// let version = libpretty::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// Re-export commonly used types for convenience
pub use bytes::{ByteSizeOptions, format_byte_size};
pub use config::Config;
pub use duration::{
    DurationOptions, TimeSpan, UnitValue, decompose_duration, format_duration,
    format_duration_with_names, format_time_remaining,
};
pub use error::{PrettyError, Result};
pub use locale::{Locale, NumberFormat};
pub use names::{CustomUnitNames, UnitNames};
pub use units::{ByteBase, ByteUnit, DurationUnit, Representation, Rounding};

pub mod bytes;
pub mod config;
pub mod duration;
pub mod error;
pub mod locale;
pub mod names;
pub mod units;
