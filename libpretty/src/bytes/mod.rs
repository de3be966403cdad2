//! Byte-size formatting.
//!
//! A byte count is shown in the largest unit whose scaled value is at least
//! one, e.g. `1_234_560` bytes is "1.23 megabytes" or "1.23 MB".

use crate::error::Result;
use crate::locale::{Locale, NumberFormat};
use crate::names::{ByteNameTable, byte_names_for};
use crate::units::{ByteBase, ByteUnit};
use tracing::trace;

#[cfg(test)]
mod tests;

/// Options for [`format_byte_size`].
#[derive(Debug, Clone, PartialEq)]
pub struct ByteSizeOptions {
    /// "megabytes" instead of "MB"
    pub long_form: bool,
    pub base: ByteBase,
    pub locale: Locale,
    /// Fixed numeric format; when `None` the precision follows the magnitude
    pub number_format: Option<NumberFormat>,
    /// Replaces the locale's built-in name table
    pub names: Option<ByteNameTable>,
}

impl ByteSizeOptions {
    /// Long unit names ("kilobytes").
    pub fn long() -> Self {
        Self {
            long_form: true,
            ..Self::default()
        }
    }

    /// Abbreviated unit names ("KB").
    pub fn short() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: ByteBase) -> Self {
        self.base = base;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = Some(format);
        self
    }

    /// Parses `pattern` (e.g. `0.000`) and uses it for every value.
    pub fn with_number_pattern(self, pattern: &str) -> Result<Self> {
        Ok(self.with_number_format(pattern.parse()?))
    }

    pub fn with_names(mut self, names: ByteNameTable) -> Self {
        self.names = Some(names);
        self
    }

    fn name_table(&self) -> &ByteNameTable {
        match &self.names {
            Some(table) => table,
            None => byte_names_for(self.locale.name()),
        }
    }
}

impl Default for ByteSizeOptions {
    fn default() -> Self {
        Self {
            long_form: false,
            base: ByteBase::default(),
            locale: Locale::default(),
            number_format: None,
            names: None,
        }
    }
}

/// Scales `bytes` to the largest unit with a value of at least one.
///
/// ```
/// use libpretty::bytes::scale_bytes;
/// use libpretty::units::{ByteBase, ByteUnit};
///
/// assert_eq!(scale_bytes(1_500, ByteBase::Decimal), (1.5, ByteUnit::Kilo));
/// assert_eq!(scale_bytes(512, ByteBase::Binary), (512.0, ByteUnit::Byte));
/// ```
pub fn scale_bytes(bytes: u64, base: ByteBase) -> (f64, ByteUnit) {
    let unit = ByteUnit::for_bytes(bytes, base);
    let value = bytes as f64 / unit.scale(base) as f64;
    (value, unit)
}

/// Precision used when no number format is given: none for zero and values
/// of 100 or more, one optional decimal from 10, two below 10.
pub fn default_number_format(value: f64) -> NumberFormat {
    let abs = value.abs();
    if abs == 0.0 || abs >= 100.0 {
        NumberFormat::INTEGER
    } else if abs >= 10.0 {
        NumberFormat::optional_decimals(1)
    } else {
        NumberFormat::optional_decimals(2)
    }
}

/// Formats a byte count.
///
/// # Examples
///
/// ```
/// use libpretty::{ByteSizeOptions, format_byte_size};
///
/// assert_eq!(format_byte_size(1_234_560, &ByteSizeOptions::long()), "1.23 megabytes");
/// assert_eq!(format_byte_size(0, &ByteSizeOptions::short()), "0 B");
/// assert_eq!(format_byte_size(1, &ByteSizeOptions::long()), "1 byte");
/// ```
pub fn format_byte_size(bytes: u64, options: &ByteSizeOptions) -> String {
    let (value, unit) = scale_bytes(bytes, options.base);
    let number_format = options
        .number_format
        .unwrap_or_else(|| default_number_format(value));

    let text = options.locale.format_number(value, &number_format);
    // Plurality follows the number as shown, so 1.001 KB reads "1 kilobyte".
    let shown = number_format.round(value);
    let suffix = options
        .name_table()
        .name(unit, options.long_form)
        .for_value(shown);

    trace!(
        bytes,
        ?unit,
        base = %options.base,
        format = %number_format,
        "formatted byte size"
    );
    format!("{} {}", text, suffix)
}
