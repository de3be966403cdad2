//! Locale and numeric rendering.
//!
//! A [`Locale`] selects the unit name tables and the decimal separator used
//! when numbers are rendered. Digit grouping and other culture rules are out
//! of scope; callers that need them can format the numbers themselves and use
//! the unit name tables directly.
//!
//! A [`NumberFormat`] is a small picture pattern such as `0`, `0.#` or
//! `0.00#`: `0` after the point is a digit that is always written, `#` a
//! digit that is written only when it is not a trailing zero.

use crate::error::{PrettyError, Result};
use std::fmt;
use std::str::FromStr;


/// Culture name used when none is given, and the fallback for unknown names.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Cultures that write a comma between the integer and fractional digits.
const COMMA_DECIMAL_LOCALES: &[&str] = &[
    "nb-NO", "nn-NO", "da-DK", "de-DE", "fr-FR", "es-ES", "it-IT", "sv-SE", "fi-FI", "nl-NL",
    "pl-PL", "ru-RU",
];

/// A culture name plus the numeric conventions this crate applies for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    name: String,
    decimal_separator: char,
}

impl Locale {
    /// Creates a locale from a culture name such as `en-US` or `nb-NO`.
    ///
    /// ```
    /// use libpretty::Locale;
    ///
    /// assert_eq!(Locale::new("nb-NO").decimal_separator(), ',');
    /// assert_eq!(Locale::new("ko-KR").decimal_separator(), '.');
    /// ```
    pub fn new<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        let decimal_separator = if COMMA_DECIMAL_LOCALES
            .iter()
            .any(|l| l.eq_ignore_ascii_case(&name))
        {
            ','
        } else {
            '.'
        };
        Self {
            name,
            decimal_separator,
        }
    }

    /// Overrides the decimal separator.
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Renders `value` with `format` and this locale's decimal separator.
    pub fn format_number(&self, value: f64, format: &NumberFormat) -> String {
        format.render(value, self.decimal_separator)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A parsed numeric picture pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    min_decimals: u8,
    max_decimals: u8,
}

impl NumberFormat {
    /// Largest number of fractional digits a pattern may ask for.
    pub const MAX_DECIMALS: u8 = 15;

    /// Integer rendering, `0`.
    pub const INTEGER: NumberFormat = NumberFormat {
        min_decimals: 0,
        max_decimals: 0,
    };

    /// Creates a format with `min_decimals` mandatory and up to
    /// `max_decimals` total fractional digits.
    pub fn new(min_decimals: u8, max_decimals: u8) -> Result<Self> {
        if min_decimals > max_decimals {
            return Err(PrettyError::invalid_argument(
                "min_decimals",
                format!("{} is greater than max_decimals {}", min_decimals, max_decimals),
            ));
        }
        if max_decimals > Self::MAX_DECIMALS {
            return Err(PrettyError::invalid_argument(
                "max_decimals",
                format!("must not exceed {}", Self::MAX_DECIMALS),
            ));
        }
        Ok(Self {
            min_decimals,
            max_decimals,
        })
    }

    /// Up to `max_decimals` fractional digits, trailing zeros trimmed.
    pub const fn optional_decimals(max_decimals: u8) -> Self {
        Self {
            min_decimals: 0,
            max_decimals,
        }
    }

    pub fn min_decimals(&self) -> u8 {
        self.min_decimals
    }

    pub fn max_decimals(&self) -> u8 {
        self.max_decimals
    }

    /// Rounds `value` half away from zero to `max_decimals` digits, which is
    /// the number [`render`](Self::render) writes.
    pub fn round(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.max_decimals as i32);
        (value.abs() * factor).round() / factor * value.signum()
    }

    /// Renders `value`, rounding half away from zero at the last digit.
    ///
    /// ```
    /// use libpretty::NumberFormat;
    ///
    /// let fmt: NumberFormat = "0.##".parse().unwrap();
    /// assert_eq!(fmt.render(1.23456, '.'), "1.23");
    /// assert_eq!(fmt.render(2.0, '.'), "2");
    /// assert_eq!(fmt.render(0.125, ','), "0,13");
    /// ```
    pub fn render(&self, value: f64, decimal_separator: char) -> String {
        let rounded = self.round(value).abs();

        let mut text = format!("{:.*}", self.max_decimals as usize, rounded);
        if self.max_decimals > self.min_decimals {
            let keep_at_least = self.min_decimals as usize;
            if let Some(point) = text.find('.') {
                let mut end = text.len();
                while end > point + 1 + keep_at_least && text.as_bytes()[end - 1] == b'0' {
                    end -= 1;
                }
                if end == point + 1 {
                    end = point;
                }
                text.truncate(end);
            }
        }

        if decimal_separator != '.' {
            text = text.replace('.', &decimal_separator.to_string());
        }
        if value.is_sign_negative() && rounded != 0.0 {
            text.insert(0, '-');
        }
        text
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::INTEGER
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0")?;
        if self.max_decimals > 0 {
            f.write_str(".")?;
            for _ in 0..self.min_decimals {
                f.write_str("0")?;
            }
            for _ in self.min_decimals..self.max_decimals {
                f.write_str("#")?;
            }
        }
        Ok(())
    }
}

impl FromStr for NumberFormat {
    type Err = PrettyError;

    fn from_str(pattern: &str) -> Result<Self> {
        let (integer, fraction) = match pattern.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (pattern, None),
        };

        if integer.is_empty() || !integer.chars().all(|c| c == '0' || c == '#') {
            return Err(PrettyError::invalid_format(
                pattern,
                "integer part must be one or more '0' or '#'",
            ));
        }

        let mut min_decimals: u8 = 0;
        let mut max_decimals: u8 = 0;
        if let Some(fraction) = fraction {
            let mut seen_optional = false;
            for c in fraction.chars() {
                match c {
                    '0' if seen_optional => {
                        return Err(PrettyError::invalid_format(
                            pattern,
                            "'0' may not follow '#' in the fractional part",
                        ));
                    }
                    '0' => min_decimals = min_decimals.saturating_add(1),
                    '#' => seen_optional = true,
                    other => {
                        return Err(PrettyError::invalid_format(
                            pattern,
                            format!("unexpected character '{}'", other),
                        ));
                    }
                }
                max_decimals = max_decimals.saturating_add(1);
            }
        }

        Self::new(min_decimals, max_decimals)
            .map_err(|e| PrettyError::invalid_format(pattern, e.to_string()))
    }
}
