//! Units and display options shared by the byte-size and duration formatters.
//!
//! Every enum here parses from its lowercase name so the same values can come
//! from code, a YAML config file or the command line.

use crate::error::{PrettyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// Number of ticks in one second. A tick is 100 nanoseconds.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Number of nanoseconds in one tick.
pub const NANOS_PER_TICK: u128 = 100;

/// A unit of elapsed time, ordered so that `Days > Hours > ... > Nanoseconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl DurationUnit {
    /// All units, largest first.
    pub const LARGEST_FIRST: [DurationUnit; 7] = [
        DurationUnit::Days,
        DurationUnit::Hours,
        DurationUnit::Minutes,
        DurationUnit::Seconds,
        DurationUnit::Milliseconds,
        DurationUnit::Microseconds,
        DurationUnit::Nanoseconds,
    ];

    /// Length of one unit in nanoseconds.
    pub fn nanos(self) -> u128 {
        match self {
            DurationUnit::Days => 86_400_000_000_000,
            DurationUnit::Hours => 3_600_000_000_000,
            DurationUnit::Minutes => 60_000_000_000,
            DurationUnit::Seconds => 1_000_000_000,
            DurationUnit::Milliseconds => 1_000_000,
            DurationUnit::Microseconds => 1_000,
            DurationUnit::Nanoseconds => 1,
        }
    }

    /// How many of this unit fit in the next larger one. `None` for days,
    /// which carry the full magnitude.
    pub fn modulus(self) -> Option<u128> {
        match self {
            DurationUnit::Days => None,
            DurationUnit::Hours => Some(24),
            DurationUnit::Minutes | DurationUnit::Seconds => Some(60),
            DurationUnit::Milliseconds | DurationUnit::Microseconds | DurationUnit::Nanoseconds => {
                Some(1000)
            }
        }
    }

    /// The local value of this unit within a duration of `total_nanos`,
    /// e.g. hours is `(total / 1h) mod 24`.
    pub fn local_value(self, total_nanos: u128) -> u128 {
        let whole = total_nanos / self.nanos();
        match self.modulus() {
            Some(m) => whole % m,
            None => whole,
        }
    }

    /// Lowercase plural name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            DurationUnit::Days => "days",
            DurationUnit::Hours => "hours",
            DurationUnit::Minutes => "minutes",
            DurationUnit::Seconds => "seconds",
            DurationUnit::Milliseconds => "milliseconds",
            DurationUnit::Microseconds => "microseconds",
            DurationUnit::Nanoseconds => "nanoseconds",
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationUnit {
    type Err = PrettyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "days" | "day" | "d" => Ok(DurationUnit::Days),
            "hours" | "hour" | "h" => Ok(DurationUnit::Hours),
            "minutes" | "minute" | "min" | "m" => Ok(DurationUnit::Minutes),
            "seconds" | "second" | "sec" | "s" => Ok(DurationUnit::Seconds),
            "milliseconds" | "millisecond" | "ms" => Ok(DurationUnit::Milliseconds),
            "microseconds" | "microsecond" | "us" | "µs" => Ok(DurationUnit::Microseconds),
            "nanoseconds" | "nanosecond" | "ns" => Ok(DurationUnit::Nanoseconds),
            _ => Err(PrettyError::unsupported("duration unit", s)),
        }
    }
}

/// How unit names and group separators are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Representation {
    /// 3 days, 4 hours and 2 minutes
    #[default]
    Long,
    /// 3 days 4 hrs 2 mins
    Short,
    /// 3d4h2m
    Compact,
    /// 3d 4h 2m
    CompactWithSpace,
}

impl Representation {
    /// Separator between all but the last two groups.
    pub fn group_separator(self) -> &'static str {
        match self {
            Representation::Long => ", ",
            Representation::Short | Representation::CompactWithSpace => " ",
            Representation::Compact => "",
        }
    }

    /// Separator placed before the last group.
    pub fn last_group_separator(self) -> &'static str {
        match self {
            Representation::Long => " and ",
            Representation::Short | Representation::CompactWithSpace => " ",
            Representation::Compact => "",
        }
    }

    /// Separator between a value and its unit name.
    pub fn unit_value_separator(self) -> &'static str {
        match self {
            Representation::Long | Representation::Short => " ",
            Representation::Compact | Representation::CompactWithSpace => "",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Representation::Long => "long",
            Representation::Short => "short",
            Representation::Compact => "compact",
            Representation::CompactWithSpace => "compact-with-space",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Representation {
    type Err = PrettyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "long" => Ok(Representation::Long),
            "short" => Ok(Representation::Short),
            "compact" => Ok(Representation::Compact),
            "compact-with-space" | "compactwithspace" => Ok(Representation::CompactWithSpace),
            _ => Err(PrettyError::unsupported("representation", s)),
        }
    }
}

/// Rounding applied to the lowest displayed duration unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    /// Truncate toward zero.
    #[default]
    Down,
    /// Ceiling: any remainder rounds up.
    Up,
    /// Round to nearest, ties go up.
    NearestOrUp,
}

impl Rounding {
    /// Rounds `value` to a multiple of `step` according to this policy.
    ///
    /// ```
    /// use libpretty::units::Rounding;
    ///
    /// assert_eq!(Rounding::Down.round_to_multiple(59, 10), 50);
    /// assert_eq!(Rounding::Up.round_to_multiple(51, 10), 60);
    /// assert_eq!(Rounding::NearestOrUp.round_to_multiple(55, 10), 60);
    /// assert_eq!(Rounding::NearestOrUp.round_to_multiple(54, 10), 50);
    /// ```
    pub fn round_to_multiple(self, value: u128, step: u128) -> u128 {
        let floor = value - value % step;
        let remainder = value - floor;
        let round_up = match self {
            Rounding::Down => false,
            Rounding::Up => remainder > 0,
            Rounding::NearestOrUp => remainder * 2 >= step,
        };
        if round_up { floor + step } else { floor }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rounding::Down => "down",
            Rounding::Up => "up",
            Rounding::NearestOrUp => "nearest-or-up",
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rounding {
    type Err = PrettyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "down" => Ok(Rounding::Down),
            "up" => Ok(Rounding::Up),
            "nearest-or-up" | "nearest" | "tonearestorup" | "to-nearest-or-up" => {
                Ok(Rounding::NearestOrUp)
            }
            _ => Err(PrettyError::unsupported("rounding", s)),
        }
    }
}

/// A byte-size unit. The scale of each unit is `base^index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ByteUnit {
    Byte,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
}

impl ByteUnit {
    /// All units, smallest first.
    pub const ALL: [ByteUnit; 7] = [
        ByteUnit::Byte,
        ByteUnit::Kilo,
        ByteUnit::Mega,
        ByteUnit::Giga,
        ByteUnit::Tera,
        ByteUnit::Peta,
        ByteUnit::Exa,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Picks the largest unit whose scale does not exceed `bytes`.
    ///
    /// ```
    /// use libpretty::units::{ByteBase, ByteUnit};
    ///
    /// assert_eq!(ByteUnit::for_bytes(0, ByteBase::Decimal), ByteUnit::Byte);
    /// assert_eq!(ByteUnit::for_bytes(999_999, ByteBase::Decimal), ByteUnit::Kilo);
    /// assert_eq!(ByteUnit::for_bytes(1_048_576, ByteBase::Binary), ByteUnit::Mega);
    /// ```
    pub fn for_bytes(bytes: u64, base: ByteBase) -> ByteUnit {
        let factor = base.factor() as u128;
        let bytes = bytes as u128;
        let mut index = 0;
        let mut next_scale = factor;
        while index < Self::ALL.len() - 1 && next_scale <= bytes {
            index += 1;
            next_scale *= factor;
        }
        Self::ALL[index]
    }

    /// The number of bytes in one of this unit.
    pub fn scale(self, base: ByteBase) -> u128 {
        (base.factor() as u128).pow(self.index() as u32)
    }
}

/// The scale base for byte units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteBase {
    /// 1 kilobyte = 1000 bytes
    #[default]
    Decimal,
    /// 1 kilobyte = 1024 bytes
    Binary,
}

impl ByteBase {
    pub fn factor(self) -> u64 {
        match self {
            ByteBase::Decimal => 1000,
            ByteBase::Binary => 1024,
        }
    }
}

impl fmt::Display for ByteBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteBase::Decimal => f.write_str("decimal"),
            ByteBase::Binary => f.write_str("binary"),
        }
    }
}

impl FromStr for ByteBase {
    type Err = PrettyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "1000" | "decimal" | "si" => Ok(ByteBase::Decimal),
            "1024" | "binary" | "iec" => Ok(ByteBase::Binary),
            _ => Err(PrettyError::unsupported("byte base", s)),
        }
    }
}
