//! Unit name tables.
//!
//! Built-in names are immutable: duration names are a closed switch over
//! unit and representation, and byte names are per-culture constant tables.
//! Callers who need other languages implement [`UnitNames`] or
//! fill a [`CustomUnitNames`] with their own pluralization callbacks.

use crate::error::{PrettyError, Result};
use crate::locale::DEFAULT_LOCALE;
use crate::units::{ByteUnit, DurationUnit, Representation};
use std::collections::HashMap;
use std::fmt;


/// Singular and plural spelling of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitName {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl UnitName {
    pub const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }

    /// A name that does not change with plurality.
    pub const fn invariant(name: &'static str) -> Self {
        Self {
            singular: name,
            plural: name,
        }
    }

    /// Singular for exactly one, plural for anything else.
    pub fn for_count(&self, value: u128) -> &'static str {
        if value == 1 { self.singular } else { self.plural }
    }

    /// Singular for exactly `1.0`, plural for anything else, fractions included.
    #[allow(clippy::float_cmp)]
    pub fn for_value(&self, value: f64) -> &'static str {
        if value == 1.0 { self.singular } else { self.plural }
    }
}

/// Built-in English name of a duration unit in the given representation.
///
/// ```
/// use libpretty::names::duration_name;
/// use libpretty::{DurationUnit, Representation};
///
/// assert_eq!(duration_name(DurationUnit::Hours, Representation::Short).for_count(2), "hrs");
/// assert_eq!(duration_name(DurationUnit::Hours, Representation::Compact).for_count(2), "h");
/// ```
pub fn duration_name(unit: DurationUnit, rep: Representation) -> UnitName {
    use DurationUnit::*;
    match rep {
        Representation::Long => match unit {
            Days => UnitName::new("day", "days"),
            Hours => UnitName::new("hour", "hours"),
            Minutes => UnitName::new("minute", "minutes"),
            Seconds => UnitName::new("second", "seconds"),
            Milliseconds => UnitName::new("millisecond", "milliseconds"),
            Microseconds => UnitName::new("microsecond", "microseconds"),
            Nanoseconds => UnitName::new("nanosecond", "nanoseconds"),
        },
        Representation::Short => match unit {
            Days => UnitName::new("day", "days"),
            Hours => UnitName::new("hr", "hrs"),
            Minutes => UnitName::new("min", "mins"),
            Seconds => UnitName::new("sec", "secs"),
            Milliseconds => UnitName::new("msec", "msecs"),
            Microseconds => UnitName::new("µsec", "µsecs"),
            Nanoseconds => UnitName::new("nsec", "nsecs"),
        },
        Representation::Compact | Representation::CompactWithSpace => match unit {
            Days => UnitName::invariant("d"),
            Hours => UnitName::invariant("h"),
            Minutes => UnitName::invariant("m"),
            Seconds => UnitName::invariant("s"),
            Milliseconds => UnitName::invariant("ms"),
            Microseconds => UnitName::invariant("µs"),
            Nanoseconds => UnitName::invariant("ns"),
        },
    }
}

/// Source of duration unit names used when rendering a unit group.
pub trait UnitNames: Send + Sync {
    /// Returns the name written after `value` for `unit`.
    fn duration_unit(&self, unit: DurationUnit, rep: Representation, value: u128)
    -> Result<String>;
}

/// The built-in English duration names.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishUnitNames;

impl UnitNames for EnglishUnitNames {
    fn duration_unit(
        &self,
        unit: DurationUnit,
        rep: Representation,
        value: u128,
    ) -> Result<String> {
        Ok(duration_name(unit, rep).for_count(value).to_string())
    }
}

type NameFn = Box<dyn Fn(u128) -> String + Send + Sync>;

/// Duration names supplied by the caller, one callback per unit.
///
/// Callbacks receive the unit value so they can apply the plural rules of
/// their language. The representation is ignored; the callback decides the
/// full spelling.
///
/// ```
/// use libpretty::names::{CustomUnitNames, UnitNames};
/// use libpretty::{DurationUnit, Representation};
///
/// let names = CustomUnitNames::new()
///     .with(DurationUnit::Hours, |v| if v == 1 { "time".into() } else { "timer".into() });
/// let name = names.duration_unit(DurationUnit::Hours, Representation::Long, 3).unwrap();
/// assert_eq!(name, "timer");
/// assert!(names.duration_unit(DurationUnit::Days, Representation::Long, 1).is_err());
/// ```
#[derive(Default)]
pub struct CustomUnitNames {
    callbacks: HashMap<DurationUnit, NameFn>,
}

impl CustomUnitNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the callback for `unit`, replacing any previous one.
    pub fn with<F>(mut self, unit: DurationUnit, callback: F) -> Self
    where
        F: Fn(u128) -> String + Send + Sync + 'static,
    {
        self.callbacks.insert(unit, Box::new(callback));
        self
    }
}

impl fmt::Debug for CustomUnitNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut units: Vec<_> = self.callbacks.keys().collect();
        units.sort();
        f.debug_struct("CustomUnitNames")
            .field("units", &units)
            .finish()
    }
}

impl UnitNames for CustomUnitNames {
    fn duration_unit(
        &self,
        unit: DurationUnit,
        _rep: Representation,
        value: u128,
    ) -> Result<String> {
        self.callbacks
            .get(&unit)
            .map(|callback| callback(value))
            .ok_or_else(|| PrettyError::missing_callback(unit.as_str()))
    }
}

/// Long and short byte unit names for one culture, indexed by [`ByteUnit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteNameTable {
    pub long: [UnitName; 7],
    pub short: [UnitName; 7],
}

impl ByteNameTable {
    /// The name of `unit` in long or short form.
    pub fn name(&self, unit: ByteUnit, long_form: bool) -> UnitName {
        if long_form {
            self.long[unit.index()]
        } else {
            self.short[unit.index()]
        }
    }
}

const SHORT_BYTE_NAMES: [UnitName; 7] = [
    UnitName::invariant("B"),
    UnitName::invariant("KB"),
    UnitName::invariant("MB"),
    UnitName::invariant("GB"),
    UnitName::invariant("TB"),
    UnitName::invariant("PB"),
    UnitName::invariant("EB"),
];

/// English byte names.
pub const ENGLISH_BYTE_NAMES: ByteNameTable = ByteNameTable {
    long: [
        UnitName::new("byte", "bytes"),
        UnitName::new("kilobyte", "kilobytes"),
        UnitName::new("megabyte", "megabytes"),
        UnitName::new("gigabyte", "gigabytes"),
        UnitName::new("terabyte", "terabytes"),
        UnitName::new("petabyte", "petabytes"),
        UnitName::new("exabyte", "exabytes"),
    ],
    short: SHORT_BYTE_NAMES,
};

/// Korean byte names. Korean nouns do not inflect for number.
pub const KOREAN_BYTE_NAMES: ByteNameTable = ByteNameTable {
    long: [
        UnitName::invariant("바이트"),
        UnitName::invariant("킬로바이트"),
        UnitName::invariant("메가바이트"),
        UnitName::invariant("기가바이트"),
        UnitName::invariant("테라바이트"),
        UnitName::invariant("페타바이트"),
        UnitName::invariant("엑사바이트"),
    ],
    short: SHORT_BYTE_NAMES,
};

/// Byte name tables by culture name, sorted by name.
const BYTE_NAME_TABLES: &[(&str, ByteNameTable)] = &[
    (DEFAULT_LOCALE, ENGLISH_BYTE_NAMES),
    ("ko-KR", KOREAN_BYTE_NAMES),
    ("nb-NO", ENGLISH_BYTE_NAMES),
];

/// Returns the byte name table for a culture, falling back to en-US.
///
/// ```
/// use libpretty::names::byte_names_for;
/// use libpretty::units::ByteUnit;
///
/// assert_eq!(byte_names_for("ko-KR").name(ByteUnit::Byte, true).singular, "바이트");
/// assert_eq!(byte_names_for("xx-XX").name(ByteUnit::Byte, true).plural, "bytes");
/// ```
pub fn byte_names_for(locale: &str) -> &'static ByteNameTable {
    BYTE_NAME_TABLES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(locale))
        .map(|(_, table)| table)
        .unwrap_or(&ENGLISH_BYTE_NAMES)
}

/// Culture names that have a built-in byte name table.
pub fn known_locales() -> Vec<&'static str> {
    BYTE_NAME_TABLES.iter().map(|(name, _)| *name).collect()
}
