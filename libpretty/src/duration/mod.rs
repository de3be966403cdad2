//! Duration formatting.
//!
//! A duration is rendered as up to `max_unit_groups` groups such as
//! "2 days, 3 hours and 5 seconds". Formatting runs as a pipeline:
//!
//! 1. normalize: round the whole duration to a multiple of the lowest unit,
//!    so a rounded-up low unit carries into the next one (59.9 s up is 1 min)
//! 2. decompose: split into the local value of every unit in range
//! 3. select: keep non-zero groups, largest first, up to the maximum
//! 4. if the selection cut off a remainder, normalize again at the last kept
//!    unit and decompose once more
//! 5. render each group and join them with the representation's separators

mod span;

pub use span::TimeSpan;

use crate::error::{PrettyError, Result};
use crate::locale::{Locale, NumberFormat};
use crate::names::{EnglishUnitNames, UnitNames};
use crate::units::{DurationUnit, Representation, Rounding};
use tracing::{debug, trace};


/// Display options for [`format_duration`].
#[derive(Debug, Clone, PartialEq)]
pub struct DurationOptions {
    /// Most groups to show; must be at least 1
    pub max_unit_groups: usize,
    pub representation: Representation,
    pub highest_unit: DurationUnit,
    pub lowest_unit: DurationUnit,
    /// Rounding applied to the last shown unit
    pub rounding: Rounding,
    pub locale: Locale,
}

impl DurationOptions {
    pub fn new(max_unit_groups: usize) -> Self {
        Self {
            max_unit_groups,
            ..Self::default()
        }
    }

    pub fn with_max_unit_groups(mut self, max_unit_groups: usize) -> Self {
        self.max_unit_groups = max_unit_groups;
        self
    }

    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    pub fn with_highest_unit(mut self, unit: DurationUnit) -> Self {
        self.highest_unit = unit;
        self
    }

    pub fn with_lowest_unit(mut self, unit: DurationUnit) -> Self {
        self.lowest_unit = unit;
        self
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Checks the option invariants.
    pub fn validate(&self) -> Result<()> {
        if self.max_unit_groups == 0 {
            return Err(PrettyError::invalid_argument(
                "max_unit_groups",
                "must be greater than zero",
            ));
        }
        if self.highest_unit < self.lowest_unit {
            return Err(PrettyError::invalid_argument(
                "highest_unit",
                format!(
                    "{} is smaller than lowest unit {}",
                    self.highest_unit, self.lowest_unit
                ),
            ));
        }
        Ok(())
    }

    fn units_in_range(&self) -> impl Iterator<Item = DurationUnit> + '_ {
        DurationUnit::LARGEST_FIRST
            .into_iter()
            .filter(move |u| *u <= self.highest_unit && *u >= self.lowest_unit)
    }
}

impl Default for DurationOptions {
    fn default() -> Self {
        Self {
            max_unit_groups: 1,
            representation: Representation::default(),
            highest_unit: DurationUnit::Days,
            lowest_unit: DurationUnit::Seconds,
            rounding: Rounding::default(),
            locale: Locale::default(),
        }
    }
}

/// One rendered group: a unit and its local value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitValue {
    pub unit: DurationUnit,
    pub value: u128,
}

/// Splits `total_nanos` into the local value of each unit in range.
///
/// `highest` keeps its full count instead of wrapping at its modulus, so a
/// carry produced by rounding stays visible ("24 hours", not "0 seconds").
fn decompose(
    total_nanos: u128,
    highest: DurationUnit,
    units: impl Iterator<Item = DurationUnit>,
) -> impl Iterator<Item = UnitValue> {
    units.map(move |unit| UnitValue {
        unit,
        value: if unit == highest {
            total_nanos / unit.nanos()
        } else {
            unit.local_value(total_nanos)
        },
    })
}

/// The part of `total_nanos` that lies above `highest` and is never shown.
fn above_range(total_nanos: u128, highest: DurationUnit) -> u128 {
    match highest.modulus() {
        Some(m) => {
            let span = highest.nanos() * m;
            total_nanos - total_nanos % span
        }
        None => 0,
    }
}

fn select_groups(values: impl Iterator<Item = UnitValue>, max: usize) -> Vec<UnitValue> {
    values.filter(|uv| uv.value > 0).take(max).collect()
}

/// Runs the normalize/decompose/select pipeline. Never returns an empty list.
fn unit_groups(total_nanos: u128, options: &DurationOptions) -> Vec<UnitValue> {
    let lowest = options.lowest_unit;
    let highest = options.highest_unit;
    // Units above the highest are dropped before rounding, so any carry
    // lands in the highest unit.
    let total_nanos = total_nanos - above_range(total_nanos, highest);
    if total_nanos == 0 {
        return vec![UnitValue {
            unit: lowest,
            value: 0,
        }];
    }

    let mut normalized = options
        .rounding
        .round_to_multiple(total_nanos, lowest.nanos());
    let mut groups = select_groups(
        decompose(normalized, highest, options.units_in_range()),
        options.max_unit_groups,
    );

    // The groups stop above a non-zero remainder, so the last one shown was
    // truncated rather than rounded.
    let cut_unit = groups
        .last()
        .map(|uv| uv.unit)
        .filter(|unit| normalized % unit.nanos() != 0);
    if let Some(unit) = cut_unit {
        let carried = options.rounding.round_to_multiple(normalized, unit.nanos());
        debug!(
            %unit,
            rounding = %options.rounding,
            before = %normalized,
            after = %carried,
            "rounded last shown unit"
        );
        normalized = carried;
        groups = select_groups(
            decompose(
                normalized,
                highest,
                options.units_in_range().filter(|u| *u >= unit),
            ),
            options.max_unit_groups,
        );
    }

    // Everything in range rounded away.
    if groups.is_empty() {
        groups.push(UnitValue {
            unit: lowest,
            value: 0,
        });
    }
    groups
}

fn join_groups(parts: &[String], rep: Representation) -> String {
    match parts.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!(
            "{}{}{}",
            rest.join(rep.group_separator()),
            rep.last_group_separator(),
            last
        ),
    }
}

fn render_group(uv: &UnitValue, options: &DurationOptions, names: &dyn UnitNames) -> Result<String> {
    let rep = options.representation;
    let number = options
        .locale
        .format_number(uv.value as f64, &NumberFormat::INTEGER);
    let name = names.duration_unit(uv.unit, rep, uv.value)?;
    Ok(format!("{}{}{}", number, rep.unit_value_separator(), name))
}

/// Returns the unit groups [`format_duration`] would render, without names.
///
/// ```
/// use libpretty::{DurationOptions, DurationUnit, TimeSpan, decompose_duration};
///
/// let groups = decompose_duration(TimeSpan::from_seconds(3661.0), &DurationOptions::new(3)).unwrap();
/// let values: Vec<_> = groups.iter().map(|g| (g.unit, g.value)).collect();
/// assert_eq!(
///     values,
///     vec![(DurationUnit::Hours, 1), (DurationUnit::Minutes, 1), (DurationUnit::Seconds, 1)]
/// );
/// ```
pub fn decompose_duration(span: TimeSpan, options: &DurationOptions) -> Result<Vec<UnitValue>> {
    options.validate()?;
    Ok(unit_groups(span.abs_nanos(), options))
}

/// Formats a duration with the built-in English unit names.
///
/// # Examples
///
/// ```
/// use libpretty::{DurationOptions, Rounding, TimeSpan, format_duration};
///
/// let span = TimeSpan::from_parts(2, 3, 0, 5, 6);
/// assert_eq!(format_duration(span, &DurationOptions::new(2)).unwrap(), "2 days and 3 hours");
///
/// let up = DurationOptions::default().with_rounding(Rounding::Up);
/// assert_eq!(format_duration(TimeSpan::from_seconds(59.9), &up).unwrap(), "1 minute");
///
/// assert!(format_duration(span, &DurationOptions::new(0)).is_err());
/// ```
pub fn format_duration(span: TimeSpan, options: &DurationOptions) -> Result<String> {
    format_duration_with_names(span, options, &EnglishUnitNames)
}

/// Formats a duration with caller-supplied unit names.
///
/// Negative spans are formatted as their magnitude with a leading `-`.
pub fn format_duration_with_names(
    span: TimeSpan,
    options: &DurationOptions,
    names: &dyn UnitNames,
) -> Result<String> {
    options.validate()?;

    let groups = unit_groups(span.abs_nanos(), options);
    let parts = groups
        .iter()
        .map(|uv| render_group(uv, options, names))
        .collect::<Result<Vec<_>>>()?;

    let mut text = join_groups(&parts, options.representation);
    if span.is_negative() && groups.iter().any(|uv| uv.value > 0) {
        text.insert(0, '-');
    }

    trace!(ticks = span.ticks(), groups = groups.len(), "formatted duration");
    Ok(text)
}

/// Formats the time left on a countdown.
///
/// Same as [`format_duration`] with the rounding fixed to [`Rounding::Up`],
/// so the shown time never undershoots the actual remaining time.
///
/// ```
/// use libpretty::{DurationOptions, TimeSpan, format_time_remaining};
///
/// let options = DurationOptions::new(2);
/// assert_eq!(format_time_remaining(TimeSpan::from_seconds(3661.0), &options).unwrap(), "1 hour and 2 minutes");
/// assert_eq!(format_time_remaining(TimeSpan::from_seconds(0.1), &options).unwrap(), "1 second");
/// ```
pub fn format_time_remaining(span: TimeSpan, options: &DurationOptions) -> Result<String> {
    let options = options.clone().with_rounding(Rounding::Up);
    format_duration(span, &options)
}
