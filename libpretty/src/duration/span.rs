use crate::units::{NANOS_PER_TICK, TICKS_PER_SECOND};
use std::ops::{Add, Neg, Sub};

const TICKS_PER_MILLISECOND: f64 = 10_000.0;

/// A signed span of time counted in 100-nanosecond ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeSpan {
    ticks: i64,
}

impl TimeSpan {
    pub const ZERO: TimeSpan = TimeSpan { ticks: 0 };

    pub const fn from_ticks(ticks: i64) -> Self {
        Self { ticks }
    }

    pub const fn ticks(&self) -> i64 {
        self.ticks
    }

    /// Builds a span from whole components, e.g. 2 days, 3 hours, 0 minutes,
    /// 5 seconds and 6 milliseconds. Saturates at the `i64` tick range.
    pub fn from_parts(days: i64, hours: i64, minutes: i64, seconds: i64, millis: i64) -> Self {
        let total_millis = days
            .saturating_mul(86_400_000)
            .saturating_add(hours.saturating_mul(3_600_000))
            .saturating_add(minutes.saturating_mul(60_000))
            .saturating_add(seconds.saturating_mul(1_000))
            .saturating_add(millis);
        Self::from_ticks(total_millis.saturating_mul(10_000))
    }

    /// Fractional values round to the nearest tick.
    pub fn from_days(days: f64) -> Self {
        Self::from_ticks_f64(days * 86_400.0 * TICKS_PER_SECOND as f64)
    }

    pub fn from_hours(hours: f64) -> Self {
        Self::from_ticks_f64(hours * 3_600.0 * TICKS_PER_SECOND as f64)
    }

    pub fn from_minutes(minutes: f64) -> Self {
        Self::from_ticks_f64(minutes * 60.0 * TICKS_PER_SECOND as f64)
    }

    pub fn from_seconds(seconds: f64) -> Self {
        Self::from_ticks_f64(seconds * TICKS_PER_SECOND as f64)
    }

    pub fn from_milliseconds(millis: f64) -> Self {
        Self::from_ticks_f64(millis * TICKS_PER_MILLISECOND)
    }

    // `as` saturates and maps NaN to zero.
    fn from_ticks_f64(ticks: f64) -> Self {
        Self::from_ticks(ticks.round() as i64)
    }

    pub fn is_negative(&self) -> bool {
        self.ticks < 0
    }

    pub fn is_zero(&self) -> bool {
        self.ticks == 0
    }

    /// Magnitude in nanoseconds.
    pub fn abs_nanos(&self) -> u128 {
        self.ticks.unsigned_abs() as u128 * NANOS_PER_TICK
    }

    pub fn total_seconds(&self) -> f64 {
        self.ticks as f64 / TICKS_PER_SECOND as f64
    }
}

impl From<std::time::Duration> for TimeSpan {
    fn from(duration: std::time::Duration) -> Self {
        let ticks = duration.as_nanos() / NANOS_PER_TICK;
        Self::from_ticks(i64::try_from(ticks).unwrap_or(i64::MAX))
    }
}

impl From<chrono::Duration> for TimeSpan {
    fn from(delta: chrono::Duration) -> Self {
        match delta.num_nanoseconds() {
            Some(nanos) => Self::from_ticks(nanos / NANOS_PER_TICK as i64),
            None => Self::from_ticks(delta.num_milliseconds().saturating_mul(10_000)),
        }
    }
}

impl Add for TimeSpan {
    type Output = TimeSpan;

    fn add(self, rhs: TimeSpan) -> TimeSpan {
        TimeSpan::from_ticks(self.ticks.saturating_add(rhs.ticks))
    }
}

impl Sub for TimeSpan {
    type Output = TimeSpan;

    fn sub(self, rhs: TimeSpan) -> TimeSpan {
        TimeSpan::from_ticks(self.ticks.saturating_sub(rhs.ticks))
    }
}

impl Neg for TimeSpan {
    type Output = TimeSpan;

    fn neg(self) -> TimeSpan {
        TimeSpan::from_ticks(self.ticks.saturating_neg())
    }
}
