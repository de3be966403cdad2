use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use libpretty::{
    DurationOptions, DurationUnit, Locale, PrettyError, TimeSpan, decompose_duration,
    format_duration, format_time_remaining,
};
use serde::Serialize;

/// Flags shared by the `duration` and `remaining` subcommands.
#[derive(Debug, Clone)]
pub struct DurationArgs {
    pub value: f64,
    pub unit: String,
    pub max_groups: Option<usize>,
    pub representation: Option<String>,
    pub highest: Option<String>,
    pub lowest: Option<String>,
    pub rounding: Option<String>,
    pub locale: Option<String>,
}

impl Default for DurationArgs {
    fn default() -> Self {
        Self {
            value: 0.0,
            unit: "seconds".to_string(),
            max_groups: None,
            representation: None,
            highest: None,
            lowest: None,
            rounding: None,
            locale: None,
        }
    }
}

/// Which formatter to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationMode {
    Duration,
    Remaining,
}

/// One shown unit group.
#[derive(Debug, Serialize, PartialEq)]
pub struct GroupReport {
    pub unit: String,
    pub value: u64,
}

/// A formatted duration.
#[derive(Debug, Serialize, PartialEq)]
pub struct DurationReport {
    pub seconds: f64,
    pub text: String,
    pub groups: Vec<GroupReport>,
}

impl Formattable for DurationReport {
    fn format_pretty(&self) -> String {
        self.text.clone()
    }
}

/// Converts `value` counted in `unit` to a span.
pub fn span_from_value(value: f64, unit: DurationUnit) -> libpretty::Result<TimeSpan> {
    if !value.is_finite() {
        return Err(PrettyError::invalid_argument(
            "value",
            format!("{} is not a finite number", value),
        ));
    }
    let span = match unit {
        DurationUnit::Days => TimeSpan::from_days(value),
        DurationUnit::Hours => TimeSpan::from_hours(value),
        DurationUnit::Minutes => TimeSpan::from_minutes(value),
        DurationUnit::Seconds => TimeSpan::from_seconds(value),
        DurationUnit::Milliseconds => TimeSpan::from_milliseconds(value),
        DurationUnit::Microseconds => TimeSpan::from_ticks((value * 10.0).round() as i64),
        DurationUnit::Nanoseconds => TimeSpan::from_ticks((value / 100.0).round() as i64),
    };
    Ok(span)
}

/// Resolve options from the config and flags.
pub fn build_options(ctx: &AppContext, args: &DurationArgs) -> libpretty::Result<DurationOptions> {
    let base = &ctx.config.duration;
    let mut options = DurationOptions::new(args.max_groups.unwrap_or(base.max_unit_groups))
        .with_representation(base.representation)
        .with_highest_unit(base.highest_unit)
        .with_lowest_unit(base.lowest_unit)
        .with_rounding(base.rounding)
        .with_locale(ctx.config.locale());

    if let Some(rep) = &args.representation {
        options = options.with_representation(rep.parse()?);
    }
    if let Some(unit) = &args.highest {
        options = options.with_highest_unit(unit.parse()?);
    }
    if let Some(unit) = &args.lowest {
        options = options.with_lowest_unit(unit.parse()?);
    }
    if let Some(rounding) = &args.rounding {
        options = options.with_rounding(rounding.parse()?);
    }
    if let Some(locale) = &args.locale {
        options = options.with_locale(Locale::new(locale.as_str()));
    }

    options.validate()?;
    Ok(options)
}

/// Format the duration described by `args`.
pub fn run_duration(
    ctx: &AppContext,
    args: &DurationArgs,
    mode: DurationMode,
) -> libpretty::Result<DurationReport> {
    let unit: DurationUnit = args.unit.parse()?;
    let span = span_from_value(args.value, unit)?;
    let mut options = build_options(ctx, args)?;

    let text = match mode {
        DurationMode::Duration => format_duration(span, &options)?,
        DurationMode::Remaining => {
            let text = format_time_remaining(span, &options)?;
            // Report the groups that were actually shown.
            options = options.with_rounding(libpretty::Rounding::Up);
            text
        }
    };

    let groups = decompose_duration(span, &options)?
        .into_iter()
        .map(|g| GroupReport {
            unit: g.unit.to_string(),
            value: u64::try_from(g.value).unwrap_or(u64::MAX),
        })
        .collect();

    tracing::debug!(ticks = span.ticks(), ?mode, "formatted {}", text);
    Ok(DurationReport {
        seconds: span.total_seconds(),
        text,
        groups,
    })
}

/// Handle the duration and remaining subcommands
pub fn handle_duration(ctx: &AppContext, args: &DurationArgs, mode: DurationMode, output: OutputFormat) {
    match run_duration(ctx, args, mode) {
        Ok(report) => format::print_or_exit(&report, output),
        Err(e) => format::fail_with(&e),
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
