use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use libpretty::bytes::scale_bytes;
use libpretty::{ByteBase, ByteSizeOptions, Locale, format_byte_size};
use serde::Serialize;

/// Flags of the `size` subcommand; unset flags fall back to the config.
#[derive(Debug, Default, Clone)]
pub struct SizeArgs {
    pub bytes: u64,
    pub short: bool,
    pub long: bool,
    pub base: Option<String>,
    pub locale: Option<String>,
    pub number_format: Option<String>,
}

/// A formatted byte size.
#[derive(Debug, Serialize, PartialEq)]
pub struct SizeReport {
    pub bytes: u64,
    pub text: String,
    pub unit: String,
    pub value: f64,
    pub base: u64,
}

impl Formattable for SizeReport {
    fn format_pretty(&self) -> String {
        self.text.clone()
    }
}

/// Resolve options from the config and flags.
pub fn build_options(ctx: &AppContext, args: &SizeArgs) -> libpretty::Result<ByteSizeOptions> {
    let mut options = ctx.config.to_byte_size_options()?;

    if args.short {
        options.long_form = false;
    } else if args.long {
        options.long_form = true;
    }
    if let Some(base) = &args.base {
        options.base = base.parse::<ByteBase>()?;
    }
    if let Some(locale) = &args.locale {
        options.locale = Locale::new(locale.as_str());
    }
    if let Some(pattern) = &args.number_format {
        options = options.with_number_pattern(pattern)?;
    }
    Ok(options)
}

/// Format `args.bytes` with the resolved options.
pub fn run_size(ctx: &AppContext, args: &SizeArgs) -> libpretty::Result<SizeReport> {
    let options = build_options(ctx, args)?;
    let (value, unit) = scale_bytes(args.bytes, options.base);
    tracing::debug!(bytes = args.bytes, ?unit, "formatting size");

    Ok(SizeReport {
        bytes: args.bytes,
        text: format_byte_size(args.bytes, &options),
        unit: format!("{:?}", unit).to_lowercase(),
        value,
        base: options.base.factor(),
    })
}

/// Handle the size subcommand
pub fn handle_size(ctx: &AppContext, args: &SizeArgs, output: OutputFormat) {
    match run_size(ctx, args) {
        Ok(report) => format::print_or_exit(&report, output),
        Err(e) => format::fail_with(&e),
    }
}

#[cfg(test)]
#[path = "size_tests.rs"]
mod tests;
