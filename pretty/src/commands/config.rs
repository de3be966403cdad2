use crate::config;
use crate::context::{AppContext, VerbosityLevel};
use crate::format::{self, Formattable, OutputFormat};
use libpretty::Config;
use std::path::Path;

/// Implement Formattable for Config to enable output formatting
///
/// The pretty form is laid out like the YAML config file, so it can be
/// pasted back into one.
impl Formattable for Config {
    fn format_pretty(&self) -> String {
        let mut output = format!("locale: {}\n", self.locale);

        let d = &self.duration;
        output.push_str("duration:\n");
        output.push_str(&format!("  max_unit_groups: {}\n", d.max_unit_groups));
        output.push_str(&format!("  representation: {}\n", d.representation));
        output.push_str(&format!("  highest_unit: {}\n", d.highest_unit));
        output.push_str(&format!("  lowest_unit: {}\n", d.lowest_unit));
        output.push_str(&format!("  rounding: {}\n", d.rounding));

        let b = &self.bytes;
        output.push_str("bytes:\n");
        output.push_str(&format!("  long_form: {}\n", b.long_form));
        output.push_str(&format!("  base: {}\n", b.base));
        if let Some(ref pattern) = b.number_format {
            output.push_str(&format!("  number_format: \"{}\"\n", pattern));
        }

        output
    }
}

/// Handle the config show subcommand
pub fn handle_show(ctx: &AppContext, output: OutputFormat) {
    if output == OutputFormat::Pretty && ctx.verbosity >= VerbosityLevel::Verbose {
        println!("# {}", ctx.config_path.display());
    }
    format::print_or_exit(&ctx.config, output);
}

/// Handle the config init subcommand
///
/// Takes the path rather than a context, since the file does not exist yet.
pub fn handle_init(config_path: &Path) {
    match config::init_config(config_path) {
        Ok(()) => format::success(&format!(
            "Initialized config file at: {}",
            config_path.display()
        )),
        Err(e) => format::fail(&e),
    }
}

/// Handle the config path subcommand
pub fn handle_path(config_path: &Path) {
    println!("{}", config_path.display());
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
