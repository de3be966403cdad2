use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod context;
mod format;

use commands::duration::{DurationArgs, DurationMode};
use commands::size::SizeArgs;

/// Pretty - Human-Readable Sizes and Durations
///
/// Formats byte counts and time spans as short, readable text.
#[derive(Parser, Debug)]
#[command(name = "pretty")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file (defaults to $PRETTY_CONFIG, then ~/.config/pretty/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Format a byte count
    Size {
        /// Number of bytes
        bytes: u64,
        /// Use abbreviated unit names (KB)
        #[arg(short, long, conflicts_with = "long")]
        short: bool,
        /// Use full unit names (kilobytes)
        #[arg(short, long)]
        long: bool,
        /// Unit base: 1000 (decimal) or 1024 (binary)
        #[arg(short, long)]
        base: Option<String>,
        /// Culture name, e.g. en-US, nb-NO, ko-KR
        #[arg(long)]
        locale: Option<String>,
        /// Number pattern, e.g. 0.00 or 0.#
        #[arg(short = 'n', long)]
        number_format: Option<String>,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Format a duration
    #[command(visible_alias = "dur")]
    Duration {
        #[command(flatten)]
        flags: DurationFlags,
        /// Rounding of the last shown unit: down, up, nearest-or-up
        #[arg(short, long)]
        rounding: Option<String>,
    },
    /// Format the time left on a countdown, always rounding up
    Remaining {
        #[command(flatten)]
        flags: DurationFlags,
    },
    /// Show or create the configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Display version information
    Version,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug)]
struct DurationFlags {
    /// Amount of time, counted in --unit
    #[arg(allow_negative_numbers = true)]
    value: f64,
    /// Unit of the value: days, hours, minutes, seconds, ms, us, ns
    #[arg(short, long, default_value = "seconds")]
    unit: String,
    /// Most unit groups to show
    #[arg(short = 'g', long)]
    max_groups: Option<usize>,
    /// Representation: long, short, compact, compact-with-space
    #[arg(long = "rep")]
    representation: Option<String>,
    /// Largest unit to show
    #[arg(long)]
    highest: Option<String>,
    /// Smallest unit to show
    #[arg(long)]
    lowest: Option<String>,
    /// Culture name, e.g. en-US
    #[arg(long)]
    locale: Option<String>,
    /// Output format: pretty, json, yaml
    #[arg(short, long, default_value = "pretty")]
    format: String,
}

impl DurationFlags {
    fn into_args(self, rounding: Option<String>) -> (DurationArgs, format::OutputFormat) {
        let output = format::OutputFormat::from(self.format.as_str());
        let args = DurationArgs {
            value: self.value,
            unit: self.unit,
            max_groups: self.max_groups,
            representation: self.representation,
            highest: self.highest,
            lowest: self.lowest,
            rounding,
            locale: self.locale,
        };
        (args, output)
    }
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Display the effective configuration (default)
    Show {
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Write a config file with default values
    Init,
    /// Print the config file location
    Path,
}

fn init_tracing(verbosity: context::VerbosityLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(verbosity.env_filter())
        .with_writer(std::io::stderr)
        .with_target(verbosity >= context::VerbosityLevel::Debug)
        .init();
}

fn warn_unknown_locale(locale: &str) {
    let known = libpretty::names::known_locales();
    if !known.iter().any(|l| l.eq_ignore_ascii_case(locale)) {
        format::warning(&format!(
            "No byte unit names for locale '{}', using {}",
            locale,
            libpretty::locale::DEFAULT_LOCALE
        ));
    }
}

fn main() {
    let cli = Cli::parse();
    let verbosity = context::VerbosityLevel::from_count(cli.verbose);
    init_tracing(verbosity);

    // Commands that must not read the config file
    match &cli.command {
        Commands::Version => {
            commands::version::print_version();
            return;
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
            return;
        }
        Commands::Config {
            command: Some(ConfigCommands::Init),
            ..
        } => {
            commands::config::handle_init(&config::get_config_path(cli.config.as_deref()));
            return;
        }
        Commands::Config {
            command: Some(ConfigCommands::Path),
            ..
        } => {
            commands::config::handle_path(&config::get_config_path(cli.config.as_deref()));
            return;
        }
        _ => {}
    }

    // Build context with precedence: defaults > config file > env vars > CLI flags
    let ctx = match context::AppContext::build(cli.config.as_deref(), verbosity) {
        Ok(ctx) => ctx,
        Err(e) => format::fail(&e),
    };
    tracing::info!(config = %ctx.config_path.display(), "configuration loaded");

    match cli.command {
        Commands::Size {
            bytes,
            short,
            long,
            base,
            locale,
            number_format,
            format,
        } => {
            let args = SizeArgs {
                bytes,
                short,
                long,
                base,
                locale,
                number_format,
            };
            warn_unknown_locale(args.locale.as_deref().unwrap_or(&ctx.config.locale));
            let fmt = format::OutputFormat::from(format.as_str());
            commands::size::handle_size(&ctx, &args, fmt);
        }
        Commands::Duration { flags, rounding } => {
            let (args, fmt) = flags.into_args(rounding);
            commands::duration::handle_duration(&ctx, &args, DurationMode::Duration, fmt);
        }
        Commands::Remaining { flags } => {
            let (args, fmt) = flags.into_args(None);
            commands::duration::handle_duration(&ctx, &args, DurationMode::Remaining, fmt);
        }
        Commands::Config { command, format } => {
            let format = match command {
                Some(ConfigCommands::Show { format }) => format,
                _ => format,
            };
            commands::config::handle_show(&ctx, format::OutputFormat::from(format.as_str()));
        }
        // Handled before the context was built
        Commands::Version | Commands::Completion { .. } => {}
    }
}
