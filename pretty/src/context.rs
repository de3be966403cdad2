//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.
//! Per-command flags (such as `--rep`) are applied on top by the command
//! handlers.

use crate::config;
use libpretty::Config;
use std::env;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured locale.
pub const LOCALE_ENV_VAR: &str = "PRETTY_LOCALE";

/// How much diagnostic output to print, from the `-v` count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl VerbosityLevel {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::Debug,
            _ => VerbosityLevel::Trace,
        }
    }

    /// Filter directive for the tracing subscriber.
    pub fn filter_directive(self) -> &'static str {
        match self {
            VerbosityLevel::Normal => "warn",
            VerbosityLevel::Verbose => "info",
            VerbosityLevel::Debug => "pretty=debug,libpretty=debug",
            VerbosityLevel::Trace => "pretty=trace,libpretty=trace",
        }
    }

    /// `RUST_LOG` wins when set; otherwise the level picks the filter.
    pub fn env_filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.filter_directive()))
    }
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
    /// Where the configuration was looked up
    pub config_path: PathBuf,
    pub verbosity: VerbosityLevel,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars > CLI flags
    pub fn build(cli_config: Option<&Path>, verbosity: VerbosityLevel) -> Result<Self, String> {
        let config_path = config::get_config_path(cli_config);
        // An explicit --config must exist; the default location may not.
        let config = config::load_config(&config_path, cli_config.is_some())?;
        let config = apply_env_overrides(config, env::var(LOCALE_ENV_VAR).ok());

        tracing::debug!(path = %config_path.display(), locale = %config.locale, "context built");
        Ok(Self {
            config,
            config_path,
            verbosity,
        })
    }

    #[cfg(test)]
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            config_path: PathBuf::from("config.yaml"),
            verbosity: VerbosityLevel::Normal,
        }
    }
}

fn apply_env_overrides(mut config: Config, locale: Option<String>) -> Config {
    if let Some(locale) = locale.filter(|l| !l.is_empty()) {
        config.locale = locale;
    }
    config
}
