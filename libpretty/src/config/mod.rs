//! Formatting defaults.
//!
//! This module holds the defaults used by the `pretty` CLI and by callers
//! that want their formatting settings in a YAML file instead of code.
//! Values missing from the file keep their built-in defaults.

use crate::bytes::ByteSizeOptions;
use crate::duration::DurationOptions;
use crate::error::{PrettyError, Result};
use crate::locale::{DEFAULT_LOCALE, Locale};
use crate::units::{ByteBase, DurationUnit, Representation, Rounding};
use config::{Config as ConfigRs, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(test)]
mod tests;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default)]
    pub duration: DurationSection,

    #[serde(default)]
    pub bytes: ByteSection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            duration: DurationSection::default(),
            bytes: ByteSection::default(),
        }
    }
}

impl Config {
    /// Parses a `Config` from a YAML string.
    ///
    /// ```
    /// use libpretty::Config;
    /// use libpretty::units::Representation;
    ///
    /// let config = Config::from_yaml_str("duration:\n  representation: short\n").unwrap();
    /// assert_eq!(config.duration.representation, Representation::Short);
    /// assert_eq!(config.locale, "en-US");
    /// ```
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = ConfigRs::builder()
            // Add default values
            .add_source(ConfigRs::try_from(&Config::default())?)
            // Merge with YAML string
            .add_source(File::from_str(s, FileFormat::Yaml));

        Self::from_builder(builder, None)
    }

    /// Loads a `Config` from an optional file path.
    ///
    /// With no path the defaults are returned. A path that does not exist is
    /// an error; callers decide whether a missing file matters.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigRs::builder()
            // Add default values
            .add_source(ConfigRs::try_from(&Config::default())?);

        if let Some(p) = path {
            builder = builder.add_source(File::from(p).format(FileFormat::Yaml).required(true));
        }

        Self::from_builder(builder, path.map(|p| p.display().to_string()))
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: Option<String>,
    ) -> Result<Self> {
        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                PrettyError::config_with_source(
                    "Failed to deserialize configuration".to_string(),
                    path,
                    e,
                )
            })
    }

    pub fn locale(&self) -> Locale {
        Locale::new(self.locale.as_str())
    }

    /// Builds validated duration options from this configuration.
    pub fn to_duration_options(&self) -> Result<DurationOptions> {
        let d = &self.duration;
        let options = DurationOptions::new(d.max_unit_groups)
            .with_representation(d.representation)
            .with_highest_unit(d.highest_unit)
            .with_lowest_unit(d.lowest_unit)
            .with_rounding(d.rounding)
            .with_locale(self.locale());
        options.validate()?;
        Ok(options)
    }

    /// Builds byte-size options, parsing the number format pattern if set.
    pub fn to_byte_size_options(&self) -> Result<ByteSizeOptions> {
        let b = &self.bytes;
        let options = if b.long_form {
            ByteSizeOptions::long()
        } else {
            ByteSizeOptions::short()
        }
        .with_base(b.base)
        .with_locale(self.locale());

        match &b.number_format {
            Some(pattern) => options.with_number_pattern(pattern),
            None => Ok(options),
        }
    }
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

/// Duration formatting settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DurationSection {
    #[serde(default = "default_max_unit_groups")]
    pub max_unit_groups: usize,

    #[serde(default)]
    pub representation: Representation,

    #[serde(default = "default_highest_unit")]
    pub highest_unit: DurationUnit,

    #[serde(default = "default_lowest_unit")]
    pub lowest_unit: DurationUnit,

    #[serde(default)]
    pub rounding: Rounding,
}

impl Default for DurationSection {
    fn default() -> Self {
        Self {
            max_unit_groups: default_max_unit_groups(),
            representation: Representation::default(),
            highest_unit: default_highest_unit(),
            lowest_unit: default_lowest_unit(),
            rounding: Rounding::default(),
        }
    }
}

fn default_max_unit_groups() -> usize {
    2
}

fn default_highest_unit() -> DurationUnit {
    DurationUnit::Days
}

fn default_lowest_unit() -> DurationUnit {
    DurationUnit::Seconds
}

/// Byte-size formatting settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ByteSection {
    #[serde(default = "default_long_form")]
    pub long_form: bool,

    #[serde(default)]
    pub base: ByteBase,

    /// Pattern such as `0.00`; unset means precision follows magnitude
    #[serde(default)]
    pub number_format: Option<String>,
}

impl Default for ByteSection {
    fn default() -> Self {
        Self {
            long_form: default_long_form(),
            base: ByteBase::default(),
            number_format: None,
        }
    }
}

fn default_long_form() -> bool {
    true
}
