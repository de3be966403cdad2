//! Error types for pretty
//!
//! Every formatting call either returns a complete string or fails with a
//! [`PrettyError`]. Failures describe bad configuration passed by the caller,
//! so there is nothing to retry.

use thiserror::Error;


/// Main error type for pretty operations
#[derive(Error, Debug)]
pub enum PrettyError {
    /// An argument is outside its accepted range (e.g. `max_unit_groups` of 0)
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    /// A configuration value is not one of the recognized options
    #[error("Unsupported {kind}: {value}")]
    Unsupported { kind: String, value: String },

    /// A custom unit name table has no callback for a unit it was asked to render
    #[error("No unit name callback registered for {unit}")]
    MissingCallback { unit: String },

    /// A numeric format pattern could not be parsed
    #[error("Invalid number format '{pattern}': {message}")]
    InvalidFormat { pattern: String, message: String },

    /// Configuration errors (invalid config file, bad values)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for pretty operations
pub type Result<T> = std::result::Result<T, PrettyError>;

impl PrettyError {
    /// Creates a new invalid argument error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpretty::error::PrettyError;
    ///
    /// let err = PrettyError::invalid_argument("max_unit_groups", "must be greater than zero");
    /// assert!(matches!(err, PrettyError::InvalidArgument { .. }));
    /// ```
    pub fn invalid_argument<N: Into<String>, M: Into<String>>(name: N, message: M) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a new unsupported value error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpretty::error::PrettyError;
    ///
    /// let err = PrettyError::unsupported("representation", "verbose");
    /// assert_eq!(err.to_string(), "Unsupported representation: verbose");
    /// ```
    pub fn unsupported<K: Into<String>, V: Into<String>>(kind: K, value: V) -> Self {
        Self::Unsupported {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Creates a new missing callback error.
    pub fn missing_callback<U: Into<String>>(unit: U) -> Self {
        Self::MissingCallback { unit: unit.into() }
    }

    /// Creates a new invalid format error.
    pub fn invalid_format<P: Into<String>, M: Into<String>>(pattern: P, message: M) -> Self {
        Self::InvalidFormat {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpretty::error::PrettyError;
    ///
    /// let err = PrettyError::config("invalid config file", Some("/path/to/config.yaml"));
    /// assert!(matches!(err, PrettyError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpretty::error::PrettyError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    /// let err = PrettyError::config_with_source("failed to read config", Some("/path/to/config.yaml"), io_err);
    /// assert!(matches!(err, PrettyError::Config { .. }));
    /// ```
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the error was caused by a value the caller passed in
    /// directly, as opposed to a configuration source.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::Unsupported { .. } | Self::InvalidFormat { .. }
        )
    }
}

impl From<config::ConfigError> for PrettyError {
    fn from(err: config::ConfigError) -> Self {
        Self::config_with_source("Failed to build configuration".to_string(), None, err)
    }
}
