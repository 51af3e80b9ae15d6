//! Centralized error types for the adapter's host wiring
//!
//! The gating/sanitizing pipeline itself cannot fail; sink failures travel
//! through the sink's own error type. `AdapterError` only covers setup:
//! loading config and installing the `log` facade bridge.
//! Use `Result<T>` as shorthand for `std::result::Result<T, AdapterError>`.

use std::fmt;
use std::path::PathBuf;

/// All host wiring errors
#[derive(Debug)]
pub enum AdapterError {
    // === Config ===
    /// Failed to read config file
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config file is not valid TOML for `Config`
    ConfigParse { path: PathBuf, reason: String },
    /// Invalid config value
    ConfigValidation { field: &'static str, reason: String },

    // === Facade ===
    /// A global `log` logger is already installed
    LoggerInstall { reason: String },

    // === IO ===
    /// Reading host input failed
    Io { source: std::io::Error },
}

impl std::error::Error for AdapterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigRead { source, .. } | Self::Io { source } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigRead { path, .. } => {
                write!(f, "Cannot read config: {}", path.display())
            }
            Self::ConfigParse { path, reason } => {
                write!(f, "Invalid config {}: {}", path.display(), reason)
            }
            Self::ConfigValidation { field, reason } => {
                write!(f, "Invalid {}: {}", field, reason)
            }
            Self::LoggerInstall { reason } => write!(f, "Cannot install logger: {}", reason),
            Self::Io { .. } => write!(f, "IO error"),
        }
    }
}

impl From<std::io::Error> for AdapterError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

/// Alias for Result with AdapterError
pub type Result<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_validation() {
        let err = AdapterError::ConfigValidation {
            field: "tag",
            reason: "must not be empty".into(),
        };
        assert_eq!(err.to_string(), "Invalid tag: must not be empty");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_config_read_exposes_source() {
        let err = AdapterError::ConfigRead {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.toml"));
        assert_eq!(err.source().map(|s| s.to_string()), Some("gone".into()));
    }
}
