//! Configuration management
//!
//! Host-side settings for wiring the adapter: the initial debug override, the
//! bundled sinks' threshold and the default tag. The pipeline itself reads
//! nothing but the debug flag.

use crate::constants::{DEFAULT_TAG, MAX_TAG_LEN};
use crate::error::{AdapterError, Result};
use crate::logging::Severity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

// =============================================================================
// Application Configuration
// =============================================================================

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub adapter: AdapterConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Initial value of the process-wide debug override
    pub debug: bool,
    /// Lowest severity the bundled sinks accept
    pub min_level: Severity,
    /// Tag for records that don't carry their own
    pub tag: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            debug: false,
            min_level: Severity::Info,
            tag: DEFAULT_TAG.to_string(),
        }
    }
}

impl Config {
    /// Parse and validate TOML text
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| AdapterError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the type system can't
    pub fn validate(&self) -> Result<()> {
        let tag = self.adapter.tag.trim();
        if tag.is_empty() {
            return Err(AdapterError::ConfigValidation {
                field: "adapter.tag",
                reason: "must not be empty".into(),
            });
        }
        if tag.chars().count() > MAX_TAG_LEN {
            return Err(AdapterError::ConfigValidation {
                field: "adapter.tag",
                reason: format!("longer than {} characters", MAX_TAG_LEN),
            });
        }
        Ok(())
    }
}

/// Load config from `path`, or defaults if the file does not exist
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        warn!("Config {:?} not found, using defaults", path);
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| AdapterError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Config::from_toml(&content, path)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn unique_temp_path(name: &str) -> PathBuf {
        let pid = std::process::id();
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("sinkgate-{}-{}-{}", name, pid, ts))
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert!(!cfg.adapter.debug);
        assert_eq!(cfg.adapter.min_level, Severity::Info);
        assert_eq!(cfg.adapter.tag, DEFAULT_TAG);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_parse_full() {
        let cfg = Config::from_toml(
            "[adapter]\ndebug = true\nmin_level = \"warn\"\ntag = \"net\"\n",
            Path::new("inline.toml"),
        )
        .unwrap();
        assert!(cfg.adapter.debug);
        assert_eq!(cfg.adapter.min_level, Severity::Warn);
        assert_eq!(cfg.adapter.tag, "net");
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let cfg = Config::from_toml("[adapter]\ndebug = true\n", Path::new("inline.toml")).unwrap();
        assert!(cfg.adapter.debug);
        assert_eq!(cfg.adapter.min_level, Severity::Info);

        let empty = Config::from_toml("", Path::new("inline.toml")).unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_parse_bad_level() {
        let err = Config::from_toml("[adapter]\nmin_level = \"loud\"\n", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, AdapterError::ConfigParse { .. }));
    }

    #[test]
    fn test_validate_tag() {
        let mut cfg = Config::default();
        cfg.adapter.tag = "  ".into();
        assert!(matches!(
            cfg.validate(),
            Err(AdapterError::ConfigValidation { field: "adapter.tag", .. })
        ));

        cfg.adapter.tag = "x".repeat(MAX_TAG_LEN + 1);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let cfg = load(&unique_temp_path("missing")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_load_round_trip_file() {
        let path = unique_temp_path("cfg");
        let mut cfg = Config::default();
        cfg.adapter.min_level = Severity::Debug;
        fs::write(&path, toml::to_string_pretty(&cfg).unwrap()).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, cfg);

        let _ = fs::remove_file(&path);
    }
}
