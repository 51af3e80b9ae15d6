//! Command-line interface definition using clap
//!
//! Provides structured argument parsing with automatic help generation.

use clap::Parser;
use sinkgate::config::Config;
use sinkgate::Severity;
use std::path::PathBuf;

// =============================================================================
// CLI Definition
// =============================================================================

/// Pipe text through the gating/sanitizing adapter onto stderr
#[derive(Parser, Debug)]
#[command(name = "sinkgate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output for the adapter's own diagnostics
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file
    #[arg(long, value_name = "PATH", default_value = "sinkgate.toml")]
    pub config: PathBuf,

    /// Force every record through, ignoring the sink threshold
    #[arg(long)]
    pub debug: bool,

    /// Severity of emitted records
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub level: Severity,

    /// Lowest severity the sink accepts (overrides config)
    #[arg(long, value_name = "LEVEL")]
    pub min_level: Option<Severity>,

    /// Tag for emitted records (overrides config)
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Emit this message instead of reading stdin
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Read all of stdin as a single record instead of one per line
    #[arg(long, conflicts_with = "message")]
    pub whole: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, config: &mut Config) {
        if self.debug {
            config.adapter.debug = true;
        }
        if let Some(min_level) = self.min_level {
            config.adapter.min_level = min_level;
        }
        if let Some(tag) = &self.tag {
            config.adapter.tag = tag.clone();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["sinkgate"]);
        assert!(!cli.verbose);
        assert!(!cli.debug);
        assert!(!cli.whole);
        assert_eq!(cli.level, Severity::Info);
        assert_eq!(cli.config, PathBuf::from("sinkgate.toml"));
        assert!(cli.message.is_none());
    }

    #[test]
    fn test_cli_parse_levels() {
        let cli = Cli::parse_from(["sinkgate", "--level", "ERROR", "--min-level", "warn"]);
        assert_eq!(cli.level, Severity::Error);
        assert_eq!(cli.min_level, Some(Severity::Warn));
    }

    #[test]
    fn test_cli_rejects_unknown_level() {
        assert!(Cli::try_parse_from(["sinkgate", "--level", "loud"]).is_err());
    }

    #[test]
    fn test_cli_message_conflicts_with_whole() {
        assert!(Cli::try_parse_from(["sinkgate", "--message", "x", "--whole"]).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::parse_from(["sinkgate", "--debug", "--min-level", "error", "--tag", "ci"]);
        let mut cfg = Config::default();
        cli.apply(&mut cfg);
        assert!(cfg.adapter.debug);
        assert_eq!(cfg.adapter.min_level, Severity::Error);
        assert_eq!(cfg.adapter.tag, "ci");
    }

    #[test]
    fn test_apply_without_flags_keeps_config() {
        let cli = Cli::parse_from(["sinkgate"]);
        let mut cfg = Config::default();
        cfg.adapter.debug = true;
        cli.apply(&mut cfg);
        assert!(cfg.adapter.debug);
        assert_eq!(cfg.adapter.tag, Config::default().adapter.tag);
    }
}
