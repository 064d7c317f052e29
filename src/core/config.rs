//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.shan-note/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShanNoteConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Start with QWERTY→Shan substitution enabled.
    pub remap_enabled: Option<bool>,
    /// Log level for shan-note.log: "error", "warn", "info", "debug", "trace".
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_REMAP_ENABLED: bool = true;
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub remap_enabled: bool,
    pub log_level: log::LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.shan-note/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".shan-note").join("config.toml"))
}

/// Load config from `~/.shan-note/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ShanNoteConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ShanNoteConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ShanNoteConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ShanNoteConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ShanNoteConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Shan Note Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# remap_enabled = true     # QWERTY→Shan substitution on startup
# log_level = "info"       # "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_no_remap` disables substitution on startup; `cli_log_level` is from
/// the `--log-level` flag (None = not specified).
pub fn resolve(
    config: &ShanNoteConfig,
    cli_no_remap: bool,
    cli_log_level: Option<&str>,
) -> ResolvedConfig {
    // Remap: CLI → env → config → default
    let remap_enabled = if cli_no_remap {
        false
    } else {
        parse_bool_env("SHAN_NOTE_REMAP")
            .or(config.general.remap_enabled)
            .unwrap_or(DEFAULT_REMAP_ENABLED)
    };

    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SHAN_NOTE_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .and_then(|s| match log::LevelFilter::from_str(&s) {
            Ok(level) => Some(level),
            Err(_) => {
                warn!("Unrecognized log level '{}', using default", s);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        remap_enabled,
        log_level,
    }
}

fn parse_bool_env(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|v| !matches!(v.trim(), "0" | "false" | "off" | ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ShanNoteConfig::default();
        assert!(config.general.remap_enabled.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ShanNoteConfig::default();
        let resolved = resolve(&config, false, None);
        assert_eq!(resolved.remap_enabled, DEFAULT_REMAP_ENABLED);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ShanNoteConfig {
            general: GeneralConfig {
                remap_enabled: Some(false),
                log_level: Some("debug".to_string()),
            },
        };
        let resolved = resolve(&config, false, None);
        assert!(!resolved.remap_enabled);
        assert_eq!(resolved.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = ShanNoteConfig {
            general: GeneralConfig {
                remap_enabled: Some(true),
                log_level: Some("debug".to_string()),
            },
        };
        let resolved = resolve(&config, true, Some("warn"));
        assert!(!resolved.remap_enabled);
        assert_eq!(resolved.log_level, log::LevelFilter::Warn);
    }

    #[test]
    fn test_resolve_bad_log_level_falls_back() {
        let config = ShanNoteConfig::default();
        let resolved = resolve(&config, false, Some("shouty"));
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
remap_enabled = false
"#;
        let config: ShanNoteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.remap_enabled, Some(false));
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
remap_enabled = true
log_level = "trace"
"#;
        let config: ShanNoteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.remap_enabled, Some(true));
        assert_eq!(config.general.log_level.as_deref(), Some("trace"));
    }
}
