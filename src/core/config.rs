//! # Configuration
//!
//! Centralizes the demo app's settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.waypost/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WaypostConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
    pub poll_timeout_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DemoConfig {
    pub event_name: Option<String>,
    pub ticket_price_cents: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "waypost.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 250;
pub const DEFAULT_EVENT_NAME: &str = "Rust Community Meetup";
pub const DEFAULT_TICKET_PRICE_CENTS: u32 = 1950;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_file: String,
    pub log_level: String,
    pub poll_timeout_ms: u64,
    pub event_name: String,
    pub ticket_price_cents: u32,
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

/// Returns the path to `~/.waypost/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".waypost").join("config.toml"))
}

/// Load config from `~/.waypost/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WaypostConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WaypostConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WaypostConfig::default());
        }
    };

    if !path.exists() {
        info!(
            "No config file found, generating default at {}",
            path.display()
        );
        generate_default_config(&path);
        return Ok(WaypostConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: WaypostConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Waypost Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults, then this file, then env vars, then CLI flags.

# [general]
# log_file = "waypost.log"
# log_level = "info"             # "error", "warn", "info", "debug", "trace"
# poll_timeout_ms = 250          # idle input poll timeout

# [demo]
# event_name = "Rust Community Meetup"
# ticket_price_cents = 1950
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
/// `cli_log_level` is from the CLI flag (None = not specified).
pub fn resolve(config: &WaypostConfig, cli_log_level: Option<&str>) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("WAYPOST_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    // Log file: env → config → default
    let log_file = std::env::var("WAYPOST_LOG_FILE")
        .ok()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        log_file,
        log_level,
        poll_timeout_ms: config
            .general
            .poll_timeout_ms
            .unwrap_or(DEFAULT_POLL_TIMEOUT_MS),
        event_name: config
            .demo
            .event_name
            .clone()
            .unwrap_or_else(|| DEFAULT_EVENT_NAME.to_string()),
        ticket_price_cents: config
            .demo
            .ticket_price_cents
            .unwrap_or(DEFAULT_TICKET_PRICE_CENTS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = WaypostConfig::default();
        assert!(config.general.log_file.is_none());
        assert!(config.demo.event_name.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = WaypostConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.poll_timeout_ms, DEFAULT_POLL_TIMEOUT_MS);
        assert_eq!(resolved.event_name, DEFAULT_EVENT_NAME);
        assert_eq!(resolved.ticket_price_cents, DEFAULT_TICKET_PRICE_CENTS);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = WaypostConfig {
            general: GeneralConfig {
                log_file: Some("demo.log".to_string()),
                log_level: Some("debug".to_string()),
                poll_timeout_ms: Some(80),
            },
            demo: DemoConfig {
                event_name: Some("RustFest".to_string()),
                ticket_price_cents: Some(4200),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.log_file, "demo.log");
        assert_eq!(resolved.log_level, "debug");
        assert_eq!(resolved.poll_timeout_ms, 80);
        assert_eq!(resolved.event_name, "RustFest");
        assert_eq!(resolved.ticket_price_cents, 4200);
    }

    #[test]
    fn test_resolve_cli_log_level_wins() {
        let config = WaypostConfig {
            general: GeneralConfig {
                log_level: Some("warn".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("trace"));
        assert_eq!(resolved.log_level, "trace");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
log_file = "out.log"
log_level = "debug"
poll_timeout_ms = 100

[demo]
event_name = "RustConf Afterparty"
ticket_price_cents = 2500
"#;
        let config: WaypostConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_file.as_deref(), Some("out.log"));
        assert_eq!(config.general.poll_timeout_ms, Some(100));
        assert_eq!(
            config.demo.event_name.as_deref(),
            Some("RustConf Afterparty")
        );
        assert_eq!(config.demo.ticket_price_cents, Some(2500));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing. Everything else stays default.
        let toml_str = r#"
[demo]
event_name = "Tiny Meetup"
"#;
        let config: WaypostConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.demo.event_name.as_deref(), Some("Tiny Meetup"));
        assert!(config.demo.ticket_price_cents.is_none());
        assert!(config.general.log_file.is_none());
    }
}
