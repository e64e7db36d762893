//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.daneo/config.toml`. If missing on first run, a
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
pub struct DaneoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Path or URL of the words document.
    pub words_source: Option<String>,
    /// Directory for persisted state (favorites). Defaults to `~/.daneo`.
    pub data_dir: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_WORDS_SOURCE: &str = "words.json";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub words_source: String,
    pub data_dir: PathBuf,
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

/// Returns the path to `~/.daneo/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".daneo").join("config.toml"))
}

/// Load config from `~/.daneo/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DaneoConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DaneoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DaneoConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(DaneoConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: DaneoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# daneo Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# words_source = "words.json"        # Path or http(s) URL of the words document
# data_dir = "/home/me/.daneo"       # Where favorites are stored
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
/// `cli_words` is the `--words` flag (None = not specified).
pub fn resolve(config: &DaneoConfig, cli_words: Option<&str>) -> ResolvedConfig {
    // Words source: CLI → env → config → default
    let words_source = cli_words
        .map(|s| s.to_string())
        .or_else(|| std::env::var("DANEO_WORDS").ok())
        .or_else(|| config.general.words_source.clone())
        .unwrap_or_else(|| DEFAULT_WORDS_SOURCE.to_string());

    // Data dir: env → config → ~/.daneo (falls back to ./.daneo without a home)
    let data_dir = std::env::var("DANEO_DATA_DIR")
        .ok()
        .or_else(|| config.general.data_dir.clone())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(".daneo"))
                .unwrap_or_else(|| PathBuf::from(".daneo"))
        });

    ResolvedConfig {
        words_source,
        data_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = DaneoConfig::default();
        assert!(config.general.words_source.is_none());
        assert!(config.general.data_dir.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = DaneoConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.words_source, DEFAULT_WORDS_SOURCE);
        assert!(resolved.data_dir.ends_with(".daneo"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = DaneoConfig {
            general: GeneralConfig {
                words_source: Some("https://example.com/words.json".to_string()),
                data_dir: Some("/tmp/daneo-test".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.words_source, "https://example.com/words.json");
        assert_eq!(resolved.data_dir, PathBuf::from("/tmp/daneo-test"));
    }

    #[test]
    fn test_resolve_cli_words_wins() {
        let config = DaneoConfig {
            general: GeneralConfig {
                words_source: Some("from-config.json".to_string()),
                data_dir: None,
            },
        };
        let resolved = resolve(&config, Some("from-cli.json"));
        assert_eq!(resolved.words_source, "from-cli.json");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
words_source = "my-words.json"
"#;
        let config: DaneoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.general.words_source.as_deref(),
            Some("my-words.json")
        );
        assert!(config.general.data_dir.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
words_source = "words.json"
data_dir = "/var/lib/daneo"
"#;
        let config: DaneoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.words_source.as_deref(), Some("words.json"));
        assert_eq!(config.general.data_dir.as_deref(), Some("/var/lib/daneo"));
    }
}
