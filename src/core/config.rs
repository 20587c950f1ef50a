//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.atlas/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::query::PageSize;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ViewConfig {
    pub page_size: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "https://countries.trevorblades.com/graphql";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub page_size: PageSize,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub page_size: Option<usize>,
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

/// Returns the path to `~/.atlas/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".atlas").join("config.toml"))
}

/// Load config from `~/.atlas/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AtlasConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AtlasConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AtlasConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(AtlasConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<AtlasConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AtlasConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Atlas Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [source]
# endpoint = "https://countries.trevorblades.com/graphql"   # Or ATLAS_ENDPOINT
# timeout_secs = 30                                          # Or ATLAS_TIMEOUT_SECS

# [view]
# page_size = 10                     # 10, 20, 50 or 100. Or ATLAS_PAGE_SIZE
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &AtlasConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &AtlasConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| env("ATLAS_ENDPOINT"))
        .or_else(|| config.source.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Timeout: env → config → default
    let timeout_secs = env("ATLAS_TIMEOUT_SECS")
        .and_then(|v| parse_or_warn::<u64>("ATLAS_TIMEOUT_SECS", &v))
        .or(config.source.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    // Page size: CLI → env → config → default
    let page_size = cli
        .page_size
        .or_else(|| {
            env("ATLAS_PAGE_SIZE").and_then(|v| parse_or_warn::<usize>("ATLAS_PAGE_SIZE", &v))
        })
        .or(config.view.page_size)
        .map(page_size_or_default)
        .unwrap_or_default();

    ResolvedConfig {
        endpoint,
        timeout: Duration::from_secs(timeout_secs),
        page_size,
    }
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    let parsed = value.trim().parse().ok();
    if parsed.is_none() {
        warn!("Ignoring unparseable {}={:?}", key, value);
    }
    parsed
}

/// Maps a row count onto the allowed page sizes, falling back to the default.
fn page_size_or_default(rows: usize) -> PageSize {
    PageSize::from_rows(rows).unwrap_or_else(|| {
        warn!(
            "Page size {} is not one of 10, 20, 50, 100; using {}",
            rows,
            PageSize::default()
        );
        PageSize::default()
    })
}
