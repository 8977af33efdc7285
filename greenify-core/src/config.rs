//! Configuration management
//!
//! Settings live in `settings.json` inside the Greenify directory:
//! ```json
//! {
//!   "gateway": { "url": "http://localhost:5000", "timeoutSecs": 10 },
//!   "server": { "port": 5000, "database": "users.duckdb" }
//! }
//! ```
//! Every field is optional. `GREENIFY_GATEWAY_URL` and `GREENIFY_PORT`
//! override the file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "settings.json";

pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE: &str = "users.duckdb";

pub const ENV_GATEWAY_URL: &str = "GREENIFY_GATEWAY_URL";
pub const ENV_PORT: &str = "GREENIFY_PORT";

/// Raw settings.json structure. Unknown keys are carried through `other`
/// so saving never drops settings written by something else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    gateway: GatewaySettings,
    #[serde(default)]
    server: ServerSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GatewaySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServerSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    database: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Effective settings after defaults and environment overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the registration gateway the CLI talks to
    pub gateway_url: String,
    pub gateway_timeout: Duration,
    /// Port `gf serve` listens on
    pub server_port: u16,
    /// Users database file, relative to the Greenify directory unless absolute
    pub database: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            gateway_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            server_port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl Config {
    /// Load from `greenify_dir`, applying process environment overrides
    pub fn load(greenify_dir: &Path) -> Result<Self> {
        Self::load_with_env(greenify_dir, |key| std::env::var(key).ok())
    }

    /// Load with a custom environment lookup
    pub fn load_with_env<F>(greenify_dir: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = read_settings(&greenify_dir.join(SETTINGS_FILE))?;
        let defaults = Self::default();

        let mut config = Self {
            gateway_url: raw.gateway.url.unwrap_or(defaults.gateway_url),
            gateway_timeout: raw
                .gateway
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.gateway_timeout),
            server_port: raw.server.port.unwrap_or(defaults.server_port),
            database: raw.server.database.unwrap_or(defaults.database),
        };

        if let Some(url) = env(ENV_GATEWAY_URL).filter(|v| !v.is_empty()) {
            config.gateway_url = url;
        }
        if let Some(port) = env(ENV_PORT) {
            config.server_port = port
                .parse()
                .with_context(|| format!("{} is not a valid port: {}", ENV_PORT, port))?;
        }

        Ok(config)
    }

    /// Write managed fields back, keeping everything else in the file
    pub fn save(&self, greenify_dir: &Path) -> Result<()> {
        let path = greenify_dir.join(SETTINGS_FILE);
        let mut settings = read_settings(&path)?;

        settings.gateway.url = Some(self.gateway_url.clone());
        settings.gateway.timeout_secs = Some(self.gateway_timeout.as_secs());
        settings.server.port = Some(self.server_port);
        settings.server.database = Some(self.database.clone());

        std::fs::create_dir_all(greenify_dir)?;
        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Absolute location of the users database
    pub fn database_path(&self, greenify_dir: &Path) -> PathBuf {
        let path = Path::new(&self.database);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            greenify_dir.join(path)
        }
    }
}

/// A missing or unparseable file reads as empty settings
fn read_settings(path: &Path) -> Result<SettingsFile> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}
