//! Layered configuration
//!
//! Config is resolved in three layers:
//! 1. Embedded defaults (compiled into binary)
//! 2. Override file (`--config` path, or ~/.config/painel/painel.toml)
//! 3. Environment variables (`PAINEL_*`)

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/painel.toml");

pub const FINANCE_URL_ENV: &str = "PAINEL_FINANCE_URL";
pub const COLOR_URL_ENV: &str = "PAINEL_COLOR_URL";
pub const TIMEOUT_ENV: &str = "PAINEL_TIMEOUT_SECS";
pub const SESSION_FILE_ENV: &str = "PAINEL_SESSION_FILE";

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Finance API base URL (no trailing slash)
    pub finance_url: String,
    /// Color API base URL (no trailing slash)
    pub color_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Where the session identifier is persisted
    pub session_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            finance_url: "http://localhost:8080".to_string(),
            color_url: "https://www.thecolorapi.com".to_string(),
            timeout: Duration::from_secs(15),
            session_file: default_session_path(),
        }
    }
}

impl Config {
    /// Load config from the override file (if any) and the environment
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let path = override_path
            .map(Path::to_path_buf)
            .or_else(default_config_path);

        let content = match path {
            Some(ref p) if p.exists() => {
                debug!("Loading config from {}", p.display());
                fs::read_to_string(p)
                    .map_err(|e| Error::Config(format!("Failed to read {}: {}", p.display(), e)))?
            }
            Some(ref p) if override_path.is_some() => {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            _ => DEFAULT_CONFIG.to_string(),
        };

        let mut config = parse_config(&content)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `PAINEL_*` overrides using the given lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(FINANCE_URL_ENV) {
            self.finance_url = normalize_url(&url);
        }
        if let Some(url) = lookup(COLOR_URL_ENV) {
            self.color_url = normalize_url(&url);
        }
        if let Some(secs) = lookup(TIMEOUT_ENV) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::Config(format!("{} must be a whole number of seconds", TIMEOUT_ENV))
            })?;
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(path) = lookup(SESSION_FILE_ENV) {
            self.session_file = PathBuf::from(path);
        }
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("painel").join("painel.toml"))
}

/// Default session file path
pub fn default_session_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("painel")
        .join("session.json")
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    finance: Option<RawEndpoint>,
    color: Option<RawEndpoint>,
    http: Option<RawHttp>,
    session: Option<RawSession>,
}

#[derive(Debug, Deserialize)]
struct RawEndpoint {
    base_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawHttp {
    timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawSession {
    path: Option<PathBuf>,
}

/// Parse config from TOML content, filling gaps with defaults
fn parse_config(content: &str) -> Result<Config> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = Config::default();

    if let Some(url) = raw.finance.and_then(|f| f.base_url) {
        config.finance_url = normalize_url(&url);
    }
    if let Some(url) = raw.color.and_then(|c| c.base_url) {
        config.color_url = normalize_url(&url);
    }
    if let Some(secs) = raw.http.and_then(|h| h.timeout_secs) {
        config.timeout = Duration::from_secs(secs);
    }
    if let Some(path) = raw.session.and_then(|s| s.path) {
        config.session_file = path;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_default_config() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.color_url, "https://www.thecolorapi.com");
        assert_eq!(config.finance_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config(
            r#"
            [finance]
            base_url = "https://api.example.com/"
            "#,
        )
        .unwrap();
        assert_eq!(config.finance_url, "https://api.example.com");
        assert_eq!(config.color_url, Config::default().color_url);
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse_config("[finance").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (FINANCE_URL_ENV, "http://10.0.0.2:9000/"),
            (TIMEOUT_ENV, "3"),
            (SESSION_FILE_ENV, "/tmp/s.json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_env(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.finance_url, "http://10.0.0.2:9000");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.session_file, PathBuf::from("/tmp/s.json"));
        assert_eq!(config.color_url, Config::default().color_url);
    }

    #[test]
    fn test_bad_timeout_env() {
        let mut config = Config::default();
        let err = config
            .apply_env(|k| (k == TIMEOUT_ENV).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_ENV));
    }

    #[test]
    fn test_load_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("painel.toml");
        fs::write(
            &path,
            "[color]\nbase_url = \"http://127.0.0.1:1\"\n[http]\ntimeout_secs = 2\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        // Env may override the color URL on a developer machine; timeout is stable
        if std::env::var(COLOR_URL_ENV).is_err() {
            assert_eq!(config.color_url, "http://127.0.0.1:1");
        }
        if std::env::var(TIMEOUT_ENV).is_err() {
            assert_eq!(config.timeout, Duration::from_secs(2));
        }
    }

    #[test]
    fn test_load_missing_override_file() {
        let err = Config::load(Some(Path::new("/nonexistent/painel.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
