//! Shared command utilities
//!
//! This module contains:
//! - `load_config` - Resolve configuration with CLI overrides
//! - `open_store` - Open the session store
//! - `finance_client` / `color_client` - Build API clients from config

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use painel_core::{ColorClient, Config, FileSessionStore, FinanceClient};

/// Load config; an explicit `--session-file` wins over config and env
pub fn load_config(config_path: Option<&Path>, session_file: Option<PathBuf>) -> Result<Config> {
    let mut config = Config::load(config_path).context("Failed to load configuration")?;
    if let Some(path) = session_file {
        config.session_file = path;
    }
    tracing::debug!(
        "Using finance API {} and color API {}",
        config.finance_url,
        config.color_url
    );
    Ok(config)
}

pub fn open_store(config: &Config) -> FileSessionStore {
    FileSessionStore::new(&config.session_file)
}

pub fn finance_client(config: &Config) -> Result<FinanceClient> {
    FinanceClient::from_config(config).context("Failed to create finance API client")
}

pub fn color_client(config: &Config) -> Result<ColorClient> {
    ColorClient::from_config(config).context("Failed to create color API client")
}
