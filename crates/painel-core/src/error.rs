//! Error types for Painel

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid color format: {0} (use #RRGGBB or #RGB)")]
    InvalidColor(String),

    #[error("Month out of range: {0} (expected 1-12)")]
    MonthOutOfRange(u8),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Session store error: {0}")]
    Session(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
