//! Finance API client
//!
//! Login and entry fetching over HTTP. Responses are read as text and handed
//! to the decoders in `parsing`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::FinancialEntry;

use super::parsing::{parse_entries, parse_login};
use super::FinanceApi;

/// HTTP client for the finance API
#[derive(Clone)]
pub struct FinanceClient {
    http_client: Client,
    base_url: String,
}

impl FinanceClient {
    /// Create a new client with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.finance_url, config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Login request body
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    senha: &'a str,
}

/// Map a login response status: 401/403 mean rejected credentials, any other
/// error status is an HTTP error
async fn login_body(response: Response) -> Result<String> {
    if matches!(
        response.status(),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
    ) {
        return Err(Error::Auth("invalid email or password".to_string()));
    }
    Ok(response.error_for_status()?.text().await?)
}

#[async_trait]
impl FinanceApi for FinanceClient {
    async fn authenticate(&self, email: &str, senha: &str) -> Result<String> {
        debug!("Authenticating {} against {}", email, self.base_url);

        let response = self
            .http_client
            .post(format!("{}/usuarios/autenticar", self.base_url))
            .json(&LoginRequest { email, senha })
            .send()
            .await?;

        let body = login_body(response).await?;
        parse_login(&body)
    }

    async fn authenticate_legacy(&self, email: &str, senha: &str) -> Result<String> {
        warn!("Using legacy login: credentials are sent in the URL query string");

        let response = self
            .http_client
            .get(format!("{}/api/usuarios/login", self.base_url))
            .query(&[("email", email), ("senha", senha)])
            .send()
            .await?;

        let body = login_body(response).await?;
        parse_login(&body)
    }

    async fn fetch_entries(&self, user_id: &str) -> Result<Vec<FinancialEntry>> {
        let response = self
            .http_client
            .get(format!("{}/lancamentos", self.base_url))
            .query(&[("usuario", user_id)])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let entries = parse_entries(&body)?;
        debug!("Fetched {} entries for user {}", entries.len(), user_id);
        Ok(entries)
    }
}
