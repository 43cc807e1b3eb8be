//! Color API client (thecolorapi.com compatible)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::color::HexColor;
use crate::config::Config;
use crate::error::Result;
use crate::palette::SchemeQuery;

use super::parsing::{parse_random_color, parse_scheme};
use super::ColorApi;

/// HTTP client for the color API
#[derive(Clone)]
pub struct ColorClient {
    http_client: Client,
    base_url: String,
}

impl ColorClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.color_url, config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ColorApi for ColorClient {
    async fn random_color(&self) -> Result<HexColor> {
        let body = self
            .http_client
            .get(format!("{}/random", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let color = parse_random_color(&body)?;
        debug!("Color API returned {}", color);
        Ok(color)
    }

    async fn scheme(&self, query: &SchemeQuery) -> Result<Vec<HexColor>> {
        let body = self
            .http_client
            .get(format!("{}/scheme", self.base_url))
            .query(&query.to_pairs())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let colors = parse_scheme(&body, usize::from(query.count))?;
        debug!("Scheme for {} returned {} colors", query.hex, colors.len());
        Ok(colors)
    }
}
