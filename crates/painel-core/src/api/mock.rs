//! Mock backend for testing
//!
//! Implements both `FinanceApi` and `ColorApi` in memory, with switches to
//! simulate an unreachable color API.

use async_trait::async_trait;

use crate::color::HexColor;
use crate::error::{Error, Result};
use crate::models::FinancialEntry;
use crate::palette::SchemeQuery;

use super::{ColorApi, FinanceApi};

/// Mock API backend for testing
///
/// Accepts a single account (`email`/`senha`) and serves a fixed entry list.
#[derive(Clone)]
pub struct MockBackend {
    pub email: String,
    pub senha: String,
    pub user_id: String,
    pub entries: Vec<FinancialEntry>,
    /// Color returned by `random_color`; `None` simulates a failing API
    pub random: Option<HexColor>,
    /// When false, `scheme` fails
    pub scheme_available: bool,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            email: "ana@example.com".to_string(),
            senha: "segredo".to_string(),
            user_id: "7".to_string(),
            entries: Vec::new(),
            random: HexColor::parse("#0047AB").ok(),
            scheme_available: true,
        }
    }

    pub fn with_entries(mut self, entries: Vec<FinancialEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Color endpoints fail, as when the network is down
    pub fn offline(mut self) -> Self {
        self.random = None;
        self.scheme_available = false;
        self
    }

    fn check(&self, email: &str, senha: &str) -> Result<String> {
        if email == self.email && senha == self.senha {
            Ok(self.user_id.clone())
        } else {
            Err(Error::Auth("invalid email or password".into()))
        }
    }
}

#[async_trait]
impl FinanceApi for MockBackend {
    async fn authenticate(&self, email: &str, senha: &str) -> Result<String> {
        self.check(email, senha)
    }

    async fn authenticate_legacy(&self, email: &str, senha: &str) -> Result<String> {
        self.check(email, senha)
    }

    async fn fetch_entries(&self, user_id: &str) -> Result<Vec<FinancialEntry>> {
        if user_id == self.user_id {
            Ok(self.entries.clone())
        } else {
            Ok(Vec::new())
        }
    }
}

#[async_trait]
impl ColorApi for MockBackend {
    async fn random_color(&self) -> Result<HexColor> {
        self.random
            .clone()
            .ok_or_else(|| Error::InvalidData("mock color API is offline".into()))
    }

    async fn scheme(&self, query: &SchemeQuery) -> Result<Vec<HexColor>> {
        if !self.scheme_available {
            return Err(Error::InvalidData("mock color API is offline".into()));
        }
        // Deterministic: the base color repeated `count` times
        let base = HexColor::parse(&format!("#{}", query.hex))?;
        Ok(vec![base; usize::from(query.count)])
    }
}
