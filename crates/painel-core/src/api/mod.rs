//! HTTP collaborators: the finance API and the color API
//!
//! # Architecture
//!
//! - `FinanceApi` trait: login and entry fetching
//! - `ColorApi` trait: random color and analogic schemes
//! - `FinanceClient` / `ColorClient`: reqwest implementations
//! - `MockBackend`: in-memory implementation of both traits for tests
//! - `parsing`: schema-validated decoders for every response body
//!
//! # Endpoints
//!
//! Finance API (base URL from `[finance] base_url`):
//! - `POST /usuarios/autenticar` with `{email, senha}` -> `{id}`
//! - `GET /api/usuarios/login?email=&senha=` -> `{id}` (legacy)
//! - `GET /lancamentos?usuario={id}` -> `[{mes, tipo, valor}]`
//!
//! Color API (base URL from `[color] base_url`):
//! - `GET /random` -> `{hex: {value}}`
//! - `GET /scheme?hex=&mode=analogic&count=5` -> `{colors: [{hex: {value}}]}`

mod color;
mod finance;
mod mock;
pub mod parsing;

pub use color::ColorClient;
pub use finance::FinanceClient;
pub use mock::MockBackend;

use async_trait::async_trait;

use crate::color::HexColor;
use crate::error::Result;
use crate::models::FinancialEntry;
use crate::palette::SchemeQuery;

/// Finance API operations
#[async_trait]
pub trait FinanceApi: Send + Sync {
    /// Authenticate with a JSON POST; returns the user identifier
    async fn authenticate(&self, email: &str, senha: &str) -> Result<String>;

    /// Authenticate via the legacy GET endpoint (credentials in the query string)
    async fn authenticate_legacy(&self, email: &str, senha: &str) -> Result<String>;

    /// Fetch all entries for a user
    async fn fetch_entries(&self, user_id: &str) -> Result<Vec<FinancialEntry>>;
}

/// Color API operations
#[async_trait]
pub trait ColorApi: Send + Sync {
    /// A random color chosen by the API
    async fn random_color(&self) -> Result<HexColor>;

    /// Ordered scheme colors for a query
    async fn scheme(&self, query: &SchemeQuery) -> Result<Vec<HexColor>>;
}
