//! Painel Core Library
//!
//! Shared functionality for the Painel finance dashboard and color tool:
//! - Monthly aggregation of income/expense entries
//! - Hex color validation and luminance-based text contrast
//! - Analogic palette query construction
//! - HTTP clients for the finance API and the color API
//! - Session persistence for the logged-in user identifier
//! - Layered configuration (embedded defaults, override file, env)

pub mod aggregate;
pub mod api;
pub mod color;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod generator;
pub mod models;
pub mod palette;
pub mod session;

/// Test utilities including a mock finance/color API server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use aggregate::aggregate;
pub use api::{ColorApi, ColorClient, FinanceApi, FinanceClient, MockBackend};
pub use color::{classify, random_color, ContrastDecision, HexColor, Rgb};
pub use config::Config;
pub use dashboard::Dashboard;
pub use error::{Error, Result};
pub use format::format_brl;
pub use generator::{ColorGenerator, Generated};
pub use models::{EntryKind, FinancialEntry, FinancialTotals, LineChart, MonthlySummary};
pub use palette::{build_scheme_query, Palette, SchemeMode, SchemeQuery};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
