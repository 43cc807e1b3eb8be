//! Finance dashboard state
//!
//! Fetches the session user's entries and derives the summary cards and the
//! monthly evolution chart.

use serde::Serialize;
use tracing::{info, warn};

use crate::aggregate::aggregate;
use crate::api::FinanceApi;
use crate::error::{Error, Result};
use crate::models::{FinancialTotals, LineChart, MonthlySummary};
use crate::session::Session;

/// Everything the dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub summary: MonthlySummary,
    pub totals: FinancialTotals,
    pub chart: LineChart,
    /// Number of entries the figures were derived from
    pub entry_count: usize,
}

impl Dashboard {
    /// All-zero dashboard, shown while nothing could be loaded
    pub fn empty() -> Self {
        let summary = MonthlySummary::new();
        Self {
            chart: LineChart::from_summary(&summary),
            summary,
            totals: FinancialTotals::default(),
            entry_count: 0,
        }
    }

    /// Fetch and aggregate the entries of the session user
    pub async fn load(api: &dyn FinanceApi, session: &Session) -> Result<Self> {
        let entries = api.fetch_entries(session.user_id()).await?;
        let (summary, totals) = aggregate(&entries)?;
        info!(
            "Loaded dashboard for user {}: {} entries",
            session.user_id(),
            entries.len()
        );
        Ok(Self {
            chart: LineChart::from_summary(&summary),
            summary,
            totals,
            entry_count: entries.len(),
        })
    }

    /// Like `load`, but any failure degrades to the empty dashboard
    ///
    /// Returns the error alongside so the caller can notify the user.
    pub async fn load_or_empty(
        api: &dyn FinanceApi,
        session: &Session,
    ) -> (Self, Option<Error>) {
        match Self::load(api, session).await {
            Ok(dashboard) => (dashboard, None),
            Err(e) => {
                warn!("Failed to load dashboard: {}", e);
                (Self::empty(), Some(e))
            }
        }
    }
}
