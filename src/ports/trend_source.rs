//! Trend Source Port - Interface for PPC benchmark data.
//!
//! Independent of the dialogue state machine: the trend report command
//! fetches current cost-per-click figures on demand.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One benchmark row: an industry and its advertised cost-per-click figure,
/// both kept as display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendRow {
    pub industry: String,
    pub cost_per_click: String,
}

impl TrendRow {
    pub fn new(industry: impl Into<String>, cost_per_click: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            cost_per_click: cost_per_click.into(),
        }
    }
}

/// Errors that can occur while fetching or parsing benchmark data.
///
/// Failure conditions are distinct from empty results: a reachable page
/// whose table has only a header row yields `Ok(vec![])`.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },

    #[error("unexpected response status: {status}")]
    Status { status: u16 },

    #[error("no benchmark table found in page")]
    MissingTable,

    #[error("failed to parse benchmark page: {0}")]
    Parse(String),
}

/// Port for fetching the current benchmark table.
#[async_trait]
pub trait TrendSource: Send + Sync {
    /// Fetches `(industry, cost_per_click)` rows in page order.
    async fn fetch_trends(&self) -> Result<Vec<TrendRow>, ScrapeError>;
}
