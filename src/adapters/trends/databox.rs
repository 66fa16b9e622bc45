//! Databox benchmark scraper - TrendSource implementation.
//!
//! Fetches the PPC industry benchmarks page and extracts the first HTML
//! table: header row skipped, first two cell texts per row taken as
//! `(industry, cost_per_click)`, trimmed of surrounding whitespace.
//!
//! A reachable page without a table is a `ScrapeError::MissingTable`; a
//! table with only a header row yields an empty report. Rows with fewer
//! than two cells are skipped.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

use crate::ports::{ScrapeError, TrendRow, TrendSource};

static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("static selector"));
static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("static selector"));
static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td, th").expect("static selector"));

/// Configuration for the benchmark scraper.
#[derive(Debug, Clone)]
pub struct TrendScraperConfig {
    /// Page holding the benchmark table.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl TrendScraperConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(20),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for TrendScraperConfig {
    fn default() -> Self {
        Self::new("https://databox.com/ppc-industry-benchmarks")
    }
}

/// Scraper for the Databox PPC industry benchmarks page.
pub struct DataboxTrendScraper {
    config: TrendScraperConfig,
    client: Client,
}

impl DataboxTrendScraper {
    pub fn new(config: TrendScraperConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }
}

#[async_trait]
impl TrendSource for DataboxTrendScraper {
    async fn fetch_trends(&self) -> Result<Vec<TrendRow>, ScrapeError> {
        let response = self
            .client
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ScrapeError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else {
                    ScrapeError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        parse_benchmark_table(&body)
    }
}

/// Extracts benchmark rows from the first table in an HTML document.
pub fn parse_benchmark_table(html: &str) -> Result<Vec<TrendRow>, ScrapeError> {
    let document = Html::parse_document(html);

    let table = document
        .select(&TABLE_SELECTOR)
        .next()
        .ok_or(ScrapeError::MissingTable)?;

    let rows = table
        .select(&ROW_SELECTOR)
        .skip(1) // header row
        .filter_map(parse_row)
        .collect();

    Ok(rows)
}

fn parse_row(row: ElementRef<'_>) -> Option<TrendRow> {
    let mut cells = row.select(&CELL_SELECTOR);
    let industry = cell_text(cells.next()?);
    let cost_per_click = cell_text(cells.next()?);
    Some(TrendRow::new(industry, cost_per_click))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
