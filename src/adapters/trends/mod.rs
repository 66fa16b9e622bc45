//! PPC benchmark scraping adapters.

mod databox;

pub use databox::{DataboxTrendScraper, TrendScraperConfig};
