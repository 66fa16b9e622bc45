//! Keyword dataset adapters.

mod csv_loader;

pub use csv_loader::{load_keyword_table, DatasetError};
