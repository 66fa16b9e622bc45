//! CSV keyword dataset loader.
//!
//! Reads the static keyword dataset at startup. Any failure here is fatal:
//! the process must not start without its dataset.
//!
//! Expected columns: `industry`, `keywords`. Additional columns are ignored;
//! row order is preserved for resolution.

use std::path::Path;

use crate::domain::keywords::{KeywordRow, KeywordTable};

/// Errors that make the keyword dataset unusable.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to open keyword dataset at {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed keyword dataset row: {0}")]
    MalformedRow(#[from] csv::Error),

    #[error("Keyword dataset at {path} contains no rows")]
    Empty { path: String },
}

/// Loads the keyword table from a CSV file.
pub fn load_keyword_table(path: &Path) -> Result<KeywordTable, DatasetError> {
    let display_path = path.display().to_string();

    let mut reader = csv::Reader::from_path(path).map_err(|source| DatasetError::Unreadable {
        path: display_path.clone(),
        source,
    })?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<KeywordRow>() {
        rows.push(record?);
    }

    if rows.is_empty() {
        return Err(DatasetError::Empty { path: display_path });
    }

    Ok(KeywordTable::new(rows))
}
