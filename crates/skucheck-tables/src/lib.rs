//! Table I/O for skucheck: CSV decoding into core records, required-column
//! validation, key normalization, and report serialization.
//!
//! Everything here deals in strings. Cells are read as text whatever they
//! look like, so numeric-looking identifiers never lose leading zeros and
//! malformed values never raise, they just fail to match.

use thiserror::Error;

mod columns;
mod export;
mod reader;

pub use columns::normalize_key;
pub use export::{render_preview, write_report};
pub use reader::{read_assortment, read_stock_table};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("{path} is missing required column(s): {}", .columns.join(", "))]
    MissingColumns { path: String, columns: Vec<String> },
    #[error("failed to write {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write {path}: {source}")]
    WriteIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
