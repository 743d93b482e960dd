//! Core joining logic for skucheck: domain records, the cascading matcher,
//! summary strings, and report assembly. This crate is pure; table loading
//! and serialization live in `skucheck-tables`.

use thiserror::Error;

mod config;
mod matcher;
mod records;
mod report;
mod summary;

pub use config::{load_run_config, ColumnNames, RunConfig};
pub use matcher::{match_record, StockIndex};
pub use records::{AssortmentRecord, MatchResult, MatchedVia, StockRow};
pub use report::{build_report, Report, ReportRow};
pub use summary::{identifier_summary, key_summary};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ConfigFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    ConfigFileParse(#[from] serde_yaml::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}
