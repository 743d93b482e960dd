//! Report assembly: the left join of the assortment over every configured
//! geo, one output row per input record, in input order.

use std::collections::HashMap;

use crate::config::RunConfig;
use crate::matcher::{match_record, StockIndex};
use crate::records::{AssortmentRecord, MatchResult, StockRow};
use crate::summary::{identifier_summary, key_summary};

/// One output row. `matches` is parallel to [`Report::geos`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub sku: String,
    pub matches: Vec<MatchResult>,
    pub key_summary: String,
    pub identifier_summary: String,
}

/// The joined output table, plus the geo order its rows were built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Configured geo order; every row's `matches` follows it.
    pub geos: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Number of records matched (via any cascade path) in `geo`.
    /// Returns 0 for an unknown geo.
    #[must_use]
    pub fn match_count(&self, geo: &str) -> usize {
        let Some(position) = self.geos.iter().position(|g| g == geo) else {
            return 0;
        };
        self.rows
            .iter()
            .filter(|row| row.matches[position].is_match())
            .count()
    }
}

/// Join `records` against the loaded stock tables.
///
/// Each table is indexed once, then probed per record. A configured geo
/// with no entry in `tables` is probed against an empty index, so every
/// record resolves to no match there; a missing table is not an error.
#[must_use]
pub fn build_report(
    records: &[AssortmentRecord],
    tables: &HashMap<String, Vec<StockRow>>,
    config: &RunConfig,
) -> Report {
    let indexes: Vec<(String, StockIndex)> = config
        .geos
        .iter()
        .map(|geo| {
            let index = tables
                .get(geo)
                .map_or_else(StockIndex::default, |rows| StockIndex::build(rows));
            (geo.clone(), index)
        })
        .collect();

    let rows = records
        .iter()
        .map(|record| {
            let results: Vec<(String, MatchResult)> = indexes
                .iter()
                .map(|(geo, index)| (geo.clone(), match_record(record, index)))
                .collect();

            let key_summary = key_summary(&results, &config.summary_geos);
            let identifier_summary = identifier_summary(&results, &config.summary_geos);

            ReportRow {
                sku: record.sku.clone(),
                matches: results.into_iter().map(|(_, result)| result).collect(),
                key_summary,
                identifier_summary,
            }
        })
        .collect();

    Report {
        geos: config.geos.clone(),
        rows,
    }
}
