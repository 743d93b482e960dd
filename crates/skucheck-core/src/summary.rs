//! Per-record existence/absence summary strings, aggregated across all
//! configured geos.
//!
//! "Exists" lists draw from every geo with a result; "missing" lists are
//! restricted to the configured summary subset, so geos outside it are
//! never reported as absent. Geo lists render comma-joined in sorted
//! order, and an empty exists-list renders the literal token `none` so the
//! output file never contains an ambiguous empty cell.

use crate::records::MatchResult;

/// Summary of primary-key (SKU/barcode) existence by geo.
///
/// Only [`MatchedVia::Sku`](crate::MatchedVia::Sku) counts as existing;
/// a record reachable solely through a fallback identifier is still
/// "missing" here.
#[must_use]
pub fn key_summary(results: &[(String, MatchResult)], summary_geos: &[String]) -> String {
    build_summary("SKU", results, summary_geos, MatchResult::via_sku)
}

/// Summary of identifier existence by geo: any of the three cascade paths
/// counts as existing.
#[must_use]
pub fn identifier_summary(results: &[(String, MatchResult)], summary_geos: &[String]) -> String {
    build_summary("Product ID", results, summary_geos, MatchResult::is_match)
}

fn build_summary(
    noun: &str,
    results: &[(String, MatchResult)],
    summary_geos: &[String],
    exists: impl Fn(&MatchResult) -> bool,
) -> String {
    let mut exists_in: Vec<&str> = results
        .iter()
        .filter(|(_, result)| exists(result))
        .map(|(geo, _)| geo.as_str())
        .collect();
    exists_in.sort_unstable();

    // A summary geo with no result at all (no table loaded) is missing too.
    let mut missing_from: Vec<&str> = summary_geos
        .iter()
        .filter(|geo| {
            !results
                .iter()
                .any(|(code, result)| code == *geo && exists(result))
        })
        .map(String::as_str)
        .collect();
    missing_from.sort_unstable();

    let exists_list = if exists_in.is_empty() {
        "none".to_string()
    } else {
        exists_in.join(", ")
    };

    if missing_from.is_empty() {
        format!("{noun} exists in: {exists_list}")
    } else {
        format!(
            "{noun} exists in: {exists_list}. {noun} missing from: {}",
            missing_from.join(", ")
        )
    }
}
