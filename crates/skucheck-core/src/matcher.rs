//! The cascading matcher: per-table lookup indexes and the three-step
//! key cascade that resolves one assortment record against one stock table.
//!
//! Keys are compared by exact equality; the loader has already trimmed and
//! upper-cased them. The only normalization concern owned here is the
//! blank guard: an empty key on either side never participates in a match,
//! so missing data in both sources cannot join spuriously.

use std::collections::HashMap;

use crate::records::{AssortmentRecord, MatchResult, MatchedVia, StockRow};

/// Lookup indexes over one stock point export, built once per table and
/// probed once per assortment record.
///
/// Duplicate keys resolve to the earliest row in the table's original
/// order: insertion skips keys already present, so later rows never
/// overwrite. The maps are only probed, never iterated, which keeps the
/// tie-break independent of hash ordering.
#[derive(Debug, Default)]
pub struct StockIndex {
    by_barcode: HashMap<String, String>,
    by_partner_id: HashMap<String, String>,
}

impl StockIndex {
    /// Index a stock table's rows. Blank keys are never indexed.
    #[must_use]
    pub fn build(rows: &[StockRow]) -> Self {
        let mut index = StockIndex::default();
        for row in rows {
            insert_first(&mut index.by_barcode, &row.barcode, &row.product_id);
            insert_first(&mut index.by_partner_id, &row.partner_id, &row.product_id);
        }
        index
    }

    /// Returns `true` if no row contributed a usable key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_barcode.is_empty() && self.by_partner_id.is_empty()
    }

    fn barcode(&self, key: &str) -> Option<&str> {
        probe(&self.by_barcode, key)
    }

    fn partner_id(&self, key: &str) -> Option<&str> {
        probe(&self.by_partner_id, key)
    }
}

/// Resolve one assortment record against one stock table.
///
/// The cascade tries three independent lookups in strict order and stops
/// at the first hit:
/// 1. `sku` against the barcode index → [`MatchedVia::Sku`]
/// 2. `netta_id` against the partner-identifier index → [`MatchedVia::NettaId`]
/// 3. `optional_id` against the partner-identifier index → [`MatchedVia::OptionalId`]
///
/// No hit yields [`MatchResult::none`]. A key lookup always wins over the
/// fallbacks when it matches, even if they would match too.
#[must_use]
pub fn match_record(record: &AssortmentRecord, index: &StockIndex) -> MatchResult {
    if let Some(product_id) = index.barcode(&record.sku) {
        return hit(product_id, MatchedVia::Sku);
    }
    if let Some(product_id) = index.partner_id(&record.netta_id) {
        return hit(product_id, MatchedVia::NettaId);
    }
    if let Some(product_id) = index.partner_id(&record.optional_id) {
        return hit(product_id, MatchedVia::OptionalId);
    }
    MatchResult::none()
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// First-occurrence-wins insertion; blank keys are dropped.
fn insert_first(map: &mut HashMap<String, String>, key: &str, value: &str) {
    if key.is_empty() || map.contains_key(key) {
        return;
    }
    map.insert(key.to_string(), value.to_string());
}

/// Keyed lookup with the blank guard: an empty probe never matches.
fn probe<'a>(map: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    if key.is_empty() {
        return None;
    }
    map.get(key).map(String::as_str)
}

fn hit(product_id: &str, matched_via: MatchedVia) -> MatchResult {
    MatchResult {
        product_id: Some(product_id.to_string()),
        matched_via,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
