use serde::{Deserialize, Serialize};

/// One row of the assortment reference table, with key fields already
/// normalized (trimmed, upper-cased) by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssortmentRecord {
    /// Primary join key, matched against [`StockRow::barcode`].
    pub sku: String,
    /// First fallback key ("Netta product ID"), matched against
    /// [`StockRow::partner_id`].
    pub netta_id: String,
    /// Second fallback key ("Optional product ID"), matched against
    /// [`StockRow::partner_id`].
    pub optional_id: String,
}

/// One row of a stock point export. Keys are pre-normalized like
/// [`AssortmentRecord`]'s; `product_id` is payload and keeps its case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRow {
    pub barcode: String,
    pub partner_id: String,
    /// The vendor product identifier returned when this row matches.
    pub product_id: String,
}

/// Which lookup in the cascade produced a match, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedVia {
    Sku,
    NettaId,
    OptionalId,
    None,
}

impl std::fmt::Display for MatchedVia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchedVia::Sku => write!(f, "matched via SKU"),
            MatchedVia::NettaId | MatchedVia::OptionalId => {
                write!(f, "matched via partner product ID, SKU missing")
            }
            MatchedVia::None => write!(f, "no match"),
        }
    }
}

/// The outcome of probing one stock table for one assortment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Vendor product identifier of the first matching row, if any.
    pub product_id: Option<String>,
    pub matched_via: MatchedVia,
}

impl MatchResult {
    /// The no-match result: no product identifier, [`MatchedVia::None`].
    #[must_use]
    pub fn none() -> Self {
        MatchResult {
            product_id: None,
            matched_via: MatchedVia::None,
        }
    }

    /// Returns `true` if any of the three cascade lookups succeeded.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.matched_via != MatchedVia::None
    }

    /// Returns `true` only for a primary-key (SKU/barcode) match.
    #[must_use]
    pub fn via_sku(&self) -> bool {
        self.matched_via == MatchedVia::Sku
    }
}
