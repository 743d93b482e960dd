//! Header-role resolution and key normalization.

use csv::StringRecord;

use crate::TableError;

/// Normalize a key cell for matching: trim surrounding whitespace and
/// upper-case. Applied to every join-key cell on both sides before the
/// core ever sees it.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Trim a payload cell without changing its case.
#[must_use]
pub(crate) fn normalize_value(raw: &str) -> String {
    raw.trim().to_string()
}

/// Locate each wanted column in the header row by display name, comparing
/// trimmed and case-insensitively. Returns the indexes in `wanted` order,
/// or an error naming every column that could not be found.
pub(crate) fn resolve_columns(
    headers: &StringRecord,
    wanted: &[&str],
    path: &str,
) -> Result<Vec<usize>, TableError> {
    let mut indexes = Vec::with_capacity(wanted.len());
    let mut missing = Vec::new();

    for name in wanted {
        match headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(name.trim()))
        {
            Some(index) => indexes.push(index),
            None => missing.push((*name).to_string()),
        }
    }

    if missing.is_empty() {
        Ok(indexes)
    } else {
        Err(TableError::MissingColumns {
            path: path.to_string(),
            columns: missing,
        })
    }
}

/// Fetch a cell by index; cells absent from short rows read as empty.
pub(crate) fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> StringRecord {
        StringRecord::from(names.to_vec())
    }

    #[test]
    fn normalize_key_trims_and_uppercases() {
        assert_eq!(normalize_key("  ab-123 \t"), "AB-123");
        assert_eq!(normalize_key("sku"), "SKU");
        assert_eq!(normalize_key("   "), "");
    }

    #[test]
    fn normalize_value_preserves_case() {
        assert_eq!(normalize_value("  MixedCase99 "), "MixedCase99");
    }

    #[test]
    fn resolve_columns_finds_headers_in_any_order() {
        let headers = headers(&["Optional product ID", "SKU", "Netta product ID"]);
        let indexes = resolve_columns(
            &headers,
            &["SKU", "Netta product ID", "Optional product ID"],
            "assortment.csv",
        )
        .expect("expected all columns resolved");
        assert_eq!(indexes, vec![1, 2, 0]);
    }

    #[test]
    fn resolve_columns_ignores_case_and_padding() {
        let headers = headers(&[" sku ", "NETTA PRODUCT ID"]);
        let indexes = resolve_columns(&headers, &["SKU", "Netta product ID"], "assortment.csv")
            .expect("expected all columns resolved");
        assert_eq!(indexes, vec![0, 1]);
    }

    #[test]
    fn resolve_columns_names_every_missing_column() {
        let headers = headers(&["SKU"]);
        let err = resolve_columns(
            &headers,
            &["SKU", "Netta product ID", "Optional product ID"],
            "assortment.csv",
        )
        .unwrap_err();
        let message = err.to_string();
        assert_eq!(
            message,
            "assortment.csv is missing required column(s): Netta product ID, Optional product ID"
        );
    }

    #[test]
    fn field_reads_missing_cells_as_empty() {
        let record = StringRecord::from(vec!["only"]);
        assert_eq!(field(&record, 0), "only");
        assert_eq!(field(&record, 5), "");
    }
}
