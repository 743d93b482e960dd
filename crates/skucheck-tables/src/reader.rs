//! CSV decoding into core records.
//!
//! Readers are flexible about row width: short rows read their absent
//! cells as empty strings, which the matcher's blank guard then keeps out
//! of any join.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use skucheck_core::{AssortmentRecord, ColumnNames, StockRow};

use crate::columns::{field, normalize_key, normalize_value, resolve_columns};
use crate::TableError;

/// Read the assortment reference table.
///
/// # Errors
///
/// Returns `TableError` if the file cannot be opened or decoded, or if any
/// of the three required columns is absent from the header row.
pub fn read_assortment(
    path: &Path,
    columns: &ColumnNames,
) -> Result<Vec<AssortmentRecord>, TableError> {
    let wanted = [
        columns.sku.as_str(),
        columns.netta_id.as_str(),
        columns.optional_id.as_str(),
    ];
    read_rows(path, &wanted, |cells| AssortmentRecord {
        sku: normalize_key(cells[0]),
        netta_id: normalize_key(cells[1]),
        optional_id: normalize_key(cells[2]),
    })
}

/// Read one stock point export.
///
/// Join keys are normalized; the vendor product identifier is payload and
/// only trimmed.
///
/// # Errors
///
/// Returns `TableError` if the file cannot be opened or decoded, or if any
/// of the three required columns is absent from the header row.
pub fn read_stock_table(path: &Path, columns: &ColumnNames) -> Result<Vec<StockRow>, TableError> {
    let wanted = [
        columns.barcode.as_str(),
        columns.partner_id.as_str(),
        columns.product_id.as_str(),
    ];
    read_rows(path, &wanted, |cells| StockRow {
        barcode: normalize_key(cells[0]),
        partner_id: normalize_key(cells[1]),
        product_id: normalize_value(cells[2]),
    })
}

/// Shared reader skeleton: open, resolve the wanted headers, then map each
/// data row's resolved cells through `build`.
fn read_rows<T>(
    path: &Path,
    wanted: &[&str],
    build: impl Fn(&[&str; 3]) -> T,
) -> Result<Vec<T>, TableError> {
    let display = path.display().to_string();

    let file = File::open(path).map_err(|e| TableError::FileIo {
        path: display.clone(),
        source: e,
    })?;

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| TableError::Decode {
            path: display.clone(),
            source: e,
        })?
        .clone();
    let indexes = resolve_columns(&headers, wanted, &display)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| TableError::Decode {
            path: display.clone(),
            source: e,
        })?;
        let cells = [
            field(&record, indexes[0]),
            field(&record, indexes[1]),
            field(&record, indexes[2]),
        ];
        rows.push(build(&cells));
    }

    Ok(rows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "reader_test.rs"]
mod tests;
