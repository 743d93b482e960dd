//! Report serialization: the output CSV and the post-run stdout preview.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use skucheck_core::Report;

use crate::TableError;

/// Write the joined report as a CSV file.
///
/// Header layout: `SKU`, then per geo `"<geo> product ID"` and
/// `"<geo> match"`, then the two summary columns.
///
/// # Errors
///
/// Returns `TableError` if the file cannot be created or written.
pub fn write_report(report: &Report, path: &Path) -> Result<(), TableError> {
    let display = path.display().to_string();

    let file = File::create(path).map_err(|e| TableError::WriteIo {
        path: display.clone(),
        source: e,
    })?;
    let mut writer = Writer::from_writer(file);

    let mut header = vec!["SKU".to_string()];
    for geo in &report.geos {
        header.push(format!("{geo} product ID"));
        header.push(format!("{geo} match"));
    }
    header.push("SKU summary".to_string());
    header.push("Product ID summary".to_string());
    write_row(&mut writer, &header, &display)?;

    for row in &report.rows {
        let mut cells = vec![row.sku.clone()];
        for result in &row.matches {
            cells.push(result.product_id.clone().unwrap_or_default());
            cells.push(result.matched_via.to_string());
        }
        cells.push(row.key_summary.clone());
        cells.push(row.identifier_summary.clone());
        write_row(&mut writer, &cells, &display)?;
    }

    writer.flush().map_err(|e| TableError::WriteIo {
        path: display,
        source: e,
    })?;

    Ok(())
}

fn write_row(writer: &mut Writer<File>, cells: &[String], path: &str) -> Result<(), TableError> {
    writer.write_record(cells).map_err(|e| TableError::Encode {
        path: path.to_string(),
        source: e,
    })
}

/// Render the first `limit` rows as aligned plain text: the SKU and each
/// geo's resolved product identifier (`-` when unmatched). Mirrors the
/// original tool's head-of-table print after a run.
#[must_use]
pub fn render_preview(report: &Report, limit: usize) -> String {
    let shown = &report.rows[..report.rows.len().min(limit)];

    let mut columns: Vec<Vec<String>> = Vec::with_capacity(report.geos.len() + 1);
    columns.push(
        std::iter::once("SKU".to_string())
            .chain(shown.iter().map(|row| row.sku.clone()))
            .collect(),
    );
    for (position, geo) in report.geos.iter().enumerate() {
        columns.push(
            std::iter::once(geo.clone())
                .chain(shown.iter().map(|row| {
                    row.matches[position]
                        .product_id
                        .clone()
                        .unwrap_or_else(|| "-".to_string())
                }))
                .collect(),
        );
    }

    let widths: Vec<usize> = columns
        .iter()
        .map(|column| column.iter().map(String::len).max().unwrap_or(0))
        .collect();

    let mut lines = Vec::with_capacity(shown.len() + 1);
    for line_index in 0..=shown.len() {
        let line: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| format!("{:<width$}", column[line_index]))
            .collect();
        lines.push(line.join("  ").trim_end().to_string());
    }
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
