use std::collections::HashMap;

use skucheck_core::{build_report, AssortmentRecord, ColumnNames, RunConfig, StockRow};
use tempfile::tempdir;

use super::*;

fn make_record(sku: &str, netta_id: &str, optional_id: &str) -> AssortmentRecord {
    AssortmentRecord {
        sku: sku.to_string(),
        netta_id: netta_id.to_string(),
        optional_id: optional_id.to_string(),
    }
}

fn make_row(barcode: &str, partner_id: &str, product_id: &str) -> StockRow {
    StockRow {
        barcode: barcode.to_string(),
        partner_id: partner_id.to_string(),
        product_id: product_id.to_string(),
    }
}

fn two_geo_report() -> Report {
    let config = RunConfig {
        geos: vec!["HK".to_string(), "US".to_string()],
        summary_geos: vec!["US".to_string()],
        columns: ColumnNames::default(),
    };
    let mut tables = HashMap::new();
    tables.insert("HK".to_string(), vec![make_row("A1", "", "17027339")]);
    tables.insert("US".to_string(), vec![make_row("", "N1", "99000001")]);

    let records = vec![make_record("A1", "N1", ""), make_record("ZZ", "", "")];
    build_report(&records, &tables, &config)
}

#[test]
fn written_csv_has_per_geo_and_summary_columns() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("out.csv");

    write_report(&two_geo_report(), &path).expect("failed to write report");

    let content = std::fs::read_to_string(&path).expect("failed to read output");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("SKU,HK product ID,HK match,US product ID,US match,SKU summary,Product ID summary")
    );

    let first = lines.next().expect("expected a data row");
    assert!(first.starts_with("A1,17027339,matched via SKU,99000001,"));
    assert!(first.contains("matched via partner product ID"));

    let second = lines.next().expect("expected a second data row");
    assert!(second.starts_with("ZZ,,no match,,no match,"));

    assert_eq!(lines.next(), None);
}

#[test]
fn row_count_matches_assortment_even_when_nothing_matches() {
    let config = RunConfig {
        geos: vec!["HK".to_string()],
        summary_geos: vec!["HK".to_string()],
        columns: ColumnNames::default(),
    };
    let records = vec![
        make_record("A1", "", ""),
        make_record("B2", "", ""),
        make_record("C3", "", ""),
    ];
    let report = build_report(&records, &HashMap::new(), &config);

    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("out.csv");
    write_report(&report, &path).expect("failed to write report");

    let content = std::fs::read_to_string(&path).expect("failed to read output");
    // Header plus one line per assortment record, in input order.
    let rows: Vec<&str> = content.lines().skip(1).collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with("A1,"));
    assert!(rows[1].starts_with("B2,"));
    assert!(rows[2].starts_with("C3,"));
}

#[test]
fn summary_cells_are_quoted_intact() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("out.csv");

    write_report(&two_geo_report(), &path).expect("failed to write report");

    let content = std::fs::read_to_string(&path).expect("failed to read output");
    assert!(content.contains("SKU exists in: HK. SKU missing from: US"));
    // Summary cells with comma-joined geo lists come back quoted.
    assert!(content.contains("\"Product ID exists in: HK, US\""));
}

#[test]
fn write_report_to_bad_path_reports_it() {
    let err = write_report(&two_geo_report(), std::path::Path::new("/no/such/dir/out.csv"))
        .unwrap_err();
    assert!(matches!(err, TableError::WriteIo { ref path, .. } if path.contains("out.csv")));
}

#[test]
fn preview_shows_header_and_limited_rows() {
    let preview = render_preview(&two_geo_report(), 1);
    let lines: Vec<&str> = preview.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("SKU"));
    assert!(lines[0].contains("HK"));
    assert!(lines[0].contains("US"));
    assert!(lines[1].starts_with("A1"));
    assert!(lines[1].contains("17027339"));
}

#[test]
fn preview_marks_unmatched_geos_with_a_dash() {
    let preview = render_preview(&two_geo_report(), 5);
    let lines: Vec<&str> = preview.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[2].starts_with("ZZ"));
    assert!(lines[2].contains('-'));
}

#[test]
fn preview_of_empty_report_is_just_the_header() {
    let config = RunConfig::default();
    let report = build_report(&[], &HashMap::new(), &config);
    let preview = render_preview(&report, 5);
    assert_eq!(preview.lines().count(), 1);
    assert!(preview.starts_with("SKU"));
}
