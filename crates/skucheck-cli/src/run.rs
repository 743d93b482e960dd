//! The `run` subcommand: associate stock exports with geos, load the
//! tables, build the report, and write the output.
//!
//! Structural problems (unreadable assortment, missing required columns,
//! invalid config) abort the run. Association problems degrade: a stock
//! argument that does not parse as `GEO=PATH`, names a geo outside the
//! configured set, or repeats a geo is skipped with a warning, and every
//! record simply reports no match for that geo.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use skucheck_core::{build_report, load_run_config, RunConfig, StockRow};
use skucheck_tables::{read_assortment, read_stock_table, render_preview, write_report};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Path to the assortment CSV
    #[arg(long)]
    pub assortment: PathBuf,

    /// Stock point export as GEO=PATH (repeatable)
    #[arg(long = "stock", value_name = "GEO=PATH")]
    pub stock: Vec<String>,

    /// Path to a YAML run configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output CSV path
    #[arg(long, default_value = "skucheck_output.csv")]
    pub output: PathBuf,

    /// Rows to preview on stdout after the run (0 disables)
    #[arg(long, default_value_t = 5)]
    pub preview: usize,
}

/// Execute the join end to end.
///
/// # Errors
///
/// Returns an error when the config or assortment cannot be loaded, when a
/// successfully associated stock table fails structurally (missing
/// columns, unreadable file), or when the output cannot be written.
pub fn execute(args: &RunArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;

    let records = read_assortment(&args.assortment, &config.columns).with_context(|| {
        format!(
            "failed to load assortment table {}",
            args.assortment.display()
        )
    })?;
    tracing::info!(records = records.len(), "assortment loaded");

    let tables = load_stock_tables(&args.stock, &config)?;

    let report = build_report(&records, &tables, &config);
    for geo in &report.geos {
        tracing::info!(
            geo = %geo,
            matched = report.match_count(geo),
            loaded = tables.contains_key(geo),
            "geo processed"
        );
    }

    write_report(&report, &args.output)
        .with_context(|| format!("failed to write output {}", args.output.display()))?;
    tracing::info!(
        path = %args.output.display(),
        rows = report.rows.len(),
        "output written"
    );

    if args.preview > 0 {
        println!("{}", render_preview(&report, args.preview));
    }

    Ok(())
}

/// Print the configured geo set and summary subset.
///
/// # Errors
///
/// Returns an error when the config file cannot be loaded.
pub fn print_geos(config: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config)?;
    println!("geos: {}", config.geos.join(", "));
    println!("summary geos: {}", config.summary_geos.join(", "));
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<RunConfig> {
    match path {
        Some(path) => load_run_config(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(RunConfig::default()),
    }
}

/// Associate and load the stock exports named on the command line.
///
/// Association failures are skipped with a warning; load failures on an
/// associated table are structural and abort.
fn load_stock_tables(
    specs: &[String],
    config: &RunConfig,
) -> anyhow::Result<HashMap<String, Vec<StockRow>>> {
    let mut tables = HashMap::new();
    for spec in specs {
        let Some((geo, path)) = parse_stock_spec(spec) else {
            tracing::warn!(spec = %spec, "skipping stock argument, expected GEO=PATH");
            continue;
        };
        if !config.geos.iter().any(|g| *g == geo) {
            tracing::warn!(geo = %geo, "skipping stock table, geo is not in the configured set");
            continue;
        }
        if tables.contains_key(&geo) {
            tracing::warn!(geo = %geo, "skipping stock table, geo already associated");
            continue;
        }

        let path = Path::new(path);
        let rows = read_stock_table(path, &config.columns)
            .with_context(|| format!("failed to load stock table {}", path.display()))?;
        tracing::info!(geo = %geo, rows = rows.len(), "stock table loaded");
        tables.insert(geo, rows);
    }
    Ok(tables)
}

/// Split a `GEO=PATH` argument. The geo token is trimmed and upper-cased;
/// `None` means the argument cannot be associated.
fn parse_stock_spec(spec: &str) -> Option<(String, &str)> {
    let (geo, path) = spec.split_once('=')?;
    let geo = geo.trim().to_uppercase();
    if geo.is_empty() || path.is_empty() {
        return None;
    }
    Some((geo, path))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
