use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Display names of the required columns. The semantic roles are fixed;
/// only the header text a deployment uses for them varies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    /// Assortment: primary join key column.
    #[serde(default = "default_sku_column")]
    pub sku: String,
    /// Assortment: first fallback identifier column.
    #[serde(default = "default_netta_column")]
    pub netta_id: String,
    /// Assortment: second fallback identifier column.
    #[serde(default = "default_optional_column")]
    pub optional_id: String,
    /// Stock export: barcode column (matched against the SKU).
    #[serde(default = "default_barcode_column")]
    pub barcode: String,
    /// Stock export: vendor product identifier column (the value returned
    /// on match).
    #[serde(default = "default_product_id_column")]
    pub product_id: String,
    /// Stock export: partner product identifier column (matched against
    /// the fallback identifiers).
    #[serde(default = "default_partner_id_column")]
    pub partner_id: String,
}

fn default_sku_column() -> String {
    "SKU".to_string()
}

fn default_netta_column() -> String {
    "Netta product ID".to_string()
}

fn default_optional_column() -> String {
    "Optional product ID".to_string()
}

fn default_barcode_column() -> String {
    "Partner barcode".to_string()
}

fn default_product_id_column() -> String {
    "Product ID".to_string()
}

fn default_partner_id_column() -> String {
    "Partner product ID".to_string()
}

impl Default for ColumnNames {
    fn default() -> Self {
        ColumnNames {
            sku: default_sku_column(),
            netta_id: default_netta_column(),
            optional_id: default_optional_column(),
            barcode: default_barcode_column(),
            product_id: default_product_id_column(),
            partner_id: default_partner_id_column(),
        }
    }
}

/// Per-run configuration: the closed geo set, the subset reported as
/// "missing" in summaries, and the column display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// All geo codes considered for matching, in output-column order.
    #[serde(default = "default_geos")]
    pub geos: Vec<String>,
    /// Geos that may appear in "missing from" summary clauses. Must be a
    /// subset of `geos`.
    #[serde(default = "default_summary_geos")]
    pub summary_geos: Vec<String>,
    #[serde(default)]
    pub columns: ColumnNames,
}

fn default_geos() -> Vec<String> {
    ["HK", "US", "DE", "CH", "JP", "AU"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_summary_geos() -> Vec<String> {
    ["AU", "CH", "HK", "US"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            geos: default_geos(),
            summary_geos: default_summary_geos(),
            columns: ColumnNames::default(),
        }
    }
}

/// Load and validate a run configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_run_config(path: &Path) -> Result<RunConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ConfigFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: RunConfig = serde_yaml::from_str(&content).map_err(ConfigError::ConfigFileParse)?;

    validate_run_config(&config)?;

    Ok(config)
}

fn validate_run_config(config: &RunConfig) -> Result<(), ConfigError> {
    if config.geos.is_empty() {
        return Err(ConfigError::Validation(
            "geo set must be non-empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for geo in &config.geos {
        if geo.is_empty() || !geo.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
            return Err(ConfigError::Validation(format!(
                "geo code '{geo}' must be upper-case ASCII letters or digits"
            )));
        }
        if !seen.insert(geo.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate geo code '{geo}'"
            )));
        }
    }

    let mut seen_summary = HashSet::new();
    for geo in &config.summary_geos {
        if !config.geos.iter().any(|g| g == geo) {
            return Err(ConfigError::Validation(format!(
                "summary geo '{geo}' is not in the geo set"
            )));
        }
        if !seen_summary.insert(geo.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate summary geo '{geo}'"
            )));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
