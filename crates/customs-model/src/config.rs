use serde::{Deserialize, Serialize};

use crate::columns;

/// Tolerance policy for the tax-consistency check.
///
/// Whether the threshold should be absolute or relative is a product
/// decision, so both are expressible. The default is `Absolute(0.01)`,
/// one kuruş of slack for rounding in the declared figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode", content = "threshold")]
pub enum Tolerance {
    /// Maximum allowed `|declared - expected|`.
    Absolute(f64),
    /// Maximum allowed `|declared - expected| / |expected|`.
    Relative(f64),
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Absolute(0.01)
    }
}

impl Tolerance {
    /// True when `declared` is acceptably close to `expected`.
    pub fn within(self, declared: f64, expected: f64) -> bool {
        let deviation = (declared - expected).abs();
        match self {
            Tolerance::Absolute(threshold) => deviation <= threshold,
            Tolerance::Relative(threshold) => deviation <= threshold * expected.abs(),
        }
    }
}

/// Column bindings and thresholds for the check battery.
///
/// Defaults bind the canonical column names from [`columns`]; callers
/// with differently-shaped exports rebind fields instead of renaming
/// their data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Columns that must be populated on every row.
    pub required_columns: Vec<String>,
    /// Key columns for the duplicate check.
    pub duplicate_keys: Vec<String>,
    pub gross_weight: String,
    pub net_weight: String,
    pub amount_column: String,
    pub currency_column: String,
    pub tax_rate: String,
    pub tax_base: String,
    pub tax_declared: String,
    pub tolerance: Tolerance,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            required_columns: vec![
                columns::GTIP.to_string(),
                columns::ORIGIN_COUNTRY.to_string(),
                columns::REGIME.to_string(),
            ],
            duplicate_keys: vec![
                columns::DECLARATION_NO.to_string(),
                columns::ITEM_NO.to_string(),
            ],
            gross_weight: columns::GROSS_WEIGHT.to_string(),
            net_weight: columns::NET_WEIGHT.to_string(),
            amount_column: columns::INVOICE_AMOUNT.to_string(),
            currency_column: columns::INVOICE_CURRENCY.to_string(),
            tax_rate: columns::TAX_RATE.to_string(),
            tax_base: columns::TAX_BASE.to_string(),
            tax_declared: columns::TAX_DECLARED.to_string(),
            tolerance: Tolerance::default(),
        }
    }
}
