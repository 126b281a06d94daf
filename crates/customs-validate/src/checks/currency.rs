use customs_common::{any_to_string_non_empty, format_numeric};
use customs_model::{CheckConfig, Dataset, Finding, FindingCategory, Severity};

use super::{NumericCell, numeric_cell, parse_error_finding};

const CHECK: &str = "currency_amounts";

/// A declared amount must be positive and must carry a currency code.
/// Rows without an amount are skipped; both conditions are reported
/// independently when they co-occur.
pub fn currency_amounts(dataset: &Dataset, config: &CheckConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    for idx in 0..dataset.height() {
        let amount = match numeric_cell(dataset, &config.amount_column, idx) {
            NumericCell::Missing => continue,
            NumericCell::Invalid(raw) => {
                findings.push(parse_error_finding(
                    CHECK,
                    dataset,
                    &config.amount_column,
                    idx,
                    &raw,
                ));
                continue;
            }
            NumericCell::Value(number) => number,
        };

        if amount <= 0.0 {
            findings.push(Finding::row(
                CHECK,
                FindingCategory::Currency,
                Severity::Error,
                dataset.row_id(idx),
                Some(&config.amount_column),
                format!("non-positive declared amount: {}", format_numeric(amount)),
            ));
        }

        let code = any_to_string_non_empty(dataset.cell(&config.currency_column, idx));
        if code.is_none() {
            findings.push(Finding::row(
                CHECK,
                FindingCategory::Currency,
                Severity::Error,
                dataset.row_id(idx),
                Some(&config.currency_column),
                format!(
                    "amount {} declared without a currency code",
                    format_numeric(amount)
                ),
            ));
        }
    }
    findings
}
