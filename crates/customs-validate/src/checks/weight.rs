use customs_common::format_numeric;
use customs_model::{CheckConfig, Dataset, Finding, FindingCategory, Severity};

use super::{NumericCell, numeric_cell, parse_error_finding};

const CHECK: &str = "weight_consistency";

/// Gross weight must be at least the net weight by physical definition.
/// Rows where either weight is null are never flagged; non-numeric
/// weight text becomes a `parse-error` finding instead.
pub fn weight_consistency(dataset: &Dataset, config: &CheckConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    for idx in 0..dataset.height() {
        let gross = match numeric_cell(dataset, &config.gross_weight, idx) {
            NumericCell::Missing => continue,
            NumericCell::Invalid(raw) => {
                findings.push(parse_error_finding(
                    CHECK,
                    dataset,
                    &config.gross_weight,
                    idx,
                    &raw,
                ));
                continue;
            }
            NumericCell::Value(number) => number,
        };
        let net = match numeric_cell(dataset, &config.net_weight, idx) {
            NumericCell::Missing => continue,
            NumericCell::Invalid(raw) => {
                findings.push(parse_error_finding(
                    CHECK,
                    dataset,
                    &config.net_weight,
                    idx,
                    &raw,
                ));
                continue;
            }
            NumericCell::Value(number) => number,
        };
        if gross < net {
            findings.push(Finding::row(
                CHECK,
                FindingCategory::Weight,
                Severity::Error,
                dataset.row_id(idx),
                Some(&config.gross_weight),
                format!(
                    "gross weight {} below net weight {}",
                    format_numeric(gross),
                    format_numeric(net)
                ),
            ));
        }
    }
    findings
}
