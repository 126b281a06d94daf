use customs_common::format_numeric;
use customs_model::{CheckConfig, Dataset, Finding, FindingCategory, Severity};

use super::{NumericCell, numeric_cell, parse_error_finding};

const CHECK: &str = "tax_consistency";

/// Recomputes the expected tax as `base * rate / 100` where both rate
/// and base are present, and flags rows whose declared tax deviates from
/// it beyond the configured tolerance.
pub fn tax_consistency(dataset: &Dataset, config: &CheckConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    for idx in 0..dataset.height() {
        let rate = match numeric_cell(dataset, &config.tax_rate, idx) {
            NumericCell::Missing => continue,
            NumericCell::Invalid(raw) => {
                findings.push(parse_error_finding(CHECK, dataset, &config.tax_rate, idx, &raw));
                continue;
            }
            NumericCell::Value(number) => number,
        };
        let base = match numeric_cell(dataset, &config.tax_base, idx) {
            NumericCell::Missing => continue,
            NumericCell::Invalid(raw) => {
                findings.push(parse_error_finding(CHECK, dataset, &config.tax_base, idx, &raw));
                continue;
            }
            NumericCell::Value(number) => number,
        };
        let declared = match numeric_cell(dataset, &config.tax_declared, idx) {
            NumericCell::Missing => continue,
            NumericCell::Invalid(raw) => {
                findings.push(parse_error_finding(
                    CHECK,
                    dataset,
                    &config.tax_declared,
                    idx,
                    &raw,
                ));
                continue;
            }
            NumericCell::Value(number) => number,
        };

        let expected = base * rate / 100.0;
        if !config.tolerance.within(declared, expected) {
            findings.push(Finding::row(
                CHECK,
                FindingCategory::Tax,
                Severity::Error,
                dataset.row_id(idx),
                Some(&config.tax_declared),
                format!(
                    "declared tax {} deviates from expected {} (rate {}%, base {})",
                    format_numeric(declared),
                    format_numeric(expected),
                    format_numeric(rate),
                    format_numeric(base)
                ),
            ));
        }
    }
    findings
}
