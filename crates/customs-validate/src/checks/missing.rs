use customs_common::is_missing_value;
use customs_model::{CheckConfig, Dataset, Finding, FindingCategory, Severity};

const CHECK: &str = "missing_values";

/// Flags every (row, column) pair where a required column is null or
/// blank. A required column absent from the dataset counts as all-null.
pub fn missing_values(dataset: &Dataset, config: &CheckConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    for column in &config.required_columns {
        for idx in 0..dataset.height() {
            let value = dataset.cell(column, idx);
            if !is_missing_value(&value) {
                continue;
            }
            findings.push(Finding::row(
                CHECK,
                FindingCategory::Missing,
                Severity::Error,
                dataset.row_id(idx),
                Some(column),
                format!("required value missing: {column} is blank"),
            ));
        }
    }
    findings
}
