use std::collections::HashMap;

use customs_common::any_to_string;
use customs_model::{CheckConfig, Dataset, Finding, FindingCategory, Severity};

const CHECK: &str = "duplicate_rows";

/// Groups rows by the configured key columns and flags every row beyond
/// the first of a group: a group of size k yields k-1 findings, each
/// referencing the duplicate key.
pub fn duplicate_rows(dataset: &Dataset, config: &CheckConfig) -> Vec<Finding> {
    if config.duplicate_keys.is_empty() {
        return Vec::new();
    }

    let mut findings = Vec::new();
    let mut first_seen: HashMap<Vec<String>, i64> = HashMap::new();
    for idx in 0..dataset.height() {
        let key: Vec<String> = config
            .duplicate_keys
            .iter()
            .map(|column| any_to_string(dataset.cell(column, idx)).trim().to_string())
            .collect();
        match first_seen.get(&key) {
            None => {
                first_seen.insert(key, dataset.row_id(idx));
            }
            Some(first_row) => {
                findings.push(Finding::row(
                    CHECK,
                    FindingCategory::Duplicate,
                    Severity::Error,
                    dataset.row_id(idx),
                    None,
                    format!(
                        "duplicate key ({}) = ({}), first seen in row {first_row}",
                        config.duplicate_keys.join(", "),
                        key.join(", "),
                    ),
                ));
            }
        }
    }
    findings
}
