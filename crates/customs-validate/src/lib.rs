//! The validation engine: a fixed battery of independent data-quality
//! checks over an imported [`Dataset`].
//!
//! Every check is a pure function of `(&Dataset, &CheckConfig)` returning
//! findings; nothing mutates the dataset and no check aborts another. A
//! malformed value inside a check becomes a `parse-error` finding for
//! that row and the remaining rows keep being checked.

pub mod checks;

use customs_model::{CheckConfig, Dataset, Finding};

/// Runs the full check battery. Deterministic: the same dataset and
/// config always produce the same findings in the same order.
pub fn run_checks(dataset: &Dataset, config: &CheckConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    findings.extend(checks::missing::missing_values(dataset, config));
    findings.extend(checks::duplicate::duplicate_rows(dataset, config));
    findings.extend(checks::weight::weight_consistency(dataset, config));
    findings.extend(checks::currency::currency_amounts(dataset, config));
    findings.extend(checks::tax::tax_consistency(dataset, config));
    findings
}
