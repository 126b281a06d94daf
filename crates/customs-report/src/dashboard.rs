use serde::Serialize;

use customs_common::any_to_string;
use customs_model::columns::GTIP;
use customs_model::{Dataset, Finding, FindingCategory};

/// Finding count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: FindingCategory,
    pub count: usize,
}

/// Row count for one classification code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeCount {
    pub code: String,
    pub rows: u64,
}

/// The scalar statistics the dashboard renders. Derived read-only from
/// the dataset and the findings; recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_rows: usize,
    /// One entry per category that has findings, in category order.
    pub findings_by_category: Vec<CategoryCount>,
    /// Top-N GTIP codes by row count, descending; ties keep first-seen
    /// order so repeated runs render identically.
    pub top_classification_codes: Vec<CodeCount>,
}

pub fn dashboard_summary(
    dataset: &Dataset,
    findings: &[Finding],
    top_n: usize,
) -> DashboardSummary {
    let findings_by_category = FindingCategory::ALL
        .iter()
        .filter_map(|category| {
            let count = findings
                .iter()
                .filter(|finding| finding.category == *category)
                .count();
            (count > 0).then_some(CategoryCount {
                category: *category,
                count,
            })
        })
        .collect();

    let mut codes: Vec<CodeCount> = Vec::new();
    for idx in 0..dataset.height() {
        let value = any_to_string(dataset.cell(GTIP, idx));
        let code = value.trim();
        if code.is_empty() {
            continue;
        }
        match codes.iter_mut().find(|entry| entry.code == code) {
            Some(entry) => entry.rows += 1,
            None => codes.push(CodeCount {
                code: code.to_string(),
                rows: 1,
            }),
        }
    }
    // Stable sort keeps first-seen order among equal counts.
    codes.sort_by(|a, b| b.rows.cmp(&a.rows));
    codes.truncate(top_n);

    DashboardSummary {
        total_rows: dataset.height(),
        findings_by_category,
        top_classification_codes: codes,
    }
}
