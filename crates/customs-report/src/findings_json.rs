use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use customs_model::{Finding, FindingCategory};

use crate::dashboard::CategoryCount;

const REPORT_SCHEMA: &str = "customs-studio.findings-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct FindingsReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    dataset: &'a str,
    total_findings: usize,
    category_counts: Vec<CategoryCount>,
    findings: &'a [Finding],
}

/// Writes the findings of one check run as `findings_report.json` under
/// `output_dir`, returning the path of the written file.
pub fn write_findings_report_json(
    output_dir: &Path,
    dataset_label: &str,
    findings: &[Finding],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("findings_report.json");

    let category_counts = FindingCategory::ALL
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

    let payload = FindingsReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        dataset: dataset_label,
        total_findings: findings.len(),
        category_counts,
        findings,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
