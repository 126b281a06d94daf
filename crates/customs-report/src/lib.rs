//! Aggregation and reporting over imported declarations: the pivot
//! engine, the predefined summary specs, dashboard statistics, and the
//! JSON findings report.

pub mod dashboard;
pub mod findings_json;
pub mod pivot;

pub use dashboard::{CategoryCount, CodeCount, DashboardSummary, dashboard_summary};
pub use findings_json::write_findings_report_json;
pub use pivot::{
    classification_country_cross, classification_summary, origin_country_summary, pivot,
    regime_summary,
};
