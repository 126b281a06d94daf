use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Category of a data-quality finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingCategory {
    /// Required field is null or blank.
    Missing,
    /// Row repeats the key of an earlier row.
    Duplicate,
    /// Gross weight below net weight.
    Weight,
    /// Non-positive amount or amount without a currency code.
    Currency,
    /// Declared tax deviates from the recomputed figure.
    Tax,
    /// Field value could not be interpreted as its expected type.
    ParseError,
}

impl FindingCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            FindingCategory::Missing => "missing",
            FindingCategory::Duplicate => "duplicate",
            FindingCategory::Weight => "weight",
            FindingCategory::Currency => "currency",
            FindingCategory::Tax => "tax",
            FindingCategory::ParseError => "parse-error",
        }
    }

    pub const ALL: [FindingCategory; 6] = [
        FindingCategory::Missing,
        FindingCategory::Duplicate,
        FindingCategory::Weight,
        FindingCategory::Currency,
        FindingCategory::Tax,
        FindingCategory::ParseError,
    ];
}

/// One reported result of a check. Immutable once produced: the engine
/// only ever generates findings, the presentation layer only renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Name of the check that produced the finding.
    pub check: String,
    pub category: FindingCategory,
    pub severity: Severity,
    /// Affected row identifiers (may be empty for column-level findings).
    pub row_ids: Vec<i64>,
    /// Affected column, when the finding is tied to one.
    pub column: Option<String>,
    pub message: String,
}

impl Finding {
    pub fn row(
        check: &str,
        category: FindingCategory,
        severity: Severity,
        row_id: i64,
        column: Option<&str>,
        message: String,
    ) -> Self {
        Self {
            check: check.to_string(),
            category,
            severity,
            row_ids: vec![row_id],
            column: column.map(str::to_string),
            message,
        }
    }
}
