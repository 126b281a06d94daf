use serde::{Deserialize, Serialize};

/// Group label for rows whose grouping-key cell is null or blank. Nulls
/// form their own group instead of being dropped so pivot totals stay
/// reconcilable with the source dataset.
pub const UNKNOWN_GROUP: &str = "(unknown)";

/// Aggregation applied to the value column within each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggFunc {
    Sum,
    Count,
    Mean,
}

impl AggFunc {
    pub fn as_str(self) -> &'static str {
        match self {
            AggFunc::Sum => "sum",
            AggFunc::Count => "count",
            AggFunc::Mean => "mean",
        }
    }
}

/// A pivot request: one or two grouping columns, a value column, and an
/// aggregation. Constructed per request and validated against the
/// dataset before anything is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotSpec {
    /// Primary grouping column (pivot rows).
    pub index: String,
    /// Optional second grouping column (pivot columns).
    pub columns: Option<String>,
    /// Value column; not needed for `Count`.
    pub values: Option<String>,
    pub agg: AggFunc,
}

impl PivotSpec {
    pub fn count(index: &str) -> Self {
        Self {
            index: index.to_string(),
            columns: None,
            values: None,
            agg: AggFunc::Count,
        }
    }

    pub fn sum(index: &str, values: &str) -> Self {
        Self {
            index: index.to_string(),
            columns: None,
            values: Some(values.to_string()),
            agg: AggFunc::Sum,
        }
    }

    pub fn mean(index: &str, values: &str) -> Self {
        Self {
            index: index.to_string(),
            columns: None,
            values: Some(values.to_string()),
            agg: AggFunc::Mean,
        }
    }

    pub fn with_columns(mut self, columns: &str) -> Self {
        self.columns = Some(columns.to_string());
        self
    }
}

/// An aggregated table: row keys by first appearance in the dataset,
/// column keys likewise (a single synthetic column when the spec has no
/// second grouping). Fully recomputed per request, never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotResult {
    pub index_name: String,
    pub row_keys: Vec<String>,
    pub column_keys: Vec<String>,
    /// `cells[row][col]`; `None` marks an empty group under `Sum`/`Mean`.
    pub cells: Vec<Vec<Option<f64>>>,
}

impl PivotResult {
    /// Aggregate for `row` in a single-column pivot.
    pub fn value(&self, row: &str) -> Option<f64> {
        let row_idx = self.row_keys.iter().position(|key| key == row)?;
        self.cells.get(row_idx)?.first().copied().flatten()
    }

    /// Aggregate for a (`row`, `column`) pair in a cross-tab.
    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let row_idx = self.row_keys.iter().position(|key| key == row)?;
        let col_idx = self.column_keys.iter().position(|key| key == column)?;
        self.cells.get(row_idx)?.get(col_idx).copied().flatten()
    }

    /// Sum of all populated cells.
    pub fn total(&self) -> f64 {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter_map(|cell| *cell)
            .sum()
    }
}
