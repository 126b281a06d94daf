use std::collections::HashMap;

use customs_common::{any_to_f64, any_to_string};
use customs_model::columns::{GTIP, INVOICE_AMOUNT, ORIGIN_COUNTRY, REGIME};
use customs_model::{AggFunc, ConfigError, Dataset, PivotResult, PivotSpec, UNKNOWN_GROUP};

/// Per-cell accumulator: row count plus the sum and count of parseable
/// values in the value column.
#[derive(Debug, Default, Clone, Copy)]
struct CellAcc {
    rows: u64,
    sum: f64,
    valid: u64,
}

impl CellAcc {
    fn finish(self, agg: AggFunc) -> Option<f64> {
        match agg {
            AggFunc::Count => Some(self.rows as f64),
            AggFunc::Sum => {
                if self.rows == 0 {
                    None
                } else {
                    Some(self.sum)
                }
            }
            AggFunc::Mean => {
                // Mean over an empty group is undefined, reported as null.
                if self.valid == 0 {
                    None
                } else {
                    Some(self.sum / self.valid as f64)
                }
            }
        }
    }
}

/// Computes a grouped aggregation over the dataset.
///
/// Rows are grouped by the spec's one or two key columns in order of
/// first appearance, which keeps repeated runs byte-identical. A null
/// grouping key lands in the explicit [`UNKNOWN_GROUP`], so every row
/// belongs to exactly one group and count totals reconcile with the
/// dataset height.
pub fn pivot(dataset: &Dataset, spec: &PivotSpec) -> Result<PivotResult, ConfigError> {
    if !dataset.has_column(&spec.index) {
        return Err(ConfigError::UnknownColumn(spec.index.clone()));
    }
    if let Some(columns) = &spec.columns
        && !dataset.has_column(columns)
    {
        return Err(ConfigError::UnknownColumn(columns.clone()));
    }
    let values = match (&spec.values, spec.agg) {
        (Some(column), _) => {
            if !dataset.has_column(column) {
                return Err(ConfigError::UnknownColumn(column.clone()));
            }
            Some(column.as_str())
        }
        (None, AggFunc::Count) => None,
        (None, agg) => return Err(ConfigError::MissingValueColumn(agg.as_str().to_string())),
    };

    let mut row_keys: Vec<String> = Vec::new();
    let mut row_index: HashMap<String, usize> = HashMap::new();
    let mut column_keys: Vec<String> = Vec::new();
    let mut column_index: HashMap<String, usize> = HashMap::new();
    if spec.columns.is_none() {
        let label = values.unwrap_or("count").to_string();
        column_index.insert(label.clone(), 0);
        column_keys.push(label);
    }
    let mut cells: HashMap<(usize, usize), CellAcc> = HashMap::new();

    for idx in 0..dataset.height() {
        let row_key = group_key(dataset, &spec.index, idx);
        let row_pos = *row_index.entry(row_key.clone()).or_insert_with(|| {
            row_keys.push(row_key);
            row_keys.len() - 1
        });

        let col_pos = match &spec.columns {
            None => 0,
            Some(column) => {
                let col_key = group_key(dataset, column, idx);
                *column_index.entry(col_key.clone()).or_insert_with(|| {
                    column_keys.push(col_key);
                    column_keys.len() - 1
                })
            }
        };

        let acc = cells.entry((row_pos, col_pos)).or_default();
        acc.rows += 1;
        if let Some(column) = values
            && let Some(number) = any_to_f64(dataset.cell(column, idx))
        {
            acc.sum += number;
            acc.valid += 1;
        }
    }

    let grid: Vec<Vec<Option<f64>>> = (0..row_keys.len())
        .map(|row| {
            (0..column_keys.len())
                .map(|col| {
                    cells
                        .get(&(row, col))
                        .copied()
                        .unwrap_or_default()
                        .finish(spec.agg)
                })
                .collect()
        })
        .collect();

    Ok(PivotResult {
        index_name: spec.index.clone(),
        row_keys,
        column_keys,
        cells: grid,
    })
}

fn group_key(dataset: &Dataset, column: &str, idx: usize) -> String {
    let value = any_to_string(dataset.cell(column, idx));
    let trimmed = value.trim();
    if trimmed.is_empty() {
        UNKNOWN_GROUP.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Invoice totals per GTIP classification code.
pub fn classification_summary() -> PivotSpec {
    PivotSpec::sum(GTIP, INVOICE_AMOUNT)
}

/// Invoice totals per origin country.
pub fn origin_country_summary() -> PivotSpec {
    PivotSpec::sum(ORIGIN_COUNTRY, INVOICE_AMOUNT)
}

/// Line-item counts per regime code.
pub fn regime_summary() -> PivotSpec {
    PivotSpec::count(REGIME)
}

/// Invoice totals cross-tabbed by GTIP code and origin country.
pub fn classification_country_cross() -> PivotSpec {
    PivotSpec::sum(GTIP, INVOICE_AMOUNT).with_columns(ORIGIN_COUNTRY)
}
