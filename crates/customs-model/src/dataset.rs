use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use crate::columns::ROW_ID;
use crate::error::DatasetError;

/// The flat declaration table: one row per line item, string-typed
/// declared fields, plus the synthetic [`ROW_ID`] column.
///
/// A `Dataset` is owned by the application session and never mutated by
/// the engine; checks and pivots are pure reads over it.
#[derive(Debug, Clone)]
pub struct Dataset {
    frame: DataFrame,
}

impl Dataset {
    /// Wraps a frame, assigning `row_id` 0..height when the column is
    /// absent. An existing `row_id` column must be unique.
    pub fn from_frame(mut frame: DataFrame) -> Result<Self, DatasetError> {
        let has_row_id = frame
            .get_column_names()
            .iter()
            .any(|name| name.as_str() == ROW_ID);
        if has_row_id {
            let column = frame.column(ROW_ID)?;
            let mut seen = BTreeSet::new();
            for idx in 0..frame.height() {
                let value = column.get(idx).unwrap_or(AnyValue::Null);
                let id = match value {
                    AnyValue::Int64(v) => v,
                    AnyValue::Int32(v) => i64::from(v),
                    _ => return Err(DatasetError::NonIntegerRowId),
                };
                if !seen.insert(id) {
                    return Err(DatasetError::DuplicateRowIds);
                }
            }
        } else {
            let ids: Vec<i64> = (0..frame.height() as i64).collect();
            frame.with_column(Series::new(ROW_ID.into(), ids))?;
        }
        Ok(Self { frame })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Number of line-item rows.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.frame
            .get_column_names()
            .iter()
            .any(|column| column.as_str() == name)
    }

    /// Cell at (`column`, `idx`); `Null` when the column is absent, which
    /// keeps files with a narrower schema behaving as all-null columns.
    pub fn cell(&self, column: &str, idx: usize) -> AnyValue<'_> {
        self.frame
            .column(column)
            .ok()
            .and_then(|col| col.get(idx).ok())
            .unwrap_or(AnyValue::Null)
    }

    /// The synthetic row identifier of row `idx`.
    pub fn row_id(&self, idx: usize) -> i64 {
        match self.cell(ROW_ID, idx) {
            AnyValue::Int64(v) => v,
            AnyValue::Int32(v) => i64::from(v),
            _ => idx as i64,
        }
    }
}
