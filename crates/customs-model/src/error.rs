use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Failure to import one declaration file. Scoped to that file: a folder
/// import records the error and continues with the remaining files.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed xml in {path}: {message}")]
    Xml { path: PathBuf, message: String },
    #[error("{path} contains no declaration line items")]
    Empty { path: PathBuf },
}

/// Invalid request against a dataset, e.g. a pivot spec naming a column
/// the dataset does not have. Reported to the caller; nothing is computed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("aggregation '{0}' requires a value column")]
    MissingValueColumn(String),
}

/// Structural problem while assembling a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("row identifiers are not unique within the dataset")]
    DuplicateRowIds,
    #[error("row_id must be an integer column")]
    NonIntegerRowId,
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
