pub mod columns;
pub mod config;
pub mod dataset;
pub mod error;
pub mod finding;
pub mod pivot;

pub use config::{CheckConfig, Tolerance};
pub use dataset::Dataset;
pub use error::{ConfigError, DatasetError, ImportError};
pub use finding::{Finding, FindingCategory, Severity};
pub use pivot::{AggFunc, PivotResult, PivotSpec, UNKNOWN_GROUP};
