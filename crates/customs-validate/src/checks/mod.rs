pub mod currency;
pub mod duplicate;
pub mod missing;
pub mod tax;
pub mod weight;

use customs_common::{any_to_f64, any_to_string, is_missing_value};
use customs_model::{Dataset, Finding, FindingCategory, Severity};

/// A numeric cell as a check sees it: absent, present but unparseable,
/// or a number.
pub(crate) enum NumericCell {
    Missing,
    Invalid(String),
    Value(f64),
}

pub(crate) fn numeric_cell(dataset: &Dataset, column: &str, idx: usize) -> NumericCell {
    let value = dataset.cell(column, idx);
    if is_missing_value(&value) {
        return NumericCell::Missing;
    }
    match any_to_f64(value.clone()) {
        Some(number) => NumericCell::Value(number),
        None => NumericCell::Invalid(any_to_string(value)),
    }
}

/// Standard `parse-error` finding for a non-numeric value in a numeric
/// field. The check that hit it continues with the remaining rows.
pub(crate) fn parse_error_finding(
    check: &str,
    dataset: &Dataset,
    column: &str,
    idx: usize,
    raw: &str,
) -> Finding {
    Finding::row(
        check,
        FindingCategory::ParseError,
        Severity::Warning,
        dataset.row_id(idx),
        Some(column),
        format!("non-numeric value in {column}: '{raw}'"),
    )
}
