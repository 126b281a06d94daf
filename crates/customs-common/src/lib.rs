//! Shared cell-level helpers for the customs workspace.
//!
//! Declaration exports store every field as text, with Turkish number
//! formatting (`1.234,56`) and the occasional `%` suffix on rates. The
//! helpers here convert Polars `AnyValue` cells into strings and numbers
//! so the validate and report crates never parse raw text themselves.

use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` to its `String` representation.
///
/// `Null` becomes an empty string; floats are rendered without trailing
/// zeros so `18.0` prints as `18`, matching the source documents.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "E" } else { "H" }.to_string(),
        other => other.to_string(),
    }
}

/// Converts `AnyValue` to `String`, returning `None` when the result is
/// blank after trimming.
pub fn any_to_string_non_empty(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    if s.trim().is_empty() { None } else { Some(s) }
}

/// True when a cell counts as missing: `Null` or blank/whitespace text.
pub fn is_missing_value(value: &AnyValue<'_>) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::String(s) => s.trim().is_empty(),
        AnyValue::StringOwned(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Formats a floating-point number without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Converts an `AnyValue` to `f64`, parsing text cells with
/// [`parse_decimal`]. Returns `None` for null or non-numeric cells.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_decimal(s),
        AnyValue::StringOwned(s) => parse_decimal(&s),
        _ => None,
    }
}

/// Parses a declared numeric field.
///
/// Accepts plain decimals (`1234.56`), Turkish formatting with a comma
/// decimal separator and dot thousands separators (`1.234,56`), and rate
/// values carrying a percent sign (`%18`, `18 %`). Returns `None` for
/// blank or unparseable input.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim().trim_matches('%').trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains(',') {
        // Comma decimal separator: any dots are thousands separators.
        let normalized: String = trimmed
            .chars()
            .filter(|ch| *ch != '.')
            .map(|ch| if ch == ',' { '.' } else { ch })
            .collect();
        return normalized.parse::<f64>().ok();
    }
    trimmed.parse::<f64>().ok()
}
