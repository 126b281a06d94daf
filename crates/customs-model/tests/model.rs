use polars::prelude::{DataFrame, NamedFrom, Series};

use customs_model::columns::ROW_ID;
use customs_model::{
    AggFunc, Dataset, Finding, FindingCategory, PivotSpec, Severity, Tolerance,
};

#[test]
fn from_frame_assigns_unique_row_ids() {
    let frame =
        DataFrame::new(vec![Series::new("Gtip".into(), vec!["1001", "1002"]).into()]).unwrap();
    let dataset = Dataset::from_frame(frame).unwrap();
    assert!(dataset.has_column(ROW_ID));
    assert_eq!(dataset.row_id(0), 0);
    assert_eq!(dataset.row_id(1), 1);
}

#[test]
fn from_frame_rejects_duplicate_row_ids() {
    let frame = DataFrame::new(vec![
        Series::new("Gtip".into(), vec!["1001", "1002"]).into(),
        Series::new(ROW_ID.into(), vec![7i64, 7]).into(),
    ])
    .unwrap();
    assert!(Dataset::from_frame(frame).is_err());
}

#[test]
fn from_frame_keeps_existing_row_ids() {
    let frame = DataFrame::new(vec![
        Series::new("Gtip".into(), vec!["1001", "1002"]).into(),
        Series::new(ROW_ID.into(), vec![10i64, 20]).into(),
    ])
    .unwrap();
    let dataset = Dataset::from_frame(frame).unwrap();
    assert_eq!(dataset.row_id(1), 20);
}

#[test]
fn missing_column_reads_as_null() {
    let frame = DataFrame::new(vec![Series::new("Gtip".into(), vec!["1001"]).into()]).unwrap();
    let dataset = Dataset::from_frame(frame).unwrap();
    assert!(matches!(
        dataset.cell("Mensei_ulke", 0),
        polars::prelude::AnyValue::Null
    ));
}

#[test]
fn finding_category_serializes_kebab_case() {
    let finding = Finding::row(
        "weight_consistency",
        FindingCategory::ParseError,
        Severity::Warning,
        3,
        Some("Brut_agirlik"),
        "non-numeric weight".to_string(),
    );
    let json = serde_json::to_string(&finding).unwrap();
    assert!(json.contains("\"parse-error\""));
    assert!(json.contains("\"warning\""));
    let back: Finding = serde_json::from_str(&json).unwrap();
    assert_eq!(back, finding);
}

#[test]
fn tolerance_modes() {
    assert!(Tolerance::Absolute(0.01).within(100.0, 100.009));
    assert!(!Tolerance::Absolute(0.01).within(100.0, 100.02));
    assert!(Tolerance::Relative(0.05).within(105.0, 100.0));
    assert!(!Tolerance::Relative(0.05).within(106.0, 100.0));
    // Relative tolerance around an expected value of zero accepts only zero.
    assert!(Tolerance::Relative(0.05).within(0.0, 0.0));
    assert!(!Tolerance::Relative(0.05).within(0.1, 0.0));
}

#[test]
fn pivot_spec_constructors() {
    let spec = PivotSpec::count("Rejim");
    assert_eq!(spec.agg, AggFunc::Count);
    assert!(spec.values.is_none());

    let cross = PivotSpec::sum("Gtip", "Fatura_miktari").with_columns("Mensei_ulke");
    assert_eq!(cross.columns.as_deref(), Some("Mensei_ulke"));
    assert_eq!(cross.agg, AggFunc::Sum);
}
