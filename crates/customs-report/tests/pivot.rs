use polars::prelude::{DataFrame, NamedFrom, Series};

use customs_model::columns::{GTIP, INVOICE_AMOUNT, ORIGIN_COUNTRY, REGIME};
use customs_model::{AggFunc, ConfigError, Dataset, PivotSpec, UNKNOWN_GROUP};
use customs_report::pivot::{classification_country_cross, pivot, regime_summary};

fn dataset(columns: Vec<(&str, Vec<Option<&str>>)>) -> Dataset {
    let series = columns
        .into_iter()
        .map(|(name, values)| {
            let owned: Vec<Option<String>> = values
                .into_iter()
                .map(|value| value.map(str::to_string))
                .collect();
            Series::new(name.into(), owned).into()
        })
        .collect();
    Dataset::from_frame(DataFrame::new(series).unwrap()).unwrap()
}

#[test]
fn count_pivot_matches_worked_example() {
    let ds = dataset(vec![(GTIP, vec![Some("1001"), Some("1001"), Some("1002")])]);
    let result = pivot(&ds, &PivotSpec::count(GTIP)).unwrap();
    assert_eq!(result.row_keys, vec!["1001", "1002"]);
    assert_eq!(result.value("1001"), Some(2.0));
    assert_eq!(result.value("1002"), Some(1.0));
}

#[test]
fn count_totals_reconcile_with_dataset_height() {
    let datasets = vec![
        dataset(vec![(GTIP, vec![Some("1001"), Some("1001"), Some("1002")])]),
        dataset(vec![(GTIP, vec![None, Some("1001"), None, Some("1002")])]),
        dataset(vec![(GTIP, vec![])]),
        dataset(vec![(GTIP, vec![None])]),
    ];
    for ds in datasets {
        let result = pivot(&ds, &PivotSpec::count(GTIP)).unwrap();
        assert_eq!(result.total(), ds.height() as f64);
    }
}

#[test]
fn null_keys_form_explicit_unknown_group() {
    let ds = dataset(vec![(GTIP, vec![Some("1001"), None, Some(" ")])]);
    let result = pivot(&ds, &PivotSpec::count(GTIP)).unwrap();
    assert_eq!(result.row_keys, vec!["1001", UNKNOWN_GROUP]);
    assert_eq!(result.value(UNKNOWN_GROUP), Some(2.0));
}

#[test]
fn sum_pivot_parses_declared_amounts() {
    let ds = dataset(vec![
        (GTIP, vec![Some("1001"), Some("1001"), Some("1002")]),
        (INVOICE_AMOUNT, vec![Some("1.500,5"), Some("100"), None]),
    ]);
    let result = pivot(&ds, &PivotSpec::sum(GTIP, INVOICE_AMOUNT)).unwrap();
    assert_eq!(result.value("1001"), Some(1600.5));
    // Group exists but holds no parseable value: sum of nothing is 0.
    assert_eq!(result.value("1002"), Some(0.0));
}

#[test]
fn mean_of_empty_group_is_null_not_zero() {
    let ds = dataset(vec![
        (GTIP, vec![Some("1001"), Some("1002")]),
        (ORIGIN_COUNTRY, vec![Some("CN"), Some("TR")]),
        (INVOICE_AMOUNT, vec![Some("10"), Some("30")]),
    ]);
    let spec = PivotSpec::mean(GTIP, INVOICE_AMOUNT).with_columns(ORIGIN_COUNTRY);
    let result = pivot(&ds, &spec).unwrap();
    assert_eq!(result.get("1001", "CN"), Some(10.0));
    // No row pairs 1001 with TR.
    assert_eq!(result.get("1001", "TR"), None);
}

#[test]
fn mean_over_unparseable_values_is_null() {
    let ds = dataset(vec![
        (GTIP, vec![Some("1001"), Some("1001"), Some("1002")]),
        (INVOICE_AMOUNT, vec![Some("yok"), Some("n/a"), Some("10")]),
    ]);
    let result = pivot(&ds, &PivotSpec::mean(GTIP, INVOICE_AMOUNT)).unwrap();
    // Both cells of the group exist but neither parses as a number.
    assert_eq!(result.value("1001"), None);
    assert_eq!(result.value("1002"), Some(10.0));
}

#[test]
fn count_of_empty_cross_tab_cell_is_zero() {
    let ds = dataset(vec![
        (GTIP, vec![Some("1001"), Some("2002")]),
        (ORIGIN_COUNTRY, vec![Some("CN"), Some("TR")]),
    ]);
    let spec = PivotSpec::count(GTIP).with_columns(ORIGIN_COUNTRY);
    let result = pivot(&ds, &spec).unwrap();
    assert_eq!(result.get("1001", "CN"), Some(1.0));
    // No row pairs 1001 with TR: a count cell is zero, never null.
    assert_eq!(result.get("1001", "TR"), Some(0.0));
    assert_eq!(result.get("2002", "CN"), Some(0.0));
}

#[test]
fn cross_tab_keys_follow_first_appearance_order() {
    let ds = dataset(vec![
        (GTIP, vec![Some("2002"), Some("1001"), Some("2002")]),
        (ORIGIN_COUNTRY, vec![Some("TR"), Some("CN"), Some("CN")]),
        (INVOICE_AMOUNT, vec![Some("1"), Some("2"), Some("4")]),
    ]);
    let result = pivot(&ds, &classification_country_cross()).unwrap();
    assert_eq!(result.row_keys, vec!["2002", "1001"]);
    assert_eq!(result.column_keys, vec!["TR", "CN"]);
    assert_eq!(result.get("2002", "CN"), Some(4.0));
    assert_eq!(result.get("1001", "TR"), None);
}

#[test]
fn unknown_column_is_config_error() {
    let ds = dataset(vec![(GTIP, vec![Some("1001")])]);
    let err = pivot(&ds, &PivotSpec::count("Yok_boyle_sutun")).unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownColumn("Yok_boyle_sutun".to_string())
    );

    let err = pivot(&ds, &PivotSpec::sum(GTIP, "Yok_boyle_sutun")).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownColumn(_)));
}

#[test]
fn sum_without_value_column_is_config_error() {
    let ds = dataset(vec![(GTIP, vec![Some("1001")])]);
    let spec = PivotSpec {
        index: GTIP.to_string(),
        columns: None,
        values: None,
        agg: AggFunc::Sum,
    };
    assert!(matches!(
        pivot(&ds, &spec),
        Err(ConfigError::MissingValueColumn(_))
    ));
}

#[test]
fn predefined_regime_summary_counts_items() {
    let ds = dataset(vec![(
        REGIME,
        vec![Some("4000"), Some("4000"), Some("6121"), None],
    )]);
    let result = pivot(&ds, &regime_summary()).unwrap();
    assert_eq!(result.value("4000"), Some(2.0));
    assert_eq!(result.value("6121"), Some(1.0));
    assert_eq!(result.value(UNKNOWN_GROUP), Some(1.0));
}

#[test]
fn pivot_does_not_mutate_the_dataset() {
    let ds = dataset(vec![(GTIP, vec![Some("1001"), None])]);
    let before = ds.frame().clone();
    let _ = pivot(&ds, &PivotSpec::count(GTIP)).unwrap();
    assert!(ds.frame().equals_missing(&before));
}
