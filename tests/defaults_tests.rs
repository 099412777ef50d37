use std::sync::Arc;

use chartjs_model::core::ChartType;
use chartjs_model::data::{BarDataset, IsDataset, LineDataset, PieDataset, PointStyle};
use chartjs_model::defaults::{
    DATASET_DEFAULTS_JSON_SCHEMA_V1, DEFAULT_COLOR, DatasetDefaults, Defaults,
};

#[test]
fn contract_round_trips_through_json() {
    let custom = DatasetDefaults::default()
        .with_background_color("#123456")
        .with_border_width(2.5);
    let json = custom.to_json_contract_v1_pretty().expect("contract");
    assert!(json.contains(&format!(
        "\"schema_version\": {DATASET_DEFAULTS_JSON_SCHEMA_V1}"
    )));

    let parsed = DatasetDefaults::from_json_str(&json).expect("parse");
    assert_eq!(parsed, custom);
}

#[test]
fn nested_sections_parse_enum_values() {
    let parsed = DatasetDefaults::from_json_str(
        r#"{"point": {"point_style": "star", "radius": 6}, "arc": {"weight": 2}}"#,
    )
    .expect("parse");
    assert_eq!(parsed.point.point_style, PointStyle::Star);
    assert_eq!(parsed.point.radius, 6.0);
    assert_eq!(parsed.point.hover_radius, 4.0);
    assert_eq!(parsed.arc.weight, 2.0);
    assert_eq!(parsed.arc.border_color, "#fff");
}

#[test]
fn malformed_payloads_are_rejected() {
    assert!(DatasetDefaults::from_json_str("not json").is_err());
    assert!(DatasetDefaults::from_json_str(r#"{"point": {"point_style": "hexagon"}}"#).is_err());
    assert!(DatasetDefaults::from_json_str(r#"{"schema_version": 1}"#).is_err());
}

#[test]
fn global_defaults_are_shared() {
    let first = Defaults::global();
    let second = Defaults::global();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.background_color, DEFAULT_COLOR);
}

#[test]
fn datasets_read_unset_options_from_their_defaults() {
    let defaults = Arc::new(
        DatasetDefaults::from_json_str(
            r##"{"background_color": "#ff0000", "line": {"tension": 0.3}, "bar": {"border_radius": 4}, "arc": {"circumference": 180}}"##,
        )
        .expect("parse"),
    );

    let bar = BarDataset::with_defaults(Arc::clone(&defaults));
    assert_eq!(bar.background_color(), vec!["#ff0000".to_owned()]);
    assert_eq!(bar.border_radius(), vec![4.0]);

    let line = LineDataset::with_defaults(ChartType::Line, Arc::clone(&defaults));
    assert_eq!(line.tension(), 0.3);
    assert_eq!(line.point_radius(), vec![3.0]);

    let pie = PieDataset::with_defaults(ChartType::Doughnut, defaults);
    assert_eq!(pie.circumference(), 180.0);
    assert_eq!(pie.dataset().chart_type(), ChartType::Doughnut);
}
