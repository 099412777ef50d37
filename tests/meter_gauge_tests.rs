use approx::assert_relative_eq;
use chartjs_model::ChartError;
use chartjs_model::callbacks::{ScriptableColor, ScriptableContext, scriptable};
use chartjs_model::charts::{
    DEFAULT_EMPTY_COLOR, DEFAULT_VALUE_COLOR, GaugeDataset, GaugeThreshold, MeterDataset,
};
use chartjs_model::colors::{Color, GradientBuilder, GradientType, PatternBuilder};
use chartjs_model::core::ChartType;
use chartjs_model::data::{CanvasObjectProperty, DataPoint, IsDataset};
use chartjs_model::dom::Img;

#[test]
fn meter_data_is_value_and_remainder() {
    let mut meter = MeterDataset::new(200.0).expect("meter");
    assert_eq!(meter.dataset().chart_type(), ChartType::Meter);
    assert!(meter.dataset().data().expect("data").is_empty());

    meter.set_value(50.0).expect("value");
    assert_eq!(meter.dataset().data().expect("data"), vec![50.0, 150.0]);

    meter.set_value(500.0).expect("value");
    assert_relative_eq!(meter.value(), 200.0);
    assert_eq!(meter.dataset().data().expect("data"), vec![200.0, 0.0]);

    meter.set_value(-3.0).expect("value");
    assert_eq!(meter.dataset().data().expect("data"), vec![0.0, 200.0]);
}

#[test]
fn meter_max_is_clamped_and_validated() {
    let meter = MeterDataset::new(-10.0).expect("meter");
    assert_eq!(meter.max(), 0.0);
    assert!(MeterDataset::new(f64::NAN).is_err());
    assert!(MeterDataset::new(f64::INFINITY).is_err());

    let mut meter = MeterDataset::new(10.0).expect("meter");
    assert!(matches!(
        meter.set_value(f64::NAN),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn meter_rejects_direct_data_and_hiding() {
    let mut meter = MeterDataset::new(10.0).expect("meter");
    assert!(matches!(
        meter.dataset_mut().set_data(&[1.0, 2.0]),
        Err(ChartError::UnsupportedOperation(_))
    ));

    meter.dataset_mut().set_hidden(true).expect("hidden");
    assert!(!meter.dataset().is_hidden());

    let gradient = GradientBuilder::create(GradientType::Linear)
        .add_colors_start_stop(Color::rgb(0, 0, 0), Color::rgb(1, 1, 1))
        .build()
        .expect("gradient");
    assert!(meter.set_background_gradients(vec![gradient]).is_err());
}

#[test]
fn meter_colors_feed_background_colors() {
    let mut meter = MeterDataset::new(10.0).expect("meter");
    assert_eq!(meter.color(), DEFAULT_VALUE_COLOR);
    assert_eq!(meter.empty_color(), DEFAULT_EMPTY_COLOR);
    assert_eq!(
        meter.background_color(),
        vec!["rgba(140,214,16,1)".to_owned(), "rgba(234,234,234,1)".to_owned()]
    );

    meter.set_color(Color::rgb(1, 2, 3)).expect("color");
    assert_eq!(meter.background_color()[0], "rgba(1,2,3,1)");
    assert_eq!(meter.dataset().border_width(), vec![0.0, 0.0]);
}

#[test]
fn gauge_thresholds_pick_the_value_color() {
    let mut gauge = GaugeDataset::new(100.0).expect("gauge");
    assert_eq!(gauge.dataset().chart_type(), ChartType::Gauge);
    assert_eq!(gauge.thresholds().len(), 3);

    gauge.set_value(10.0).expect("value");
    assert_eq!(gauge.color(), DEFAULT_VALUE_COLOR);

    gauge.set_value(95.0).expect("value");
    assert_eq!(
        gauge.current_threshold().map(GaugeThreshold::name),
        Some("critical")
    );
    assert_eq!(gauge.color(), Color::rgb(217, 83, 79));
}

#[test]
fn gauge_threshold_bounds_are_half_open() {
    let mut gauge = GaugeDataset::new(100.0).expect("gauge");
    gauge.set_value(60.0).expect("value");
    assert_eq!(
        gauge.current_threshold().map(GaugeThreshold::name),
        Some("warning")
    );
    gauge.set_value(59.9).expect("value");
    assert_eq!(
        gauge.current_threshold().map(GaugeThreshold::name),
        Some("normal")
    );
}

#[test]
fn custom_thresholds_are_sorted() {
    let mut gauge = GaugeDataset::new(10.0).expect("gauge");
    let high = GaugeThreshold::new("high", 10.0, Color::rgb(255, 0, 0)).expect("high");
    let low = GaugeThreshold::new("low", 5.0, Color::rgb(0, 255, 0)).expect("low");
    gauge.set_thresholds(vec![high, low]).expect("thresholds");

    let names: Vec<&str> = gauge.thresholds().iter().map(GaugeThreshold::name).collect();
    assert_eq!(names, vec!["low", "high"]);

    gauge.set_value(7.0).expect("value");
    assert_eq!(gauge.color(), Color::rgb(255, 0, 0));

    gauge.set_value(10.0).expect("value");
    assert_eq!(
        gauge.current_threshold().map(GaugeThreshold::name),
        Some("high")
    );
}

#[test]
fn invalid_thresholds_are_rejected() {
    assert!(GaugeThreshold::new("", 1.0, Color::rgb(0, 0, 0)).is_err());
    assert!(GaugeThreshold::new("nan", f64::NAN, Color::rgb(0, 0, 0)).is_err());
    let moved = GaugeThreshold::warning().with_value(80.0);
    assert_relative_eq!(moved.value(), 80.0);
}

#[test]
fn gauge_without_thresholds_keeps_the_default_color() {
    let mut gauge = GaugeDataset::new(10.0).expect("gauge");
    gauge.set_thresholds(Vec::new()).expect("thresholds");
    gauge.set_value(5.0).expect("value");
    assert!(gauge.current_threshold().is_none());
    assert_eq!(gauge.color(), DEFAULT_VALUE_COLOR);
}

#[test]
fn gauge_colors_and_data_cannot_be_overwritten() {
    let mut gauge = GaugeDataset::new(100.0).expect("gauge");
    gauge.set_value(30.0).expect("value");
    let before = gauge.background_color();
    assert_eq!(before[0], gauge.color().to_string());

    assert!(matches!(
        gauge.set_background_color(&[Color::rgb(255, 0, 0)]),
        Err(ChartError::UnsupportedOperation(_))
    ));
    assert!(matches!(
        gauge.set_hover_background_color(&[Color::rgb(255, 0, 0)]),
        Err(ChartError::UnsupportedOperation(_))
    ));
    assert!(matches!(
        gauge.set_background_color_callback(Some(scriptable(
            |_: &ScriptableContext<'_>| Some(ScriptableColor::from(Color::rgb(255, 0, 0)))
        ))),
        Err(ChartError::UnsupportedOperation(_))
    ));
    assert!(matches!(
        gauge.set_background_patterns(vec![
            PatternBuilder::from_image(Img::new("dots.png", 8, 8)).build()
        ]),
        Err(ChartError::UnsupportedOperation(_))
    ));
    assert!(matches!(
        gauge
            .dataset_mut()
            .set_colors(CanvasObjectProperty::BackgroundColor, &[Color::rgb(255, 0, 0)]),
        Err(ChartError::UnsupportedOperation(_))
    ));
    assert_eq!(gauge.background_color(), before);

    assert!(gauge.dataset_mut().set_data_points(&[DataPoint::new(1.0, 2.0)]).is_err());
    assert!(gauge.dataset_mut().data_binding().is_err());
    assert_eq!(gauge.dataset().data().expect("data"), vec![30.0, 70.0]);

    gauge.set_value(95.0).expect("value");
    assert_eq!(gauge.background_color()[0], gauge.color().to_string());
}

#[test]
fn meter_colors_are_owned_by_the_meter() {
    let mut meter = MeterDataset::new(10.0).expect("meter");
    assert_eq!(meter.border_color(), vec!["#fff".to_owned()]);
    assert!(matches!(
        meter.set_border_color(&[Color::rgb(0, 0, 0)]),
        Err(ChartError::UnsupportedOperation(_))
    ));
    assert_eq!(meter.border_color(), vec!["#fff".to_owned()]);

    meter.set_empty_color(Color::rgb(9, 9, 9)).expect("empty color");
    assert_eq!(meter.background_color()[1], "rgba(9,9,9,1)");
}
