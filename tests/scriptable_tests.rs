use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chartjs_model::callbacks::{
    ContextType, ScriptableColor, ScriptableContext, color_value, option_value, scriptable,
};
use chartjs_model::colors::{
    CanvasObjectFactory, Color, GradientBuilder, GradientType, PatternBuilder,
};
use chartjs_model::core::{ChartType, NativeValue};
use chartjs_model::data::{
    BarDataset, CanvasObjectProperty, IsDataset, LineDataset, PointStyle, PointStyleValue,
};
use chartjs_model::defaults::DEFAULT_COLOR;
use chartjs_model::dom::{Element, Img};
use chartjs_model::items::{ChartArea, ChartNode};

fn chart() -> ChartNode {
    ChartNode::new("scripted", ChartType::Line)
        .with_canvas_size(200.0, 100.0)
        .with_chart_area(ChartArea::new(0.0, 0.0, 200.0, 100.0))
        .initialized()
}

fn gradient() -> chartjs_model::colors::Gradient {
    GradientBuilder::create(GradientType::Linear)
        .add_colors_start_stop(Color::rgb(0, 0, 0), Color::rgb(255, 255, 255))
        .build()
        .expect("gradient")
}

#[test]
fn context_builders_set_the_context_type() {
    let chart = chart();
    let factory = CanvasObjectFactory::new();
    let raw = NativeValue::Number(7.0);

    let base = ScriptableContext::new(&chart, &factory);
    assert_eq!(base.context_type(), ContextType::Chart);

    let dataset = base.for_dataset(2);
    assert_eq!(dataset.context_type(), ContextType::Dataset);
    assert_eq!(dataset.dataset_index(), 2);

    let data = base.for_data(1, 4).with_active(true).with_raw(&raw);
    assert_eq!(data.context_type(), ContextType::Data);
    assert_eq!((data.dataset_index(), data.data_index()), (1, 4));
    assert!(data.is_active());
    assert_eq!(data.raw().and_then(NativeValue::as_f64), Some(7.0));
    assert_eq!(data.chart().id, "scripted");
}

#[test]
fn option_value_falls_back_to_the_default() {
    let chart = chart();
    let factory = CanvasObjectFactory::new();
    let even_only = scriptable(|context: &ScriptableContext<'_>| {
        (context.data_index() % 2 == 0).then_some(5.0)
    });

    let even = ScriptableContext::new(&chart, &factory).for_data(0, 2);
    let odd = ScriptableContext::new(&chart, &factory).for_data(0, 3);
    assert_eq!(option_value(&even, &even_only, 1.0), 5.0);
    assert_eq!(option_value(&odd, &even_only, 1.0), 1.0);
}

#[test]
fn color_value_converts_every_result_kind() {
    let chart = chart();
    let factory = CanvasObjectFactory::new();
    let context = ScriptableContext::new(&chart, &factory).for_data(0, 0);

    let plain = color_value(&context, Some(Color::rgb(1, 2, 3).into()), DEFAULT_COLOR, false);
    assert_eq!(plain.as_str(), Some("rgba(1,2,3,1)"));

    let css = color_value(&context, Some("red".into()), DEFAULT_COLOR, false);
    assert_eq!(css.as_str(), Some("red"));

    let missing = color_value(&context, None, DEFAULT_COLOR, false);
    assert_eq!(missing.as_str(), Some(DEFAULT_COLOR));

    let painted = color_value(&context, Some(gradient().into()), DEFAULT_COLOR, false);
    assert!(matches!(painted, NativeValue::Element(Element::Gradient(_))));
}

#[test]
fn patterns_need_a_property_accepting_them() {
    let chart = chart();
    let factory = CanvasObjectFactory::new();
    let context = ScriptableContext::new(&chart, &factory);
    let pattern = PatternBuilder::from_image(Img::new("stripes.png", 10, 10)).build();

    let rejected = color_value(
        &context,
        Some(ScriptableColor::Pattern(pattern.clone())),
        "#fff",
        false,
    );
    assert_eq!(rejected.as_str(), Some("#fff"));

    let accepted = color_value(&context, Some(pattern.into()), "#fff", true);
    assert!(matches!(accepted, NativeValue::Element(Element::Pattern(_))));
}

#[test]
fn gradients_need_an_initialized_chart() {
    let pending = ChartNode::new("pending", ChartType::Line).with_canvas_size(200.0, 100.0);
    let factory = CanvasObjectFactory::new();
    let context = ScriptableContext::new(&pending, &factory);

    let value = color_value(&context, Some(gradient().into()), DEFAULT_COLOR, true);
    assert_eq!(value.as_str(), Some(DEFAULT_COLOR));
    assert_eq!(factory.cached_gradients("pending"), 0);
}

#[test]
fn arrays_resolve_by_wrapping_data_index() {
    let chart = chart();
    let factory = CanvasObjectFactory::new();
    let mut dataset = BarDataset::new();
    dataset
        .dataset_mut()
        .set_border_width(&[1.0, 2.0, 3.0])
        .expect("widths");

    let context = ScriptableContext::new(&chart, &factory).for_data(0, 4);
    let resolved = dataset.dataset().resolve("borderWidth", &context);
    assert_eq!(resolved.and_then(|value| value.as_f64()), Some(2.0));
    assert_eq!(dataset.dataset().resolve("unknownOption", &context), None);
}

#[test]
fn value_callbacks_are_invoked_per_element() {
    let chart = chart();
    let factory = CanvasObjectFactory::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut dataset = BarDataset::new();
    dataset
        .dataset_mut()
        .set_border_width_callback(Some(scriptable(move |context: &ScriptableContext<'_>| {
            counter.fetch_add(1, Ordering::SeqCst);
            (context.data_index() > 0).then(|| context.data_index() as f64 * 2.0)
        })))
        .expect("callback");
    assert!(dataset.dataset().has_callback("borderWidth"));

    let first = ScriptableContext::new(&chart, &factory).for_data(0, 0);
    let third = ScriptableContext::new(&chart, &factory).for_data(0, 2);
    let default = dataset.dataset().defaults().bar.border_width;
    assert_eq!(
        dataset
            .dataset()
            .resolve("borderWidth", &first)
            .and_then(|value| value.as_f64()),
        Some(default)
    );
    assert_eq!(
        dataset
            .dataset()
            .resolve("borderWidth", &third)
            .and_then(|value| value.as_f64()),
        Some(4.0)
    );
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    dataset
        .dataset_mut()
        .set_border_width_callback(None)
        .expect("remove");
    assert!(!dataset.dataset().has_callback("borderWidth"));
}

#[test]
fn color_callbacks_remember_returned_gradients() {
    let chart = chart();
    let factory = CanvasObjectFactory::new();
    let returned = gradient();
    let expected = returned.clone();

    let mut dataset = LineDataset::new();
    dataset
        .set_background_color_callback(Some(scriptable(
            move |context: &ScriptableContext<'_>| {
                (context.data_index() == 1).then(|| ScriptableColor::from(returned.clone()))
            },
        )))
        .expect("callback");
    assert!(dataset.background_color().is_empty());
    assert!(
        dataset
            .dataset()
            .color_callback(CanvasObjectProperty::BackgroundColor)
            .is_some()
    );

    let second = ScriptableContext::new(&chart, &factory).for_data(0, 1);
    let value = dataset
        .dataset()
        .resolve(CanvasObjectProperty::BackgroundColor, &second)
        .expect("resolved");
    assert!(matches!(value, NativeValue::Element(Element::Gradient(_))));
    assert_eq!(
        dataset
            .dataset()
            .callback_gradient(CanvasObjectProperty::BackgroundColor, 0, 1),
        Some(expected)
    );
    assert_eq!(
        dataset
            .dataset()
            .callback_pattern(CanvasObjectProperty::BackgroundColor, 0, 1),
        None
    );

    let first = ScriptableContext::new(&chart, &factory).for_data(0, 0);
    let fallback = dataset
        .dataset()
        .resolve(CanvasObjectProperty::BackgroundColor, &first)
        .expect("resolved");
    assert_eq!(fallback.as_str(), Some(DEFAULT_COLOR));

    dataset.dataset().clear_callback_canvas_objects();
    assert!(
        dataset
            .dataset()
            .callback_gradient(CanvasObjectProperty::BackgroundColor, 0, 1)
            .is_none()
    );
}

#[test]
fn point_style_callback_returns_images() {
    let chart = chart();
    let factory = CanvasObjectFactory::new();
    let mut dataset = LineDataset::new();
    dataset
        .set_point_style_callback(Some(scriptable(|context: &ScriptableContext<'_>| {
            if context.data_index() == 0 {
                Some(PointStyleValue::Image(Img::new("marker.png", 16, 16)))
            } else {
                Some(PointStyleValue::Shape(PointStyle::Triangle))
            }
        })))
        .expect("callback");

    let first = ScriptableContext::new(&chart, &factory).for_data(0, 0);
    let second = ScriptableContext::new(&chart, &factory).for_data(0, 1);
    let image = dataset
        .dataset()
        .resolve("pointStyle", &first)
        .expect("resolved");
    assert!(matches!(image, NativeValue::Element(Element::Image(_))));
    let shape = dataset
        .dataset()
        .resolve("pointStyle", &second)
        .expect("resolved");
    assert_eq!(shape.as_str(), Some("triangle"));
}

#[test]
fn callbacks_serialize_as_placeholders() {
    let mut dataset = BarDataset::new();
    dataset
        .dataset_mut()
        .set_hover_border_width_callback(Some(scriptable(|_: &ScriptableContext<'_>| Some(3.0))))
        .expect("callback");
    let json = dataset.dataset().native().to_filtered_json().expect("json");
    assert!(json.contains(r#""hoverBorderWidth":"function""#));
}
