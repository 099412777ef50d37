use chartjs_model::colors::{
    CanvasObjectFactory, Color, ColorBuilder, GradientBuilder, GradientType,
};
use chartjs_model::core::ChartType;
use chartjs_model::data::{BarDataset, IsDataset};
use chartjs_model::items::{ChartArea, ChartNode};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_color_parsing(c: &mut Criterion) {
    let inputs = [
        "#36a2eb",
        "rgba(255, 99, 132, 0.5)",
        "hsl(204, 82%, 57%)",
        "rebeccapurple",
    ];

    c.bench_function("color_parsing_mixed", |b| {
        b.iter(|| {
            for input in inputs {
                let _ = ColorBuilder::parse(black_box(input)).expect("valid color");
            }
        })
    });
}

fn bench_gradient_interpolation_1k(c: &mut Criterion) {
    let gradient = GradientBuilder::create(GradientType::Linear)
        .add_color_stop(0.0, Color::rgb(255, 0, 0))
        .and_then(|builder| builder.add_color_stop(0.5, Color::rgb(0, 255, 0)))
        .and_then(|builder| builder.add_color_stop(1.0, Color::rgb(0, 0, 255)))
        .expect("valid stops")
        .build()
        .expect("valid gradient");

    c.bench_function("gradient_interpolation_1k", |b| {
        b.iter(|| {
            for step in 0..1_000 {
                let offset = f64::from(step) / 1_000.0;
                let _ = gradient
                    .interpolated_color(black_box(offset))
                    .expect("interpolate");
            }
        })
    });
}

fn bench_dataset_canvas_objects(c: &mut Criterion) {
    let chart = ChartNode::new("bench", ChartType::Bar)
        .with_canvas_size(1600.0, 900.0)
        .with_chart_area(ChartArea::new(20.0, 40.0, 1580.0, 860.0))
        .initialized();
    let gradients: Vec<_> = (0..16u8)
        .map(|i| {
            GradientBuilder::create(GradientType::Radial)
                .add_colors_start_stop(Color::rgb(i, 0, 0), Color::rgb(0, 0, 255 - i))
                .build()
                .expect("valid gradient")
        })
        .collect();

    c.bench_function("dataset_apply_16_radial_gradients", |b| {
        b.iter(|| {
            let factory = CanvasObjectFactory::new();
            let mut dataset = BarDataset::new();
            dataset
                .set_background_gradients(gradients.clone())
                .expect("gradients");
            let _ = dataset
                .dataset_mut()
                .apply_canvas_objects(black_box(&chart), &factory, 0)
                .expect("apply");
        })
    });
}

criterion_group!(
    benches,
    bench_color_parsing,
    bench_gradient_interpolation_1k,
    bench_dataset_canvas_objects
);
criterion_main!(benches);
