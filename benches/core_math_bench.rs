use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trend_plot::api::{PlotEngine, PlotEngineConfig, SeriesOptions};
use trend_plot::core::{DrawStyle, LineInterpolation, PlotData, SeriesRenderConfig, Viewport};
use trend_plot::interaction::WheelEvent;
use trend_plot::render::{NullRenderer, PathInput, PathRoutine, StepAlign};

fn sample_columns(len: usize) -> (Vec<f64>, Vec<Option<f64>>) {
    let xs: Vec<f64> = (0..len).map(|i| i as f64 * 0.19).collect();
    let ys: Vec<Option<f64>> = (0..len)
        .map(|i| {
            if i % 997 == 0 {
                None
            } else {
                Some(500.0 + (i as f64 * 0.01).sin() * 300.0)
            }
        })
        .collect();
    (xs, ys)
}

fn bench_path_routines_10k(c: &mut Criterion) {
    let (xs, ys) = sample_columns(10_000);
    let input = PathInput {
        xs: &xs,
        ys: &ys,
        baseline_y: 1_000.0,
        plot_width: 1_900.0,
    };

    for (name, routine) in [
        ("path_linear_10k", PathRoutine::Linear),
        ("path_step_after_10k", PathRoutine::Stepped(StepAlign::After)),
        ("path_spline_10k", PathRoutine::Spline),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| black_box(routine).build(black_box(&input)));
        });
    }
}

fn bench_build_frame_4x10k(c: &mut Criterion) {
    let mut config = PlotEngineConfig::new(Viewport::new(1920, 1080));
    for (label, render) in [
        ("line", SeriesRenderConfig::line(None)),
        ("step", SeriesRenderConfig::default()),
        ("spline", SeriesRenderConfig::line(Some(LineInterpolation::Spline))),
        ("bars", SeriesRenderConfig::new(DrawStyle::Bars)),
    ] {
        config = config.with_series(SeriesOptions::new(label, render));
    }
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");

    let (x, ys) = sample_columns(10_000);
    engine
        .set_data(PlotData {
            x,
            y: vec![ys; 4],
            dimension: String::new(),
        })
        .expect("set data");
    engine.ready();

    c.bench_function("build_frame_4x10k", |b| {
        b.iter(|| engine.build_frame().expect("frame"));
    });
}

fn bench_wheel_zoom_cycle(c: &mut Criterion) {
    let config = PlotEngineConfig::new(Viewport::new(1600, 900));
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    let (x, ys) = sample_columns(2_000);
    engine
        .set_data(PlotData {
            x,
            y: vec![ys],
            dimension: String::new(),
        })
        .expect("set data");
    engine.ready();

    c.bench_function("wheel_zoom_in_out", |b| {
        b.iter(|| {
            engine.wheel(black_box(WheelEvent::new(-1.0, 640.0, 300.0)));
            engine.wheel(black_box(WheelEvent::new(1.0, 640.0, 300.0)));
        })
    });
}

criterion_group!(
    benches,
    bench_path_routines_10k,
    bench_build_frame_4x10k,
    bench_wheel_zoom_cycle
);
criterion_main!(benches);
