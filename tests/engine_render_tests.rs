use trend_plot::api::{PlotEngine, PlotEngineConfig, SeriesOptions};
use trend_plot::core::{AxisRange, DrawStyle, LineInterpolation, PlotData, SeriesRenderConfig, Viewport};
use trend_plot::render::{NullRenderer, PathCommand, PathRoutine, StepAlign, TextHAlign};

fn ramp_data() -> PlotData {
    let x: Vec<f64> = (0..=10).map(f64::from).collect();
    let y = vec![
        (0..=10).map(|i| Some(f64::from(i) * 10.0)).collect(),
        (0..=10)
            .map(|i| if i == 3 { None } else { Some(90.0) })
            .collect(),
    ];
    PlotData {
        x,
        y,
        dimension: String::new(),
    }
}

fn engine_with(series: Vec<SeriesOptions>) -> PlotEngine<NullRenderer> {
    let mut config = PlotEngineConfig::new(Viewport::new(1000, 500)).with_y_padding_ratio(0.0);
    for options in series {
        config = config.with_series(options);
    }
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(ramp_data()).expect("set data");
    assert!(engine.ready());
    engine
}

#[test]
fn render_without_data_produces_empty_frame() {
    let config = PlotEngineConfig::new(Viewport::new(640, 480));
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");

    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_series_count, 0);
    assert!(renderer.last_frame.as_ref().expect("frame").is_empty());
}

#[test]
fn default_series_render_as_step_after_without_markers() {
    let mut engine = engine_with(Vec::new());
    engine.render().expect("render");

    let frame = engine.renderer().last_frame.clone().expect("frame");
    assert_eq!(frame.series.len(), 2);
    for series in &frame.series {
        assert_eq!(series.routine, Some(PathRoutine::Stepped(StepAlign::After)));
        assert!(series.markers.is_empty());
        assert_eq!(series.stroke_width, 1.0);
        assert!(series.path.as_ref().is_some_and(|path| !path.is_empty()));
    }
    assert_eq!(frame.series[0].label, "Series 1");
    assert_eq!(frame.series[1].label, "Series 2");
}

#[test]
fn plain_line_draws_markers_on_present_samples() {
    let mut engine = engine_with(vec![
        SeriesOptions::new("ramp", SeriesRenderConfig::line(None)),
        SeriesOptions::new("flat", SeriesRenderConfig::line(None)),
    ]);
    engine.render().expect("render");

    let frame = engine.renderer().last_frame.clone().expect("frame");
    assert_eq!(frame.series[0].routine, Some(PathRoutine::Linear));
    assert_eq!(frame.series[0].markers.len(), 11);
    assert_eq!(frame.series[1].markers.len(), 10);
    assert_eq!(frame.series[0].stroke_width, 2.0);
    assert_eq!(engine.renderer().last_marker_count, 21);

    let first = frame.series[0].markers[0];
    assert!((first.x - 0.0).abs() <= 1e-9);
    assert!((first.y - 500.0).abs() <= 1e-9);
    assert_eq!(first.stroke_width, 2.0);
}

#[test]
fn points_style_falls_back_to_markers_only() {
    let mut engine = engine_with(vec![SeriesOptions::new(
        "dots",
        SeriesRenderConfig::new(DrawStyle::Points),
    )]);
    engine.render().expect("render");

    let frame = engine.renderer().last_frame.clone().expect("frame");
    let dots = &frame.series[0];
    assert_eq!(dots.routine, None);
    assert!(dots.path.is_none());
    assert_eq!(dots.markers.len(), 11);
    assert_eq!(dots.stroke_width, 1.0);
}

#[test]
fn bars_are_sized_from_column_width() {
    let mut engine = engine_with(vec![SeriesOptions::new(
        "bars",
        SeriesRenderConfig::new(DrawStyle::Bars),
    )]);
    engine.render().expect("render");

    let frame = engine.renderer().last_frame.clone().expect("frame");
    let path = frame.series[0].path.clone().expect("bar path");
    assert_eq!(path.stroke.len(), 11);
    // 100 px between samples, 60 % of it per bar.
    match path.stroke[5] {
        PathCommand::Rect { x, y, width, height } => {
            assert!((width - 60.0).abs() <= 1e-9);
            assert!((x - 470.0).abs() <= 1e-9);
            assert!((y - 250.0).abs() <= 1e-9);
            assert!((height - 250.0).abs() <= 1e-9);
        }
        other => panic!("expected rect, got {other:?}"),
    }
}

#[test]
fn aligned_bars_sit_beside_their_sample() {
    let mut engine = engine_with(vec![
        SeriesOptions::new("left", SeriesRenderConfig::new(DrawStyle::BarsLeft)),
        SeriesOptions::new("right", SeriesRenderConfig::new(DrawStyle::BarsRight)),
    ]);
    engine.render().expect("render");

    let frame = engine.renderer().last_frame.clone().expect("frame");
    let left = frame.series[0].path.clone().expect("left");
    let right = frame.series[1].path.clone().expect("right");
    let PathCommand::Rect { x, width, .. } = left.stroke[2] else {
        panic!("expected rect");
    };
    assert!((x - 100.0).abs() <= 1e-9);
    assert!((width - 100.0).abs() <= 1e-9);
    let PathCommand::Rect { x, .. } = right.stroke[2] else {
        panic!("expected rect");
    };
    assert!((x - 200.0).abs() <= 1e-9);
}

#[test]
fn spline_series_emit_cubic_segments() {
    let mut engine = engine_with(vec![SeriesOptions::new(
        "smooth",
        SeriesRenderConfig::line(Some(LineInterpolation::Spline)),
    )]);
    engine.render().expect("render");

    let frame = engine.renderer().last_frame.clone().expect("frame");
    let path = frame.series[0].path.clone().expect("spline path");
    let cubic = path
        .stroke
        .iter()
        .filter(|command| matches!(command, PathCommand::CubicTo { .. }))
        .count();
    assert_eq!(cubic, 10);
}

#[test]
fn only_visible_window_plus_neighbours_is_drawn() {
    let mut engine = engine_with(vec![SeriesOptions::new("ramp", SeriesRenderConfig::line(None))]);
    engine
        .set_x_range(AxisRange::new(2.0, 4.0).expect("range"))
        .expect("set range");
    engine.render().expect("render");

    let frame = engine.renderer().last_frame.clone().expect("frame");
    assert_eq!(frame.series[0].markers.len(), 5);
}

#[test]
fn title_is_centered_at_the_top() {
    let config = PlotEngineConfig::new(Viewport::new(800, 400)).with_title("Boiler temperature");
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.render().expect("render");

    let frame = engine.renderer().last_frame.clone().expect("frame");
    assert_eq!(frame.texts.len(), 1);
    assert_eq!(frame.texts[0].text, "Boiler temperature");
    assert_eq!(frame.texts[0].h_align, TextHAlign::Center);
    assert!((frame.texts[0].x - 400.0).abs() <= 1e-9);
}

#[test]
fn resize_keeps_ranges_in_data_units() {
    let mut engine = engine_with(Vec::new());
    let x_before = engine.x_range();

    engine.set_viewport(Viewport::new(500, 250)).expect("resize");

    assert_eq!(engine.x_range(), x_before);
    assert_eq!(engine.viewport(), Viewport::new(500, 250));
    let right_edge = engine.val_to_pos(10.0, trend_plot::core::Axis::X).expect("pos");
    assert!((right_edge - 500.0).abs() <= 1e-9);
    assert!(engine.set_viewport(Viewport::new(0, 10)).is_err());
}
