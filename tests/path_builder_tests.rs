use trend_plot::render::{
    BarAlign, BarsLayout, PathCommand, PathInput, PathRoutine, StepAlign, select_path_routine,
};
use trend_plot::core::{DrawStyle, SeriesRenderConfig};

fn input<'a>(xs: &'a [f64], ys: &'a [Option<f64>]) -> PathInput<'a> {
    PathInput {
        xs,
        ys,
        baseline_y: 100.0,
        plot_width: 400.0,
    }
}

fn rect(command: PathCommand) -> (f64, f64, f64, f64) {
    match command {
        PathCommand::Rect { x, y, width, height } => (x, y, width, height),
        other => panic!("expected rect, got {other:?}"),
    }
}

#[test]
fn step_after_holds_value_until_next_sample() {
    let xs = [0.0, 10.0, 20.0];
    let ys = [Some(50.0), Some(30.0), Some(40.0)];
    let path = PathRoutine::Stepped(StepAlign::After).build(&input(&xs, &ys));

    assert_eq!(
        path.stroke,
        vec![
            PathCommand::MoveTo { x: 0.0, y: 50.0 },
            PathCommand::LineTo { x: 10.0, y: 50.0 },
            PathCommand::LineTo { x: 10.0, y: 30.0 },
            PathCommand::LineTo { x: 20.0, y: 30.0 },
            PathCommand::LineTo { x: 20.0, y: 40.0 },
        ]
    );
}

#[test]
fn fill_closes_each_run_to_baseline() {
    let xs = [0.0, 10.0];
    let ys = [Some(50.0), Some(30.0)];
    let path = PathRoutine::Linear.build(&input(&xs, &ys));

    assert_eq!(
        path.fill,
        vec![
            PathCommand::MoveTo { x: 0.0, y: 50.0 },
            PathCommand::LineTo { x: 10.0, y: 30.0 },
            PathCommand::LineTo { x: 10.0, y: 100.0 },
            PathCommand::LineTo { x: 0.0, y: 100.0 },
            PathCommand::Close,
        ]
    );
}

#[test]
fn all_gaps_build_an_empty_path() {
    let xs = [0.0, 10.0];
    let ys = [None, None];
    for routine in [
        PathRoutine::Linear,
        PathRoutine::Spline,
        PathRoutine::Stepped(StepAlign::Before),
    ] {
        assert!(routine.build(&input(&xs, &ys)).is_empty());
    }
}

#[test]
fn spline_passes_through_samples_without_overshoot() {
    let xs = [0.0, 10.0, 20.0, 30.0];
    let ys = [Some(80.0), Some(20.0), Some(20.0), Some(60.0)];
    let path = PathRoutine::Spline.build(&input(&xs, &ys));

    let mut end_points = Vec::new();
    for command in &path.stroke {
        match *command {
            PathCommand::MoveTo { x, y } => end_points.push((x, y)),
            PathCommand::CubicTo { y1, y2, x, y, .. } => {
                // Flat segment between the two 20s stays flat.
                if x == 20.0 {
                    assert_eq!(y1, 20.0);
                    assert_eq!(y2, 20.0);
                }
                end_points.push((x, y));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
    assert_eq!(
        end_points,
        vec![(0.0, 80.0), (10.0, 20.0), (20.0, 20.0), (30.0, 60.0)]
    );
}

#[test]
fn single_sample_bar_uses_plot_width() {
    let xs = [200.0];
    let ys = [Some(40.0)];
    let routine = select_path_routine(SeriesRenderConfig::new(DrawStyle::Bars)).expect("bars");
    let path = routine.build(&input(&xs, &ys));

    let (x, y, width, height) = rect(path.stroke[0]);
    // 60 % of 400 px is capped at 100 px.
    assert_eq!(width, 100.0);
    assert_eq!(x, 150.0);
    assert_eq!(y, 40.0);
    assert_eq!(height, 60.0);
}

#[test]
fn bars_below_baseline_grow_downward() {
    let xs = [0.0, 10.0];
    let ys = [Some(120.0), None];
    let layout = BarsLayout {
        width_fraction: 1.0,
        max_width_px: None,
        align: BarAlign::Right,
    };
    let path = PathRoutine::Bars(layout).build(&input(&xs, &ys));

    assert_eq!(path.stroke.len(), 1);
    assert_eq!(rect(path.stroke[0]), (0.0, 100.0, 10.0, 20.0));
    assert_eq!(path.fill, path.stroke);
}
