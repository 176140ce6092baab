use approx::assert_relative_eq;
use trend_plot::PlotError;
use trend_plot::core::{Axis, AxisRange};
use trend_plot::interaction::{
    DEFAULT_ZOOM_FACTOR, NavigationConfig, ScaleHost, ScaleUpdate, ViewportNavigationController,
    WheelEvent,
};

struct MockHost {
    width: f64,
    height: f64,
    x: Option<AxisRange>,
    y: Option<AxisRange>,
    updates: Vec<ScaleUpdate>,
}

impl ScaleHost for MockHost {
    fn scale_range(&self, axis: Axis) -> Option<AxisRange> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    fn plot_size(&self) -> Option<(f64, f64)> {
        Some((self.width, self.height))
    }

    fn pos_to_val(&self, pos: f64, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x.map(|r| r.min + pos / self.width * r.span()),
            Axis::Y => self.y.map(|r| r.max - pos / self.height * r.span()),
        }
    }

    fn apply_scales(&mut self, update: ScaleUpdate) {
        if let Some(x) = update.x {
            self.x = Some(x);
        }
        if let Some(y) = update.y {
            self.y = Some(y);
        }
        self.updates.push(update);
    }
}

fn range(min: f64, max: f64) -> AxisRange {
    AxisRange::new(min, max).expect("finite range")
}

fn square_host() -> MockHost {
    MockHost {
        width: 200.0,
        height: 100.0,
        x: Some(range(0.0, 100.0)),
        y: Some(range(0.0, 100.0)),
        updates: Vec::new(),
    }
}

fn ready(host: &MockHost) -> ViewportNavigationController {
    let mut controller = ViewportNavigationController::default();
    assert!(controller.on_ready(host));
    controller
}

#[test]
fn zoom_in_at_center_shrinks_both_axes_around_cursor() {
    let mut host = square_host();
    let mut controller = ready(&host);

    assert!(controller.on_wheel(&mut host, WheelEvent::new(-1.0, 100.0, 50.0)));

    let x = host.x.expect("x");
    let y = host.y.expect("y");
    assert_relative_eq!(x.min, 12.5);
    assert_relative_eq!(x.max, 87.5);
    assert_relative_eq!(y.min, 12.5);
    assert_relative_eq!(y.max, 87.5);
}

#[test]
fn zoom_keeps_value_under_cursor_fixed() {
    let mut host = square_host();
    let mut controller = ready(&host);
    let (cursor_x, cursor_y) = (50.0, 20.0);
    let before_x = host.pos_to_val(cursor_x, Axis::X).expect("x anchor");
    let before_y = host.pos_to_val(cursor_y, Axis::Y).expect("y anchor");

    controller.on_wheel(&mut host, WheelEvent::new(-3.0, cursor_x, cursor_y));

    assert_relative_eq!(host.pos_to_val(cursor_x, Axis::X).expect("x"), before_x, epsilon = 1e-9);
    assert_relative_eq!(host.pos_to_val(cursor_y, Axis::Y).expect("y"), before_y, epsilon = 1e-9);
}

#[test]
fn repeated_zoom_out_snaps_exactly_to_baseline() {
    let mut host = square_host();
    let mut controller = ready(&host);
    host.x = Some(range(10.0, 40.0));

    for _ in 0..10 {
        controller.on_wheel(&mut host, WheelEvent::new(1.0, 100.0, 50.0));
    }

    assert_eq!(host.x, Some(range(0.0, 100.0)));
    assert_eq!(host.y, Some(range(0.0, 100.0)));
}

#[test]
fn zoom_out_near_edge_slides_back_inside_baseline() {
    let mut host = square_host();
    let mut controller = ready(&host);
    host.x = Some(range(0.0, 30.0));

    controller.on_wheel(&mut host, WheelEvent::new(1.0, 0.0, 50.0));

    let x = host.x.expect("x");
    assert_relative_eq!(x.min, 0.0);
    assert_relative_eq!(x.max, 40.0);
}

#[test]
fn both_axes_arrive_in_one_update() {
    let mut host = square_host();
    let mut controller = ready(&host);

    controller.on_wheel(&mut host, WheelEvent::new(-1.0, 40.0, 70.0));

    assert_eq!(host.updates.len(), 1);
    let update = host.updates[0];
    assert!(update.x.is_some());
    assert!(update.y.is_some());
}

#[test]
fn zero_delta_zooms_out() {
    let mut host = square_host();
    let mut controller = ready(&host);
    host.x = Some(range(25.0, 75.0));
    host.y = Some(range(25.0, 75.0));

    controller.on_wheel(&mut host, WheelEvent::new(0.0, 100.0, 50.0));

    let x = host.x.expect("x");
    assert_relative_eq!(x.span(), 50.0 / DEFAULT_ZOOM_FACTOR, epsilon = 1e-9);
}

#[test]
fn wheel_before_ready_changes_nothing() {
    let mut host = square_host();
    let mut controller = ViewportNavigationController::default();

    assert!(!controller.on_wheel(&mut host, WheelEvent::new(-1.0, 100.0, 50.0)));
    assert!(host.updates.is_empty());
    assert_eq!(host.x, Some(range(0.0, 100.0)));
}

#[test]
fn unreadable_axis_keeps_its_range() {
    let mut host = square_host();
    let mut controller = ready(&host);
    host.y = None;

    let update = controller.wheel_update(&host, WheelEvent::new(-1.0, 100.0, 50.0));
    assert!(update.x.is_some());
    assert_eq!(update.y, None);

    host.x = None;
    assert!(!controller.on_wheel(&mut host, WheelEvent::new(-1.0, 100.0, 50.0)));
    assert!(host.updates.is_empty());
}

#[test]
fn custom_zoom_factor_is_used() {
    let mut host = square_host();
    let mut controller = ViewportNavigationController::with_zoom_factor(0.5).expect("valid factor");
    controller.on_ready(&host);

    controller.on_wheel(&mut host, WheelEvent::new(-1.0, 100.0, 50.0));
    assert_eq!(host.x, Some(range(25.0, 75.0)));
}

#[test]
fn zoom_factor_outside_unit_interval_is_rejected() {
    for zoom_factor in [0.0, 1.0, 1.5, -0.25, f64::NAN] {
        let err = ViewportNavigationController::new(NavigationConfig {
            zoom_factor,
            ..NavigationConfig::default()
        })
        .expect_err("invalid factor");
        assert!(matches!(err, PlotError::InvalidConfig(_)));
    }
}
