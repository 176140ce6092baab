use trend_plot::PlotError;
use trend_plot::core::{Axis, AxisRange, BaselineExtents, clamp_range};

fn baseline() -> BaselineExtents {
    BaselineExtents::capture(
        AxisRange::new(0.0, 100.0).expect("x range"),
        AxisRange::new(-50.0, 50.0).expect("y range"),
    )
}

#[test]
fn window_inside_baseline_is_unchanged() {
    let clamped = baseline().clamp(Axis::X, 20.0, 30.0, 50.0);
    assert_eq!(clamped, Some(AxisRange { min: 30.0, max: 50.0 }));
}

#[test]
fn wider_window_snaps_to_baseline() {
    let clamped = baseline().clamp(Axis::X, 150.0, -25.0, 125.0);
    assert_eq!(clamped, Some(AxisRange { min: 0.0, max: 100.0 }));

    let clamped = baseline().clamp(Axis::Y, 101.0, 0.0, 101.0);
    assert_eq!(clamped, Some(AxisRange { min: -50.0, max: 50.0 }));
}

#[test]
fn window_below_min_slides_up_keeping_width() {
    let clamped = baseline().clamp(Axis::Y, 30.0, -70.0, -40.0);
    assert_eq!(clamped, Some(AxisRange { min: -50.0, max: -20.0 }));
}

#[test]
fn window_above_max_slides_down_keeping_width() {
    let clamped = baseline().clamp(Axis::X, 40.0, 80.0, 120.0);
    assert_eq!(clamped, Some(AxisRange { min: 60.0, max: 100.0 }));
}

#[test]
fn equal_width_window_is_kept_in_place() {
    let clamped = baseline().clamp(Axis::X, 100.0, 0.0, 100.0);
    assert_eq!(clamped, Some(AxisRange { min: 0.0, max: 100.0 }));
}

#[test]
fn unset_inputs_leave_axis_unchanged() {
    let base = (Some(100.0), Some(0.0), Some(100.0));
    assert_eq!(clamp_range(Some(10.0), None, Some(20.0), base.0, base.1, base.2), None);
    assert_eq!(clamp_range(Some(10.0), Some(10.0), Some(20.0), None, base.1, base.2), None);
    assert_eq!(
        clamp_range(Some(f64::INFINITY), Some(10.0), Some(20.0), base.0, base.1, base.2),
        None
    );
}

#[test]
fn zero_is_a_defined_bound() {
    let clamped = clamp_range(Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(0.0));
    assert_eq!(clamped, Some(AxisRange { min: 0.0, max: 0.0 }));
}

#[test]
fn axis_range_normalizes_order_and_rejects_non_finite() {
    let range = AxisRange::new(5.0, -5.0).expect("range");
    assert_eq!(range, AxisRange { min: -5.0, max: 5.0 });
    assert_eq!(range.span(), 10.0);
    assert!(range.contains(0.0));
    assert!(!range.contains(5.5));

    let err = AxisRange::new(f64::NAN, 1.0).expect_err("nan must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn baseline_capture_records_spans() {
    let baseline = baseline();
    assert_eq!(baseline.x_range, 100.0);
    assert_eq!(baseline.y_range, 100.0);
    assert_eq!(baseline.axis(Axis::Y), AxisRange { min: -50.0, max: 50.0 });
}
