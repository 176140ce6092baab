use crate::render::path_selector::{BarAlign, BarsLayout, PathRoutine, StepAlign};
use crate::render::primitives::{PathCommand, SeriesPath};

/// Projected samples of the visible window, in plot-surface pixels.
///
/// `ys[i]` is `None` for a gap. `baseline_y` is the pixel row fills and bars
/// grow from.
#[derive(Debug, Clone, Copy)]
pub struct PathInput<'a> {
    pub xs: &'a [f64],
    pub ys: &'a [Option<f64>],
    pub baseline_y: f64,
    pub plot_width: f64,
}

impl PathRoutine {
    /// Builds stroke and fill geometry for one series.
    #[must_use]
    pub fn build(self, input: &PathInput<'_>) -> SeriesPath {
        match self {
            Self::Bars(layout) => build_bars(layout, input),
            Self::Linear => build_runs(input, push_linear),
            Self::Stepped(StepAlign::After) => build_runs(input, push_step_after),
            Self::Stepped(StepAlign::Before) => build_runs(input, push_step_before),
            Self::Spline => build_runs(input, push_monotone_spline),
        }
    }
}

type Run = Vec<(f64, f64)>;

/// Splits samples at gaps into connected runs.
fn connected_runs(input: &PathInput<'_>) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut current = Run::new();
    for (&x, y) in input.xs.iter().zip(input.ys.iter()) {
        match y {
            Some(y) => current.push((x, *y)),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn build_runs(input: &PathInput<'_>, push_run: fn(&mut Vec<PathCommand>, &[(f64, f64)])) -> SeriesPath {
    let mut path = SeriesPath::default();
    for run in connected_runs(input) {
        let start = path.stroke.len();
        push_run(&mut path.stroke, &run);

        let (first_x, _) = run[0];
        let (last_x, _) = run[run.len() - 1];
        path.fill.extend_from_slice(&path.stroke[start..]);
        path.fill.push(PathCommand::LineTo {
            x: last_x,
            y: input.baseline_y,
        });
        path.fill.push(PathCommand::LineTo {
            x: first_x,
            y: input.baseline_y,
        });
        path.fill.push(PathCommand::Close);
    }
    path
}

fn push_linear(out: &mut Vec<PathCommand>, run: &[(f64, f64)]) {
    let (x0, y0) = run[0];
    out.push(PathCommand::MoveTo { x: x0, y: y0 });
    out.extend(run[1..].iter().map(|&(x, y)| PathCommand::LineTo { x, y }));
}

fn push_step_after(out: &mut Vec<PathCommand>, run: &[(f64, f64)]) {
    let (x0, mut prev_y) = run[0];
    out.push(PathCommand::MoveTo { x: x0, y: prev_y });
    for &(x, y) in &run[1..] {
        out.push(PathCommand::LineTo { x, y: prev_y });
        out.push(PathCommand::LineTo { x, y });
        prev_y = y;
    }
}

fn push_step_before(out: &mut Vec<PathCommand>, run: &[(f64, f64)]) {
    let (mut prev_x, y0) = run[0];
    out.push(PathCommand::MoveTo { x: prev_x, y: y0 });
    for &(x, y) in &run[1..] {
        out.push(PathCommand::LineTo { x: prev_x, y });
        out.push(PathCommand::LineTo { x, y });
        prev_x = x;
    }
}

/// Monotone cubic interpolation along x (Fritsch-Carlson tangents), so the
/// curve never overshoots between samples.
fn push_monotone_spline(out: &mut Vec<PathCommand>, run: &[(f64, f64)]) {
    let mut points: Run = Vec::with_capacity(run.len());
    for &point in run {
        if points.last() != Some(&point) {
            points.push(point);
        }
    }

    let (x0, y0) = points[0];
    out.push(PathCommand::MoveTo { x: x0, y: y0 });
    match points.len() {
        1 => return,
        2 => {
            let (x1, y1) = points[1];
            out.push(PathCommand::LineTo { x: x1, y: y1 });
            return;
        }
        _ => {}
    }

    let n = points.len();
    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = end_tangent(points[0], points[1], tangents[1]);
    tangents[n - 1] = end_tangent(points[n - 2], points[n - 1], tangents[n - 2]);

    for i in 0..n - 1 {
        let (xa, ya) = points[i];
        let (xb, yb) = points[i + 1];
        let dx = (xb - xa) / 3.0;
        out.push(PathCommand::CubicTo {
            x1: xa + dx,
            y1: ya + dx * tangents[i],
            x2: xb - dx,
            y2: yb - dx * tangents[i + 1],
            x: xb,
            y: yb,
        });
    }
}

fn interior_tangent(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    let s0 = (p1.1 - p0.1) / h0;
    let s1 = (p2.1 - p1.1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let v = (s0.signum() + s1.signum()) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if v.is_finite() { v } else { 0.0 }
}

fn end_tangent(p0: (f64, f64), p1: (f64, f64), neighbour: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h != 0.0 {
        (3.0 * (p1.1 - p0.1) / h - neighbour) / 2.0
    } else {
        neighbour
    }
}

fn build_bars(layout: BarsLayout, input: &PathInput<'_>) -> SeriesPath {
    let column = column_width(input.xs).unwrap_or(input.plot_width);
    let mut width = column * layout.width_fraction;
    if let Some(max) = layout.max_width_px {
        width = width.min(max);
    }

    let mut rects = Vec::with_capacity(input.xs.len());
    for (&x, y) in input.xs.iter().zip(input.ys.iter()) {
        let Some(y) = *y else {
            continue;
        };
        let left = match layout.align {
            BarAlign::Center => x - width / 2.0,
            BarAlign::Left => x - width,
            BarAlign::Right => x,
        };
        rects.push(PathCommand::Rect {
            x: left,
            y: y.min(input.baseline_y),
            width,
            height: (y - input.baseline_y).abs(),
        });
    }

    SeriesPath {
        stroke: rects.clone(),
        fill: rects,
    }
}

/// Smallest positive pixel distance between consecutive samples.
fn column_width(xs: &[f64]) -> Option<f64> {
    xs.windows(2)
        .map(|pair| pair[1] - pair[0])
        .filter(|gap| *gap > 0.0)
        .min_by(f64::total_cmp)
}

#[cfg(test)]
mod tests {
    use super::PathInput;
    use crate::render::{PathCommand, PathRoutine, StepAlign};

    #[test]
    fn gap_starts_a_new_subpath() {
        let xs = [0.0, 10.0, 20.0, 30.0];
        let ys = [Some(5.0), Some(6.0), None, Some(7.0)];
        let input = PathInput {
            xs: &xs,
            ys: &ys,
            baseline_y: 100.0,
            plot_width: 30.0,
        };
        let path = PathRoutine::Linear.build(&input);
        let moves = path
            .stroke
            .iter()
            .filter(|command| matches!(command, PathCommand::MoveTo { .. }))
            .count();
        assert_eq!(moves, 2);
        let closes = path
            .fill
            .iter()
            .filter(|command| matches!(command, PathCommand::Close))
            .count();
        assert_eq!(closes, 2);
    }

    #[test]
    fn step_before_rises_at_previous_x() {
        let xs = [0.0, 10.0];
        let ys = [Some(5.0), Some(8.0)];
        let input = PathInput {
            xs: &xs,
            ys: &ys,
            baseline_y: 100.0,
            plot_width: 10.0,
        };
        let path = PathRoutine::Stepped(StepAlign::Before).build(&input);
        assert_eq!(
            path.stroke,
            vec![
                PathCommand::MoveTo { x: 0.0, y: 5.0 },
                PathCommand::LineTo { x: 0.0, y: 8.0 },
                PathCommand::LineTo { x: 10.0, y: 8.0 },
            ]
        );
    }
}
