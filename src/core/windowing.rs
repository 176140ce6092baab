use crate::core::AxisRange;

/// Inclusive index window of samples to feed a path routine.
///
/// Covers every x inside `visible` plus one neighbour on each side so lines
/// and steps run continuously off the plot edges. Returns `None` when no
/// sample falls inside or next to the window.
#[must_use]
pub fn visible_index_window(xs: &[f64], visible: AxisRange) -> Option<(usize, usize)> {
    if xs.is_empty() {
        return None;
    }

    let first_inside = xs.partition_point(|&x| x < visible.min);
    let end_inside = xs.partition_point(|&x| x <= visible.max);

    if first_inside >= end_inside {
        // Nothing inside; keep the pair straddling the window so a segment
        // crossing the whole plot is still drawn.
        if first_inside == 0 || first_inside == xs.len() {
            return None;
        }
        return Some((first_inside - 1, first_inside));
    }

    let idx0 = first_inside.saturating_sub(1);
    let idx1 = end_inside.min(xs.len() - 1);
    Some((idx0, idx1))
}

/// Index of the sample whose x is closest to `x`.
#[must_use]
pub fn nearest_index(xs: &[f64], x: f64) -> Option<usize> {
    if xs.is_empty() || !x.is_finite() {
        return None;
    }
    let upper = xs.partition_point(|&v| v < x);
    if upper == 0 {
        return Some(0);
    }
    if upper == xs.len() {
        return Some(xs.len() - 1);
    }
    let lower = upper - 1;
    if (x - xs[lower]) <= (xs[upper] - x) {
        Some(lower)
    } else {
        Some(upper)
    }
}
