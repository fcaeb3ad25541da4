/// Number of grid divisions targeted per axis.
pub(crate) const GRID_DIVISIONS: f64 = 10.0;

/// Snap `raw` down to the nearest value of the form `{1, 2, 5} x 10^k`.
///
/// Non-positive or non-finite input yields `1.0`, so a degenerate range still produces a usable
/// step.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw > 0.0) || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    if normalized >= 5.0 {
        5.0 * magnitude
    } else if normalized >= 2.0 {
        2.0 * magnitude
    } else {
        magnitude
    }
}

/// Grid spacing for an axis spanning `range`.
pub fn grid_step(range: f64) -> f64 {
    nice_step(range / GRID_DIVISIONS)
}

/// Parameter value of sample `i` in a uniform sweep starting at `min` with spacing `step`.
pub(crate) fn sample_at(min: f64, step: f64, i: usize) -> f64 {
    min + step * i as f64
}

pub(crate) fn is_finite_point(p: kurbo::Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
