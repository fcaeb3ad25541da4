use crate::foundation::core::{GraphPoint, Viewport};
use crate::foundation::math::grid_step;
use crate::graph::render_data::GridLine;

/// Grid lines at "nice" positions covering `viewport`.
///
/// Vertical lines come first, then horizontal ones; ids share one counter across both axes.
/// Positions are computed as integer multiples of the step, so the zero line is exact.
pub fn build_grid(viewport: &Viewport) -> Vec<GridLine> {
    let x_step = grid_step(viewport.width());
    let y_step = grid_step(viewport.height());

    let mut out = Vec::new();
    let mut id = 0usize;

    for x in axis_positions(viewport.x_min, viewport.x_max, x_step) {
        out.push(GridLine {
            id: format!("grid-x-{id}"),
            points: [
                GraphPoint::new(x, viewport.y_min),
                GraphPoint::new(x, viewport.y_max),
            ],
            is_axis: x.abs() < f64::EPSILON,
        });
        id += 1;
    }

    for y in axis_positions(viewport.y_min, viewport.y_max, y_step) {
        out.push(GridLine {
            id: format!("grid-y-{id}"),
            points: [
                GraphPoint::new(viewport.x_min, y),
                GraphPoint::new(viewport.x_max, y),
            ],
            is_axis: y.abs() < f64::EPSILON,
        });
        id += 1;
    }

    out
}

fn axis_positions(min: f64, max: f64, step: f64) -> Vec<f64> {
    let first = (min / step).ceil();
    let last = (max / step).floor();
    if !(first.is_finite() && last.is_finite()) {
        return Vec::new();
    }
    ((first as i64)..=(last as i64))
        .map(|k| k as f64 * step)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/graph/grid.rs"]
mod tests;
