use crate::foundation::core::{GraphPoint, Viewport};
use crate::graph::render_data::Polygon;
use crate::graph::segment::finite_runs;

/// Fill opacity of inequality regions.
pub const INEQUALITY_OPACITY: f64 = 0.14;

const COMPARATORS: [&str; 4] = ["<=", ">=", "<", ">"];

/// Which side of the boundary is filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShadeDirection {
    /// Fill up to the viewport's top edge.
    Above,
    /// Fill down to the viewport's bottom edge.
    Below,
}

/// A cartesian expression of the form `y <op> f(x)` or `f(x) <op> y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Inequality<'a> {
    /// The `f(x)` side, trimmed.
    pub boundary: &'a str,
    /// Filled side.
    pub direction: ShadeDirection,
    /// `<=` / `>=`. Inclusive boundaries are stroked solid, strict ones dashed.
    pub inclusive: bool,
}

/// Recognize an inequality.
///
/// Comparators are tried in the order `<=`, `>=`, `<`, `>`; the first one present splits the
/// text at its first occurrence. One trimmed side must be exactly `y` (either case) and the other
/// must be non-empty. With `y` on the right the comparator reads mirrored, so `f(x) > y` fills
/// below.
pub fn parse_inequality(text: &str) -> Option<Inequality<'_>> {
    let (op, at) = COMPARATORS
        .iter()
        .find_map(|op| text.find(op).map(|at| (*op, at)))?;
    let left = text[..at].trim();
    let right = text[at + op.len()..].trim();
    if left.is_empty() || right.is_empty() {
        return None;
    }

    let less = op.starts_with('<');
    let inclusive = op.ends_with('=');
    if left.eq_ignore_ascii_case("y") {
        Some(Inequality {
            boundary: right,
            direction: if less {
                ShadeDirection::Below
            } else {
                ShadeDirection::Above
            },
            inclusive,
        })
    } else if right.eq_ignore_ascii_case("y") {
        Some(Inequality {
            boundary: left,
            direction: if less {
                ShadeDirection::Above
            } else {
                ShadeDirection::Below
            },
            inclusive,
        })
    } else {
        None
    }
}

/// One capped polygon per finite run of `boundary`.
///
/// Each ring is the run followed by the cap edge (`y_min` below, `y_max` above) under the run's
/// last and first x.
pub fn inequality_polygons(
    boundary: &[GraphPoint],
    viewport: &Viewport,
    line_id: &str,
    color: &str,
    direction: ShadeDirection,
) -> Vec<Polygon> {
    let cap = match direction {
        ShadeDirection::Below => viewport.y_min,
        ShadeDirection::Above => viewport.y_max,
    };
    finite_runs(boundary)
        .enumerate()
        .map(|(n, run)| {
            let first = run[0];
            let last = run[run.len() - 1];
            let mut points = Vec::with_capacity(run.len() + 2);
            points.extend_from_slice(run);
            points.push(GraphPoint::new(last.x, cap));
            points.push(GraphPoint::new(first.x, cap));
            Polygon {
                id: format!("{line_id}-shade-{n}"),
                shading_id: line_id.to_owned(),
                points,
                color: color.to_owned(),
                opacity: INEQUALITY_OPACITY,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/graph/inequality.rs"]
mod tests;
