use crate::foundation::core::GraphPoint;
use crate::foundation::math::is_finite_point;
use crate::graph::render_data::Polyline;
use crate::scene::line::LineStyle;

/// Maximal runs of finite points with at least two members.
///
/// A point with a non-finite coordinate closes the current run; single-point runs are dropped.
pub fn finite_runs(points: &[GraphPoint]) -> impl Iterator<Item = &[GraphPoint]> {
    points
        .split(|p| !is_finite_point(*p))
        .filter(|run| run.len() >= 2)
}

/// Break a sampled curve into polylines at discontinuities.
pub fn segment_polylines(points: &[GraphPoint], line_id: &str, style: &LineStyle) -> Vec<Polyline> {
    finite_runs(points)
        .enumerate()
        .map(|(n, run)| Polyline {
            id: format!("{line_id}-{n}"),
            line_id: line_id.to_owned(),
            points: run.to_vec(),
            style: style.clone(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/graph/segment.rs"]
mod tests;
