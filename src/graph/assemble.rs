use crate::expression::cache::{ExpressionSource, Uncached};
use crate::foundation::core::Viewport;
use crate::graph::grid::build_grid;
use crate::graph::render_data::RenderData;
use crate::graph::sampler::sample_line;
use crate::graph::shading::build_shading;
use crate::scene::line::Line;
use crate::scene::shading::Shading;

/// Default number of sample intervals per curve.
pub const DEFAULT_SAMPLE_COUNT: usize = 400;

/// Build a complete [`RenderData`] snapshot, compiling every expression afresh.
///
/// Pure: inputs are not mutated and identical inputs give identical output.
pub fn build_render_data(
    lines: &[Line],
    shading: &[Shading],
    viewport: &Viewport,
    sample_count: usize,
) -> RenderData {
    build_render_data_with(lines, shading, viewport, sample_count, &mut Uncached)
}

/// [`build_render_data`] with compiled expressions drawn from `source`.
#[tracing::instrument(
    skip(lines, shading, source),
    fields(lines = lines.len(), shading = shading.len())
)]
pub fn build_render_data_with<S: ExpressionSource + ?Sized>(
    lines: &[Line],
    shading: &[Shading],
    viewport: &Viewport,
    sample_count: usize,
    source: &mut S,
) -> RenderData {
    let grid_lines = build_grid(viewport);

    let mut polylines = Vec::new();
    let mut inequality_polygons = Vec::new();
    for line in lines {
        let geo = sample_line(line, viewport, sample_count, source);
        polylines.extend(geo.polylines);
        inequality_polygons.extend(geo.shading_polygons);
    }

    let mut shading_polygons = build_shading(shading, lines, viewport, sample_count, source);
    shading_polygons.extend(inequality_polygons);

    tracing::debug!(
        grid = grid_lines.len(),
        polylines = polylines.len(),
        polygons = shading_polygons.len(),
        "render data built"
    );
    RenderData {
        grid_lines,
        polylines,
        shading_polygons,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/assemble.rs"]
mod tests;
