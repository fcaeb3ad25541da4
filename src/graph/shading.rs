use crate::expression::cache::ExpressionSource;
use crate::foundation::core::Viewport;
use crate::foundation::math::is_finite_point;
use crate::graph::render_data::Polygon;
use crate::graph::sampler::{Sweep, domain_for, sample_function};
use crate::scene::line::{Line, LineKind};
use crate::scene::shading::{Shading, ShadingKind};

/// Polygons for every shading request, in request order.
pub fn build_shading<S: ExpressionSource + ?Sized>(
    shading: &[Shading],
    lines: &[Line],
    viewport: &Viewport,
    sample_count: usize,
    source: &mut S,
) -> Vec<Polygon> {
    shading
        .iter()
        .filter(|s| s.kind == ShadingKind::BetweenLines)
        .filter_map(|s| between_lines(s, lines, viewport, sample_count, source))
        .collect()
}

/// Closed ribbon between the first two referenced lines.
///
/// Both lines must exist and be cartesian. They are sampled over the first line's domain; each
/// curve keeps only its finite points, and the ring is the first curve followed by the second in
/// reverse. Visibility is not consulted. Returns `None` when either curve has fewer than two
/// finite points, either expression fails to compile, or `sample_count` is zero.
pub fn between_lines<S: ExpressionSource + ?Sized>(
    shading: &Shading,
    lines: &[Line],
    viewport: &Viewport,
    sample_count: usize,
    source: &mut S,
) -> Option<Polygon> {
    let [first_id, second_id, ..] = shading.line_ids.as_slice() else {
        return None;
    };
    let find = |id: &str| lines.iter().find(|l| l.id() == id);
    let (Line::Cartesian(first), Line::Cartesian(second)) =
        (find(first_id.as_str())?, find(second_id.as_str())?)
    else {
        return None;
    };

    let top_expr = source.compiled(&first.expression);
    let bottom_expr = source.compiled(&second.expression);
    if !(top_expr.is_ok() && bottom_expr.is_ok()) {
        tracing::debug!(shading = %shading.id, "skipping shading with a syntax error");
        return None;
    }

    let domain = domain_for(LineKind::Cartesian, first.base.domain, viewport);
    let sweep = Sweep::new(domain, sample_count)?;
    let mut top = sample_function(&top_expr, sweep);
    let mut bottom = sample_function(&bottom_expr, sweep);
    top.retain(|p| is_finite_point(*p));
    bottom.retain(|p| is_finite_point(*p));
    if top.len() < 2 || bottom.len() < 2 {
        return None;
    }

    top.extend(bottom.into_iter().rev());
    Some(Polygon {
        id: format!("shade-{}", shading.id),
        shading_id: shading.id.clone(),
        points: top,
        color: shading.color.clone(),
        opacity: shading.opacity,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/graph/shading.rs"]
mod tests;
