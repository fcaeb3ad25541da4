use std::f64::consts::TAU;

use crate::expression::cache::ExpressionSource;
use crate::expression::compile::CompiledExpression;
use crate::expression::vm::evaluate_with_stack;
use crate::foundation::core::{GraphPoint, Viewport};
use crate::foundation::math::sample_at;
use crate::graph::inequality::{inequality_polygons, parse_inequality};
use crate::graph::render_data::{Polygon, Polyline};
use crate::graph::segment::segment_polylines;
use crate::scene::line::{CartesianLine, Domain, Line, LineKind, ParametricLine, PolarLine};

const CARTESIAN_VARS: &[&str] = &["x"];
const PARAMETRIC_VARS: &[&str] = &["t"];
const POLAR_VARS: &[&str] = &["t", "theta", "θ"];

/// Geometry produced by one line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineGeometry {
    /// Curve runs.
    pub polylines: Vec<Polyline>,
    /// Inequality regions.
    pub shading_polygons: Vec<Polygon>,
}

/// Sampling interval for `line`.
///
/// An explicit bound wins; if only one side is given the other falls back to the viewport's
/// x-range. Without a domain, parametric and polar lines sweep `[0, 2π]` and everything else
/// sweeps the viewport's x-range.
pub fn resolve_domain(line: &Line, viewport: &Viewport) -> (f64, f64) {
    domain_for(line.kind(), line.domain(), viewport)
}

pub(crate) fn domain_for(
    kind: LineKind,
    domain: Option<Domain>,
    viewport: &Viewport,
) -> (f64, f64) {
    match domain {
        Some(d) if d.is_set() => (
            d.min.unwrap_or(viewport.x_min),
            d.max.unwrap_or(viewport.x_max),
        ),
        _ => match kind {
            LineKind::Parametric | LineKind::Polar => (0.0, TAU),
            LineKind::Cartesian | LineKind::Implicit => (viewport.x_min, viewport.x_max),
        },
    }
}

/// `sample_count + 1` evenly spaced parameter values over a closed interval.
///
/// A sample count of zero has no sweep.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Sweep {
    min: f64,
    step: f64,
    intervals: usize,
}

impl Sweep {
    pub(crate) fn new((min, max): (f64, f64), intervals: usize) -> Option<Self> {
        (intervals > 0).then(|| Self {
            min,
            step: (max - min) / intervals as f64,
            intervals,
        })
    }

    pub(crate) fn params(self) -> impl Iterator<Item = f64> {
        (0..=self.intervals).map(move |i| sample_at(self.min, self.step, i))
    }

    pub(crate) fn len(self) -> usize {
        self.intervals + 1
    }
}

/// Evaluate with `value` bound to every name in `vars`. Failures become NaN.
fn eval_at(expr: &CompiledExpression, stack: &mut Vec<f64>, vars: &[&str], value: f64) -> f64 {
    evaluate_with_stack(expr, stack, |name| {
        vars.iter().any(|v| *v == name).then_some(value)
    })
    .unwrap_or(f64::NAN)
}

/// `(x, f(x))` for every x in the sweep.
pub(crate) fn sample_function(expr: &CompiledExpression, sweep: Sweep) -> Vec<GraphPoint> {
    let mut stack = Vec::with_capacity(16);
    let mut out = Vec::with_capacity(sweep.len());
    for x in sweep.params() {
        out.push(GraphPoint::new(x, eval_at(expr, &mut stack, CARTESIAN_VARS, x)));
    }
    out
}

/// Sample one line into polylines (and inequality polygons for cartesian inequalities).
///
/// Hidden lines, implicit lines, lines with a syntax error and a zero sample count produce
/// nothing.
pub fn sample_line<S: ExpressionSource + ?Sized>(
    line: &Line,
    viewport: &Viewport,
    sample_count: usize,
    source: &mut S,
) -> LineGeometry {
    if !line.is_visible() {
        return LineGeometry::default();
    }
    let Some(sweep) = Sweep::new(resolve_domain(line, viewport), sample_count) else {
        return LineGeometry::default();
    };
    match line {
        Line::Cartesian(l) => sample_cartesian(l, viewport, sweep, source),
        Line::Parametric(l) => sample_parametric(l, sweep, source),
        Line::Polar(l) => sample_polar(l, sweep, source),
        Line::Implicit(_) => LineGeometry::default(),
    }
}

fn compiled_or_skip<S: ExpressionSource + ?Sized>(
    source: &mut S,
    line_id: &str,
    text: &str,
) -> Option<std::sync::Arc<CompiledExpression>> {
    let compiled = source.compiled(text);
    if let Some(err) = &compiled.error {
        tracing::debug!(line = line_id, %err, "skipping line with syntax error");
        return None;
    }
    Some(compiled)
}

fn sample_cartesian<S: ExpressionSource + ?Sized>(
    line: &CartesianLine,
    viewport: &Viewport,
    sweep: Sweep,
    source: &mut S,
) -> LineGeometry {
    let inequality = parse_inequality(&line.expression);
    let text = inequality.map_or(line.expression.as_str(), |i| i.boundary);
    let id = line.base.id.as_str();
    let Some(compiled) = compiled_or_skip(source, id, text) else {
        return LineGeometry::default();
    };
    let points = sample_function(&compiled, sweep);

    let Some(inequality) = inequality else {
        return LineGeometry {
            polylines: segment_polylines(&points, id, &line.base.style),
            shading_polygons: Vec::new(),
        };
    };

    let mut style = line.base.style.clone();
    style.dashed = !inequality.inclusive;
    LineGeometry {
        polylines: segment_polylines(&points, id, &style),
        shading_polygons: inequality_polygons(
            &points,
            viewport,
            id,
            &line.base.style.color,
            inequality.direction,
        ),
    }
}

fn sample_parametric<S: ExpressionSource + ?Sized>(
    line: &ParametricLine,
    sweep: Sweep,
    source: &mut S,
) -> LineGeometry {
    let id = line.base.id.as_str();
    let Some(fx) = compiled_or_skip(source, id, &line.x_expression) else {
        return LineGeometry::default();
    };
    let Some(fy) = compiled_or_skip(source, id, &line.y_expression) else {
        return LineGeometry::default();
    };

    let mut stack = Vec::with_capacity(16);
    let points: Vec<_> = sweep
        .params()
        .map(|t| {
            GraphPoint::new(
                eval_at(&fx, &mut stack, PARAMETRIC_VARS, t),
                eval_at(&fy, &mut stack, PARAMETRIC_VARS, t),
            )
        })
        .collect();

    LineGeometry {
        polylines: segment_polylines(&points, id, &line.base.style),
        shading_polygons: Vec::new(),
    }
}

fn sample_polar<S: ExpressionSource + ?Sized>(
    line: &PolarLine,
    sweep: Sweep,
    source: &mut S,
) -> LineGeometry {
    let id = line.base.id.as_str();
    let Some(fr) = compiled_or_skip(source, id, &line.r_expression) else {
        return LineGeometry::default();
    };

    let mut stack = Vec::with_capacity(16);
    let points: Vec<_> = sweep
        .params()
        .map(|theta| {
            let r = eval_at(&fr, &mut stack, POLAR_VARS, theta);
            if r.is_finite() {
                GraphPoint::new(r * theta.cos(), r * theta.sin())
            } else {
                GraphPoint::new(f64::NAN, f64::NAN)
            }
        })
        .collect();

    LineGeometry {
        polylines: segment_polylines(&points, id, &line.base.style),
        shading_polygons: Vec::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/sampler.rs"]
mod tests;
