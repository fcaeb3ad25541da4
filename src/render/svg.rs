use crate::foundation::core::{Affine, BezPath, GraphPoint, Viewport};
use crate::foundation::error::{GraphError, GraphResult};
use crate::graph::render_data::RenderData;

const GRID_OPACITY: f64 = 0.35;
const AXIS_OPACITY: f64 = 0.9;
const GRID_WIDTH: f64 = 1.0;
const AXIS_WIDTH: f64 = 1.5;
const STROKE_WIDTH_BOOST: f64 = 0.6;
const MIN_STROKE_OPACITY: f64 = 0.9;

/// Image size and colors for [`to_svg`].
#[derive(Clone, Debug, PartialEq)]
pub struct SvgOptions {
    /// Output width in pixels.
    pub width_px: u32,
    /// Output height in pixels.
    pub height_px: u32,
    /// Background fill.
    pub background: String,
    /// Regular grid line color.
    pub grid_color: String,
    /// Axis line color.
    pub axis_color: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width_px: 800,
            height_px: 800,
            background: "#ffffff".to_owned(),
            grid_color: "#94a3b8".to_owned(),
            axis_color: "#334155".to_owned(),
        }
    }
}

/// Map math coordinates in `viewport` onto a `width_px` x `height_px` pixel grid (y down).
pub fn math_to_screen(viewport: &Viewport, width_px: u32, height_px: u32) -> Affine {
    let sx = f64::from(width_px) / viewport.width();
    let sy = f64::from(height_px) / viewport.height();
    Affine::new([
        sx,
        0.0,
        0.0,
        -sy,
        -viewport.x_min * sx,
        viewport.y_max * sy,
    ])
}

/// Render `data` as a standalone SVG document.
///
/// Layers are drawn polygons first, then the grid, then curves. Curve strokes are widened by
/// 0.6px and their opacity is floored at 0.9; dashed styles use a `4 4` pattern.
#[tracing::instrument(skip(data, opts), fields(w = opts.width_px, h = opts.height_px))]
pub fn to_svg(data: &RenderData, viewport: &Viewport, opts: &SvgOptions) -> GraphResult<String> {
    if opts.width_px == 0 || opts.height_px == 0 {
        return Err(GraphError::render(format!(
            "svg size must be non-zero, got {}x{}",
            opts.width_px, opts.height_px
        )));
    }
    viewport.validate()?;

    let xf = math_to_screen(viewport, opts.width_px, opts.height_px);
    let (w, h) = (opts.width_px, opts.height_px);

    let mut out = String::with_capacity(1024 + data.point_count() * 24);
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
    ));
    out.push_str(&format!(
        "  <rect width=\"{w}\" height=\"{h}\" fill=\"{}\"/>\n",
        escape_attr(&opts.background)
    ));

    for poly in &data.shading_polygons {
        out.push_str(&format!(
            "  <path id=\"{}\" d=\"{}\" fill=\"{}\" fill-opacity=\"{}\" stroke=\"none\"/>\n",
            escape_attr(&poly.id),
            path_data(&poly.points, xf, true),
            escape_attr(&poly.color),
            poly.opacity
        ));
    }

    for line in &data.grid_lines {
        let (color, opacity, width) = if line.is_axis {
            (&opts.axis_color, AXIS_OPACITY, AXIS_WIDTH)
        } else {
            (&opts.grid_color, GRID_OPACITY, GRID_WIDTH)
        };
        out.push_str(&format!(
            "  <path id=\"{}\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{opacity}\" stroke-width=\"{width}\"/>\n",
            escape_attr(&line.id),
            path_data(&line.points, xf, false),
            escape_attr(color)
        ));
    }

    for line in &data.polylines {
        let dash = if line.style.dashed {
            " stroke-dasharray=\"4 4\""
        } else {
            ""
        };
        out.push_str(&format!(
            "  <path id=\"{}\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\" stroke-linejoin=\"round\" stroke-linecap=\"round\"{dash}/>\n",
            escape_attr(&line.id),
            path_data(&line.points, xf, false),
            escape_attr(&line.style.color),
            line.style.width + STROKE_WIDTH_BOOST,
            line.style.opacity.max(MIN_STROKE_OPACITY)
        ));
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn path_data(points: &[GraphPoint], xf: Affine, close: bool) -> String {
    let mut path = BezPath::new();
    let mut screen = points.iter().map(|p| xf * *p);
    if let Some(first) = screen.next() {
        path.move_to(first);
        for p in screen {
            path.line_to(p);
        }
        if close {
            path.close_path();
        }
    }
    path.to_svg()
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
