use serde::{Deserialize, Serialize};

use crate::foundation::core::GraphPoint;
use crate::scene::line::LineStyle;

/// One drawable run of a sampled curve. Every point is finite and there are at least two.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polyline {
    /// `{line_id}-{n}`, numbered per line.
    pub id: String,
    /// Owning line.
    pub line_id: String,
    /// Math-space points.
    pub points: Vec<GraphPoint>,
    /// Stroke style (inequality boundaries override `dashed`).
    pub style: LineStyle,
}

/// A full-width or full-height grid line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLine {
    /// `grid-x-{n}` or `grid-y-{n}`.
    pub id: String,
    /// Endpoints on opposite viewport edges.
    pub points: [GraphPoint; 2],
    /// The line sits on coordinate zero.
    pub is_axis: bool,
}

/// A filled region. The ring is open; consumers close it back to the first point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polygon {
    /// Polygon identity.
    pub id: String,
    /// Originating shading id (or line id for inequality shading).
    pub shading_id: String,
    /// Math-space ring.
    pub points: Vec<GraphPoint>,
    /// Fill color.
    pub color: String,
    /// Fill opacity.
    pub opacity: f64,
}

/// Everything a renderer needs for one frame, in math coordinates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderData {
    /// Grid, x lines first.
    pub grid_lines: Vec<GridLine>,
    /// Curve runs in line order.
    pub polylines: Vec<Polyline>,
    /// Between-lines polygons, then inequality polygons.
    pub shading_polygons: Vec<Polygon>,
}

impl RenderData {
    /// Total number of points across polylines and polygons.
    pub fn point_count(&self) -> usize {
        self.polylines.iter().map(|p| p.points.len()).sum::<usize>()
            + self
                .shading_polygons
                .iter()
                .map(|p| p.points.len())
                .sum::<usize>()
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> crate::foundation::error::GraphResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            crate::foundation::error::GraphError::serde(format!("serialize render data: {e}"))
        })
    }
}
