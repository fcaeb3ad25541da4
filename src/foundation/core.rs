use crate::foundation::error::{GraphError, GraphResult};

pub use kurbo::{Affine, BezPath, Point, Rect};

/// A sample point in math space.
///
/// Sampled sequences may hold non-finite coordinates as discontinuity markers; every point
/// that reaches [`crate::RenderData`] is finite.
pub type GraphPoint = Point;

/// Axis-aligned visible rectangle in math coordinates.
///
/// Callers are expected to keep `x_min < x_max` and `y_min < y_max`. The core does not enforce
/// this; [`Viewport::validate`] is available for callers that want to check.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Left edge.
    pub x_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Top edge.
    pub y_max: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
        }
    }
}

impl Viewport {
    /// Create a viewport from its four edges.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Horizontal extent (`x_max - x_min`).
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Vertical extent (`y_max - y_min`).
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// The viewport as a `kurbo` rectangle (`x0 = x_min`, `y0 = y_min`).
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x_min, self.y_min, self.x_max, self.y_max)
    }

    /// Check that all edges are finite and both ranges are non-empty.
    pub fn validate(&self) -> GraphResult<()> {
        let edges = [self.x_min, self.x_max, self.y_min, self.y_max];
        if edges.iter().any(|v| !v.is_finite()) {
            return Err(GraphError::validation("viewport edges must be finite"));
        }
        if self.x_min >= self.x_max {
            return Err(GraphError::validation("viewport xMin must be < xMax"));
        }
        if self.y_min >= self.y_max {
            return Err(GraphError::validation("viewport yMin must be < yMax"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
