use serde::{Deserialize, Serialize};

const PALETTE: [&str; 4] = ["#1d4ed8", "#9333ea", "#ea580c", "#0f766e"];

/// Stroke presentation for a line. Passed through to the renderer unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// CSS color string.
    pub color: String,
    /// Stroke width in renderer units.
    pub width: f64,
    /// Stroke opacity in `[0, 1]`.
    pub opacity: f64,
    /// Dashed stroke.
    pub dashed: bool,
}

impl LineStyle {
    /// Default style for the `index`-th line (cycles through a four-color palette).
    pub fn palette(index: usize) -> Self {
        Self {
            color: PALETTE[index % PALETTE.len()].to_owned(),
            width: 2.0,
            opacity: 1.0,
            dashed: false,
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::palette(0)
    }
}

/// Optional sampling-domain override. A missing side falls back to the viewport's x-range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Domain {
    /// Both bounds set.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// `true` when at least one bound is set.
    pub fn is_set(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

/// Fields shared by every line kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineBase {
    /// Identity, unique within a session.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Hidden lines produce no geometry.
    pub visible: bool,
    /// Sampling-domain override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    /// Stroke style.
    pub style: LineStyle,
}

impl LineBase {
    /// Visible line labelled with its id and styled with the first palette color.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            visible: true,
            domain: None,
            style: LineStyle::default(),
        }
    }
}

/// `y = f(x)`, or an inequality such as `y <= f(x)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartesianLine {
    /// Shared fields.
    #[serde(flatten)]
    pub base: LineBase,
    /// Expression in `x`.
    pub expression: String,
}

/// `(x, y) = (f(t), g(t))`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParametricLine {
    /// Shared fields.
    #[serde(flatten)]
    pub base: LineBase,
    /// `x` as an expression in `t`.
    pub x_expression: String,
    /// `y` as an expression in `t`.
    pub y_expression: String,
}

/// `r = f(θ)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolarLine {
    /// Shared fields.
    #[serde(flatten)]
    pub base: LineBase,
    /// Radius as an expression in `t` (also `theta` / `θ`).
    pub r_expression: String,
}

/// `f(x, y) = 0`. Accepted and persisted, but not sampled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImplicitLine {
    /// Shared fields.
    #[serde(flatten)]
    pub base: LineBase,
    /// Expression in `x` and `y`.
    pub expression: String,
}

/// A curve definition, tagged by `type` in JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Line {
    /// `y = f(x)`.
    Cartesian(CartesianLine),
    /// `(f(t), g(t))`.
    Parametric(ParametricLine),
    /// `r = f(θ)`.
    Polar(PolarLine),
    /// `f(x, y) = 0`.
    Implicit(ImplicitLine),
}

/// Discriminant of [`Line`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// See [`Line::Cartesian`].
    Cartesian,
    /// See [`Line::Parametric`].
    Parametric,
    /// See [`Line::Polar`].
    Polar,
    /// See [`Line::Implicit`].
    Implicit,
}

impl Line {
    /// Cartesian line with default presentation.
    pub fn cartesian(id: impl Into<String>, expression: impl Into<String>) -> Self {
        Self::Cartesian(CartesianLine {
            base: LineBase::new(id),
            expression: expression.into(),
        })
    }

    /// Parametric line with default presentation.
    pub fn parametric(
        id: impl Into<String>,
        x_expression: impl Into<String>,
        y_expression: impl Into<String>,
    ) -> Self {
        Self::Parametric(ParametricLine {
            base: LineBase::new(id),
            x_expression: x_expression.into(),
            y_expression: y_expression.into(),
        })
    }

    /// Polar line with default presentation.
    pub fn polar(id: impl Into<String>, r_expression: impl Into<String>) -> Self {
        Self::Polar(PolarLine {
            base: LineBase::new(id),
            r_expression: r_expression.into(),
        })
    }

    /// Implicit line with default presentation.
    pub fn implicit(id: impl Into<String>, expression: impl Into<String>) -> Self {
        Self::Implicit(ImplicitLine {
            base: LineBase::new(id),
            expression: expression.into(),
        })
    }

    /// Replace the sampling domain.
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.base_mut().domain = Some(domain);
        self
    }

    /// Replace the style.
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.base_mut().style = style;
        self
    }

    /// Replace the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.base_mut().label = label.into();
        self
    }

    /// Mark the line invisible.
    pub fn hidden(mut self) -> Self {
        self.base_mut().visible = false;
        self
    }

    /// Shared fields.
    pub fn base(&self) -> &LineBase {
        match self {
            Self::Cartesian(l) => &l.base,
            Self::Parametric(l) => &l.base,
            Self::Polar(l) => &l.base,
            Self::Implicit(l) => &l.base,
        }
    }

    /// Mutable shared fields.
    pub fn base_mut(&mut self) -> &mut LineBase {
        match self {
            Self::Cartesian(l) => &mut l.base,
            Self::Parametric(l) => &mut l.base,
            Self::Polar(l) => &mut l.base,
            Self::Implicit(l) => &mut l.base,
        }
    }

    /// Line identity.
    pub fn id(&self) -> &str {
        &self.base().id
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.base().label
    }

    /// Whether the line is drawn.
    pub fn is_visible(&self) -> bool {
        self.base().visible
    }

    /// Sampling-domain override.
    pub fn domain(&self) -> Option<Domain> {
        self.base().domain
    }

    /// Stroke style.
    pub fn style(&self) -> &LineStyle {
        &self.base().style
    }

    /// Variant discriminant.
    pub fn kind(&self) -> LineKind {
        match self {
            Self::Cartesian(_) => LineKind::Cartesian,
            Self::Parametric(_) => LineKind::Parametric,
            Self::Polar(_) => LineKind::Polar,
            Self::Implicit(_) => LineKind::Implicit,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/line.rs"]
mod tests;
