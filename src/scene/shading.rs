use serde::{Deserialize, Serialize};

/// What a [`Shading`] describes.
///
/// Only [`ShadingKind::BetweenLines`] produces geometry from a shading record. Inequality regions
/// come from inequality expressions on cartesian lines; the other kinds are accepted for
/// round-tripping documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShadingKind {
    /// Region between the first two referenced cartesian lines.
    BetweenLines,
    /// Region bounded by an inequality.
    Inequality,
    /// Region above a line.
    Above,
    /// Region below a line.
    Below,
}

/// A shaded-region definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shading {
    /// Identity, unique within a session.
    pub id: String,
    /// Region kind.
    pub kind: ShadingKind,
    /// Referenced line ids, in order.
    pub line_ids: Vec<String>,
    /// Fill color.
    pub color: String,
    /// Fill opacity in `[0, 1]`.
    pub opacity: f64,
    /// Optional free-form expression carried with the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

impl Shading {
    /// Shade between `top` and `bottom`.
    pub fn between(
        id: impl Into<String>,
        top: impl Into<String>,
        bottom: impl Into<String>,
        color: impl Into<String>,
        opacity: f64,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ShadingKind::BetweenLines,
            line_ids: vec![top.into(), bottom.into()],
            color: color.into(),
            opacity,
            expression: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/shading.rs"]
mod tests;
