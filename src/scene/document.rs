use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Viewport;
use crate::foundation::error::{GraphError, GraphResult};
use crate::scene::line::Line;
use crate::scene::shading::Shading;

/// On-disk graph description: what the CLI reads and what embedders persist.
///
/// `shading` and `viewport` may be omitted; `samples` overrides the session's sample count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Curves in draw order.
    pub lines: Vec<Line>,
    /// Shaded regions.
    #[serde(default)]
    pub shading: Vec<Shading>,
    /// Visible rectangle.
    #[serde(default)]
    pub viewport: Viewport,
    /// Samples per curve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
}

impl GraphDocument {
    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> GraphResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| GraphError::serde(format!("parse graph document JSON: {e}")))
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading graph document");
        let f = File::open(path).map_err(|e| {
            GraphError::validation(format!("open graph document '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a document from a JSON string.
    pub fn from_json_str(s: &str) -> GraphResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| GraphError::serde(format!("parse graph document JSON: {e}")))
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::serde(format!("serialize graph document: {e}")))
    }

    /// Check the viewport and id uniqueness.
    ///
    /// Rendering never requires this; unresolvable references simply produce no geometry.
    pub fn validate(&self) -> GraphResult<()> {
        self.viewport.validate()?;
        let mut seen = HashSet::new();
        for line in &self.lines {
            if !seen.insert(line.id()) {
                return Err(GraphError::validation(format!(
                    "duplicate line id '{}'",
                    line.id()
                )));
            }
        }
        let mut seen = HashSet::new();
        for s in &self.shading {
            if !seen.insert(s.id.as_str()) {
                return Err(GraphError::validation(format!(
                    "duplicate shading id '{}'",
                    s.id
                )));
            }
        }
        if self.samples == Some(0) {
            return Err(GraphError::validation("samples must be at least 1"));
        }
        Ok(())
    }
}

/// Serialize a line list to JSON.
pub fn lines_to_json(lines: &[Line]) -> GraphResult<String> {
    serde_json::to_string(lines).map_err(|e| GraphError::serde(format!("serialize lines: {e}")))
}

/// Parse a line list from JSON.
pub fn lines_from_json(s: &str) -> GraphResult<Vec<Line>> {
    serde_json::from_str(s).map_err(|e| GraphError::serde(format!("parse lines JSON: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
