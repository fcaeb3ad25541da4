/// Convenience result type used at the crate boundary.
pub type GraphResult<T> = Result<T, GraphError>;

/// Boundary error taxonomy.
///
/// The sampling core never returns these: syntax problems travel inside
/// [`crate::CompiledExpression`] and evaluation failures are [`crate::EvalError`] values.
/// `GraphError` covers the operations around the core (document IO, export, validation helpers).
#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    /// Invalid user-provided data (documents, viewports, options).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while exporting render data to SVG or raster images.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO, with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GraphError {
    /// Build a [`GraphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GraphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`GraphError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
