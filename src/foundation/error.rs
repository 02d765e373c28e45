/// Convenience result type used across diorama.
pub type DioramaResult<T> = Result<T, DioramaError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Configuration gaps never surface here; they resolve to defaults at the component boundary.
#[derive(thiserror::Error, Debug)]
pub enum DioramaError {
    /// Invalid user-provided scene or descriptor data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A vector asset that could not be read, parsed or rewritten.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DioramaError {
    /// Build a [`DioramaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DioramaError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`DioramaError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
