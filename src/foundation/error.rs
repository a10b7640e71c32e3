/// Convenience result type used across the crate.
pub type BouquetResult<T> = Result<T, BouquetError>;

/// Top-level error type.
#[derive(thiserror::Error, Debug)]
pub enum BouquetError {
    /// Invalid user-provided configuration or input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure while rasterizing or reading back a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Animation loop driven out of order.
    #[error("loop error: {0}")]
    Loop(String),

    /// Failure while writing frames out.
    #[error("encode error: {0}")]
    Encode(String),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BouquetError {
    /// Build a [`BouquetError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BouquetError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BouquetError::Loop`] value.
    pub fn looping(msg: impl Into<String>) -> Self {
        Self::Loop(msg.into())
    }

    /// Build a [`BouquetError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`BouquetError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
