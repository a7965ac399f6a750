/// Convenience result type used across glasscity.
pub type GlassCityResult<T> = Result<T, GlassCityError>;

/// Top-level error taxonomy used by generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlassCityError {
    /// Invalid user-provided configuration (sizes, padding, pack options).
    #[error("validation error: {0}")]
    Validation(String),

    /// Palette is incomplete or carries an unparsable colour.
    #[error("palette error: {0}")]
    Palette(String),

    /// Errors while parsing or rasterizing generated SVG markup.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlassCityError {
    /// Build a [`GlassCityError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlassCityError::Palette`] value.
    pub fn palette(msg: impl Into<String>) -> Self {
        Self::Palette(msg.into())
    }

    /// Build a [`GlassCityError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GlassCityError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
