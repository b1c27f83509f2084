//! Error types for the styling layer.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, StyleError>;

/// Errors that can occur while parsing style input.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// A color string could not be parsed.
    #[error("Unknown color '{input}': {reason}")]
    ColorParse { input: String, reason: String },

    /// Style attributes could not be deserialized.
    #[error("Invalid style attributes: {0}")]
    Attributes(#[from] toml::de::Error),
}

impl StyleError {
    /// Create a color parse error.
    pub fn color_parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ColorParse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
