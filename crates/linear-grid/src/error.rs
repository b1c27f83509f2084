//! Error types for the grid widget.

use linear_grid_style::StyleError;

use crate::view::ViewError;

/// A specialized Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors returned by [`GridLayoutAdapter`](crate::GridLayoutAdapter).
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Items per row was zero or negative.
    #[error("items per row must be positive, got {items_per_row}")]
    InvalidConfiguration { items_per_row: i32 },

    /// A divider color or style attribute could not be parsed.
    #[error(transparent)]
    Style(#[from] StyleError),

    /// The view tree rejected an operation.
    #[error("View tree error: {0}")]
    View(#[from] ViewError),
}

impl GridError {
    /// Whether this is a color parse failure.
    pub fn is_color_parse(&self) -> bool {
        matches!(self, Self::Style(StyleError::ColorParse { .. }))
    }
}
