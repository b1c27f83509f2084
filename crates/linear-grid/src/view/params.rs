//! Layout parameters attached to every view.

/// Layout orientation for linear containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Items are arranged left to right.
    #[default]
    Horizontal,
    /// Items are arranged top to bottom.
    Vertical,
}

/// How a view sizes itself along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// As large as the parent allows.
    MatchParent,
    /// Just large enough for the content.
    #[default]
    WrapContent,
    /// An exact size in pixels.
    Fixed(f32),
}

/// Per-view layout request, interpreted by the parent container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutParams {
    /// Requested width.
    pub width: Dimension,
    /// Requested height.
    pub height: Dimension,
    /// Share of the parent's leftover main-axis space. Zero means no share.
    pub weight: f32,
}

impl LayoutParams {
    /// Create parameters without a weight.
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self {
            width,
            height,
            weight: 0.0,
        }
    }

    /// Full width, height of the content.
    pub const fn match_width() -> Self {
        Self::new(Dimension::MatchParent, Dimension::WrapContent)
    }

    /// A weighted slot in a horizontal container: zero base width, content height.
    pub const fn weighted(weight: f32) -> Self {
        Self {
            width: Dimension::Fixed(0.0),
            height: Dimension::WrapContent,
            weight,
        }
    }
}
