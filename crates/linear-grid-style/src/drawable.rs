//! Background drawables.

use std::fmt;

use crate::types::Color;

/// Something that can fill the background of a view.
///
/// Dividers and item backgrounds use drawables. A solid color covers the whole
/// rectangle; a gradient blends from `top` to `bottom` over the view's height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drawable {
    /// A single flat color.
    Solid(Color),
    /// A vertical linear gradient.
    Gradient { top: Color, bottom: Color },
}

impl Drawable {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    #[inline]
    pub fn gradient(top: Color, bottom: Color) -> Self {
        Self::Gradient { top, bottom }
    }

    /// A drawable that paints nothing.
    #[inline]
    pub fn transparent() -> Self {
        Self::Solid(Color::TRANSPARENT)
    }

    /// Whether every pixel painted by this drawable is opaque.
    pub fn is_opaque(&self) -> bool {
        match *self {
            Self::Solid(color) => color.is_opaque(),
            Self::Gradient { top, bottom } => top.is_opaque() && bottom.is_opaque(),
        }
    }
}

impl From<Color> for Drawable {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// `#AARRGGBB` for solids, `#AARRGGBB..#AARRGGBB` (top to bottom) for gradients.
impl fmt::Display for Drawable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = |f: &mut fmt::Formatter<'_>, color: Color| {
            let [r, g, b, a] = color.to_rgba8();
            write!(f, "#{a:02X}{r:02X}{g:02X}{b:02X}")
        };
        match *self {
            Self::Solid(color) => hex(f, color),
            Self::Gradient { top, bottom } => {
                hex(f, top)?;
                f.write_str("..")?;
                hex(f, bottom)
            }
        }
    }
}
