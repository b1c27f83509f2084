//! Styling for linear-grid.
//!
//! This crate provides the visual vocabulary used by the grid widget:
//!
//! - Geometry and color types ([`Size`], [`Rect`], [`Color`])
//! - Backgrounds ([`Drawable`])
//! - Color string parsing ([`parse_color`])
//! - Theme defaults for list separators ([`ListTheme`])
//! - Construction-time style attributes ([`GridAttributes`]), loadable from TOML
//!
//! # Example
//!
//! ```
//! use linear_grid_style::{parse_color, Color, Drawable};
//!
//! let color = parse_color("#DEDEDE").unwrap();
//! assert_eq!(color, Color::from_rgb8(222, 222, 222));
//!
//! let divider = Drawable::solid(color);
//! assert!(divider.is_opaque());
//! ```

mod attributes;
mod drawable;
mod error;
mod parser;
mod theme;
mod types;

pub use attributes::GridAttributes;
pub use drawable::Drawable;
pub use error::{Result, StyleError};
pub use parser::parse_color;
pub use theme::{ListTheme, ThemeMode};
pub use types::{Color, Point, Rect, Size};
