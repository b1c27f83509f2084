//! Construction-time style attributes.
//!
//! Attributes are the declarative counterpart of the grid's setters. Every
//! field is optional; an absent field keeps the widget's default.
//!
//! ```toml
//! theme = "dark"
//! items_per_row = 3
//! divider = "#DEDEDE"
//! divider_height = 2
//! ```

use linear_grid_core::logging::targets;
use serde::Deserialize;

use crate::drawable::Drawable;
use crate::error::Result;
use crate::parser::parse_color;
use crate::theme::{ListTheme, ThemeMode};

/// Declarative grid configuration, typically loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridAttributes {
    /// Theme the divider defaults come from.
    pub theme: Option<ThemeMode>,
    /// Items per row. Validated by the widget, not here.
    pub items_per_row: Option<i32>,
    /// Divider color string.
    pub divider: Option<String>,
    /// Divider height in pixels. Negative values are clamped by the widget.
    pub divider_height: Option<i32>,
}

impl GridAttributes {
    /// Parse attributes from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let attributes: Self = toml::from_str(source)?;
        tracing::debug!(target: targets::STYLE, ?attributes, "loaded grid attributes");
        Ok(attributes)
    }

    /// The list theme selected by these attributes.
    pub fn list_theme(&self) -> ListTheme {
        ListTheme::for_mode(self.theme.unwrap_or_default())
    }

    /// The divider drawable named by `divider`, if any.
    ///
    /// # Errors
    ///
    /// Returns a color parse error when `divider` is present but malformed.
    pub fn divider_drawable(&self) -> Result<Option<Drawable>> {
        self.divider
            .as_deref()
            .map(|color| parse_color(color).map(Drawable::solid))
            .transpose()
    }
}
