//! List theme defaults.
//!
//! A [`ListTheme`] carries the separator appearance that native vertical lists
//! use. Grid widgets seed their divider from it so that unstyled grids blend in
//! with the rest of an application.

use serde::Deserialize;

use crate::drawable::Drawable;
use crate::types::Color;

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Separator defaults for list-like widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct ListTheme {
    /// Divider/separator drawable.
    pub divider: Option<Drawable>,
    /// Divider height in pixels.
    pub divider_height: i32,
}

impl ListTheme {
    /// Create a light theme.
    pub fn light() -> Self {
        Self {
            divider: Some(Drawable::solid(Color::from_rgba8(0, 0, 0, 0x1F))),
            divider_height: 1,
        }
    }

    /// Create a dark theme.
    pub fn dark() -> Self {
        Self {
            divider: Some(Drawable::solid(Color::from_rgba8(0xFF, 0xFF, 0xFF, 0x1F))),
            divider_height: 1,
        }
    }

    /// The theme for a given mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

impl Default for ListTheme {
    fn default() -> Self {
        Self::light()
    }
}
