//! Prelude module for linear-grid.
//!
//! ```
//! use linear_grid::prelude::*;
//! ```

// ============================================================================
// Widget
// ============================================================================

pub use crate::error::{GridError, Result};
pub use crate::widget::{BindReport, GridLayoutAdapter};

// ============================================================================
// Adapters
// ============================================================================

pub use crate::adapter::{AdapterSignals, ArrayAdapter, ItemView, ListAdapter};

// ============================================================================
// Signals and Style
// ============================================================================

pub use linear_grid_core::{ConnectionId, Signal};
pub use linear_grid_style::{Color, Drawable, GridAttributes, ListTheme, Size, ThemeMode};
