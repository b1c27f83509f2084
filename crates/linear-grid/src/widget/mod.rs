//! Widgets.

mod grid_layout_adapter;

pub use grid_layout_adapter::{BindReport, GridLayoutAdapter};
