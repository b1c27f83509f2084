//! linear-grid - a grid-like container built from nested linear rows.
//!
//! [`GridLayoutAdapter`] lays out the items of a [`ListAdapter`] in rows of a
//! fixed number of equal-width slots, with optional dividers between rows.
//! It rebuilds its whole view tree whenever the adapter reports a change.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use linear_grid::prelude::*;
//!
//! let fruits = Arc::new(ArrayAdapter::new(
//!     vec!["apple", "banana", "cherry", "damson", "elder"],
//!     |_, name: &&str| Some(ItemView::new(*name).with_preferred_size(60.0, 20.0)),
//! ));
//!
//! let mut grid = GridLayoutAdapter::new(&ListTheme::light());
//! grid.set_items_per_row(2)?;
//! grid.set_adapter(fruits)?;
//!
//! assert_eq!(grid.rows(), [vec!["apple", "banana"], vec!["cherry", "damson"], vec!["elder"]]);
//!
//! let size = grid.layout(200.0);
//! assert_eq!(size.width, 200.0);
//! # Ok::<(), GridError>(())
//! ```

pub mod adapter;
mod error;
pub mod logging;
pub mod prelude;
pub mod view;
pub mod widget;

pub use error::{GridError, Result};
pub use widget::{BindReport, GridLayoutAdapter};
