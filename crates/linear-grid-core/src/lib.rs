//! Core systems for linear-grid.
//!
//! This crate provides the small set of primitives the widget crates build on:
//!
//! - **Signal/Slot System**: Type-safe observer connections used for adapter
//!   change notification
//! - **Logging**: Tracing targets, logging macros and performance spans shared
//!   by every crate in the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use linear_grid_core::Signal;
//!
//! // Create a signal that notifies when a data set changes
//! let changed = Signal::<()>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = changed.connect(|_| {
//!     println!("data set changed");
//! });
//!
//! // Emit the signal
//! changed.emit(());
//!
//! // Disconnect when done
//! changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
