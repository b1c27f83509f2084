//! Logging and tracing conventions for linear-grid.
//!
//! This module provides:
//! - Integration with the `tracing` crate for structured logging
//! - Target names for filtering logs by subsystem
//! - Performance tracing hooks for profiling bind passes
//!
//! # Tracing Integration
//!
//! linear-grid uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("linear_grid=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout linear-grid for tracing.
pub mod span_names {
    /// A full bind (teardown and rebuild) of a grid's view tree.
    pub const BIND: &str = "linear_grid::bind";
    /// A layout pass over a bound view tree.
    pub const LAYOUT: &str = "linear_grid::layout";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "linear_grid_core::signal";
    /// Style parsing and theme target.
    pub const STYLE: &str = "linear_grid_style";
    /// Adapter notification target.
    pub const ADAPTER: &str = "linear_grid::adapter";
    /// Grid bind pass target.
    pub const BIND: &str = "linear_grid::bind";
    /// Layout pass target.
    pub const LAYOUT: &str = "linear_grid::layout";
    /// Performance spans target.
    pub const PERF: &str = "linear_grid::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Debug event on the `linear_grid` target, for widget lifecycle messages.
#[macro_export]
macro_rules! grid_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "linear_grid", $($arg)*)
    };
}
