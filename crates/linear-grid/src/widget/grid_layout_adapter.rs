//! Grid-like container built from linear rows.
//!
//! [`GridLayoutAdapter`] takes the items of a [`ListAdapter`] and arranges them
//! in rows of `items_per_row` equal-width slots inside a vertical container,
//! with an optional divider between consecutive rows. It is meant for small,
//! static data sets: every bind throws the whole child tree away and builds a
//! new one, and no view is ever recycled.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use linear_grid::adapter::{ArrayAdapter, ItemView};
//! use linear_grid::GridLayoutAdapter;
//! use linear_grid_style::ListTheme;
//!
//! let adapter = Arc::new(ArrayAdapter::new((0..7).collect(), |_, n: &i32| {
//!     Some(ItemView::new(format!("item {n}")).with_preferred_size(40.0, 24.0))
//! }));
//!
//! let mut grid = GridLayoutAdapter::new(&ListTheme::light());
//! grid.set_items_per_row(3)?;
//! grid.set_divider_color("#DEDEDE")?;
//! grid.set_adapter(adapter.clone())?;
//!
//! assert_eq!(grid.row_count(), 3);
//! assert_eq!(grid.divider_count(), 2);
//!
//! // Data changes rebuild the grid.
//! adapter.push(7);
//! adapter.push(8);
//! assert_eq!(grid.row_count(), 3);
//! assert_eq!(grid.rows()[2], ["item 6", "item 7", "item 8"]);
//! # Ok::<(), linear_grid::GridError>(())
//! ```
//!
//! # Deferred row width
//!
//! [`set_items_per_row`](GridLayoutAdapter::set_items_per_row) only records
//! the new width. The current rows stay as they are until the next bind,
//! triggered by `set_adapter`, an adapter change or an explicit
//! [`refresh`](GridLayoutAdapter::refresh).

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use linear_grid_core::logging::{span_names, targets};
use linear_grid_core::{ConnectionId, PerfSpan, Signal, grid_debug};
use linear_grid_style::{Drawable, GridAttributes, ListTheme, Size, parse_color};
use parking_lot::Mutex;

use crate::adapter::ListAdapter;
use crate::error::{GridError, Result};
use crate::logging::ViewTreeDebug;
use crate::view::{self, Dimension, LayoutParams, ViewId, ViewKind, ViewTree};

/// Summary of one bind pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BindReport {
    /// Views removed from the previous tree (rows, dividers and items).
    pub discarded: usize,
    /// Item views placed into rows.
    pub items: usize,
    /// Row containers created.
    pub rows: usize,
    /// Dividers created.
    pub dividers: usize,
    /// Indices for which no item view was placed.
    pub skipped: usize,
}

/// State shared with the adapter's change observer.
struct GridState {
    tree: ViewTree,
    adapter: Option<Arc<dyn ListAdapter>>,
    items_per_row: usize,
    divider: Option<Drawable>,
    divider_height: i32,
    content_size: Size,
    last_report: BindReport,
}

impl GridState {
    fn check_items_per_row(&self) -> Result<usize> {
        if self.items_per_row == 0 {
            return Err(GridError::InvalidConfiguration {
                items_per_row: 0,
            });
        }
        Ok(self.items_per_row)
    }

    /// Tear down every child view and rebuild rows from the adapter.
    #[tracing::instrument(skip(self), target = "linear_grid::bind", level = "debug")]
    fn bind(&mut self) -> Result<BindReport> {
        let per_row = self.check_items_per_row()?;
        let _perf = PerfSpan::new(span_names::BIND);

        let root = self.tree.root();
        let mut report = BindReport {
            discarded: self.tree.remove_all_views(root)?,
            ..BindReport::default()
        };
        self.content_size = Size::ZERO;

        let adapter = match &self.adapter {
            Some(adapter) if !adapter.is_empty() => Arc::clone(adapter),
            _ => {
                tracing::trace!(target: targets::BIND, "no adapter or empty adapter, container left empty");
                self.last_report = report;
                return Ok(report);
            }
        };

        let total = adapter.count();
        let total_rows = total.div_ceil(per_row);
        tracing::debug!(target: targets::BIND, total, total_rows, per_row, "binding adapter");

        let mut current_row: Option<ViewId> = None;
        for index in 0..total {
            if index % per_row == 0 {
                let row = self
                    .tree
                    .add_view(root, ViewKind::row(per_row), LayoutParams::match_width())?;
                current_row = Some(row);
                report.rows += 1;

                // Dividers only go between rows, never after the last one.
                if report.rows < total_rows && self.divider_height > 0 {
                    self.tree.add_view_with_background(
                        root,
                        ViewKind::Divider,
                        LayoutParams::new(
                            Dimension::MatchParent,
                            Dimension::Fixed(self.divider_height as f32),
                        ),
                        self.divider.unwrap_or_else(Drawable::transparent),
                    )?;
                    report.dividers += 1;
                }
            }

            let Some(row) = current_row else {
                tracing::error!(target: targets::BIND, index, "no row container for item, skipping");
                report.skipped += 1;
                continue;
            };

            match adapter.item_view(index, None) {
                Some(item) => {
                    let params = LayoutParams::weighted(1.0);
                    match item.background() {
                        Some(background) => self.tree.add_view_with_background(
                            row,
                            ViewKind::Item(item),
                            params,
                            background,
                        )?,
                        None => self.tree.add_view(row, ViewKind::Item(item), params)?,
                    };
                    report.items += 1;
                }
                None => {
                    tracing::warn!(target: targets::BIND, index, "adapter returned no view, skipping");
                    report.skipped += 1;
                }
            }
        }

        self.last_report = report;
        Ok(report)
    }

    fn count_root_children(&self, predicate: impl Fn(&ViewKind) -> bool) -> usize {
        let root = self.tree.root();
        self.tree
            .children(root)
            .iter()
            .filter_map(|&id| self.tree.get(id))
            .filter(|node| predicate(node.kind()))
            .count()
    }
}

/// Upper bound on back-to-back passes when the adapter keeps changing
/// while it is being bound.
const MAX_BIND_PASSES: usize = 16;

/// Everything the adapter observer needs to reach.
struct Shared {
    state: Mutex<GridState>,
    bound: Signal<BindReport>,
    /// Set while a bind runs.
    binding: AtomicBool,
    /// Set when a rebind is requested while `binding` is set.
    pending: AtomicBool,
}

impl Shared {
    /// Rebind, then notify `bound` once the state lock has been released.
    ///
    /// A request made while a bind is already running (an adapter notifying
    /// from inside `item_view`, for instance) never waits on the state lock.
    /// It is folded into the running bind as one more pass and `None` is
    /// returned.
    fn rebind(&self) -> Result<Option<BindReport>> {
        if self.binding.swap(true, Ordering::AcqRel) {
            self.pending.store(true, Ordering::Release);
            tracing::debug!(target: targets::BIND, "bind in progress, queued another pass");
            return Ok(None);
        }
        let result = self.bind_until_settled();
        self.binding.store(false, Ordering::Release);

        let report = result?;
        self.bound.emit(report);
        Ok(Some(report))
    }

    fn bind_until_settled(&self) -> Result<BindReport> {
        let mut passes = 0;
        loop {
            self.pending.store(false, Ordering::Release);
            let report = self.state.lock().bind()?;
            passes += 1;

            if !self.pending.load(Ordering::Acquire) {
                return Ok(report);
            }
            if passes == MAX_BIND_PASSES {
                tracing::warn!(target: targets::BIND, passes, "adapter kept changing during bind, keeping last pass");
                return Ok(report);
            }
        }
    }
}

/// Live connection to an adapter's change notifications.
///
/// Dropping the subscription disconnects the observer.
struct AdapterSubscription {
    adapter: Arc<dyn ListAdapter>,
    connection: ConnectionId,
}

impl Drop for AdapterSubscription {
    fn drop(&mut self) {
        let removed = self.adapter.unregister_observer(self.connection);
        tracing::trace!(target: targets::ADAPTER, removed, "unsubscribed from adapter");
    }
}

/// A vertical container that shows adapter items in rows of equal-width slots.
///
/// Each row is a horizontal container whose weight sum equals
/// `items_per_row`; each item takes weight 1. Dividers sit strictly between
/// rows and are skipped entirely when the divider height is zero.
///
/// # Signals
///
/// - [`bound`](Self::bound): emitted with a [`BindReport`] after every bind
pub struct GridLayoutAdapter {
    shared: Arc<Shared>,
    subscription: Option<AdapterSubscription>,
}

impl GridLayoutAdapter {
    /// Create an empty grid whose divider defaults come from `theme`.
    pub fn new(theme: &ListTheme) -> Self {
        let mut grid = Self {
            shared: Arc::new(Shared {
                state: Mutex::new(GridState {
                    tree: ViewTree::new(),
                    adapter: None,
                    items_per_row: 1,
                    divider: None,
                    divider_height: 0,
                    content_size: Size::ZERO,
                    last_report: BindReport::default(),
                }),
                bound: Signal::new(),
                binding: AtomicBool::new(false),
                pending: AtomicBool::new(false),
            }),
            subscription: None,
        };
        grid.initialize(theme.divider, theme.divider_height);
        grid
    }

    /// Create a grid from declarative style attributes.
    ///
    /// # Errors
    ///
    /// Fails if `items_per_row` is not positive or `divider` is not a valid
    /// color string.
    pub fn from_attributes(attributes: &GridAttributes) -> Result<Self> {
        let mut grid = Self::new(&attributes.list_theme());
        if let Some(items_per_row) = attributes.items_per_row {
            grid.set_items_per_row(items_per_row)?;
        }
        if let Some(divider) = attributes.divider_drawable()? {
            grid.set_divider_drawable(Some(divider));
        }
        if let Some(height) = attributes.divider_height {
            grid.set_divider_height(height);
        }
        Ok(grid)
    }

    fn initialize(&mut self, default_divider: Option<Drawable>, default_divider_height: i32) {
        self.set_divider_drawable(default_divider);
        self.set_divider_height(default_divider_height);
        grid_debug!(divider = ?default_divider, height = default_divider_height, "default divider");
    }

    // =========================================================================
    // Adapter
    // =========================================================================

    /// Set the adapter, follow its change notifications and rebind immediately.
    ///
    /// Any previously set adapter is unsubscribed first. The new adapter is
    /// observed before the first bind, so changes made by `bound` slots are
    /// picked up.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidConfiguration`] if items per row is not
    /// positive.
    pub fn set_adapter<A: ListAdapter + 'static>(&mut self, adapter: Arc<A>) -> Result<()> {
        self.set_dyn_adapter(Some(adapter as Arc<dyn ListAdapter>))
    }

    /// Remove the adapter and empty the container.
    pub fn clear_adapter(&mut self) -> Result<()> {
        self.set_dyn_adapter(None)
    }

    /// Set (or clear, with `None`) a type-erased adapter.
    pub fn set_dyn_adapter(&mut self, adapter: Option<Arc<dyn ListAdapter>>) -> Result<()> {
        self.shared.state.lock().check_items_per_row()?;

        self.subscription = None;
        self.shared.state.lock().adapter = adapter.clone();
        self.subscription = adapter.map(|adapter| self.subscribe(adapter));

        self.shared.rebind()?;
        Ok(())
    }

    fn subscribe(&self, adapter: Arc<dyn ListAdapter>) -> AdapterSubscription {
        let shared = Arc::downgrade(&self.shared);
        let connection = adapter.register_observer(Arc::new(move || {
            let Some(shared) = shared.upgrade() else {
                return;
            };
            tracing::debug!(target: targets::ADAPTER, "adapter changed, rebinding");
            if let Err(err) = shared.rebind() {
                tracing::error!(target: targets::ADAPTER, %err, "rebind after adapter change failed");
            }
        }));
        AdapterSubscription {
            adapter,
            connection,
        }
    }

    /// The current adapter.
    pub fn adapter(&self) -> Option<Arc<dyn ListAdapter>> {
        self.shared.state.lock().adapter.clone()
    }

    /// Rebuild the rows from the current adapter.
    ///
    /// This is how a new [`items_per_row`](Self::set_items_per_row) or
    /// divider style is applied without waiting for a data change.
    ///
    /// Returns `None` when a bind was already running; the refresh then runs
    /// as an extra pass of that bind.
    pub fn refresh(&self) -> Result<Option<BindReport>> {
        self.shared.rebind()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Number of item slots per row.
    pub fn items_per_row(&self) -> usize {
        self.shared.state.lock().items_per_row
    }

    /// Set the number of item slots per row.
    ///
    /// Takes effect on the next bind; the current rows are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidConfiguration`] for zero or negative
    /// values, leaving the previous value in place.
    pub fn set_items_per_row(&mut self, items_per_row: i32) -> Result<()> {
        if items_per_row <= 0 {
            return Err(GridError::InvalidConfiguration { items_per_row });
        }
        self.shared.state.lock().items_per_row = items_per_row as usize;
        tracing::debug!(target: targets::BIND, items_per_row, "items per row updated, applies on next bind");
        Ok(())
    }

    /// The divider drawable, if any.
    pub fn divider(&self) -> Option<Drawable> {
        self.shared.state.lock().divider
    }

    /// Set the divider from a color string such as `"#DEDEDE"`.
    ///
    /// # Errors
    ///
    /// Returns a color parse error for malformed input, leaving the previous
    /// divider in place.
    pub fn set_divider_color(&mut self, color: &str) -> Result<()> {
        let color = parse_color(color)?;
        self.set_divider_drawable(Some(Drawable::solid(color)));
        Ok(())
    }

    /// Set the divider drawable. `None` draws transparent dividers.
    pub fn set_divider_drawable(&mut self, divider: Option<Drawable>) {
        self.shared.state.lock().divider = divider;
    }

    /// Divider height in pixels.
    pub fn divider_height(&self) -> i32 {
        self.shared.state.lock().divider_height
    }

    /// Set the divider height. Negative values are clamped to zero; zero hides
    /// dividers.
    pub fn set_divider_height(&mut self, height: i32) {
        self.shared.state.lock().divider_height = height.max(0);
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// The signal emitted after every bind.
    pub fn bound(&self) -> &Signal<BindReport> {
        &self.shared.bound
    }

    /// Report of the most recent bind.
    pub fn last_report(&self) -> BindReport {
        self.shared.state.lock().last_report
    }

    /// Number of direct children of the container (rows and dividers).
    pub fn child_count(&self) -> usize {
        let state = self.shared.state.lock();
        state.tree.children(state.tree.root()).len()
    }

    /// Number of row containers.
    pub fn row_count(&self) -> usize {
        self.shared.state.lock().count_root_children(ViewKind::is_container)
    }

    /// Number of dividers.
    pub fn divider_count(&self) -> usize {
        self.shared
            .state
            .lock()
            .count_root_children(|kind| matches!(kind, ViewKind::Divider))
    }

    /// Item names per row, in display order.
    pub fn rows(&self) -> Vec<Vec<String>> {
        let state = self.shared.state.lock();
        let tree = &state.tree;
        tree.children(tree.root())
            .iter()
            .filter(|&&id| tree.get(id).is_some_and(|node| node.kind().is_container()))
            .map(|&row| {
                tree.children(row)
                    .iter()
                    .filter_map(|&id| match tree.get(id)?.kind() {
                        ViewKind::Item(item) => Some(item.name().to_string()),
                        _ => None,
                    })
                    .collect()
            })
            .collect()
    }

    /// Run `f` with read access to the view tree.
    pub fn with_view_tree<R>(&self, f: impl FnOnce(&ViewTree) -> R) -> R {
        f(&self.shared.state.lock().tree)
    }

    /// Lay out the bound tree for `width` and return the content size.
    pub fn layout(&self, width: f32) -> Size {
        let mut state = self.shared.state.lock();
        let size = view::layout(&mut state.tree, width);
        state.content_size = size;
        size
    }

    /// Content size from the last layout, or zero if the tree changed since.
    pub fn content_size(&self) -> Size {
        self.shared.state.lock().content_size
    }

    /// Human-readable dump of the view tree.
    pub fn debug_tree(&self) -> String {
        self.with_view_tree(|tree| ViewTreeDebug::new().format(tree))
    }
}

impl Default for GridLayoutAdapter {
    fn default() -> Self {
        Self::new(&ListTheme::default())
    }
}

impl fmt::Debug for GridLayoutAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("GridLayoutAdapter")
            .field("items_per_row", &state.items_per_row)
            .field("divider", &state.divider)
            .field("divider_height", &state.divider_height)
            .field("has_adapter", &state.adapter.is_some())
            .field("last_report", &state.last_report)
            .finish()
    }
}
