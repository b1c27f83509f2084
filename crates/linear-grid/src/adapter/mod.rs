//! Data adapters.
//!
//! An adapter sits between application data and the views that display it.
//! Views ask it how many items there are and for a view per index, and
//! connect to its [`AdapterSignals`] to learn when the data changes.
//!
//! # Core Types
//!
//! - [`ListAdapter`]: the trait adapters implement
//! - [`AdapterSignals`]: change notifications emitted by adapters
//! - [`ItemView`]: the view an adapter produces for one index
//! - [`ArrayAdapter`]: a ready-made adapter over a `Vec<T>`
//!
//! # Example
//!
//! ```
//! use linear_grid::adapter::{ArrayAdapter, ItemView, ListAdapter};
//!
//! let adapter = ArrayAdapter::new(vec!["Apple", "Banana"], |_, fruit: &&str| {
//!     Some(ItemView::new(*fruit))
//! });
//!
//! adapter.signals().changed.connect(|_| println!("data set changed"));
//! adapter.push("Cherry");
//!
//! assert_eq!(adapter.count(), 3);
//! assert_eq!(adapter.item_view(2, None).unwrap().name(), "Cherry");
//! ```

mod array_adapter;

pub use array_adapter::ArrayAdapter;

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use linear_grid_core::logging::targets;
use linear_grid_core::{ConnectionId, Signal};
use linear_grid_style::{Drawable, Size};

/// A view produced by an adapter for a single index.
///
/// The grid only needs a name (for diagnostics), a preferred size (for
/// layout) and an optional background. Anything else the application wants
/// to carry along goes in the payload.
#[derive(Clone)]
pub struct ItemView {
    name: String,
    preferred_size: Size,
    background: Option<Drawable>,
    payload: Option<Arc<dyn Any + Send + Sync>>,
}

impl ItemView {
    /// Create an item view with a zero preferred size.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferred_size: Size::ZERO,
            background: None,
            payload: None,
        }
    }

    /// Set the preferred size.
    pub fn with_preferred_size(mut self, width: f32, height: f32) -> Self {
        self.preferred_size = Size::new(width, height);
        self
    }

    /// Set the background.
    pub fn with_background(mut self, background: Drawable) -> Self {
        self.background = Some(background);
        self
    }

    /// Attach an application payload.
    pub fn with_payload<T: Any + Send + Sync>(mut self, payload: T) -> Self {
        self.payload = Some(Arc::new(payload));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn preferred_size(&self) -> Size {
        self.preferred_size
    }

    pub fn background(&self) -> Option<Drawable> {
        self.background
    }

    /// The payload, if one of type `T` was attached.
    pub fn payload<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.payload.as_deref()?.downcast_ref::<T>()
    }
}

impl fmt::Debug for ItemView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemView")
            .field("name", &self.name)
            .field("preferred_size", &self.preferred_size)
            .field("background", &self.background)
            .field("has_payload", &self.payload.is_some())
            .finish()
    }
}

/// Signals emitted by adapters.
///
/// Adapters emit `changed` after any modification of their data set. Views
/// treat it as "everything may be different" and rebuild.
#[derive(Debug, Default)]
pub struct AdapterSignals {
    /// Emitted after the data set changed.
    pub changed: Signal<()>,
}

impl AdapterSignals {
    /// Create a new set of adapter signals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `changed`. Returns the number of observers notified.
    pub fn notify_changed(&self) -> usize {
        let observers = self.changed.emit(());
        tracing::trace!(target: targets::ADAPTER, observers, "data set changed");
        observers
    }
}

/// The data-to-view collaborator consumed by list and grid widgets.
///
/// # Implementation Requirements
///
/// - [`count`](ListAdapter::count) - Number of items
/// - [`item_view`](ListAdapter::item_view) - A view for one index
/// - [`signals`](ListAdapter::signals) - Change notifications
///
/// # Example
///
/// ```
/// use linear_grid::adapter::{AdapterSignals, ItemView, ListAdapter};
///
/// struct Numbers {
///     upto: usize,
///     signals: AdapterSignals,
/// }
///
/// impl ListAdapter for Numbers {
///     fn count(&self) -> usize {
///         self.upto
///     }
///
///     fn item_view(&self, index: usize, _recycled: Option<ItemView>) -> Option<ItemView> {
///         (index < self.upto).then(|| ItemView::new(index.to_string()))
///     }
///
///     fn signals(&self) -> &AdapterSignals {
///         &self.signals
///     }
/// }
///
/// let numbers = Numbers { upto: 3, signals: AdapterSignals::new() };
/// assert!(!numbers.is_empty());
/// ```
pub trait ListAdapter: Send + Sync {
    /// Number of items in the data set.
    fn count(&self) -> usize;

    /// Whether the data set is empty.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Produce the view for `index`.
    ///
    /// `recycled` is a previously produced view the adapter may reuse. Return
    /// `None` when there is nothing to show for this index.
    fn item_view(&self, index: usize, recycled: Option<ItemView>) -> Option<ItemView>;

    /// Change notifications for this adapter.
    fn signals(&self) -> &AdapterSignals;

    /// Register a callback invoked after every data set change.
    fn register_observer(&self, observer: Arc<dyn Fn() + Send + Sync>) -> ConnectionId {
        self.signals().changed.connect(move |_| observer())
    }

    /// Remove a callback registered with [`register_observer`](Self::register_observer).
    ///
    /// Returns `false` if the observer was not registered.
    fn unregister_observer(&self, id: ConnectionId) -> bool {
        self.signals().changed.disconnect(id)
    }
}
