//! Adapter over an in-memory list.
//!
//! `ArrayAdapter<T>` keeps its items behind a lock and turns each one into an
//! [`ItemView`] with a factory closure. Every mutation emits `changed` once the
//! lock has been released, so observers can read the adapter from their slot.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{AdapterSignals, ItemView, ListAdapter};

/// Type alias for the closure that turns an item into a view.
pub type ViewFactory<T> = Arc<dyn Fn(usize, &T) -> Option<ItemView> + Send + Sync>;

/// A list adapter backed by a `Vec<T>`.
///
/// # Example
///
/// ```
/// use linear_grid::adapter::{ArrayAdapter, ItemView, ListAdapter};
///
/// struct Person {
///     name: String,
/// }
///
/// let adapter = ArrayAdapter::new(
///     vec![Person { name: "Alice".into() }, Person { name: "Bob".into() }],
///     |_, person: &Person| Some(ItemView::new(person.name.clone()).with_preferred_size(80.0, 24.0)),
/// );
///
/// assert_eq!(adapter.count(), 2);
/// assert_eq!(adapter.item_view(1, None).unwrap().name(), "Bob");
/// ```
pub struct ArrayAdapter<T> {
    items: RwLock<Vec<T>>,
    factory: ViewFactory<T>,
    signals: AdapterSignals,
}

impl<T: Send + Sync + 'static> ArrayAdapter<T> {
    /// Create an adapter over `items` using `factory` to build views.
    pub fn new<F>(items: Vec<T>, factory: F) -> Self
    where
        F: Fn(usize, &T) -> Option<ItemView> + Send + Sync + 'static,
    {
        Self {
            items: RwLock::new(items),
            factory: Arc::new(factory),
            signals: AdapterSignals::new(),
        }
    }

    /// Create an empty adapter.
    pub fn empty<F>(factory: F) -> Self
    where
        F: Fn(usize, &T) -> Option<ItemView> + Send + Sync + 'static,
    {
        Self::new(Vec::new(), factory)
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Appends an item to the end of the list.
    pub fn push(&self, item: T) {
        self.items.write().push(item);
        self.signals.notify_changed();
    }

    /// Inserts an item at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&self, index: usize, item: T) {
        self.items.write().insert(index, item);
        self.signals.notify_changed();
    }

    /// Removes and returns the item at `index`, or `None` if out of range.
    pub fn remove(&self, index: usize) -> Option<T> {
        let removed = {
            let mut items = self.items.write();
            (index < items.len()).then(|| items.remove(index))
        };
        if removed.is_some() {
            self.signals.notify_changed();
        }
        removed
    }

    /// Removes all items.
    pub fn clear(&self) {
        self.items.write().clear();
        self.signals.notify_changed();
    }

    /// Replaces all items.
    pub fn set_items(&self, items: Vec<T>) {
        *self.items.write() = items;
        self.signals.notify_changed();
    }

    /// Provides mutable access to an item via a closure.
    ///
    /// Emits `changed` after modification.
    pub fn modify<F, R>(&self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = {
            let mut items = self.items.write();
            items.get_mut(index).map(f)
        };
        if result.is_some() {
            self.signals.notify_changed();
        }
        result
    }

    /// Returns a read guard over the items.
    pub fn items(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.items.read()
    }

    /// Tell observers the data set changed after an out-of-band update.
    pub fn notify_data_set_changed(&self) {
        self.signals.notify_changed();
    }
}

impl<T: Send + Sync + 'static> ListAdapter for ArrayAdapter<T> {
    fn count(&self) -> usize {
        self.len()
    }

    fn item_view(&self, index: usize, _recycled: Option<ItemView>) -> Option<ItemView> {
        let items = self.items.read();
        let item = items.get(index)?;
        (self.factory)(index, item)
    }

    fn signals(&self) -> &AdapterSignals {
        &self.signals
    }
}
