//! Retained view tree.
//!
//! Views live in an arena owned by the widget that created them. Each node
//! records its kind, layout parameters, optional background, its parent and
//! its ordered children. Removing a view removes its whole subtree, so a
//! rebuild never leaves stale descendants behind.
//!
//! # Key Types
//!
//! - [`ViewTree`] - The arena, rooted at a vertical container
//! - [`ViewId`] - Stable handle to a node, invalidated when the node is removed
//! - [`ViewKind`] - What a node is: container, adapter item, or divider
//! - [`LayoutParams`] - How a node asks its parent to size it

mod layout;
mod params;

pub use layout::layout;
pub use params::{Dimension, LayoutParams, Orientation};

use linear_grid_style::{Drawable, Rect};
use slotmap::{SlotMap, new_key_type};

use crate::adapter::ItemView;

new_key_type! {
    /// A unique identifier for a view in a [`ViewTree`].
    ///
    /// Ids become invalid once the view (or any ancestor) is removed.
    pub struct ViewId;
}

/// Errors from view tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// The view ID is invalid or the view has been removed.
    #[error("Invalid or removed view ID")]
    InvalidViewId,
    /// Only containers may hold children.
    #[error("View is not a container")]
    NotAContainer,
}

/// What a view node represents.
#[derive(Debug, Clone)]
pub enum ViewKind {
    /// A linear container laying out its children along `orientation`.
    ///
    /// `weight_sum` fixes the total weight children share; when `None` the
    /// sum of the children's weights is used.
    Container {
        orientation: Orientation,
        weight_sum: Option<f32>,
    },
    /// A view produced by an adapter.
    Item(ItemView),
    /// A fixed-height separator between rows.
    Divider,
}

impl ViewKind {
    /// A horizontal row distributing `slots` equal shares.
    pub fn row(slots: usize) -> Self {
        Self::Container {
            orientation: Orientation::Horizontal,
            weight_sum: Some(slots as f32),
        }
    }

    /// Whether this kind can hold children.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Container { .. })
    }

    /// Short label used in debug output.
    pub fn label(&self) -> &str {
        match self {
            Self::Container {
                orientation: Orientation::Horizontal,
                ..
            } => "row",
            Self::Container {
                orientation: Orientation::Vertical,
                ..
            } => "column",
            Self::Item(item) => item.name(),
            Self::Divider => "divider",
        }
    }
}

/// A node in the view tree.
#[derive(Debug, Clone)]
pub struct ViewNode {
    kind: ViewKind,
    params: LayoutParams,
    background: Option<Drawable>,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
    geometry: Rect,
}

impl ViewNode {
    fn new(kind: ViewKind, params: LayoutParams) -> Self {
        Self {
            kind,
            params,
            background: None,
            parent: None,
            children: Vec::new(),
            geometry: Rect::ZERO,
        }
    }

    pub fn kind(&self) -> &ViewKind {
        &self.kind
    }

    pub fn params(&self) -> LayoutParams {
        self.params
    }

    pub fn background(&self) -> Option<Drawable> {
        self.background
    }

    pub fn parent(&self) -> Option<ViewId> {
        self.parent
    }

    pub fn children(&self) -> &[ViewId] {
        &self.children
    }

    /// Geometry assigned by the last layout pass, relative to the tree root.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub(crate) fn set_geometry(&mut self, geometry: Rect) {
        self.geometry = geometry;
    }
}

/// Arena of views rooted at a single vertical container.
#[derive(Debug, Clone)]
pub struct ViewTree {
    nodes: SlotMap<ViewId, ViewNode>,
    root: ViewId,
}

impl ViewTree {
    /// Create a tree whose root is a vertical container filling its parent's width.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(ViewNode::new(
            ViewKind::Container {
                orientation: Orientation::Vertical,
                weight_sum: None,
            },
            LayoutParams::match_width(),
        ));
        Self { nodes, root }
    }

    /// The root container.
    pub fn root(&self) -> ViewId {
        self.root
    }

    /// Number of views in the tree, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the root has no children.
    pub fn is_empty(&self) -> bool {
        self.children(self.root).is_empty()
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: ViewId) -> Option<&ViewNode> {
        self.nodes.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: ViewId) -> Option<&mut ViewNode> {
        self.nodes.get_mut(id)
    }

    /// Children of `id`, or an empty slice for an unknown id.
    pub fn children(&self, id: ViewId) -> &[ViewId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Append a new view as the last child of `parent`.
    pub fn add_view(
        &mut self,
        parent: ViewId,
        kind: ViewKind,
        params: LayoutParams,
    ) -> Result<ViewId, ViewError> {
        self.insert_child(parent, ViewNode::new(kind, params))
    }

    /// Append a new view with a background drawable.
    pub fn add_view_with_background(
        &mut self,
        parent: ViewId,
        kind: ViewKind,
        params: LayoutParams,
        background: Drawable,
    ) -> Result<ViewId, ViewError> {
        let mut node = ViewNode::new(kind, params);
        node.background = Some(background);
        self.insert_child(parent, node)
    }

    fn insert_child(&mut self, parent: ViewId, mut node: ViewNode) -> Result<ViewId, ViewError> {
        let parent_node = self.nodes.get(parent).ok_or(ViewError::InvalidViewId)?;
        if !parent_node.kind.is_container() {
            return Err(ViewError::NotAContainer);
        }

        node.parent = Some(parent);
        let id = self.nodes.insert(node);
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(id);
        }
        Ok(id)
    }

    /// Remove every descendant of `parent`. Returns how many views were removed.
    pub fn remove_all_views(&mut self, parent: ViewId) -> Result<usize, ViewError> {
        let children = std::mem::take(
            &mut self
                .nodes
                .get_mut(parent)
                .ok_or(ViewError::InvalidViewId)?
                .children,
        );

        let mut removed = 0;
        let mut pending = children;
        while let Some(id) = pending.pop() {
            if let Some(node) = self.nodes.remove(id) {
                removed += 1;
                pending.extend(node.children);
            }
        }
        Ok(removed)
    }
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}
