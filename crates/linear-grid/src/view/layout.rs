//! Linear layout pass.
//!
//! A single top-down pass assigns geometry to every view:
//!
//! - Vertical containers stack their children, each child at its resolved width.
//! - Horizontal containers give each child its base width, then share the
//!   leftover width among weighted children in proportion to
//!   `weight / weight_sum`. With a fixed `weight_sum` a short row leaves the
//!   unclaimed share empty instead of stretching its children.
//! - A container is as tall as its content unless its height is fixed.
//!   `MatchParent` heights are treated as `WrapContent`.

use linear_grid_core::PerfSpan;
use linear_grid_core::logging::{span_names, targets};
use linear_grid_style::{Rect, Size};

use super::params::{Dimension, LayoutParams, Orientation};
use super::{ViewId, ViewKind, ViewTree};

/// Lay out the whole tree for the given available width.
///
/// Returns the size of the root container. Geometry is stored on every node
/// and can be read back with [`ViewNode::geometry`](super::ViewNode::geometry).
pub fn layout(tree: &mut ViewTree, width: f32) -> Size {
    let _span = tracing::debug_span!(target: targets::LAYOUT, "layout", width).entered();
    let _perf = PerfSpan::new(span_names::LAYOUT);

    let root = tree.root();
    let width = width.max(0.0);
    let height = place(tree, root, 0.0, 0.0, width);

    tracing::debug!(target: targets::LAYOUT, width, height, views = tree.len(), "layout complete");
    Size::new(width, height)
}

/// Resolve a requested width against what the parent offers.
fn resolve_width(params: LayoutParams, available: f32, natural: f32) -> f32 {
    match params.width {
        Dimension::MatchParent => available,
        Dimension::WrapContent => natural.min(available),
        Dimension::Fixed(width) => width.max(0.0),
    }
}

/// The width a view would like when nothing constrains it.
fn natural_width(tree: &ViewTree, id: ViewId) -> f32 {
    let Some(node) = tree.get(id) else {
        return 0.0;
    };
    if let Dimension::Fixed(width) = node.params().width {
        return width.max(0.0);
    }

    let children = node.children().iter().map(|&child| natural_width(tree, child));
    match node.kind() {
        ViewKind::Item(item) => item.preferred_size().width,
        ViewKind::Divider => 0.0,
        ViewKind::Container {
            orientation: Orientation::Horizontal,
            ..
        } => children.sum(),
        ViewKind::Container {
            orientation: Orientation::Vertical,
            ..
        } => children.fold(0.0, f32::max),
    }
}

/// Widths for the children of a horizontal container.
fn distribute(tree: &ViewTree, children: &[ViewId], width: f32, weight_sum: Option<f32>) -> Vec<f32> {
    let requests: Vec<(f32, f32)> = children
        .iter()
        .map(|&child| {
            let params = tree.get(child).map(|node| node.params()).unwrap_or_default();
            let base = resolve_width(params, width, natural_width(tree, child));
            (base, params.weight.max(0.0))
        })
        .collect();

    let total_weight = weight_sum.unwrap_or_else(|| requests.iter().map(|&(_, w)| w).sum());
    let leftover = (width - requests.iter().map(|&(base, _)| base).sum::<f32>()).max(0.0);

    requests
        .into_iter()
        .map(|(base, weight)| {
            if total_weight > 0.0 && weight > 0.0 {
                base + leftover * weight / total_weight
            } else {
                base
            }
        })
        .collect()
}

enum Shape {
    Leaf(f32),
    Container(Orientation, Option<f32>),
}

/// Place `id` at `(x, y)` with the given width and return its height.
fn place(tree: &mut ViewTree, id: ViewId, x: f32, y: f32, width: f32) -> f32 {
    let Some(node) = tree.get(id) else {
        return 0.0;
    };
    let params = node.params();
    let children = node.children().to_vec();

    let shape = match node.kind() {
        ViewKind::Item(item) => Shape::Leaf(item.preferred_size().height),
        ViewKind::Divider => Shape::Leaf(0.0),
        ViewKind::Container {
            orientation,
            weight_sum,
        } => Shape::Container(*orientation, *weight_sum),
    };

    let content_height = match shape {
        Shape::Leaf(height) => height,
        Shape::Container(Orientation::Vertical, _) => {
            let mut cursor = y;
            for child in children {
                let child_params = tree.get(child).map(|n| n.params()).unwrap_or_default();
                let child_width = resolve_width(child_params, width, natural_width(tree, child));
                cursor += place(tree, child, x, cursor, child_width);
            }
            cursor - y
        }
        Shape::Container(Orientation::Horizontal, weight_sum) => {
            let widths = distribute(tree, &children, width, weight_sum);
            let mut cursor = x;
            let mut tallest: f32 = 0.0;
            for (child, child_width) in children.into_iter().zip(widths) {
                tallest = tallest.max(place(tree, child, cursor, y, child_width));
                cursor += child_width;
            }
            tallest
        }
    };

    let height = match params.height {
        Dimension::Fixed(height) => height.max(0.0),
        Dimension::MatchParent | Dimension::WrapContent => content_height,
    };

    if let Some(node) = tree.get_mut(id) {
        node.set_geometry(Rect::new(x, y, width, height));
    }
    height
}
