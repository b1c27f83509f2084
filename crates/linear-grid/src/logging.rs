//! Debug output for bound view trees.
//!
//! [`ViewTreeDebug`] renders a [`ViewTree`] as an indented tree, one view per
//! line, which is handy when tracing what a bind produced:
//!
//! ```
//! use linear_grid::logging::{TreeFormatOptions, TreeStyle, ViewTreeDebug};
//! use linear_grid::view::{LayoutParams, ViewKind, ViewTree};
//!
//! let mut tree = ViewTree::new();
//! tree.add_view(tree.root(), ViewKind::row(2), LayoutParams::match_width()).unwrap();
//!
//! let debug = ViewTreeDebug::with_options(TreeFormatOptions {
//!     style: TreeStyle::Ascii,
//!     ..TreeFormatOptions::minimal()
//! });
//! assert_eq!(debug.format(&tree), "column\n`-- row (weight_sum 2)\n");
//! ```

use std::fmt::Write;

use crate::view::{ViewId, ViewKind, ViewTree};

/// Tree drawing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Flat indentation with a dash per view.
    Compact,
}

impl TreeStyle {
    /// (branch, last branch, continuation, blank) for one depth level.
    fn glyphs(self) -> (&'static str, &'static str, &'static str, &'static str) {
        match self {
            Self::Ascii => ("|-- ", "`-- ", "|   ", "    "),
            Self::Unicode => ("├── ", "└── ", "│   ", "    "),
            Self::Compact => ("- ", "- ", "  ", "  "),
        }
    }
}

/// Configuration for view tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show view IDs.
    pub show_ids: bool,
    /// Whether to show geometry from the last layout.
    pub show_geometry: bool,
    /// Whether to show background drawables.
    pub show_backgrounds: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: false,
            show_geometry: true,
            show_backgrounds: true,
            max_depth: None,
        }
    }
}

impl TreeFormatOptions {
    /// Labels only.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_geometry: false,
            show_backgrounds: false,
            ..Default::default()
        }
    }
}

/// Renders a [`ViewTree`] for debugging.
#[derive(Debug, Clone, Default)]
pub struct ViewTreeDebug {
    options: TreeFormatOptions,
}

impl ViewTreeDebug {
    /// Create a visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format the whole tree.
    pub fn format(&self, tree: &ViewTree) -> String {
        self.format_subtree(tree, tree.root())
    }

    /// Format the subtree rooted at `id`. Unknown IDs yield an empty string.
    pub fn format_subtree(&self, tree: &ViewTree, id: ViewId) -> String {
        let mut output = String::new();
        if tree.contains(id) {
            self.format_node(tree, id, &mut Vec::new(), &mut output);
        }
        output
    }

    /// `open` holds, for each ancestor below the subtree root, whether it
    /// still has siblings to draw.
    fn format_node(&self, tree: &ViewTree, id: ViewId, open: &mut Vec<bool>, output: &mut String) {
        let Some(node) = tree.get(id) else {
            return;
        };
        let (branch, last, continuation, blank) = self.options.style.glyphs();

        if let Some((&has_more, ancestors)) = open.split_last() {
            for &ancestor_open in ancestors {
                output.push_str(if ancestor_open { continuation } else { blank });
            }
            output.push_str(if has_more { branch } else { last });
        }

        output.push_str(node.kind().label());
        if let ViewKind::Container { weight_sum: Some(sum), .. } = node.kind() {
            let _ = write!(output, " (weight_sum {sum})");
        }
        if self.options.show_ids {
            let _ = write!(output, " [{id:?}]");
        }
        if let (true, Some(background)) = (self.options.show_backgrounds, node.background()) {
            let _ = write!(output, " bg {background}");
        }
        if self.options.show_geometry {
            let g = node.geometry();
            let _ = write!(output, " @ {},{} {}x{}", g.left(), g.top(), g.width(), g.height());
        }
        output.push('\n');

        if self.options.max_depth.is_some_and(|max| open.len() >= max) {
            return;
        }

        let children = node.children();
        for (i, &child) in children.iter().enumerate() {
            open.push(i + 1 < children.len());
            self.format_node(tree, child, open, output);
            open.pop();
        }
    }
}
