//! Tests for binding adapters into grid rows.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use linear_grid::adapter::{AdapterSignals, ArrayAdapter, ItemView, ListAdapter};
use linear_grid::view::ViewKind;
use linear_grid::{BindReport, GridError, GridLayoutAdapter};
use linear_grid_style::{Color, Drawable, GridAttributes, ListTheme, Size};
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn numbers(count: usize) -> Arc<ArrayAdapter<usize>> {
    Arc::new(ArrayAdapter::new((0..count).collect(), |_, n: &usize| {
        Some(ItemView::new(n.to_string()).with_preferred_size(30.0, 20.0))
    }))
}

fn grid(items_per_row: i32) -> GridLayoutAdapter {
    let mut grid = GridLayoutAdapter::new(&ListTheme::light());
    grid.set_items_per_row(items_per_row).unwrap();
    grid
}

/// Adapter that has no view for some indices and records what it was asked.
struct Sparse {
    count: usize,
    missing: Vec<usize>,
    requested: Mutex<Vec<usize>>,
    signals: AdapterSignals,
}

impl Sparse {
    fn new(count: usize, missing: Vec<usize>) -> Self {
        Self {
            count,
            missing,
            requested: Mutex::new(Vec::new()),
            signals: AdapterSignals::new(),
        }
    }
}

impl ListAdapter for Sparse {
    fn count(&self) -> usize {
        self.count
    }

    fn item_view(&self, index: usize, recycled: Option<ItemView>) -> Option<ItemView> {
        assert!(recycled.is_none(), "grid never recycles views");
        self.requested.lock().push(index);
        (!self.missing.contains(&index)).then(|| ItemView::new(format!("v{index}")))
    }

    fn signals(&self) -> &AdapterSignals {
        &self.signals
    }
}

#[test]
fn test_seven_items_three_per_row() {
    init_tracing();
    let mut grid = grid(3);
    grid.set_divider_height(1);
    grid.set_adapter(numbers(7)).unwrap();

    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.divider_count(), 2);
    assert_eq!(grid.child_count(), 5);
    assert_eq!(grid.rows(), [vec!["0", "1", "2"], vec!["3", "4", "5"], vec!["6"]]);

    // Rows and dividers alternate, starting and ending with a row.
    let kinds: Vec<&'static str> = grid.with_view_tree(|tree| {
        tree.children(tree.root())
            .iter()
            .map(|&id| match tree.get(id).unwrap().kind() {
                ViewKind::Container { .. } => "row",
                ViewKind::Divider => "divider",
                ViewKind::Item(_) => "item",
            })
            .collect()
    });
    assert_eq!(kinds, ["row", "divider", "row", "divider", "row"]);

    assert_eq!(
        grid.last_report(),
        BindReport {
            discarded: 0,
            items: 7,
            rows: 3,
            dividers: 2,
            skipped: 0,
        }
    );
}

#[test]
fn test_rows_share_weight_sum() {
    let mut grid = grid(3);
    grid.set_adapter(numbers(4)).unwrap();

    let weight_sums: Vec<Option<f32>> = grid.with_view_tree(|tree| {
        tree.children(tree.root())
            .iter()
            .filter_map(|&id| match tree.get(id)?.kind() {
                ViewKind::Container { weight_sum, .. } => Some(*weight_sum),
                _ => None,
            })
            .collect()
    });
    assert_eq!(weight_sums, [Some(3.0), Some(3.0)]);
}

#[test]
fn test_empty_adapter_leaves_container_empty() {
    let mut grid = grid(3);
    grid.set_adapter(numbers(0)).unwrap();

    assert_eq!(grid.child_count(), 0);
    assert_eq!(grid.last_report(), BindReport::default());
}

#[test]
fn test_no_adapter_leaves_container_empty() {
    let grid = grid(2);
    assert_eq!(grid.refresh().unwrap().map(|report| report.rows), Some(0));
    assert_eq!(grid.child_count(), 0);
    assert!(grid.adapter().is_none());
}

#[test]
fn test_missing_view_is_skipped_but_row_kept() {
    init_tracing();
    let adapter = Arc::new(Sparse::new(6, vec![4]));
    let mut grid = grid(2);
    grid.set_adapter(adapter.clone()).unwrap();

    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.rows(), [vec!["v0", "v1"], vec!["v2", "v3"], vec!["v5"]]);
    assert_eq!(grid.last_report().skipped, 1);
    assert_eq!(grid.last_report().items, 5);
    assert_eq!(*adapter.requested.lock(), [0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_row_with_every_view_missing_stays_empty() {
    let mut grid = grid(2);
    grid.set_adapter(Arc::new(Sparse::new(4, vec![2, 3]))).unwrap();

    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.rows()[1], Vec::<String>::new());
}

#[test]
fn test_invalid_items_per_row_is_rejected() {
    let mut grid = grid(3);

    for bad in [0, -1, i32::MIN] {
        let err = grid.set_items_per_row(bad).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfiguration { items_per_row } if items_per_row == bad));
        assert_eq!(grid.items_per_row(), 3);
    }
}

#[test]
fn test_items_per_row_applies_on_next_bind() {
    let adapter = numbers(6);
    let mut grid = grid(3);
    grid.set_adapter(adapter.clone()).unwrap();
    assert_eq!(grid.row_count(), 2);

    grid.set_items_per_row(2).unwrap();
    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.items_per_row(), 2);

    grid.refresh().unwrap();
    assert_eq!(grid.row_count(), 3);

    grid.set_items_per_row(6).unwrap();
    adapter.notify_data_set_changed();
    assert_eq!(grid.row_count(), 1);
}

#[test]
fn test_divider_color_from_string() {
    let mut grid = grid(1);
    grid.set_divider_color("#DEDEDE").unwrap();
    assert_eq!(grid.divider(), Some(Drawable::solid(Color::from_rgb8(0xDE, 0xDE, 0xDE))));

    let err = grid.set_divider_color("notacolor").unwrap_err();
    assert!(err.is_color_parse());
    assert_eq!(grid.divider(), Some(Drawable::solid(Color::from_rgb8(0xDE, 0xDE, 0xDE))));
}

#[test]
fn test_dividers_use_current_drawable_and_height() {
    let mut grid = grid(1);
    grid.set_divider_color("#FF0000").unwrap();
    grid.set_divider_height(4);
    grid.set_adapter(numbers(3)).unwrap();

    let dividers: Vec<_> = grid.with_view_tree(|tree| {
        tree.children(tree.root())
            .iter()
            .filter_map(|&id| tree.get(id))
            .filter(|node| matches!(node.kind(), ViewKind::Divider))
            .map(|node| (node.background(), node.params().height))
            .collect()
    });
    assert_eq!(dividers.len(), 2);
    for (background, height) in dividers {
        assert_eq!(background, Some(Drawable::solid(Color::from_rgb8(255, 0, 0))));
        assert_eq!(height, linear_grid::view::Dimension::Fixed(4.0));
    }
}

#[test]
fn test_zero_divider_height_skips_dividers() {
    let mut grid = grid(2);
    grid.set_divider_height(0);
    grid.set_adapter(numbers(5)).unwrap();

    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.divider_count(), 0);
    assert_eq!(grid.child_count(), 3);
}

#[test]
fn test_rebind_replaces_previous_tree() {
    let adapter = numbers(4);
    let mut grid = grid(2);
    grid.set_adapter(adapter.clone()).unwrap();
    let before = grid.with_view_tree(|tree| tree.len());

    adapter.push(4);
    assert_eq!(grid.rows(), [vec!["0", "1"], vec!["2", "3"], vec!["4"]]);
    // Previous views were all discarded: rows, one divider and four items.
    assert_eq!(grid.last_report().discarded, before - 1);

    adapter.clear();
    assert_eq!(grid.child_count(), 0);
    assert_eq!(grid.with_view_tree(|tree| tree.len()), 1);
}

#[test]
fn test_row_partition_properties() {
    for n in 0..20_usize {
        for per_row in 1..6_usize {
            let mut grid = grid(per_row as i32);
            grid.set_divider_height(1);
            grid.set_adapter(numbers(n)).unwrap();

            let rows = grid.rows();
            let expected_rows = n.div_ceil(per_row);
            assert_eq!(rows.len(), expected_rows, "n={n} per_row={per_row}");
            assert_eq!(grid.divider_count(), expected_rows.saturating_sub(1));
            assert!(rows.iter().all(|row| !row.is_empty() && row.len() <= per_row));

            let flattened: Vec<String> = rows.into_iter().flatten().collect();
            let expected: Vec<String> = (0..n).map(|i| i.to_string()).collect();
            assert_eq!(flattened, expected);
        }
    }
}

#[test]
fn test_replacing_adapter_unsubscribes_old_one() {
    let first = numbers(2);
    let second = numbers(3);
    let mut grid = grid(1);

    grid.set_adapter(first.clone()).unwrap();
    assert_eq!(first.signals().changed.connection_count(), 1);

    grid.set_adapter(second.clone()).unwrap();
    assert_eq!(first.signals().changed.connection_count(), 0);
    assert_eq!(second.signals().changed.connection_count(), 1);

    // Root, three rows, two dividers and three items; nothing left from `first`.
    assert_eq!(grid.rows(), [vec!["0"], vec!["1"], vec!["2"]]);
    assert_eq!(grid.with_view_tree(|tree| tree.len()), 1 + 3 + 2 + 3);
    assert_eq!(grid.last_report().discarded, 2 + 1 + 2);

    first.push(99);
    assert_eq!(grid.row_count(), 3);

    grid.clear_adapter().unwrap();
    assert_eq!(second.signals().changed.connection_count(), 0);
    assert_eq!(grid.child_count(), 0);
}

#[test]
fn test_dropping_grid_disconnects_observer() {
    let adapter = numbers(3);
    {
        let mut grid = grid(2);
        grid.set_adapter(adapter.clone()).unwrap();
        assert_eq!(adapter.signals().changed.connection_count(), 1);
    }
    assert_eq!(adapter.signals().changed.connection_count(), 0);
    adapter.push(3);
}

#[test]
fn test_bound_signal_reports_each_bind() {
    let adapter = numbers(5);
    let mut grid = grid(2);
    let reports = Arc::new(Mutex::new(Vec::new()));
    let reports_clone = reports.clone();
    grid.bound().connect(move |report: &BindReport| {
        reports_clone.lock().push(*report);
    });

    grid.set_adapter(adapter.clone()).unwrap();
    adapter.remove(0);

    let reports = reports.lock();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].rows, 3);
    assert_eq!(reports[1].rows, 2);
    assert_eq!(reports[1].items, 4);
}

#[test]
fn test_adapter_observer_count_tracks_rebinds() {
    let adapter = numbers(1);
    let mut grid = grid(1);
    grid.set_adapter(adapter.clone()).unwrap();

    let binds = Arc::new(AtomicUsize::new(0));
    let binds_clone = binds.clone();
    grid.bound().connect(move |_| {
        binds_clone.fetch_add(1, Ordering::SeqCst);
    });

    for i in 0..5 {
        adapter.push(i);
    }
    assert_eq!(binds.load(Ordering::SeqCst), 5);
    assert_eq!(grid.row_count(), 6);
}

#[test]
fn test_layout_gives_equal_slots() {
    let mut grid = grid(3);
    grid.set_divider_height(1);
    grid.set_adapter(numbers(7)).unwrap();

    let size = grid.layout(300.0);
    assert_eq!(size, Size::new(300.0, 62.0));
    assert_eq!(grid.content_size(), size);

    let last_row: Vec<_> = grid.with_view_tree(|tree| {
        let rows: Vec<_> = tree
            .children(tree.root())
            .iter()
            .copied()
            .filter(|&id| tree.get(id).unwrap().kind().is_container())
            .collect();
        tree.children(rows[2])
            .iter()
            .map(|&id| tree.get(id).unwrap().geometry())
            .collect()
    });
    assert_eq!(last_row.len(), 1);
    assert_eq!(last_row[0].left(), 0.0);
    assert_eq!(last_row[0].top(), 42.0);
    assert_eq!(last_row[0].width(), 100.0);
}

#[test]
fn test_rebind_resets_content_size() {
    let adapter = numbers(2);
    let mut grid = grid(2);
    grid.set_adapter(adapter.clone()).unwrap();
    grid.layout(100.0);
    assert_ne!(grid.content_size(), Size::ZERO);

    adapter.push(2);
    assert_eq!(grid.content_size(), Size::ZERO);
}

#[test]
fn test_grid_from_toml_attributes() {
    let attributes = GridAttributes::from_toml_str(
        r##"
        theme = "dark"
        items_per_row = 2
        divider = "#80FF0000"
        divider_height = 3
        "##,
    )
    .unwrap();
    let mut grid = GridLayoutAdapter::from_attributes(&attributes).unwrap();

    assert_eq!(grid.items_per_row(), 2);
    assert_eq!(grid.divider_height(), 3);
    assert_eq!(grid.divider(), Some(Drawable::solid(Color::from_argb32(0x80FF_0000))));

    grid.set_adapter(numbers(3)).unwrap();
    assert_eq!(grid.divider_count(), 1);
}

#[test]
fn test_bad_attribute_color_fails_construction() {
    let attributes = GridAttributes {
        divider: Some("#12345".into()),
        ..Default::default()
    };
    let err = GridLayoutAdapter::from_attributes(&attributes).unwrap_err();
    assert!(err.is_color_parse());
}

#[test]
fn test_debug_tree_lists_rows() {
    let mut grid = grid(2);
    grid.set_adapter(numbers(3)).unwrap();
    let dump = grid.debug_tree();

    assert!(dump.starts_with("column"));
    assert_eq!(dump.lines().filter(|line| line.contains("row")).count(), 2);
    assert!(dump.contains("divider"));
}

/// Adapter that reports a data change from inside its first `item_view` call,
/// the way a lazily loading adapter would.
struct NotifiesWhileBinding {
    count: usize,
    notified: AtomicBool,
    views_requested: AtomicUsize,
    signals: AdapterSignals,
}

impl ListAdapter for NotifiesWhileBinding {
    fn count(&self) -> usize {
        self.count
    }

    fn item_view(&self, index: usize, _recycled: Option<ItemView>) -> Option<ItemView> {
        self.views_requested.fetch_add(1, Ordering::SeqCst);
        if !self.notified.swap(true, Ordering::SeqCst) {
            self.signals.notify_changed();
        }
        Some(ItemView::new(index.to_string()))
    }

    fn signals(&self) -> &AdapterSignals {
        &self.signals
    }
}

#[test]
fn test_change_notified_during_bind_runs_another_pass() {
    init_tracing();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let adapter = Arc::new(NotifiesWhileBinding {
            count: 4,
            notified: AtomicBool::new(false),
            views_requested: AtomicUsize::new(0),
            signals: AdapterSignals::new(),
        });
        let mut grid = grid(2);
        let binds = Arc::new(AtomicUsize::new(0));
        let binds_clone = binds.clone();
        grid.bound().connect(move |_| {
            binds_clone.fetch_add(1, Ordering::SeqCst);
        });

        grid.set_adapter(adapter.clone()).unwrap();
        let _ = tx.send((
            grid.rows(),
            adapter.views_requested.load(Ordering::SeqCst),
            binds.load(Ordering::SeqCst),
        ));
    });

    let (rows, views_requested, binds) = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("bind did not finish");
    assert_eq!(rows, [vec!["0", "1"], vec!["2", "3"]]);
    // The notification was folded into one more full pass.
    assert_eq!(views_requested, 8);
    assert_eq!(binds, 1);
}

#[test]
fn test_refresh_outside_a_bind_reports_its_pass() {
    let adapter = numbers(3);
    let mut grid = grid(3);
    grid.set_adapter(adapter.clone()).unwrap();
    assert_eq!(grid.refresh().unwrap().map(|report| report.items), Some(3));
}

#[test]
fn test_bound_slot_filling_adapter_is_observed() {
    let adapter = numbers(0);
    let mut grid = grid(1);

    let filled = Arc::new(AtomicBool::new(false));
    let adapter_clone = adapter.clone();
    let filled_clone = filled.clone();
    grid.bound().connect(move |report: &BindReport| {
        if report.items == 0 && !filled_clone.swap(true, Ordering::SeqCst) {
            adapter_clone.set_items(vec![10, 11, 12]);
        }
    });

    grid.set_adapter(adapter.clone()).unwrap();

    assert!(filled.load(Ordering::SeqCst));
    assert_eq!(grid.rows(), [vec!["10"], vec!["11"], vec!["12"]]);
}

#[test]
fn test_item_backgrounds_reach_the_view_tree() {
    let highlight = Drawable::solid(Color::from_rgb8(0xFF, 0xEE, 0x00));
    let adapter = Arc::new(ArrayAdapter::new(vec![true, false], move |_, &marked: &bool| {
        let view = ItemView::new(if marked { "marked" } else { "plain" });
        Some(if marked { view.with_background(highlight) } else { view })
    }));
    let mut grid = grid(2);
    grid.set_adapter(adapter).unwrap();

    let backgrounds: Vec<_> = grid.with_view_tree(|tree| {
        let row = tree.children(tree.root())[0];
        tree.children(row)
            .iter()
            .map(|&id| tree.get(id).unwrap().background())
            .collect()
    });
    assert_eq!(backgrounds, [Some(highlight), None]);
    assert!(grid.debug_tree().contains("marked bg #FFFFEE00"));
}
