//! Tests for the visibility, reordering, sticky, selection and sorting
//! plugins.

use std::sync::{Arc, Mutex};

use headless_table::plugins::selection::{self, SelectionMode, SelectionOptions};
use headless_table::plugins::sorting::{
    self, SortDirection, SortItem, SortingColumnOptions, SortingOptions,
};
use headless_table::plugins::sticky::{self, Sticky, StickyColumnOptions};
use headless_table::plugins::visibility::{self, VisibilityColumnOptions};
use headless_table::plugins::{reordering, resizing};
use headless_table::prelude::*;

fn keys(table: &Table) -> Vec<&str> {
    table.visible_columns().iter().map(|c| c.key()).collect()
}

fn column(table: &Table, key: &str) -> Column {
    table.column_by_key(key).unwrap().clone()
}

// -----------------------------------------------------------------------------
// Visibility
// -----------------------------------------------------------------------------

#[test]
fn test_hide_and_show() {
    let table = Table::new(
        TableConfig::new()
            .columns(["A", "B", "C"].map(ColumnConfig::new))
            .plugin(ColumnVisibility::plugin()),
    )
    .unwrap();
    let b = column(&table, "B");

    visibility::hide(&table, &b);
    assert!(visibility::is_hidden(&table, &b));
    assert_eq!(keys(&table), ["A", "C"]);

    visibility::show(&table, &b);
    assert!(visibility::is_visible(&table, &b));
    assert_eq!(keys(&table), ["A", "B", "C"]);
}

#[test]
fn test_initial_visibility() {
    let table = Table::new(
        TableConfig::new()
            .column(ColumnConfig::new("A").hidden())
            .column(ColumnConfig::new("B").with(ColumnVisibility::for_column(
                VisibilityColumnOptions {
                    is_visible: Some(false),
                },
            )))
            .column(ColumnConfig::new("C"))
            .plugin(ColumnVisibility::plugin()),
    )
    .unwrap();

    assert_eq!(keys(&table), ["C"]);

    visibility::show(&table, &column(&table, "A"));
    table.reset_to_defaults();
    assert_eq!(keys(&table), ["C"]);
}

#[test]
fn test_columns_visible_without_plugin() {
    let table = Table::new(TableConfig::new().column(ColumnConfig::new("A").hidden())).unwrap();
    let a = column(&table, "A");

    assert!(visibility::is_visible(&table, &a));
    visibility::hide(&table, &a);
    assert_eq!(keys(&table), ["A"]);
}

// -----------------------------------------------------------------------------
// Reordering
// -----------------------------------------------------------------------------

fn reorderable() -> Table {
    Table::new(
        TableConfig::new()
            .columns(["A", "B", "C"].map(ColumnConfig::new))
            .plugin(ColumnReordering::plugin()),
    )
    .unwrap()
}

#[test]
fn test_move_left_and_right() {
    let table = reorderable();
    let a = column(&table, "A");
    let c = column(&table, "C");

    assert!(reordering::cannot_move_left(&table, &a));
    assert!(!reordering::move_left(&table, &a));

    assert!(reordering::move_right(&table, &a));
    assert_eq!(keys(&table), ["B", "A", "C"]);
    assert_eq!(reordering::position(&table, &a), Some(1));

    assert!(reordering::cannot_move_right(&table, &c));
    assert!(reordering::move_left(&table, &c));
    assert_eq!(keys(&table), ["B", "C", "A"]);
    assert!(reordering::cannot_move_right(&table, &a));
    assert!(reordering::can_move_left(&table, &a));
}

#[test]
fn test_set_column_order_fills_in_missing_keys() {
    let table = reorderable();

    reordering::set_column_order(&table, &["C", "missing"]);
    assert_eq!(keys(&table), ["C", "A", "B"]);
    assert_eq!(reordering::order(&table), ["C", "A", "B"]);
}

#[test]
fn test_order_survives_column_replacement() {
    let mut table = reorderable();
    reordering::set_column_order(&table, &["C", "B", "A"]);

    table
        .set_columns(vec![
            ColumnConfig::new("A"),
            ColumnConfig::new("B"),
            ColumnConfig::new("D"),
        ])
        .unwrap();
    assert_eq!(keys(&table), ["B", "A", "D"]);
}

#[test]
fn test_cannot_move_without_plugin() {
    let table = Table::new(TableConfig::new().columns(["A", "B"].map(ColumnConfig::new))).unwrap();
    let a = column(&table, "A");

    assert!(reordering::cannot_move_right(&table, &a));
    assert!(!reordering::move_right(&table, &a));
    assert_eq!(keys(&table), ["A", "B"]);
}

// -----------------------------------------------------------------------------
// Sticky
// -----------------------------------------------------------------------------

fn sticky_table(resizable: bool) -> Table {
    let pin = |key: &str, side: Sticky| {
        ColumnConfig::new(key).with(StickyColumns::for_column(StickyColumnOptions { sticky: side }))
    };
    let mut config = TableConfig::new()
        .column(pin("A", Sticky::Left))
        .column(pin("B", Sticky::Left))
        .column(ColumnConfig::new("C"))
        .column(pin("D", Sticky::Right))
        .plugin(StickyColumns::plugin());
    if resizable {
        config = config.plugin(ColumnResizing::plugin());
    }

    let mut table = Table::new(config).unwrap();
    table.set_container_width(1000.0).unwrap();
    table
}

#[test]
fn test_sticky_sides() {
    let table = sticky_table(true);

    assert_eq!(sticky::sticky(&table, &column(&table, "A")), Sticky::Left);
    assert_eq!(sticky::sticky(&table, &column(&table, "D")), Sticky::Right);
    assert!(!sticky::is_sticky(&table, &column(&table, "C")));
}

#[test]
fn test_sticky_offsets_follow_widths() {
    let table = sticky_table(true);
    let b = column(&table, "B");

    assert_eq!(sticky::sticky_offset(&table, &column(&table, "A")), Some(0.0));
    assert_eq!(sticky::sticky_offset(&table, &b), Some(250.0));
    assert_eq!(sticky::sticky_offset(&table, &column(&table, "D")), Some(0.0));
    assert_eq!(sticky::sticky_offset(&table, &column(&table, "C")), None);

    resizing::resize(&table, &b, -50.0);
    assert_eq!(sticky::sticky_offset(&table, &b), Some(200.0));
}

#[test]
fn test_sticky_offset_needs_resizing() {
    let table = sticky_table(false);
    assert_eq!(sticky::sticky_offset(&table, &column(&table, "A")), None);
}

// -----------------------------------------------------------------------------
// Selection
// -----------------------------------------------------------------------------

fn selectable(mode: SelectionMode, log: Arc<Mutex<Vec<String>>>) -> Table {
    let selected = Arc::clone(&log);
    let deselected = log;
    let mut table = Table::new(TableConfig::new().plugin(RowSelection::with(SelectionOptions {
        mode,
        on_select: Some(Arc::new(move |key: &str| {
            selected.lock().unwrap().push(format!("+{key}"));
        })),
        on_deselect: Some(Arc::new(move |key: &str| {
            deselected.lock().unwrap().push(format!("-{key}"));
        })),
    })))
    .unwrap();
    table.set_rows(&["r1", "r2", "r3"]);
    table
}

#[test]
fn test_multi_selection() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let table = selectable(SelectionMode::Multi, Arc::clone(&log));
    let rows = table.rows();

    assert!(selection::select(&table, &rows[0]));
    assert!(selection::toggle(&table, &rows[2]));
    assert!(!selection::select(&table, &rows[0]));
    assert_eq!(selection::selected_keys(&table), ["r1", "r3"]);

    assert!(selection::deselect(&table, &rows[0]));
    assert!(!selection::is_selected(&table, &rows[0]));
    assert_eq!(*log.lock().unwrap(), ["+r1", "+r3", "-r1"]);
}

#[test]
fn test_single_selection_replaces() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let table = selectable(SelectionMode::Single, Arc::clone(&log));
    let rows = table.rows();

    selection::select(&table, &rows[0]);
    selection::select(&table, &rows[1]);
    assert_eq!(selection::selected_keys(&table), ["r2"]);
    assert_eq!(*log.lock().unwrap(), ["+r1", "-r1", "+r2"]);
}

#[test]
fn test_clear_selection() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let table = selectable(SelectionMode::Multi, log);
    let rows = table.rows();
    selection::select(&table, &rows[0]);
    selection::select(&table, &rows[1]);

    table.reset_to_defaults();
    assert!(selection::selected_keys(&table).is_empty());
}

#[test]
fn test_stale_row_cannot_be_selected() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut table = selectable(SelectionMode::Multi, Arc::clone(&log));
    let stale = table.rows()[0].clone();

    table.set_rows(&["r1"]);
    assert!(!selection::select(&table, &stale));
    assert!(log.lock().unwrap().is_empty());
}

// -----------------------------------------------------------------------------
// Sorting
// -----------------------------------------------------------------------------

fn sortable(calls: Arc<Mutex<Vec<Vec<SortItem>>>>) -> Table {
    Table::new(
        TableConfig::new()
            .column(ColumnConfig::new("name"))
            .column(ColumnConfig::new("age").with(Sorting::for_column(SortingColumnOptions {
                sort_property: Some("birth_date".into()),
                ..Default::default()
            })))
            .column(ColumnConfig::new("notes").with(Sorting::for_column(SortingColumnOptions {
                is_sortable: Some(false),
                ..Default::default()
            })))
            .plugin(Sorting::with(SortingOptions {
                sorts: Some(Vec::new()),
                on_sort: Some(Arc::new(move |sorts: &[SortItem]| {
                    calls.lock().unwrap().push(sorts.to_vec());
                })),
            })),
    )
    .unwrap()
}

#[test]
fn test_handle_sort_cycles() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let table = sortable(Arc::clone(&calls));
    let name = column(&table, "name");

    assert!(sorting::is_unsorted(&table, &name));
    assert!(sorting::handle_sort(&table, &name));
    assert!(sorting::is_descending(&table, &name));
    assert!(sorting::handle_sort(&table, &name));
    assert!(sorting::is_ascending(&table, &name));
    assert!(sorting::handle_sort(&table, &name));
    assert_eq!(sorting::sort_direction(&table, &name), SortDirection::None);

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 3);
    assert!(calls[2].is_empty());
}

#[test]
fn test_sort_property_and_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let table = sortable(Arc::clone(&calls));
    let age = column(&table, "age");

    sorting::toggle_ascending(&table, &age);
    assert_eq!(
        sorting::sorts(&table),
        [SortItem {
            property: "birth_date".into(),
            direction: SortDirection::Ascending,
        }]
    );

    sorting::toggle_ascending(&table, &age);
    assert!(sorting::is_unsorted(&table, &age));
    assert!(sorting::sorts(&table).is_empty());
}

#[test]
fn test_new_sort_replaces_previous() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let table = sortable(Arc::clone(&calls));
    let name = column(&table, "name");
    let age = column(&table, "age");

    sorting::handle_sort(&table, &name);
    sorting::handle_sort(&table, &age);
    assert!(sorting::is_unsorted(&table, &name));
    assert!(sorting::is_descending(&table, &age));

    sorting::toggle_ascending(&table, &name);
    assert!(sorting::is_unsorted(&table, &age));

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[1],
        [SortItem {
            property: "birth_date".into(),
            direction: SortDirection::Descending,
        }]
    );
    assert_eq!(
        calls[2],
        [SortItem {
            property: "name".into(),
            direction: SortDirection::Ascending,
        }]
    );
}

#[test]
fn test_unsortable_columns() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let table = sortable(Arc::clone(&calls));
    let notes = column(&table, "notes");

    assert!(!sorting::is_sortable(&table, &notes));
    assert!(!sorting::handle_sort(&table, &notes));
    assert!(calls.lock().unwrap().is_empty());

    // Without a callback the table isn't sortable at all.
    let table = Table::new(
        TableConfig::new()
            .column(ColumnConfig::new("name"))
            .plugin(Sorting::plugin()),
    )
    .unwrap();
    assert!(!sorting::is_sortable(&table, &column(&table, "name")));
}

#[test]
fn test_column_sortable_overrides_table() {
    let table = Table::new(
        TableConfig::new()
            .column(ColumnConfig::new("name"))
            .column(ColumnConfig::new("age").with(Sorting::for_column(SortingColumnOptions {
                is_sortable: Some(true),
                ..Default::default()
            })))
            .plugin(Sorting::with(SortingOptions {
                on_sort: Some(Arc::new(|_: &[SortItem]| {})),
                ..Default::default()
            })),
    )
    .unwrap();

    // No initial sorts, so the table itself isn't sortable.
    assert!(!sorting::is_sortable(&table, &column(&table, "name")));
    assert!(sorting::is_sortable(&table, &column(&table, "age")));
}
