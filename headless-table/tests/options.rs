//! Tests for plugin options resolution.

use std::sync::Arc;

use headless_table::options;
use headless_table::plugins::resizing::{ContainerFit, ResizingColumnOptions, ResizingOptions};
use headless_table::plugins::sorting::{self, SortItem, SortingColumnOptions, SortingOptions};
use headless_table::plugins::sticky::{Sticky, StickyColumnOptions};
use headless_table::prelude::*;

#[test]
fn test_table_options_default_when_not_given() {
    let table = Table::new(TableConfig::new().plugin(ColumnResizing::plugin())).unwrap();

    let options = options::for_table::<ColumnResizing>(&table).unwrap();
    assert_eq!(options.fit, ContainerFit::Proportional);
}

#[test]
fn test_table_options_as_given() {
    let table = Table::new(TableConfig::new().plugin(ColumnResizing::with(ResizingOptions {
        fit: ContainerFit::Equal,
        ..Default::default()
    })))
    .unwrap();

    let options = options::for_table::<ColumnResizing>(&table).unwrap();
    assert_eq!(options.fit, ContainerFit::Equal);
}

#[test]
fn test_options_absent_for_inactive_plugin() {
    let table = Table::new(TableConfig::new().column(ColumnConfig::new("A"))).unwrap();

    assert!(options::for_table::<ColumnResizing>(&table).is_none());
    assert!(options::for_column::<ColumnResizing>(&table, &table.columns()[0]).is_none());
}

#[test]
fn test_column_options_override_defaults() {
    let table = Table::new(
        TableConfig::new()
            .column(ColumnConfig::new("A").with(ColumnResizing::for_column(
                ResizingColumnOptions {
                    min_width: Some(40.0),
                    is_resizable: Some(false),
                },
            )))
            .column(ColumnConfig::new("B"))
            .plugin(ColumnResizing::plugin()),
    )
    .unwrap();

    let a = options::for_column::<ColumnResizing>(&table, &table.columns()[0]).unwrap();
    assert_eq!(a.min_width, Some(40.0));
    assert_eq!(a.is_resizable, Some(false));

    let b = options::for_column::<ColumnResizing>(&table, &table.columns()[1]).unwrap();
    assert_eq!(b.min_width, None);
    assert_eq!(b.is_resizable, None);
}

#[test]
fn test_later_column_options_replace_earlier() {
    let column = ColumnConfig::new("A")
        .with(StickyColumns::for_column(StickyColumnOptions {
            sticky: Sticky::Left,
        }))
        .with(StickyColumns::for_column(StickyColumnOptions {
            sticky: Sticky::Right,
        }));
    let table = Table::new(
        TableConfig::new()
            .column(column)
            .plugin(StickyColumns::plugin()),
    )
    .unwrap();

    let options = options::for_column::<StickyColumns>(&table, &table.columns()[0]).unwrap();
    assert_eq!(options.sticky, Sticky::Right);
}

#[test]
fn test_options_for_other_plugin_are_ignored() {
    let table = Table::new(
        TableConfig::new()
            .column(ColumnConfig::new("A").with(Sorting::for_column(SortingColumnOptions {
                is_sortable: Some(false),
                sort_property: None,
            })))
            .plugin(ColumnResizing::plugin())
            .plugin(Sorting::with(SortingOptions {
                on_sort: Some(Arc::new(|_: &[SortItem]| {})),
                ..Default::default()
            })),
    )
    .unwrap();
    let a = &table.columns()[0];

    let resizing = options::for_column::<ColumnResizing>(&table, a).unwrap();
    assert_eq!(resizing.min_width, None);
    assert!(!sorting::is_sortable(&table, a));
}

#[test]
fn test_column_options_inherit_from_table_options() {
    let table = Table::new(
        TableConfig::new()
            .column(ColumnConfig::new("A"))
            .column(ColumnConfig::new("B").with(ColumnResizing::for_column(
                ResizingColumnOptions {
                    min_width: Some(10.0),
                    is_resizable: None,
                },
            )))
            .plugin(ColumnResizing::with(ResizingOptions {
                columns: ResizingColumnOptions {
                    min_width: Some(64.0),
                    is_resizable: Some(false),
                },
                ..Default::default()
            })),
    )
    .unwrap();

    let a = options::for_column::<ColumnResizing>(&table, &table.columns()[0]).unwrap();
    assert_eq!(a.min_width, Some(64.0));
    assert_eq!(a.is_resizable, Some(false));

    // A column's own options win as a whole.
    let b = options::for_column::<ColumnResizing>(&table, &table.columns()[1]).unwrap();
    assert_eq!(b.min_width, Some(10.0));
    assert_eq!(b.is_resizable, None);
}
