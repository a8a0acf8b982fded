//! Data sorting state.
//!
//! The table never sorts data itself. The plugin tracks which properties the
//! user sorted by and hands the result to `on_sort`; the host reorders its
//! rows and calls [`Table::set_rows`]. Sorting is by one property at a
//! time: a new sort replaces the previous one.
//!
//! A table is sortable when it has both `on_sort` and initial `sorts`
//! (possibly empty). A column's own `is_sortable` overrides that.

use std::sync::Arc;

use log::debug;

use crate::meta;
use crate::options;
use crate::plugin::{NoMeta, Plugin, PluginId};
use crate::table::{Column, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortItem {
    pub property: String,
    pub direction: SortDirection,
}

pub type SortCallback = Arc<dyn Fn(&[SortItem]) + Send + Sync>;

#[derive(Clone, Default)]
pub struct SortingOptions {
    /// Initial sorts.
    pub sorts: Option<Vec<SortItem>>,
    pub on_sort: Option<SortCallback>,
}

impl std::fmt::Debug for SortingOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortingOptions")
            .field("sorts", &self.sorts)
            .field("on_sort", &self.on_sort.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SortingColumnOptions {
    /// Defaults to whether the table is sortable.
    pub is_sortable: Option<bool>,
    /// Property to sort by. Defaults to the column key.
    pub sort_property: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub sorts: Vec<SortItem>,
}

#[derive(Debug, Clone, Copy)]
pub struct Sorting;

impl Sorting {
    fn initial(table: &Table) -> Vec<SortItem> {
        options::for_table::<Self>(table)
            .and_then(|options| options.sorts)
            .unwrap_or_default()
    }
}

impl Plugin for Sorting {
    const ID: PluginId = PluginId::DataSorting;

    type TableMeta = SortState;
    type ColumnMeta = NoMeta;
    type RowMeta = NoMeta;
    type Options = SortingOptions;
    type ColumnOptions = SortingColumnOptions;

    fn table_meta(table: &Table) -> Option<SortState> {
        Some(SortState {
            sorts: Self::initial(table),
        })
    }

    fn reset(table: &Table) {
        let sorts = Self::initial(table);
        if let Some(state) = meta::for_table::<Self>(table) {
            state.update(|s| s.sorts = sorts);
        }
    }
}

fn sort_property(table: &Table, column: &Column) -> Option<String> {
    let options = options::for_column::<Sorting>(table, column)?;
    Some(
        options
            .sort_property
            .unwrap_or_else(|| column.key().to_string()),
    )
}

/// Whether the user can sort by `column`.
pub fn is_sortable(table: &Table, column: &Column) -> bool {
    let Some(column_options) = options::for_column::<Sorting>(table, column) else {
        return false;
    };
    column_options.is_sortable.unwrap_or_else(|| {
        options::for_table::<Sorting>(table)
            .is_some_and(|o| o.on_sort.is_some() && o.sorts.is_some())
    })
}

/// Current sorts. Holds at most one item.
pub fn sorts(table: &Table) -> Vec<SortItem> {
    meta::for_table::<Sorting>(table)
        .map(|s| s.read(|s| s.sorts.clone()))
        .unwrap_or_default()
}

pub fn sort_direction(table: &Table, column: &Column) -> SortDirection {
    let Some(property) = sort_property(table, column) else {
        return SortDirection::None;
    };
    sorts(table)
        .into_iter()
        .find(|item| item.property == property)
        .map(|item| item.direction)
        .unwrap_or_default()
}

pub fn is_ascending(table: &Table, column: &Column) -> bool {
    sort_direction(table, column) == SortDirection::Ascending
}

pub fn is_descending(table: &Table, column: &Column) -> bool {
    sort_direction(table, column) == SortDirection::Descending
}

pub fn is_unsorted(table: &Table, column: &Column) -> bool {
    sort_direction(table, column) == SortDirection::None
}

fn set_direction(table: &Table, column: &Column, direction: SortDirection) -> bool {
    if !is_sortable(table, column) {
        return false;
    }
    let (Some(property), Some(state), Some(options)) = (
        sort_property(table, column),
        meta::for_table::<Sorting>(table),
        options::for_table::<Sorting>(table),
    ) else {
        return false;
    };

    let sorts = match direction {
        SortDirection::None => Vec::new(),
        direction => vec![SortItem {
            property: property.clone(),
            direction,
        }],
    };
    state.update(|s| s.sorts = sorts.clone());

    debug!("sort '{}' {:?}", property, direction);
    if let Some(on_sort) = &options.on_sort {
        on_sort(sorts.as_slice());
    }
    true
}

/// Cycle the column's sort: none, descending, ascending, none.
pub fn handle_sort(table: &Table, column: &Column) -> bool {
    let next = match sort_direction(table, column) {
        SortDirection::None => SortDirection::Descending,
        SortDirection::Descending => SortDirection::Ascending,
        SortDirection::Ascending => SortDirection::None,
    };
    set_direction(table, column, next)
}

/// Sort ascending, or stop sorting if already ascending.
pub fn toggle_ascending(table: &Table, column: &Column) -> bool {
    let next = if is_ascending(table, column) {
        SortDirection::None
    } else {
        SortDirection::Ascending
    };
    set_direction(table, column, next)
}

/// Sort descending, or stop sorting if already descending.
pub fn toggle_descending(table: &Table, column: &Column) -> bool {
    let next = if is_descending(table, column) {
        SortDirection::None
    } else {
        SortDirection::Descending
    };
    set_direction(table, column, next)
}
