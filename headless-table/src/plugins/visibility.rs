//! Column visibility.

use log::debug;

use crate::meta;
use crate::options;
use crate::plugin::{NoMeta, Plugin, PluginId};
use crate::table::{Column, Table};

#[derive(Debug, Clone, Default)]
pub struct VisibilityColumnOptions {
    /// Initial visibility, overriding [`ColumnConfig::hidden`](crate::ColumnConfig::hidden).
    pub is_visible: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityMeta {
    pub is_visible: bool,
}

/// Lets the user hide and show columns.
///
/// Hidden columns are dropped from [`Table::visible_columns`].
#[derive(Debug, Clone, Copy)]
pub struct ColumnVisibility;

impl ColumnVisibility {
    fn initial(table: &Table, column: &Column) -> bool {
        options::for_column::<Self>(table, column)
            .and_then(|options| options.is_visible)
            .unwrap_or(column.config().is_visible)
    }
}

impl Plugin for ColumnVisibility {
    const ID: PluginId = PluginId::ColumnVisibility;

    type TableMeta = NoMeta;
    type ColumnMeta = VisibilityMeta;
    type RowMeta = NoMeta;
    type Options = ();
    type ColumnOptions = VisibilityColumnOptions;

    fn column_meta(table: &Table, column: &Column) -> Option<VisibilityMeta> {
        Some(VisibilityMeta {
            is_visible: Self::initial(table, column),
        })
    }

    fn transform_columns<'t>(table: &'t Table, columns: Vec<&'t Column>) -> Vec<&'t Column> {
        columns
            .into_iter()
            .filter(|column| is_visible(table, column))
            .collect()
    }

    fn reset(table: &Table) {
        for column in table.columns() {
            if let Some(m) = meta::for_column::<Self>(table, column) {
                let initial = Self::initial(table, column);
                m.update(|m| m.is_visible = initial);
            }
        }
    }
}

fn set_visible(table: &Table, column: &Column, visible: bool) {
    let Some(m) = meta::for_column::<ColumnVisibility>(table, column) else {
        return;
    };

    let changed = m.update(|m| std::mem::replace(&mut m.is_visible, visible) != visible);
    if changed {
        debug!(
            "column '{}' {}",
            column.key(),
            if visible { "shown" } else { "hidden" }
        );
        table.refresh_layout();
    }
}

pub fn hide(table: &Table, column: &Column) {
    set_visible(table, column, false);
}

pub fn show(table: &Table, column: &Column) {
    set_visible(table, column, true);
}

/// Whether `column` is visible. Columns are visible when the plugin isn't
/// registered.
pub fn is_visible(table: &Table, column: &Column) -> bool {
    match meta::for_column::<ColumnVisibility>(table, column) {
        Some(m) => m.read(|m| m.is_visible),
        None => table.owns_column(column),
    }
}

pub fn is_hidden(table: &Table, column: &Column) -> bool {
    !is_visible(table, column)
}
