//! Column reordering.
//!
//! The order is kept as a list of column keys in the table metadata, so it
//! survives a column set replacement for keys that still exist. Columns the
//! order doesn't mention go last, in configuration order.

use log::debug;

use crate::meta;
use crate::plugin::{NoMeta, Plugin, PluginId};
use crate::table::{Column, Table};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOrder {
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnReordering;

impl Plugin for ColumnReordering {
    const ID: PluginId = PluginId::ColumnReordering;

    type TableMeta = ColumnOrder;
    type ColumnMeta = NoMeta;
    type RowMeta = NoMeta;
    type Options = ();
    type ColumnOptions = ();

    fn table_meta(table: &Table) -> Option<ColumnOrder> {
        Some(ColumnOrder {
            keys: config_order(table),
        })
    }

    fn transform_columns<'t>(table: &'t Table, mut columns: Vec<&'t Column>) -> Vec<&'t Column> {
        let order = order(table);
        columns.sort_by_key(|column| order.iter().position(|key| key == column.key()));
        columns
    }

    fn columns_changed(table: &Table) {
        let normalized = order(table);
        if let Some(m) = meta::for_table::<Self>(table) {
            m.update(|m| m.keys = normalized);
        }
    }

    fn reset(table: &Table) {
        let keys = config_order(table);
        if let Some(m) = meta::for_table::<Self>(table) {
            m.update(|m| m.keys = keys);
        }
    }
}

fn config_order(table: &Table) -> Vec<String> {
    table.columns().iter().map(|c| c.key().to_string()).collect()
}

/// Effective order of all column keys.
pub fn order(table: &Table) -> Vec<String> {
    let Some(m) = meta::for_table::<ColumnReordering>(table) else {
        return config_order(table);
    };

    let mut keys: Vec<String> = m.read(|m| {
        m.keys
            .iter()
            .filter(|key| table.column_by_key(key).is_some())
            .cloned()
            .collect()
    });
    for column in table.columns() {
        if !keys.iter().any(|key| key == column.key()) {
            keys.push(column.key().to_string());
        }
    }
    keys
}

/// Position of `column` in the effective order.
pub fn position(table: &Table, column: &Column) -> Option<usize> {
    if !table.owns_column(column) {
        return None;
    }
    order(table).iter().position(|key| key == column.key())
}

/// Replace the order. Unknown keys are ignored; missing columns go last.
pub fn set_column_order<S: AsRef<str>>(table: &Table, keys: &[S]) {
    let Some(m) = meta::for_table::<ColumnReordering>(table) else {
        return;
    };

    let keys: Vec<String> = keys.iter().map(|k| k.as_ref().to_string()).collect();
    m.update(|m| m.keys = keys);
    // Normalizes the stored order along with the rest of the layout.
    table.refresh_layout();
}

fn swap(table: &Table, column: &Column, offset: isize) -> bool {
    if !table.has_plugin(PluginId::ColumnReordering) {
        return false;
    }
    let Some(from) = position(table, column) else {
        return false;
    };
    let mut keys = order(table);
    let Some(to) = from.checked_add_signed(offset).filter(|to| *to < keys.len()) else {
        return false;
    };

    keys.swap(from, to);
    debug!("moved column '{}' from {} to {}", column.key(), from, to);
    set_column_order(table, &keys);
    true
}

/// Swap `column` with the one before it. Returns whether it moved.
pub fn move_left(table: &Table, column: &Column) -> bool {
    swap(table, column, -1)
}

/// Swap `column` with the one after it. Returns whether it moved.
pub fn move_right(table: &Table, column: &Column) -> bool {
    swap(table, column, 1)
}

pub fn can_move_left(table: &Table, column: &Column) -> bool {
    table.has_plugin(PluginId::ColumnReordering)
        && position(table, column).is_some_and(|position| position > 0)
}

pub fn can_move_right(table: &Table, column: &Column) -> bool {
    table.has_plugin(PluginId::ColumnReordering)
        && position(table, column).is_some_and(|position| position + 1 < table.columns().len())
}

pub fn cannot_move_left(table: &Table, column: &Column) -> bool {
    !can_move_left(table, column)
}

pub fn cannot_move_right(table: &Table, column: &Column) -> bool {
    !can_move_right(table, column)
}
