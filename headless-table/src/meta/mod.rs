//! Plugin metadata lookup.
//!
//! Metadata is constructed on first access and cached per `(entity, plugin)`
//! in the table that owns the entity. Table metadata lives as long as the
//! table. Column and row metadata is dropped when the column or row set is
//! replaced; ids from an earlier generation no longer resolve.
//!
//! ```
//! use headless_table::prelude::*;
//! use headless_table::meta;
//!
//! let table = Table::new(
//!     TableConfig::new()
//!         .column(ColumnConfig::new("A"))
//!         .plugin(ColumnVisibility::plugin()),
//! )
//! .unwrap();
//! let column = &table.columns()[0];
//!
//! let first = meta::for_column::<ColumnVisibility>(&table, column).unwrap();
//! let second = meta::for_column::<ColumnVisibility>(&table, column).unwrap();
//! assert!(first.ptr_eq(&second));
//!
//! // Not registered on this table: absent, not an error.
//! assert!(meta::for_column::<ColumnResizing>(&table, column).is_none());
//! ```

mod cache;
mod handle;

pub(crate) use cache::MetaRegistry;
pub use handle::Meta;

use crate::error::TableError;
use crate::plugin::Plugin;
use crate::table::{Column, Row, Table};

/// Table-scoped metadata of plugin `P`.
pub fn for_table<P: Plugin>(table: &Table) -> Option<Meta<P::TableMeta>> {
    if !table.has_plugin(P::ID) {
        return None;
    }

    table
        .registry()
        .table
        .get_or_init(table.id(), P::ID, || P::table_meta(table))
}

/// Column-scoped metadata of plugin `P`.
///
/// Absent for columns that aren't part of the table's current column set.
pub fn for_column<P: Plugin>(table: &Table, column: &Column) -> Option<Meta<P::ColumnMeta>> {
    if !table.has_plugin(P::ID) || !table.owns_column(column) {
        return None;
    }

    table
        .registry()
        .columns
        .get_or_init(column.id(), P::ID, || P::column_meta(table, column))
}

/// Row-scoped metadata of plugin `P`.
///
/// Absent for rows that aren't part of the table's current row set.
pub fn for_row<P: Plugin>(table: &Table, row: &Row) -> Option<Meta<P::RowMeta>> {
    if !table.has_plugin(P::ID) || !table.owns_row(row) {
        return None;
    }

    table
        .registry()
        .rows
        .get_or_init(row.id(), P::ID, || P::row_meta(table, row))
}

/// Like [`for_table`], but the plugin must be active.
pub fn require_table<P: Plugin>(table: &Table) -> Result<Meta<P::TableMeta>, TableError> {
    for_table::<P>(table).ok_or(TableError::PluginNotRegistered(P::ID))
}
