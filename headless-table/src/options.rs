//! Plugin options lookup.
//!
//! Options are user configuration, read-only to plugins. For a column the
//! resolution order is: the column's own options for the plugin, then
//! options inherited from the table-level plugin options, then the plugin's
//! built-in default.

use crate::plugin::Plugin;
use crate::table::{Column, Table};

/// Table-level options of plugin `P`, or its defaults.
///
/// Absent only when `P` is not registered on the table.
pub fn for_table<P: Plugin>(table: &Table) -> Option<P::Options> {
    let config = table.plugin_config(P::ID)?;
    Some(config.options::<P::Options>().cloned().unwrap_or_default())
}

/// Resolved options of plugin `P` for one column.
///
/// Absent when `P` is not registered on the table or the column is not part
/// of the table's current column set.
pub fn for_column<P: Plugin>(table: &Table, column: &Column) -> Option<P::ColumnOptions> {
    let config = table.plugin_config(P::ID)?;
    if !table.owns_column(column) {
        return None;
    }

    let own = column
        .config()
        .plugin_options
        .iter()
        .find(|o| o.plugin() == P::ID)
        .and_then(|o| o.options::<P::ColumnOptions>());
    if let Some(options) = own {
        return Some(options.clone());
    }

    let inherited = match config.options::<P::Options>() {
        Some(options) => P::column_defaults(options),
        None => P::column_defaults(&P::Options::default()),
    };

    Some(inherited.unwrap_or_default())
}
