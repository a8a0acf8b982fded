//! Plugin descriptors.
//!
//! A plugin is a stateless type implementing [`Plugin`]. It declares the
//! metadata it keeps per scope (table, column, row) and the options it
//! reads. All state lives in the table's registry; plugins never hold
//! references to one another. When one plugin needs another's state it
//! looks it up through [`meta`](crate::meta) and treats absence as "feature
//! disabled".

mod config;

pub use config::{ColumnPluginOptions, PluginConfig};

use std::str::FromStr;

use crate::plugins::{
    ColumnReordering, ColumnResizing, ColumnVisibility, RowSelection, Sorting, StickyColumns,
};
use crate::table::{Column, Row, Table};

/// Identity of a plugin definition.
///
/// The set of plugins is closed; every lookup key in the registry is
/// `(entity id, PluginId)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluginId {
    ColumnResizing,
    ColumnVisibility,
    ColumnReordering,
    StickyColumns,
    RowSelection,
    DataSorting,
}

impl PluginId {
    pub const ALL: [PluginId; 6] = [
        PluginId::ColumnResizing,
        PluginId::ColumnVisibility,
        PluginId::ColumnReordering,
        PluginId::StickyColumns,
        PluginId::RowSelection,
        PluginId::DataSorting,
    ];

    /// Stable name, also accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            PluginId::ColumnResizing => "column-resizing",
            PluginId::ColumnVisibility => "column-visibility",
            PluginId::ColumnReordering => "column-reordering",
            PluginId::StickyColumns => "sticky-columns",
            PluginId::RowSelection => "row-selection",
            PluginId::DataSorting => "data-sorting",
        }
    }
}

impl std::fmt::Display for PluginId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown plugin name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plugin: {0}")]
pub struct UnknownPlugin(pub String);

impl FromStr for PluginId {
    type Err = UnknownPlugin;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PluginId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| UnknownPlugin(s.to_string()))
    }
}

/// Metadata type for a scope a plugin doesn't participate in.
///
/// Uninhabited, so a lookup for that scope can only ever be `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMeta {}

/// A plugin definition.
///
/// Constructors return `None` for scopes the plugin doesn't care about;
/// the registry then reports the lookup as absent rather than failing.
pub trait Plugin: Sized + 'static {
    /// Identity used as the registry key.
    const ID: PluginId;

    type TableMeta: Send + Sync + 'static;
    type ColumnMeta: Send + Sync + 'static;
    type RowMeta: Send + Sync + 'static;

    /// Table-level options, given through [`Plugin::with`].
    type Options: Clone + Default + Send + Sync + 'static;
    /// Per-column options, given through [`Plugin::for_column`].
    type ColumnOptions: Clone + Default + Send + Sync + 'static;

    fn table_meta(_table: &Table) -> Option<Self::TableMeta> {
        None
    }

    fn column_meta(_table: &Table, _column: &Column) -> Option<Self::ColumnMeta> {
        None
    }

    fn row_meta(_table: &Table, _row: &Row) -> Option<Self::RowMeta> {
        None
    }

    /// Column options inherited from the table-level options, used when a
    /// column doesn't configure its own.
    fn column_defaults(_options: &Self::Options) -> Option<Self::ColumnOptions> {
        None
    }

    /// Filter or reorder the columns the table presents as visible.
    fn transform_columns<'t>(_table: &'t Table, columns: Vec<&'t Column>) -> Vec<&'t Column> {
        columns
    }

    /// Called after the column set or the visible columns changed.
    fn columns_changed(_table: &Table) {}

    /// Called after the container width changed.
    fn container_resized(_table: &Table) {}

    /// Return every piece of user-adjustable state to its default.
    fn reset(_table: &Table) {}

    /// Register the plugin with default options.
    fn plugin() -> PluginConfig {
        PluginConfig::new(Self::ID)
    }

    /// Register the plugin with table-level options.
    fn with(options: Self::Options) -> PluginConfig {
        PluginConfig::with_options(Self::ID, options)
    }

    /// Build per-column options for this plugin.
    fn for_column(options: Self::ColumnOptions) -> ColumnPluginOptions {
        ColumnPluginOptions::new(Self::ID, options)
    }
}

/// Run `$body` with `$p` bound to the plugin type behind `$id`.
macro_rules! with_plugin {
    ($id:expr, $p:ident => $body:expr) => {
        match $id {
            PluginId::ColumnResizing => {
                type $p = ColumnResizing;
                $body
            }
            PluginId::ColumnVisibility => {
                type $p = ColumnVisibility;
                $body
            }
            PluginId::ColumnReordering => {
                type $p = ColumnReordering;
                $body
            }
            PluginId::StickyColumns => {
                type $p = StickyColumns;
                $body
            }
            PluginId::RowSelection => {
                type $p = RowSelection;
                $body
            }
            PluginId::DataSorting => {
                type $p = Sorting;
                $body
            }
        }
    };
}

impl PluginId {
    pub(crate) fn transform_columns<'t>(
        self,
        table: &'t Table,
        columns: Vec<&'t Column>,
    ) -> Vec<&'t Column> {
        with_plugin!(self, P => P::transform_columns(table, columns))
    }

    pub(crate) fn columns_changed(self, table: &Table) {
        with_plugin!(self, P => P::columns_changed(table))
    }

    pub(crate) fn container_resized(self, table: &Table) {
        with_plugin!(self, P => P::container_resized(table))
    }

    pub(crate) fn reset(self, table: &Table) {
        with_plugin!(self, P => P::reset(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for id in PluginId::ALL {
            assert_eq!(id.name().parse::<PluginId>(), Ok(id));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "column-sizing".parse::<PluginId>(),
            Err(UnknownPlugin("column-sizing".into()))
        );
    }

    #[test]
    fn test_ids_match_plugin_types() {
        assert_eq!(ColumnResizing::ID, PluginId::ColumnResizing);
        assert_eq!(ColumnVisibility::ID, PluginId::ColumnVisibility);
        assert_eq!(ColumnReordering::ID, PluginId::ColumnReordering);
        assert_eq!(StickyColumns::ID, PluginId::StickyColumns);
        assert_eq!(RowSelection::ID, PluginId::RowSelection);
        assert_eq!(Sorting::ID, PluginId::DataSorting);
    }
}
