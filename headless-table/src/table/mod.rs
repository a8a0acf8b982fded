//! The table entity and its columns and rows.

mod column;
mod row;

pub use column::Column;
pub use row::{Row, TableRow};

use log::debug;

use crate::config::{self, ColumnConfig, TableConfig};
use crate::error::{ConfigError, TableError};
use crate::id::{ColumnId, RowId, TableId};
use crate::meta::MetaRegistry;
use crate::plugin::{PluginConfig, PluginId};

/// Number of cached metadata entries per scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetadataCounts {
    pub table: usize,
    pub columns: usize,
    pub rows: usize,
}

/// A headless table: columns, rows, registered plugins and their metadata.
///
/// The table owns one metadata registry per scope. Dropping the table drops
/// all of its metadata.
#[derive(Debug)]
pub struct Table {
    id: TableId,
    plugins: Vec<PluginConfig>,
    columns: Vec<Column>,
    column_generation: u64,
    rows: Vec<Row>,
    row_generation: u64,
    container_width: Option<f64>,
    registry: MetaRegistry,
}

impl Table {
    /// Create a table.
    ///
    /// Fails before any column is constructed if two columns share a key or
    /// a plugin is registered twice.
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        config::validate_plugins(&config.plugins)?;
        config::validate_columns(&config.columns)?;

        let id = TableId::new();
        let columns = Self::build_columns(id, 0, config.columns);
        debug!(
            "created {} with {} columns and plugins {:?}",
            id,
            columns.len(),
            config.plugins.iter().map(|p| p.id()).collect::<Vec<_>>()
        );

        Ok(Self {
            id,
            plugins: config.plugins,
            columns,
            column_generation: 0,
            rows: Vec::new(),
            row_generation: 0,
            container_width: None,
            registry: MetaRegistry::new(),
        })
    }

    fn build_columns(table: TableId, generation: u64, configs: Vec<ColumnConfig>) -> Vec<Column> {
        configs
            .into_iter()
            .enumerate()
            .map(|(index, config)| Column::new(ColumnId::new(table, generation, index), config))
            .collect()
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Plugins
    // -------------------------------------------------------------------------

    /// Registered plugins, in registration order.
    pub fn plugins(&self) -> impl Iterator<Item = PluginId> + '_ {
        self.plugins.iter().map(|p| p.id())
    }

    pub fn has_plugin(&self, id: PluginId) -> bool {
        self.plugins.iter().any(|p| p.id() == id)
    }

    pub(crate) fn plugin_config(&self, id: PluginId) -> Option<&PluginConfig> {
        self.plugins.iter().find(|p| p.id() == id)
    }

    pub(crate) fn registry(&self) -> &MetaRegistry {
        &self.registry
    }

    /// How many metadata objects are currently cached.
    pub fn metadata_counts(&self) -> MetadataCounts {
        MetadataCounts {
            table: self.registry.table.len(),
            columns: self.registry.columns.len(),
            rows: self.registry.rows.len(),
        }
    }

    /// Ask every plugin to return to its default state.
    pub fn reset_to_defaults(&self) {
        for id in self.plugins() {
            id.reset(self);
        }
        self.refresh_layout();
    }

    /// Tell plugins that the set or order of visible columns changed.
    ///
    /// Plugins that hide, show or move columns call this after mutating
    /// their state.
    pub fn refresh_layout(&self) {
        for id in self.plugins() {
            id.columns_changed(self);
        }
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// All columns, in configuration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Columns to present, after every plugin filtered and ordered them.
    pub fn visible_columns(&self) -> Vec<&Column> {
        self.plugins()
            .fold(self.columns.iter().collect::<Vec<_>>(), |columns, id| {
                id.transform_columns(self, columns)
            })
    }

    /// Resolve a column id of the current generation.
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        if id.table() != self.id || id.generation() != self.column_generation {
            return None;
        }
        self.columns.get(id.index())
    }

    pub fn column_by_key(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key() == key)
    }

    /// Whether `column` belongs to this table's current column set.
    pub fn owns_column(&self, column: &Column) -> bool {
        self.column(column.id()).is_some()
    }

    /// Replace the column configuration.
    ///
    /// Validation happens before anything changes; on success every column
    /// is rebuilt with a new id and all column metadata is dropped.
    pub fn set_columns(&mut self, configs: Vec<ColumnConfig>) -> Result<(), ConfigError> {
        config::validate_columns(&configs)?;

        self.column_generation += 1;
        self.columns = Self::build_columns(self.id, self.column_generation, configs);
        let pruned = self.registry.columns.clear();
        debug!(
            "{}: replaced columns (generation {}), pruned {} column metadata entries",
            self.id, self.column_generation, pruned
        );

        self.refresh_layout();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Resolve a row id of the current generation.
    pub fn row(&self, id: RowId) -> Option<&Row> {
        if id.table() != self.id || id.generation() != self.row_generation {
            return None;
        }
        self.rows.get(id.index())
    }

    pub fn owns_row(&self, row: &Row) -> bool {
        self.row(row.id()).is_some()
    }

    /// Replace the data set.
    ///
    /// Rows are not stable across reloads: every row gets a new id and all
    /// row metadata is dropped, even for items whose key didn't change.
    pub fn set_rows<R: TableRow>(&mut self, data: &[R]) {
        self.row_generation += 1;
        let (id, generation) = (self.id, self.row_generation);
        self.rows = data
            .iter()
            .enumerate()
            .map(|(index, item)| Row::new(RowId::new(id, generation, index), item.id()))
            .collect();
        let pruned = self.registry.rows.clear();
        debug!(
            "{}: replaced {} rows (generation {}), pruned {} row metadata entries",
            self.id,
            self.rows.len(),
            self.row_generation,
            pruned
        );
    }

    // -------------------------------------------------------------------------
    // Container
    // -------------------------------------------------------------------------

    /// Last container width reported by the host.
    pub fn container_width(&self) -> Option<f64> {
        self.container_width
    }

    /// Record a new container width and let plugins react.
    ///
    /// The width must be a positive, finite measurement.
    pub fn set_container_width(&mut self, width: f64) -> Result<(), TableError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(TableError::InvalidContainerWidth(width));
        }

        self.container_width = Some(width);
        for id in self.plugins() {
            id.container_resized(self);
        }
        Ok(())
    }
}
