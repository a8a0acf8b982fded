//! Table and column configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::plugin::{ColumnPluginOptions, PluginConfig, PluginId};

/// Minimum width applied to columns that don't configure one.
pub const DEFAULT_MIN_WIDTH: f64 = 128.0;

fn default_min_width() -> f64 {
    DEFAULT_MIN_WIDTH
}

fn default_visible() -> bool {
    true
}

/// Configuration for a single column.
///
/// # Examples
///
/// ```
/// use headless_table::ColumnConfig;
///
/// let columns = vec![
///     ColumnConfig::new("id").min_width(64.0),
///     ColumnConfig::new("name").name("Name"),
///     ColumnConfig::new("internal").hidden(),
/// ];
/// assert_eq!(columns[0].min_width, 64.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Unique key within the table.
    pub key: String,
    /// Display name. Falls back to the key.
    #[serde(default)]
    pub name: Option<String>,
    /// The column never renders narrower than this.
    #[serde(default = "default_min_width")]
    pub min_width: f64,
    /// Whether the column starts out visible.
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    /// Per-column plugin options, see [`Plugin::for_column`](crate::Plugin::for_column).
    #[serde(skip)]
    pub plugin_options: Vec<ColumnPluginOptions>,
}

impl ColumnConfig {
    /// Create a column with default minimum width and visibility.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
            min_width: DEFAULT_MIN_WIDTH,
            is_visible: true,
            plugin_options: Vec::new(),
        }
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the minimum width.
    pub fn min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    /// Start the column hidden.
    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    /// Attach per-column options for one plugin.
    ///
    /// A later entry for the same plugin replaces the earlier one.
    pub fn with(mut self, options: ColumnPluginOptions) -> Self {
        self.plugin_options.retain(|o| o.plugin() != options.plugin());
        self.plugin_options.push(options);
        self
    }
}

/// Configuration for a table: its columns and active plugins.
#[derive(Debug, Clone, Default)]
pub struct TableConfig {
    pub columns: Vec<ColumnConfig>,
    pub plugins: Vec<PluginConfig>,
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the column configuration.
    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnConfig>) -> Self {
        self.columns = columns.into_iter().collect();
        self
    }

    /// Add a column.
    pub fn column(mut self, column: ColumnConfig) -> Self {
        self.columns.push(column);
        self
    }

    /// Register a plugin.
    pub fn plugin(mut self, plugin: impl Into<PluginConfig>) -> Self {
        self.plugins.push(plugin.into());
        self
    }

    /// Register several plugins at once.
    pub fn plugins(mut self, plugins: impl IntoIterator<Item = PluginConfig>) -> Self {
        self.plugins.extend(plugins);
        self
    }
}

/// Check that every key is unique and every minimum width is usable.
pub(crate) fn validate_columns(columns: &[ColumnConfig]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(columns.len());

    for column in columns {
        if !seen.insert(column.key.as_str()) {
            return Err(ConfigError::DuplicateColumnKey {
                key: column.key.clone(),
                all_keys: columns.iter().map(|c| c.key.clone()).collect(),
            });
        }

        if !column.min_width.is_finite() || column.min_width < 0.0 {
            return Err(ConfigError::InvalidMinWidth {
                key: column.key.clone(),
                min_width: column.min_width,
            });
        }
    }

    Ok(())
}

/// Check that no plugin is registered twice.
pub(crate) fn validate_plugins(plugins: &[PluginConfig]) -> Result<(), ConfigError> {
    let mut seen: HashSet<PluginId> = HashSet::with_capacity(plugins.len());

    for plugin in plugins {
        if !seen.insert(plugin.id()) {
            return Err(ConfigError::DuplicatePlugin(plugin.id()));
        }
    }

    Ok(())
}
