//! Error types

use thiserror::Error;

use crate::plugin::PluginId;

/// A table or column configuration that cannot be accepted.
///
/// These are raised before any entity is constructed, since every
/// identity-keyed cache downstream depends on the configuration being sound.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(
        "every column key in the table's column config must be unique, \
         found duplicate entry: {key} (all keys used: {all_keys:?})"
    )]
    DuplicateColumnKey { key: String, all_keys: Vec<String> },

    #[error("plugin '{0}' is registered more than once")]
    DuplicatePlugin(PluginId),

    #[error("column '{key}' has an invalid minimum width: {min_width}")]
    InvalidMinWidth { key: String, min_width: f64 },
}

/// Errors raised by table operations.
///
/// Soft conditions (resizing past the last column, looking up an inactive
/// plugin) are not errors; they surface as `false` or `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("container width must be a positive measurement, got {0}")]
    InvalidContainerWidth(f64),

    #[error("plugin '{0}' is not registered on this table")]
    PluginNotRegistered(PluginId),

    #[error("width for column '{key}' is not a valid measurement: {width}")]
    InvalidSnapshotWidth { key: String, width: f64 },
}
