//! Normalized plugin registration and per-column plugin options.

use std::any::Any;
use std::sync::Arc;

use super::PluginId;

type AnyOptions = Arc<dyn Any + Send + Sync>;

/// A plugin registered on a table, with its table-level options if any.
///
/// Whether a plugin was given as a bare identity or with options, it is
/// normalized into this one shape before the table sees it.
#[derive(Clone)]
pub struct PluginConfig {
    id: PluginId,
    options: Option<AnyOptions>,
}

impl PluginConfig {
    /// Register a plugin with default options.
    pub fn new(id: PluginId) -> Self {
        Self { id, options: None }
    }

    pub(crate) fn with_options<O: Send + Sync + 'static>(id: PluginId, options: O) -> Self {
        Self {
            id,
            options: Some(Arc::new(options)),
        }
    }

    pub fn id(&self) -> PluginId {
        self.id
    }

    /// The table-level options, if given and of type `O`.
    pub(crate) fn options<O: 'static>(&self) -> Option<&O> {
        self.options.as_ref()?.downcast_ref::<O>()
    }
}

impl From<PluginId> for PluginConfig {
    fn from(id: PluginId) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Debug for PluginConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginConfig")
            .field("id", &self.id)
            .field("has_options", &self.options.is_some())
            .finish()
    }
}

/// Options for one plugin, attached to one column's configuration.
#[derive(Clone)]
pub struct ColumnPluginOptions {
    plugin: PluginId,
    options: AnyOptions,
}

impl ColumnPluginOptions {
    pub(crate) fn new<O: Send + Sync + 'static>(plugin: PluginId, options: O) -> Self {
        Self {
            plugin,
            options: Arc::new(options),
        }
    }

    pub fn plugin(&self) -> PluginId {
        self.plugin
    }

    pub(crate) fn options<O: 'static>(&self) -> Option<&O> {
        self.options.downcast_ref::<O>()
    }
}

impl std::fmt::Debug for ColumnPluginOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnPluginOptions")
            .field("plugin", &self.plugin)
            .finish_non_exhaustive()
    }
}
