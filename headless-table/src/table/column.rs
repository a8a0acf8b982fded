use crate::config::ColumnConfig;
use crate::id::ColumnId;

/// A column of a table.
///
/// Columns are rebuilt every time the table's column configuration is
/// replaced, and their metadata with them.
#[derive(Debug, Clone)]
pub struct Column {
    id: ColumnId,
    config: ColumnConfig,
}

impl Column {
    pub(crate) fn new(id: ColumnId, config: ColumnConfig) -> Self {
        Self { id, config }
    }

    pub fn id(&self) -> ColumnId {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.config.key
    }

    /// Display name, falling back to the key.
    pub fn name(&self) -> &str {
        self.config.name.as_deref().unwrap_or(&self.config.key)
    }

    pub fn config(&self) -> &ColumnConfig {
        &self.config
    }
}
