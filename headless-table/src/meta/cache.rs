//! Scoped metadata caches owned by a table.

use std::any::Any;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock};

use log::{trace, warn};

use super::Meta;
use crate::id::{ColumnId, RowId, TableId};
use crate::plugin::PluginId;

type Slot = Box<dyn Any + Send + Sync>;

/// Lazily populated map from `(entity, plugin)` to a metadata handle.
pub(crate) struct ScopedCache<K> {
    entries: RwLock<HashMap<(K, PluginId), Slot>>,
}

impl<K: Copy + Eq + Hash + Debug> ScopedCache<K> {
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached handle, constructing it with `init` on first access.
    ///
    /// `init` runs without any lock held so constructors may look up other
    /// metadata. A `None` from `init` is not cached.
    pub(crate) fn get_or_init<T: Send + Sync + 'static>(
        &self,
        key: K,
        plugin: PluginId,
        init: impl FnOnce() -> Option<T>,
    ) -> Option<Meta<T>> {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = entries.get(&(key, plugin)) {
                return Self::downcast(slot, key, plugin);
            }
        }

        let value = init()?;

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let slot = entries.entry((key, plugin)).or_insert_with(|| {
            trace!("constructed {} metadata for {:?}", plugin, key);
            Box::new(Meta::new(value))
        });
        Self::downcast(slot, key, plugin)
    }

    fn downcast<T: Send + Sync + 'static>(slot: &Slot, key: K, plugin: PluginId) -> Option<Meta<T>> {
        match slot.downcast_ref::<Meta<T>>() {
            Some(meta) => Some(meta.clone()),
            None => {
                warn!(
                    "{} metadata for {:?} has a different type than requested",
                    plugin, key
                );
                None
            }
        }
    }

    /// Drop every entry. Returns how many were removed.
    pub(crate) fn clear(&self) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let removed = entries.len();
        entries.clear();
        removed
    }

    pub(crate) fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<K> Debug for ScopedCache<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self
            .entries
            .read()
            .map(|entries| entries.len())
            .unwrap_or_default();
        f.debug_struct("ScopedCache").field("entries", &len).finish()
    }
}

/// The three metadata scopes of one table.
#[derive(Debug)]
pub(crate) struct MetaRegistry {
    pub(crate) table: ScopedCache<TableId>,
    pub(crate) columns: ScopedCache<ColumnId>,
    pub(crate) rows: ScopedCache<RowId>,
}

impl MetaRegistry {
    pub(crate) fn new() -> Self {
        Self {
            table: ScopedCache::new(),
            columns: ScopedCache::new(),
            rows: ScopedCache::new(),
        }
    }
}
