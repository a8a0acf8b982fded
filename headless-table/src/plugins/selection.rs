//! Row selection.
//!
//! The selection is table metadata keyed by [`Row::key`], so it survives a
//! data reload even though rows and their metadata don't.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use log::debug;

use crate::meta::{self, Meta};
use crate::options;
use crate::plugin::{NoMeta, Plugin, PluginId};
use crate::table::{Row, Table};

/// Selection mode for rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No selection allowed.
    None,
    /// Single item selection (radio-button style).
    Single,
    /// Multiple items can be selected (checkbox style).
    #[default]
    Multi,
}

/// Tracks selected items by their keys.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    pub mode: SelectionMode,
    pub selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::new(SelectionMode::default())
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: HashSet::new(),
        }
    }

    /// Select a key. Returns true if selection changed.
    pub fn select(&mut self, key: K) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                if self.selected.contains(&key) {
                    return false;
                }
                self.selected.clear();
                self.selected.insert(key)
            }
            SelectionMode::Multi => self.selected.insert(key),
        }
    }

    /// Deselect a key. Returns true if selection changed.
    pub fn deselect(&mut self, key: &K) -> bool {
        self.selected.remove(key)
    }

    /// Toggle selection for a key. Returns true if selection changed.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.selected.contains(&key) {
            self.deselect(&key)
        } else {
            self.select(key)
        }
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

/// Callback receiving a row key.
pub type RowCallback = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Clone, Default)]
pub struct SelectionOptions {
    pub mode: SelectionMode,
    /// Called for every key that becomes selected.
    pub on_select: Option<RowCallback>,
    /// Called for every key that stops being selected.
    pub on_deselect: Option<RowCallback>,
}

impl std::fmt::Debug for SelectionOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionOptions")
            .field("mode", &self.mode)
            .field("on_select", &self.on_select.is_some())
            .field("on_deselect", &self.on_deselect.is_some())
            .finish()
    }
}

/// Per-row view of the table's selection.
#[derive(Debug, Clone)]
pub struct RowSelectionMeta {
    key: String,
    selection: Meta<Selection<String>>,
}

impl RowSelectionMeta {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_selected(&self) -> bool {
        self.selection.read(|s| s.is_selected(&self.key))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RowSelection;

impl Plugin for RowSelection {
    const ID: PluginId = PluginId::RowSelection;

    type TableMeta = Selection<String>;
    type ColumnMeta = NoMeta;
    type RowMeta = RowSelectionMeta;
    type Options = SelectionOptions;
    type ColumnOptions = ();

    fn table_meta(table: &Table) -> Option<Selection<String>> {
        let options = options::for_table::<Self>(table).unwrap_or_default();
        Some(Selection::new(options.mode))
    }

    fn row_meta(table: &Table, row: &Row) -> Option<RowSelectionMeta> {
        Some(RowSelectionMeta {
            key: row.key().to_string(),
            selection: meta::for_table::<Self>(table)?,
        })
    }

    fn reset(table: &Table) {
        clear_selection(table);
    }
}

/// Apply `f` to the selection and report keys that changed state.
fn change(table: &Table, f: impl FnOnce(&mut Selection<String>) -> bool) -> bool {
    let Some(selection) = meta::for_table::<RowSelection>(table) else {
        return false;
    };

    let (changed, before, after) = selection.update(|s| {
        let before = s.selected.clone();
        let changed = f(s);
        (changed, before, s.selected.clone())
    });
    if !changed {
        return false;
    }

    // Callbacks run with no lock held; they may read the selection.
    let options = options::for_table::<RowSelection>(table).unwrap_or_default();
    if let Some(on_deselect) = &options.on_deselect {
        for key in before.difference(&after) {
            on_deselect(key.as_str());
        }
    }
    if let Some(on_select) = &options.on_select {
        for key in after.difference(&before) {
            on_select(key.as_str());
        }
    }

    debug!("selection changed: {} selected", after.len());
    true
}

pub fn is_selected(table: &Table, row: &Row) -> bool {
    meta::for_row::<RowSelection>(table, row).is_some_and(|m| m.read(|m| m.is_selected()))
}

pub fn select(table: &Table, row: &Row) -> bool {
    table.owns_row(row) && change(table, |s| s.select(row.key().to_string()))
}

pub fn deselect(table: &Table, row: &Row) -> bool {
    table.owns_row(row) && change(table, |s| s.deselect(&row.key().to_string()))
}

pub fn toggle(table: &Table, row: &Row) -> bool {
    table.owns_row(row) && change(table, |s| s.toggle(row.key().to_string()))
}

/// Selected keys, sorted.
pub fn selected_keys(table: &Table) -> Vec<String> {
    let mut keys: Vec<String> = meta::for_table::<RowSelection>(table)
        .map(|s| s.read(|s| s.selected.iter().cloned().collect()))
        .unwrap_or_default();
    keys.sort();
    keys
}

pub fn clear_selection(table: &Table) {
    change(table, |s| {
        let changed = !s.selected.is_empty();
        s.clear();
        changed
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mode_replaces_selection() {
        let mut selection = Selection::new(SelectionMode::Single);
        assert!(selection.select("a"));
        assert!(selection.select("b"));
        assert!(!selection.is_selected(&"a"));
        assert!(selection.is_selected(&"b"));
        assert!(!selection.select("b"));
    }

    #[test]
    fn test_multi_mode_toggles() {
        let mut selection = Selection::new(SelectionMode::Multi);
        assert!(selection.toggle("a"));
        assert!(selection.toggle("b"));
        assert!(selection.toggle("a"));
        assert!(!selection.is_selected(&"a"));
        assert!(selection.is_selected(&"b"));
    }

    #[test]
    fn test_none_mode_never_selects() {
        let mut selection = Selection::new(SelectionMode::None);
        assert!(!selection.select("a"));
        assert!(!selection.toggle("a"));
        assert!(selection.selected.is_empty());
    }
}
