//! Column resizing.
//!
//! The plugin keeps a [`ResizeEngine`] as its table metadata. The engine is
//! synced with the table's visible columns and container width whenever
//! either changes, so widths always describe what the host presents.
//!
//! ```
//! use headless_table::prelude::*;
//! use headless_table::plugins::resizing::{self, HandlePosition, ResizingOptions};
//!
//! let mut table = Table::new(
//!     TableConfig::new()
//!         .columns(["A", "B", "C", "D"].map(|key| ColumnConfig::new(key).min_width(128.0)))
//!         .plugin(ColumnResizing::with(ResizingOptions {
//!             handle_position: HandlePosition::Right,
//!             ..Default::default()
//!         })),
//! )
//! .unwrap();
//! table.set_container_width(1000.0).unwrap();
//!
//! let a = table.columns()[0].clone();
//! resizing::resize(&table, &a, 50.0);
//! assert_eq!(resizing::width(&table, &a), Some(300.0));
//! assert_eq!(resizing::width(&table, &table.columns()[1]), Some(200.0));
//! ```

mod engine;
mod pending;
mod snapshot;

pub use engine::{ColumnSpec, ColumnWidthState, ResizeEngine};
pub use pending::PendingResize;
pub use snapshot::WidthSnapshot;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::meta::{self, Meta};
use crate::options;
use crate::plugin::{NoMeta, Plugin, PluginId};
use crate::table::{Column, Table};

/// Which edge of a column its resize handle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandlePosition {
    /// Dragging moves the boundary with the previous column.
    #[default]
    Left,
    /// Dragging moves the boundary with the next column.
    Right,
}

/// How widths follow a container resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerFit {
    /// Every column keeps its share of the total.
    #[default]
    Proportional,
    /// Every column grows or shrinks by the same amount.
    Equal,
}

#[derive(Debug, Clone, Default)]
pub struct ResizingOptions {
    pub handle_position: HandlePosition,
    pub fit: ContainerFit,
    /// Options for columns that don't set their own.
    pub columns: ResizingColumnOptions,
}

#[derive(Debug, Clone, Default)]
pub struct ResizingColumnOptions {
    /// Overrides the column's configured minimum width.
    pub min_width: Option<f64>,
    /// Defaults to `true`.
    pub is_resizable: Option<bool>,
}

/// Per-column resize state.
#[derive(Debug, Clone)]
pub struct ResizingColumnMeta {
    pub key: String,
    /// Whether the user is currently dragging this column's handle.
    pub is_resizing: bool,
    engine: Meta<ResizeEngine>,
}

impl ResizingColumnMeta {
    /// Width the engine last resolved for this column.
    ///
    /// The engine is brought up to date whenever the visible columns or the
    /// container width change. Absent while the column is hidden.
    pub fn current_width(&self) -> Option<f64> {
        self.engine.read(|engine| engine.width(&self.key))
    }
}

/// The column resizing plugin.
#[derive(Debug, Clone, Copy)]
pub struct ColumnResizing;

impl Plugin for ColumnResizing {
    const ID: PluginId = PluginId::ColumnResizing;

    type TableMeta = ResizeEngine;
    type ColumnMeta = ResizingColumnMeta;
    type RowMeta = NoMeta;
    type Options = ResizingOptions;
    type ColumnOptions = ResizingColumnOptions;

    fn table_meta(table: &Table) -> Option<ResizeEngine> {
        let options = options::for_table::<Self>(table).unwrap_or_default();
        Some(ResizeEngine::new(options.handle_position, options.fit))
    }

    fn column_defaults(options: &ResizingOptions) -> Option<ResizingColumnOptions> {
        Some(options.columns.clone())
    }

    fn column_meta(table: &Table, column: &Column) -> Option<ResizingColumnMeta> {
        with_engine(table, |_| ())?;
        Some(ResizingColumnMeta {
            key: column.key().to_string(),
            is_resizing: false,
            engine: meta::for_table::<Self>(table)?,
        })
    }

    fn columns_changed(table: &Table) {
        with_engine(table, |_| ());
    }

    fn container_resized(table: &Table) {
        with_engine(table, |_| ());
    }

    fn reset(table: &Table) {
        with_engine(table, ResizeEngine::reset);
    }
}

/// Engine input for the table's visible columns.
fn layout(table: &Table) -> Vec<ColumnSpec> {
    table
        .visible_columns()
        .into_iter()
        .map(|column| {
            let options = options::for_column::<ColumnResizing>(table, column).unwrap_or_default();
            let min_width = match options.min_width {
                Some(width) if width.is_finite() && width >= 0.0 => width,
                Some(width) => {
                    warn!(
                        "ignoring invalid min width {} for column '{}'",
                        width,
                        column.key()
                    );
                    column.config().min_width
                }
                None => column.config().min_width,
            };
            ColumnSpec::new(column.key(), min_width)
                .resizable(options.is_resizable.unwrap_or(true))
        })
        .collect()
}

/// Run `f` on the table's engine after bringing it up to date.
///
/// `None` when the plugin isn't registered.
fn with_engine<R>(table: &Table, f: impl FnOnce(&mut ResizeEngine) -> R) -> Option<R> {
    let engine = meta::for_table::<ColumnResizing>(table)?;
    // Computed before taking the engine lock: resolving visible columns
    // reads other plugins' metadata.
    let layout = layout(table);
    let container_width = table.container_width();

    Some(engine.update(|engine| {
        engine.sync(&layout);
        if let Some(width) = container_width
            && engine.container_width() != Some(width)
            && let Err(e) = engine.apply_container_width(width)
        {
            warn!("failed to apply container width: {}", e);
        }
        f(engine)
    }))
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

/// Move `column`'s resize handle by `delta` pixels.
///
/// Returns whether any width changed.
pub fn resize(table: &Table, column: &Column, delta: f64) -> bool {
    if !table.owns_column(column) {
        return false;
    }
    with_engine(table, |engine| engine.apply_delta(column.key(), delta)).unwrap_or(false)
}

/// Current width of a visible column.
pub fn width(table: &Table, column: &Column) -> Option<f64> {
    if !table.owns_column(column) {
        return None;
    }
    with_engine(table, |engine| engine.width(column.key())).flatten()
}

/// Sum of the visible columns' widths.
pub fn total_width(table: &Table) -> Option<f64> {
    with_engine(table, |engine| engine.total_width())
}

pub fn is_resizable(table: &Table, column: &Column) -> bool {
    options::for_column::<ColumnResizing>(table, column)
        .is_some_and(|options| options.is_resizable.unwrap_or(true))
}

pub fn is_resizing(table: &Table, column: &Column) -> bool {
    meta::for_column::<ColumnResizing>(table, column).is_some_and(|m| m.read(|m| m.is_resizing))
}

/// Mark the start of a drag on `column`'s handle.
pub fn begin_resize(table: &Table, column: &Column) {
    if let Some(m) = meta::for_column::<ColumnResizing>(table, column) {
        m.update(|m| m.is_resizing = true);
    }
}

pub fn end_resize(table: &Table, column: &Column) {
    if let Some(m) = meta::for_column::<ColumnResizing>(table, column) {
        m.update(|m| m.is_resizing = false);
    }
}

/// Widths of the visible columns, for persisting.
pub fn snapshot(table: &Table) -> Option<WidthSnapshot> {
    with_engine(table, |engine| engine.snapshot())
}

/// Apply widths saved with [`snapshot`].
pub fn restore(table: &Table, snapshot: &WidthSnapshot) -> Result<(), TableError> {
    meta::require_table::<ColumnResizing>(table)?;
    with_engine(table, |engine| engine.restore(snapshot))
        .unwrap_or(Err(TableError::PluginNotRegistered(PluginId::ColumnResizing)))
}
