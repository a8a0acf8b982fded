//! Sticky columns.
//!
//! Stickiness is pure configuration. Offsets are derived from the widths the
//! resizing plugin resolved; without it there is nothing to measure.

use crate::options;
use crate::plugin::{NoMeta, Plugin, PluginId};
use crate::plugins::resizing;
use crate::table::{Column, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sticky {
    #[default]
    None,
    Left,
    Right,
}

#[derive(Debug, Clone, Default)]
pub struct StickyColumnOptions {
    pub sticky: Sticky,
}

#[derive(Debug, Clone, Copy)]
pub struct StickyColumns;

impl Plugin for StickyColumns {
    const ID: PluginId = PluginId::StickyColumns;

    type TableMeta = NoMeta;
    type ColumnMeta = NoMeta;
    type RowMeta = NoMeta;
    type Options = ();
    type ColumnOptions = StickyColumnOptions;
}

pub fn sticky(table: &Table, column: &Column) -> Sticky {
    options::for_column::<StickyColumns>(table, column)
        .map(|options| options.sticky)
        .unwrap_or_default()
}

pub fn is_sticky(table: &Table, column: &Column) -> bool {
    sticky(table, column) != Sticky::None
}

/// Pixel offset of a sticky column from the edge it sticks to.
///
/// Left-sticky columns are offset by the widths of the visible columns
/// before them, right-sticky ones by the widths of those after them.
/// Absent for non-sticky or hidden columns, or when column widths aren't
/// resolved.
pub fn sticky_offset(table: &Table, column: &Column) -> Option<f64> {
    let side = sticky(table, column);
    if side == Sticky::None {
        return None;
    }
    let widths = resizing::snapshot(table)?;

    let visible = table.visible_columns();
    let index = visible.iter().position(|c| c.id() == column.id())?;
    let neighbours = match side {
        Sticky::Left => &visible[..index],
        Sticky::Right => &visible[index + 1..],
        Sticky::None => return None,
    };

    neighbours
        .iter()
        .map(|c| widths.get(c.key()))
        .sum::<Option<f64>>()
}
