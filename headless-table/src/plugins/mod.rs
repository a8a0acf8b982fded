//! Built-in plugins.
//!
//! Each module holds the plugin type, its metadata and options types and
//! the helper functions hosts call.

pub mod reordering;
pub mod resizing;
pub mod selection;
pub mod sorting;
pub mod sticky;
pub mod visibility;

pub use reordering::ColumnReordering;
pub use resizing::ColumnResizing;
pub use selection::RowSelection;
pub use sorting::Sorting;
pub use sticky::StickyColumns;
pub use visibility::ColumnVisibility;
