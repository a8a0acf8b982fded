//! Headless table core: entities, a plugin metadata registry and the
//! column width resolution engine.
//!
//! Nothing in this crate renders or measures. A host supplies the column
//! configuration, the container width and input deltas; plugins keep their
//! per-table, per-column and per-row state in the table's registry.
//!
//! # Example
//!
//! ```
//! use headless_table::prelude::*;
//! use headless_table::plugins::resizing;
//!
//! let mut table = Table::new(
//!     TableConfig::new()
//!         .columns(["A", "B", "C", "D"].map(ColumnConfig::new))
//!         .plugin(ColumnResizing::plugin()),
//! )
//! .unwrap();
//!
//! table.set_container_width(1000.0).unwrap();
//!
//! let b = table.column_by_key("B").unwrap().clone();
//! resizing::resize(&table, &b, 50.0);
//!
//! let a = table.column_by_key("A").unwrap();
//! assert_eq!(resizing::width(&table, a), Some(300.0));
//! ```

pub mod config;
pub mod error;
pub mod id;
pub mod meta;
pub mod options;
pub mod plugin;
pub mod plugins;
pub mod table;

pub use config::{ColumnConfig, TableConfig, DEFAULT_MIN_WIDTH};
pub use error::{ConfigError, TableError};
pub use id::{ColumnId, RowId, TableId};
pub use meta::Meta;
pub use plugin::{ColumnPluginOptions, NoMeta, Plugin, PluginConfig, PluginId};
pub use table::{Column, MetadataCounts, Row, Table, TableRow};

pub mod prelude {
    pub use crate::config::{ColumnConfig, TableConfig};
    pub use crate::error::{ConfigError, TableError};
    pub use crate::id::{ColumnId, RowId, TableId};
    pub use crate::meta::Meta;
    pub use crate::plugin::{Plugin, PluginConfig, PluginId};
    pub use crate::plugins::{
        ColumnReordering, ColumnResizing, ColumnVisibility, RowSelection, Sorting, StickyColumns,
    };
    pub use crate::table::{Column, Row, Table, TableRow};
}
