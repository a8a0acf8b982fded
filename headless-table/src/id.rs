//! Entity identities.
//!
//! Ids are opaque values rather than addresses, so they stay valid across
//! any wrapper a host puts around the table. Column and row ids carry the
//! generation of the set they were built in; replacing the set bumps the
//! generation and every older id stops resolving.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Unique identifier for a table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Identity of one column within one generation of a table's column set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnId {
    table: TableId,
    generation: u64,
    index: usize,
}

impl ColumnId {
    pub(crate) fn new(table: TableId, generation: u64, index: usize) -> Self {
        Self {
            table,
            generation,
            index,
        }
    }

    /// The table this column belongs to.
    pub fn table(&self) -> TableId {
        self.table
    }

    /// The column-set generation this id was issued in.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Position of the column in its configuration.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:col:{}.{}", self.table, self.generation, self.index)
    }
}

/// Identity of one row within one generation of a table's row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId {
    table: TableId,
    generation: u64,
    index: usize,
}

impl RowId {
    pub(crate) fn new(table: TableId, generation: u64, index: usize) -> Self {
        Self {
            table,
            generation,
            index,
        }
    }

    pub fn table(&self) -> TableId {
        self.table
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:row:{}.{}", self.table, self.generation, self.index)
    }
}
