use crate::id::RowId;

/// Trait for data items that back table rows.
///
/// The table never holds the data itself, only the key each item reports.
/// Keys should be stable across data reloads; plugins that keep state beyond
/// a row set (such as selection) key it by this value.
///
/// ```
/// use headless_table::TableRow;
///
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl TableRow for User {
///     fn id(&self) -> String {
///         self.id.to_string()
///     }
/// }
/// ```
pub trait TableRow {
    fn id(&self) -> String;
}

impl TableRow for String {
    fn id(&self) -> String {
        self.clone()
    }
}

impl TableRow for &str {
    fn id(&self) -> String {
        (*self).to_string()
    }
}

/// A row of a table.
#[derive(Debug, Clone)]
pub struct Row {
    id: RowId,
    key: String,
}

impl Row {
    pub(crate) fn new(id: RowId, key: String) -> Self {
        Self { id, key }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    /// The key reported by the backing item.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Position of the row in the current data set.
    pub fn index(&self) -> usize {
        self.id.index()
    }
}
