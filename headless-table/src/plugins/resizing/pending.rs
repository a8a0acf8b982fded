use log::trace;

use crate::table::{Column, Table};

/// Accumulates resize deltas between frames.
///
/// Pointer and keyboard input can produce many small deltas per frame.
/// Pushing them here and flushing once per frame applies one summed delta
/// per column, in the order the columns were first touched.
#[derive(Debug, Clone, Default)]
pub struct PendingResize {
    deltas: Vec<(Column, f64)>,
}

impl PendingResize {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: &Column, delta: f64) {
        if !delta.is_finite() {
            return;
        }

        match self.deltas.iter_mut().find(|(c, _)| c.id() == column.id()) {
            Some((_, total)) => *total += delta,
            None => self.deltas.push((column.clone(), delta)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Apply and clear the accumulated deltas.
    ///
    /// Returns how many columns actually changed width.
    pub fn flush(&mut self, table: &Table) -> usize {
        let mut applied = 0;

        for (column, delta) in self.deltas.drain(..) {
            if delta == 0.0 {
                continue;
            }
            if super::resize(table, &column, delta) {
                applied += 1;
            }
        }

        trace!("flushed pending resize: {} applied", applied);
        applied
    }
}
