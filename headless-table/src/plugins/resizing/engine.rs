//! Column width resolution.
//!
//! The engine keeps one [`ColumnWidthState`] per visible column, in display
//! order, and maintains two invariants after every operation:
//!
//! - no column is narrower than its minimum width;
//! - the widths add up to the container width, whenever the container width
//!   is known and the minimum widths fit inside it. When they don't, every
//!   column sits at its minimum and the total overflows the container.

use std::collections::HashMap;

use log::{debug, trace};

use super::snapshot::WidthSnapshot;
use super::{ContainerFit, HandlePosition};
use crate::error::TableError;

const EPSILON: f64 = 1e-6;

/// Input for one column: its key and constraints, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub key: String,
    pub min_width: f64,
    pub resizable: bool,
}

impl ColumnSpec {
    pub fn new(key: impl Into<String>, min_width: f64) -> Self {
        Self {
            key: key.into(),
            min_width,
            resizable: true,
        }
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }
}

/// Width state of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnWidthState {
    pub key: String,
    pub current_width: f64,
    pub min_width: f64,
    /// Position among the visible columns.
    pub order: usize,
    pub resizable: bool,
}

impl ColumnWidthState {
    fn room_to_shrink(&self) -> f64 {
        (self.current_width - self.min_width).max(0.0)
    }
}

/// Owns the widths of one table's columns.
#[derive(Debug, Clone)]
pub struct ResizeEngine {
    columns: Vec<ColumnWidthState>,
    container_width: Option<f64>,
    /// Widths are placeholders until the first container width arrives or a
    /// snapshot is restored.
    provisional: bool,
    handle_position: HandlePosition,
    fit: ContainerFit,
}

impl Default for ResizeEngine {
    fn default() -> Self {
        Self::new(HandlePosition::default(), ContainerFit::default())
    }
}

impl ResizeEngine {
    pub fn new(handle_position: HandlePosition, fit: ContainerFit) -> Self {
        Self {
            columns: Vec::new(),
            container_width: None,
            provisional: true,
            handle_position,
            fit,
        }
    }

    pub fn handle_position(&self) -> HandlePosition {
        self.handle_position
    }

    pub fn fit(&self) -> ContainerFit {
        self.fit
    }

    pub fn container_width(&self) -> Option<f64> {
        self.container_width
    }

    /// Column states in display order.
    pub fn columns(&self) -> &[ColumnWidthState] {
        &self.columns
    }

    pub fn width(&self, key: &str) -> Option<f64> {
        self.columns
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.current_width)
    }

    pub fn total_width(&self) -> f64 {
        self.columns.iter().map(|c| c.current_width).sum()
    }

    fn min_total(&self) -> f64 {
        self.columns.iter().map(|c| c.min_width).sum()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    /// Reconcile the engine with the current visible columns.
    ///
    /// Known columns keep their width, new columns start at an equal share
    /// of the container, and the result is fitted back into the container.
    /// Returns whether anything changed.
    pub fn sync(&mut self, layout: &[ColumnSpec]) -> bool {
        let unchanged = self.columns.len() == layout.len()
            && self.columns.iter().zip(layout).all(|(state, spec)| {
                state.key == spec.key
                    && state.min_width == spec.min_width
                    && state.resizable == spec.resizable
            });
        if unchanged {
            return false;
        }

        let share = self
            .container_width
            .map(|width| width / layout.len().max(1) as f64);
        let mut previous: HashMap<String, f64> = self
            .columns
            .drain(..)
            .map(|c| (c.key, c.current_width))
            .collect();

        self.columns = layout
            .iter()
            .enumerate()
            .map(|(order, spec)| {
                let width = previous
                    .remove(&spec.key)
                    .or(share)
                    .unwrap_or(spec.min_width);
                ColumnWidthState {
                    key: spec.key.clone(),
                    current_width: width.max(spec.min_width),
                    min_width: spec.min_width,
                    order,
                    resizable: spec.resizable,
                }
            })
            .collect();

        if let Some(target) = self.container_width {
            self.fit_to(target);
        }

        debug!(
            "synced {} columns ({} dropped)",
            self.columns.len(),
            previous.len()
        );
        true
    }

    /// Move the handle of column `key` by `delta` pixels.
    ///
    /// With the handle on the left edge the boundary between the previous
    /// column and `key` moves; with the handle on the right edge, the
    /// boundary between `key` and the next column. The column on the side
    /// the handle moves away from grows; the other side shrinks, one column
    /// at a time moving outward from the handle, never below its minimum.
    /// Whatever can't be absorbed is dropped, so the total never changes.
    /// Columns that aren't resizable keep their width: they are skipped
    /// while shrinking and never grow.
    ///
    /// Returns `false` without changing anything when there is no column on
    /// the far side of the handle, the key is unknown, the column isn't
    /// resizable or the delta is zero or not finite.
    pub fn apply_delta(&mut self, key: &str, delta: f64) -> bool {
        if !delta.is_finite() || delta == 0.0 {
            return false;
        }

        let Some(index) = self.position(key) else {
            debug!("resize of unknown column '{}' ignored", key);
            return false;
        };

        if !self.columns[index].resizable {
            return false;
        }

        let boundary = match self.handle_position {
            HandlePosition::Left => match index.checked_sub(1) {
                Some(previous) => previous,
                None => return false,
            },
            HandlePosition::Right => index,
        };
        if boundary + 1 >= self.columns.len() {
            return false;
        }

        let (before, after) = self.columns.split_at_mut(boundary + 1);
        let absorbed = if delta > 0.0 {
            let grown = &mut before[boundary];
            if !grown.resizable {
                return false;
            }
            let absorbed = shrink(after.iter_mut(), delta);
            grown.current_width += absorbed;
            absorbed
        } else {
            let grown = &mut after[0];
            if !grown.resizable {
                return false;
            }
            let absorbed = shrink(before.iter_mut().rev(), -delta);
            grown.current_width += absorbed;
            absorbed
        };

        trace!(
            "resize '{}' by {}: absorbed {}, widths {:?}",
            key,
            delta,
            absorbed,
            self.columns
                .iter()
                .map(|c| c.current_width)
                .collect::<Vec<_>>()
        );
        self.check_invariants();

        absorbed > 0.0
    }

    /// Fit the columns to a new container width.
    ///
    /// The first width distributes equal shares. Later widths scale columns
    /// according to the configured [`ContainerFit`], then clamp to minimums.
    pub fn apply_container_width(&mut self, width: f64) -> Result<(), TableError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(TableError::InvalidContainerWidth(width));
        }

        if self.provisional {
            self.distribute_equally(width);
            self.provisional = false;
        } else {
            self.fit_to(width);
        }
        self.container_width = Some(width);

        trace!("container width {}: total {}", width, self.total_width());
        self.check_invariants();
        Ok(())
    }

    /// Forget every width.
    ///
    /// The next [`sync`](Self::sync) starts the columns over from equal
    /// shares of the container, or from their minimums while the container
    /// width is unknown.
    pub fn reset(&mut self) {
        self.columns.clear();
        self.provisional = self.container_width.is_none();
    }

    /// Current widths by column key.
    pub fn snapshot(&self) -> WidthSnapshot {
        self.columns
            .iter()
            .map(|c| (c.key.clone(), c.current_width))
            .collect()
    }

    /// Apply previously saved widths.
    ///
    /// Keys that aren't visible are ignored. Widths are raised to the
    /// column minimum and then fitted into the container, so relative
    /// proportions are what survives. Nothing changes if any width is not
    /// a finite, non-negative number.
    pub fn restore(&mut self, snapshot: &WidthSnapshot) -> Result<(), TableError> {
        if let Some((key, width)) = snapshot
            .iter()
            .find(|(_, width)| !width.is_finite() || *width < 0.0)
        {
            return Err(TableError::InvalidSnapshotWidth {
                key: key.to_string(),
                width,
            });
        }

        for column in &mut self.columns {
            if let Some(width) = snapshot.get(&column.key) {
                column.current_width = width.max(column.min_width);
            }
        }
        self.provisional = false;

        if let Some(target) = self.container_width {
            self.fit_to(target);
        }
        self.check_invariants();
        Ok(())
    }

    fn distribute_equally(&mut self, target: f64) {
        if self.columns.is_empty() {
            return;
        }

        let share = target / self.columns.len() as f64;
        for column in &mut self.columns {
            column.current_width = share;
        }
        self.clamp_to_minimums(target);
    }

    fn fit_to(&mut self, target: f64) {
        if self.columns.is_empty() {
            return;
        }

        let total = self.total_width();
        if total <= EPSILON {
            self.distribute_equally(target);
            return;
        }

        match self.fit {
            ContainerFit::Proportional => {
                for column in &mut self.columns {
                    column.current_width = column.current_width * target / total;
                }
            }
            ContainerFit::Equal => {
                let per_column = (target - total) / self.columns.len() as f64;
                for column in &mut self.columns {
                    column.current_width += per_column;
                }
            }
        }
        self.clamp_to_minimums(target);
    }

    /// Raise columns to their minimum and take the excess from the columns
    /// that have room, in proportion to that room.
    fn clamp_to_minimums(&mut self, target: f64) {
        if self.min_total() >= target {
            for column in &mut self.columns {
                column.current_width = column.min_width;
            }
            return;
        }

        for column in &mut self.columns {
            column.current_width = column.current_width.max(column.min_width);
        }

        let excess = self.total_width() - target;
        let slack: f64 = self.columns.iter().map(ColumnWidthState::room_to_shrink).sum();
        if excess <= EPSILON || slack <= EPSILON {
            return;
        }

        for column in &mut self.columns {
            let taken = excess * column.room_to_shrink() / slack;
            column.current_width = (column.current_width - taken).max(column.min_width);
        }
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.columns
                .iter()
                .all(|c| c.current_width >= c.min_width - EPSILON),
            "column below its minimum width: {:?}",
            self.columns
        );
        if let Some(target) = self.container_width
            && !self.columns.is_empty()
            && self.min_total() <= target
        {
            debug_assert!(
                (self.total_width() - target).abs() <= EPSILON * target.max(1.0),
                "total width {} drifted from container width {}",
                self.total_width(),
                target
            );
        }
    }
}

/// Take up to `amount` from `columns` in order, never below a minimum.
/// Returns how much was taken.
fn shrink<'a>(columns: impl Iterator<Item = &'a mut ColumnWidthState>, amount: f64) -> f64 {
    let mut remaining = amount;

    for column in columns.filter(|c| c.resizable) {
        if remaining <= 0.0 {
            break;
        }
        let taken = column.room_to_shrink().min(remaining);
        column.current_width -= taken;
        remaining -= taken;
    }

    amount - remaining
}
