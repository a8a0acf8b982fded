//! Replay scripts.
//!
//! A script describes a table and a list of steps:
//!
//! ```json
//! {
//!   "columns": [{ "key": "A" }, { "key": "B", "min_width": 64 }],
//!   "plugins": ["column-resizing", "column-visibility"],
//!   "handle_position": "right",
//!   "steps": [
//!     { "container": 1000 },
//!     { "resize": { "column": "A", "delta": 50 } },
//!     { "hide": "B" }
//!   ]
//! }
//! ```
//!
//! After every step one JSON line with the visible columns and their widths
//! is written to the output.

use std::io::Write;

use headless_table::plugins::resizing::{
    self, ContainerFit, HandlePosition, ResizingOptions, WidthSnapshot,
};
use headless_table::plugins::{reordering, visibility};
use headless_table::prelude::*;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

#[derive(Debug, Deserialize)]
pub struct Script {
    pub columns: Vec<ColumnConfig>,
    /// Plugin names, see [`PluginId::name`].
    #[serde(default)]
    pub plugins: Vec<String>,
    #[serde(default)]
    pub handle_position: HandlePosition,
    #[serde(default)]
    pub fit: ContainerFit,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    Container(f64),
    Resize { column: String, delta: f64 },
    Hide(String),
    Show(String),
    MoveLeft(String),
    MoveRight(String),
    Restore(WidthSnapshot),
}

/// State after one step.
#[derive(Debug, Serialize)]
struct Frame {
    step: usize,
    visible: Vec<String>,
    widths: Option<WidthSnapshot>,
}

impl Frame {
    fn capture(step: usize, table: &Table) -> Self {
        Self {
            step,
            visible: table
                .visible_columns()
                .iter()
                .map(|c| c.key().to_string())
                .collect(),
            widths: resizing::snapshot(table),
        }
    }
}

impl Script {
    /// Build the table the script describes.
    pub fn table(&self) -> Result<Table, CliError> {
        let mut config = TableConfig::new().columns(self.columns.iter().cloned());

        for name in &self.plugins {
            config = config.plugin(match name.parse::<PluginId>()? {
                PluginId::ColumnResizing => ColumnResizing::with(ResizingOptions {
                    handle_position: self.handle_position,
                    fit: self.fit,
                    ..Default::default()
                }),
                id => PluginConfig::new(id),
            });
        }

        Ok(Table::new(config)?)
    }

    /// Replay every step, writing one frame per step to `out`.
    pub fn run(&self, out: &mut impl Write) -> Result<(), CliError> {
        let mut table = self.table()?;

        for (index, step) in self.steps.iter().enumerate() {
            let step_number = index + 1;
            debug!("step {}: {:?}", step_number, step);
            apply(&mut table, step_number, step)?;

            serde_json::to_writer(&mut *out, &Frame::capture(step_number, &table))?;
            writeln!(out)?;
        }

        Ok(())
    }
}

fn column(table: &Table, step: usize, key: &str) -> Result<Column, CliError> {
    table
        .column_by_key(key)
        .cloned()
        .ok_or_else(|| CliError::UnknownColumn {
            step,
            key: key.to_string(),
        })
}

fn apply(table: &mut Table, step_number: usize, step: &Step) -> Result<(), CliError> {
    match step {
        Step::Container(width) => table.set_container_width(*width)?,
        Step::Resize { column: key, delta } => {
            let column = column(table, step_number, key)?;
            resizing::resize(table, &column, *delta);
        }
        Step::Hide(key) => visibility::hide(table, &column(table, step_number, key)?),
        Step::Show(key) => visibility::show(table, &column(table, step_number, key)?),
        Step::MoveLeft(key) => {
            reordering::move_left(table, &column(table, step_number, key)?);
        }
        Step::MoveRight(key) => {
            reordering::move_right(table, &column(table, step_number, key)?);
        }
        Step::Restore(snapshot) => resizing::restore(table, snapshot)?,
    }
    Ok(())
}
