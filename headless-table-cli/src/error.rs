//! Error types

use headless_table::plugin::UnknownPlugin;
use headless_table::{ConfigError, TableError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("usage: headless-table-cli <script.json>")]
    Usage,

    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownPlugin(#[from] UnknownPlugin),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("step {step}: no column with key '{key}'")]
    UnknownColumn { step: usize, key: String },
}
