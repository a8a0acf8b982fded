mod error;
mod script;

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use crate::error::CliError;
use crate::script::Script;

/// Environment variable holding the log level.
const LOG_ENV: &str = "HEADLESS_TABLE_LOG";

fn init_logging() {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn run() -> Result<(), CliError> {
    let path = std::env::args().nth(1).ok_or(CliError::Usage)?;
    let script: Script = serde_json::from_reader(BufReader::new(File::open(&path)?))?;
    info!("running {} steps from {}", script.steps.len(), path);

    script.run(&mut io::stdout().lock())
}

fn main() -> ExitCode {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
