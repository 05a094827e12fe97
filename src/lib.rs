//! timeclock library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! store / state machine / aggregator modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use chrono::{DateTime, Local};
use clap::Parser;
use cli::parser::{Action, Cli};
use config::Config;
use errors::AppResult;

/// Central action dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, now: DateTime<Local>) -> AppResult<()> {
    match cli.action {
        Action::In => cli::commands::punch_in::handle(cli, cfg, now),
        Action::Out => cli::commands::punch_out::handle(cli, cfg, now),
        Action::TurnIn => cli::commands::turn_in::handle(cfg, now),
        Action::Current => cli::commands::current::handle(cfg, now),
        Action::Status => cli::commands::status::handle(cfg, now),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ capture "now" once for the whole invocation
    let now = Local::now();

    // 2️⃣ parse and validate the CLI before any file is touched
    let cli = Cli::parse();
    cli.validate()?;

    // 3️⃣ load config
    let cfg = Config::load()?;
    log::debug!("data file: {}", cfg.data_path().display());

    // 4️⃣ hand over to the dispatcher
    dispatch(&cli, &cfg, now)
}
