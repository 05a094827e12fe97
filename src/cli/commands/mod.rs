pub mod current;
pub mod punch_in;
pub mod punch_out;
pub mod status;
pub mod turn_in;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::utils::date::to_local;
use chrono::{DateTime, Local};

/// Load the punch log configured in `cfg`.
pub(crate) fn open_store(cfg: &Config) -> AppResult<RecordStore> {
    RecordStore::open(cfg.data_path(), cfg.backup_policy())
}

/// The explicit `--at` time if given, otherwise the invocation's `now`.
pub(crate) fn punch_time(cli: &Cli, now: DateTime<Local>) -> AppResult<DateTime<Local>> {
    match cli.at {
        Some(naive) => to_local(naive),
        None => Ok(now),
    }
}
