use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::ui::report;
use chrono::{DateTime, Local};

/// Handle the `status` action
pub fn handle(cfg: &Config, now: DateTime<Local>) -> AppResult<()> {
    let store = open_store(cfg)?;
    let summary = Core::build_summary(&store, now, cfg.open_punch_policy);
    report::status(&summary, cfg.show_weekdays);
    Ok(())
}
