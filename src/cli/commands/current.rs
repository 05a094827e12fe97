use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::calculator::TimeAggregator;
use crate::errors::AppResult;
use crate::ui::report;
use chrono::{DateTime, Local};

/// Handle the `current` action: this week's hours so far.
pub fn handle(cfg: &Config, now: DateTime<Local>) -> AppResult<()> {
    let store = open_store(cfg)?;
    let week = TimeAggregator::new(store.records(), now)
        .with_policy(cfg.open_punch_policy)
        .current_week_total();
    report::current_week(&week, cfg.show_weekdays);
    Ok(())
}
