use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::calculator::TimeAggregator;
use crate::errors::AppResult;
use crate::ui::report;
use chrono::{DateTime, Local};

/// Handle the `turn-in` action: last week's hours.
pub fn handle(cfg: &Config, now: DateTime<Local>) -> AppResult<()> {
    let store = open_store(cfg)?;
    let total = TimeAggregator::new(store.records(), now).prior_week_total();
    report::prior_week(total);
    Ok(())
}
