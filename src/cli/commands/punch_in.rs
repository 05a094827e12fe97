use crate::cli::commands::{open_store, punch_time};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::PunchLogic;
use crate::core::calculator::TimeAggregator;
use crate::errors::AppResult;
use crate::models::PunchState;
use crate::ui::report;
use chrono::{DateTime, Local};

/// Handle the `in` action
pub fn handle(cli: &Cli, cfg: &Config, now: DateTime<Local>) -> AppResult<()> {
    //
    // 1. Resolve the punch time before touching the log
    //
    let at = punch_time(cli, now)?;

    //
    // 2. Load, transition, persist
    //
    let mut store = open_store(cfg)?;
    let record = PunchLogic::punch_in(&mut store, at)?;

    //
    // 3. Report
    //
    report::punched(PunchState::In, &record, &cfg.datetime_format);
    let week = TimeAggregator::new(store.records(), now)
        .with_policy(cfg.open_punch_policy)
        .current_week_total();
    report::current_week(&week, cfg.show_weekdays);

    Ok(())
}
