use crate::cli::commands::{open_store, punch_time};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::PunchLogic;
use crate::core::calculator::TimeAggregator;
use crate::errors::AppResult;
use crate::models::PunchState;
use crate::ui::report;
use chrono::{DateTime, Local};

/// Handle the `out` action
pub fn handle(cli: &Cli, cfg: &Config, now: DateTime<Local>) -> AppResult<()> {
    let at = punch_time(cli, now)?;

    let mut store = open_store(cfg)?;
    let record = PunchLogic::punch_out(&mut store, at)?;

    report::punched(PunchState::Out, &record, &cfg.datetime_format);
    let week = TimeAggregator::new(store.records(), now)
        .with_policy(cfg.open_punch_policy)
        .current_week_total();
    report::current_week(&week, cfg.show_weekdays);

    Ok(())
}
