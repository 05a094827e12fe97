//! Terminal rendering of punch confirmations and hour totals.

use crate::core::calculator::WeekSummary;
use crate::models::{PunchRecord, PunchState, Summary};
use crate::ui::messages;
use crate::utils::format_hours;
use crate::utils::formatting::{bold, weekday_name};
use crate::utils::table::{Align, Column, Table};
use ansi_term::Colour;
use chrono::{DateTime, Local, TimeDelta};

fn green(s: &str) -> String {
    Colour::Green.paint(s).to_string()
}

fn state_colour(state: PunchState) -> String {
    match state {
        PunchState::In => Colour::Green.paint(state.as_str()).to_string(),
        PunchState::Out => Colour::Red.paint(state.as_str()).to_string(),
    }
}

pub fn punched(state: PunchState, record: &PunchRecord, datetime_format: &str) {
    let at: DateTime<Local> = match state {
        PunchState::In => record.check_in,
        PunchState::Out => record.check_out.unwrap_or(record.check_in),
    };
    messages::success(format!(
        "Punched you {}: {}",
        state_colour(state),
        at.format(datetime_format)
    ));
}

pub fn current_week(week: &WeekSummary, show_weekdays: bool) {
    println!(
        "Current week's total hours: {}, {} today",
        green(&format_hours(week.week_total)),
        green(&format_hours(week.today_total))
    );

    if show_weekdays {
        print!("{}", weekday_table(week));
    }
}

/// Monday→Sunday breakdown, today in bold.
pub fn weekday_table(week: &WeekSummary) -> String {
    let mut table = Table::new(vec![
        Column::new("Day", 10, Align::Left),
        Column::new("Hours", 6, Align::Right),
    ]);

    let mut today_row = None;
    for (idx, (wd, worked)) in week.per_day().enumerate() {
        if wd == week.today {
            today_row = Some(idx);
        }
        table.add_row(vec![weekday_name(wd).to_string(), format_hours(worked)]);
    }

    table.render_with(|idx, line| {
        if Some(idx) == today_row {
            bold(&line)
        } else {
            line
        }
    })
}

pub fn prior_week(total: TimeDelta) {
    println!(
        "Total hours to turn in for last week: {}",
        green(&format_hours(total))
    );
}

pub fn status(summary: &Summary, show_weekdays: bool) {
    println!("You are currently punched {}.", state_colour(summary.state));
    current_week(&summary.week, show_weekdays);
    prior_week(summary.prior_week);
}
