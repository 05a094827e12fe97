//! Local-time day and week boundaries.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveTime, TimeZone};

/// Local midnight starting `now`'s calendar day.
pub fn day_start(now: DateTime<Local>) -> DateTime<Local> {
    local_midnight(now.date_naive())
}

/// Local midnight of the Monday on or before `now`.
pub fn week_start(now: DateTime<Local>) -> DateTime<Local> {
    local_midnight(monday_of(now.date_naive()))
}

/// Local midnight of the Monday one week before [`week_start`].
pub fn prior_week_start(now: DateTime<Local>) -> DateTime<Local> {
    let monday = monday_of(now.date_naive());
    local_midnight(monday.checked_sub_days(Days::new(7)).unwrap_or(monday))
}

fn monday_of(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Midnight does not exist on some DST transition days; the naive time is
/// then read as UTC.
fn local_midnight(date: NaiveDate) -> DateTime<Local> {
    let naive = date.and_time(NaiveTime::MIN);
    naive
        .and_local_timezone(Local)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}
