//! Weekly and daily worked-time totals over the punch log.

use crate::core::calculator::bounds;
use crate::models::PunchRecord;
use chrono::{DateTime, Datelike, Local, TimeDelta, Weekday};
use serde::Deserialize;

/// Display order for per-day totals.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Which week a still-open punch is charged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpenPunchPolicy {
    /// Always the current week, wherever the check-in falls.
    #[default]
    CurrentWeek,
    /// Only when the check-in is on or after the start of the current week.
    CheckIn,
}

/// Current-week totals, bucketed by the weekday of each check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSummary {
    per_day: [TimeDelta; 7],
    pub week_total: TimeDelta,
    pub today_total: TimeDelta,
    pub today: Weekday,
}

impl WeekSummary {
    pub fn day(&self, weekday: Weekday) -> TimeDelta {
        self.per_day[weekday.num_days_from_monday() as usize]
    }

    /// All seven days, Monday first, zero for days without punches.
    pub fn per_day(&self) -> impl Iterator<Item = (Weekday, TimeDelta)> + '_ {
        WEEK.iter().map(|wd| (*wd, self.day(*wd)))
    }
}

/// Single-pass aggregation of punch records relative to a fixed `now`.
pub struct TimeAggregator<'a> {
    records: &'a [PunchRecord],
    now: DateTime<Local>,
    policy: OpenPunchPolicy,
}

impl<'a> TimeAggregator<'a> {
    pub fn new(records: &'a [PunchRecord], now: DateTime<Local>) -> Self {
        Self {
            records,
            now,
            policy: OpenPunchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: OpenPunchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Closed records checked in since Monday midnight, plus the open
    /// record (as elapsed-so-far) according to the [`OpenPunchPolicy`].
    pub fn current_week_total(&self) -> WeekSummary {
        let start = bounds::week_start(self.now);
        let mut per_day = [TimeDelta::zero(); 7];
        let mut week_total = TimeDelta::zero();

        for rec in self.records {
            let counts = match (rec.is_open(), self.policy) {
                (true, OpenPunchPolicy::CurrentWeek) => true,
                _ => rec.check_in >= start,
            };
            if !counts {
                continue;
            }

            let worked = rec.duration(self.now);
            per_day[rec.check_in.weekday().num_days_from_monday() as usize] += worked;
            week_total += worked;
        }

        let today = self.now.weekday();
        WeekSummary {
            today_total: per_day[today.num_days_from_monday() as usize],
            per_day,
            week_total,
            today,
        }
    }

    /// Closed records checked in during the seven days before the current
    /// week. Open records never count.
    pub fn prior_week_total(&self) -> TimeDelta {
        let end = bounds::week_start(self.now);
        let start = bounds::prior_week_start(self.now);

        self.records
            .iter()
            .filter(|rec| !rec.is_open())
            .filter(|rec| start <= rec.check_in && rec.check_in < end)
            .fold(TimeDelta::zero(), |acc, rec| acc + rec.duration(self.now))
    }
}
