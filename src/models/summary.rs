use crate::core::calculator::WeekSummary;
use crate::models::PunchState;
use chrono::TimeDelta;

#[derive(Debug, Clone)]
pub struct Summary {
    pub state: PunchState,
    pub week: WeekSummary,
    pub prior_week: TimeDelta,
}
