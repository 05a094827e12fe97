use crate::core::calculator::{OpenPunchPolicy, TimeAggregator};
use crate::core::punch::PunchLogic;
use crate::models::summary::Summary;
use crate::store::RecordStore;
use chrono::{DateTime, Local};

pub struct Core;

impl Core {
    /// Punch state plus current and prior week totals, all relative to one `now`.
    pub fn build_summary(
        store: &RecordStore,
        now: DateTime<Local>,
        policy: OpenPunchPolicy,
    ) -> Summary {
        let aggregator = TimeAggregator::new(store.records(), now).with_policy(policy);

        Summary {
            state: PunchLogic::status(store),
            week: aggregator.current_week_total(),
            prior_week: aggregator.prior_week_total(),
        }
    }
}
