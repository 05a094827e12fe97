pub mod bounds;
pub mod totals;

pub use totals::{OpenPunchPolicy, TimeAggregator, WeekSummary};
