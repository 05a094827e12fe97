pub mod punch;
pub mod state;
pub mod summary;

pub use punch::PunchRecord;
pub use state::PunchState;
pub use summary::Summary;
