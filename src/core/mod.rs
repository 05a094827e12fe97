pub mod calculator;
pub mod logic;
pub mod punch;

pub use logic::Core;
pub use punch::PunchLogic;
