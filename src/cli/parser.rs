use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_datetime;
use chrono::NaiveDateTime;
use clap::{Parser, ValueEnum};

const ACTIONS_HELP: &str = "\
Actions:
  in      | i  - Punches you in if you haven't punched in already.
  out     | o  - Punches you out if you have already punched in.
  turn-in | t  - Displays how many hours to turn in for last week.
  current | c  - Displays how many hours accrued this week so far.
  status  | s  - Displays whether or not you are punched in.";

/// Command-line interface definition for timeclock
#[derive(Parser, Debug)]
#[command(
    name = "timeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time-clock: punch in, punch out and see how many hours you worked",
    long_about = None,
    arg_required_else_help = true,
    after_help = ACTIONS_HELP
)]
pub struct Cli {
    /// What to do
    #[arg(short = 'a', long = "action", value_enum)]
    pub action: Action,

    /// Punch at this local time instead of now (only with in/out)
    #[arg(
        long = "at",
        value_name = "YYYY-MM-DD HH:MM",
        value_parser = parse_datetime
    )]
    pub at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Punches you in if you haven't punched in already
    #[value(alias = "i")]
    In,

    /// Punches you out if you have already punched in
    #[value(alias = "o")]
    Out,

    /// Displays how many hours to turn in for last week
    #[value(alias = "t")]
    TurnIn,

    /// Displays how many hours accrued this week so far
    #[value(alias = "c")]
    Current,

    /// Displays whether or not you are punched in
    #[value(alias = "s")]
    Status,
}

impl Action {
    pub fn accepts_time(&self) -> bool {
        matches!(self, Action::In | Action::Out)
    }
}

impl Cli {
    /// Shape checks clap cannot express; run before any file is touched.
    pub fn validate(&self) -> AppResult<()> {
        if self.at.is_some() && !self.action.accepts_time() {
            return Err(AppError::Usage(
                "--at can only be used with the 'in' and 'out' actions".to_string(),
            ));
        }
        Ok(())
    }
}
