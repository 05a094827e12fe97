use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime};

const ACCEPTED_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

/// Parse a `YYYY-MM-DD HH:MM` argument (clap value parser).
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| format!("'{s}' is not a date-time in the form YYYY-MM-DD HH:MM"))
}

/// Interpret a wall-clock time in the local timezone.
/// An ambiguous time (DST fall-back) resolves to the earlier instant.
pub fn to_local(naive: NaiveDateTime) -> AppResult<DateTime<Local>> {
    naive.and_local_timezone(Local).earliest().ok_or_else(|| {
        AppError::InvalidDateTime(format!(
            "{} does not exist in the local timezone",
            naive.format("%Y-%m-%d %H:%M")
        ))
    })
}
