//! Duration helpers: worked time as decimal hours.

use chrono::TimeDelta;

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

pub fn as_hours(d: TimeDelta) -> f64 {
    match d.num_microseconds() {
        Some(us) => us as f64 / MICROS_PER_HOUR,
        None => d.num_seconds() as f64 / 3600.0,
    }
}

/// Decimal hours with two places, e.g. `1.00`.
pub fn format_hours(d: TimeDelta) -> String {
    format!("{:.2}", as_hours(d))
}
