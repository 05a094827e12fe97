use chrono::{DateTime, Local, TimeDelta};

/// One line of the punch log: a check-in and, once the user punched out,
/// the matching check-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchRecord {
    pub check_in: DateTime<Local>,          // ⇔ first CSV field (epoch seconds)
    pub check_out: Option<DateTime<Local>>, // ⇔ second CSV field, absent while open
}

impl PunchRecord {
    /// A freshly punched-in record.
    pub fn open(check_in: DateTime<Local>) -> Self {
        Self {
            check_in,
            check_out: None,
        }
    }

    pub fn closed(check_in: DateTime<Local>, check_out: DateTime<Local>) -> Self {
        Self {
            check_in,
            check_out: Some(check_out),
        }
    }

    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }

    /// Worked time for this record. An open record counts up to `now`.
    pub fn duration(&self, now: DateTime<Local>) -> TimeDelta {
        match self.check_out {
            Some(out) => out - self.check_in,
            None => now - self.check_in,
        }
    }
}
