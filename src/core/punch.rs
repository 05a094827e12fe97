use crate::errors::{AppError, AppResult};
use crate::models::{PunchRecord, PunchState};
use crate::store::RecordStore;
use chrono::{DateTime, Local};
use log::info;

/// Punch-in / punch-out transitions.
///
/// Only the newest record is ever touched: every older record is closed,
/// so the dangling punch (if any) is always at the front of the store.
pub struct PunchLogic;

impl PunchLogic {
    /// `In` when the newest record is open, `Out` otherwise (including an empty log).
    pub fn status(store: &RecordStore) -> PunchState {
        match store.newest() {
            Some(rec) if rec.is_open() => PunchState::In,
            _ => PunchState::Out,
        }
    }

    /// Open a new record at `at` and persist it.
    pub fn punch_in(store: &mut RecordStore, at: DateTime<Local>) -> AppResult<PunchRecord> {
        if Self::status(store).is_in() {
            return Err(AppError::AlreadyPunchedIn);
        }

        let record = PunchRecord::open(at);
        store.push_newest(record.clone());

        if let Err(e) = store.save() {
            store.pop_newest();
            return Err(e);
        }

        info!("punched in at {}", at.to_rfc3339());
        Ok(record)
    }

    /// Close the open record at `at` and persist it.
    pub fn punch_out(store: &mut RecordStore, at: DateTime<Local>) -> AppResult<PunchRecord> {
        let newest = match store.newest_mut() {
            Some(rec) if rec.is_open() => rec,
            _ => return Err(AppError::NotPunchedIn),
        };

        if at < newest.check_in {
            return Err(AppError::InvalidPunchOutTime {
                check_in: newest.check_in,
                at,
            });
        }

        newest.check_out = Some(at);
        let record = newest.clone();

        if let Err(e) = store.save() {
            if let Some(rec) = store.newest_mut() {
                rec.check_out = None;
            }
            return Err(e);
        }

        info!("punched out at {}", at.to_rfc3339());
        Ok(record)
    }
}
