//! Flat-file store for the punch log.

pub mod backup;
pub mod codec;

pub use backup::BackupPolicy;

use crate::errors::{AppError, AppResult};
use crate::models::PunchRecord;
use log::debug;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// The whole punch log, newest record first, held in memory for one invocation.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    backup: BackupPolicy,
    records: Vec<PunchRecord>,
}

impl RecordStore {
    /// Load the log at `path`, creating an empty file when it is missing.
    pub fn open<P: AsRef<Path>>(path: P, backup: BackupPolicy) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let records = Self::load(&path)?;
        Ok(Self {
            path,
            backup,
            records,
        })
    }

    /// Read every record from `path`.
    pub fn load(path: &Path) -> AppResult<Vec<PunchRecord>> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            File::create(path)?;
            debug!("created empty data file {}", path.display());
        }

        let file = File::open(path)?;
        let records = codec::read_records(BufReader::new(file))?;
        check_invariants(&records)?;

        debug!("loaded {} record(s) from {}", records.len(), path.display());
        Ok(records)
    }

    /// Back up the current file, then replace it with the in-memory records.
    ///
    /// The new content goes to a sibling temporary file first and is renamed
    /// over the data file, so the log is never left half written.
    pub fn save(&self) -> AppResult<()> {
        self.backup.backup(&self.path)?;

        replace_file(&self.path, |out| codec::write_records(out, &self.records))?;

        debug!(
            "saved {} record(s) to {}",
            self.records.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn records(&self) -> &[PunchRecord] {
        &self.records
    }

    /// The most recent record, the only one that may still be open.
    pub fn newest(&self) -> Option<&PunchRecord> {
        self.records.first()
    }

    pub(crate) fn newest_mut(&mut self) -> Option<&mut PunchRecord> {
        self.records.first_mut()
    }

    pub(crate) fn push_newest(&mut self, record: PunchRecord) {
        self.records.insert(0, record);
    }

    pub(crate) fn pop_newest(&mut self) -> Option<PunchRecord> {
        if self.records.is_empty() {
            None
        } else {
            Some(self.records.remove(0))
        }
    }
}

/// Only the newest record may be open, and no closed record may end
/// before it starts.
fn check_invariants(records: &[PunchRecord]) -> AppResult<()> {
    for (idx, rec) in records.iter().enumerate() {
        let row = idx + 1;
        match rec.check_out {
            None if idx > 0 => {
                return Err(AppError::CorruptLog {
                    row,
                    reason: "open punch is not the newest record".to_string(),
                });
            }
            Some(out) if out < rec.check_in => {
                return Err(AppError::CorruptLog {
                    row,
                    reason: "check-out precedes check-in".to_string(),
                });
            }
            _ => {}
        }
    }
    Ok(())
}

/// Write `path` through a sibling `.tmp` file and rename it into place.
/// The temporary file is removed when writing fails.
fn replace_file<F>(path: &Path, write: F) -> AppResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> AppResult<()>,
{
    let tmp = tmp_path(path);
    let written = File::create(&tmp).map_err(AppError::from).and_then(|file| {
        let mut out = BufWriter::new(file);
        write(&mut out)?;
        out.flush()?;
        Ok(())
    });

    if let Err(e) = written {
        fs::remove_file(&tmp).ok();
        return Err(e);
    }

    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
