#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use std::env;
use std::fs;
use std::path::PathBuf;
use timeclock::store::{BackupPolicy, RecordStore};

pub fn tc() -> Command {
    cargo_bin_cmd!("timeclock")
}

/// Run the binary with `$HOME` pointed at `home`, so the default
/// `~/timeclock.csv` and `~/.timeclock/timeclock.conf` land there.
pub fn tc_in(home: &PathBuf) -> Command {
    let mut cmd = tc();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Create a fresh, empty home directory inside the system temp dir
pub fn setup_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timeclock_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Create a unique data file path inside the system temp dir and remove
/// any leftovers (file, backup, temporary) from a previous run
pub fn setup_data_file(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timeclock.csv", name));
    for suffix in ["", ".bak", ".tmp"] {
        fs::remove_file(format!("{}{}", path.display(), suffix)).ok();
    }
    path
}

pub fn open_store(path: &PathBuf) -> RecordStore {
    RecordStore::open(path, BackupPolicy::default()).expect("open store")
}

/// Local wall-clock time, e.g. `local(2025, 6, 16, 9, 0)`
pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .earliest()
        .expect("valid local time")
}
