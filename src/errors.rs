//! Unified application error type.
//! Every module (store, core, cli, config) returns AppError so the binary
//! has a single place where failures are reported.

use chrono::{DateTime, Local};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed row {row} in data file: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("Corrupt punch log at row {row}: {reason}")]
    CorruptLog { row: usize, reason: String },

    // ---------------------------
    // Punch state machine
    // ---------------------------
    #[error("You have already punched in, you need to punch out first.")]
    AlreadyPunchedIn,

    #[error("You have already punched out, you need to punch in first.")]
    NotPunchedIn,

    #[error(
        "Cannot punch out at {} before the punch in at {}.",
        .at.format("%Y-%m-%d %H:%M"),
        .check_in.format("%Y-%m-%d %H:%M")
    )]
    InvalidPunchOutTime {
        check_in: DateTime<Local>,
        at: DateTime<Local>,
    },

    // ---------------------------
    // Input
    // ---------------------------
    #[error("Invalid date-time: {0}")]
    InvalidDateTime(String),

    #[error("{0}")]
    Usage(String),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl AppError {
    /// True for I/O and parse failures of the persisted punch log.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            AppError::Io(_)
                | AppError::Csv(_)
                | AppError::MalformedRow { .. }
                | AppError::CorruptLog { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
