//! CSV encoding of the punch log.
//!
//! One row per record, newest first. Each field is a decimal number of
//! seconds since the Unix epoch; a row with a single field is an open punch.

use crate::errors::{AppError, AppResult};
use crate::models::PunchRecord;
use chrono::{DateTime, Local};
use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use std::io::{Read, Write};

const MICROS_PER_SEC: i64 = 1_000_000;

/// Decode every row of a punch log.
///
/// A blank line is a row with no fields and is rejected; the csv reader
/// would otherwise skip it silently.
pub fn read_records<R: Read>(mut source: R) -> AppResult<Vec<PunchRecord>> {
    let mut content = String::new();
    source.read_to_string(&mut content)?;

    if let Some(idx) = content.lines().position(|l| l.trim().is_empty()) {
        return Err(AppError::MalformedRow {
            row: idx + 1,
            reason: "expected 1 or 2 fields, found 0".to_string(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        let line = row
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 1);
        records.push(decode_row(&row, line)?);
    }

    Ok(records)
}

/// Encode records in the order given (callers keep them newest first).
pub fn write_records<W: Write>(sink: W, records: &[PunchRecord]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);

    for rec in records {
        let check_in = format_timestamp(&rec.check_in);
        match &rec.check_out {
            Some(out) => wtr.write_record([check_in, format_timestamp(out)])?,
            None => wtr.write_record([check_in])?,
        }
    }

    wtr.flush()?;
    Ok(())
}

fn decode_row(row: &StringRecord, line: usize) -> AppResult<PunchRecord> {
    let malformed = |reason: String| AppError::MalformedRow { row: line, reason };

    match row.len() {
        1 => {
            let check_in = parse_timestamp(&row[0]).map_err(malformed)?;
            Ok(PunchRecord::open(check_in))
        }
        2 => {
            let check_in = parse_timestamp(&row[0]).map_err(malformed)?;
            let check_out = parse_timestamp(&row[1]).map_err(malformed)?;
            Ok(PunchRecord::closed(check_in, check_out))
        }
        n => Err(malformed(format!("expected 1 or 2 fields, found {n}"))),
    }
}

/// Parse epoch seconds (integer or fractional) into a local timestamp,
/// keeping microsecond precision.
pub fn parse_timestamp(field: &str) -> Result<DateTime<Local>, String> {
    let value: f64 = field
        .parse()
        .map_err(|_| format!("'{field}' is not a numeric timestamp"))?;
    if !value.is_finite() {
        return Err(format!("'{field}' is not a finite timestamp"));
    }

    let whole = value.floor();
    let mut secs = whole as i64;
    let mut micros = ((value - whole) * MICROS_PER_SEC as f64).round() as i64;
    if micros >= MICROS_PER_SEC {
        secs += 1;
        micros -= MICROS_PER_SEC;
    }

    DateTime::from_timestamp(secs, (micros * 1_000) as u32)
        .map(|utc| utc.with_timezone(&Local))
        .ok_or_else(|| format!("timestamp '{field}' is out of range"))
}

/// Inverse of [`parse_timestamp`]: whole seconds when there is no
/// fractional part, otherwise the shortest decimal that reads back the same.
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    let secs = ts.timestamp();
    let micros = ts.timestamp_subsec_micros();
    if micros == 0 {
        secs.to_string()
    } else {
        (secs as f64 + micros as f64 / MICROS_PER_SEC as f64).to_string()
    }
}
