//! Schedule CSV ingestion.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::HEADER;
use crate::domain::ScheduleRecord;
use crate::error::CsvError;

/// Read up to `max` records from the file at `path`.
pub fn load_records(path: impl AsRef<Path>, max: usize) -> Result<Vec<ScheduleRecord>, CsvError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CsvError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_records(BufReader::new(file), max)?;
    debug!(path = %path.display(), max, loaded = records.len(), "loaded schedule records");
    Ok(records)
}

/// Read up to `max` records, one per line, stopping early at end of input.
///
/// A first line equal to [`HEADER`] is skipped. Every other line becomes a
/// record, see [`parse_line`].
pub fn read_records<R: BufRead>(reader: R, max: usize) -> Result<Vec<ScheduleRecord>, CsvError> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        if records.len() >= max {
            break;
        }
        let line = line.map_err(|source| CsvError::Read {
            records: records.len(),
            source,
        })?;
        if idx == 0 && line.trim_end_matches('\r') == HEADER {
            continue;
        }
        records.push(parse_line(&line));
    }

    Ok(records)
}

/// Parse one line of `train_number,date,type,time,travel_minutes`.
///
/// Never fails. Missing text fields are left empty, and numeric fields that
/// are missing or malformed become 0.
pub fn parse_line(line: &str) -> ScheduleRecord {
    let mut fields = line.split(',');
    let mut next = || fields.next().unwrap_or("");

    let train_number = parse_leading_int(next());
    let departure_date = next().to_string();
    let train_type = next().to_string();
    let departure_time = next().to_string();
    let travel_minutes = parse_leading_int(next());

    ScheduleRecord {
        train_number,
        departure_date,
        train_type,
        departure_time,
        travel_minutes,
    }
}

/// Parse the integer at the start of `field`, or 0.
///
/// Leading whitespace and a sign are accepted and anything after the digits
/// is ignored, so `" 42\r"` and `"42min"` both give 42. No digits, or a value
/// that does not fit in an `i32`, gives 0.
fn parse_leading_int(field: &str) -> i32 {
    let s = field.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let end = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |pos| pos + sign_len);
    s[..end].parse().unwrap_or(0)
}
