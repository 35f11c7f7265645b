//! Schedule CSV output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::HEADER;
use crate::domain::ScheduleRecord;
use crate::error::CsvError;

/// What to do with the last record when writing a file.
///
/// The schedule writer has always stopped one short of the end, so every
/// file it produced lacks its final record. `Omit` keeps that behaviour so
/// output stays comparable with older runs; `Keep` writes every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingRecord {
    #[default]
    Omit,
    Keep,
}

/// Write `records` to a new file at `path`, replacing any existing file.
///
/// Returns the number of records written.
pub fn write_records(
    path: impl AsRef<Path>,
    records: &[ScheduleRecord],
    trailing: TrailingRecord,
) -> Result<usize, CsvError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| CsvError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let written = write_to(BufWriter::new(file), records, trailing)?;
    debug!(path = %path.display(), written, "wrote schedule records");
    Ok(written)
}

/// Write the header line and then one line per record.
///
/// Returns the number of records written.
pub fn write_to<W: Write>(
    mut out: W,
    records: &[ScheduleRecord],
    trailing: TrailingRecord,
) -> Result<usize, CsvError> {
    let count = match trailing {
        TrailingRecord::Omit => records.len().saturating_sub(1),
        TrailingRecord::Keep => records.len(),
    };
    if count < records.len() {
        warn!(
            records = records.len(),
            written = count,
            "last record omitted from output"
        );
    }

    writeln!(out, "{HEADER}")?;
    for record in &records[..count] {
        writeln!(out, "{}", record.to_csv_line())?;
    }
    out.flush()?;

    Ok(count)
}
