//! Benchmark results and their rendering.

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use super::config::ReportFormat;
use crate::sort::Algorithm;

/// One algorithm's run over one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Timing {
    pub algorithm: Algorithm,
    /// Wall-clock time of the sort call alone.
    #[serde(rename = "seconds", serialize_with = "as_secs_f64")]
    pub elapsed: Duration,
    /// Whether the output was checked to be in order.
    pub sorted: bool,
}

/// All timings for one dataset size.
#[derive(Debug, Clone, Serialize)]
pub struct SizeReport {
    /// Size asked for.
    pub requested: usize,
    /// Records actually loaded; smaller than `requested` for short inputs.
    pub loaded: usize,
    pub timings: Vec<Timing>,
}

fn as_secs_f64<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.6} sec", self.algorithm, self.elapsed.as_secs_f64())?;
        if !self.sorted {
            f.write_str(" (NOT SORTED)")?;
        }
        Ok(())
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== Sort time {} elements ====", self.requested)?;
        if self.loaded != self.requested {
            writeln!(f, "(only {} records available)", self.loaded)?;
        }
        for timing in &self.timings {
            writeln!(f, "{timing}")?;
        }
        Ok(())
    }
}

/// Render `reports` in the given format.
pub fn render(reports: &[SizeReport], format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(reports
            .iter()
            .map(|report| format!("{report}\n"))
            .collect()),
        ReportFormat::Json => serde_json::to_string_pretty(reports),
    }
}
