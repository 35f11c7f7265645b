//! Sort benchmark over schedule files.
//!
//! For each configured size the harness loads that many records, hands every
//! algorithm its own copy, and times the sort call alone.

mod config;
mod report;
mod run;

pub use config::{BenchConfig, DEFAULT_INPUT, DEFAULT_SIZES, ReportFormat};
pub use report::{SizeReport, Timing, render};
pub use run::{output_path, run, run_size, time_sort};
