//! Timing harness.

use std::hint::black_box;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, error, info, warn};

use super::config::BenchConfig;
use super::report::{SizeReport, Timing};
use crate::csv::{load_records, write_records};
use crate::domain::ScheduleRecord;
use crate::sort::{Algorithm, is_sorted_by};

/// Run every configured dataset size.
///
/// Each size reloads up to that many records from the input. A size whose
/// input cannot be loaded is logged and left out of the result.
pub fn run(config: &BenchConfig) -> Vec<SizeReport> {
    if let Some(dir) = &config.output_dir
        && let Err(e) = std::fs::create_dir_all(dir)
    {
        error!(dir = %dir.display(), error = %e, "cannot create output directory");
    }

    let mut reports = Vec::with_capacity(config.sizes.len());

    for &size in &config.sizes {
        let records = match load_records(&config.input, size) {
            Ok(records) => records,
            Err(e) => {
                error!(size, error = %e, "skipping dataset size");
                continue;
            }
        };
        reports.push(run_size(config, size, &records));
    }

    reports
}

/// Time every configured algorithm on its own copy of `records`.
pub fn run_size(config: &BenchConfig, requested: usize, records: &[ScheduleRecord]) -> SizeReport {
    info!(requested, loaded = records.len(), "timing sorts");

    let timings = config
        .algorithms
        .iter()
        .map(|&algorithm| {
            let (sorted, timing) = time_sort(algorithm, records);
            if let Some(dir) = &config.output_dir {
                let path = output_path(dir, algorithm, requested);
                // A failed write is reported and the run carries on.
                if let Err(e) = write_records(&path, &sorted, config.trailing) {
                    error!(%algorithm, error = %e, "failed to write sorted records");
                }
            }
            timing
        })
        .collect();

    SizeReport {
        requested,
        loaded: records.len(),
        timings,
    }
}

/// Sort a fresh copy of `records`, timing only the sort call.
///
/// Returns the sorted copy with its timing.
pub fn time_sort(algorithm: Algorithm, records: &[ScheduleRecord]) -> (Vec<ScheduleRecord>, Timing) {
    let mut copy = records.to_vec();

    let start = Instant::now();
    algorithm.sort(black_box(copy.as_mut_slice()));
    let elapsed = start.elapsed();

    let sorted = is_sorted_by(&copy, |a, b| a < b);
    if !sorted {
        warn!(%algorithm, len = copy.len(), "output is out of order");
    }
    debug!(%algorithm, len = copy.len(), secs = elapsed.as_secs_f64(), "sort finished");

    (
        copy,
        Timing {
            algorithm,
            elapsed,
            sorted,
        },
    )
}

/// Where the sorted copy for one run is written: `<dir>/<algorithm>_<size>.csv`.
pub fn output_path(dir: &Path, algorithm: Algorithm, size: usize) -> PathBuf {
    dir.join(format!("{}_{size}.csv", algorithm.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::{HEADER, TrailingRecord, read_records};
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    fn input_file(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn schedule() -> NamedTempFile {
        input_file(&[
            "1,2024-01-02,fast,08:00,60",
            "2,2024-01-01,slow,09:00,30",
            "3,2024-01-01,slow,09:00,45",
            "bad,2024-01-01,freight,07:00,??",
            "3,2024-01-01,fast,09:00,90",
        ])
    }

    #[test]
    fn time_sort_leaves_input_alone() {
        let records = vec![
            ScheduleRecord::new(2, "2024-01-02", "a", "08:00", 1),
            ScheduleRecord::new(1, "2024-01-01", "b", "08:00", 1),
        ];
        let (sorted, timing) = time_sort(Algorithm::Quick, &records);

        assert_eq!(records[0].train_number, 2);
        assert_eq!(sorted[0].train_number, 1);
        assert_eq!(timing.algorithm, Algorithm::Quick);
        assert!(timing.sorted);
    }

    #[test]
    fn every_size_and_algorithm_reported() {
        let input = schedule();
        let config = BenchConfig::new(input.path()).with_sizes([2, 4, 100]);

        let reports = run(&config);

        assert_eq!(reports.len(), 3);
        assert_eq!(
            reports.iter().map(|r| (r.requested, r.loaded)).collect::<Vec<_>>(),
            [(2, 2), (4, 4), (100, 5)]
        );
        for report in &reports {
            let algorithms: Vec<Algorithm> = report.timings.iter().map(|t| t.algorithm).collect();
            assert_eq!(algorithms, Algorithm::ALL);
            assert!(report.timings.iter().all(|t| t.sorted));
        }
    }

    #[test]
    fn missing_input_skips_sizes() {
        let config = BenchConfig::new("/nonexistent/trains.csv").with_sizes([10]);
        assert!(run(&config).is_empty());
    }

    #[test]
    fn writes_sorted_copies() {
        let input = schedule();
        let out = tempdir().unwrap();
        let dir = out.path().join("sorted");
        let config = BenchConfig::new(input.path())
            .with_sizes([5])
            .with_algorithms([Algorithm::Insertion, Algorithm::Merge])
            .with_output_dir(&dir);

        run(&config);

        for algorithm in [Algorithm::Insertion, Algorithm::Merge] {
            let path = output_path(&dir, algorithm, 5);
            let text = std::fs::read_to_string(&path).unwrap();
            assert!(text.starts_with(HEADER));

            let back = read_records(text.as_bytes(), usize::MAX).unwrap();
            let numbers: Vec<i32> = back.iter().map(|r| r.train_number).collect();
            // Last record omitted by default.
            assert_eq!(numbers, [0, 2, 3, 3], "{algorithm}");
            assert_eq!(back[2].travel_minutes, 90);
            assert_eq!(back[3].travel_minutes, 45);
        }
        assert!(!output_path(&dir, Algorithm::Quick, 5).exists());
    }

    #[test]
    fn keep_last_writes_everything() {
        let input = schedule();
        let out = tempdir().unwrap();
        let config = BenchConfig::new(input.path())
            .with_sizes([5])
            .with_algorithms([Algorithm::Merge])
            .with_output_dir(out.path())
            .with_trailing(TrailingRecord::Keep);

        run(&config);

        let text = std::fs::read_to_string(output_path(out.path(), Algorithm::Merge, 5)).unwrap();
        let back = read_records(text.as_bytes(), usize::MAX).unwrap();
        assert_eq!(back.len(), 5);
        assert_eq!(back[4].train_number, 1);
    }

    #[test]
    fn output_path_format() {
        assert_eq!(
            output_path(Path::new("out"), Algorithm::Quick, 1500),
            PathBuf::from("out/quick_sort_1500.csv")
        );
    }
}
