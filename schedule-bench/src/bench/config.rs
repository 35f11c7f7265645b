//! Benchmark configuration.

use std::path::PathBuf;
use std::str::FromStr;

use crate::csv::TrailingRecord;
use crate::error::ConfigError;
use crate::sort::Algorithm;

/// Dataset sizes timed when none are configured.
pub const DEFAULT_SIZES: [usize; 10] = [
    100, 1_000, 1_500, 5_000, 10_000, 15_000, 20_000, 30_000, 50_000, 100_000,
];

/// Input file read when none is configured.
pub const DEFAULT_INPUT: &str = "trains.csv";

/// How the report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One block of `<algorithm>: <seconds> sec` lines per size.
    #[default]
    Text,
    /// A single JSON array of size reports.
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

/// Configuration for a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Schedule CSV to load records from.
    pub input: PathBuf,

    /// Maximum number of records to load for each run, in run order.
    pub sizes: Vec<usize>,

    /// Algorithms to time, in report order.
    pub algorithms: Vec<Algorithm>,

    /// Directory to write each sorted copy to.
    /// Nothing is written when unset.
    pub output_dir: Option<PathBuf>,

    /// Whether written files keep their last record.
    pub trailing: TrailingRecord,

    pub format: ReportFormat,
}

impl BenchConfig {
    /// Create a configuration for `input` with default settings.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Set the dataset sizes.
    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Set the algorithms to time.
    pub fn with_algorithms(mut self, algorithms: impl Into<Vec<Algorithm>>) -> Self {
        self.algorithms = algorithms.into();
        self
    }

    /// Write sorted copies into `dir`.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_trailing(mut self, trailing: TrailingRecord) -> Self {
        self.trailing = trailing;
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Build a configuration from `SCHEDULE_*` environment variables.
    ///
    /// | Variable              | Meaning                                   |
    /// |-----------------------|-------------------------------------------|
    /// | `SCHEDULE_INPUT`      | input CSV path                            |
    /// | `SCHEDULE_SIZES`      | comma-separated dataset sizes             |
    /// | `SCHEDULE_ALGORITHMS` | comma-separated algorithm names           |
    /// | `SCHEDULE_OUTPUT_DIR` | write sorted files into this directory    |
    /// | `SCHEDULE_KEEP_LAST`  | `1` or `true` to keep the last record     |
    /// | `SCHEDULE_REPORT`     | `text` or `json`                          |
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`BenchConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(input) = lookup("SCHEDULE_INPUT") {
            config.input = PathBuf::from(input);
        }
        if let Some(sizes) = lookup("SCHEDULE_SIZES") {
            config.sizes = parse_sizes(&sizes)?;
        }
        if let Some(algorithms) = lookup("SCHEDULE_ALGORITHMS") {
            config.algorithms = parse_list(&algorithms)
                .map(str::parse::<Algorithm>)
                .collect::<Result<Vec<_>, _>>()?;
        }
        if let Some(dir) = lookup("SCHEDULE_OUTPUT_DIR")
            && !dir.is_empty()
        {
            config.output_dir = Some(PathBuf::from(dir));
        }
        if let Some(keep) = lookup("SCHEDULE_KEEP_LAST")
            && matches!(keep.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
        {
            config.trailing = TrailingRecord::Keep;
        }
        if let Some(format) = lookup("SCHEDULE_REPORT") {
            config.format = format.parse()?;
        }

        Ok(config)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            sizes: DEFAULT_SIZES.to_vec(),
            algorithms: Algorithm::ALL.to_vec(),
            output_dir: None,
            trailing: TrailingRecord::Omit,
            format: ReportFormat::Text,
        }
    }
}

fn parse_list(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn parse_sizes(s: &str) -> Result<Vec<usize>, ConfigError> {
    let sizes = parse_list(s)
        .map(|item| {
            item.replace('_', "")
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| ConfigError::InvalidSize(item.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if sizes.is_empty() {
        return Err(ConfigError::EmptySizes);
    }
    Ok(sizes)
}
