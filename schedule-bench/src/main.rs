use std::process::ExitCode;

use schedule_bench::bench::{self, BenchConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so the report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = match BenchConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        input = %config.input.display(),
        sizes = ?config.sizes,
        "starting schedule sort benchmark"
    );

    let reports = bench::run(&config);

    match bench::render(&reports, config.format) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to render report: {e}");
            ExitCode::FAILURE
        }
    }
}
