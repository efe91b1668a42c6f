//! Benchmark runner that produces the Google Charts page and JSON artifact.
//!
//! Runs the fast suite for every element type, or the full suite when
//! `BENCH_TYPES=full`, then writes every configured format to `output_dir`.
//!
//! Run with: `cargo bench --bench runner`
//!
//! ```text
//! BENCH_NAMES=sort:fill_back BENCH_TYPES=TrivialSmall cargo bench --bench runner
//! ```
//!
//! Exits with status 77 when the selection matched nothing.

use std::process::ExitCode;

use bench_support::config::{DEFAULT_CONFIG_FILE, RunConfig};
use bench_support::error::HarnessError;
use bench_support::registry::run_suite;
use bench_support::report::Report;
use tracing_subscriber::EnvFilter;

const NOTHING_RAN: u8 = 77;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bench_support::registry=info,warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run() {
        Ok(0) => {
            eprintln!("No benchmark ran");
            ExitCode::from(NOTHING_RAN)
        },
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}

/// Returns the number of samples recorded.
fn run() -> Result<usize, HarnessError> {
    let config = RunConfig::load_or_default(DEFAULT_CONFIG_FILE)?.with_env_overrides();
    config.validate()?;

    println!("=== seqbench runner ===");
    println!("Families: {}", describe(&config.names));
    println!("Types: {}", describe(&config.types));
    println!("Repeat: {}", config.repeat);
    println!();

    let mut report = Report::new();
    let graphs = run_suite(&mut report, &config);
    if report.is_empty() {
        return Ok(0);
    }

    println!();
    println!("Graphs: {graphs}");
    println!("Samples: {}", report.sample_count());
    for &format in &config.formats {
        let path = report.output(format, &config.output_dir)?;
        println!("Output: {}", path.display());
    }
    Ok(report.sample_count())
}

fn describe(list: &[String]) -> String {
    if list.is_empty() {
        "all".to_owned()
    } else {
        list.join(", ")
    }
}
