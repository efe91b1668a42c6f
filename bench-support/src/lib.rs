//! Benchmark harness for seqbench.
//!
//! This crate turns the setup and operation policies of `seqbench` into
//! timed campaigns, and collects them into reports:
//!
//! - [`config`]: run configuration (`seqbench.toml`, `BENCH_NAMES`, `BENCH_TYPES`)
//! - [`driver`]: the timing loop
//! - [`registry`]: benchmark families, element types and suites
//! - [`report`]: graphs, Google Charts page and JSON artifact

pub mod config;
pub mod driver;
pub mod error;
pub mod registry;
pub mod report;

// Note: for_each_element macro is automatically exported at crate root via #[macro_export]
