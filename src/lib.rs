//! Worst-case timing of linear search, binary search and bubble sort.
//!
//! A seeded base array is generated once; each test size takes a prefix copy,
//! shapes it into the worst case for each algorithm and times a single run.
//!
//! # Modules
//!
//! - [`algorithms`] - Linear search, binary search, bubble sort
//! - [`bench`] - Data generation, worst-case shaping and the harness
//! - [`perf`] - Single-shot timing
//! - [`csv_io`] - CSV report output
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - Error type

pub mod algorithms;
pub mod bench;
pub mod config;
pub mod csv_io;
pub mod error;
pub mod logging;
pub mod perf;

// Convenient re-exports at crate root
pub use algorithms::{binary_search, bubble_sort, linear_search};
pub use bench::{BaseArray, Harness, Stage};
pub use config::{AppConfig, BenchConfig};
pub use error::BenchError;
pub use perf::SizeReport;
