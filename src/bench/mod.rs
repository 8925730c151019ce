//! Benchmark Harness Module
//!
//! # Components
//!
//! - [`rng`] - Seeded 48-bit LCG
//! - [`data`] - Base array generation and worst-case shaping
//! - [`harness`] - Per-size measurement sequence

pub mod data;
pub mod harness;
pub mod rng;

pub use data::BaseArray;
pub use harness::{Harness, Stage};
