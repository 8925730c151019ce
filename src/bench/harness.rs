//! Benchmark Harness
//!
//! Drives every test size through the same sequence of stages:
//!
//! ```text
//! Init ─▶ PerSizeSetup ─▶ MeasureLinearSearch ─▶ MeasureBinarySearch ─▶ MeasureBubbleSort ─▶ Emit ─▶ NextSize
//!              ▲                                                                                      │
//!              └──────────────────────────────────────────────────────────────────────────────────────┤
//!                                                                                                     ▼
//!                                                                                                   Done
//! ```
//!
//! Binary search needs sorted input, so its stage bubble-sorts the working copy
//! first without timing it. The bubble sort stage resets the copy to the
//! unsorted prefix and reverses it before timing.

use std::fmt;
use std::io::Write;

use crate::algorithms::{binary_search, bubble_sort, linear_search};
use crate::bench::data::{BaseArray, reverse, worst_case_target};
use crate::config::BenchConfig;
use crate::csv_io;
use crate::error::{BenchError, Result};
use crate::perf::{SizeReport, measure};

/// Harness stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Init,
    PerSizeSetup,
    MeasureLinearSearch,
    MeasureBinarySearch,
    MeasureBubbleSort,
    Emit,
    NextSize,
    Done,
}

impl Stage {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Done)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Init => "INIT",
            Stage::PerSizeSetup => "PER_SIZE_SETUP",
            Stage::MeasureLinearSearch => "MEASURE_LINEAR_SEARCH",
            Stage::MeasureBinarySearch => "MEASURE_BINARY_SEARCH",
            Stage::MeasureBubbleSort => "MEASURE_BUBBLE_SORT",
            Stage::Emit => "EMIT",
            Stage::NextSize => "NEXT_SIZE",
            Stage::Done => "DONE",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owns the base array and the size list for the whole run.
#[derive(Debug)]
pub struct Harness {
    base: BaseArray,
    sizes: Vec<usize>,
}

impl Harness {
    /// Generate the base array described by `config`.
    pub fn new(config: &BenchConfig) -> Result<Self> {
        config.validate()?;
        enter(Stage::Init, config.base_len);
        let base = BaseArray::generate(config.base_len, config.seed, config.value_bound)?;
        tracing::info!(
            len = base.len(),
            seed = config.seed,
            bound = config.value_bound,
            "Base array generated"
        );
        Self::with_base(base, config.sizes.clone())
    }

    /// Use a prepared base array. Every size must be non-zero and fit in it.
    pub fn with_base(base: BaseArray, sizes: Vec<usize>) -> Result<Self> {
        if let Some(&n) = sizes.iter().find(|&&n| n == 0 || n > base.len()) {
            return Err(BenchError::Config(format!(
                "size {} outside 1..={}",
                n,
                base.len()
            )));
        }
        Ok(Self { base, sizes })
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn base(&self) -> &BaseArray {
        &self.base
    }

    /// Measure all three algorithms for one size.
    pub fn run_size(&self, n: usize) -> Result<SizeReport> {
        enter(Stage::PerSizeSetup, n);
        let mut work = self.base.working_copy(n)?;

        enter(Stage::MeasureLinearSearch, n);
        let target = worst_case_target(&work);
        let (linear_index, linear) = measure(|| linear_search(&work, target));

        enter(Stage::MeasureBinarySearch, n);
        bubble_sort(&mut work);
        let target = worst_case_target(&work);
        let high = n - 1;
        let (binary_index, binary) = measure(|| binary_search(&work, 0, high, target));

        enter(Stage::MeasureBubbleSort, n);
        self.base.reset(&mut work);
        reverse(&mut work);
        let ((), bubble) = measure(|| bubble_sort(&mut work));

        Ok(SizeReport {
            n,
            linear,
            binary,
            bubble,
            linear_index,
            binary_index,
        })
    }

    /// Run every size in order, writing the CSV report to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<SizeReport>> {
        csv_io::write_header(out)?;

        let mut reports = Vec::with_capacity(self.sizes.len());
        for &n in &self.sizes {
            let report = self.run_size(n)?;

            enter(Stage::Emit, n);
            csv_io::write_row(out, &report)?;
            let (linear_s, binary_s, bubble_s) = report.seconds();
            tracing::info!(
                n,
                linear_s,
                binary_s,
                bubble_s,
                linear_index = ?report.linear_index,
                binary_index = ?report.binary_index,
                "Size measured"
            );
            reports.push(report);

            enter(Stage::NextSize, n);
        }

        enter(Stage::Done, self.sizes.len());
        Ok(reports)
    }
}

#[inline]
fn enter(stage: Stage, n: usize) {
    tracing::debug!(n, stage = %stage, "Stage");
}
