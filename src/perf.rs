//! Performance Metrics - single-shot timing of measured calls
//!
//! Each algorithm run is timed exactly once; there is no warm-up or averaging.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Time a single call of `f`.
///
/// The clock is sampled immediately around the call. The result is passed
/// through `black_box` so the work cannot be optimized away.
#[inline(never)]
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = black_box(f());
    let elapsed = start.elapsed();
    (result, elapsed)
}

/// Timings and search results for one test size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeReport {
    pub n: usize,
    pub linear: Duration,
    pub binary: Duration,
    pub bubble: Duration,
    /// Index returned by the linear search
    pub linear_index: Option<usize>,
    /// Index returned by the binary search on the sorted copy
    pub binary_index: Option<usize>,
}

impl SizeReport {
    /// (linear, binary, bubble) in seconds.
    pub fn seconds(&self) -> (f64, f64, f64) {
        (
            self.linear.as_secs_f64(),
            self.binary.as_secs_f64(),
            self.bubble.as_secs_f64(),
        )
    }

    pub fn total(&self) -> Duration {
        self.linear + self.binary + self.bubble
    }
}
