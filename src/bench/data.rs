//! Base array generation and worst-case input shaping.

use crate::bench::rng::SeededRng;
use crate::error::{BenchError, Result};

/// Allocate an empty buffer with room for exactly `len` elements.
///
/// Allocation failure is reported instead of aborting the process.
pub fn try_alloc(len: usize) -> Result<Vec<i32>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| BenchError::Allocation { len })?;
    Ok(buf)
}

/// Generate `count` values uniformly drawn from `[0, bound)` with a fixed seed.
pub fn generate(count: usize, seed: i64, bound: i32) -> Result<Vec<i32>> {
    let mut rng = SeededRng::new(seed);
    let mut buf = try_alloc(count)?;
    buf.extend((0..count).map(|_| rng.next_below(bound)));
    Ok(buf)
}

/// Immutable source data shared by every test size.
#[derive(Debug)]
pub struct BaseArray {
    values: Vec<i32>,
}

impl BaseArray {
    pub fn generate(len: usize, seed: i64, bound: i32) -> Result<Self> {
        Ok(Self {
            values: generate(len, seed, bound)?,
        })
    }

    pub fn from_values(values: Vec<i32>) -> Self {
        Self { values }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First `n` values. Panics if `n > len()`.
    #[inline]
    pub fn prefix(&self, n: usize) -> &[i32] {
        &self.values[..n]
    }

    /// Fresh working copy of the first `n` values.
    pub fn working_copy(&self, n: usize) -> Result<Vec<i32>> {
        let mut buf = try_alloc(n)?;
        buf.extend_from_slice(self.prefix(n));
        Ok(buf)
    }

    /// Overwrite `work` with the unsorted prefix of the same length.
    pub fn reset(&self, work: &mut [i32]) {
        work.copy_from_slice(self.prefix(work.len()));
    }
}

/// Reverse in place by swapping symmetric pairs toward the center.
pub fn reverse(arr: &mut [i32]) {
    if arr.is_empty() {
        return;
    }
    let mut start = 0;
    let mut end = arr.len() - 1;
    while start < end {
        arr.swap(start, end);
        start += 1;
        end -= 1;
    }
}

/// Search target that forces the longest scan: the last element.
///
/// Panics on an empty slice.
#[inline]
pub fn worst_case_target(arr: &[i32]) -> i32 {
    arr[arr.len() - 1]
}
