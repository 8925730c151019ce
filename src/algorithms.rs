//! Search and sort routines under test.
//!
//! Searches return `None` where a C-style API would return `-1`.

/// Index of the first element equal to `target`, scanning from the front.
pub fn linear_search(arr: &[i32], target: i32) -> Option<usize> {
    for (i, &v) in arr.iter().enumerate() {
        if v == target {
            return Some(i);
        }
    }
    None
}

/// Bisect the inclusive range `[low, high]` of an ascending slice.
///
/// Returns the index of some element equal to `target`. Panics if `high` is out
/// of bounds while `low <= high`.
pub fn binary_search(arr: &[i32], mut low: usize, mut high: usize, target: i32) -> Option<usize> {
    while low <= high {
        let mid = low + (high - low) / 2;
        let v = arr[mid];
        if v == target {
            return Some(mid);
        }
        if v < target {
            low = mid + 1;
        } else {
            // mid == 0 means the range is exhausted below.
            if mid == 0 {
                return None;
            }
            high = mid - 1;
        }
    }
    None
}

/// Ascending in-place bubble sort.
///
/// Always runs all `n - 1` passes; there is no early exit on a swap-free pass,
/// so sorted input costs the same comparisons as reversed input.
pub fn bubble_sort(arr: &mut [i32]) {
    let n = arr.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
}
