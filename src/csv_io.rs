//! CSV I/O - timing report rows
//!
//! One header line, then one `N,linear,binary,bubble` row per test size with
//! seconds in six-decimal fixed point.

use std::io::Write;

use crate::error::{BenchError, Result};
use crate::perf::SizeReport;

pub const CSV_HEADER: &str = "N,Linear_Search_Time_s,Binary_Search_Time_s,Bubble_Sort_Time_s";

pub fn write_header<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", CSV_HEADER).map_err(BenchError::Output)?;
    out.flush().map_err(BenchError::Output)
}

/// Write and flush one row, so long runs show each size as it completes.
pub fn write_row<W: Write>(out: &mut W, report: &SizeReport) -> Result<()> {
    let (linear, binary, bubble) = report.seconds();
    writeln!(
        out,
        "{},{:.6},{:.6},{:.6}",
        report.n, linear, binary, bubble
    )
    .map_err(BenchError::Output)?;
    out.flush().map_err(BenchError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn report(n: usize, linear_us: u64, binary_ns: u64, bubble_ms: u64) -> SizeReport {
        SizeReport {
            n,
            linear: Duration::from_micros(linear_us),
            binary: Duration::from_nanos(binary_ns),
            bubble: Duration::from_millis(bubble_ms),
            linear_index: Some(n - 1),
            binary_index: Some(n - 1),
        }
    }

    #[test]
    fn test_header() {
        let mut out = Vec::new();
        write_header(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "N,Linear_Search_Time_s,Binary_Search_Time_s,Bubble_Sort_Time_s\n"
        );
    }

    #[test]
    fn test_row_format() {
        let mut out = Vec::new();
        write_row(&mut out, &report(1000, 2, 300, 1_234)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1000,0.000002,0.000000,1.234000\n");
    }

    #[test]
    fn test_row_rounds_to_six_places() {
        let mut out = Vec::new();
        let mut r = report(10, 0, 0, 0);
        r.linear = Duration::from_nanos(1_999_999);
        write_row(&mut out, &r).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "10,0.002000,0.000000,0.000000\n");
    }
}
