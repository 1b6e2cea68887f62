//! Fixed-width binning for the AGB distribution histogram.
//!
//! Input is a bounded random pixel sample (see the client's sample pixel
//! budget), never the full raster population.

use serde_json::{json, Value};

/// Bin width in t/ha.
pub const BIN_WIDTH: f64 = 10.0;

/// Upper bound on the number of bins. A sample whose range would need more
/// is malformed (AGB is bounded far below this) and yields no bins instead
/// of an unbounded allocation.
pub const MAX_BINS: usize = 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Bin sample values into fixed-width intervals aligned to multiples of
/// `bin_width`. Non-finite values are skipped. An empty (or all-invalid)
/// sample, or one whose range exceeds [`MAX_BINS`] bins, yields no bins.
pub fn bin_values(values: &[f64], bin_width: f64) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bin_width <= 0.0 {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Bound the span in f64 before any integer cast; an extreme outlier
    // must degrade to "no histogram", not an overflowing allocation.
    let span = (max / bin_width).floor() - (min / bin_width).floor() + 1.0;
    if !(1.0..=MAX_BINS as f64).contains(&span) {
        return Vec::new();
    }
    let first = (min / bin_width).floor() as i64;

    let mut counts = vec![0usize; span as usize];
    for v in &finite {
        let idx = ((v / bin_width).floor() as i64 - first) as usize;
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let start = (first + i as i64) as f64 * bin_width;
            HistogramBin {
                start,
                end: start + bin_width,
                count,
            }
        })
        .collect()
}

/// Bins as the JSON shape the D3 histogram renderer expects.
pub fn to_chart_json(bins: &[HistogramBin]) -> Value {
    Value::Array(
        bins.iter()
            .map(|b| json!({ "x0": b.start, "x1": b.end, "count": b.count }))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_are_aligned_and_counted() {
        let bins = bin_values(&[1.0, 9.9, 10.0, 25.0], 10.0);
        assert_eq!(bins.len(), 3);
        assert_eq!(bins[0], HistogramBin { start: 0.0, end: 10.0, count: 2 });
        assert_eq!(bins[1], HistogramBin { start: 10.0, end: 20.0, count: 1 });
        assert_eq!(bins[2], HistogramBin { start: 20.0, end: 30.0, count: 1 });
    }

    #[test]
    fn interior_empty_bins_are_kept() {
        let bins = bin_values(&[5.0, 45.0], 10.0);
        assert_eq!(bins.len(), 5);
        assert_eq!(bins[1].count, 0);
        assert_eq!(bins[4].count, 1);
    }

    #[test]
    fn empty_and_non_finite_samples_yield_no_bins() {
        assert!(bin_values(&[], 10.0).is_empty());
        assert!(bin_values(&[f64::NAN, f64::INFINITY], 10.0).is_empty());
    }

    #[test]
    fn extreme_outlier_degrades_to_no_bins() {
        // A finite but absurd sample value must not blow up the bin count.
        assert!(bin_values(&[0.0, 1.0e300], 10.0).is_empty());
        assert!(bin_values(&[f64::MIN, f64::MAX], 10.0).is_empty());
        assert!(bin_values(&[0.0, (MAX_BINS as f64 + 1.0) * 10.0], 10.0).is_empty());
    }

    #[test]
    fn span_at_the_bin_cap_still_bins() {
        let top = (MAX_BINS as f64 - 1.0) * 10.0 + 5.0;
        let bins = bin_values(&[0.0, top], 10.0);
        assert_eq!(bins.len(), MAX_BINS);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[MAX_BINS - 1].count, 1);
    }

    #[test]
    fn chart_json_shape() {
        let bins = bin_values(&[3.0], 10.0);
        let json = to_chart_json(&bins);
        assert_eq!(json[0]["x0"], 0.0);
        assert_eq!(json[0]["x1"], 10.0);
        assert_eq!(json[0]["count"], 1);
    }
}
