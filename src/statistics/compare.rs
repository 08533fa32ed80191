//! Noise-robust comparison of two benchmark summaries.

use serde::{Deserialize, Serialize};

use super::summary::BenchmarkResults;

/// Verdict of a percentile-overlap comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    /// The candidate's slow tail still beats the baseline's fast tail.
    Faster,
    /// The baseline's slow tail still beats the candidate's fast tail.
    Slower,
    /// The percentile bands overlap; no verdict at this noise level.
    Indistinguishable,
}

/// Compare two summaries by percentile overlap rather than extremes.
///
/// The candidate counts as faster only when its 90th percentile beats the
/// baseline's 10th percentile (and symmetrically for slower). Requiring the
/// bands to clear each other filters out the occasional scheduling
/// interruption that would corrupt a pure min or mean comparison; when the
/// two performances are close the bands overlap and the verdict is
/// [`Comparison::Indistinguishable`], which is also the answer whenever
/// either summary is empty.
///
/// # Example
///
/// ```
/// use microbench::{benchmark_iterations, noise_robust_comparison, Comparison};
///
/// let slow = benchmark_iterations(200, || {
///     std::thread::sleep(std::time::Duration::from_micros(300));
/// });
/// let fast = benchmark_iterations(200, || {
///     std::hint::black_box(1u64 + 1);
/// });
///
/// assert_eq!(noise_robust_comparison(&fast, &slow), Comparison::Faster);
/// ```
pub fn noise_robust_comparison(
    candidate: &BenchmarkResults,
    baseline: &BenchmarkResults,
) -> Comparison {
    let (Some(candidate_p90), Some(candidate_p10)) =
        (candidate.percentile_90, candidate.percentile_10)
    else {
        return Comparison::Indistinguishable;
    };
    let (Some(baseline_p90), Some(baseline_p10)) = (baseline.percentile_90, baseline.percentile_10)
    else {
        return Comparison::Indistinguishable;
    };

    if candidate_p90 < baseline_p10 {
        Comparison::Faster
    } else if candidate_p10 > baseline_p90 {
        Comparison::Slower
    } else {
        Comparison::Indistinguishable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::WallTime;
    use std::time::Duration;

    fn summary(values: &[u64]) -> BenchmarkResults {
        BenchmarkResults::new(
            values.iter().copied().map(Duration::from_nanos).collect(),
            WallTime::SumOfSamples,
        )
    }

    #[test]
    fn test_clearly_faster() {
        let fast = summary(&[10, 11, 12, 13, 14, 15, 16, 17, 18, 19]);
        let slow = summary(&[100, 110, 120, 130, 140, 150, 160, 170, 180, 190]);
        assert_eq!(noise_robust_comparison(&fast, &slow), Comparison::Faster);
        assert_eq!(noise_robust_comparison(&slow, &fast), Comparison::Slower);
    }

    #[test]
    fn test_overlapping_bands() {
        let a = summary(&[10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        let b = summary(&[15, 25, 35, 45, 55, 65, 75, 85, 95, 105]);
        assert_eq!(
            noise_robust_comparison(&a, &b),
            Comparison::Indistinguishable
        );
    }

    #[test]
    fn test_one_wild_outlier_does_not_flip_verdict() {
        // The fast series has a single slow outlier at its very top; the
        // 90th percentile still sits in the fast band, so a min/max
        // comparison would waver but the percentile one does not.
        let fast = summary(&[10, 10, 11, 11, 12, 12, 13, 13, 14, 5_000]);
        let slow = summary(&[
            1_000, 1_010, 1_020, 1_030, 1_040, 1_050, 1_060, 1_070, 1_080, 1_090,
        ]);
        assert_eq!(noise_robust_comparison(&fast, &slow), Comparison::Faster);
    }

    #[test]
    fn test_empty_summary_is_indistinguishable() {
        let empty = summary(&[]);
        let populated = summary(&[5, 6, 7]);
        assert_eq!(
            noise_robust_comparison(&empty, &populated),
            Comparison::Indistinguishable
        );
        assert_eq!(
            noise_robust_comparison(&populated, &empty),
            Comparison::Indistinguishable
        );
    }
}
