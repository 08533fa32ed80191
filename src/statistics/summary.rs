//! Reduction of a timing series into an immutable benchmark summary.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the wall-clock span of a run comes from.
///
/// The drivers usually measure the whole run with an outer clock and pass
/// that span in; a derived summary (such as a zero-filtered copy) has no
/// meaningful outer span and sums its own series instead. An explicit
/// variant pair keeps a legitimately-zero measured span distinguishable from
/// "derive it for me".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallTime {
    /// The run's wall-clock span as measured by an external clock.
    Measured(Duration),
    /// No external measurement; use the sum of the series.
    SumOfSamples,
}

/// The set of numbers every benchmark driver returns.
///
/// This is a collection of statistics intended to get close to
/// deterministic answers out of an inherently noisy process. Asserting these
/// numbers directly against hard-coded values is a bad idea; instead
/// benchmark two things and assert something about their relative
/// performance. One useful test is that the 90th percentile of the faster
/// item beats the 10th percentile of the slower item, which removes much of
/// the impact of occasional performance interruptions
/// (see [`noise_robust_comparison`](crate::statistics::noise_robust_comparison)).
///
/// The closer the two performances, the less the percentiles diverge, so
/// compare relative percentiles rather than extremes.
///
/// Every field is computed once at construction; a summary is immutable
/// afterwards except for producing a new, independent summary via
/// [`without_zeroes`](BenchmarkResults::without_zeroes). Fields derived from
/// sample order are `None` for an empty series rather than some absurd
/// stand-in constant, so a zero-iteration result cannot be misread as a
/// real, slow measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkResults {
    /// How many times the timed item was executed.
    pub iterations: u64,
    /// Total active duration: the sum of the per-call measurements, with as
    /// much of the instrumentation overhead removed as possible.
    pub total: Duration,
    /// The span of the whole run as measured by an external clock. Includes
    /// loop and bookkeeping overhead, so it can exceed `total`; both are
    /// kept so that overhead is visible rather than hidden.
    pub wall_total: Duration,
    /// The mean execution time: `total` divided by `iterations`, zero for an
    /// empty series.
    pub average: Duration,
    /// The fastest (fewest nanoseconds) execution.
    pub fastest: Option<Duration>,
    /// The timing that beats out only 1 percent of the others at being fast.
    pub percentile_1: Option<Duration>,
    /// The timing that beats out 10 percent of the others at being fast.
    pub percentile_10: Option<Duration>,
    /// The execution time in the middle.
    pub median: Option<Duration>,
    /// The timing that beats out 90 percent of the others at being fast.
    pub percentile_90: Option<Duration>,
    /// The timing that beats out 99 percent of the others at being fast.
    pub percentile_99: Option<Duration>,
    /// The slowest (most nanoseconds) execution.
    pub slowest: Option<Duration>,

    /// The raw timings sorted ascending by value.
    sorted_timings: Vec<Duration>,
    /// The timings in temporal call order, kept to allow later study of
    /// warm-up and caching effects such as a first-call penalty.
    unsorted_timings: Vec<Duration>,
}

impl BenchmarkResults {
    /// Reduce a timing series into a summary.
    ///
    /// `timings` must be in temporal call order (index 0 = first call). The
    /// series is consumed; the summary owns both it and a stable-sorted
    /// copy. An empty series is legal and produces zero totals with every
    /// order-derived field unset.
    pub fn new(timings: Vec<Duration>, wall: WallTime) -> Self {
        let iterations = timings.len() as u64;
        let total: Duration = timings.iter().sum();
        let wall_total = match wall {
            WallTime::Measured(span) => span,
            WallTime::SumOfSamples => total,
        };

        // Integer nanosecond division; never a division fault on an empty
        // series.
        let average = if iterations == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos((total.as_nanos() / u128::from(iterations)) as u64)
        };

        let mut sorted_timings = timings.clone();
        // Stable sort: equal samples keep their temporal order.
        sorted_timings.sort();

        let mut results = Self {
            iterations,
            total,
            wall_total,
            average,
            fastest: None,
            percentile_1: None,
            percentile_10: None,
            median: None,
            percentile_90: None,
            percentile_99: None,
            slowest: None,
            sorted_timings,
            unsorted_timings: timings,
        };

        results.fastest = results.sorted_timings.first().copied();
        results.slowest = results.sorted_timings.last().copied();
        results.percentile_1 = results.duration_at_percentile(0.01);
        results.percentile_10 = results.duration_at_percentile(0.10);
        results.median = results.duration_at_percentile(0.50);
        results.percentile_90 = results.duration_at_percentile(0.90);
        results.percentile_99 = results.duration_at_percentile(0.99);

        results
    }

    /// The raw timings sorted ascending by value.
    pub fn sorted_timings(&self) -> &[Duration] {
        &self.sorted_timings
    }

    /// The raw timings in temporal call order.
    pub fn unsorted_timings(&self) -> &[Duration] {
        &self.unsorted_timings
    }

    /// Map a percentile fraction to an index into the sorted series.
    ///
    /// `percent = 0.0` selects the fastest entry and `percent = 1.0` the
    /// slowest; intermediate values scale linearly across
    /// `[0, iterations - 1]`. The rule is floor-then-clamp: the fraction is
    /// clamped into `[0.0, 1.0]`, scaled, floored, and the index clamped
    /// into range. Returns 0 for an empty series.
    pub fn index_of_percentile(&self, percent: f64) -> usize {
        if self.sorted_timings.is_empty() {
            return 0;
        }
        let last = self.sorted_timings.len() - 1;
        let scaled = percent.clamp(0.0, 1.0) * last as f64;
        (scaled.floor() as usize).min(last)
    }

    /// The sorted-series value at a percentile fraction.
    ///
    /// Uses [`index_of_percentile`](Self::index_of_percentile); `None` for
    /// an empty series.
    pub fn duration_at_percentile(&self, percent: f64) -> Option<Duration> {
        self.sorted_timings
            .get(self.index_of_percentile(percent))
            .copied()
    }

    /// Create a copy of this summary with none of the zero entries.
    ///
    /// A sample of exactly zero is a clock-resolution artifact, not a true
    /// zero-cost call. The copy is rebuilt from scratch out of the strictly
    /// positive entries, in their original temporal order, and sums them for
    /// its own wall total: the original externally measured span no longer
    /// corresponds to the filtered subset and must not be reused.
    pub fn without_zeroes(&self) -> Self {
        let filtered: Vec<Duration> = self
            .unsorted_timings
            .iter()
            .copied()
            .filter(|timing| *timing > Duration::ZERO)
            .collect();
        Self::new(filtered, WallTime::SumOfSamples)
    }
}
