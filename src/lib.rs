//! # microbench
//!
//! Time a zero-argument action across one, many, or "as many as fit in a
//! time budget" repetitions, then reduce the raw samples into a percentile
//! summary that tolerates system noise better than naive min/mean checks.
//!
//! This crate is the timing-capture and statistics-aggregation engine of a
//! unit-test harness: it produces numbers, the surrounding framework decides
//! pass/warn/fail. Raw wall-clock measurements are subject to scheduler
//! jitter, cache effects, and thermal throttling, so comparing two results
//! against each other by percentile is far more stable than comparing either
//! against a hard-coded constant.
//!
//! ## ⚠️ Common Pitfall: Optimized-Away Work
//!
//! The action you hand to the drivers takes no arguments and returns
//! nothing, so the compiler is free to delete a pure computation entirely.
//! Route the values you compute through [`black_box`] to keep the work
//! observable:
//!
//! ```
//! use microbench::{benchmark_iterations, black_box};
//!
//! let results = benchmark_iterations(1_000, || {
//!     let mut acc = 0u64;
//!     for i in 0..100u64 {
//!         acc = acc.wrapping_add(i);
//!     }
//!     black_box(acc);
//! });
//! assert_eq!(results.iterations, 1_000);
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use microbench::benchmark_for;
//!
//! // Run the action repeatedly for at least 50 milliseconds.
//! let results = benchmark_for(Duration::from_millis(50), || {
//!     std::hint::black_box((0..64u64).sum::<u64>());
//! });
//!
//! println!("{} iterations, median {:?}", results.iterations, results.median);
//! ```
//!
//! ## Comparing Two Algorithms
//!
//! Only in the most extraordinary circumstances will the slowest run of a
//! fast algorithm be slower than the fastest run of a slow one, so compare
//! relative percentiles instead of extremes: if the 90th percentile of one
//! candidate beats the 10th percentile of the other, occasional scheduling
//! interruptions stop mattering. See [`statistics::noise_robust_comparison`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod measurement;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use measurement::{
    benchmark_for, benchmark_for_with_capacity, benchmark_iterations, benchmark_once, black_box,
    NamedDuration, Timer, DEFAULT_PREALLOCATION,
};
pub use statistics::{noise_robust_comparison, BenchmarkResults, Comparison, WallTime};

/// Convenience alias for the single-shot driver.
///
/// Runs `action` exactly once and returns a one-sample summary; see
/// [`measurement::benchmark_once`] for the full contract.
pub fn benchmark<F>(action: F) -> BenchmarkResults
where
    F: FnMut(),
{
    benchmark_once(action)
}
