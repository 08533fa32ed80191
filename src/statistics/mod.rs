//! Statistical reduction of timing samples.
//!
//! This module turns the raw series a driver collects into an immutable
//! summary:
//! - Stable ascending sort alongside the preserved temporal order
//! - Extremes, average, median, and four percentile marks
//! - Zero-filtering of clock-resolution artifacts
//! - A percentile-overlap comparison for noise-robust A/B verdicts

mod compare;
mod summary;

pub use compare::{noise_robust_comparison, Comparison};
pub use summary::{BenchmarkResults, WallTime};
