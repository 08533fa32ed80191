//! Measurement infrastructure: the monotonic timer and the benchmark drivers.
//!
//! This module provides:
//! - A monotonic [`Timer`] that marks its start instant at construction
//! - Three synchronous benchmark drivers (single-shot, fixed-count,
//!   time-boxed) that collect a temporally ordered series of per-call
//!   durations
//!
//! # Clock Source
//!
//! All timing uses `std::time::Instant`, the platform's monotonic clock:
//! - **Linux**: `clock_gettime(CLOCK_MONOTONIC)`, ~1ns resolution
//! - **macOS**: `mach_absolute_time` (~41ns granularity on Apple Silicon)
//! - **Windows**: `QueryPerformanceCounter`
//!
//! On coarse-grained clocks, very short actions can measure as exactly zero;
//! [`crate::BenchmarkResults::without_zeroes`] exists to discard those
//! resolution artifacts after the fact.

mod driver;
mod timer;

pub use driver::{
    benchmark_for, benchmark_for_with_capacity, benchmark_iterations, benchmark_once,
    DEFAULT_PREALLOCATION,
};
pub use timer::{black_box, NamedDuration, Timer};
