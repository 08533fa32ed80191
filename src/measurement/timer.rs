//! Monotonic elapsed-time capture.
//!
//! [`Timer`] wraps `std::time::Instant`: constructing one marks the start
//! instant, and the elapsed duration can be read any number of times without
//! resetting it. A new measurement requires a new instance.

use std::fmt;
use std::hint::black_box as std_black_box;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Wrapper around `std::hint::black_box` for preventing compiler optimizations.
///
/// Wrap the values a benchmarked action computes so the compiler cannot
/// delete the computation or reorder it relative to the timing reads.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std_black_box(x)
}

/// The length of a named period of time.
///
/// Pairs an elapsed [`Duration`] with a caller-given label so downstream
/// reporting can say what was measured. Produced by
/// [`Timer::named_elapsed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedDuration {
    /// What the measured period was called.
    pub name: String,
    /// How long it took.
    pub duration: Duration,
}

impl fmt::Display for NamedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            crate::output::pretty_duration(self.duration)
        )
    }
}

/// An easy way to get the time something took to execute.
///
/// Simply creating one starts the clock. There is no reset: the start
/// instant is fixed at construction and [`elapsed`](Timer::elapsed) may be
/// called repeatedly against it. Each instance is single-owner; the
/// underlying clock is safe to read from unrelated instances on any thread.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    began: Instant,
}

impl Timer {
    /// Mark the start instant and begin timing.
    pub fn start() -> Self {
        Self {
            began: Instant::now(),
        }
    }

    /// How long since this started.
    ///
    /// Idempotent: reading the elapsed time does not move the start instant.
    pub fn elapsed(&self) -> Duration {
        self.began.elapsed()
    }

    /// How long since this started, labeled for added meaning.
    pub fn named_elapsed(&self, name: impl Into<String>) -> NamedDuration {
        NamedDuration {
            name: name.into(),
            duration: self.elapsed(),
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::start()
    }
}
