//! Benchmark drivers: the three execution policies.
//!
//! Every driver runs the action synchronously on the calling thread and
//! records each call's individual duration into a series in call order. If
//! the action itself is blocking (sleep, I/O, lock acquisition) that time is
//! part of its measurement by design; there is no notion of idle vs active
//! time here.
//!
//! A panic inside the action propagates to the caller immediately and voids
//! the in-progress measurement; no partial result is produced.

use std::time::{Duration, Instant};

use crate::statistics::{BenchmarkResults, WallTime};

use super::timer::Timer;

/// Default series capacity hint for [`benchmark_for`].
///
/// Purely an allocation optimization: the series grows past this if the time
/// budget admits more iterations.
pub const DEFAULT_PREALLOCATION: usize = 1_000_000;

/// Time a single execution of an action.
///
/// The series has length 1 and the total, wall total, and every percentile
/// mark collapse to that one measurement.
///
/// # Example
///
/// ```
/// let results = microbench::benchmark_once(|| {
///     std::hint::black_box((0..32u64).product::<u64>());
/// });
/// assert_eq!(results.iterations, 1);
/// assert_eq!(results.fastest, results.slowest);
/// ```
pub fn benchmark_once<F>(mut action: F) -> BenchmarkResults
where
    F: FnMut(),
{
    let mut timings = Vec::with_capacity(1);

    let bench = Timer::start();
    action();
    timings.push(bench.elapsed());

    let wall = timings[0];
    BenchmarkResults::new(timings, WallTime::Measured(wall))
}

/// Run an action a fixed number of times, timing each call.
///
/// Each call's duration goes into the series in call order. Separately, the
/// whole loop is spanned by an outer wall measurement, so the result's
/// `wall_total` includes loop and bookkeeping overhead that the summed
/// per-call `total` does not; both are kept so instrumentation overhead is
/// visible rather than hidden.
///
/// `iterations == 0` is legal and yields an empty series with zero totals.
pub fn benchmark_iterations<F>(iterations: u32, mut action: F) -> BenchmarkResults
where
    F: FnMut(),
{
    let mut timings = Vec::with_capacity(iterations as usize);

    let run_start = Instant::now();
    // Sampled at the end of every call so the wall span never includes the
    // final push.
    let mut current = run_start;

    for _ in 0..iterations {
        let begin = Instant::now();
        action();
        current = Instant::now();
        timings.push(current - begin);
    }

    let wall = if iterations == 0 {
        WallTime::SumOfSamples
    } else {
        WallTime::Measured(current - run_start)
    };
    BenchmarkResults::new(timings, wall)
}

/// Run an action repeatedly until a minimum duration has elapsed.
///
/// Equivalent to [`benchmark_for_with_capacity`] with
/// [`DEFAULT_PREALLOCATION`] as the series capacity hint.
pub fn benchmark_for<F>(minimum: Duration, action: F) -> BenchmarkResults
where
    F: FnMut(),
{
    benchmark_for_with_capacity(minimum, DEFAULT_PREALLOCATION, action)
}

/// Run an action repeatedly until a minimum duration has elapsed, with an
/// explicit series capacity hint.
///
/// The continuation check happens before each iteration against the wall
/// clock sampled at the end of the previous one, so any `minimum > 0`
/// guarantees at least one execution. The run may overshoot `minimum` by up
/// to one iteration's duration; an in-flight call is never preempted, the
/// loop only stops scheduling further ones.
///
/// `capacity` pre-reserves storage for the series as an allocation
/// optimization; the series grows past it when the budget admits more
/// iterations.
pub fn benchmark_for_with_capacity<F>(
    minimum: Duration,
    capacity: usize,
    mut action: F,
) -> BenchmarkResults
where
    F: FnMut(),
{
    let mut timings = Vec::with_capacity(capacity);

    let run_start = Instant::now();
    let target = run_start + minimum;
    let mut current = Instant::now();

    while target >= current {
        let begin = Instant::now();
        action();
        current = Instant::now();
        timings.push(current - begin);
    }

    BenchmarkResults::new(timings, WallTime::Measured(current - run_start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::black_box;

    fn busy_work() {
        let mut acc = 0u64;
        for i in 0..64u64 {
            acc = acc.wrapping_mul(31).wrapping_add(i);
        }
        black_box(acc);
    }

    #[test]
    fn test_single_shot_one_sample() {
        let results = benchmark_once(busy_work);
        assert_eq!(results.iterations, 1);
        assert_eq!(results.unsorted_timings().len(), 1);
        assert_eq!(results.total, results.wall_total);
        assert_eq!(results.fastest, results.slowest);
        assert_eq!(results.fastest, results.median);
    }

    #[test]
    fn test_fixed_count_exact_series_length() {
        for n in [0u32, 1, 2, 7, 100] {
            let results = benchmark_iterations(n, busy_work);
            assert_eq!(results.iterations, u64::from(n));
            assert_eq!(results.unsorted_timings().len(), n as usize);
        }
    }

    #[test]
    fn test_fixed_count_zero_iterations_zero_totals() {
        let results = benchmark_iterations(0, busy_work);
        assert_eq!(results.total, Duration::ZERO);
        assert_eq!(results.wall_total, Duration::ZERO);
        assert_eq!(results.average, Duration::ZERO);
        assert_eq!(results.fastest, None);
        assert_eq!(results.slowest, None);
    }

    #[test]
    fn test_fixed_count_wall_covers_samples() {
        let results = benchmark_iterations(50, || {
            std::thread::sleep(Duration::from_micros(50));
        });
        // The outer span includes loop overhead the per-call sum does not.
        assert!(results.wall_total >= results.total);
    }

    #[test]
    fn test_series_is_in_call_order() {
        // First call sleeps much longer than the rest; it must stay at
        // index 0 of the unsorted series even though it is the slowest.
        let mut first = true;
        let results = benchmark_iterations(5, || {
            if first {
                first = false;
                std::thread::sleep(Duration::from_millis(20));
            }
        });
        let unsorted = results.unsorted_timings();
        assert!(unsorted[0] >= Duration::from_millis(20));
        assert_eq!(results.slowest, Some(unsorted[0]));
    }

    #[test]
    fn test_time_boxed_runs_at_least_once() {
        let minimum = Duration::from_millis(5);
        let results = benchmark_for(minimum, || {
            std::thread::sleep(Duration::from_millis(20));
        });
        assert!(results.iterations >= 1);
        assert!(results.wall_total >= minimum);
    }

    #[test]
    fn test_time_boxed_meets_budget() {
        let minimum = Duration::from_millis(20);
        let results = benchmark_for_with_capacity(minimum, 64, busy_work);
        assert!(results.iterations >= 1);
        assert!(results.wall_total >= minimum);
    }

    #[test]
    fn test_capacity_hint_is_only_a_hint() {
        // A capacity hint far smaller than the iteration count still
        // collects every sample.
        let results = benchmark_for_with_capacity(Duration::from_millis(10), 1, busy_work);
        assert!(results.iterations > 1);
    }

    #[test]
    #[should_panic(expected = "action failed")]
    fn test_action_panic_propagates() {
        let _ = benchmark_iterations(3, || panic!("action failed"));
    }
}
