//! Terminal output: human-readable durations and colored result blocks.

use std::time::Duration;

use colored::Colorize;

use crate::statistics::BenchmarkResults;

/// Unit boundaries for duration pretty-printing, largest first.
const UNITS: [(u64, &str); 6] = [
    (3_600_000_000_000, "h"),
    (60_000_000_000, "m"),
    (1_000_000_000, "s"),
    (1_000_000, "ms"),
    (1_000, "us"),
    (1, "ns"),
];

/// Render a duration as a human-readable string annotated with units.
///
/// A raw nanosecond count is preposterous for humans to grok, so the value
/// is broken into hours, minutes, seconds, milliseconds, microseconds, and
/// nanoseconds, skipping leading and zero components: 90,000,500 ns renders
/// as `"1m 30s 500ns"`. A zero duration renders as `"0ns"`.
pub fn pretty_duration(duration: Duration) -> String {
    let mut remainder = duration.as_nanos() as u64;
    if remainder == 0 {
        return "0ns".to_string();
    }

    let mut parts = Vec::new();
    for (size, suffix) in UNITS {
        let count = remainder / size;
        remainder %= size;
        if count > 0 {
            parts.push(format!("{count}{suffix}"));
        }
    }
    parts.join(" ")
}

/// Format a benchmark summary for human-readable terminal output.
///
/// Uses ANSI colors and a fixed layout; intended for the end-of-run console
/// report of a test harness.
pub fn format_results(results: &BenchmarkResults) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("microbench\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!("  Iterations: {}\n", results.iterations));
    output.push_str(&format!(
        "  Total:      {} (wall {})\n",
        pretty_duration(results.total),
        pretty_duration(results.wall_total)
    ));

    if results.iterations == 0 {
        output.push('\n');
        output.push_str(&format!(
            "  {}\n",
            "\u{26A0} No samples collected".yellow().bold()
        ));
        output.push('\n');
        output.push_str(&sep);
        output.push('\n');
        return output;
    }

    output.push_str(&format!(
        "  Average:    {}\n",
        pretty_duration(results.average)
    ));
    output.push('\n');

    output.push_str("  Percentiles (fastest to slowest):\n");
    for (label, mark) in [
        ("Fastest", results.fastest),
        ("1st", results.percentile_1),
        ("10th", results.percentile_10),
        ("Median", results.median),
        ("90th", results.percentile_90),
        ("99th", results.percentile_99),
        ("Slowest", results.slowest),
    ] {
        if let Some(duration) = mark {
            output.push_str(&format!(
                "    {:<8} {}\n",
                label,
                pretty_duration(duration).green()
            ));
        }
    }

    output.push('\n');
    output.push_str(&sep);
    output.push('\n');
    output.push_str(
        "Note: compare percentiles between two runs rather than asserting absolute values.\n",
    );

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::WallTime;

    #[test]
    fn test_pretty_duration_zero() {
        assert_eq!(pretty_duration(Duration::ZERO), "0ns");
    }

    #[test]
    fn test_pretty_duration_single_unit() {
        assert_eq!(pretty_duration(Duration::from_nanos(999)), "999ns");
        assert_eq!(pretty_duration(Duration::from_micros(3)), "3us");
        assert_eq!(pretty_duration(Duration::from_millis(12)), "12ms");
        assert_eq!(pretty_duration(Duration::from_secs(2)), "2s");
    }

    #[test]
    fn test_pretty_duration_compound() {
        assert_eq!(
            pretty_duration(Duration::from_nanos(90_000_000_500)),
            "1m 30s 500ns"
        );
        assert_eq!(
            pretty_duration(Duration::from_secs(3_661)),
            "1h 1m 1s"
        );
        assert_eq!(
            pretty_duration(Duration::from_nanos(1_002_003)),
            "1ms 2us 3ns"
        );
    }

    #[test]
    fn test_format_results_populated() {
        let results = BenchmarkResults::new(
            vec![
                Duration::from_nanos(5),
                Duration::from_nanos(1),
                Duration::from_nanos(3),
            ],
            WallTime::SumOfSamples,
        );
        let output = format_results(&results);
        assert!(output.contains("microbench"));
        assert!(output.contains("Iterations: 3"));
        assert!(output.contains("Median"));
    }

    #[test]
    fn test_format_results_empty() {
        let results = BenchmarkResults::new(Vec::new(), WallTime::SumOfSamples);
        let output = format_results(&results);
        assert!(output.contains("Iterations: 0"));
        assert!(output.contains("No samples collected"));
        assert!(!output.contains("Median"));
    }
}
