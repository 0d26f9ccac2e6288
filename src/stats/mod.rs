//! Reduction helpers over enrollment slices.
//!
//! Every reduction takes an explicit [`MissingValuePolicy`] describing how
//! absent cells participate. Printed figures go through [`truncate`], which
//! floors toward zero rather than rounding.

use itertools::Itertools;

/// How missing enrollment figures are treated in reductions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingValuePolicy {
    /// Missing cells are excluded from the reduction entirely; means divide
    /// by the count of present values
    #[default]
    IgnoreMissing,
    /// Missing cells become zero and participate normally
    TreatAsZero,
    /// Missing cells become zero, then zero values are filtered out before
    /// the reduction, so figures reflect only recorded attendance
    ZeroThenFilter,
}

/// Resolve a slice of optional cells into concrete values under a policy
#[must_use]
pub fn resolve(values: &[Option<u32>], policy: MissingValuePolicy) -> Vec<u32> {
    match policy {
        MissingValuePolicy::IgnoreMissing => values.iter().copied().flatten().collect(),
        MissingValuePolicy::TreatAsZero => values.iter().map(|v| v.unwrap_or(0)).collect(),
        MissingValuePolicy::ZeroThenFilter => values
            .iter()
            .map(|v| v.unwrap_or(0))
            .filter(|&v| v != 0)
            .collect(),
    }
}

/// Arithmetic mean of a slice, or `None` if no values remain after resolution
#[must_use]
pub fn mean(values: &[Option<u32>], policy: MissingValuePolicy) -> Option<f64> {
    let resolved = resolve(values, policy);
    if resolved.is_empty() {
        return None;
    }
    let total: u64 = resolved.iter().map(|&v| u64::from(v)).sum();
    Some(total as f64 / resolved.len() as f64)
}

/// Largest value in a slice, or `None` if no values remain after resolution
#[must_use]
pub fn max(values: &[Option<u32>], policy: MissingValuePolicy) -> Option<u32> {
    resolve(values, policy).into_iter().max()
}

/// Smallest value in a slice, or `None` if no values remain after resolution
#[must_use]
pub fn min(values: &[Option<u32>], policy: MissingValuePolicy) -> Option<u32> {
    resolve(values, policy).into_iter().min()
}

/// Sum of a slice under a policy; an empty resolved set sums to zero
#[must_use]
pub fn sum(values: &[Option<u32>], policy: MissingValuePolicy) -> u64 {
    resolve(values, policy).iter().map(|&v| u64::from(v)).sum()
}

/// Median of a slice, or `None` if no values remain after resolution
///
/// For an even number of values the median is the mean of the two middle
/// values.
#[must_use]
pub fn median(values: &[Option<u32>], policy: MissingValuePolicy) -> Option<f64> {
    let sorted: Vec<u32> = resolve(values, policy).into_iter().sorted_unstable().collect();
    median_of_sorted(&sorted)
}

/// Median over the resolved values strictly exceeding `threshold`
///
/// Returns `None` when no value in the slice qualifies; callers render that
/// as a fixed sentinel message rather than a figure.
#[must_use]
pub fn median_over(
    values: &[Option<u32>],
    threshold: u32,
    policy: MissingValuePolicy,
) -> Option<f64> {
    let sorted: Vec<u32> = resolve(values, policy)
        .into_iter()
        .filter(|&v| v > threshold)
        .sorted_unstable()
        .collect();
    median_of_sorted(&sorted)
}

fn median_of_sorted(sorted: &[u32]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(f64::from(sorted[mid]))
    } else {
        Some(f64::from(sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Truncate a reduction result toward zero for printing
///
/// This is the report's firm contract: 7.9 prints as 7 and 499.9 prints as
/// 499. Enrollment figures are non-negative, so truncation and floor agree.
#[must_use]
pub fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_ignores_missing() {
        let values = [Some(100), None, Some(200), None];
        assert_eq!(mean(&values, MissingValuePolicy::IgnoreMissing), Some(150.0));
    }

    #[test]
    fn test_mean_treat_as_zero_diverges() {
        let values = [Some(100), None, Some(200), None];
        assert_eq!(mean(&values, MissingValuePolicy::TreatAsZero), Some(75.0));
    }

    #[test]
    fn test_zero_then_filter_drops_zeros() {
        let values = [Some(0), None, Some(300)];
        assert_eq!(mean(&values, MissingValuePolicy::ZeroThenFilter), Some(300.0));
        assert_eq!(min(&values, MissingValuePolicy::ZeroThenFilter), Some(300));
    }

    #[test]
    fn test_mean_of_eight_year_slice() {
        let values: Vec<Option<u32>> = [100, 110, 120, 130, 140, 150, 160, 170]
            .into_iter()
            .map(Some)
            .collect();
        let mean = mean(&values, MissingValuePolicy::IgnoreMissing).unwrap();
        assert_eq!(truncate(mean), 135);
    }

    #[test]
    fn test_median_even_and_odd() {
        let odd = [Some(3), Some(1), Some(2)];
        assert_eq!(median(&odd, MissingValuePolicy::IgnoreMissing), Some(2.0));

        let even = [Some(4), Some(1), Some(3), Some(2)];
        assert_eq!(median(&even, MissingValuePolicy::IgnoreMissing), Some(2.5));
    }

    #[test]
    fn test_median_over_threshold() {
        let values = [Some(400), Some(501), Some(600), None, Some(700)];
        assert_eq!(
            median_over(&values, 500, MissingValuePolicy::IgnoreMissing),
            Some(600.0)
        );
        assert_eq!(
            median_over(&values, 800, MissingValuePolicy::IgnoreMissing),
            None
        );
    }

    #[test]
    fn test_truncate_floors_toward_zero() {
        assert_eq!(truncate(7.9), 7);
        assert_eq!(truncate(499.9), 499);
        assert_eq!(truncate(500.0), 500);
    }

    #[test]
    fn test_empty_resolution() {
        let values = [None, None];
        assert_eq!(mean(&values, MissingValuePolicy::IgnoreMissing), None);
        assert_eq!(median(&values, MissingValuePolicy::IgnoreMissing), None);
        assert_eq!(sum(&values, MissingValuePolicy::IgnoreMissing), 0);
    }
}
