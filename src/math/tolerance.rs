//! Epsilon-aware scalar comparisons and small numeric helpers.
//!
//! `gt` and `lt` are tolerant in the inclusive direction: values within
//! the tolerance of the bound count as greater (or less).

use std::ops::Range;

use super::EPSILON;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
#[must_use]
pub fn eq(a: f64, b: f64) -> bool {
    eq_eps(a, b, EPSILON)
}

/// Returns true if `a` and `b` differ by less than `e`.
#[must_use]
pub fn eq_eps(a: f64, b: f64, e: f64) -> bool {
    (a - b).abs() < e
}

/// Tolerant "greater than or approximately equal" using [`EPSILON`].
#[must_use]
pub fn gt(a: f64, b: f64) -> bool {
    gt_eps(a, b, EPSILON)
}

/// Tolerant "greater than or approximately equal": `a > b - e`.
#[must_use]
pub fn gt_eps(a: f64, b: f64, e: f64) -> bool {
    a > b - e
}

/// Tolerant "less than or approximately equal" using [`EPSILON`].
#[must_use]
pub fn lt(a: f64, b: f64) -> bool {
    lt_eps(a, b, EPSILON)
}

/// Tolerant "less than or approximately equal": `a < b + e`.
#[must_use]
pub fn lt_eps(a: f64, b: f64, e: f64) -> bool {
    a < b + e
}

/// Euclidean length of `(x, y)`.
#[must_use]
pub fn length(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

/// The integers `0..n`. Empty for `n <= 0`.
#[must_use]
pub fn range(n: i64) -> Range<i64> {
    0..n.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_within_default_epsilon() {
        assert!(eq(1.0, 1.0 + 1e-7));
        assert!(!eq(1.0, 1.0 + 1e-5));
    }

    #[test]
    fn eq_is_strict_at_epsilon() {
        assert!(!eq_eps(0.0, 0.5, 0.5));
        assert!(eq_eps(0.0, 0.49, 0.5));
    }

    #[test]
    fn gt_accepts_values_just_below_bound() {
        assert!(gt(1.0, 1.0));
        assert!(gt(1.0 - 1e-7, 1.0));
        assert!(!gt(1.0 - 1e-5, 1.0));
        assert!(gt(2.0, 1.0));
    }

    #[test]
    fn lt_accepts_values_just_above_bound() {
        assert!(lt(1.0, 1.0));
        assert!(lt(1.0 + 1e-7, 1.0));
        assert!(!lt(1.0 + 1e-5, 1.0));
        assert!(lt(0.0, 1.0));
    }

    #[test]
    fn custom_epsilon() {
        assert!(gt_eps(0.9, 1.0, 0.2));
        assert!(lt_eps(1.1, 1.0, 0.2));
        assert!(!lt_eps(1.3, 1.0, 0.2));
    }

    #[test]
    fn length_of_3_4() {
        assert!((length(3.0, 4.0) - 5.0).abs() < 1e-12);
        assert!(length(0.0, 0.0).abs() < 1e-12);
    }

    #[test]
    fn range_counts_up_from_zero() {
        assert_eq!(range(4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn range_non_positive_is_empty() {
        assert_eq!(range(0).count(), 0);
        assert_eq!(range(-3).count(), 0);
    }
}
