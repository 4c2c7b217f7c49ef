//! Axis bounds that either track the viewport or stay pinned by the user.

use std::fmt;

/// Plot axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// One side of a [`DynamicRange`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Follows the viewport; `None` until the first viewport update.
    Dynamic(Option<f64>),
    /// Pinned by explicit user configuration.
    Fixed(f64),
}

impl Bound {
    /// Current value of the bound, if any.
    pub fn value(&self) -> Option<f64> {
        match *self {
            Self::Dynamic(value) => value,
            Self::Fixed(value) => Some(value),
        }
    }

    /// Check whether the bound follows the viewport.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }

    fn track(&mut self, value: f64) {
        if let Self::Dynamic(slot) = self {
            *slot = Some(value);
        }
    }
}

impl Default for Bound {
    fn default() -> Self {
        Self::Dynamic(None)
    }
}

/// Axis bound pair used to drive sampling and clip samples.
///
/// Callers must not pin `min` above `max`. Such a range is degenerate and
/// matches no value; it is not reordered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DynamicRange {
    /// Lower bound.
    pub min: Bound,
    /// Upper bound.
    pub max: Bound,
}

impl DynamicRange {
    /// Create a range from two bounds.
    pub fn new(min: Bound, max: Bound) -> Self {
        Self { min, max }
    }

    /// Fully viewport-tracking range with no values yet.
    pub fn dynamic() -> Self {
        Self::default()
    }

    /// Range pinned at both ends.
    pub fn fixed(min: f64, max: f64) -> Self {
        Self::new(Bound::Fixed(min), Bound::Fixed(max))
    }

    /// Overwrite the dynamic bounds with viewport values.
    ///
    /// Fixed bounds are left untouched.
    pub fn update(&mut self, min: f64, max: f64) {
        self.min.track(min);
        self.max.track(max);
    }

    /// Current lower bound value.
    pub fn min_value(&self) -> Option<f64> {
        self.min.value()
    }

    /// Current upper bound value.
    pub fn max_value(&self) -> Option<f64> {
        self.max.value()
    }

    /// Check a value against the bounds that are present.
    ///
    /// NaN is never in range unless both bounds are absent.
    pub fn in_range(&self, value: f64) -> bool {
        match (self.min_value(), self.max_value()) {
            (None, None) => true,
            (None, Some(max)) => value <= max,
            (Some(min), None) => value >= min,
            (Some(min), Some(max)) => min <= value && value <= max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{QuickCheck, TestResult};

    #[test]
    fn in_range_truth_table() {
        let open = DynamicRange::dynamic();
        assert!(open.in_range(-1e300));
        assert!(open.in_range(1e300));

        let upper = DynamicRange::new(Bound::Dynamic(None), Bound::Fixed(1.0));
        assert!(upper.in_range(-50.0));
        assert!(upper.in_range(1.0));
        assert!(!upper.in_range(1.5));

        let lower = DynamicRange::new(Bound::Fixed(-1.0), Bound::Dynamic(None));
        assert!(lower.in_range(50.0));
        assert!(lower.in_range(-1.0));
        assert!(!lower.in_range(-1.5));

        let both = DynamicRange::fixed(-1.0, 1.0);
        assert!(both.in_range(0.0));
        assert!(both.in_range(-1.0));
        assert!(both.in_range(1.0));
        assert!(!both.in_range(-1.01));
        assert!(!both.in_range(1.01));
    }

    #[test]
    fn nan_is_out_of_any_bounded_range() {
        assert!(!DynamicRange::fixed(-1.0, 1.0).in_range(f64::NAN));
        assert!(!DynamicRange::new(Bound::Fixed(0.0), Bound::Dynamic(None)).in_range(f64::NAN));
        assert!(!DynamicRange::new(Bound::Dynamic(None), Bound::Fixed(0.0)).in_range(f64::NAN));
    }

    #[test]
    fn update_only_touches_dynamic_bounds() {
        let mut range = DynamicRange::new(Bound::Fixed(-2.0), Bound::Dynamic(None));
        range.update(-10.0, 10.0);
        assert_eq!(range.min, Bound::Fixed(-2.0));
        assert_eq!(range.max, Bound::Dynamic(Some(10.0)));

        range.update(-5.0, 5.0);
        assert_eq!(range.min_value(), Some(-2.0));
        assert_eq!(range.max_value(), Some(5.0));
    }

    #[test]
    fn inverted_fixed_range_matches_nothing() {
        let range = DynamicRange::fixed(1.0, -1.0);
        assert!(!range.in_range(0.0));
        assert!(!range.in_range(1.0));
        assert!(!range.in_range(-1.0));
    }

    #[test]
    fn fixed_range_survives_any_update() {
        fn prop(lo: f64, hi: f64, a: f64, b: f64) -> TestResult {
            if !(lo.is_finite() && hi.is_finite()) {
                return TestResult::discard();
            }
            let mut range = DynamicRange::fixed(lo, hi);
            range.update(a, b);
            TestResult::from_bool(range == DynamicRange::fixed(lo, hi))
        }
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop as fn(f64, f64, f64, f64) -> TestResult);
    }
}
