//! Case resolution for min/max range filters.

use super::values::ScalarValue;

/// Which predicate shape a min/max pair resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinMaxCase {
    /// Both bounds present and different: closed range (`>= min AND <= max`)
    BothDistinct,
    /// Only the lower bound present (`>= min`)
    OnlyMin,
    /// Only the upper bound present (`<= max`)
    OnlyMax,
    /// Both bounds present and equal: collapsed to a single equality
    /// predicate, which is simpler and more index-friendly than the
    /// degenerate `>= x AND <= x` range
    BothEqual,
}

/// Resolves the predicate shape for a min/max pair.
///
/// Returns `None` when neither bound is present (no predicate to emit).
/// Equality between the bounds uses the value's native equality.
#[must_use]
pub fn resolve(min: Option<&ScalarValue>, max: Option<&ScalarValue>) -> Option<MinMaxCase> {
    match (min, max) {
        (Some(min), Some(max)) if min == max => Some(MinMaxCase::BothEqual),
        (Some(_), Some(_)) => Some(MinMaxCase::BothDistinct),
        (Some(_), None) => Some(MinMaxCase::OnlyMin),
        (None, Some(_)) => Some(MinMaxCase::OnlyMax),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_present_distinct() {
        let min = ScalarValue::from(5);
        let max = ScalarValue::from(10);
        assert_eq!(resolve(Some(&min), Some(&max)), Some(MinMaxCase::BothDistinct));
    }

    #[test]
    fn test_only_min() {
        let min = ScalarValue::from(5);
        assert_eq!(resolve(Some(&min), None), Some(MinMaxCase::OnlyMin));
    }

    #[test]
    fn test_only_max() {
        let max = ScalarValue::from(10);
        assert_eq!(resolve(None, Some(&max)), Some(MinMaxCase::OnlyMax));
    }

    #[test]
    fn test_both_present_equal() {
        let min = ScalarValue::from(5);
        let max = ScalarValue::from(5);
        assert_eq!(resolve(Some(&min), Some(&max)), Some(MinMaxCase::BothEqual));
    }

    #[test]
    fn test_neither_present() {
        assert_eq!(resolve(None, None), None);
    }

    #[test]
    fn test_equality_does_not_cross_types() {
        // An integer bound and a float bound are never "equal", so they
        // resolve to a closed range rather than a collapsed equality.
        let min = ScalarValue::from(5);
        let max = ScalarValue::from(5.0);
        assert_eq!(resolve(Some(&min), Some(&max)), Some(MinMaxCase::BothDistinct));
    }

    #[test]
    fn test_string_bounds_compare_by_content() {
        let min = ScalarValue::from("a");
        let max = ScalarValue::from("a");
        assert_eq!(resolve(Some(&min), Some(&max)), Some(MinMaxCase::BothEqual));
    }
}
