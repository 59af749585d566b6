//! Range validation for raw coordinate text.

use crate::types::{Axis, RangeError};

/// Maximum absolute value a coordinate component may take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationRange {
    limit: f64,
}

impl ValidationRange {
    pub const LATITUDE: ValidationRange = ValidationRange { limit: 90.0 };
    pub const LONGITUDE: ValidationRange = ValidationRange { limit: 180.0 };

    pub fn new(limit: f64) -> Result<Self, RangeError> {
        if !limit.is_finite() || limit <= 0.0 {
            return Err(RangeError::InvalidLimit(limit));
        }
        Ok(Self { limit })
    }

    pub fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::Latitude => Self::LATITUDE,
            Axis::Longitude => Self::LONGITUDE,
        }
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value.abs() <= self.limit
    }
}

/// Decides whether a text snapshot holds a coordinate within `[-limit, limit]`.
///
/// Anything that does not parse, or parses to NaN or an infinity, is simply
/// invalid. Input is not trimmed, so `" 45"` is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateFieldValidator {
    range: ValidationRange,
}

impl CoordinateFieldValidator {
    pub fn new(range: ValidationRange) -> Self {
        Self { range }
    }

    pub fn latitude() -> Self {
        Self::new(ValidationRange::LATITUDE)
    }

    pub fn longitude() -> Self {
        Self::new(ValidationRange::LONGITUDE)
    }

    pub fn for_axis(axis: Axis) -> Self {
        Self::new(ValidationRange::for_axis(axis))
    }

    pub fn limit(&self) -> f64 {
        self.range.limit()
    }

    pub fn validate(&self, text: Option<&str>) -> bool {
        self.parse(text).is_some()
    }

    /// Returns the accepted value, or `None` when `validate` would be false.
    pub fn parse(&self, text: Option<&str>) -> Option<f64> {
        let value: f64 = text?.parse().ok()?;
        self.range.contains(value).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_are_invalid() {
        for limit in [0.5, 90.0, 180.0, 1e6] {
            let v = CoordinateFieldValidator::new(ValidationRange::new(limit).unwrap());
            assert!(!v.validate(None));
            assert!(!v.validate(Some("")));
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let lat = CoordinateFieldValidator::latitude();
        assert!(lat.validate(Some("90")));
        assert!(lat.validate(Some("-90")));
        assert!(lat.validate(Some("90.0")));
        assert!(!lat.validate(Some("90.0001")));
        assert!(!lat.validate(Some("-90.0001")));

        let lon = CoordinateFieldValidator::longitude();
        assert!(lon.validate(Some("180")));
        assert!(lon.validate(Some("-180")));
        assert!(!lon.validate(Some("180.5")));
    }

    #[test]
    fn test_values_inside_and_outside_limit() {
        let lat = CoordinateFieldValidator::latitude();
        for x in [-89.999, -45.0, -0.0, 0.0, 1e-9, 12.5, 89.9] {
            assert!(lat.validate(Some(&x.to_string())), "{} should pass", x);
        }
        for x in [-1000.0, -90.5, 91.0, 1e300] {
            assert!(!lat.validate(Some(&x.to_string())), "{} should fail", x);
        }
    }

    #[test]
    fn test_non_numeric_is_invalid() {
        let lat = CoordinateFieldValidator::latitude();
        assert!(!lat.validate(Some("abc")));
        assert!(!lat.validate(Some("45°")));
        assert!(!lat.validate(Some("4 5")));
        assert!(!lat.validate(Some("-")));
    }

    #[test]
    fn test_non_finite_is_invalid() {
        let lon = CoordinateFieldValidator::longitude();
        assert!(!lon.validate(Some("NaN")));
        assert!(!lon.validate(Some("inf")));
        assert!(!lon.validate(Some("-infinity")));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let lat = CoordinateFieldValidator::latitude();
        assert!(!lat.validate(Some(" 45")));
        assert!(!lat.validate(Some("45 ")));
    }

    #[test]
    fn test_exponent_notation_accepted() {
        let lat = CoordinateFieldValidator::latitude();
        assert_eq!(lat.parse(Some("4.5e1")), Some(45.0));
        assert!(!lat.validate(Some("1e2")));
    }

    #[test]
    fn test_parse_returns_value() {
        let lon = CoordinateFieldValidator::longitude();
        assert_eq!(lon.parse(Some("-120.25")), Some(-120.25));
        assert_eq!(lon.parse(Some("200")), None);
    }

    #[test]
    fn test_invalid_limits_rejected() {
        assert_eq!(ValidationRange::new(0.0), Err(RangeError::InvalidLimit(0.0)));
        assert!(ValidationRange::new(-5.0).is_err());
        assert!(ValidationRange::new(f64::NAN).is_err());
        assert!(ValidationRange::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_axis_factory() {
        assert_eq!(CoordinateFieldValidator::for_axis(Axis::Latitude).limit(), 90.0);
        assert_eq!(CoordinateFieldValidator::for_axis(Axis::Longitude).limit(), 180.0);
    }
}
