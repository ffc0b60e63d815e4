use serde::{Deserialize, Serialize};

/// A half-open interval `[min, max)` that angles are folded into.
///
/// The bounds are swapped when they are given in the wrong order, so
/// `AngleRange::new(25.0, 5.0)` is the same range as `AngleRange::new(5.0, 25.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    min: f64,
    max: f64,
}

impl Default for AngleRange {
    fn default() -> Self {
        AngleRange::FULL_CIRCLE
    }
}

impl AngleRange {
    pub const FULL_CIRCLE: AngleRange = AngleRange {
        min: 0.0,
        max: 360.0,
    };

    pub fn new(min: f64, max: f64) -> Self {
        if min < max {
            AngleRange { min, max }
        } else {
            AngleRange { min: max, max: min }
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Folds `value` into `[min, max)` by adding or subtracting whole periods.
    ///
    /// NaN stays NaN. A degenerate range (`min == max`) always yields `min`.
    pub fn check_value(&self, value: f64) -> f64 {
        let period = self.max - self.min;
        if period == 0.0 {
            return self.min;
        }
        let folded = self.min + (value - self.min).rem_euclid(period);
        // rem_euclid may round up to the full period for values just below min
        if folded >= self.max {
            self.min
        } else {
            folded
        }
    }
}

/// Folds an angle into `[0, 360)`.
pub fn check_value(value: f64) -> f64 {
    AngleRange::FULL_CIRCLE.check_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const MARGIN: f64 = 1e-8;

    #[test]
    fn test_default_range() {
        assert_abs_diff_eq!(check_value(400.0), 40.0, epsilon = MARGIN);
        assert_abs_diff_eq!(check_value(750.0), 30.0, epsilon = MARGIN);
        assert_abs_diff_eq!(check_value(-30.0), 330.0, epsilon = MARGIN);
        assert_abs_diff_eq!(check_value(-1050.0), 30.0, epsilon = MARGIN);
    }

    #[test]
    fn test_custom_range() {
        let range = AngleRange::new(5.0, 25.0);
        assert_abs_diff_eq!(range.check_value(50.0), 10.0, epsilon = MARGIN);
    }

    #[test]
    fn test_swapped_bounds() {
        let range = AngleRange::new(25.0, 5.0);
        assert_eq!(range.min(), 5.0);
        assert_eq!(range.max(), 25.0);
        assert_abs_diff_eq!(range.check_value(50.0), 10.0, epsilon = MARGIN);
    }

    #[test]
    fn test_max_maps_to_min() {
        let range = AngleRange::new(5.0, 25.0);
        assert_abs_diff_eq!(range.check_value(25.0), 5.0, epsilon = MARGIN);
        assert_eq!(check_value(360.0), 0.0);
    }

    #[test]
    fn test_tiny_negative_stays_inside() {
        let value = check_value(-1e-20);
        assert!((0.0..360.0).contains(&value));
    }

    #[test]
    fn test_idempotent() {
        let ranges = [
            AngleRange::FULL_CIRCLE,
            AngleRange::new(-180.0, 180.0),
            AngleRange::new(25.0, 5.0),
        ];
        for range in ranges {
            for input in [-725.5, -360.0, -0.1, 0.0, 12.25, 179.9, 359.999, 720.0, 1e6] {
                let once = range.check_value(input);
                assert!(once >= range.min() && once < range.max(), "{} -> {}", input, once);
                assert_abs_diff_eq!(range.check_value(once), once, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_nan_passes_through() {
        assert!(check_value(f64::NAN).is_nan());
    }
}
