//! Trigonometric functions working in decimal degrees.

#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians.to_degrees()
}

pub fn sin(degrees: f64) -> f64 {
    deg_to_rad(degrees).sin()
}

pub fn cos(degrees: f64) -> f64 {
    deg_to_rad(degrees).cos()
}

pub fn tan(degrees: f64) -> f64 {
    deg_to_rad(degrees).tan()
}

/// Arcsine, result in degrees.
pub fn asin(value: f64) -> f64 {
    rad_to_deg(value.asin())
}

/// Arccosine, result in degrees.
pub fn acos(value: f64) -> f64 {
    rad_to_deg(value.acos())
}

/// Arctangent, result in degrees.
pub fn atan(value: f64) -> f64 {
    rad_to_deg(value.atan())
}

/// Four-quadrant arctangent of `y / x`, result in degrees within `(-180, 180]`.
pub fn atan2(y: f64, x: f64) -> f64 {
    rad_to_deg(y.atan2(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const MARGIN: f64 = 1e-8;

    #[test]
    fn test_forward_functions() {
        assert_abs_diff_eq!(sin(30.0), 0.5, epsilon = MARGIN);
        assert_abs_diff_eq!(cos(60.0), 0.5, epsilon = MARGIN);
        assert_abs_diff_eq!(tan(45.0), 1.0, epsilon = MARGIN);
        assert_abs_diff_eq!(sin(270.0), -1.0, epsilon = MARGIN);
    }

    #[test]
    fn test_inverse_functions() {
        assert_abs_diff_eq!(asin(0.5), 30.0, epsilon = MARGIN);
        assert_abs_diff_eq!(acos(0.5), 60.0, epsilon = MARGIN);
        assert_abs_diff_eq!(atan(1.0), 45.0, epsilon = MARGIN);
    }

    #[test]
    fn test_atan2_quadrants() {
        assert_abs_diff_eq!(atan2(1.0, 1.0), 45.0, epsilon = MARGIN);
        assert_abs_diff_eq!(atan2(1.0, -1.0), 135.0, epsilon = MARGIN);
        assert_abs_diff_eq!(atan2(-1.0, -1.0), -135.0, epsilon = MARGIN);
        assert_abs_diff_eq!(atan2(-1.0, 1.0), -45.0, epsilon = MARGIN);
    }

    #[test]
    fn test_out_of_domain_is_nan() {
        assert!(asin(1.5).is_nan());
        assert!(acos(-2.0).is_nan());
    }
}
