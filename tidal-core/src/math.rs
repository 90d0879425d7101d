//! Trigonometry over degree arguments.
//!
//! Every angle in the workspace is carried in degrees, so the usual
//! radian-argument functions are wrapped once here instead of sprinkling
//! conversion factors through the formulas.

use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

#[inline]
pub fn sind(degrees: f64) -> f64 {
    libm::sin(degrees * DEG_TO_RAD)
}

#[inline]
pub fn cosd(degrees: f64) -> f64 {
    libm::cos(degrees * DEG_TO_RAD)
}

#[inline]
pub fn tand(degrees: f64) -> f64 {
    libm::tan(degrees * DEG_TO_RAD)
}

#[inline]
pub fn cotd(degrees: f64) -> f64 {
    1.0 / tand(degrees)
}

/// Arc sine in degrees. The argument must lie in [-1, 1].
#[inline]
pub fn asind(x: f64) -> f64 {
    assert!((-1.0..=1.0).contains(&x), "asind argument {x} outside [-1, 1]");
    libm::asin(x) * RAD_TO_DEG
}

/// Arc cosine in degrees. The argument must lie in [-1, 1].
#[inline]
pub fn acosd(x: f64) -> f64 {
    assert!((-1.0..=1.0).contains(&x), "acosd argument {x} outside [-1, 1]");
    libm::acos(x) * RAD_TO_DEG
}

/// Two-argument arc tangent in degrees, resolving the quadrant from the
/// signs of both arguments.
#[inline]
pub fn atan2d(y: f64, x: f64) -> f64 {
    libm::atan2(y, x) * RAD_TO_DEG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sind_cosd_cardinal_points() {
        assert!((sind(90.0) - 1.0).abs() < 1e-15);
        assert!(sind(180.0).abs() < 1e-15);
        assert!((cosd(0.0) - 1.0).abs() < 1e-15);
        assert!(cosd(90.0).abs() < 1e-15);
        assert!((cosd(180.0) + 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_tand_cotd_reciprocal() {
        let t = tand(30.0);
        assert!((cotd(30.0) - 1.0 / t).abs() < 1e-15);
        assert!((tand(45.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_inverse_functions() {
        assert!((asind(1.0) - 90.0).abs() < 1e-12);
        assert!((acosd(0.0) - 90.0).abs() < 1e-12);
        assert!((atan2d(1.0, 0.0) - 90.0).abs() < 1e-12);
        assert!((atan2d(-1.0, 0.0) + 90.0).abs() < 1e-12);
        // atan2d resolves the quadrant that single-argument atan cannot
        assert!((atan2d(1.0, -1.0) - 135.0).abs() < 1e-12);
    }

    #[test]
    fn test_fmod_keeps_dividend_sign() {
        assert_eq!(fmod(-1.0, 360.0), -1.0);
        assert_eq!(fmod(361.0, 360.0), 1.0);
    }

    #[test]
    #[should_panic(expected = "asind argument")]
    fn test_asind_rejects_out_of_domain() {
        asind(1.0000001);
    }
}
