//! Auxiliary angles of the lunar orbit.
//!
//! Schureman's Figure 1 relates the celestial equator, the ecliptic, and
//! the moon's orbit through a spherical triangle whose one known side is
//! N, the longitude of the moon's ascending node. Everything else — the
//! inclination I of the orbit to the equator, the arcs ν and ξ along
//! equator and orbit, the composite angles ν′ and 2ν″ used by K₁ and K₂,
//! and the P-dependent quantities for M₁ and L₂ — falls out of standard
//! spherical-trig identities applied to that triangle.
//!
//! I stays within [ω − i, ω + i], about 18° to 29°, so sin I and cos I are
//! both positive and the square-root branch of the Pythagorean identity is
//! safe; ν stays within ±13.02°, so the same holds for cos ν. Where a
//! source formula determines an angle only up to quadrant, the
//! two-argument arc tangent settles it.
//!
//! All arguments and results are degrees.

use tidal_core::math::{acosd, asind, atan2d, cosd, cotd, sind, tand};

/// Obliquity of the ecliptic at 1900-01-01 (Table 1); its secular change
/// is far below the output precision.
pub const OBLIQUITY: f64 = 23.0 + 27.0 / 60.0 + 8.26 / 3600.0;

/// Inclination of the moon's orbit to the ecliptic (Table 1).
pub const LUNAR_INCLINATION: f64 = 5.0 + 8.0 / 60.0 + 43.3546 / 3600.0;

/// cos I from the side-cosine identity on Figure 1:
/// cos I = cos ω cos i − sin ω sin i cos N.
pub fn cos_inclination(n: f64) -> f64 {
    cosd(OBLIQUITY) * cosd(LUNAR_INCLINATION)
        - sind(OBLIQUITY) * sind(LUNAR_INCLINATION) * cosd(n)
}

pub fn sin_inclination(n: f64) -> f64 {
    let c = cos_inclination(n);
    (1.0 - c * c).sqrt()
}

/// sin ν from the sine rule: sin ν = sin i sin N / sin I.
fn sin_nu(n: f64) -> f64 {
    sind(LUNAR_INCLINATION) * sind(n) / sin_inclination(n)
}

fn cos_nu(n: f64) -> f64 {
    let s = sin_nu(n);
    (1.0 - s * s).sqrt()
}

/// sin of the arc from the node to the orbit/equator intersection,
/// measured along the moon's orbit (the unlabelled side of Figure 1).
fn sin_node_arc(n: f64) -> f64 {
    sind(OBLIQUITY) * sind(n) / sin_inclination(n)
}

/// Cosine of the same arc; can take either sign, so it is derived from
/// the side-cosine identity rather than a square root.
fn cos_node_arc(n: f64) -> f64 {
    cosd(n) * cos_nu(n) + sind(n) * sin_nu(n) * cosd(OBLIQUITY)
}

/// I, the inclination of the moon's orbit to the celestial equator.
pub fn inclination(n: f64) -> f64 {
    acosd(cos_inclination(n))
}

/// ν, the right ascension of the orbit/equator intersection.
pub fn nu(n: f64) -> f64 {
    asind(sin_nu(n))
}

/// ξ, the longitude in the moon's orbit of the orbit/equator
/// intersection: N minus the node arc.
pub fn xi(n: f64) -> f64 {
    n - atan2d(sin_node_arc(n), cos_node_arc(n))
}

/// ν′, the composite angle in the argument of K₁ (formula 224).
pub fn nu_prime(n: f64) -> f64 {
    let m = sind(2.0 * inclination(n));
    atan2d(m * sin_nu(n), m * cos_nu(n) + 0.3347)
}

/// 2ν″, the composite angle in the argument of K₂ (formula 232).
pub fn two_nu_dprime(n: f64) -> f64 {
    let s = {
        let t = sin_inclination(n);
        t * t
    };
    let twice_nu = 2.0 * nu(n);
    atan2d(s * sind(twice_nu), s * cosd(twice_nu) + 0.0727)
}

/// P, the lunar perigee reckoned from the orbit/equator intersection
/// (formula 191).
pub fn p_arg(p: f64, xi: f64) -> f64 {
    p - xi
}

/// Q, the angle in the argument of M₁. Formula 203 gives only tan Q; the
/// two-argument form keeps Q in step with P through all four quadrants.
pub fn q(p_arg: f64) -> f64 {
    atan2d(0.483 * sind(p_arg), cosd(p_arg))
}

/// Qᵤ = P − Q (formula 204).
pub fn q_u(p_arg: f64, q: f64) -> f64 {
    p_arg - q
}

/// Qₐ, the amplitude companion of Q (formula 197).
pub fn q_a(p_arg: f64) -> f64 {
    1.0 / (2.31 + 1.435 * cosd(2.0 * p_arg)).sqrt()
}

/// R, the angle in the argument of L₂ (formula 214).
pub fn r(p_arg: f64, inclination: f64) -> f64 {
    // cot(I/2) is positive throughout I's 18°..29° range
    let c = cotd(inclination / 2.0);
    atan2d(sind(2.0 * p_arg), c * c / 6.0 - cosd(2.0 * p_arg))
}

/// Rₐ, the amplitude companion of R (formula 213).
pub fn r_a(p_arg: f64, inclination: f64) -> f64 {
    let t = {
        let h = tand(inclination / 2.0);
        h * h
    };
    1.0 / (1.0 - 12.0 * t * cosd(2.0 * p_arg) + 36.0 * t * t).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclination_extremes_at_node_crossings() {
        // N = 0: I = ω + i; N = 180: I = ω − i
        assert!((inclination(0.0) - 28.597_670_722_222_215).abs() < 1e-12);
        assert!((inclination(180.0) - 18.306_918_166_666_655).abs() < 1e-12);
    }

    #[test]
    fn test_inclination_stays_in_published_band() {
        let mut n = 0.0;
        while n <= 360.0 {
            let i = inclination(n);
            assert!((18.0..=29.0).contains(&i), "I({n}) = {i}");
            n += 1.0;
        }
    }

    #[test]
    fn test_angles_vanish_on_the_equinox_line() {
        for n in [0.0, 180.0, 360.0] {
            assert!(nu(n).abs() < 1e-12);
            assert!(nu_prime(n).abs() < 1e-12);
            assert!(two_nu_dprime(n).abs() < 1e-12);
        }
        // ξ carries N's whole turns rather than resetting
        assert!(xi(0.0).abs() < 1e-12);
        assert!((xi(360.0) - 360.0).abs() < 1e-12);
    }

    #[test]
    fn test_quadrature_fixture() {
        assert!((inclination(90.0) - 23.978_926_201_252_605).abs() < 1e-12);
        assert!((nu(90.0) - 12.748_775_316_816_578).abs() < 1e-12);
        assert!((xi(90.0) - 11.680_082_704_538_677).abs() < 1e-12);
        assert!((nu_prime(90.0) - 8.796_689_961_568_996).abs() < 1e-12);
        assert!((two_nu_dprime(90.0) - 17.774_981_857_484_85).abs() < 1e-12);
    }

    #[test]
    fn test_descending_node_mirrors_ascending() {
        // The triangle is symmetric under N -> 360 - N with ν, ν′, 2ν″
        // changing sign
        for n in [1.0, 47.0, 90.0, 133.0] {
            assert!((nu(n) + nu(360.0 - n)).abs() < 1e-12);
            assert!((nu_prime(n) + nu_prime(360.0 - n)).abs() < 1e-12);
            assert!((inclination(n) - inclination(360.0 - n)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_perigee_quantities_at_zero() {
        assert_eq!(p_arg(33.0, 12.0), 21.0);
        assert!(q(0.0).abs() < 1e-15);
        assert!((q_a(0.0) - 0.516_742_389_328_801_8).abs() < 1e-15);
        assert!(r(0.0, 18.0).abs() < 1e-15);
        assert!((r_a(0.0, 18.0) - 1.177_182_140_303_028).abs() < 1e-12);
    }

    #[test]
    fn test_q_u_definition() {
        let p = 73.0;
        assert!((q_u(p, q(p)) - (p - q(p))).abs() < 1e-15);
    }
}
