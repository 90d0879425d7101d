//! The basic and Doodson-satellite constituent constructors.
//!
//! Both walk the same per-year loop: the V₀ part comes from dotting the
//! Table 1 longitudes at the year start against the record's V
//! coefficients, and the year's u correction and node factor come from
//! the lunar-orbit state at mid-year. They differ in how that mid-year
//! state is applied — a linear combination of the auxiliary angles for
//! `basic`, a complex-vector sum over satellite terms for `doodson`
//! (Foreman's method).

use crate::constituent::{Constituent, YearSpan};
use tidal_astro::calendar::{year_middle, year_start};
use tidal_astro::longitude::{midyear_longitudes, v_longitudes, v_rates, MID_N, MID_P, MID_P1, V_P};
pub use tidal_astro::longitude::NUM_V_TERMS;
use tidal_astro::node_factor::node_factor;
use tidal_astro::orbit;
use tidal_core::constants::HOURS_PER_JULIAN_CENTURY;
use tidal_core::math::{atan2d, cosd, sind};

pub const NUM_U_TERMS: usize = 7;

pub const U_XI: usize = 0;
pub const U_NU: usize = 1;
pub const U_NU_PRIME: usize = 2;
pub const U_2NU_DPRIME: usize = 3;
pub const U_Q: usize = 4;
pub const U_R: usize = 5;
/// Qᵤ is reachable only through the built-in compound bases; catalog
/// records always leave it zero.
pub const U_QU: usize = 6;

/// One satellite term of a Doodson-style record, already transformed to
/// evaluation form (ΔN negated, α scaled to degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Satellite {
    pub delta_p: i32,
    pub delta_n: i32,
    pub delta_p1: i32,
    /// Phase offset in degrees.
    pub alpha: f64,
    /// Amplitude ratio against the main term.
    pub ratio: f64,
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Builds a constituent from linear V and u coefficients plus a node
/// factor formula tag.
pub fn basic(
    name: &str,
    v_coeffs: &[f64; NUM_V_TERMS],
    u_coeffs: &[f64; NUM_U_TERMS],
    f_tag: u8,
    span: YearSpan,
) -> Constituent {
    let rates = v_rates(year_start(span.speed_epoch));
    // M₁'s argument carries Q, whose mean rate is the rate of p
    // (Schureman ¶124); the Q coefficient is zero everywhere else.
    let speed = (dot(&rates, v_coeffs) + rates[V_P] * u_coeffs[U_Q]) / HOURS_PER_JULIAN_CENTURY;

    let mut vpu = Vec::with_capacity(span.num_years());
    let mut f = Vec::with_capacity(span.num_years());
    for year in span.first_year..=span.last_year {
        let mid = midyear_longitudes(year_middle(year));
        let n = mid[MID_N];
        let inclination = orbit::inclination(n);
        let xi = orbit::xi(n);
        let nu = orbit::nu(n);
        let p_arg = orbit::p_arg(mid[MID_P], xi);
        let q = orbit::q(p_arg);
        let u_terms = [
            xi,
            nu,
            orbit::nu_prime(n),
            orbit::two_nu_dprime(n),
            q,
            orbit::r(p_arg, inclination),
            orbit::q_u(p_arg, q),
        ];
        let v0 = dot(&v_longitudes(year_start(year)), v_coeffs);
        vpu.push(v0 + dot(&u_terms, u_coeffs));
        f.push(node_factor(f_tag, inclination, p_arg, nu));
    }

    Constituent {
        name: name.to_string(),
        speed,
        vpu,
        f,
    }
}

/// Builds a constituent from V coefficients and a satellite set. The
/// satellites' combined phasor supplies both the u correction (its
/// argument) and the node factor (its magnitude).
pub fn doodson(
    name: &str,
    v_coeffs: &[f64; NUM_V_TERMS],
    satellites: &[Satellite],
    span: YearSpan,
) -> Constituent {
    let rates = v_rates(year_start(span.speed_epoch));
    let speed = dot(&rates, v_coeffs) / HOURS_PER_JULIAN_CENTURY;

    let mut vpu = Vec::with_capacity(span.num_years());
    let mut f = Vec::with_capacity(span.num_years());
    for year in span.first_year..=span.last_year {
        let mid = midyear_longitudes(year_middle(year));
        let (n, p, p1) = (mid[MID_N], mid[MID_P], mid[MID_P1]);

        let mut cossum = 1.0;
        let mut sinsum = 0.0;
        for sat in satellites {
            let angle = f64::from(sat.delta_p) * p
                + f64::from(sat.delta_n) * n
                + f64::from(sat.delta_p1) * p1
                + sat.alpha;
            cossum += sat.ratio * cosd(angle);
            sinsum += sat.ratio * sind(angle);
        }

        let v0 = dot(&v_longitudes(year_start(year)), v_coeffs);
        vpu.push(v0 + atan2d(sinsum, cossum));
        f.push((sinsum * sinsum + cossum * cossum).sqrt());
    }

    Constituent {
        name: name.to_string(),
        speed,
        vpu,
        f,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const M2_V: [f64; NUM_V_TERMS] = [2.0, -2.0, 2.0, 0.0, 0.0, 0.0];
    const M2_U: [f64; NUM_U_TERMS] = [2.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0];

    #[test]
    fn test_m2_speed_and_first_year() {
        let span = YearSpan::new(1970, 1970, 1900);
        let m2 = basic("M₂", &M2_V, &M2_U, 78, span);
        assert!((m2.speed - 28.984_104_2).abs() < 1e-7);
        assert_eq!(m2.num_years(), 1);
        assert!((m2.f[0] - 0.966_478_592_161_649_4).abs() < 1e-12);
        // raw argument, then reduced
        assert!((m2.vpu[0] - 17_783_085.433_897_365).abs() < 1e-6);
        assert!((m2.vpu[0].rem_euclid(360.0) - 165.433_897_364_884_61).abs() < 1e-6);
    }

    #[test]
    fn test_m2_node_factor_cycle() {
        let span = YearSpan::new(1970, 1975, 1900);
        let m2 = basic("M₂", &M2_V, &M2_U, 78, span);
        let expected = [
            0.966_478_592_161_649_4,
            0.973_384_286_788_521_6,
            0.983_341_834_281_266_2,
            0.995_254_773_644_936_1,
            1.007_780_973_355_002_3,
            1.019_520_961_949_353,
        ];
        for (got, want) in m2.f.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_all_zero_record_is_inert() {
        let span = YearSpan::new(1970, 1972, 1900);
        let c = basic("null", &[0.0; NUM_V_TERMS], &[0.0; NUM_U_TERMS], 1, span);
        assert_eq!(c.speed, 0.0);
        assert!(c.vpu.iter().all(|&v| v == 0.0));
        assert!(c.f.iter().all(|&f| f == 1.0));
    }

    #[test]
    fn test_constant_only_record_has_zero_speed() {
        let span = YearSpan::new(1970, 1971, 1900);
        let c = basic(
            "offset",
            &[0.0, 0.0, 0.0, 0.0, 0.0, 90.0],
            &[0.0; NUM_U_TERMS],
            1,
            span,
        );
        assert_eq!(c.speed, 0.0);
        assert!(c.vpu.iter().all(|&v| v == 90.0));
    }

    #[test]
    fn test_doodson_without_satellites_matches_bare_basic() {
        let span = YearSpan::new(1970, 1973, 1900);
        let d = doodson("D", &M2_V, &[], span);
        let b = basic("B", &M2_V, &[0.0; NUM_U_TERMS], 1, span);
        assert_eq!(d.speed, b.speed);
        for (x, y) in d.vpu.iter().zip(&b.vpu) {
            assert!((x - y).abs() < 1e-9);
        }
        assert!(d.f.iter().all(|&f| f == 1.0));
    }

    #[test]
    fn test_doodson_satellite_fixture() {
        let span = YearSpan::new(1970, 1972, 1900);
        let sats = [
            Satellite {
                delta_p: 0,
                delta_n: -1,
                delta_p1: 0,
                alpha: 90.0,
                ratio: 0.04,
            },
            Satellite {
                delta_p: 1,
                delta_n: 0,
                delta_p1: 0,
                alpha: 180.0,
                ratio: 0.02,
            },
        ];
        let d = doodson("D", &M2_V, &sats, span);
        assert!((d.speed - 28.984_104_213_837_412).abs() < 1e-12);
        let vpu_expected = [
            17_785_247.412_329_35,
            18_039_146.959_530_987,
            18_293_046.299_276_926,
        ];
        let f_expected = [
            0.968_734_250_583_401_9,
            0.952_801_960_067_517_4,
            0.950_048_860_133_102_2,
        ];
        for ((v, want_v), (f, want_f)) in d
            .vpu
            .iter()
            .zip(vpu_expected)
            .zip(d.f.iter().zip(f_expected))
        {
            assert!((v - want_v).abs() < 1e-6);
            assert!((f - want_f).abs() < 1e-12);
        }
    }

    #[test]
    fn test_speed_epoch_shifts_speed_slightly() {
        let at_1900 = basic("M₂", &M2_V, &M2_U, 78, YearSpan::new(1970, 1970, 1900));
        let at_2004 = basic("M₂", &M2_V, &M2_U, 78, YearSpan::new(1970, 1970, 2004));
        assert_ne!(at_1900.speed, at_2004.speed);
        assert!((at_1900.speed - at_2004.speed).abs() < 1e-5);
    }
}
