//! Mean longitudes of the sun, moon, and their orbital elements.
//!
//! Polynomials in Julian centuries from the 1899-12-31 12:00 epoch, after
//! Schureman (SP 98), Table 1. Two families are evaluated:
//!
//! - the V terms (T, s, h, p, p₁ and a constant slot), sampled at the
//!   start of a year to build the V₀ part of an equilibrium argument;
//! - the mid-year trio (N, p, p₁) feeding the u corrections and node
//!   factors.
//!
//! Values are returned raw, in degrees, without reduction: the hour angle
//! of mean sun alone exceeds 2.7e8 degrees at the far end of the supported
//! range, and the constituent coefficients are applied before anything is
//! normalized for output. Rates are first derivatives in degrees per
//! Julian century; conversion to degrees per solar hour happens only where
//! a speed is published.
//!
//! Coefficients are written out as their sexagesimal source expressions so
//! they stay exactly as tabulated.

use crate::calendar::julian_centuries;
use tidal_core::constants::DAYS_PER_JULIAN_CENTURY;

pub const NUM_V_TERMS: usize = 6;

/// Hour angle of mean sun.
pub const V_T: usize = 0;
/// Mean longitude of the moon.
pub const V_S: usize = 1;
/// Mean longitude of the sun.
pub const V_H: usize = 2;
/// Mean longitude of the lunar perigee.
pub const V_P: usize = 3;
/// Mean longitude of the solar perigee.
pub const V_P1: usize = 4;
/// Constant slot: evaluates to 1 so a phase offset rides in the same dot
/// product as the astronomical terms.
pub const V_CONST: usize = 5;

pub const NUM_MID_TERMS: usize = 3;

/// Mean longitude of the moon's ascending node.
pub const MID_N: usize = 0;
/// Mean longitude of the lunar perigee.
pub const MID_P: usize = 1;
/// Mean longitude of the solar perigee.
pub const MID_P1: usize = 2;

// Rows follow the index constants above; columns are the T^0..T^3
// coefficients in degrees.
const V_COEFFS: [[f64; 4]; NUM_V_TERMS] = [
    [0.0, DAYS_PER_JULIAN_CENTURY * 360.0, 0.0, 0.0],
    [
        270.0 + 26.0 / 60.0 + 14.72 / 3600.0,
        1336.0 * 360.0 + 1_108_411.2 / 3600.0,
        9.09 / 3600.0,
        0.0068 / 3600.0,
    ],
    [
        279.0 + 41.0 / 60.0 + 48.04 / 3600.0,
        129_602_768.13 / 3600.0,
        1.089 / 3600.0,
        0.0,
    ],
    [
        334.0 + 19.0 / 60.0 + 40.87 / 3600.0,
        11.0 * 360.0 + 392_515.94 / 3600.0,
        -37.24 / 3600.0,
        -0.045 / 3600.0,
    ],
    [
        281.0 + 13.0 / 60.0 + 15.0 / 3600.0,
        6_189.03 / 3600.0,
        1.63 / 3600.0,
        0.012 / 3600.0,
    ],
    [1.0, 0.0, 0.0, 0.0],
];

const MID_COEFFS: [[f64; 4]; NUM_MID_TERMS] = [
    [
        259.0 + 10.0 / 60.0 + 57.12 / 3600.0,
        -(5.0 * 360.0 + 482_912.63 / 3600.0),
        7.58 / 3600.0,
        0.008 / 3600.0,
    ],
    [
        334.0 + 19.0 / 60.0 + 40.87 / 3600.0,
        11.0 * 360.0 + 392_515.94 / 3600.0,
        -37.24 / 3600.0,
        -0.045 / 3600.0,
    ],
    [
        281.0 + 13.0 / 60.0 + 15.0 / 3600.0,
        6_189.03 / 3600.0,
        1.63 / 3600.0,
        0.012 / 3600.0,
    ],
];

fn values<const N: usize>(coeffs: &[[f64; 4]; N], t: i64) -> [f64; N] {
    let t1 = julian_centuries(t);
    let t2 = t1 * t1;
    std::array::from_fn(|i| {
        let [c0, c1, c2, c3] = coeffs[i];
        c0 + t1 * c1 + t2 * c2 + t2 * t1 * c3
    })
}

fn rates<const N: usize>(coeffs: &[[f64; 4]; N], t: i64) -> [f64; N] {
    let t1 = julian_centuries(t);
    let t2 = t1 * t1;
    std::array::from_fn(|i| {
        let [_, c1, c2, c3] = coeffs[i];
        c1 + 2.0 * t1 * c2 + 3.0 * t2 * c3
    })
}

/// The V terms (T, s, h, p, p₁, 1) in degrees at instant `t`.
pub fn v_longitudes(t: i64) -> [f64; NUM_V_TERMS] {
    values(&V_COEFFS, t)
}

/// First derivatives of the V terms in degrees per Julian century.
pub fn v_rates(t: i64) -> [f64; NUM_V_TERMS] {
    rates(&V_COEFFS, t)
}

/// The mid-year trio (N, p, p₁) in degrees at instant `t`.
pub fn midyear_longitudes(t: i64) -> [f64; NUM_MID_TERMS] {
    values(&MID_COEFFS, t)
}

/// First derivatives of (N, p, p₁) in degrees per Julian century.
pub fn midyear_rates(t: i64) -> [f64; NUM_MID_TERMS] {
    rates(&MID_COEFFS, t)
}
