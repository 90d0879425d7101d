//! Node factor formulas.
//!
//! Each lunar constituent's amplitude is modulated over the 18.6-year
//! nodal cycle by a factor f, tabulated by Schureman as one closed-form
//! expression per constituent family. The formulas are addressed by their
//! equation number in SP 98; that number is the tag carried by the
//! constituent catalog.
//!
//! Most formulas need only I; 206 and 215 (M₁, L₂) also need P, and 227
//! and 235 (K₁, K₂) need ν. The dispatcher takes all three so a single
//! call site serves every tag.

use crate::orbit::{q_a, r_a};
use tidal_core::math::{cosd, sind};

fn f73(i: f64) -> f64 {
    let s = sind(i);
    (2.0 / 3.0 - s * s) / 0.5021
}

fn f74(i: f64) -> f64 {
    let s = sind(i);
    s * s / 0.1578
}

fn f75(i: f64) -> f64 {
    let c = cosd(i / 2.0);
    sind(i) * c * c / 0.38
}

fn f76(i: f64) -> f64 {
    sind(2.0 * i) / 0.7214
}

fn f77(i: f64) -> f64 {
    let s = sind(i / 2.0);
    sind(i) * s * s / 0.0164
}

fn f78(i: f64) -> f64 {
    let c = cosd(i / 2.0);
    (c * c) * (c * c) / 0.9154
}

fn f79(i: f64) -> f64 {
    let s = sind(i);
    s * s / 0.1565
}

fn f144(i: f64) -> f64 {
    let s = {
        let h = sind(i / 2.0);
        h * h
    };
    let c = cosd(i / 2.0);
    (1.0 - 10.0 * s + 15.0 * s * s) * c * c / 0.5873
}

fn f149(i: f64) -> f64 {
    cosd(i / 2.0).powi(6) / 0.8758
}

fn f227(i: f64, nu: f64) -> f64 {
    let t = sind(2.0 * i);
    (0.8965 * t * t + 0.6001 * t * cosd(nu) + 0.1006).sqrt()
}

fn f235(i: f64, nu: f64) -> f64 {
    let t = {
        let s = sind(i);
        s * s
    };
    (19.0444 * t * t + 2.7702 * t * cosd(2.0 * nu) + 0.0981).sqrt()
}

/// True when `tag` names one of the supported formulas; the catalog
/// grammar admits nothing else.
pub fn is_known_tag(tag: u8) -> bool {
    matches!(tag, 1 | 73..=79 | 144 | 149 | 206 | 215 | 227 | 235)
}

/// Evaluates the node factor formula named by `tag` with all mid-year
/// arguments in degrees.
///
/// # Panics
///
/// On a tag outside the supported set. Catalog input is validated before
/// it reaches this point, so getting here with a bad tag is a caller bug.
pub fn node_factor(tag: u8, inclination: f64, p_arg: f64, nu: f64) -> f64 {
    match tag {
        1 => 1.0,
        73 => f73(inclination),
        74 => f74(inclination),
        75 => f75(inclination),
        76 => f76(inclination),
        77 => f77(inclination),
        78 => f78(inclination),
        79 => f79(inclination),
        144 => f144(inclination),
        149 => f149(inclination),
        206 => f75(inclination) / q_a(p_arg),
        215 => f78(inclination) / r_a(p_arg, inclination),
        227 => f227(inclination, nu),
        235 => f235(inclination, nu),
        _ => panic!("unsupported node factor formula {tag}"),
    }
}
