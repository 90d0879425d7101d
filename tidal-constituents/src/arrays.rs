//! Packed single-precision bundle for binary consumers.
//!
//! Downstream constituent databases store equilibrium arguments and node
//! factors as 32-bit floats with speeds in a fixed-point field capped
//! below 214.748 degrees per hour. Arguments are pushed through the
//! two-decimal output formatter before the narrowing conversion so the
//! packed values agree digit-for-digit with the text report.

use crate::constituent::Constituent;
use tidal_core::format::normalize;

/// Upper bound (exclusive) on a packable speed, degrees per solar hour.
pub const MAX_PACKED_SPEED: f64 = 214.748;

#[derive(Debug, Clone, PartialEq)]
pub struct PackedConstituents {
    pub names: Vec<String>,
    pub speeds: Vec<f64>,
    pub equilibrium_args: Vec<Vec<f32>>,
    pub node_factors: Vec<Vec<f32>>,
}

/// Packs a constituent list.
///
/// # Panics
///
/// When the list is empty, the series lengths disagree, or a speed falls
/// outside [0, [`MAX_PACKED_SPEED`]). These are contract violations of
/// the packed format, not recoverable input conditions.
pub fn pack(constituents: &[Constituent]) -> PackedConstituents {
    assert!(!constituents.is_empty(), "nothing to pack");
    let num_years = constituents[0].num_years();
    assert!(num_years > 0, "empty year axis");

    let mut packed = PackedConstituents {
        names: Vec::with_capacity(constituents.len()),
        speeds: Vec::with_capacity(constituents.len()),
        equilibrium_args: Vec::with_capacity(constituents.len()),
        node_factors: Vec::with_capacity(constituents.len()),
    };

    for c in constituents {
        assert!(
            c.speed >= 0.0 && c.speed < MAX_PACKED_SPEED,
            "speed {} of {} outside the packable range",
            c.speed,
            c.name
        );
        assert_eq!(c.vpu.len(), num_years, "ragged year axis at {}", c.name);
        assert_eq!(c.f.len(), num_years, "ragged year axis at {}", c.name);

        packed.names.push(c.name.clone());
        packed.speeds.push(c.speed);
        packed
            .equilibrium_args
            .push(c.vpu.iter().map(|&v| quantize(v)).collect());
        packed
            .node_factors
            .push(c.f.iter().map(|&f| f as f32).collect());
    }

    packed
}

/// Two-decimal reduction of an argument, by round-tripping through the
/// formatter that the text report uses.
fn quantize(degrees: f64) -> f32 {
    normalize(degrees, 2)
        .trim()
        .parse()
        .expect("normalize always yields a number")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::basic;
    use crate::constituent::YearSpan;

    fn m2() -> Constituent {
        basic(
            "M₂",
            &[2.0, -2.0, 2.0, 0.0, 0.0, 0.0],
            &[2.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            78,
            YearSpan::new(1970, 1972, 1900),
        )
    }

    #[test]
    fn test_pack_round_trips_through_formatter() {
        let c = m2();
        let packed = pack(std::slice::from_ref(&c));
        assert_eq!(packed.names, vec!["M₂"]);
        assert_eq!(packed.speeds, vec![c.speed]);
        // arguments reduced to [0, 360) and truncated to two decimals
        assert_eq!(packed.equilibrium_args[0][0], 165.43);
        for (&arg, &raw) in packed.equilibrium_args[0].iter().zip(&c.vpu) {
            assert!((f64::from(arg) - raw.rem_euclid(360.0)).abs() < 0.005 + 1e-9);
        }
        for (&f32v, &f64v) in packed.node_factors[0].iter().zip(&c.f) {
            assert!((f64::from(f32v) - f64v).abs() < 1e-6);
        }
    }

    #[test]
    fn test_blanked_argument_packs_as_zero() {
        let mut c = m2();
        c.vpu[0] = 359.999;
        let packed = pack(std::slice::from_ref(&c));
        assert_eq!(packed.equilibrium_args[0][0], 0.0);
    }

    #[test]
    #[should_panic(expected = "outside the packable range")]
    fn test_pack_rejects_negative_speed() {
        let mut c = m2();
        c.speed = -1.0;
        pack(std::slice::from_ref(&c));
    }

    #[test]
    #[should_panic(expected = "nothing to pack")]
    fn test_pack_rejects_empty_list() {
        pack(&[]);
    }
}
