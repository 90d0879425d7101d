//! The constituent entity and its algebra.

use std::ops::AddAssign;

/// The year range a generation run covers, plus the epoch year at which
/// constituent speeds are taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearSpan {
    pub first_year: u16,
    pub last_year: u16,
    pub speed_epoch: u16,
}

impl YearSpan {
    pub fn new(first_year: u16, last_year: u16, speed_epoch: u16) -> Self {
        assert!(first_year >= 1, "first year {first_year} outside 1..=4000");
        assert!(last_year <= 4000, "last year {last_year} outside 1..=4000");
        assert!(
            last_year >= first_year,
            "last year {last_year} before first year {first_year}"
        );
        assert!(
            (1..=4000).contains(&speed_epoch),
            "speed epoch {speed_epoch} outside 1..=4000"
        );
        Self {
            first_year,
            last_year,
            speed_epoch,
        }
    }

    pub fn num_years(&self) -> usize {
        usize::from(self.last_year - self.first_year) + 1
    }
}

/// A named sinusoidal component of the tide: a fixed speed in degrees per
/// solar hour plus two series indexed by year.
///
/// `vpu[i]` is V₀+u in degrees at 00:00 GMT on January 1 of year
/// `first_year + i`, carried raw (reduce it with
/// [`normalize`](tidal_core::format::normalize) only when printing).
/// `f[i]` is the dimensionless node factor at the middle of the same
/// year. The two series always share one year axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constituent {
    pub name: String,
    pub speed: f64,
    pub vpu: Vec<f64>,
    pub f: Vec<f64>,
}

impl Constituent {
    /// The additive identity for the constituent algebra: zero speed,
    /// zero arguments, unit node factors.
    pub fn zero(num_years: usize) -> Self {
        Self {
            name: "zero".to_string(),
            speed: 0.0,
            vpu: vec![0.0; num_years],
            f: vec![1.0; num_years],
        }
    }

    pub fn num_years(&self) -> usize {
        self.vpu.len()
    }

    /// Scales the constituent by `k`: speed and arguments multiply by
    /// `k`, node factors are raised to |k|. Compounds negate signs in the
    /// argument but a node factor is an amplitude ratio and never flips.
    pub fn scaled(&self, k: f64) -> Self {
        Self {
            name: "nameless".to_string(),
            speed: k * self.speed,
            vpu: self.vpu.iter().map(|v| k * v).collect(),
            f: self.f.iter().map(|f| f.powf(k.abs())).collect(),
        }
    }
}

/// Merges another constituent in: speeds and arguments add, node factors
/// multiply. Both sides must cover the same years.
impl AddAssign<&Constituent> for Constituent {
    fn add_assign(&mut self, rhs: &Constituent) {
        assert_eq!(self.vpu.len(), rhs.vpu.len(), "year axes differ");
        assert_eq!(self.f.len(), rhs.f.len(), "year axes differ");
        self.speed += rhs.speed;
        for (a, b) in self.vpu.iter_mut().zip(&rhs.vpu) {
            *a += b;
        }
        for (a, b) in self.f.iter_mut().zip(&rhs.f) {
            *a *= b;
        }
        self.name = "nameless".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Constituent {
        Constituent {
            name: "sample".to_string(),
            speed: 2.0,
            vpu: vec![10.0, 20.0],
            f: vec![0.5, 2.0],
        }
    }

    #[test]
    fn test_zero_identity() {
        let z = Constituent::zero(2);
        let mut sum = z.clone();
        sum += &sample();
        assert_eq!(sum.speed, 2.0);
        assert_eq!(sum.vpu, vec![10.0, 20.0]);
        assert_eq!(sum.f, vec![0.5, 2.0]);
    }

    #[test]
    fn test_add_assign_semantics() {
        let mut a = sample();
        a += &sample();
        assert_eq!(a.name, "nameless");
        assert_eq!(a.speed, 4.0);
        assert_eq!(a.vpu, vec![20.0, 40.0]);
        assert_eq!(a.f, vec![0.25, 4.0]);
    }

    #[test]
    fn test_scaled_negates_argument_but_not_factor() {
        let s = sample().scaled(-1.0);
        assert_eq!(s.name, "nameless");
        assert_eq!(s.speed, -2.0);
        assert_eq!(s.vpu, vec![-10.0, -20.0]);
        // f^|-1| leaves the factor alone
        assert_eq!(s.f, vec![0.5, 2.0]);
    }

    #[test]
    fn test_scaled_by_zero_flattens_factor_to_one() {
        let s = sample().scaled(0.0);
        assert_eq!(s.speed, 0.0);
        assert_eq!(s.vpu, vec![0.0, 0.0]);
        assert_eq!(s.f, vec![1.0, 1.0]);
    }

    #[test]
    fn test_year_span() {
        let span = YearSpan::new(1970, 2037, 1900);
        assert_eq!(span.num_years(), 68);
        assert_eq!(YearSpan::new(2000, 2000, 2000).num_years(), 1);
    }

    #[test]
    #[should_panic(expected = "before first year")]
    fn test_year_span_rejects_inverted_range() {
        YearSpan::new(2000, 1999, 1900);
    }

    #[test]
    #[should_panic(expected = "year axes differ")]
    fn test_add_assign_rejects_mismatched_axes() {
        let mut a = sample();
        a += &Constituent::zero(3);
    }
}
