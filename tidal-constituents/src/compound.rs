//! Compound constituents: linear combinations of thirteen fixed bases.
//!
//! A compound record names how many cycles of each base constituent it
//! carries. Its argument series is the weighted sum of the bases'
//! arguments, its node factor the product of their factors raised to the
//! coefficient magnitudes, and its speed the weighted sum of speeds.
//!
//! Building the thirteen bases costs thirteen full per-year sweeps, so a
//! [`BaseCache`] keeps the most recent set keyed on the year span; a
//! catalog full of compound records rebuilds them once.

use crate::builder::{basic, NUM_U_TERMS, NUM_V_TERMS};
use crate::constituent::{Constituent, YearSpan};

pub const NUM_COMPOUND_BASES: usize = 13;

struct BaseSpec {
    name: &'static str,
    v: [f64; NUM_V_TERMS],
    u: [f64; NUM_U_TERMS],
    tag: u8,
}

// The fixed base set, in catalog coefficient order. Only the Dutch
// variant of M₁ is available as a base.
const BASES: [BaseSpec; NUM_COMPOUND_BASES] = [
    BaseSpec {
        name: "O₁",
        v: [1.0, -2.0, 1.0, 0.0, 0.0, 90.0],
        u: [2.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        tag: 75,
    },
    BaseSpec {
        name: "K₁",
        v: [1.0, 0.0, 1.0, 0.0, 0.0, -90.0],
        u: [0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0],
        tag: 227,
    },
    BaseSpec {
        name: "P₁",
        v: [1.0, 0.0, -1.0, 0.0, 0.0, 90.0],
        u: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        tag: 1,
    },
    BaseSpec {
        name: "M₂",
        v: [2.0, -2.0, 2.0, 0.0, 0.0, 0.0],
        u: [2.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        tag: 78,
    },
    BaseSpec {
        name: "S₂",
        v: [2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        u: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        tag: 1,
    },
    BaseSpec {
        name: "N₂",
        v: [2.0, -3.0, 2.0, 1.0, 0.0, 0.0],
        u: [2.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        tag: 78,
    },
    BaseSpec {
        name: "L₂",
        v: [2.0, -1.0, 2.0, -1.0, 0.0, 180.0],
        u: [2.0, -2.0, 0.0, 0.0, 0.0, -1.0, 0.0],
        tag: 215,
    },
    BaseSpec {
        name: "K₂",
        v: [2.0, 0.0, 2.0, 0.0, 0.0, 0.0],
        u: [0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0],
        tag: 235,
    },
    BaseSpec {
        name: "Q₁",
        v: [1.0, -3.0, 1.0, 1.0, 0.0, 90.0],
        u: [2.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        tag: 75,
    },
    BaseSpec {
        name: "ν₂",
        v: [2.0, -3.0, 4.0, -1.0, 0.0, 0.0],
        u: [2.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        tag: 78,
    },
    BaseSpec {
        name: "S₁",
        v: [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        u: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        tag: 1,
    },
    BaseSpec {
        name: "M₁-DUTCH",
        v: [1.0, -1.0, 1.0, 1.0, 0.0, -90.0],
        u: [0.0, -1.0, 0.0, 0.0, 0.0, 0.0, -1.0],
        tag: 206,
    },
    BaseSpec {
        name: "λ₂",
        v: [2.0, -1.0, 0.0, 1.0, 0.0, 180.0],
        u: [2.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        tag: 78,
    },
];

/// Owns the most recently built base set. Reuse is an optimization only;
/// a fresh cache per call would produce identical numbers.
#[derive(Debug, Default)]
pub struct BaseCache {
    cached: Option<(YearSpan, Vec<Constituent>)>,
}

impl BaseCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn bases(&mut self, span: YearSpan) -> &[Constituent] {
        let stale = !matches!(&self.cached, Some((key, _)) if *key == span);
        if stale {
            let built = BASES
                .iter()
                .map(|b| basic(b.name, &b.v, &b.u, b.tag, span))
                .collect();
            self.cached = Some((span, built));
        }
        &self.cached.as_ref().expect("cache was just filled").1
    }
}

/// Builds a compound constituent from the thirteen base coefficients.
pub fn compound(
    name: &str,
    coefficients: &[f64; NUM_COMPOUND_BASES],
    span: YearSpan,
    cache: &mut BaseCache,
) -> Constituent {
    let mut result = Constituent::zero(span.num_years());
    for (k, base) in coefficients.iter().zip(cache.bases(span)) {
        result += &base.scaled(*k);
    }
    result.name = name.to_string();
    result
}
