//! The astronomical engine behind tidal constituent generation.
//!
//! Everything here is a pure function of its arguments. Angles are carried
//! in degrees and are deliberately never reduced to [0, 360): the
//! mean-longitude polynomials reach hundreds of millions of degrees near
//! year 4000, and reducing intermediates would discard the fractional
//! digits that the two-decimal output precision depends on. Reduction
//! happens only in the output formatters of `tidal-core`.

pub mod calendar;
pub mod longitude;
pub mod node_factor;
pub mod orbit;
