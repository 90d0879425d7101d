//! Tidal constituent generation.
//!
//! A constituent couples a fixed angular speed with two year-indexed
//! series: the equilibrium argument V₀+u at the start of each year and the
//! node factor f at the middle of each year. Downstream prediction
//! engines multiply station amplitudes and phases against these series.
//!
//! Constituents come from three constructors — [`builder::basic`],
//! [`builder::doodson`], and [`compound::compound`] — normally driven by
//! the declarative catalog format understood by
//! [`catalog::parse_catalog`]. The [`report`] module writes the legacy
//! text report, [`arrays`] packs the same data for binary consumers, and
//! [`tables`] regenerates the published reference tables as an engine
//! self-test.

pub mod arrays;
pub mod builder;
pub mod catalog;
pub mod compound;
pub mod constituent;
pub mod error;
pub mod report;
pub mod tables;

pub use constituent::{Constituent, YearSpan};
pub use error::{Error, Result};
