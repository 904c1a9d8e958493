//! Compile-time lookup tables for the trigonometry kernel.
//!
//! Each instantiation of [`crate::ops::circular::IntegerTrig`] owns three
//! tables of `N` entries, built entirely at compile time by the functions
//! in [`circular`]: a sine quarter-wave, an arctangent-of-ratio table, and
//! an arcsine table. See [`circular`] for the construction technique.

pub mod circular;

pub use circular::{build_asin_q, build_atan_q, build_sine_q};
