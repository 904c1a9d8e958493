//! High-level trigonometric operations built on the CORDIC and table
//! kernels.
//!
//! # Modules
//!
//! - [`circular`]: the const-generic [`circular::IntegerTrig`] kernel and
//!   its `N`-independent companions (`magnitude`, angle conversion).

pub mod circular;

pub use circular::{as_degrees, mag, IntegerTrig};
