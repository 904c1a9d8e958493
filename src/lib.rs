//! # `integer_trig`
//!
//! Integer-only, `no_std` trigonometry: sine, cosine, tangent, their
//! inverses, and vector magnitude, built entirely on compile-time lookup
//! tables and CORDIC shift-and-add iteration. There is no floating point
//! anywhere in this crate, at build time or at runtime.
//!
//! ## Features
//!
//! - **No floating-point operations**: every table is built and every
//!   evaluator runs in integer (and const-evaluated wide fixed-point)
//!   arithmetic.
//! - **`no_std` compatible**: no allocator, no I/O, suitable for interrupt
//!   handlers and other hard-real-time contexts.
//! - **Deterministic and panic-free**: every public function is total; the
//!   only way to fail is a compile-time rejection of an invalid table size.
//! - **Compile-time tables**: `sine_q`, `atan_q`, and `asin_q` are built by
//!   `const fn` and embedded directly in the binary — nothing is
//!   initialized at program startup.
//!
//! ## Supported Functions
//!
//! | Category | Functions |
//! |----------|-----------|
//! | Circular | [`sin`], [`cos`], [`tan`], [`sincos`], [`asin`], [`acos`], [`atan`], [`atan2`] |
//! | Magnitude | [`magnitude`] |
//! | Angle conversion | [`from_degrees`], [`to_degrees`], [`from_milliradians`] |
//!
//! ## Quick Start
//!
//! ```rust
//! use integer_trig::{angle, sin, cos, magnitude};
//!
//! // Compute sin and cos of 45 degrees.
//! let a = angle::from_degrees(45);
//! let s = sin(a);
//! let c = cos(a);
//! assert!((i32::from(s) - i32::from(c)).abs() <= 1);
//!
//! // Vector magnitude: the classic 3-4-5 triangle.
//! assert!(magnitude(3000, 4000).abs_diff(5000) <= 50);
//! ```
//!
//! ## Choosing a Table Size
//!
//! Table size `N` is a compile-time constant, not a runtime parameter:
//! larger `N` trades binary size (`6*N` bytes per instantiation) for
//! interpolation accuracy. [`TrigDefault`] (= [`Trig128`]) is accurate to
//! within 0.001 of true sine/cosine over the full angle domain and is the
//! right choice unless profiling says otherwise.
//!
//! ## Algorithm Overview
//!
//! Two distinct techniques are used, matched to what each operation needs:
//!
//! - **Quarter-wave tables with linear interpolation** for `sin`, `cos`,
//!   `tan`, `asin`, `acos`: one quadrant (or one monotonic range) is
//!   tabulated at build time; runtime evaluation folds the input into that
//!   range, interpolates between the two bracketing entries, and
//!   sign-corrects branchlessly.
//! - **CORDIC vectoring** for [`magnitude`] and for `atan2`'s table
//!   construction: a vector `(x, y)` is rotated by a sequence of
//!   `atan(2^-k)` micro-angles, always picking the rotation direction that
//!   drives `y` toward zero, so that after enough iterations `x` holds the
//!   (gain-corrected) vector length.
//!
//! ## References
//!
//! - [CORDIC on Wikipedia](https://en.wikipedia.org/wiki/CORDIC)
//! - Volder, J.E. "The CORDIC Trigonometric Computing Technique" (1959)

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::module_name_repetitions, reason = "Trig32/Trig64/... aliases intentionally repeat the module's concept name")]
#![allow(clippy::similar_names, reason = "sin/cos/tan and x/y pairs are the domain vocabulary")]

pub mod angle;
pub mod kernel;
pub mod ops;
pub mod tables;

pub use angle::{from_degrees, from_milliradians, to_degrees};
pub use ops::{mag as magnitude, IntegerTrig};

/// A 32-entry trigonometry kernel. Smallest supported table size; favors
/// binary size over accuracy (see invariant 1 in the design notes).
pub type Trig32 = IntegerTrig<32>;

/// A 64-entry trigonometry kernel.
pub type Trig64 = IntegerTrig<64>;

/// A 128-entry trigonometry kernel: the crate's default, accurate to
/// within 0.001 of true sine/cosine over the full angle domain.
pub type Trig128 = IntegerTrig<128>;

/// A 256-entry trigonometry kernel.
pub type Trig256 = IntegerTrig<256>;

/// A 512-entry trigonometry kernel. Largest of the standard instantiations;
/// favors accuracy over binary size.
pub type Trig512 = IntegerTrig<512>;

/// The crate's default table size: an alias for [`Trig128`].
pub type TrigDefault = Trig128;

/// Computes the sine of a 16-bit internal angle, using the default
/// (128-entry) table size.
#[must_use]
pub const fn sin(angle: u16) -> i16 {
    TrigDefault::sin(angle)
}

/// Computes the cosine of a 16-bit internal angle, using the default
/// (128-entry) table size.
#[must_use]
pub const fn cos(angle: u16) -> i16 {
    TrigDefault::cos(angle)
}

/// Computes the tangent of a 16-bit internal angle, using the default
/// (128-entry) table size.
#[must_use]
pub const fn tan(angle: u16) -> i16 {
    TrigDefault::tan(angle)
}

/// Computes sine and cosine of a 16-bit internal angle together, using the
/// default (128-entry) table size.
#[must_use]
pub const fn sincos(angle: u16) -> (i16, i16) {
    TrigDefault::sincos(angle)
}

/// Computes the four-quadrant arctangent of `y/x`, using the default
/// (128-entry) table size.
#[must_use]
pub const fn atan2(y: i16, x: i16) -> u16 {
    TrigDefault::atan2(y, x)
}

/// Computes the arctangent of `v / 16384`, using the default (128-entry)
/// table size.
#[must_use]
pub const fn atan(v: i16) -> u16 {
    TrigDefault::atan(v)
}

/// Computes the arcsine of `v` (clamped to `±8192`), using the default
/// (128-entry) table size.
#[must_use]
pub const fn asin(v: i16) -> u16 {
    TrigDefault::asin(v)
}

/// Computes the arccosine of `v`, using the default (128-entry) table size.
#[must_use]
pub const fn acos(v: i16) -> u16 {
    TrigDefault::acos(v)
}
