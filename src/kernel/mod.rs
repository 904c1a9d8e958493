//! Low-level building blocks shared by every [`crate::ops::circular`]
//! operation: angle/ratio folding, table interpolation, and CORDIC vector
//! magnitude.
//!
//! Users should call functions in [`crate::ops`] rather than these kernels
//! directly.

mod cordic;
mod eval;
mod fold;

pub use cordic::magnitude;
pub use eval::{interpolate_i16, interpolate_u16};
pub use fold::{fold_atan2, fold_sine, fold_sine_cos, Atan2Fold, SineFold};
