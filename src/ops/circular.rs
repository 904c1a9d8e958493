//! Circular (trigonometric) functions over a compile-time quarter-wave
//! table of `N` entries.
//!
//! `N` must be a power of two in `[8, 4096]`; an out-of-range `N` is a
//! compile error (see [`IntegerTrig::ASSERT_VALID_N`]), not a runtime
//! panic — every function here is total.

use crate::angle::{
    to_degrees, OUTPUT_SCALE, QUARTER_TURN, TAN_COS_THRESHOLD, TAN_SATURATION, TURN,
};
use crate::kernel::{
    fold_atan2, fold_sine, fold_sine_cos, interpolate_i16, interpolate_u16, magnitude,
};
use crate::tables::{build_asin_q, build_atan_q, build_sine_q};

/// A trigonometry kernel with `N`-entry quarter-wave tables.
///
/// Instantiate directly (`IntegerTrig::<256>::sin(angle)`) or through one of
/// the crate's named aliases (`Trig32` .. `Trig512`).
#[derive(Debug, Clone, Copy)]
pub struct IntegerTrig<const N: usize>;

impl<const N: usize> IntegerTrig<N> {
    /// Forces a compile error for any `N` outside the supported range,
    /// evaluated by every associated table const below.
    const ASSERT_VALID_N: () = assert!(
        N.is_power_of_two() && N >= 8 && N <= 4096,
        "IntegerTrig: N must be a power of two in [8, 4096]"
    );

    /// Quarter-wave sine table, `sine_q[i] = sin(i * (pi/2) / (N-1))`.
    const SINE_Q: [i16; N] = {
        #[allow(
            clippy::no_effect_underscore_binding,
            clippy::let_unit_value,
            reason = "binding forces ASSERT_VALID_N to be evaluated at this N's monomorphization"
        )]
        let _valid = Self::ASSERT_VALID_N;
        build_sine_q::<N>()
    };

    /// Quarter-wave arctangent-of-ratio table, `atan_q[i] = atan(i / (N-1))`.
    const ATAN_Q: [u16; N] = {
        #[allow(
            clippy::no_effect_underscore_binding,
            clippy::let_unit_value,
            reason = "binding forces ASSERT_VALID_N to be evaluated at this N's monomorphization"
        )]
        let _valid = Self::ASSERT_VALID_N;
        build_atan_q::<N>()
    };

    /// Quarter-wave arcsine table, `asin_q[i] = asin(i / (N-1))`.
    const ASIN_Q: [u16; N] = {
        #[allow(
            clippy::no_effect_underscore_binding,
            clippy::let_unit_value,
            reason = "binding forces ASSERT_VALID_N to be evaluated at this N's monomorphization"
        )]
        let _valid = Self::ASSERT_VALID_N;
        build_asin_q::<N>()
    };

    /// Computes the sine of a 16-bit internal angle.
    #[must_use]
    pub const fn sin(angle: u16) -> i16 {
        let fold = fold_sine(angle, N);
        let value = interpolate_i16(&Self::SINE_Q, fold.index, fold.fraction);
        (value ^ fold.sign_mask) - fold.sign_mask
    }

    /// Computes the cosine of a 16-bit internal angle, as `sin(angle + π/2)`.
    #[must_use]
    pub const fn cos(angle: u16) -> i16 {
        Self::sin(angle.wrapping_add(QUARTER_TURN))
    }

    /// Computes sine and cosine from a single folded lookup: both values are
    /// derived from one quadrant/position split of `angle`, not from two
    /// independent calls to [`Self::sin`] and [`Self::cos`].
    #[must_use]
    pub const fn sincos(angle: u16) -> (i16, i16) {
        let (sin_fold, cos_fold) = fold_sine_cos(angle, N);

        let sin_value = interpolate_i16(&Self::SINE_Q, sin_fold.index, sin_fold.fraction);
        let sin = (sin_value ^ sin_fold.sign_mask) - sin_fold.sign_mask;

        let cos_value = interpolate_i16(&Self::SINE_Q, cos_fold.index, cos_fold.fraction);
        let cos = (cos_value ^ cos_fold.sign_mask) - cos_fold.sign_mask;

        (sin, cos)
    }

    /// Computes the tangent of a 16-bit internal angle, saturating near the
    /// asymptotes instead of overflowing or dividing by (near) zero.
    #[must_use]
    pub const fn tan(angle: u16) -> i16 {
        let (s, c) = Self::sincos(angle);
        if c.unsigned_abs() < TAN_COS_THRESHOLD.unsigned_abs() {
            if s >= 0 {
                TAN_SATURATION
            } else {
                -TAN_SATURATION
            }
        } else {
            let raw = (s as i32 * OUTPUT_SCALE) / c as i32;
            let bound = TAN_SATURATION as i32;
            if raw > bound {
                TAN_SATURATION
            } else if raw < -bound {
                -TAN_SATURATION
            } else {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "raw is bounded to +-bound = +-TAN_SATURATION just above, which fits i16"
                )]
                let result = raw as i16;
                result
            }
        }
    }

    /// Computes the four-quadrant arctangent of `y/x` as a 16-bit internal
    /// angle in `[0, 2π)`. `atan2(0, 0)` returns `0` by convention.
    #[must_use]
    pub const fn atan2(y: i16, x: i16) -> u16 {
        if x == 0 && y == 0 {
            return 0;
        }

        let fold = fold_atan2(y, x);
        let reference = if fold.denominator == 0 {
            0
        } else {
            let (index, fraction) = ratio_to_index(fold.numerator, fold.denominator, N);
            interpolate_u16(&Self::ATAN_Q, index, fraction)
        };
        let angle0 = if fold.swapped {
            QUARTER_TURN - reference
        } else {
            reference
        };

        match (fold.x_negative, fold.y_negative) {
            (false, false) => angle0,
            (true, false) => TURN / 2 - angle0,
            (true, true) => TURN / 2 + angle0,
            (false, true) => TURN - angle0,
        }
    }

    /// Computes the arctangent of `v / 16384` as a 16-bit internal angle.
    #[must_use]
    pub const fn atan(v: i16) -> u16 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "OUTPUT_SCALE is the fixed constant 8192; doubled it still fits i16"
        )]
        let denominator = (2 * OUTPUT_SCALE) as i16;
        Self::atan2(v, denominator)
    }

    /// Computes the arcsine of `v`, clamped to `±8192`, as a 16-bit internal
    /// angle in `[0, π/2] ∪ [3π/2, 2π)`.
    #[must_use]
    pub const fn asin(v: i16) -> u16 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "OUTPUT_SCALE is the fixed constant 8192, which fits i16"
        )]
        let bound = OUTPUT_SCALE as i16;
        let clamped = if v > bound {
            bound
        } else if v < -bound {
            -bound
        } else {
            v
        };
        let magnitude_v = clamped.unsigned_abs() as u32;
        let (index, fraction) = ratio_to_index(magnitude_v, OUTPUT_SCALE as u32, N);
        let angle = interpolate_u16(&Self::ASIN_Q, index, fraction);
        if clamped < 0 {
            TURN - angle
        } else {
            angle
        }
    }

    /// Computes the arccosine of `v` as `π/2 − asin(v)`.
    #[must_use]
    pub const fn acos(v: i16) -> u16 {
        let asin_v = Self::asin(v) as i32;
        let wrapped = (QUARTER_TURN as i32 - asin_v).rem_euclid(TURN as i32);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "wrapped is reduced modulo TURN (16384), which fits u16 and is non-negative"
        )]
        let result = wrapped as u16;
        result
    }
}

/// Maps `numerator/denominator` (both non-negative, `numerator <=
/// denominator`) to a fractional index into a table of length
/// `table_len`, as an integer part and an 8-bit fraction.
const fn ratio_to_index(numerator: u32, denominator: u32, table_len: usize) -> (usize, u8) {
    let scaled = (numerator as u64 * (table_len as u64 - 1) * 256) / denominator as u64;
    let max_index = table_len - 1;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "scaled >> 8 is bounded by max_index (table_len - 1, at most 4095), which fits usize"
    )]
    let raw_index = (scaled >> 8) as usize;
    let index = if raw_index > max_index {
        max_index
    } else {
        raw_index
    };
    #[allow(
        clippy::cast_possible_truncation,
        reason = "scaled & 0xFF is masked to 8 bits, which fits u8"
    )]
    let fraction = (scaled & 0xFF) as u8;
    (index, fraction)
}

/// Computes `√(x² + y²)` without overflow, independent of `N`.
#[must_use]
pub const fn mag(x: i32, y: i32) -> u32 {
    magnitude(x, y)
}

/// Converts a 16-bit internal angle back to signed degrees in `[0, 360)`.
#[must_use]
pub const fn as_degrees(angle: u16) -> i16 {
    to_degrees(angle)
}
