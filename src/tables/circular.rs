//! Compile-time construction of the `sine_q`, `atan_q`, and `asin_q`
//! quarter-wave tables.
//!
//! Every builder here runs entirely in `const` evaluation, in the Q32
//! fixed-point domain (a value `v` represents `v / 2^32`). Widening into a
//! 32-fractional-bit intermediate, rather than operating directly on the
//! crate's 16-bit output integers, is what lets the `atan_q` CORDIC loop
//! converge smoothly down to its lowest index and keeps the `sine_q`
//! polynomial accurate to a small fraction of an output unit; narrowing
//! back to the table's native width always rounds to nearest rather than
//! truncating, which is what lands every boundary entry on its exact or
//! one-ulp-accurate value with no special-casing.

/// Q32 representation of `1.0`.
const Q32_ONE: i64 = 1 << 32;

/// Q32 representation of π/2.
const PI_OVER_2_Q32: i64 = 6_746_518_852;

/// Q32 representation of 2π.
const TWO_PI_Q32: i64 = 26_986_075_409;

/// Horner coefficients for `sin(x)` on `[0, π/2]`, in Q32: the coefficient
/// of `x`, `x^3`, `x^5`, `x^7`, `x^9`, and `x^11` respectively (the Taylor
/// series of sine truncated after the `x^11` term, accurate to within
/// `8.6e-8` of true sine over the whole quadrant).
const SINE_POLY_COEFFS: [i64; 6] = [
    4_294_967_296,
    -715_827_883,
    35_791_394,
    -852_176,
    11_836,
    -108,
];

/// `atan(2^-k)` for k in `[0, 32)`, pre-scaled from radians into internal
/// angle units (TURN = 2π) and stored in Q32.
#[rustfmt::skip]
const ATAN_UNITS_Q32: [i64; 32] = [
    8_796_093_022_208, 5_192_636_917_629, 2_743_646_738_361, 1_392_717_924_215,
    699_061_552_022,   349_871_560_257,   174_978_471_690,   87_494_575_221,
    43_747_955_124,    21_874_061_004,    10_937_040_932,    5_468_521_770,
    2_734_261_048,     1_367_130_544,     683_565_275,       341_782_638,
    170_891_319,       85_445_659,        42_722_830,        21_361_415,
    10_680_707,        5_340_354,         2_670_177,         1_335_088,
    667_544,           333_772,           166_886,           83_443,
    41_722,            20_861,            10_430,             5_215,
];

/// Multiplies two Q32 values, widening through `i128` to avoid overflow
/// (a product of two ~2^32-magnitude values needs roughly 65 bits).
const fn mulq32(a: i64, b: i64) -> i64 {
    let wide = ((a as i128) * (b as i128)) >> 32;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "both operands are Q32 values in [-2^33, 2^33), so the Q32 product fits i64"
    )]
    let result = wide as i64;
    result
}

/// Divides by a power of two, rounding to nearest (ties away from zero),
/// rather than truncating toward zero as `>>` does for negative values.
const fn round_shr(value: i64, shift: u32) -> i64 {
    let half = 1i64 << (shift - 1);
    if value >= 0 {
        (value + half) >> shift
    } else {
        -((half - value) >> shift)
    }
}

/// Divides by an arbitrary positive denominator, rounding to nearest.
/// Only used with non-negative numerators in this module.
const fn round_div(numerator: i64, denominator: i64) -> i64 {
    (numerator + denominator / 2) / denominator
}

/// Evaluates the Q32 sine polynomial at `x` (Q32 radians in `[0, π/2]`),
/// returning a Q32 result in `[0, 1]`.
#[allow(
    clippy::indexing_slicing,
    reason = "k counts down from 5 to 0 over SINE_POLY_COEFFS's fixed 6 entries"
)]
const fn sine_q32(x: i64) -> i64 {
    let x2 = mulq32(x, x);
    let mut acc = SINE_POLY_COEFFS[5];
    let mut k = 5;
    while k > 0 {
        k -= 1;
        acc = mulq32(acc, x2) + SINE_POLY_COEFFS[k];
    }
    mulq32(acc, x)
}

/// Computes `atan(ratio)` for `ratio` in Q32 `[0, 1]`, returning the angle
/// in internal units, Q32.
///
/// This is CORDIC vectoring: rotate the vector `(1, ratio)` by successive
/// `atan(2^-k)` micro-angles, each time picking the sign that drives `y`
/// toward zero, accumulating the angle actually rotated through.
#[allow(
    clippy::indexing_slicing,
    reason = "k is bounded by the while loop to [0, 32), matching ATAN_UNITS_Q32's fixed length"
)]
const fn atan_ratio_units_q32(ratio_q32: i64) -> i64 {
    let mut x = Q32_ONE;
    let mut y = ratio_q32;
    let mut z: i64 = 0;
    let mut k = 0;
    while k < 32 {
        if y < 0 {
            let x_new = x - (y >> k);
            y += x >> k;
            x = x_new;
            z -= ATAN_UNITS_Q32[k];
        } else {
            let x_new = x + (y >> k);
            y -= x >> k;
            x = x_new;
            z += ATAN_UNITS_Q32[k];
        }
        k += 1;
    }
    z
}

/// Binary-searches for the Q32 radian angle `a` in `[0, π/2]` such that
/// `sine_q32(a)` most closely matches `target_q32`.
const fn asin_q32(target_q32: i64) -> i64 {
    let mut lo: i64 = 0;
    let mut hi: i64 = PI_OVER_2_Q32;
    let mut iterations = 0;
    while iterations < 60 {
        let mid = lo.midpoint(hi);
        if sine_q32(mid) < target_q32 {
            lo = mid;
        } else {
            hi = mid;
        }
        iterations += 1;
    }
    lo.midpoint(hi)
}

/// Builds the `sine_q` table: `sine_q[i]` is `sin(i * (π/2) / (N-1))` in
/// the crate's sine output convention (±16384 ≡ ±2.0).
///
/// `N` must be at least 2; the caller (`IntegerTrig`) enforces the full
/// `[8, 4096]` power-of-two constraint before this is ever evaluated.
#[must_use]
#[allow(clippy::indexing_slicing, reason = "i is bounded by the while loop to [0, N)")]
pub const fn build_sine_q<const N: usize>() -> [i16; N] {
    let mut table = [0i16; N];
    let mut i = 0;
    while i < N {
        #[allow(
            clippy::cast_possible_wrap,
            reason = "i and N are table indices bounded by N <= 4096, far below i64::MAX"
        )]
        let angle_q32 = (i as i64 * PI_OVER_2_Q32) / (N as i64 - 1);
        let sine = sine_q32(angle_q32);
        let scaled = round_shr(sine * 16384, 32);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "scaled is a Q0 sine value in [0, 16384], which fits i16"
        )]
        let value = scaled as i16;
        table[i] = value;
        i += 1;
    }
    table
}

/// Builds the `atan_q` table: `atan_q[i]` is `atan(i / (N-1))`, the angle
/// whose tangent is the ratio `i/(N-1)`, in internal angle units.
#[must_use]
#[allow(clippy::indexing_slicing, reason = "i is bounded by the while loop to [0, N)")]
pub const fn build_atan_q<const N: usize>() -> [u16; N] {
    let mut table = [0u16; N];
    let mut i = 0;
    while i < N {
        #[allow(
            clippy::cast_possible_wrap,
            reason = "i and N are table indices bounded by N <= 4096, far below i64::MAX"
        )]
        let ratio_q32 = round_div(i as i64 * Q32_ONE, N as i64 - 1);
        let units_q32 = atan_ratio_units_q32(ratio_q32);
        let scaled = round_shr(units_q32, 32);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "scaled is atan(ratio) in internal angle units, in [0, QUARTER_TURN], which fits u16"
        )]
        let value = scaled as u16;
        table[i] = value;
        i += 1;
    }
    table
}

/// Builds the `asin_q` table: `asin_q[i]` is the angle whose sine
/// (evaluated with the same polynomial as `sine_q`) is `i / (N-1)` in
/// `[0, 1]`, in internal angle units.
#[must_use]
#[allow(clippy::indexing_slicing, reason = "i is bounded by the while loop to [0, N)")]
pub const fn build_asin_q<const N: usize>() -> [u16; N] {
    let mut table = [0u16; N];
    let mut i = 0;
    while i < N {
        #[allow(
            clippy::cast_possible_wrap,
            reason = "i and N are table indices bounded by N <= 4096, far below i64::MAX"
        )]
        let target_q32 = round_div(i as i64 * Q32_ONE, N as i64 - 1);
        let angle_q32 = asin_q32(target_q32);
        let scaled = round_div(angle_q32 * 16384, TWO_PI_Q32);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "scaled is asin(ratio) in internal angle units, in [0, QUARTER_TURN], which fits u16"
        )]
        let value = scaled as u16;
        table[i] = value;
        i += 1;
    }
    table
}
