/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Ways of raising a normalized grayscale value to the gamma exponent
//!
//! All strategies approximate `base ^ exponent` for `base` in `[0, 1]`
//! and a non-negative `exponent`.
//!
//! - [`PowerApprox::Exact`] is the library `powf`, the correctness baseline
//! - [`PowerApprox::Decomposed`] splits the exponent into an integer part raised
//!   by repeated multiplication and a fractional part, which is either
//!   interpolated linearly or replaced by a square root found with Heron's
//!   method. This is only exact for exponents whose fractional part is
//!   `0` or `0.5`.
//! - [`PowerApprox::Taylor`] composes truncated Taylor series of `ln` and `exp`.
//!   It is accurate near one and degrades for dark pixels.
#![allow(clippy::cast_possible_truncation)]

pub(crate) mod sse41;

/// Heron iterations used for the square root of the fractional part
pub const HERON_ITERATIONS: usize = 10;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PowerApprox {
    /// `f32::powf`
    Exact,
    /// Integer power times a linear or Heron square root fractional part,
    /// computed in double precision
    Decomposed,
    /// `exp(exponent * ln(base))` using sixth order Taylor series
    Taylor
}

impl PowerApprox {
    /// Raise `base` to `exponent`
    pub fn apply(self, base: f32, exponent: f32) -> f32 {
        match self {
            PowerApprox::Exact => base.powf(exponent),
            PowerApprox::Decomposed => {
                pow_decomposed(f64::from(base), f64::from(exponent)) as f32
            }
            PowerApprox::Taylor => pow_taylor(base, exponent)
        }
    }

    /// Raise four values to the same exponent
    pub fn apply_x4(self, base: [f32; 4], exponent: f32) -> [f32; 4] {
        match self {
            PowerApprox::Taylor => pow_taylor_x4(base, exponent),
            _ => base.map(|x| self.apply(x, exponent))
        }
    }
}

/// `base ^ exponent` by repeated multiplication
#[inline]
pub fn integer_power(base: f64, exponent: u32) -> f64 {
    let mut result = 1.0;

    for _ in 0..exponent {
        result *= base;
    }
    result
}

/// Approximate `base ^ fraction` for a fraction in `[0, 1)`
///
/// Fractions below one half interpolate linearly between `1` and `base`,
/// anything else returns the square root of `base` regardless of the
/// actual fraction.
#[inline]
pub fn fractional_power(base: f64, fraction: f64) -> f64 {
    if fraction < 0.5 {
        return 1.0 + fraction * (base - 1.0);
    }
    let mut root = base;

    for _ in 0..HERON_ITERATIONS {
        root = (root + base / root) / 2.0;
    }
    // a zero base divides 0/0 above, the caller clamps the NaN to zero
    root
}

/// Decomposed power, `base ^ |trunc(exponent)| * fractional_power(base, fract)`
///
/// The sign of the integer part is dropped, a negative exponent is
/// treated by its magnitude there while its fraction stays negative.
#[inline]
pub fn pow_decomposed(base: f64, exponent: f64) -> f64 {
    let integer = exponent as i32;
    let fraction = exponent - f64::from(integer);

    integer_power(base, integer.unsigned_abs()) * fractional_power(base, fraction)
}

/// `ln(x)` from the Taylor series of `ln(1 + t)` up to `t^6`, with `t = x - 1`
#[inline(always)]
pub fn ln_taylor(x: f32) -> f32 {
    let t = x - 1.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let t6 = t5 * t;

    (t + t3 / 3.0 + t5 / 5.0) - t2 / 2.0 - (t4 / 4.0 + t6 / 6.0)
}

/// `e^y` from the Taylor series up to `y^6 / 6!`
#[inline(always)]
pub fn exp_taylor(y: f32) -> f32 {
    let y2 = y * y;
    let y3 = y2 * y;
    let y4 = y3 * y;
    let y5 = y4 * y;
    let y6 = y5 * y;

    1.0 + y + y2 / 2.0 + y3 / 6.0 + y4 / 24.0 + y5 / 120.0 + y6 / 720.0
}

#[inline(always)]
pub fn pow_taylor(base: f32, exponent: f32) -> f32 {
    exp_taylor(exponent * ln_taylor(base))
}

/// Lane wise [`pow_taylor`]
///
/// Performs the same operations in the same order as the SSE4.1 kernel,
/// so both produce identical results.
#[inline(always)]
pub fn pow_taylor_x4(base: [f32; 4], exponent: f32) -> [f32; 4] {
    base.map(|x| exp_taylor(exponent * ln_taylor(x)))
}
