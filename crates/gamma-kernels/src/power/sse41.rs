/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#![cfg(feature = "sse41")]
//! Four lane Taylor series `ln` and `exp`
//!
//! Mirrors [`ln_taylor`](crate::power::ln_taylor) and
//! [`exp_taylor`](crate::power::exp_taylor) operation for operation.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn ln_taylor_sse41(x: __m128) -> __m128 {
    let t = _mm_sub_ps(x, _mm_set1_ps(1.0));
    let t2 = _mm_mul_ps(t, t);
    let t3 = _mm_mul_ps(t2, t);
    let t4 = _mm_mul_ps(t3, t);
    let t5 = _mm_mul_ps(t4, t);
    let t6 = _mm_mul_ps(t5, t);

    let term2 = _mm_div_ps(t2, _mm_set1_ps(2.0));
    let term3 = _mm_div_ps(t3, _mm_set1_ps(3.0));
    let term4 = _mm_div_ps(t4, _mm_set1_ps(4.0));
    let term5 = _mm_div_ps(t5, _mm_set1_ps(5.0));
    let term6 = _mm_div_ps(t6, _mm_set1_ps(6.0));

    let positive = _mm_add_ps(_mm_add_ps(t, term3), term5);

    _mm_sub_ps(_mm_sub_ps(positive, term2), _mm_add_ps(term4, term6))
}

#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn exp_taylor_sse41(y: __m128) -> __m128 {
    let y2 = _mm_mul_ps(y, y);
    let y3 = _mm_mul_ps(y2, y);
    let y4 = _mm_mul_ps(y3, y);
    let y5 = _mm_mul_ps(y4, y);
    let y6 = _mm_mul_ps(y5, y);

    let mut sum = _mm_add_ps(_mm_set1_ps(1.0), y);
    sum = _mm_add_ps(sum, _mm_div_ps(y2, _mm_set1_ps(2.0)));
    sum = _mm_add_ps(sum, _mm_div_ps(y3, _mm_set1_ps(6.0)));
    sum = _mm_add_ps(sum, _mm_div_ps(y4, _mm_set1_ps(24.0)));
    sum = _mm_add_ps(sum, _mm_div_ps(y5, _mm_set1_ps(120.0)));
    _mm_add_ps(sum, _mm_div_ps(y6, _mm_set1_ps(720.0)))
}
