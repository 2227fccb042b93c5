/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#![cfg(feature = "sse41")]
//! SSE4.1 four lane kernels
//!
//! Each group of four pixels is deinterleaved with `pshufb`, widened
//! `u8 -> i32 -> f32`, reduced lane wise and narrowed back with
//! saturating packs.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::deinterleave::sse41::deinterleave_rgb_x4_sse41;
use crate::image::RgbImage;
use crate::kernels::vector::for_each_group;
use crate::params::GammaParams;
use crate::power::sse41::{exp_taylor_sse41, ln_taylor_sse41};
use crate::power::PowerApprox;

/// Weights broadcast to every lane
#[derive(Copy, Clone)]
struct WeightLanes {
    r:   __m128,
    g:   __m128,
    b:   __m128,
    sum: __m128
}

impl WeightLanes {
    #[inline]
    #[target_feature(enable = "sse4.1")]
    unsafe fn new(params: &GammaParams) -> WeightLanes {
        let [r, g, b] = params.weights();

        WeightLanes {
            r:   _mm_set1_ps(r),
            g:   _mm_set1_ps(g),
            b:   _mm_set1_ps(b),
            sum: _mm_set1_ps(params.weight_sum())
        }
    }
}

#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn clamp_ps(values: __m128) -> __m128 {
    // maxps returns the second operand for NaN lanes
    _mm_min_ps(_mm_max_ps(values, _mm_setzero_ps()), _mm_set1_ps(255.0))
}

#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn group_grayscale(group: &[u8], weights: &WeightLanes) -> __m128 {
    let (r, g, b) = deinterleave_rgb_x4_sse41(group);

    let weighted = _mm_add_ps(
        _mm_add_ps(
            _mm_mul_ps(weights.r, _mm_cvtepi32_ps(r)),
            _mm_mul_ps(weights.g, _mm_cvtepi32_ps(g))
        ),
        _mm_mul_ps(weights.b, _mm_cvtepi32_ps(b))
    );
    clamp_ps(_mm_div_ps(weighted, weights.sum))
}

/// Clamp, truncate and store four lanes as bytes
#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn store_u8x4(values: __m128, dst: &mut [u8]) {
    let integers = _mm_cvttps_epi32(clamp_ps(values));
    let words = _mm_packus_epi32(integers, integers);
    let bytes = _mm_packus_epi16(words, words);

    dst.copy_from_slice(&_mm_cvtsi128_si32(bytes).to_le_bytes());
}

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn gamma_exact_sse41(image: &RgbImage, params: &GammaParams, out: &mut [u8]) {
    let weights = WeightLanes::new(params);
    let gamma = params.gamma();

    for_each_group(image, params, out, |src, dst| unsafe {
        let gray = group_grayscale(src, &weights);

        let mut lanes = [0.0_f32; 4];
        _mm_storeu_ps(lanes.as_mut_ptr(), gray);

        let corrected = PowerApprox::Exact.apply_x4(lanes.map(|x| x / 255.0), gamma);

        store_u8x4(
            _mm_mul_ps(_mm_loadu_ps(corrected.as_ptr()), _mm_set1_ps(255.0)),
            dst
        );
    });
}

#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn gamma_taylor_sse41(image: &RgbImage, params: &GammaParams, out: &mut [u8]) {
    let weights = WeightLanes::new(params);
    let gamma = _mm_set1_ps(params.gamma());
    let inv_255 = _mm_set1_ps(1.0 / 255.0);
    let scale = _mm_set1_ps(255.0);

    for_each_group(image, params, out, |src, dst| unsafe {
        let gray = group_grayscale(src, &weights);
        let normalized = _mm_mul_ps(gray, inv_255);

        let corrected = exp_taylor_sse41(_mm_mul_ps(gamma, ln_taylor_sse41(normalized)));

        store_u8x4(_mm_mul_ps(corrected, scale), dst);
    });
}
