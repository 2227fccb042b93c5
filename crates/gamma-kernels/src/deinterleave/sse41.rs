/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#![cfg(feature = "sse41")]

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::deinterleave::GROUP_BYTES;

/// Transpose one group of four RGB pixels and widen each lane to 32 bits
///
/// Returns red, green and blue as four `i32` lanes each.
///
/// # Panics
/// If `group` is not exactly 12 bytes
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn deinterleave_rgb_x4_sse41(group: &[u8]) -> (__m128i, __m128i, __m128i) {
    assert_eq!(group.len(), GROUP_BYTES, "A group is four RGB pixels");

    // a 16 byte load would run four bytes past the group at the image end
    let mut staging = [0_u8; 16];
    staging[..GROUP_BYTES].copy_from_slice(group);

    let packed = _mm_loadu_si128(staging.as_ptr().cast());

    // bytes 0..4 red, 4..8 green, 8..12 blue, 12..16 red again
    let shuffle_mask = _mm_set_epi8(9, 6, 3, 0, 11, 8, 5, 2, 10, 7, 4, 1, 9, 6, 3, 0);
    let planar = _mm_shuffle_epi8(packed, shuffle_mask);

    // move each four byte block to the bottom and zero the rest
    let r = _mm_srli_si128::<12>(_mm_slli_si128::<12>(planar));
    let g = _mm_srli_si128::<12>(_mm_slli_si128::<8>(planar));
    let b = _mm_srli_si128::<12>(_mm_slli_si128::<4>(planar));

    (
        _mm_cvtepu8_epi32(r),
        _mm_cvtepu8_epi32(g),
        _mm_cvtepu8_epi32(b)
    )
}
