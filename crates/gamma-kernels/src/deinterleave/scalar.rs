/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::deinterleave::GROUP_BYTES;

/// Transpose one group of four RGB pixels into red, green and blue lanes
///
/// # Panics
/// If `group` is not exactly 12 bytes
#[inline(always)]
pub fn deinterleave_rgb_x4(group: &[u8]) -> ([u8; 4], [u8; 4], [u8; 4]) {
    assert_eq!(group.len(), GROUP_BYTES, "A group is four RGB pixels");

    let mut r = [0; 4];
    let mut g = [0; 4];
    let mut b = [0; 4];

    for (i, pixel) in group.chunks_exact(3).enumerate() {
        r[i] = pixel[0];
        g[i] = pixel[1];
        b[i] = pixel[2];
    }
    (r, g, b)
}
