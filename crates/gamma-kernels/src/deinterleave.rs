/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Split packed RGB pixels into separate channel lanes
//!
//! The vectorized kernels work on groups of four pixels, twelve
//! interleaved bytes, which are transposed into a red, green and
//! blue lane of four samples each.
//!
//! ```text
//!  R0 G0 B0 R1 G1 B1 R2 G2 B2 R3 G3 B3
//!  ->
//!  R0 R1 R2 R3 | G0 G1 G2 G3 | B0 B1 B2 B3
//! ```
pub use crate::deinterleave::scalar::deinterleave_rgb_x4;

pub(crate) mod scalar;
pub(crate) mod sse41;

/// Interleaved bytes in one group of four pixels
pub const GROUP_BYTES: usize = 12;

/// Pixels in one group
pub const GROUP_PIXELS: usize = 4;

/// Transpose a whole image into three channel planes
///
/// Pixels past the last full group are handled one at a time.
///
/// # Panics
/// If `source` is not a multiple of three bytes or the planes are not
/// `source.len() / 3` bytes each
pub fn deinterleave_rgb(source: &[u8], (r, g, b): (&mut [u8], &mut [u8], &mut [u8])) {
    assert_eq!(source.len() % 3, 0, "Source must be divisible by 3");
    assert_eq!(r.len(), source.len() / 3, "Planes must hold one sample per pixel");
    assert_eq!(r.len(), g.len(), "Planes must be of equal size");
    assert_eq!(g.len(), b.len(), "Planes must be of equal size");

    let groups = source.len() / GROUP_BYTES;

    for (i, group) in source.chunks_exact(GROUP_BYTES).enumerate() {
        let (gr, gg, gb) = deinterleave_rgb_x4(group);
        let start = i * GROUP_PIXELS;

        r[start..start + GROUP_PIXELS].copy_from_slice(&gr);
        g[start..start + GROUP_PIXELS].copy_from_slice(&gg);
        b[start..start + GROUP_PIXELS].copy_from_slice(&gb);
    }
    let done = groups * GROUP_PIXELS;

    for (i, pixel) in source[done * 3..].chunks_exact(3).enumerate() {
        r[done + i] = pixel[0];
        g[done + i] = pixel[1];
        b[done + i] = pixel[2];
    }
}

#[cfg(test)]
mod tests {
    use crate::deinterleave::deinterleave_rgb;

    #[test]
    fn planes_hold_channels() {
        let source: Vec<u8> = (0..21).collect();
        let mut r = [0; 7];
        let mut g = [0; 7];
        let mut b = [0; 7];

        deinterleave_rgb(&source, (&mut r, &mut g, &mut b));

        assert_eq!(r, [0, 3, 6, 9, 12, 15, 18]);
        assert_eq!(g, [1, 4, 7, 10, 13, 16, 19]);
        assert_eq!(b, [2, 5, 8, 11, 14, 17, 20]);
    }
}
