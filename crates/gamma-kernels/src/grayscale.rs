/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Weighted reduction of three channels to one
//!
//! Every kernel goes through these functions so that all of them compute
//! the same single precision value in the same operation order, which
//! keeps the vectorized variants bit compatible with the scalar ones.
use crate::image::RgbImage;
use crate::params::GammaParams;

/// Clamp to `[0, 255]` and truncate, NaN becomes zero
#[inline(always)]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_to_u8(value: f32) -> u8 {
    // f32::max returns the other operand when one is NaN
    value.max(0.0).min(255.0) as u8
}

/// Reduce one pixel to a grayscale value in `[0, 255]`
///
/// Computes `(a*R + b*G + c*B) / (a + b + c)`
#[inline(always)]
pub fn reduce_to_grayscale(r: u8, g: u8, b: u8, params: &GammaParams) -> f32 {
    let [wr, wg, wb] = params.weights();

    let gray = (wr * f32::from(r) + wg * f32::from(g) + wb * f32::from(b)) / params.weight_sum();

    gray.max(0.0).min(255.0)
}

/// Lane wise version of [`reduce_to_grayscale`] over four pixels
#[inline(always)]
pub fn reduce_to_grayscale_x4(
    r: [f32; 4], g: [f32; 4], b: [f32; 4], params: &GammaParams
) -> [f32; 4] {
    let [wr, wg, wb] = params.weights();
    let sum = params.weight_sum();

    let mut gray = [0.0; 4];

    for (((out, r), g), b) in gray.iter_mut().zip(r).zip(g).zip(b) {
        *out = ((wr * r + wg * g + wb * b) / sum).max(0.0).min(255.0);
    }
    gray
}

/// Write the truncated grayscale value of every pixel into `out`
///
/// `out` must hold at least `image.pixels()` bytes.
pub fn convert_rgb_to_grayscale(image: &RgbImage, params: &GammaParams, out: &mut [u8]) {
    for (pixel, gray) in image.data().chunks_exact(3).zip(out.iter_mut()) {
        *gray = clamp_to_u8(reduce_to_grayscale(pixel[0], pixel[1], pixel[2], params));
    }
}

#[cfg(test)]
mod tests {
    use crate::grayscale::{clamp_to_u8, reduce_to_grayscale, reduce_to_grayscale_x4};
    use crate::params::GammaParams;

    #[test]
    fn clamp_handles_out_of_range_and_nan() {
        assert_eq!(clamp_to_u8(-3.0), 0);
        assert_eq!(clamp_to_u8(300.0), 255);
        assert_eq!(clamp_to_u8(f32::NAN), 0);
        assert_eq!(clamp_to_u8(127.9), 127);
    }

    #[test]
    fn single_channel_weights_select_that_channel() {
        let params = GammaParams::new([0.0, 0.0, 2.0], 1.0).unwrap();

        assert_eq!(reduce_to_grayscale(10, 20, 30, &params), 30.0);
    }

    #[test]
    fn white_stays_in_range() {
        let params = GammaParams::default();
        let gray = reduce_to_grayscale(255, 255, 255, &params);

        assert!(gray <= 255.0);
        assert!(gray > 254.9);
    }

    #[test]
    fn lanes_match_scalar() {
        let params = GammaParams::default();
        let r = [0, 17, 128, 255];
        let g = [3, 200, 64, 255];
        let b = [250, 1, 99, 0];

        let lanes = reduce_to_grayscale_x4(
            r.map(f32::from),
            g.map(f32::from),
            b.map(f32::from),
            &params
        );
        for i in 0..4 {
            assert_eq!(lanes[i], reduce_to_grayscale(r[i], g[i], b[i], &params));
        }
    }
}
