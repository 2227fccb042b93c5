/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::cast_possible_truncation)]

use crate::grayscale::{clamp_to_u8, convert_rgb_to_grayscale, reduce_to_grayscale};
use crate::image::{RgbImage, RGB_STRIDE};
use crate::params::GammaParams;
use crate::power::{pow_decomposed, PowerApprox};

/// Grayscale then `powf` for one pixel, shared by every tail loop
#[inline(always)]
pub(crate) fn exact_pixel(pixel: &[u8], params: &GammaParams) -> u8 {
    let gray = reduce_to_grayscale(pixel[0], pixel[1], pixel[2], params);

    clamp_to_u8(PowerApprox::Exact.apply(gray / 255.0, params.gamma()) * 255.0)
}

/// Reference kernel, one pixel at a time using `powf`
///
/// # Panics
/// If `out` is shorter than `image.pixels()`
pub fn gamma_exact_scalar(image: &RgbImage, params: &GammaParams, out: &mut [u8]) {
    let out = &mut out[..image.pixels()];

    for (pixel, dst) in image.data().chunks_exact(RGB_STRIDE).zip(out.iter_mut()) {
        *dst = exact_pixel(pixel, params);
    }
}

/// One pixel at a time using the decomposed power in double precision
///
/// # Panics
/// If `out` is shorter than `image.pixels()`
pub fn gamma_decomposed_scalar(image: &RgbImage, params: &GammaParams, out: &mut [u8]) {
    let out = &mut out[..image.pixels()];
    let gamma = f64::from(params.gamma());

    for (pixel, dst) in image.data().chunks_exact(RGB_STRIDE).zip(out.iter_mut()) {
        let gray = reduce_to_grayscale(pixel[0], pixel[1], pixel[2], params);
        let corrected = pow_decomposed(f64::from(gray / 255.0), gamma) * 255.0;

        *dst = clamp_to_u8(corrected as f32);
    }
}

/// Two passes over the image
///
/// The first writes the truncated grayscale image into `out`, the second
/// gamma corrects `out` in place. Truncating between passes makes this
/// differ slightly from [`gamma_exact_scalar`].
///
/// # Panics
/// If `out` is shorter than `image.pixels()`
pub fn gamma_two_pass(image: &RgbImage, params: &GammaParams, out: &mut [u8]) {
    let out = &mut out[..image.pixels()];
    let gamma = params.gamma();

    convert_rgb_to_grayscale(image, params, out);

    for pixel in out.iter_mut() {
        *pixel = clamp_to_u8(PowerApprox::Exact.apply(f32::from(*pixel) / 255.0, gamma) * 255.0);
    }
}
