/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Four lane kernels on plain arrays, used when SSE4.1 is unavailable
use crate::deinterleave::deinterleave_rgb_x4;
use crate::grayscale::{clamp_to_u8, reduce_to_grayscale_x4};
use crate::image::RgbImage;
use crate::kernels::vector::for_each_group;
use crate::params::GammaParams;
use crate::power::{pow_taylor_x4, PowerApprox};

const INV_255: f32 = 1.0 / 255.0;

#[inline(always)]
fn group_grayscale(group: &[u8], params: &GammaParams) -> [f32; 4] {
    let (r, g, b) = deinterleave_rgb_x4(group);

    reduce_to_grayscale_x4(r.map(f32::from), g.map(f32::from), b.map(f32::from), params)
}

pub(crate) fn gamma_exact_portable(image: &RgbImage, params: &GammaParams, out: &mut [u8]) {
    let gamma = params.gamma();

    for_each_group(image, params, out, |src, dst| {
        let gray = group_grayscale(src, params);
        let corrected = PowerApprox::Exact.apply_x4(gray.map(|x| x / 255.0), gamma);

        for (pixel, value) in dst.iter_mut().zip(corrected) {
            *pixel = clamp_to_u8(value * 255.0);
        }
    });
}

pub(crate) fn gamma_taylor_portable(image: &RgbImage, params: &GammaParams, out: &mut [u8]) {
    let gamma = params.gamma();

    for_each_group(image, params, out, |src, dst| {
        let gray = group_grayscale(src, params);
        let corrected = pow_taylor_x4(gray.map(|x| x * INV_255), gamma);

        for (pixel, value) in dst.iter_mut().zip(corrected) {
            *pixel = clamp_to_u8(value * 255.0);
        }
    });
}
