/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The five grayscale and gamma kernels
//!
//! Every kernel reads `image.pixels() * 3` bytes and writes exactly
//! `image.pixels()` bytes at the start of `out`, one per pixel in row major
//! order. Callers are expected to validate `out` beforehand, see
//! [`Variant::execute`](crate::Variant::execute), kernels panic on a short
//! buffer.
//!
//! The vectorized kernels pick SSE4.1 at runtime when the `sse41` feature
//! is enabled and the CPU supports it, otherwise a portable four lane
//! implementation producing the same bytes runs.
pub use crate::kernels::scalar::{gamma_decomposed_scalar, gamma_exact_scalar, gamma_two_pass};
pub use crate::kernels::vector::{RowPlan, TailBranch};
use crate::image::RgbImage;
use crate::params::GammaParams;

mod portable;
mod scalar;
mod sse41;
mod vector;

/// Signature shared by every kernel
pub type KernelFn = fn(&RgbImage, &GammaParams, &mut [u8]);

/// Four pixels per step, `powf` per lane, scalar tail
///
/// # Panics
/// If `out` is shorter than `image.pixels()`
pub fn gamma_exact_x4(image: &RgbImage, params: &GammaParams, out: &mut [u8]) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            if is_x86_feature_detected!("sse4.1") {
                unsafe {
                    return sse41::gamma_exact_sse41(image, params, out);
                }
            }
        }
    }
    portable::gamma_exact_portable(image, params, out);
}

/// Four pixels per step, Taylor series power, scalar tail using `powf`
///
/// # Panics
/// If `out` is shorter than `image.pixels()`
pub fn gamma_taylor_x4(image: &RgbImage, params: &GammaParams, out: &mut [u8]) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            if is_x86_feature_detected!("sse4.1") {
                unsafe {
                    return sse41::gamma_taylor_sse41(image, params, out);
                }
            }
        }
    }
    portable::gamma_taylor_portable(image, params, out);
}

/// Name of the implementation the vectorized kernels run on this machine
pub fn vector_backend() -> &'static str {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "sse41")]
        {
            if is_x86_feature_detected!("sse4.1") {
                return "sse4.1";
            }
        }
    }
    "portable"
}
