/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Repeated, timed kernel invocation
use std::hint::black_box;
use std::time::Instant;

use gamma_core::log::{debug, trace};

use crate::errors::KernelErrors;
use crate::image::RgbImage;
use crate::kernels::vector_backend;
use crate::params::GammaParams;
use crate::variant::Variant;

/// Run `variant` `repetitions` times and return the elapsed wall clock
/// time in seconds
///
/// The output buffer passes through [`black_box`] before and after every
/// call so the compiler can neither hoist the kernel out of the loop nor
/// drop repetitions whose result is overwritten. Zero repetitions time
/// an empty loop.
///
/// # Errors
/// [`KernelErrors::BufferSizeMismatch`] if `out` is shorter than
/// `image.pixels()`, checked once before the clock starts
pub fn benchmark(
    repetitions: u32, variant: Variant, image: &RgbImage, params: &GammaParams, out: &mut [u8]
) -> Result<f64, KernelErrors> {
    let out = image.output_region(out)?;
    let kernel = variant.kernel();

    debug!(
        "Running variant {variant} {repetitions} time(s) on a {}x{} image",
        image.width(),
        image.height()
    );
    if variant.is_vectorized() {
        trace!("Vector backend: {}", vector_backend());
    }

    let start = Instant::now();

    for _ in 0..repetitions {
        black_box(&mut *out);
        kernel(black_box(image), black_box(params), out);
        black_box(&mut *out);
    }
    let elapsed = start.elapsed().as_secs_f64();

    debug!("Variant {variant} finished in {elapsed} seconds");

    Ok(elapsed)
}

#[cfg(test)]
mod tests {
    use crate::benchmark::benchmark;
    use crate::errors::KernelErrors;
    use crate::image::RgbImage;
    use crate::params::GammaParams;
    use crate::variant::Variant;

    #[test]
    fn zero_repetitions_leave_output_untouched() {
        let pixels = [255; 12];
        let image = RgbImage::new(&pixels, 4, 1).unwrap();
        let mut out = [9; 4];

        let elapsed = benchmark(0, Variant::Reference, &image, &GammaParams::default(), &mut out)
            .unwrap();

        assert!(elapsed >= 0.0);
        assert_eq!(out, [9; 4]);
    }

    #[test]
    fn repeated_runs_write_the_result() {
        let pixels = [255; 12];
        let image = RgbImage::new(&pixels, 4, 1).unwrap();
        let params = GammaParams::default().with_gamma(1.0).unwrap();

        for variant in Variant::ALL {
            let mut out = [0; 4];

            benchmark(3, variant, &image, &params, &mut out).unwrap();
            assert_eq!(out, [255; 4], "variant {variant}");
        }
    }

    #[test]
    fn short_output_fails_before_running() {
        let pixels = [0; 12];
        let image = RgbImage::new(&pixels, 4, 1).unwrap();
        let mut out = [0; 2];

        assert!(matches!(
            benchmark(1, Variant::TwoPass, &image, &GammaParams::default(), &mut out),
            Err(KernelErrors::BufferSizeMismatch(4, 2))
        ));
    }
}
