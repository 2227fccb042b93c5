/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Agreement between kernel variants and concrete scenarios
use gamma_kernels::grayscale::reduce_to_grayscale;
use gamma_kernels::{GammaParams, RgbImage, Variant};
use nanorand::{Rng, WyRand};

const SENTINEL: u8 = 0xA5;

fn random_pixels(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut rand = WyRand::new_seed(seed);
    let mut pixels = vec![0_u8; width * height * 3];

    rand.fill_bytes(&mut pixels);
    pixels
}

fn run(variant: Variant, image: &RgbImage, params: &GammaParams) -> Vec<u8> {
    let mut out = vec![0; image.pixels()];

    variant.execute(image, params, &mut out).unwrap();
    out
}

fn max_difference(a: &[u8], b: &[u8]) -> u8 {
    a.iter().zip(b).map(|(x, y)| x.abs_diff(*y)).max().unwrap_or(0)
}

#[test]
fn decomposed_and_vector_exact_match_reference() {
    let pixels = random_pixels(61, 23, 0xDEAD_BEEF);
    let image = RgbImage::new(&pixels, 61, 23).unwrap();

    for gamma in [0.5, 1.0, 2.0, 2.5] {
        let params = GammaParams::default().with_gamma(gamma).unwrap();
        let reference = run(Variant::Reference, &image, &params);

        let decomposed = run(Variant::Decomposed, &image, &params);
        assert!(
            max_difference(&reference, &decomposed) <= 2,
            "decomposed, gamma {gamma}"
        );

        let vector = run(Variant::VectorExact, &image, &params);
        assert!(max_difference(&reference, &vector) <= 2, "vector, gamma {gamma}");
    }
}

#[test]
fn vector_taylor_error_grows_for_dark_pixels() {
    let width = 37;
    let height = 19;
    let pixels = random_pixels(width, height, 7);
    let image = RgbImage::new(&pixels, width, height).unwrap();

    for gamma in [0.5, 1.0] {
        let params = GammaParams::default().with_gamma(gamma).unwrap();

        let reference = run(Variant::Reference, &image, &params);
        let taylor = run(Variant::VectorTaylor, &image, &params);

        for (i, pixel) in pixels.chunks_exact(3).enumerate() {
            let gray = reduce_to_grayscale(pixel[0], pixel[1], pixel[2], &params);
            let tolerance = 2.0 + (255.0 - gray) / 3.0;
            let difference = f32::from(reference[i].abs_diff(taylor[i]));

            assert!(
                difference <= tolerance,
                "pixel {i}, gray {gray}, gamma {gamma}: {} vs {}",
                reference[i],
                taylor[i]
            );
        }
    }
}

#[test]
fn two_pass_matches_reference_for_identity_gamma() {
    let pixels = random_pixels(16, 16, 99);
    let image = RgbImage::new(&pixels, 16, 16).unwrap();
    let params = GammaParams::default().with_gamma(1.0).unwrap();

    let reference = run(Variant::Reference, &image, &params);
    let two_pass = run(Variant::TwoPass, &image, &params);

    assert!(max_difference(&reference, &two_pass) <= 1);
}

#[test]
fn boundary_widths_write_every_pixel() {
    let params = GammaParams::default().with_gamma(1.0).unwrap();

    for width in [1, 3, 4, 5, 6, 7, 8, 9, 13] {
        for height in [1, 2, 3] {
            // pure white maps to 255 in every variant, so any sentinel left
            // behind is a pixel that was skipped
            let pixels = vec![255_u8; width * height * 3];
            let image = RgbImage::new(&pixels, width, height).unwrap();

            for variant in Variant::ALL {
                let mut out = vec![SENTINEL; width * height + 4];

                variant.execute(&image, &params, &mut out).unwrap();

                assert!(
                    out[..width * height].iter().all(|x| *x == 255),
                    "variant {variant} width {width} height {height}: {out:?}"
                );
                assert_eq!(&out[width * height..], &[SENTINEL; 4], "wrote past the image");
            }
        }
    }
}

#[test]
fn boundary_widths_agree_on_random_content() {
    let params = GammaParams::default();

    for width in [1, 3, 4, 5, 6, 7, 8] {
        let pixels = random_pixels(width, 4, width as u64);
        let image = RgbImage::new(&pixels, width, 4).unwrap();

        let reference = run(Variant::Reference, &image, &params);
        let vector = run(Variant::VectorExact, &image, &params);

        assert_eq!(reference, vector, "width {width}");
    }
}

#[test]
fn white_row_with_identity_gamma() {
    let pixels = [255_u8; 12];
    let image = RgbImage::new(&pixels, 4, 1).unwrap();
    let params = GammaParams::default().with_gamma(1.0).unwrap();

    for variant in Variant::ALL {
        assert_eq!(run(variant, &image, &params), [255; 4], "variant {variant}");
    }
}

#[test]
fn black_pixel_stays_black() {
    let pixels = [0_u8; 3];
    let image = RgbImage::new(&pixels, 1, 1).unwrap();
    let params = GammaParams::default().with_gamma(2.2).unwrap();

    // a single pixel always goes through the scalar tail
    for variant in Variant::ALL {
        assert_eq!(run(variant, &image, &params), [0], "variant {variant}");
    }
}

#[test]
fn zero_gamma_is_white() {
    let pixels = random_pixels(11, 5, 3);
    let image = RgbImage::new(&pixels, 11, 5).unwrap();
    let params = GammaParams::default().with_gamma(0.0).unwrap();

    for variant in [Variant::Reference, Variant::TwoPass, Variant::VectorExact] {
        assert!(
            run(variant, &image, &params).iter().all(|x| *x == 255),
            "variant {variant}"
        );
    }
}

#[test]
fn repeated_runs_are_identical() {
    let pixels = random_pixels(29, 7, 1234);
    let image = RgbImage::new(&pixels, 29, 7).unwrap();
    let params = GammaParams::default().with_gamma(2.2).unwrap();

    for variant in Variant::ALL {
        let first = run(variant, &image, &params);
        let second = run(variant, &image, &params);

        assert_eq!(first, second, "variant {variant}");
    }
}

#[test]
fn input_is_not_modified() {
    let pixels = random_pixels(9, 9, 5);
    let copy = pixels.clone();
    let image = RgbImage::new(&pixels, 9, 9).unwrap();

    for variant in Variant::ALL {
        let _ = run(variant, &image, &GammaParams::default());
    }
    assert_eq!(pixels, copy);
}
