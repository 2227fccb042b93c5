/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};

/// Side length of the square benchmark image
pub const BENCH_SIZE: usize = 512;

/// Deterministic noise image of `width * height` interleaved RGB pixels
pub fn synthetic_rgb(width: usize, height: usize) -> Vec<u8> {
    let mut rand = WyRand::new_seed(0x5EED);
    let mut pixels = vec![0_u8; width * height * 3];

    rand.fill_bytes(&mut pixels);
    pixels
}
