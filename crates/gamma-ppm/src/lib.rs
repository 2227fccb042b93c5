/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A binary pixel map decoder and encoder
//!
//! This crate reads 8 bit binary PPM (`P6`) and PGM (`P5`) files and
//! writes them back.
//!
//! # Example
//! - Write a 2x1 grayscale image and read it back
//! ```
//! use gamma_core::colorspace::ColorSpace;
//! use gamma_ppm::{PPMDecoder, PPMEncoder};
//!
//! let mut out = Vec::new();
//! PPMEncoder::new(&mut out)
//!     .encode_u8(2, 1, ColorSpace::Luma, &[12, 200])
//!     .unwrap();
//!
//! assert_eq!(&out[..], b"P5\n2 1\n255\n\x0c\xc8");
//!
//! let mut decoder = PPMDecoder::new(&out);
//! assert_eq!(decoder.decode().unwrap(), vec![12, 200]);
//! assert_eq!(decoder.get_dimensions(), Some((2, 1)));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(clippy::needless_return, clippy::module_name_repetitions)]

pub use decoder::*;
pub use encoder::*;
pub use gamma_core;

mod decoder;
mod encoder;
