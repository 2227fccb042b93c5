/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Grayscale reduction and gamma correction kernels
//!
//! Every kernel computes the same transform, a weighted reduction of an
//! interleaved RGB image to one channel followed by gamma correction,
//! but each one gets there differently so they can be timed against each
//! other.
//!
//! | Variant | Power function                    | Layout                                  |
//! |---------|-----------------------------------|-----------------------------------------|
//! | 0       | `powf`                            | scalar                                  |
//! | 1       | integer power + Heron/linear part | scalar                                  |
//! | 2       | `powf`                            | two full image passes                   |
//! | 3       | `powf` per lane                   | four pixels per step, scalar tail       |
//! | 4       | Taylor series `ln`/`exp`          | four pixels per step, scalar tail       |
//!
//! # Example
//! - Run the vectorized exact kernel on a 4x1 white image
//! ```
//! use gamma_kernels::{GammaParams, RgbImage, Variant};
//!
//! let pixels = [255_u8; 12];
//! let image = RgbImage::new(&pixels, 4, 1).unwrap();
//! let params = GammaParams::new([0.299, 0.587, 0.114], 1.0).unwrap();
//!
//! let mut out = [0_u8; 4];
//! Variant::VectorExact.execute(&image, &params, &mut out).unwrap();
//!
//! assert_eq!(out, [255; 4]);
//! ```
//!
//! # Features
//! - `sse41`: Use SSE4.1 for the vectorized kernels when the CPU supports it,
//!   a portable four lane implementation is used otherwise. Enabled by default.
//! - `log`: Emit log records through the `log` crate.
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::wildcard_imports
)]

pub use crate::benchmark::benchmark;
pub use crate::errors::KernelErrors;
pub use crate::image::RgbImage;
pub use crate::params::GammaParams;
pub use crate::power::PowerApprox;
pub use crate::variant::Variant;

pub mod benchmark;
pub mod deinterleave;
pub mod errors;
pub mod grayscale;
pub mod image;
pub mod kernels;
pub mod params;
pub mod power;
pub mod variant;
