/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all gamma crates
//!
//! It currently contains
//!
//! - A byte reader used by the pixel map decoder
//! - Colorspace information shared by images
//! - Decoder options
//! - Logging macros which are no-ops unless the `log` feature is enabled
//!
//! # Features
//!  - `log`: Route the crate's logging macros to the [`log`](https://docs.rs/log) facade.
#![macro_use]

pub mod bytestream;
pub mod colorspace;
pub mod log;
pub mod options;
