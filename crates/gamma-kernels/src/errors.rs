/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors raised before a kernel runs
//!
//! Kernels themselves never fail, every check happens once when
//! parameters, images and output buffers are set up.
use std::fmt::{Debug, Display, Formatter};

pub enum KernelErrors {
    /// Gamma was negative or not a number
    NegativeGamma(f32),
    /// Weight at channel index was negative or not a finite number
    NegativeWeight(usize, f32),
    /// The three weights sum to zero
    ZeroWeightSum,
    /// Width or height is zero, or their product overflows
    InvalidDimensions(usize, usize),
    /// Buffer length does not match what the dimensions need, expected, found
    BufferSizeMismatch(usize, usize),
    /// Selector outside of the known kernel variants
    UnknownVariant(u32),
    /// Could not allocate an output buffer of this many bytes
    AllocationFailed(usize)
}

impl KernelErrors {
    /// Return true if this error stems from user supplied configuration
    /// rather than from the environment
    pub const fn is_configuration_error(&self) -> bool {
        !matches!(self, KernelErrors::AllocationFailed(_))
    }
}

impl Debug for KernelErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeGamma(gamma) => {
                writeln!(f, "Gamma must be a non-negative number, found {gamma}")
            }
            Self::NegativeWeight(index, weight) => {
                let channel = ["red", "green", "blue"].get(*index).unwrap_or(&"unknown");
                writeln!(
                    f,
                    "Weight for the {channel} channel must be a non-negative number, found {weight}"
                )
            }
            Self::ZeroWeightSum => {
                writeln!(f, "Grayscale weights must not sum to zero")
            }
            Self::InvalidDimensions(width, height) => {
                writeln!(f, "Invalid image dimensions {width}x{height}")
            }
            Self::BufferSizeMismatch(expected, found) => {
                writeln!(
                    f,
                    "Buffer size mismatch, expected {expected} bytes but found {found}"
                )
            }
            Self::UnknownVariant(selector) => {
                writeln!(
                    f,
                    "Unknown kernel variant {selector}, expected a value between 0 and 4"
                )
            }
            Self::AllocationFailed(size) => {
                writeln!(f, "Could not allocate {size} bytes for the output image")
            }
        }
    }
}

impl Display for KernelErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for KernelErrors {}
