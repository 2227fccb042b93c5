/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Borrowed view over an interleaved RGB image
use crate::errors::KernelErrors;

/// Number of interleaved samples per pixel
pub const RGB_STRIDE: usize = 3;

/// An immutable interleaved RGB image, `R,G,B,R,G,B...` in row major order
///
/// Construction validates that the buffer holds exactly
/// `width * height * 3` bytes, kernels rely on that.
#[derive(Copy, Clone, Debug)]
pub struct RgbImage<'a> {
    data:   &'a [u8],
    width:  usize,
    height: usize
}

impl<'a> RgbImage<'a> {
    /// Create a view over `data`
    ///
    /// # Errors
    /// - [`KernelErrors::InvalidDimensions`] if either dimension is zero or the
    ///   pixel count overflows
    /// - [`KernelErrors::BufferSizeMismatch`] if `data` is not exactly
    ///   `width * height * 3` bytes
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<RgbImage<'a>, KernelErrors> {
        let expected = checked_size(width, height, RGB_STRIDE)?;

        if data.len() != expected {
            return Err(KernelErrors::BufferSizeMismatch(expected, data.len()));
        }
        Ok(RgbImage {
            data,
            width,
            height
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels, which is also the number of bytes a kernel writes
    pub const fn pixels(&self) -> usize {
        self.width * self.height
    }

    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Iterate over rows of `width * 3` bytes
    pub fn rows(&self) -> std::slice::ChunksExact<'a, u8> {
        self.data.chunks_exact(self.width * RGB_STRIDE)
    }

    /// Check that `out` can take a full output image, returning the
    /// part of it kernels write to
    ///
    /// # Errors
    /// [`KernelErrors::BufferSizeMismatch`] if `out` is shorter than
    /// `width * height`
    pub fn output_region<'b>(&self, out: &'b mut [u8]) -> Result<&'b mut [u8], KernelErrors> {
        let pixels = self.pixels();

        if out.len() < pixels {
            return Err(KernelErrors::BufferSizeMismatch(pixels, out.len()));
        }
        Ok(&mut out[..pixels])
    }

    /// Allocate a zeroed single channel output buffer for this image
    ///
    /// # Errors
    /// [`KernelErrors::AllocationFailed`] if the allocator cannot provide
    /// `width * height` bytes
    pub fn allocate_output(&self) -> Result<Vec<u8>, KernelErrors> {
        let pixels = self.pixels();
        let mut out = Vec::new();

        out.try_reserve_exact(pixels)
            .map_err(|_| KernelErrors::AllocationFailed(pixels))?;
        out.resize(pixels, 0);

        Ok(out)
    }
}

/// Compute `width * height * components`, rejecting zero and overflow
///
/// # Errors
/// [`KernelErrors::InvalidDimensions`] on zero or overflowing dimensions
pub fn checked_size(width: usize, height: usize, components: usize) -> Result<usize, KernelErrors> {
    if width == 0 || height == 0 {
        return Err(KernelErrors::InvalidDimensions(width, height));
    }
    width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(components))
        .ok_or(KernelErrors::InvalidDimensions(width, height))
}
