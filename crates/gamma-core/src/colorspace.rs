/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image colorspace information

/// The colorspace of a pixel buffer
///
/// Only the two layouts the pixel map codec deals with are
/// described, interleaved 8 bit RGB and single channel luma.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColorSpace {
    /// Red, green and blue samples, interleaved
    RGB,
    /// A single luminance sample per pixel
    Luma,
    /// Colorspace has not been determined yet
    Unknown
}

impl ColorSpace {
    /// Number of samples that make up one pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::Luma => 1,
            Self::Unknown => 0
        }
    }
}

#[test]
fn test_num_components() {
    assert_eq!(ColorSpace::RGB.num_components(), 3);
    assert_eq!(ColorSpace::Luma.num_components(), 1);
    assert_eq!(ColorSpace::Unknown.num_components(), 0);
}
