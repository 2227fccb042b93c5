/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::{Error, Write};

use gamma_core::colorspace::ColorSpace;

/// Errors occurring during encoding
pub enum PPMErrors {
    Static(&'static str),
    IOErrors(io::Error)
}

impl From<io::Error> for PPMErrors {
    fn from(err: Error) -> Self {
        PPMErrors::IOErrors(err)
    }
}

impl Debug for PPMErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PPMErrors::Static(ref errors) => {
                writeln!(f, "{errors}")
            }
            PPMErrors::IOErrors(ref err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for PPMErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for PPMErrors {}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PPMVersions {
    /// Binary graymap
    P5,
    /// Binary pixmap
    P6
}

impl Display for PPMVersions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P6 => write!(f, "P6"),
            Self::P5 => write!(f, "P5")
        }
    }
}

/// A PPM encoder
pub struct PPMEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PPMEncoder<'a, W> {
    /// Create a new PPM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PPMEncoder<'a, W> {
        Self { writer }
    }

    /// Write headers for P5 and P6 formats
    ///
    /// The layout is `<magic>\n<width> <height>\n<max_val>\n`
    fn write_headers(
        &mut self, version: PPMVersions, width: usize, height: usize, max_val: usize
    ) -> Result<(), PPMErrors> {
        let header = format!("{version}\n{width} {height}\n{max_val}\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode `data` as an 8 bit binary pixel map.
    ///
    /// `Luma` data is written as P5 and `RGB` data as P6
    pub fn encode_u8(
        &mut self, width: usize, height: usize, colorspace: ColorSpace, data: &[u8]
    ) -> Result<(), PPMErrors> {
        let version = version_for_colorspace(colorspace)
            .ok_or(PPMErrors::Static("Unsupported colorspace for PPM"))?;

        if width == 0 || height == 0 {
            return Err(PPMErrors::Static("Image dimensions must be positive"));
        }
        if width * height * colorspace.num_components() != data.len() {
            return Err(PPMErrors::Static(
                "Data length does not match image dimensions"
            ));
        }
        self.write_headers(version, width, height, 255)?;
        self.writer.write_all(data)?;
        self.writer.flush()?;

        Ok(())
    }
}

/// Return the pixel map version that stores `colorspace`
pub const fn version_for_colorspace(colorspace: ColorSpace) -> Option<PPMVersions> {
    match colorspace {
        ColorSpace::Luma => Some(PPMVersions::P5),
        ColorSpace::RGB => Some(PPMVersions::P6),
        ColorSpace::Unknown => None
    }
}
