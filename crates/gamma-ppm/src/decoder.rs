/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use gamma_core::bytestream::ZByteReader;
use gamma_core::colorspace::ColorSpace;
use gamma_core::log::{info, trace};
use gamma_core::options::DecoderOptions;

/// An instance of a PPM decoder
///
/// The decoder can currently decode 8 bit P5 and P6 formats
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    max_value:       usize,
    decoded_headers: bool,
    reader:          ZByteReader<'a>,
    colorspace:      ColorSpace,
    options:         DecoderOptions
}

/// Errors that may occur during decoding
pub enum PPMDecodeErrors {
    Generic(String),
    GenericStatic(&'static str),
    InvalidHeader(String),
    UnsupportedImpl(String),
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    LargeDimensions(usize, usize),
    /// Expected number of bytes, found
    NotEnoughBytes(usize, usize),
    /// Sample value, position, declared maximum
    SampleOutOfRange(u8, usize, usize)
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic(val) => {
                writeln!(f, "{val}")
            }
            Self::GenericStatic(val) => writeln!(f, "{val}"),
            Self::InvalidHeader(val) => {
                writeln!(f, "Invalid header, reason: {val}")
            }
            Self::UnsupportedImpl(val) => {
                writeln!(f, "Unsupported image, reason: {val}")
            }
            Self::ZeroDimensions(width, height) => {
                writeln!(
                    f,
                    "Width and height must be positive, found width={width}, height={height}"
                )
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::NotEnoughBytes(expected, found) => {
                writeln!(
                    f,
                    "Expected {expected} bytes of pixel data but found {found}"
                )
            }
            Self::SampleOutOfRange(value, position, max) => {
                writeln!(
                    f,
                    "Sample {value} at offset {position} exceeds the declared maximum value {max}"
                )
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for PPMDecodeErrors {}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data:PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use gamma_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }
    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded data.
    ///
    /// # Example
    /// ```
    /// use gamma_core::options::DecoderOptions;
    /// use gamma_ppm::PPMDecoder;
    /// let options = DecoderOptions::default().set_max_width(2);
    /// let mut decoder = PPMDecoder::new_with_options(options, b"P6 3 1 255\n123456789");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        let reader = ZByteReader::new(data);

        PPMDecoder {
            width: 0,
            height: 0,
            max_value: 255,
            decoded_headers: false,
            reader,
            colorspace: ColorSpace::Unknown,
            options
        }
    }
    /// Read PPM headers and store them in internal state
    ///
    /// Return Err on Error otherwise return nothing,
    pub fn decode_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        // comments may come before the magic bytes
        skip_spaces(&mut self.reader);

        if self.reader.has(3) {
            let p = self.reader.get_u8();
            let version = self.reader.get_u8();

            if p != b'P' {
                let msg = format!("Expected P as first PPM byte but got '{}' ", p as char);

                return Err(PPMDecodeErrors::Generic(msg));
            }

            if version != b'5' && version != b'6' {
                let msg = format!(
                    "Unsupported PPM version `{}`, supported versions are 5 and 6",
                    version as char
                );

                return Err(PPMDecodeErrors::UnsupportedImpl(msg));
            }
            self.decode_p5_and_p6_header(version)?;
        } else {
            let len = self.reader.remaining();
            let msg = format!("Expected at least 3 bytes in header but stream has {len}");

            return Err(PPMDecodeErrors::Generic(msg));
        }

        Ok(())
    }
    /// Decode header types from P5 and P6 format
    fn decode_p5_and_p6_header(&mut self, version: u8) -> Result<(), PPMDecodeErrors> {
        let colorspace = match version {
            b'5' => ColorSpace::Luma,
            _ => ColorSpace::RGB
        };
        info!("Colorspace: {:?}", colorspace);

        // skip whitespace
        skip_spaces(&mut self.reader);
        // read width
        let width = self.get_integer("width")?;
        // skip whitespace
        skip_spaces(&mut self.reader);
        let height = self.get_integer("height")?;

        if width == 0 || height == 0 {
            return Err(PPMDecodeErrors::ZeroDimensions(width, height));
        }
        if width > self.options.get_max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }
        info!("Width: {}, height: {}", width, height);

        skip_spaces(&mut self.reader);
        // read max value
        let max_value = self.get_integer("maximum value")?;

        if max_value > 255 || max_value == 0 {
            let msg = format!("MAX value {max_value} is outside the supported range 1..=255");

            return Err(PPMDecodeErrors::UnsupportedImpl(msg));
        }
        // exactly one whitespace separates the header from the raster,
        // the raster may itself start with whitespace valued bytes
        let separator = self.reader.get_u8();

        if !separator.is_ascii_whitespace() {
            let msg = format!(
                "Expected a single whitespace after the maximum value but found {separator:#04x}"
            );
            return Err(PPMDecodeErrors::InvalidHeader(msg));
        }
        trace!("Max value: {}", max_value);

        self.width = width;
        self.height = height;
        self.max_value = max_value;
        self.colorspace = colorspace;
        self.decoded_headers = true;

        Ok(())
    }
    /// Read an ascii encoded decimal number
    fn get_integer(&mut self, field: &str) -> Result<usize, PPMDecodeErrors> {
        let mut value = 0_usize;
        let mut digits = 0;

        while !self.reader.eof() {
            let byte = self.reader.get_u8();

            if byte.is_ascii_digit() {
                value = value
                    .checked_mul(10)
                    .and_then(|x| x.checked_add(usize::from(byte - b'0')))
                    .ok_or_else(|| {
                        PPMDecodeErrors::InvalidHeader(format!("The {field} overflows"))
                    })?;
                digits += 1;
            } else {
                // rewind to the previous byte
                self.reader.rewind(1);
                break;
            }
        }
        if digits == 0 {
            let msg = format!("Expected a non-negative integer for the {field}");
            return Err(PPMDecodeErrors::InvalidHeader(msg));
        }
        Ok(value)
    }

    /// Return the image colorspace or none if
    /// headers aren't decoded
    pub const fn get_colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(self.colorspace)
        } else {
            None
        }
    }
    /// Return image dimensions as `(width, height)`
    /// or none if headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }
    /// Return the maximum sample value declared in the header
    /// or none if headers aren't decoded
    pub const fn get_max_value(&self) -> Option<usize> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }
    /// Decode a ppm encoded file and return the raw bytes from it
    ///
    /// For P6 files this is interleaved `R,G,B` samples, for P5 a single
    /// sample per pixel, both in row-major order.
    ///
    /// Trailing bytes after the raster are ignored.
    pub fn decode(&mut self) -> Result<Vec<u8>, PPMDecodeErrors> {
        self.decode_headers()?;

        let size = self
            .width
            .checked_mul(self.height)
            .and_then(|x| x.checked_mul(self.colorspace.num_components()))
            .ok_or(PPMDecodeErrors::GenericStatic("Image dimensions overflow"))?;

        let remaining = self.reader.remaining();

        if remaining < size {
            return Err(PPMDecodeErrors::NotEnoughBytes(size, remaining));
        }
        let data = self
            .reader
            .get_as_ref(size)
            .map_err(PPMDecodeErrors::GenericStatic)?
            .to_vec();

        if self.options.get_strict_mode() && self.max_value < 255 {
            let max = self.max_value;

            if let Some(position) = data.iter().position(|x| usize::from(*x) > max) {
                return Err(PPMDecodeErrors::SampleOutOfRange(
                    data[position],
                    position,
                    max
                ));
            }
        }

        Ok(data)
    }
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(byte_stream: &mut ZByteReader) {
    while !byte_stream.eof() {
        let mut byte = byte_stream.get_u8();

        if byte == b'#' {
            // comment
            // skip the whole comment
            while byte != b'\n' && !byte_stream.eof() {
                byte = byte_stream.get_u8();
            }
        } else if !byte.is_ascii_whitespace() {
            // go back one step, we hit something that is not a space
            byte_stream.rewind(1);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use gamma_core::colorspace::ColorSpace;

    use crate::{PPMDecodeErrors, PPMDecoder};

    #[test]
    fn decode_p6_with_comments() {
        let data = b"# leading\nP6\n# a comment\n2 1 # trailing\n255\n\x01\x02\x03\x04\x05\x06";
        let mut decoder = PPMDecoder::new(data);

        let pixels = decoder.decode().unwrap();

        assert_eq!(pixels, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(decoder.get_dimensions(), Some((2, 1)));
        assert_eq!(decoder.get_colorspace(), Some(ColorSpace::RGB));
        assert_eq!(decoder.get_max_value(), Some(255));
    }

    #[test]
    fn raster_starting_with_whitespace_is_kept() {
        let data = b"P5 2 1 255\n\n\t";
        let mut decoder = PPMDecoder::new(data);

        assert_eq!(decoder.decode().unwrap(), vec![b'\n', b'\t']);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let mut decoder = PPMDecoder::new(b"P6 0 4 255\n");

        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::ZeroDimensions(0, 4))
        ));
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        let mut decoder = PPMDecoder::new(b"P6 -3 4 255\n");

        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::InvalidHeader(_))
        ));
    }

    #[test]
    fn max_value_above_255_is_rejected() {
        let mut decoder = PPMDecoder::new(b"P6 1 1 65535\n\x00\x00\x00\x00\x00\x00");

        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::UnsupportedImpl(_))
        ));
    }

    #[test]
    fn short_raster_is_rejected() {
        let mut decoder = PPMDecoder::new(b"P6 2 2 255\n\x00\x00\x00");

        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::NotEnoughBytes(12, 3))
        ));
    }

    #[test]
    fn samples_above_max_value_are_rejected() {
        let mut decoder = PPMDecoder::new(b"P6 1 1 100\n\x10\x65\x10");

        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::SampleOutOfRange(101, 1, 100))
        ));
    }

    #[test]
    fn unsupported_version() {
        let mut decoder = PPMDecoder::new(b"P3 1 1 255\n1 2 3");

        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::UnsupportedImpl(_))
        ));
    }
}
