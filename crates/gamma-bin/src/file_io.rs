/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use gamma_core::colorspace::ColorSpace;
use gamma_core::options::DecoderOptions;
use gamma_ppm::{PPMDecoder, PPMEncoder};
use log::{debug, info};

use crate::errors::CliErrors;

/// A decoded RGB pixel map
pub struct RgbFile {
    pub width:  usize,
    pub height: usize,
    pub pixels: Vec<u8>
}

impl RgbFile {
    /// Read and decode the P6 image at `path`
    pub fn open(path: &Path, options: DecoderOptions) -> Result<RgbFile, CliErrors> {
        let data = std::fs::read(path).map_err(|e| CliErrors::IoErrors(path.to_path_buf(), e))?;
        debug!("Read {} bytes from {}", data.len(), path.display());

        let mut decoder = PPMDecoder::new_with_options(options, &data);
        decoder.decode_headers()?;

        let colorspace = decoder.get_colorspace().unwrap_or(ColorSpace::Unknown);

        if colorspace != ColorSpace::RGB {
            return Err(CliErrors::UnsupportedImage(format!("{colorspace:?}")));
        }
        let (width, height) = decoder
            .get_dimensions()
            .ok_or(CliErrors::Static("Headers were not decoded"))?;

        let pixels = decoder.decode()?;
        info!("Decoded {}x{} image from {}", width, height, path.display());

        Ok(RgbFile {
            width,
            height,
            pixels
        })
    }
}

/// Write `gray` as a binary graymap to `path`
pub fn write_graymap(
    path: &Path, width: usize, height: usize, gray: &[u8]
) -> Result<(), CliErrors> {
    let file = File::create(path).map_err(|e| CliErrors::IoErrors(path.to_path_buf(), e))?;
    let mut writer = BufWriter::new(file);

    PPMEncoder::new(&mut writer).encode_u8(width, height, ColorSpace::Luma, gray)?;

    info!("Wrote {}x{} graymap to {}", width, height, path.display());

    Ok(())
}
