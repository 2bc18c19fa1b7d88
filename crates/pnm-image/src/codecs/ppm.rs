/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Glue between the PNM codec and images
use std::io::Write;

use pnm_core::colorspace::ColorSpace;
use pnm_core::log::{trace, warn};
pub use pnm_ppm::*;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::metadata::ImageMetadata;
use crate::traits::IntoImage;

impl<'a> IntoImage for PPMDecoder<'a> {
    fn into_image(mut self) -> Result<Image, ImageErrors> {
        let pixels = self.decode()?;
        let header = self
            .get_header()
            .ok_or(ImageErrors::GenericStr("Headers not decoded"))?;

        let colorspace = header.version.colorspace();
        let mut image = Image::from_u8(&pixels, header.width, header.height, colorspace)?;

        image.metadata = ImageMetadata::from_header(header);

        Ok(image)
    }
}

/// The version an image should be written as
///
/// Grayscale images map to P2/P5, color images to P3/P6
pub fn output_version(image: &Image, ascii: bool) -> PnmVersion {
    PnmVersion::for_output(image.is_grayscale(), ascii)
}

/// Encode `image` as `version` into `writer`
///
/// Comments and the max value of the image metadata are written in the header.
///
/// # Errors
/// - If `version` disagrees with the image colorspace
/// - On I/O errors
pub fn encode_ppm<W: Write>(
    image: &Image, version: PnmVersion, writer: &mut W
) -> Result<(), ImageErrors> {
    if version.is_grayscale() != image.is_grayscale() {
        return Err(ImageErrors::UnsupportedColorspace(
            image.get_colorspace(),
            "ppm encoding",
            if version.is_grayscale() {
                &[ColorSpace::Luma]
            } else {
                &[ColorSpace::RGB]
            }
        ));
    }
    let mut header = image.get_metadata().to_header(version);
    let pixels = image.flatten();

    if let Some(max) = pixels.iter().max() {
        if u16::from(*max) > header.max_value {
            warn!(
                "Pixel value {} exceeds max value {}, writing 255 as max value",
                max, header.max_value
            );
            header.max_value = 255;
        }
    }
    trace!("Writing {} image with {} comments", version, header.comments.len());

    PPMEncoder::new(writer).encode(&header, &pixels)?;

    Ok(())
}
