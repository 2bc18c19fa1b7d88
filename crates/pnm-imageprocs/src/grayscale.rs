/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert RGB images to grayscale
use pnm_core::colorspace::ColorSpace;
use pnm_core::log::trace;
use pnm_image::channel::Channel;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

use crate::mathops::round_clamp;

/// Convert an image to grayscale
///
/// The luma of a pixel is `round(0.3*R + 0.6*G + 0.1*B)`.
/// The result is a single channel image, converting an image that is
/// already grayscale leaves it untouched.
#[derive(Default, Copy, Clone)]
pub struct Grayscale;

impl Grayscale {
    #[must_use]
    pub fn new() -> Grayscale {
        Self
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if image.is_grayscale() {
            trace!("Image already grayscale, nothing to do");
            return Ok(());
        }
        let (width, height) = image.get_dimensions();
        let gray = grayscale_channel(image)?;

        image.replace_channels(vec![gray], width, height, ColorSpace::Luma)
    }
}

/// Compute the gray channel of `image` without modifying it
///
/// For grayscale images this is a copy of the existing channel.
pub(crate) fn grayscale_channel(image: &Image) -> Result<Channel, ImageErrors> {
    let (width, height) = image.get_dimensions();

    match (image.green(), image.blue()) {
        (Some(green), Some(blue)) => {
            let mut out = Channel::try_new(width * height)?;

            rgb_to_grayscale(
                (
                    image.red_or_gray().as_slice(),
                    green.as_slice(),
                    blue.as_slice()
                ),
                out.as_mut_slice()
            );
            Ok(out)
        }
        _ => Ok(image.red_or_gray().clone())
    }
}

/// Convert separate r,g,b channels into one gray channel
pub fn rgb_to_grayscale((r, g, b): (&[u8], &[u8], &[u8]), out: &mut [u8]) {
    for (((r, g), b), out) in r.iter().zip(g).zip(b).zip(out.iter_mut()) {
        let luma = 0.3 * f64::from(*r) + 0.6 * f64::from(*g) + 0.1 * f64::from(*b);

        *out = round_clamp(luma);
    }
}
