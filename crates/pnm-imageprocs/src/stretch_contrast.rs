/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Contrast stretching
//!
//! The image is first converted to grayscale, then the
//! range `[min, max]` of the gray channel is linearly stretched to `[0, 255]`.
use pnm_core::colorspace::ColorSpace;
use pnm_core::log::warn;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

use crate::grayscale::grayscale_channel;
use crate::mathops::round_clamp;

/// What to do when every pixel of the gray image has the same value
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DegeneratePolicy {
    /// Keep the grayscale image as is
    #[default]
    Identity,
    /// Fail with [`ImageErrors::DegenerateContrast`], leaving the image untouched
    Reject
}

/// Linearly stretch contrast of an image
#[derive(Default, Copy, Clone)]
pub struct StretchContrast {
    policy: DegeneratePolicy
}

impl StretchContrast {
    /// Create a new contrast stretch
    ///
    /// # Arguments
    /// - policy: What to do with images that have a single gray level
    #[must_use]
    pub fn new(policy: DegeneratePolicy) -> StretchContrast {
        StretchContrast { policy }
    }
}

impl OperationsTrait for StretchContrast {
    fn name(&self) -> &'static str {
        "Stretch Contrast"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.get_dimensions();
        let mut gray = grayscale_channel(image)?;

        let (lower, upper) = min_max(gray.as_slice()).ok_or(ImageErrors::GenericStr(
            "Cannot stretch contrast of an empty image"
        ))?;

        if lower == upper {
            match self.policy {
                DegeneratePolicy::Reject => return Err(ImageErrors::DegenerateContrast(lower)),
                DegeneratePolicy::Identity => {
                    warn!("Every pixel has the value {}, contrast left unchanged", lower);
                }
            }
        } else {
            stretch_contrast(gray.as_mut_slice(), lower, upper);
        }
        image.replace_channels(vec![gray], width, height, ColorSpace::Luma)
    }
}

/// Return the smallest and largest value of `channel`
pub fn min_max(channel: &[u8]) -> Option<(u8, u8)> {
    let lower = channel.iter().min()?;
    let upper = channel.iter().max()?;

    Some((*lower, *upper))
}

/// Stretch `[lower, upper]` to `[0, 255]`
///
/// `out = round(255/(upper-lower) * (x - lower))` clamped to a pixel.
/// Does nothing when `upper <= lower`.
pub fn stretch_contrast(channel: &mut [u8], lower: u8, upper: u8) {
    if upper <= lower {
        return;
    }
    let scale = 255.0 / f64::from(upper - lower);

    for pixel in channel.iter_mut() {
        let value = f64::from(i32::from(*pixel) - i32::from(lower));

        *pixel = round_clamp(scale * value);
    }
}

#[cfg(test)]
mod tests {
    use pnm_core::colorspace::ColorSpace;
    use pnm_image::errors::ImageErrors;
    use pnm_image::image::Image;
    use pnm_image::traits::OperationsTrait;

    use crate::stretch_contrast::{stretch_contrast, DegeneratePolicy, StretchContrast};

    #[test]
    fn test_stretch_full_range() {
        let mut data = [100, 101, 102];
        stretch_contrast(&mut data, 100, 102);

        // 127.5 rounds up
        assert_eq!(data, [0, 128, 255]);

        let mut data = [0, 10, 20, 255];
        stretch_contrast(&mut data, 10, 20);
        assert_eq!(data, [0, 0, 255, 255]);
    }

    #[test]
    fn test_contrast_converts_to_grayscale() {
        let pixels = [10, 10, 10, 20, 20, 20, 30, 30, 30];
        let mut image = Image::from_u8(&pixels, 3, 1, ColorSpace::RGB).unwrap();

        StretchContrast::default().execute(&mut image).unwrap();

        assert!(image.is_grayscale());
        assert_eq!(image.red_or_gray().as_slice(), [0, 128, 255]);
    }

    #[test]
    fn test_uniform_image_identity() {
        let mut image = Image::fill(40, ColorSpace::RGB, 4, 4).unwrap();

        StretchContrast::new(DegeneratePolicy::Identity)
            .execute(&mut image)
            .unwrap();

        assert!(image.is_grayscale());
        assert!(image.red_or_gray().as_slice().iter().all(|x| *x == 40));
    }

    #[test]
    fn test_uniform_image_rejected_untouched() {
        let mut image = Image::fill(40, ColorSpace::RGB, 4, 4).unwrap();
        let before = image.clone();

        let result = StretchContrast::new(DegeneratePolicy::Reject).execute(&mut image);

        assert!(matches!(result, Err(ImageErrors::DegenerateContrast(40))));
        assert_eq!(image, before);
    }
}
