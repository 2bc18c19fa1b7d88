/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Brighten or darken an image
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

use crate::mathops::clamp;

/// Brighten struct
///
/// Adds a constant, possibly negative, value to every sample
/// saturating at 0 and 255.
///
/// # Example
/// ```
/// use pnm_core::colorspace::ColorSpace;
/// use pnm_image::image::Image;
/// use pnm_image::traits::OperationsTrait;
/// use pnm_imageprocs::brighten::Brighten;
///
/// let mut image = Image::fill(10, ColorSpace::Luma, 4, 4).unwrap();
/// Brighten::new(-20).execute(&mut image).unwrap();
/// assert!(image.red_or_gray().as_slice().iter().all(|x| *x == 0));
/// ```
#[derive(Copy, Clone)]
pub struct Brighten {
    value: i32
}

impl Brighten {
    /// Create a new brighten operation
    ///
    /// # Arguments
    ///  - value: Value to increase the channel values with
    #[must_use]
    pub fn new(value: i32) -> Brighten {
        Brighten { value }
    }
}

impl OperationsTrait for Brighten {
    fn name(&self) -> &'static str {
        "Brighten"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        for channel in image.get_channels_mut() {
            brighten(channel.as_mut_slice(), self.value);
        }
        Ok(())
    }
}

/// Add `value` to every sample of `channel`, clamping the result
pub fn brighten(channel: &mut [u8], value: i32) {
    channel
        .iter_mut()
        .for_each(|x| *x = clamp(i32::from(*x).saturating_add(value)));
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::brighten::brighten;

    #[test]
    fn test_brighten_zero_is_identity() {
        let mut data = vec![0_u8; 1000];
        nanorand::WyRand::new().fill(&mut data);
        let original = data.clone();

        brighten(&mut data, 0);
        assert_eq!(data, original);
    }

    #[test]
    fn test_brighten_round_trip_without_clamping() {
        let mut data: Vec<u8> = (50..=200).collect();
        let original = data.clone();

        brighten(&mut data, 55);
        assert_eq!(data[0], 105);
        brighten(&mut data, -55);
        assert_eq!(data, original);
    }

    #[test]
    fn test_brighten_saturates() {
        let mut data = [0, 100, 250];
        brighten(&mut data, 10);
        assert_eq!(data, [10, 110, 255]);

        brighten(&mut data, -300);
        assert_eq!(data, [0, 0, 0]);

        brighten(&mut data, i32::MAX);
        assert_eq!(data, [255, 255, 255]);
    }
}
