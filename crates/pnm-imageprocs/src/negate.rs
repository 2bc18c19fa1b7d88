/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Negate (invert) an image
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

/// Negate an image
///
/// Every sample `x` of every channel becomes `255 - x`
#[derive(Default, Copy, Clone)]
pub struct Negate;

impl Negate {
    #[must_use]
    pub fn new() -> Negate {
        Self
    }
}

impl OperationsTrait for Negate {
    fn name(&self) -> &'static str {
        "Negate"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        for channel in image.get_channels_mut() {
            negate(channel.as_mut_slice());
        }
        Ok(())
    }
}

///Negate a channel
///
/// The formula for negating a 8 bit pixel
///  is `pixel[x,y] = 255-pixel[x,y]`
pub fn negate(in_image: &mut [u8]) {
    in_image.iter_mut().for_each(|x| *x = u8::MAX - *x);
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pnm_core::colorspace::ColorSpace;
    use pnm_image::image::Image;
    use pnm_image::traits::OperationsTrait;

    use crate::negate::{negate, Negate};

    #[test]
    fn test_negate_twice_is_identity() {
        let mut data = vec![0_u8; 255 * 3];
        nanorand::WyRand::new().fill(&mut data);

        let mut image = Image::from_u8(&data, 17, 15, ColorSpace::RGB).unwrap();
        let original = image.clone();

        Negate::new().execute(&mut image).unwrap();
        assert_ne!(image, original);
        Negate::new().execute(&mut image).unwrap();
        assert_eq!(image, original);
    }

    #[test]
    fn test_negate_values() {
        let mut data = [0, 1, 128, 255];
        negate(&mut data);
        assert_eq!(data, [255, 254, 127, 0]);
    }
}
