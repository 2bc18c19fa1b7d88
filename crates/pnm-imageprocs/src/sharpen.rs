/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sharpen an image with a 4-neighbour laplacian
use pnm_image::channel::Channel;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

use crate::mathops::clamp;
use crate::spatial::{four_neighbours, spatial_interior};

/// Sharpen an image
///
/// Each interior pixel becomes `5*center - up - left - right - down`,
/// border pixels become zero.
#[derive(Default, Copy, Clone)]
pub struct Sharpen;

impl Sharpen {
    #[must_use]
    pub fn new() -> Sharpen {
        Self
    }
}

impl OperationsTrait for Sharpen {
    fn name(&self) -> &'static str {
        "Sharpen"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.get_dimensions();
        let colorspace = image.get_colorspace();

        let mut new_channels = Vec::with_capacity(colorspace.num_components());

        for channel in image.get_channels_ref() {
            let mut out_channel = Channel::try_new(width * height)?;

            sharpen(channel.as_slice(), out_channel.as_mut_slice(), width, height);
            new_channels.push(out_channel);
        }
        image.replace_channels(new_channels, width, height, colorspace)
    }
}

/// Sharpen `in_channel` into `out_channel`
pub fn sharpen(in_channel: &[u8], out_channel: &mut [u8], width: usize, height: usize) {
    spatial_interior(in_channel, out_channel, width, height, |channel, row, col| {
        let [up, left, right, down] = four_neighbours(channel, width, row, col);
        let center = i32::from(channel[row * width + col]);

        clamp(
            5 * center - i32::from(up) - i32::from(left) - i32::from(right) - i32::from(down)
        )
    });
}

#[cfg(test)]
mod tests {
    use pnm_core::colorspace::ColorSpace;
    use pnm_image::image::Image;
    use pnm_image::traits::OperationsTrait;

    use crate::sharpen::{sharpen, Sharpen};

    #[test]
    fn test_sharpen_3x3() {
        #[rustfmt::skip]
        let data = [
            10, 20, 10,
            20, 50, 20,
            10, 20, 10
        ];
        let mut out = [1; 9];
        sharpen(&data, &mut out, 3, 3);

        // 5*50 - 4*20
        assert_eq!(out, [0, 0, 0, 0, 170, 0, 0, 0, 0]);
    }

    #[test]
    fn test_sharpen_clamps() {
        let mut out = [1; 9];
        sharpen(&[255, 255, 255, 255, 0, 255, 255, 255, 255], &mut out, 3, 3);
        assert_eq!(out[4], 0);

        sharpen(&[0, 0, 0, 0, 255, 0, 0, 0, 0], &mut out, 3, 3);
        assert_eq!(out[4], 255);
    }

    #[test]
    fn test_all_zero_input() {
        let mut image = Image::fill(0, ColorSpace::RGB, 3, 3).unwrap();
        Sharpen::new().execute(&mut image).unwrap();

        assert_eq!(image.flatten(), [0; 27]);
    }

    #[test]
    fn test_narrow_images_are_all_border() {
        let mut image = Image::fill(200, ColorSpace::RGB, 2, 5).unwrap();
        Sharpen::new().execute(&mut image).unwrap();

        assert!(image.flatten().iter().all(|x| *x == 0));
        assert_eq!(image.get_dimensions(), (2, 5));
    }
}
