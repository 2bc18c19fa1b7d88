/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Smooth an image with a 3x3 mean filter
use pnm_image::channel::Channel;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

use crate::mathops::clamp;
use crate::spatial::{eight_neighbours, spatial_interior};

/// Smooth an image
///
/// Each interior pixel becomes the mean of its 3x3 window truncated
/// towards zero, border pixels become zero.
#[derive(Default, Copy, Clone)]
pub struct Smooth;

impl Smooth {
    #[must_use]
    pub fn new() -> Smooth {
        Self
    }
}

impl OperationsTrait for Smooth {
    fn name(&self) -> &'static str {
        "Smooth"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.get_dimensions();
        let colorspace = image.get_colorspace();

        let new_channels = smooth_channels(image.get_channels_ref(), width, height)?;

        image.replace_channels(new_channels, width, height, colorspace)
    }
}

/// Smooth every channel into freshly allocated channels
pub(crate) fn smooth_channels(
    channels: &[Channel], width: usize, height: usize
) -> Result<Vec<Channel>, ImageErrors> {
    channels
        .iter()
        .map(|channel| {
            let mut out_channel = Channel::try_new(width * height)?;
            smooth(channel.as_slice(), out_channel.as_mut_slice(), width, height);
            Ok(out_channel)
        })
        .collect()
}

/// Smooth `in_channel` into `out_channel`
pub fn smooth(in_channel: &[u8], out_channel: &mut [u8], width: usize, height: usize) {
    spatial_interior(in_channel, out_channel, width, height, |channel, row, col| {
        let neighbours = eight_neighbours(channel, width, row, col);

        let sum = neighbours
            .iter()
            .fold(i32::from(channel[row * width + col]), |acc, x| {
                acc + i32::from(*x)
            });

        clamp(sum / 9)
    });
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pnm_core::colorspace::ColorSpace;
    use pnm_image::image::Image;
    use pnm_image::traits::OperationsTrait;

    use crate::smooth::{smooth, Smooth};

    #[test]
    fn test_smooth_truncates() {
        // sum is 44, 44/9 = 4.88
        let data = [4, 4, 4, 4, 12, 4, 4, 4, 4];
        let mut out = [1; 9];
        smooth(&data, &mut out, 3, 3);

        assert_eq!(out, [0, 0, 0, 0, 4, 0, 0, 0, 0]);
    }

    #[test]
    fn test_uniform_interior_is_kept() {
        let mut image = Image::fill(77, ColorSpace::Luma, 6, 5).unwrap();
        Smooth::new().execute(&mut image).unwrap();

        let channel = image.red_or_gray().as_slice();

        for row in 0..5 {
            for col in 0..6 {
                let border = row == 0 || row == 4 || col == 0 || col == 5;
                let expected = if border { 0 } else { 77 };
                assert_eq!(channel[row * 6 + col], expected);
            }
        }
    }

    #[test]
    fn test_smooth_stays_in_range() {
        let mut data = vec![0_u8; 40 * 30];
        nanorand::WyRand::new().fill(&mut data);

        let min = *data.iter().min().unwrap();
        let max = *data.iter().max().unwrap();

        let mut out = vec![0; data.len()];
        smooth(&data, &mut out, 40, 30);

        for row in 1..29 {
            for col in 1..39 {
                let value = out[row * 40 + col];
                assert!(value >= min && value <= max);
            }
        }
    }
}
