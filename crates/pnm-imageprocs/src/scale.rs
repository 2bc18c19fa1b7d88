/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Nearest neighbour scaling followed by a smooth
use pnm_core::log::{trace, warn};
use pnm_image::channel::Channel;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

use crate::smooth::smooth_channels;

/// Smallest accepted scale percentage
pub const MIN_SCALE_PERCENT: i32 = 50;
/// Largest accepted scale percentage
pub const MAX_SCALE_PERCENT: i32 = 200;

/// Scale an image by a percentage
///
/// Percentages outside `[50, 200]` and exactly `100` leave the image
/// untouched. New dimensions are `floor(old * percent / 100)` and the
/// scaled image is smoothed afterwards.
#[derive(Copy, Clone)]
pub struct Scale {
    percent: i32
}

impl Scale {
    #[must_use]
    pub fn new(percent: i32) -> Scale {
        Scale { percent }
    }
}

impl OperationsTrait for Scale {
    fn name(&self) -> &'static str {
        "Scale"
    }

    #[allow(clippy::cast_sign_loss)]
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if !(MIN_SCALE_PERCENT..=MAX_SCALE_PERCENT).contains(&self.percent) {
            warn!(
                "Scale percent {} outside {}..={}, image left unchanged",
                self.percent, MIN_SCALE_PERCENT, MAX_SCALE_PERCENT
            );
            return Ok(());
        }
        if self.percent == 100 {
            trace!("Scale of 100% is a no-op");
            return Ok(());
        }
        let (width, height) = image.get_dimensions();
        // positive, checked above
        let percent = self.percent as usize;

        let new_width = width * percent / 100;
        let new_height = height * percent / 100;

        if new_width == 0 || new_height == 0 {
            return Err(ImageErrors::InvalidDimensions(new_height, new_width));
        }
        trace!(
            "Scaling from {}x{} to {}x{}",
            width,
            height,
            new_width,
            new_height
        );
        let colorspace = image.get_colorspace();

        let scaled = image
            .get_channels_ref()
            .iter()
            .map(|channel| {
                let mut out = Channel::try_new(new_width * new_height)?;

                scale_nearest(
                    channel.as_slice(),
                    out.as_mut_slice(),
                    (width, height),
                    (new_width, new_height)
                );
                Ok(out)
            })
            .collect::<Result<Vec<Channel>, ImageErrors>>()?;

        let smoothed = smooth_channels(&scaled, new_width, new_height)?;

        image.replace_channels(smoothed, new_width, new_height, colorspace)
    }
}

/// Nearest neighbour resample of `in_channel` into `out_channel`
///
/// Destination `(row, col)` samples source
/// `(row * in_height / out_height, col * in_width / out_width)`,
/// which always lies inside the source.
pub fn scale_nearest(
    in_channel: &[u8], out_channel: &mut [u8], (in_width, in_height): (usize, usize),
    (out_width, out_height): (usize, usize)
) {
    for (row, out_row) in out_channel
        .chunks_exact_mut(out_width)
        .take(out_height)
        .enumerate()
    {
        let src_row = row * in_height / out_height;
        let in_row = &in_channel[src_row * in_width..(src_row + 1) * in_width];

        for (col, pixel) in out_row.iter_mut().enumerate() {
            *pixel = in_row[col * in_width / out_width];
        }
    }
}
