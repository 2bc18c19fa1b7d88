/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Canny-style edge detection
//!
//! The pipeline is
//! 1. Smooth
//! 2. Grayscale
//! 3. Sobel gradient magnitude and direction
//! 4. Non-maximum suppression along the gradient direction
//! 5. Double threshold into none/weak/strong edges
//!
//! No hysteresis pass follows, weak edges are part of the final output.
use std::f64::consts::PI;

use pnm_core::colorspace::ColorSpace;
use pnm_image::channel::Channel;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

use crate::grayscale::Grayscale;
use crate::mathops::{clamp, round_clamp};
use crate::smooth::Smooth;
use crate::spatial::eight_neighbours;

/// Magnitudes below this are not edges
pub const LOWER_THRESHOLD: u8 = 30;
/// Magnitudes above this are strong edges
pub const UPPER_THRESHOLD: u8 = 125;
/// Output value of a weak edge
pub const WEAK_EDGE: u8 = 127;
/// Output value of a strong edge
pub const STRONG_EDGE: u8 = 255;

/// Gradient direction quantized to four bins
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum GradientAngle {
    /// Horizontal gradient, compare left and right
    #[default]
    Deg0,
    /// Compare below-left and above-right
    Deg45,
    /// Vertical gradient, compare above and below
    Deg90,
    /// Compare below-right and above-left
    Deg135
}

impl GradientAngle {
    pub const fn degrees(self) -> u16 {
        match self {
            GradientAngle::Deg0 => 0,
            GradientAngle::Deg45 => 45,
            GradientAngle::Deg90 => 90,
            GradientAngle::Deg135 => 135
        }
    }
}

/// `num` in `(lower, upper]`
fn in_between(num: f64, lower: f64, upper: f64) -> bool {
    num <= upper && num > lower
}

/// Quantize an angle in degrees to one of the four gradient directions
///
/// | angle                          | result |
/// |--------------------------------|--------|
/// | (67.5, 90] or (-90, -67.5]     | 90     |
/// | (22.5, 67.5]                   | 45     |
/// | (-22.5, 22.5]                  | 0      |
/// | (-67.5, -22.5]                 | 135    |
/// | anything else                  | 0      |
pub fn round_angle(angle: f64) -> GradientAngle {
    if in_between(angle, 67.5, 90.0) || in_between(angle, -90.0, -67.5) {
        GradientAngle::Deg90
    } else if in_between(angle, 22.5, 67.5) {
        GradientAngle::Deg45
    } else if in_between(angle, -22.5, 22.5) {
        GradientAngle::Deg0
    } else if in_between(angle, -67.5, -22.5) {
        GradientAngle::Deg135
    } else {
        GradientAngle::Deg0
    }
}

/// Horizontal and vertical sobel responses at an interior position,
/// each clamped to `[0, 255]`
fn sobel_at(channel: &[u8], width: usize, row: usize, col: usize) -> (i32, i32) {
    let [nw, n, ne, w, e, sw, s, se] = eight_neighbours(channel, width, row, col).map(i32::from);

    let gx = (nw + 2 * w + sw) - (ne + 2 * e + se);
    let gy = (nw + 2 * n + ne) - (sw + 2 * s + se);

    (i32::from(clamp(gx)), i32::from(clamp(gy)))
}

/// Direction of a gradient
///
/// The quotient `gy / gx` is an integer one, both operands
/// are non-negative after clamping.
fn gradient_angle(gx: i32, gy: i32) -> GradientAngle {
    if gx == 0 {
        return GradientAngle::Deg90;
    }
    let ratio = f64::from(gy / gx);

    round_angle(ratio.atan() * 180.0 / PI)
}

/// Compute gradient magnitudes and directions of a gray channel
///
/// Border magnitudes are zero and border directions [`GradientAngle::Deg0`].
pub fn sobel_gradients(
    channel: &[u8], magnitudes: &mut [u8], angles: &mut [GradientAngle], width: usize,
    height: usize
) {
    magnitudes.fill(0);
    angles.fill(GradientAngle::Deg0);

    if width < 3 || height < 3 {
        return;
    }
    for row in 1..height - 1 {
        for col in 1..width - 1 {
            let (gx, gy) = sobel_at(channel, width, row, col);
            let position = row * width + col;

            magnitudes[position] = round_clamp(f64::from(gx * gx + gy * gy).sqrt());
            angles[position] = gradient_angle(gx, gy);
        }
    }
}

/// Zero every interior magnitude that is not strictly larger than both of
/// its neighbours along the gradient direction
///
/// Comparisons read `magnitudes`, results go to `out`, so suppressing a
/// pixel does not influence its neighbours.
pub fn non_maximum_suppression(
    magnitudes: &[u8], angles: &[GradientAngle], out: &mut [u8], width: usize, height: usize
) {
    out.copy_from_slice(magnitudes);

    if width < 3 || height < 3 {
        return;
    }
    for row in 1..height - 1 {
        for col in 1..width - 1 {
            let position = row * width + col;
            let at = |r: usize, c: usize| magnitudes[r * width + c];

            let (first, second) = match angles[position] {
                GradientAngle::Deg0 => (at(row, col - 1), at(row, col + 1)),
                GradientAngle::Deg45 => (at(row + 1, col - 1), at(row - 1, col + 1)),
                GradientAngle::Deg90 => (at(row + 1, col), at(row - 1, col)),
                GradientAngle::Deg135 => (at(row + 1, col + 1), at(row - 1, col - 1))
            };
            let magnitude = magnitudes[position];

            if magnitude <= first || magnitude <= second {
                out[position] = 0;
            }
        }
    }
}

/// Classify every pixel as no edge (0), weak (127) or strong (255)
pub fn double_threshold(channel: &mut [u8]) {
    for pixel in channel.iter_mut() {
        *pixel = if *pixel < LOWER_THRESHOLD {
            0
        } else if *pixel > UPPER_THRESHOLD {
            STRONG_EDGE
        } else {
            WEAK_EDGE
        };
    }
}

/// Detect edges in an image
///
/// The result is always a grayscale image of the same size.
#[derive(Default, Copy, Clone)]
pub struct EdgeDetect;

impl EdgeDetect {
    #[must_use]
    pub fn new() -> EdgeDetect {
        Self
    }
}

impl OperationsTrait for EdgeDetect {
    fn name(&self) -> &'static str {
        "Edge Detect"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.get_dimensions();

        // the caller's image is replaced only once every stage succeeded
        let mut scratch = image.clone();

        Smooth::new().execute(&mut scratch)?;
        Grayscale::new().execute(&mut scratch)?;

        let gray = scratch.red_or_gray().as_slice();

        let mut magnitudes = Channel::try_new(width * height)?;
        let mut angles = vec![GradientAngle::Deg0; width * height];

        sobel_gradients(
            gray,
            magnitudes.as_mut_slice(),
            &mut angles,
            width,
            height
        );

        let mut edges = Channel::try_new(width * height)?;

        non_maximum_suppression(
            magnitudes.as_slice(),
            &angles,
            edges.as_mut_slice(),
            width,
            height
        );
        double_threshold(edges.as_mut_slice());

        image.replace_channels(vec![edges], width, height, ColorSpace::Luma)
    }
}
