/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Four-connected flood fill on RGB images
//!
//! Starting from a seed pixel, every pixel reachable through up, down, left
//! and right steps that has exactly the seed's original color is recolored.
use pnm_core::colorspace::ColorSpace;
use pnm_core::log::trace;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::OperationsTrait;

/// Recolor the region around a seed pixel
#[derive(Copy, Clone)]
pub struct FloodFill {
    row:   usize,
    col:   usize,
    color: [u8; 3]
}

impl FloodFill {
    /// Create a new flood fill seeded at `(row, col)` painting `color`
    /// as `[red, green, blue]`
    #[must_use]
    pub fn new(row: usize, col: usize, color: [u8; 3]) -> FloodFill {
        FloodFill { row, col, color }
    }
}

impl OperationsTrait for FloodFill {
    fn name(&self) -> &'static str {
        "Flood Fill"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.get_dimensions();

        if let [r, g, b] = image.get_channels_mut() {
            let count = flood_fill(
                [r.as_mut_slice(), g.as_mut_slice(), b.as_mut_slice()],
                width,
                height,
                (self.row, self.col),
                self.color
            )?;
            trace!("Flood fill recolored {} pixels", count);
            return Ok(());
        }
        Err(ImageErrors::GenericStr("Flood fill expects three channels"))
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[ColorSpace::RGB]
    }
}

/// Flood fill three planar channels in place
///
/// The seed's color is captured before anything is written, a fill
/// color equal to it terminates without changes. Each pixel is visited
/// at most once, neighbours are explored up, down, left then right.
///
/// Returns the number of recolored pixels.
///
/// # Errors
/// `OutOfRangeSeed` if `(row, col)` lies outside the image, nothing is
/// modified in that case.
pub fn flood_fill(
    channels: [&mut [u8]; 3], width: usize, height: usize, (row, col): (usize, usize),
    color: [u8; 3]
) -> Result<usize, ImageErrors> {
    if row >= height || col >= width {
        return Err(ImageErrors::OutOfRangeSeed {
            row,
            col,
            rows: height,
            cols: width
        });
    }
    let [red, green, blue] = channels;

    let seed = row * width + col;
    let target = [red[seed], green[seed], blue[seed]];

    if target == color {
        return Ok(0);
    }
    let mut visited = vec![false; width * height];
    let mut stack = vec![(row, col)];
    let mut count = 0;

    while let Some((r, c)) = stack.pop() {
        let position = r * width + c;

        if visited[position] {
            continue;
        }
        visited[position] = true;

        if [red[position], green[position], blue[position]] != target {
            continue;
        }
        red[position] = color[0];
        green[position] = color[1];
        blue[position] = color[2];
        count += 1;

        // pushed in reverse so up is popped first
        if c + 1 < width {
            stack.push((r, c + 1));
        }
        if c > 0 {
            stack.push((r, c - 1));
        }
        if r + 1 < height {
            stack.push((r + 1, c));
        }
        if r > 0 {
            stack.push((r - 1, c));
        }
    }
    Ok(count)
}
