/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Neighbourhood sampling for spatial filters
//!
//! Positions passed to the samplers must be interior ones,
//! i.e `0 < row < height - 1` and `0 < col < width - 1`.
//! Border positions panic on out of bounds indexing.

/// Return the values above, left, right and below `(row, col)`, in that order
#[inline]
pub fn four_neighbours(channel: &[u8], width: usize, row: usize, col: usize) -> [u8; 4] {
    let position = row * width + col;

    [
        channel[position - width],
        channel[position - 1],
        channel[position + 1],
        channel[position + width]
    ]
}

/// Return the eight values around `(row, col)` in row-major order
///
/// That is above-left, above, above-right, left, right,
/// below-left, below and below-right.
#[inline]
pub fn eight_neighbours(channel: &[u8], width: usize, row: usize, col: usize) -> [u8; 8] {
    let above = (row - 1) * width + col;
    let current = row * width + col;
    let below = (row + 1) * width + col;

    [
        channel[above - 1],
        channel[above],
        channel[above + 1],
        channel[current - 1],
        channel[current + 1],
        channel[below - 1],
        channel[below],
        channel[below + 1]
    ]
}

/// Run `function` on every interior pixel of `in_channel`, storing the result
/// in `out_channel`
///
/// Border pixels of `out_channel` are set to zero. Images with fewer
/// than three rows or columns have no interior and come out all zero.
///
/// `function` receives the input channel, the row and the column.
pub fn spatial_interior<F>(
    in_channel: &[u8], out_channel: &mut [u8], width: usize, height: usize, function: F
) where
    F: Fn(&[u8], usize, usize) -> u8
{
    out_channel.fill(0);

    if width < 3 || height < 3 {
        return;
    }
    for row in 1..height - 1 {
        for col in 1..width - 1 {
            out_channel[row * width + col] = function(in_channel, row, col);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::spatial::{eight_neighbours, four_neighbours, spatial_interior};

    #[rustfmt::skip]
    const GRID: [u8; 12] = [
        1, 2, 3, 4,
        5, 6, 7, 8,
        9, 10, 11, 12
    ];

    #[test]
    fn test_four_neighbours() {
        assert_eq!(four_neighbours(&GRID, 4, 1, 1), [2, 5, 7, 10]);
        assert_eq!(four_neighbours(&GRID, 4, 1, 2), [3, 6, 8, 11]);
    }

    #[test]
    fn test_eight_neighbours() {
        assert_eq!(
            eight_neighbours(&GRID, 4, 1, 2),
            [2, 3, 4, 6, 8, 10, 11, 12]
        );
    }

    #[test]
    fn test_border_is_zeroed() {
        let mut out = [99; 12];
        spatial_interior(&GRID, &mut out, 4, 3, |channel, row, col| channel[row * 4 + col]);

        assert_eq!(out, [0, 0, 0, 0, 0, 6, 7, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_no_interior() {
        let mut out = [99; 4];
        spatial_interior(&GRID[..4], &mut out, 2, 2, |_, _, _| 1);

        assert_eq!(out, [0; 4]);
    }
}
