/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Saturate `value` into the range of a pixel
///
/// Negative values become 0, values above 255 become 255.
#[inline(always)]
pub fn clamp(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Round `value` half away from zero and saturate it into a pixel
#[inline]
pub fn round_clamp(value: f64) -> u8 {
    // `as` saturates on overflow and maps NaN to 0
    clamp(value.round() as i32)
}
