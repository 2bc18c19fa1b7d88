/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single image channel
//!
//! A channel is a row-major buffer of `u8` samples, the pixel at
//! `(row, col)` lives at index `row * width + col`. The channel does not
//! know its own dimensions, the [`Image`](crate::image::Image) holding it does.

use crate::errors::ImageErrors;

/// Samples for one color component of an image
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Channel {
    data: Vec<u8>
}

impl Channel {
    /// Create a zeroed channel of `length` samples
    ///
    /// # Errors
    /// Returns `AllocationFailure` if the memory cannot be reserved
    pub fn try_new(length: usize) -> Result<Channel, ImageErrors> {
        Channel::try_from_elm(length, 0)
    }
    /// Create a channel of `length` samples, each set to `elm`
    pub fn try_from_elm(length: usize, elm: u8) -> Result<Channel, ImageErrors> {
        let mut data = Vec::new();

        data.try_reserve_exact(length)
            .map_err(|_| ImageErrors::AllocationFailure(length))?;
        data.resize(length, elm);

        Ok(Channel { data })
    }
    /// Wrap already existing samples
    pub fn from_vec(data: Vec<u8>) -> Channel {
        Channel { data }
    }
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
