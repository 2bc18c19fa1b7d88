/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image metadata
//!
//! This module provides the ability to store image metadata and transfer it
//! from the decoder to the encoder

use pnm_core::colorspace::ColorSpace;
use pnm_ppm::{PnmHeader, PnmVersion};

/// Image metadata
///
/// The decoder sets this up while the encoder
/// reads the comments and max value back from it
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImageMetadata {
    // REMEMBER: If you add a field here add it's serialization
    // to the serde module
    pub(crate) width:      usize,
    pub(crate) height:     usize,
    pub(crate) colorspace: ColorSpace,
    pub(crate) format:     Option<PnmVersion>,
    pub(crate) max_value:  u16,
    pub(crate) comments:   Vec<Vec<u8>>
}

impl Default for ImageMetadata {
    fn default() -> Self {
        ImageMetadata {
            width:      0,
            height:     0,
            colorspace: ColorSpace::RGB,
            format:     None,
            max_value:  255,
            comments:   vec![]
        }
    }
}

impl ImageMetadata {
    /// Create metadata describing a decoded header
    pub fn from_header(header: &PnmHeader) -> ImageMetadata {
        ImageMetadata {
            width:      header.width,
            height:     header.height,
            colorspace: header.version.colorspace(),
            format:     Some(header.version),
            max_value:  header.max_value,
            comments:   header.comments.clone()
        }
    }
    /// Get image dimensions as a tuple of (width,height)
    pub const fn get_dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    pub(crate) fn set_dimensions(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }
    pub const fn get_colorspace(&self) -> ColorSpace {
        self.colorspace
    }
    pub(crate) fn set_colorspace(&mut self, colorspace: ColorSpace) {
        self.colorspace = colorspace;
    }
    /// The format the image was decoded from, if any
    pub const fn get_format(&self) -> Option<PnmVersion> {
        self.format
    }
    pub const fn get_max_value(&self) -> u16 {
        self.max_value
    }
    /// Header comments as raw bytes, each starting with `#`
    pub fn get_comments(&self) -> &[Vec<u8>] {
        &self.comments
    }
    /// Build the header used to write this image with `version`
    pub fn to_header(&self, version: PnmVersion) -> PnmHeader {
        PnmHeader {
            version,
            width: self.width,
            height: self.height,
            max_value: self.max_value,
            comments: self.comments.clone()
        }
    }
}
