/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};

use pnm_core::colorspace::ColorSpace;
use pnm_ppm::{PPMDecodeErrors, PPMErrors};

/// All errors possible during image processing
pub enum ImageErrors {
    /// rows, cols
    InvalidDimensions(usize, usize),
    /// A flood fill seed lies outside the image
    OutOfRangeSeed {
        row:  usize,
        col:  usize,
        rows: usize,
        cols: usize
    },
    /// Contrast stretch on an image whose pixels all hold this value
    DegenerateContrast(u8),
    /// Number of bytes we failed to allocate
    AllocationFailure(usize),
    /// expected, found
    DimensionsMisMatch(usize, usize),
    /// found, operation, supported
    UnsupportedColorspace(ColorSpace, &'static str, &'static [ColorSpace]),
    NoImageForOperations,
    ImageDecodeErrors(PPMDecodeErrors),
    EncodeErrors(PPMErrors),
    IoErrors(std::io::Error),
    GenericString(String),
    GenericStr(&'static str)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions(rows, cols) => {
                writeln!(
                    f,
                    "Invalid dimensions, rows ({rows}) and columns ({cols}) must be greater than zero"
                )
            }
            Self::OutOfRangeSeed {
                row,
                col,
                rows,
                cols
            } => {
                writeln!(
                    f,
                    "Seed ({row},{col}) is outside an image of {rows} rows and {cols} columns"
                )
            }
            Self::DegenerateContrast(value) => {
                writeln!(
                    f,
                    "Cannot stretch contrast, every pixel has the value {value}"
                )
            }
            Self::AllocationFailure(bytes) => {
                writeln!(f, "Could not allocate {bytes} bytes")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} but found {found}"
                )
            }
            Self::UnsupportedColorspace(present, operation, supported) => {
                writeln!(
                    f,
                    "Unsupported colorspace {present:?}, for the operation {operation}\nSupported colorspaces are {supported:?}"
                )
            }
            Self::NoImageForOperations => {
                writeln!(f, "No image found for which we can execute operations")
            }
            Self::ImageDecodeErrors(err) => {
                writeln!(f, "Error decoding image: {err:?}")
            }
            Self::EncodeErrors(err) => {
                writeln!(f, "Error encoding image: {err:?}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error: {err}")
            }
            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
            Self::GenericStr(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl From<PPMDecodeErrors> for ImageErrors {
    fn from(from: PPMDecodeErrors) -> Self {
        ImageErrors::ImageDecodeErrors(from)
    }
}

impl From<PPMErrors> for ImageErrors {
    fn from(from: PPMErrors) -> Self {
        ImageErrors::EncodeErrors(from)
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(from: std::io::Error) -> Self {
        ImageErrors::IoErrors(from)
    }
}

impl From<String> for ImageErrors {
    fn from(from: String) -> Self {
        ImageErrors::GenericString(from)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(from: &'static str) -> Self {
        ImageErrors::GenericStr(from)
    }
}
