/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

/// Errors possible during decoding
pub enum PPMDecodeErrors {
    Generic(String),
    GenericStatic(&'static str),
    InvalidHeader(String),
    UnsupportedImpl(String),
    /// The image has a zero width or height
    ZeroDimensions(usize, usize),
    /// expected, found
    LargeDimensions(usize, usize),
    /// expected, found
    NotEnoughBytes(usize, usize),
    /// sample, max value
    SampleOutOfRange(usize, u16)
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic(val) => {
                writeln!(f, "{val}")
            }
            Self::GenericStatic(val) => writeln!(f, "{val}"),
            Self::InvalidHeader(val) => {
                writeln!(f, "Invalid header, reason: {val}")
            }
            Self::UnsupportedImpl(val) => {
                writeln!(f, "Unsupported image, reason: {val}")
            }
            Self::ZeroDimensions(width, height) => {
                writeln!(
                    f,
                    "Image dimensions must be greater than zero, found width {width} and height {height}"
                )
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::NotEnoughBytes(expected, found) => {
                writeln!(
                    f,
                    "Not enough image data, expected {expected} samples but found {found}"
                )
            }
            Self::SampleOutOfRange(sample, max) => {
                writeln!(f, "Sample {sample} is larger than the max value {max}")
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMDecodeErrors {}

impl From<&'static str> for PPMDecodeErrors {
    fn from(value: &'static str) -> Self {
        Self::GenericStatic(value)
    }
}

/// Errors possible during encoding
pub enum PPMErrors {
    Static(&'static str),
    IoErrors(std::io::Error),
    /// expected, found
    WrongInputSize(usize, usize),
    InvalidMaxValue(u16),
    InvalidComment(String)
}

impl Debug for PPMErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(err) => writeln!(f, "{err}"),
            Self::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            Self::WrongInputSize(expected, found) => {
                writeln!(f, "Expected input of size {expected} but found {found}")
            }
            Self::InvalidMaxValue(max) => {
                writeln!(f, "Max value {max} is not in the range 1..=255")
            }
            Self::InvalidComment(comment) => {
                writeln!(f, "Comment {comment:?} must start with '#' and span one line")
            }
        }
    }
}

impl Display for PPMErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMErrors {}

impl From<std::io::Error> for PPMErrors {
    fn from(value: std::io::Error) -> Self {
        PPMErrors::IoErrors(value)
    }
}
