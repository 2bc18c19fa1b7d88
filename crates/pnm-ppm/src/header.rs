/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Display, Formatter};

use pnm_core::colorspace::ColorSpace;

/// The magic numbers understood by this crate
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PnmVersion {
    /// Grayscale, ASCII samples
    P2,
    /// RGB, ASCII samples
    P3,
    /// Grayscale, binary samples
    P5,
    /// RGB, binary samples
    P6
}

impl PnmVersion {
    /// Pick the version used to write an image
    ///
    /// Grayscale images go to P2/P5, color images to P3/P6.
    pub const fn for_output(grayscale: bool, ascii: bool) -> PnmVersion {
        match (grayscale, ascii) {
            (true, true) => PnmVersion::P2,
            (true, false) => PnmVersion::P5,
            (false, true) => PnmVersion::P3,
            (false, false) => PnmVersion::P6
        }
    }
    pub const fn is_ascii(self) -> bool {
        matches!(self, PnmVersion::P2 | PnmVersion::P3)
    }
    pub const fn is_grayscale(self) -> bool {
        matches!(self, PnmVersion::P2 | PnmVersion::P5)
    }
    pub const fn colorspace(self) -> ColorSpace {
        if self.is_grayscale() {
            ColorSpace::Luma
        } else {
            ColorSpace::RGB
        }
    }
    /// File extension conventionally used for this version
    pub const fn extension(self) -> &'static str {
        if self.is_grayscale() {
            "pgm"
        } else {
            "ppm"
        }
    }
}

impl Display for PnmVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P2 => write!(f, "P2"),
            Self::P3 => write!(f, "P3"),
            Self::P5 => write!(f, "P5"),
            Self::P6 => write!(f, "P6")
        }
    }
}

/// Everything a PNM header carries
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PnmHeader {
    pub version:   PnmVersion,
    /// Number of columns
    pub width:     usize,
    /// Number of rows
    pub height:    usize,
    pub max_value: u16,
    /// Comment lines as raw bytes, each including the leading `#`
    pub comments:  Vec<Vec<u8>>
}

impl PnmHeader {
    #[must_use]
    pub fn new(version: PnmVersion, width: usize, height: usize) -> PnmHeader {
        PnmHeader {
            version,
            width,
            height,
            max_value: 255,
            comments: vec![]
        }
    }
    /// Total number of samples the body of this image holds
    pub fn num_samples(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(self.version.colorspace().num_components())
    }
}

#[cfg(test)]
mod tests {
    use crate::header::{PnmHeader, PnmVersion};

    #[test]
    fn test_output_version_choice() {
        assert_eq!(PnmVersion::for_output(true, true), PnmVersion::P2);
        assert_eq!(PnmVersion::for_output(true, false), PnmVersion::P5);
        assert_eq!(PnmVersion::for_output(false, true), PnmVersion::P3);
        assert_eq!(PnmVersion::for_output(false, false), PnmVersion::P6);
        assert_eq!(PnmVersion::P5.extension(), "pgm");
        assert_eq!(PnmVersion::P3.extension(), "ppm");
        assert_eq!(PnmVersion::P6.to_string(), "P6");
    }

    #[test]
    fn test_num_samples() {
        assert_eq!(PnmHeader::new(PnmVersion::P6, 4, 3).num_samples(), Some(36));
        assert_eq!(PnmHeader::new(PnmVersion::P2, 4, 3).num_samples(), Some(12));
        assert_eq!(
            PnmHeader::new(PnmVersion::P6, usize::MAX, 3).num_samples(),
            None
        );
    }
}
