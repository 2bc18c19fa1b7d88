/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image Colorspace information

/// Colorspaces an image can be stored in
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColorSpace {
    /// Red, Green , Blue
    RGB,
    /// Grayscale colorspace
    Luma
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::Luma => 1
        }
    }

    pub const fn is_grayscale(&self) -> bool {
        matches!(self, Self::Luma)
    }

    /// Return the colorspace with `num` components, if any
    pub const fn from_components(num: usize) -> Option<ColorSpace> {
        match num {
            1 => Some(Self::Luma),
            3 => Some(Self::RGB),
            _ => None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::colorspace::ColorSpace;

    #[test]
    fn test_components_agree() {
        for colorspace in [ColorSpace::RGB, ColorSpace::Luma] {
            let components = colorspace.num_components();
            assert_eq!(ColorSpace::from_components(components), Some(colorspace));
        }
        assert_eq!(ColorSpace::from_components(2), None);
    }
}
