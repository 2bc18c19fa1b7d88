/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image owns one channel when grayscale and three (red, green, blue)
//! otherwise. Every channel has exactly `width * height` samples, a
//! property upheld by every constructor and by
//! [`replace_channels`](Image::replace_channels).

use pnm_core::colorspace::ColorSpace;

use crate::channel::Channel;
use crate::errors::ImageErrors;
use crate::metadata::ImageMetadata;

/// Represents a single image
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    pub(crate) channels: Vec<Channel>,
    pub(crate) metadata: ImageMetadata
}

/// Check that channels can make up an image of the given layout
fn check_layout(
    channels: &[Channel], width: usize, height: usize, colorspace: ColorSpace
) -> Result<(), ImageErrors> {
    if width == 0 || height == 0 {
        return Err(ImageErrors::InvalidDimensions(height, width));
    }
    if channels.len() != colorspace.num_components() {
        return Err(ImageErrors::DimensionsMisMatch(
            colorspace.num_components(),
            channels.len()
        ));
    }
    let expected = width
        .checked_mul(height)
        .ok_or(ImageErrors::InvalidDimensions(height, width))?;

    if let Some(channel) = channels.iter().find(|x| x.len() != expected) {
        return Err(ImageErrors::DimensionsMisMatch(expected, channel.len()));
    }
    Ok(())
}

impl Image {
    /// Create a new image from its channels
    ///
    /// # Errors
    /// - `InvalidDimensions` if width or height is zero
    /// - `DimensionsMisMatch` if the number of channels does not match the
    ///    colorspace, or a channel does not hold `width*height` samples
    pub fn new(
        channels: Vec<Channel>, width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        check_layout(&channels, width, height, colorspace)?;

        let mut metadata = ImageMetadata::default();

        metadata.set_dimensions(width, height);
        metadata.set_colorspace(colorspace);

        Ok(Image { channels, metadata })
    }
    /// Create an image with every sample set to `value`
    pub fn fill(
        value: u8, colorspace: ColorSpace, width: usize, height: usize
    ) -> Result<Image, ImageErrors> {
        if width == 0 || height == 0 {
            return Err(ImageErrors::InvalidDimensions(height, width));
        }
        let length = width
            .checked_mul(height)
            .ok_or(ImageErrors::InvalidDimensions(height, width))?;

        let channels = (0..colorspace.num_components())
            .map(|_| Channel::try_from_elm(length, value))
            .collect::<Result<Vec<Channel>, ImageErrors>>()?;

        Image::new(channels, width, height, colorspace)
    }
    /// Create an image from interleaved pixels
    ///
    /// For RGB, `pixels` is laid out as `[R,G,B,R,G,B...]`
    pub fn from_u8(
        pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        let components = colorspace.num_components();
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(components))
            .ok_or(ImageErrors::InvalidDimensions(height, width))?;

        if pixels.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        let mut channels = (0..components)
            .map(|_| Channel::try_new(expected / components))
            .collect::<Result<Vec<Channel>, ImageErrors>>()?;

        for (position, pixel) in pixels.chunks_exact(components).enumerate() {
            for (channel, sample) in channels.iter_mut().zip(pixel) {
                channel.as_mut_slice()[position] = *sample;
            }
        }
        Image::new(channels, width, height, colorspace)
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn get_dimensions(&self) -> (usize, usize) {
        self.metadata.get_dimensions()
    }
    /// Number of rows, the image height
    pub const fn rows(&self) -> usize {
        self.metadata.height
    }
    /// Number of columns, the image width
    pub const fn cols(&self) -> usize {
        self.metadata.width
    }
    /// Get the colorspace this image is stored
    /// in
    pub const fn get_colorspace(&self) -> ColorSpace {
        self.metadata.colorspace
    }
    /// True when the image holds a single gray channel
    pub const fn is_grayscale(&self) -> bool {
        self.metadata.colorspace.is_grayscale()
    }
    pub const fn get_metadata(&self) -> &ImageMetadata {
        &self.metadata
    }
    /// Return a reference to the underlying channels
    pub fn get_channels_ref(&self) -> &[Channel] {
        &self.channels
    }
    /// Return a mutable view into the image channels
    ///
    /// The number and size of the channels cannot change through this view,
    /// use [`replace_channels`](Image::replace_channels) for that.
    pub fn get_channels_mut(&mut self) -> &mut [Channel] {
        &mut self.channels
    }
    /// The red channel, or the only channel of a grayscale image
    pub fn red_or_gray(&self) -> &Channel {
        &self.channels[0]
    }
    /// The green channel, absent for grayscale images
    pub fn green(&self) -> Option<&Channel> {
        if self.is_grayscale() {
            return None;
        }
        self.channels.get(1)
    }
    /// The blue channel, absent for grayscale images
    pub fn blue(&self) -> Option<&Channel> {
        if self.is_grayscale() {
            return None;
        }
        self.channels.get(2)
    }
    /// Install new channels, possibly with new dimensions and colorspace
    ///
    /// The layout is validated before anything changes, on error
    /// the image is left as it was.
    pub fn replace_channels(
        &mut self, channels: Vec<Channel>, width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<(), ImageErrors> {
        check_layout(&channels, width, height, colorspace)?;

        self.channels = channels;
        self.metadata.set_dimensions(width, height);
        self.metadata.set_colorspace(colorspace);

        Ok(())
    }
    /// Interleave all channels into one vector
    ///
    /// RGB data comes out as `[R,G,B,R,G,B...]`
    pub fn flatten(&self) -> Vec<u8> {
        let components = self.channels.len();
        let length = self.rows() * self.cols();
        let mut out = vec![0; length * components];

        for (position, pixel) in out.chunks_exact_mut(components).enumerate() {
            for (sample, channel) in pixel.iter_mut().zip(&self.channels) {
                *sample = channel.as_slice()[position];
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pnm_core::colorspace::ColorSpace;

    use crate::channel::Channel;
    use crate::errors::ImageErrors;
    use crate::image::Image;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Image::fill(0, ColorSpace::RGB, 0, 3),
            Err(ImageErrors::InvalidDimensions(3, 0))
        ));
        assert!(matches!(
            Image::new(vec![Channel::from_vec(vec![])], 4, 0, ColorSpace::Luma),
            Err(ImageErrors::InvalidDimensions(0, 4))
        ));
    }

    #[test]
    fn test_channel_count_must_match() {
        let channels = vec![Channel::try_new(4).unwrap()];
        assert!(Image::new(channels, 2, 2, ColorSpace::RGB).is_err());
    }

    #[test]
    fn test_gray_has_no_green_or_blue() {
        let image = Image::fill(9, ColorSpace::Luma, 3, 2).unwrap();

        assert!(image.is_grayscale());
        assert!(image.green().is_none());
        assert!(image.blue().is_none());
        assert_eq!(image.red_or_gray().len(), 6);
        assert_eq!((image.rows(), image.cols()), (2, 3));
    }

    #[test]
    fn test_flatten_inverts_from_u8() {
        let mut pixels = vec![0_u8; 5 * 7 * 3];
        nanorand::WyRand::new().fill(&mut pixels);

        let image = Image::from_u8(&pixels, 5, 7, ColorSpace::RGB).unwrap();

        assert_eq!(image.red_or_gray().as_slice()[1], pixels[3]);
        assert_eq!(image.blue().unwrap().as_slice()[0], pixels[2]);
        assert_eq!(image.flatten(), pixels);
    }

    #[test]
    fn test_failed_replace_keeps_image() {
        let mut image = Image::fill(1, ColorSpace::RGB, 2, 2).unwrap();
        let before = image.clone();

        let bad = vec![Channel::try_new(3).unwrap()];
        assert!(image.replace_channels(bad, 1, 3, ColorSpace::RGB).is_err());
        assert_eq!(image, before);

        let good = vec![Channel::try_new(3).unwrap()];
        image.replace_channels(good, 1, 3, ColorSpace::Luma).unwrap();
        assert_eq!(image.get_dimensions(), (1, 3));
        assert!(image.is_grayscale());
    }
}
