/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits shared by decoders and image operations
use pnm_core::colorspace::ColorSpace;

use crate::errors::ImageErrors;
use crate::image::Image;

/// This encapsulates an image operation.
///
/// All operations that can be stored in a workflow
/// need to encapsulate this struct.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the image
    ///
    /// This is called by [`execute`](OperationsTrait::execute) after
    /// checking that the image colorspace is supported.
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Colorspaces this operation accepts
    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[ColorSpace::RGB, ColorSpace::Luma]
    }

    /// Run this operation
    ///
    /// # Errors
    /// `UnsupportedColorspace` if the image colorspace is not one of
    /// [`supported_colorspaces`](OperationsTrait::supported_colorspaces),
    /// otherwise whatever the operation reports
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let colorspace = image.get_colorspace();

        if !self.supported_colorspaces().contains(&colorspace) {
            return Err(ImageErrors::UnsupportedColorspace(
                colorspace,
                self.name(),
                self.supported_colorspaces()
            ));
        }
        self.execute_impl(image)
    }
}

/// Anything that can be turned into an image
///
/// Decoders implement this so that pipelines can consume them
pub trait IntoImage {
    fn into_image(self) -> Result<Image, ImageErrors>;
}

impl IntoImage for Image {
    fn into_image(self) -> Result<Image, ImageErrors> {
        Ok(self)
    }
}
