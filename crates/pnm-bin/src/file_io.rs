/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use log::info;
use pnm_core::options::DecoderOptions;
use pnm_image::codecs::ppm::PPMDecoder;
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::traits::IntoImage;

/// A ppm file on disk, decoded when the pipeline asks for it
pub struct PnmFile {
    file_path: PathBuf,
    options:   DecoderOptions
}

impl PnmFile {
    pub fn new(file_path: PathBuf, options: DecoderOptions) -> PnmFile {
        PnmFile { file_path, options }
    }
}

impl IntoImage for PnmFile {
    fn into_image(self) -> Result<Image, ImageErrors> {
        let data = std::fs::read(&self.file_path)?;

        info!("Read {} bytes from {:?}", data.len(), self.file_path);

        PPMDecoder::new_with_options(self.options, &data).into_image()
    }
}
