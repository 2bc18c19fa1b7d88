/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use log::warn;
use pnm_core::options::DecoderOptions;
use pnm_image::codecs::ppm::PPMDecoder;
use pnm_image::errors::ImageErrors;
use pnm_image::metadata::ImageMetadata;

use crate::serde::Metadata;

/// Read the header of `in_file` and print its metadata to standard output.
pub fn probe_input_file(in_file: &Path) -> Result<(), ImageErrors> {
    let data = std::fs::read(in_file)?;
    // set to high to remove restrictions.
    // We'll just be reading headers so it doesn't matter
    let options = DecoderOptions::new_cmd()
        .set_max_height(usize::MAX)
        .set_max_width(usize::MAX);

    let mut decoder = PPMDecoder::new_with_options(options, &data);

    if let Err(err) = decoder.read_headers() {
        warn!("Could not probe {:?}, reason {:?}", in_file, err);
        return Ok(());
    }
    if let Some(header) = decoder.get_header() {
        let metadata = ImageMetadata::from_header(header);
        let real_metadata = Metadata::new(in_file, data.len() as u64, &metadata);

        let json = serde_json::to_string_pretty(&real_metadata)
            .map_err(|x| ImageErrors::GenericString(x.to_string()))?;

        println!("{json}");
    }
    Ok(())
}
