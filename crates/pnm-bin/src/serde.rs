/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use pnm_image::metadata::ImageMetadata;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata<'a> {
    file:     &'a Path,
    size:     u64,
    metadata: &'a ImageMetadata
}

impl<'a> Metadata<'a> {
    pub fn new(file: &'a Path, size: u64, metadata: &'a ImageMetadata) -> Metadata<'a> {
        Metadata {
            file,
            size,
            metadata
        }
    }
}

impl Serialize for Metadata<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageMetadata", 3)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("metadata", &self.metadata)?;

        state.end()
    }
}
