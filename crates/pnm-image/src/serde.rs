/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::metadata::ImageMetadata;

impl Serialize for ImageMetadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        const STRUCT_FIELDS: usize = 6;
        let mut state = serializer.serialize_struct("Metadata", STRUCT_FIELDS)?;

        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("colorspace", &self.colorspace)?;
        state.serialize_field("format", &self.format.map(|x| x.to_string()))?;
        state.serialize_field("max_value", &self.max_value)?;
        let comments: Vec<_> = self
            .comments
            .iter()
            .map(|x| String::from_utf8_lossy(x))
            .collect();
        state.serialize_field("comments", &comments)?;

        state.end()
    }
}
