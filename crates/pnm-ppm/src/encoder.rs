/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use pnm_core::log::trace;

use crate::errors::PPMErrors;
use crate::header::PnmHeader;

/// A PNM encoder
///
/// The version in the header decides the output layout,
/// P2/P3 write one decimal sample per line, P5/P6 write raw bytes.
pub struct PPMEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PPMEncoder<'a, W> {
    pub fn new(writer: &'a mut W) -> PPMEncoder<'a, W> {
        Self { writer }
    }
    /// Write the magic number, comments, dimensions and max value
    pub fn write_headers(&mut self, header: &PnmHeader) -> Result<(), PPMErrors> {
        if header.max_value == 0 || header.max_value > 255 {
            return Err(PPMErrors::InvalidMaxValue(header.max_value));
        }
        if let Some(bad) = header
            .comments
            .iter()
            .find(|x| !x.starts_with(b"#") || x.contains(&b'\n'))
        {
            let bad = String::from_utf8_lossy(bad).into_owned();
            return Err(PPMErrors::InvalidComment(bad));
        }
        writeln!(self.writer, "{}", header.version)?;

        for comment in &header.comments {
            self.writer.write_all(comment)?;
            self.writer.write_all(b"\n")?;
        }
        writeln!(self.writer, "{} {}", header.width, header.height)?;
        writeln!(self.writer, "{}", header.max_value)?;

        Ok(())
    }
    /// Encode interleaved `data` described by `header`
    ///
    /// `data` must hold exactly `width*height*components` samples
    pub fn encode(&mut self, header: &PnmHeader, data: &[u8]) -> Result<(), PPMErrors> {
        let expected = header
            .num_samples()
            .ok_or(PPMErrors::Static("Image dimensions overflow"))?;

        if expected != data.len() {
            return Err(PPMErrors::WrongInputSize(expected, data.len()));
        }
        trace!("Encoding {} samples as {}", expected, header.version);

        self.write_headers(header)?;

        if header.version.is_ascii() {
            for sample in data {
                writeln!(self.writer, "{sample}")?;
            }
        } else {
            self.writer.write_all(data)?;
        }
        self.writer.flush()?;

        Ok(())
    }
}
