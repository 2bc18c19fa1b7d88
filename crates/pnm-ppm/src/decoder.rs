/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnm_core::bytestream::ByteReader;
use pnm_core::colorspace::ColorSpace;
use pnm_core::log::{info, warn};
use pnm_core::options::DecoderOptions;

use crate::errors::PPMDecodeErrors;
use crate::header::{PnmHeader, PnmVersion};

/// An instance of a PPM decoder
///
/// The decoder can currently decode P3 and P6 formats
pub struct PPMDecoder<'a> {
    header:  Option<PnmHeader>,
    reader:  ByteReader<'a>,
    options: DecoderOptions
}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data:PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use pnm_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }
    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded data.
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder {
            header: None,
            reader: ByteReader::new(data),
            options
        }
    }
    /// Read PPM headers and store them in internal state
    ///
    /// Calling this more than once is a no-op
    pub fn read_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.header.is_some() {
            return Ok(());
        }
        if !self.reader.has(3) {
            let len = self.reader.remaining();
            let msg = format!("Expected at least 3 bytes in header but stream has {len}");

            return Err(PPMDecodeErrors::Generic(msg));
        }
        let p = self.reader.get_u8();
        let version = self.reader.get_u8();

        if p != b'P' {
            let msg = format!("Expected P as first PPM byte but got '{}' ", p as char);

            return Err(PPMDecodeErrors::Generic(msg));
        }
        let version = match version {
            b'3' => PnmVersion::P3,
            b'6' => PnmVersion::P6,
            _ => {
                let msg = format!(
                    "Invalid magic number P{}, expected P3 or P6 for input",
                    version as char
                );
                return Err(PPMDecodeErrors::UnsupportedImpl(msg));
            }
        };
        if !self.reader.peek_u8().is_some_and(|x| x.is_ascii_whitespace()) {
            return Err(PPMDecodeErrors::InvalidHeader(
                "Magic number must be followed by whitespace".to_string()
            ));
        }
        info!("Version: {}", version);

        let mut comments = vec![];

        skip_spaces(&mut self.reader, Some(&mut comments));
        let width = get_integer(&mut self.reader, "width")?;
        skip_spaces(&mut self.reader, Some(&mut comments));
        let height = get_integer(&mut self.reader, "height")?;

        if width == 0 || height == 0 {
            return Err(PPMDecodeErrors::ZeroDimensions(width, height));
        }
        if width > self.options.get_max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }
        info!("Width: {}, height: {}", width, height);

        skip_spaces(&mut self.reader, Some(&mut comments));
        let max_value = get_integer(&mut self.reader, "max value")?;

        if max_value == 0 || max_value > 255 {
            let msg = format!("Max value {max_value} is not in the supported range 1..=255");
            return Err(PPMDecodeErrors::UnsupportedImpl(msg));
        }
        // a single whitespace separates the header from the pixels
        match self.reader.get_u8_err() {
            Ok(byte) if byte.is_ascii_whitespace() => (),
            _ => {
                return Err(PPMDecodeErrors::InvalidHeader(
                    "Max value must be followed by a whitespace".to_string()
                ))
            }
        }
        info!("Max value: {}", max_value);
        info!("Comments: {}", comments.len());

        self.header = Some(PnmHeader {
            version,
            width,
            height,
            // checked above
            max_value: max_value as u16,
            comments
        });

        Ok(())
    }

    /// Return the parsed header or none if headers
    /// are not decoded
    pub const fn get_header(&self) -> Option<&PnmHeader> {
        self.header.as_ref()
    }
    /// Return the image colorspace or none if
    /// headers aren't decoded
    pub fn get_colorspace(&self) -> Option<ColorSpace> {
        self.header.as_ref().map(|x| x.version.colorspace())
    }
    /// Return image dimensions as `(width, height)` or none if headers
    /// aren't decoded
    pub fn get_dimensions(&self) -> Option<(usize, usize)> {
        self.header.as_ref().map(|x| (x.width, x.height))
    }

    /// Decode a ppm encoded file and return the interleaved RGB bytes from it
    pub fn decode(&mut self) -> Result<Vec<u8>, PPMDecodeErrors> {
        self.read_headers()?;

        let header = match &self.header {
            Some(header) => header,
            None => return Err(PPMDecodeErrors::GenericStatic("Headers not decoded"))
        };
        let size = header.num_samples().ok_or(PPMDecodeErrors::GenericStatic(
            "Image dimensions overflow"
        ))?;
        let max_value = header.max_value;
        let strict = self.options.get_strict_mode();

        let data = if header.version.is_ascii() {
            decode_ascii(&mut self.reader, size, max_value)?
        } else {
            let remaining = self.reader.remaining();

            if remaining < size {
                return Err(PPMDecodeErrors::NotEnoughBytes(size, remaining));
            }
            if remaining > size {
                if strict {
                    let msg = format!("Found {} trailing bytes after image data", remaining - size);
                    return Err(PPMDecodeErrors::Generic(msg));
                }
                warn!("Ignoring {} trailing bytes after image data", remaining - size);
            }
            let data = self.reader.get_as_ref(size)?.to_vec();

            if let Some(sample) = data.iter().find(|x| u16::from(**x) > max_value) {
                if strict {
                    return Err(PPMDecodeErrors::SampleOutOfRange(
                        usize::from(*sample),
                        max_value
                    ));
                }
                warn!("Sample {} exceeds max value {}", sample, max_value);
            }
            data
        };
        Ok(data)
    }
}

/// Read `size` whitespace separated decimal samples
fn decode_ascii(
    reader: &mut ByteReader, size: usize, max_value: u16
) -> Result<Vec<u8>, PPMDecodeErrors> {
    let mut data = Vec::with_capacity(size);

    for i in 0..size {
        skip_spaces(reader, None);

        if reader.eof() {
            return Err(PPMDecodeErrors::NotEnoughBytes(size, i));
        }
        let sample = get_integer(reader, "sample")?;

        if sample > usize::from(max_value) {
            return Err(PPMDecodeErrors::SampleOutOfRange(sample, max_value));
        }
        // max value is at most 255
        data.push(sample as u8);
    }
    skip_spaces(reader, None);

    if !reader.eof() {
        warn!("Ignoring {} trailing bytes after image data", reader.remaining());
    }
    Ok(data)
}

/// Read a decimal integer, at least one digit must be present
fn get_integer(reader: &mut ByteReader, what: &str) -> Result<usize, PPMDecodeErrors> {
    let mut value = 0_usize;
    let mut digits = 0;

    while let Some(byte) = reader.peek_u8() {
        if !byte.is_ascii_digit() {
            break;
        }
        reader.skip(1);
        digits += 1;

        value = value
            .checked_mul(10)
            .and_then(|x| x.checked_add(usize::from(byte - b'0')))
            .ok_or_else(|| PPMDecodeErrors::InvalidHeader(format!("The {what} is too large")))?;
    }
    if digits == 0 {
        let found = reader.peek_u8().map_or("end of file".to_string(), |x| {
            format!("'{}'", x as char)
        });
        let msg = format!("Expected a number for the {what} but found {found}");
        return Err(PPMDecodeErrors::InvalidHeader(msg));
    }
    Ok(value)
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
///
/// Comment lines are pushed to `comments`, when present, byte for byte
/// without their line ending.
fn skip_spaces(reader: &mut ByteReader, mut comments: Option<&mut Vec<Vec<u8>>>) {
    while let Some(byte) = reader.peek_u8() {
        if byte == b'#' {
            let start = reader.get_position();

            while reader.peek_u8().is_some_and(|x| x != b'\n') {
                reader.skip(1);
            }
            let end = reader.get_position();

            if let Some(comments) = comments.as_mut() {
                reader.rewind(end - start);

                if let Ok(line) = reader.get_as_ref(end - start) {
                    let line = line.strip_suffix(b"\r").unwrap_or(line);
                    comments.push(line.to_vec());
                }
            }
        } else if byte.is_ascii_whitespace() {
            reader.skip(1);
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use pnm_core::options::DecoderOptions;

    use crate::decoder::PPMDecoder;
    use crate::errors::PPMDecodeErrors;
    use crate::header::PnmVersion;

    #[test]
    fn test_ascii_with_comments() {
        let data = b"P3\n# made by hand\n# second line\n2 1\n255\n255 0 0\n0 0 255\n";
        let mut decoder = PPMDecoder::new(data);
        let pixels = decoder.decode().unwrap();

        assert_eq!(pixels, [255, 0, 0, 0, 0, 255]);

        let header = decoder.get_header().unwrap();
        assert_eq!(header.version, PnmVersion::P3);
        assert_eq!(
            header.comments,
            [b"# made by hand".to_vec(), b"# second line".to_vec()]
        );
        assert_eq!(decoder.get_dimensions(), Some((2, 1)));
    }

    #[test]
    fn test_comments_between_tokens() {
        let data = b"P6 #inline\r\n1 #w\n1\n255\n\x01\x02\x03";
        let mut decoder = PPMDecoder::new(data);

        assert_eq!(decoder.decode().unwrap(), [1, 2, 3]);
        assert_eq!(
            decoder.get_header().unwrap().comments,
            [b"#inline".to_vec(), b"#w".to_vec()]
        );
    }

    #[test]
    fn test_comment_bytes_are_kept() {
        let data = b"P5\n# \xa9 caf\xe9\r\n1 1\n255\n\x07";
        let mut decoder = PPMDecoder::new(data);

        assert_eq!(decoder.decode().unwrap(), [7]);
        assert_eq!(
            decoder.get_header().unwrap().comments,
            [b"# \xa9 caf\xe9".to_vec()]
        );
    }

    #[test]
    fn test_binary_sample_may_be_whitespace() {
        // first sample is a newline byte, it must not be swallowed by the header
        let data = b"P6\n1 1\n255\n\n\x20\x09";
        let mut decoder = PPMDecoder::new(data);

        assert_eq!(decoder.decode().unwrap(), [b'\n', 0x20, 0x09]);
    }

    #[test]
    fn test_rejects_grayscale_input() {
        let mut decoder = PPMDecoder::new(b"P5\n1 1\n255\n\x00");

        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::UnsupportedImpl(_))
        ));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let mut decoder = PPMDecoder::new(b"P6\n0 4\n255\n");

        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::ZeroDimensions(0, 4))
        ));
    }

    #[test]
    fn test_rejects_large_dimensions() {
        let options = DecoderOptions::default().set_max_width(2);
        let mut decoder = PPMDecoder::new_with_options(options, b"P6\n3 1\n255\n123456789");

        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::LargeDimensions(2, 3))
        ));
    }

    #[test]
    fn test_short_binary_body() {
        let mut decoder = PPMDecoder::new(b"P6\n2 1\n255\n\x00\x00\x00");

        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::NotEnoughBytes(6, 3))
        ));
    }

    #[test]
    fn test_ascii_sample_above_max() {
        let mut decoder = PPMDecoder::new(b"P3\n1 1\n15\n1 2 16\n");

        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::SampleOutOfRange(16, 15))
        ));
    }

    #[test]
    fn test_trailing_bytes_strict_mode() {
        let data = b"P6\n1 1\n255\n\x01\x02\x03\x04";

        assert!(PPMDecoder::new(data).decode().is_ok());

        let options = DecoderOptions::default().set_strict_mode(true);
        assert!(PPMDecoder::new_with_options(options, data).decode().is_err());
    }

    #[test]
    fn test_missing_number() {
        let mut decoder = PPMDecoder::new(b"P3\nabc 1\n255\n");

        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::InvalidHeader(_))
        ));
    }
}
